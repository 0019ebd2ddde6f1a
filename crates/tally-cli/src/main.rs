//! tally: point-count tally for minerals and textures
//!
//! Commands: init, add, list, inc, dec, reset, set, rm, reset-all, clear,
//! mv, total, export, import, catalog, watch, completions

mod format;
mod logging;

use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{bail, Context};
use chrono::Utc;
use clap::{CommandFactory, Parser};
use serde_json::json;

use tally_catalog::DescriptorKind;
use tally_core::config::{resolve_data_dir, CONFIG_FILE};
use tally_core::exchange::export_file_name;
use tally_core::palette::suggest_color;
use tally_core::{
    CounterId, CounterManager, CounterPatch, Descriptors, GrainSizeCategory, TallyConfig,
};
use tally_store::{FileStore, StoreWatcher};

use crate::format::{format_counters, OutputFormat};
use crate::logging::{init_subscriber, Verbosity};

#[derive(Parser)]
#[command(name = "tally")]
#[command(version)]
#[command(about = "Point-count tally for minerals and textures")]
struct Cli {
    /// Data directory (default: $TALLY_DATA_DIR or ./.tally)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Debug-level logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Create the data directory and a default config
    Init,
    #[command(flatten)]
    Collection(CollectionCommand),
    /// Search the reference catalogs
    Catalog {
        #[arg(value_enum)]
        kind: CatalogKind,
        /// Case-insensitive substring filter
        query: Option<String>,
    },
    /// Print a shell completion script
    Completions { shell: clap_complete::Shell },
}

/// Commands that open the counter collection.
#[derive(clap::Subcommand)]
enum CollectionCommand {
    /// Add a counter for a mineral or texture
    Add {
        /// Mineral or texture name
        label: String,
        /// Counter color (default: first unused palette color)
        #[arg(long)]
        color: Option<String>,
        #[command(flatten)]
        descriptors: DescriptorArgs,
    },
    /// List counters
    #[command(alias = "ls")]
    List {
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },
    /// Add one step to a counter
    Inc { target: String },
    /// Remove one step from a counter
    Dec { target: String },
    /// Set a counter back to zero
    Reset { target: String },
    /// Change a counter's step, bound, color or descriptors
    Set {
        target: String,
        /// Step size; values below 1 become 1
        #[arg(long)]
        increment: Option<String>,
        /// Upper bound; empty or 0 removes it
        #[arg(long)]
        max: Option<String>,
        #[arg(long)]
        color: Option<String>,
        #[command(flatten)]
        descriptors: DescriptorArgs,
        #[command(flatten)]
        clear: ClearArgs,
    },
    /// Delete a counter
    Rm { target: String },
    /// Set every counter back to zero
    ResetAll,
    /// Delete every counter
    Clear,
    /// Move a counter to another position (1-based)
    Mv { from: usize, to: usize },
    /// Sum of all counters
    Total,
    /// Write an export file
    Export {
        /// Output path, or `-` for stdout (default: <prefix>-YYYY-MM-DD.json)
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// Append counters from an export file (`-` reads stdin)
    Import { source: PathBuf },
    /// Print the total whenever another process changes the counters
    Watch,
}

#[derive(Debug, Default, clap::Args)]
struct DescriptorArgs {
    /// Grain size term (e.g. "Arena media")
    #[arg(long)]
    grain_size: Option<String>,
    /// Grain size scale: sedimentarias or igneas
    #[arg(long, requires = "grain_size")]
    grain_category: Option<GrainSizeCategory>,
    #[arg(long)]
    sphericity: Option<String>,
    #[arg(long)]
    roundness: Option<String>,
    #[arg(long)]
    contacts: Option<String>,
    #[arg(long)]
    sorting: Option<String>,
    #[arg(long)]
    maturity: Option<String>,
    #[arg(long)]
    packing: Option<String>,
}

#[derive(Debug, Default, clap::Args)]
struct ClearArgs {
    #[arg(long, conflicts_with = "grain_size")]
    clear_grain_size: bool,
    #[arg(long, conflicts_with = "sphericity")]
    clear_sphericity: bool,
    #[arg(long, conflicts_with = "roundness")]
    clear_roundness: bool,
    #[arg(long, conflicts_with = "contacts")]
    clear_contacts: bool,
    #[arg(long, conflicts_with = "sorting")]
    clear_sorting: bool,
    #[arg(long, conflicts_with = "maturity")]
    clear_maturity: bool,
    #[arg(long, conflicts_with = "packing")]
    clear_packing: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
enum CatalogKind {
    Minerals,
    Textures,
    GrainSize,
    Sphericity,
    Roundness,
    Contacts,
    Sorting,
    Maturity,
    Packing,
}

type Manager = CounterManager<FileStore>;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_subscriber(Verbosity::from_flags(cli.verbose, cli.quiet));

    let data_dir = resolve_data_dir(cli.data_dir.as_deref());
    let Some(command) = cli.command else {
        println!(
            "tally v{}: point-count tally for minerals and textures",
            env!("CARGO_PKG_VERSION")
        );
        println!("Run `tally --help` for usage.");
        return Ok(());
    };

    match command {
        Commands::Init => cmd_init(&data_dir),
        Commands::Collection(command) => run(command, &data_dir),
        Commands::Catalog { kind, query } => cmd_catalog(kind, query.as_deref().unwrap_or("")),
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "tally", &mut std::io::stdout());
            Ok(())
        }
    }
}

/// Open the collection named by the config in `data_dir`.
fn open_manager(data_dir: &Path) -> anyhow::Result<(Manager, TallyConfig)> {
    let config = TallyConfig::load(data_dir);
    tracing::debug!(
        data_dir = %data_dir.display(),
        storage_key = %config.storage_key,
        "opening collection"
    );
    let store = FileStore::with_key(data_dir, &config.storage_key)
        .with_context(|| format!("opening store in {}", data_dir.display()))?;
    Ok((CounterManager::open(store), config))
}

fn run(command: CollectionCommand, data_dir: &Path) -> anyhow::Result<()> {
    let (mut manager, config) = open_manager(data_dir)?;
    match command {
        CollectionCommand::Add {
            label,
            color,
            descriptors,
        } => {
            let color =
                color.unwrap_or_else(|| suggest_color(&manager.used_colors()).to_string());
            let descriptors = descriptors.resolve()?;
            if tally_catalog::find_mineral(&label).is_none()
                && tally_catalog::find_texture(&label).is_none()
            {
                tracing::warn!(label = %label, "label is not in the mineral or texture catalog");
            }
            let counter = manager.add(label, color, descriptors);
            print_json(&counter)
        }
        CollectionCommand::List { format } => {
            print!("{}", ensure_newline(format_counters(manager.counters(), format)));
            Ok(())
        }
        CollectionCommand::Inc { target } => {
            let id = resolve_target(&manager, &target)?;
            manager.increment(id);
            print_counter(&manager, id)
        }
        CollectionCommand::Dec { target } => {
            let id = resolve_target(&manager, &target)?;
            manager.decrement(id);
            print_counter(&manager, id)
        }
        CollectionCommand::Reset { target } => {
            let id = resolve_target(&manager, &target)?;
            manager.reset(id);
            print_counter(&manager, id)
        }
        CollectionCommand::Set {
            target,
            increment,
            max,
            color,
            descriptors,
            clear,
        } => {
            let id = resolve_target(&manager, &target)?;
            let mut patch = descriptors.into_patch()?;
            clear.apply_to(&mut patch);
            patch.increment = increment.as_deref().map(tally_core::counter::parse_increment);
            patch.max_value = max.as_deref().map(tally_core::counter::parse_max_value);
            patch.color = color;
            if patch.is_empty() {
                bail!("nothing to change: pass --increment, --max, --color or a descriptor flag");
            }
            manager.update(id, patch);
            print_counter(&manager, id)
        }
        CollectionCommand::Rm { target } => {
            let id = resolve_target(&manager, &target)?;
            manager.delete(id);
            print_json(&json!({ "deleted": id }))
        }
        CollectionCommand::ResetAll => {
            manager.reset_all();
            println!("Reset {} counters to 0", manager.len());
            Ok(())
        }
        CollectionCommand::Clear => {
            let count = manager.len();
            manager.delete_all();
            println!("Deleted {count} counters");
            Ok(())
        }
        CollectionCommand::Mv { from, to } => {
            let len = manager.len();
            for position in [from, to] {
                if position == 0 || position > len {
                    bail!("position {position} is out of range (1..={len})");
                }
            }
            manager.reorder(from - 1, to - 1);
            print!(
                "{}",
                ensure_newline(format_counters(manager.counters(), OutputFormat::Table))
            );
            Ok(())
        }
        CollectionCommand::Total => print_json(&json!({
            "counters": manager.len(),
            "total": manager.total_count(),
        })),
        CollectionCommand::Export { output } => cmd_export(&manager, output, &config),
        CollectionCommand::Import { source } => {
            let raw = read_source(&source)?;
            let imported = manager
                .import_counters(&raw)
                .with_context(|| format!("importing {}", source.display()))?;
            print_json(&json!({ "imported": imported, "counters": manager.len() }))
        }
        CollectionCommand::Watch => cmd_watch(manager),
    }
}

fn cmd_init(data_dir: &Path) -> anyhow::Result<()> {
    let config_path = data_dir.join(CONFIG_FILE);
    if config_path.exists() {
        println!("Already initialized: {}", data_dir.display());
        return Ok(());
    }
    TallyConfig::default()
        .write(data_dir)
        .with_context(|| format!("writing {}", config_path.display()))?;
    println!("Initialized tally in {}", data_dir.display());
    Ok(())
}

fn cmd_export(
    manager: &Manager,
    output: Option<PathBuf>,
    config: &TallyConfig,
) -> anyhow::Result<()> {
    let data = manager.export_json()?;
    let path = output
        .unwrap_or_else(|| PathBuf::from(export_file_name(&config.export_prefix, Utc::now())));

    if path == Path::new("-") {
        println!("{data}");
        return Ok(());
    }
    std::fs::write(&path, data).with_context(|| format!("writing {}", path.display()))?;
    print_json(&json!({
        "exported": manager.len(),
        "total": manager.total_count(),
        "path": path.display().to_string(),
    }))
}

fn cmd_catalog(kind: CatalogKind, query: &str) -> anyhow::Result<()> {
    let value = match kind {
        CatalogKind::Minerals => serde_json::to_value(tally_catalog::search_minerals(query))?,
        CatalogKind::Textures => serde_json::to_value(tally_catalog::search_textures(query))?,
        CatalogKind::GrainSize => serde_json::to_value(tally_catalog::search_grain_sizes(query))?,
        CatalogKind::Sphericity => descriptor_catalog(DescriptorKind::Sphericity, query)?,
        CatalogKind::Roundness => descriptor_catalog(DescriptorKind::Roundness, query)?,
        CatalogKind::Contacts => descriptor_catalog(DescriptorKind::Contacts, query)?,
        CatalogKind::Sorting => descriptor_catalog(DescriptorKind::Sorting, query)?,
        CatalogKind::Maturity => descriptor_catalog(DescriptorKind::Maturity, query)?,
        CatalogKind::Packing => descriptor_catalog(DescriptorKind::Packing, query)?,
    };
    print_json(&value)
}

fn descriptor_catalog(kind: DescriptorKind, query: &str) -> anyhow::Result<serde_json::Value> {
    Ok(serde_json::to_value(tally_catalog::search(kind, query))?)
}

fn cmd_watch(mut manager: Manager) -> anyhow::Result<()> {
    let watcher = StoreWatcher::start(manager.store()).context("starting store watcher")?;
    println!(
        "watching {} ({} counters, total {})",
        manager.store().path().display(),
        manager.len(),
        manager.total_count()
    );
    loop {
        if watcher.wait_for_change(Duration::from_secs(60)) {
            manager.reload();
            println!(
                "{} {} counters, total {}",
                Utc::now().format("%H:%M:%S"),
                manager.len(),
                manager.total_count()
            );
            std::io::stdout().flush()?;
        }
    }
}

// === Helpers ===

impl DescriptorArgs {
    /// Look every given term up in the reference catalogs.
    fn resolve(&self) -> anyhow::Result<Descriptors> {
        Ok(Descriptors {
            grain_size: match &self.grain_size {
                Some(term) => Some(
                    tally_catalog::find_grain_size(term, self.grain_category).with_context(
                        || format!("unknown grain size '{term}' (see `tally catalog grain-size`)"),
                    )?,
                ),
                None => None,
            },
            sphericity: lookup(DescriptorKind::Sphericity, self.sphericity.as_deref())?,
            roundness: lookup(DescriptorKind::Roundness, self.roundness.as_deref())?,
            contacts: lookup(DescriptorKind::Contacts, self.contacts.as_deref())?,
            sorting: lookup(DescriptorKind::Sorting, self.sorting.as_deref())?,
            maturity: lookup(DescriptorKind::Maturity, self.maturity.as_deref())?,
            packing: lookup(DescriptorKind::Packing, self.packing.as_deref())?,
        })
    }

    /// Patch that sets exactly the descriptors given on the command line.
    fn into_patch(self) -> anyhow::Result<CounterPatch> {
        let d = self.resolve()?;
        Ok(CounterPatch {
            grain_size: d.grain_size.map(Some),
            sphericity: d.sphericity.map(Some),
            roundness: d.roundness.map(Some),
            contacts: d.contacts.map(Some),
            sorting: d.sorting.map(Some),
            maturity: d.maturity.map(Some),
            packing: d.packing.map(Some),
            ..CounterPatch::default()
        })
    }
}

impl ClearArgs {
    fn apply_to(&self, patch: &mut CounterPatch) {
        if self.clear_grain_size {
            patch.grain_size = Some(None);
        }
        if self.clear_sphericity {
            patch.sphericity = Some(None);
        }
        if self.clear_roundness {
            patch.roundness = Some(None);
        }
        if self.clear_contacts {
            patch.contacts = Some(None);
        }
        if self.clear_sorting {
            patch.sorting = Some(None);
        }
        if self.clear_maturity {
            patch.maturity = Some(None);
        }
        if self.clear_packing {
            patch.packing = Some(None);
        }
    }
}

fn lookup(
    kind: DescriptorKind,
    term: Option<&str>,
) -> anyhow::Result<Option<tally_core::Descriptor>> {
    term.map(|t| {
        tally_catalog::find(kind, t)
            .with_context(|| format!("unknown {kind} '{t}' (see `tally catalog {kind}`)"))
    })
    .transpose()
}

/// A target is a 1-based position or a full counter id.
fn resolve_target(manager: &Manager, target: &str) -> anyhow::Result<CounterId> {
    if let Ok(position) = target.parse::<usize>() {
        return match position.checked_sub(1).and_then(|i| manager.counters().get(i)) {
            Some(counter) => Ok(counter.id),
            None => bail!(
                "no counter at position {position} ({} counters)",
                manager.len()
            ),
        };
    }
    let id: CounterId = target
        .parse()
        .with_context(|| format!("'{target}' is neither a position nor a counter id"))?;
    if manager.get(id).is_none() {
        bail!("no counter with id {id}");
    }
    Ok(id)
}

fn print_counter(manager: &Manager, id: CounterId) -> anyhow::Result<()> {
    match manager.get(id) {
        Some(counter) => print_json(counter),
        None => bail!("no counter with id {id}"),
    }
}

fn print_json<T: serde::Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn ensure_newline(mut text: String) -> String {
    if !text.ends_with('\n') {
        text.push('\n');
    }
    text
}

fn read_source(source: &Path) -> anyhow::Result<String> {
    if source == Path::new("-") {
        let mut raw = String::new();
        std::io::stdin()
            .read_to_string(&mut raw)
            .context("reading stdin")?;
        return Ok(raw);
    }
    std::fs::read_to_string(source).with_context(|| format!("reading {}", source.display()))
}
