//! Counter list formatting: JSON, Table, and Markdown output.

use serde::Serialize;

use tally_core::counter::total_value;
use tally_core::Counter;

/// Output format for `tally list`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Markdown,
}

#[derive(Serialize)]
struct Listing<'a> {
    counters: &'a [Counter],
    total: u64,
}

const COLUMNS: [&str; 7] = ["#", "mineral", "value", "step", "max", "color", "descriptors"];

/// Format the collection in the requested output format.
#[must_use]
pub fn format_counters(counters: &[Counter], format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => format_json(counters),
        OutputFormat::Table => format_table(counters),
        OutputFormat::Markdown => format_markdown(counters),
    }
}

fn format_json(counters: &[Counter]) -> String {
    let listing = Listing {
        counters,
        total: total_value(counters),
    };
    serde_json::to_string_pretty(&listing).unwrap_or_else(|_| "{}".to_string())
}

fn row(position: usize, counter: &Counter) -> [String; 7] {
    [
        position.to_string(),
        counter.label.clone(),
        counter.value.to_string(),
        counter.increment.to_string(),
        counter
            .max_value
            .map_or_else(|| "-".to_string(), |m| m.to_string()),
        counter.color.clone(),
        descriptor_summary(counter),
    ]
}

/// Descriptor terms joined with `; `, or `-` when there are none.
fn descriptor_summary(counter: &Counter) -> String {
    let d = &counter.descriptors;
    if d.is_empty() {
        return "-".to_string();
    }
    let terms: Vec<&str> = [
        d.grain_size.as_ref().map(|g| g.term()),
        d.sphericity.as_ref().map(|x| x.term.as_str()),
        d.roundness.as_ref().map(|x| x.term.as_str()),
        d.contacts.as_ref().map(|x| x.term.as_str()),
        d.sorting.as_ref().map(|x| x.term.as_str()),
        d.maturity.as_ref().map(|x| x.term.as_str()),
        d.packing.as_ref().map(|x| x.term.as_str()),
    ]
    .into_iter()
    .flatten()
    .collect();
    terms.join("; ")
}

fn format_table(counters: &[Counter]) -> String {
    if counters.is_empty() {
        return "(no counters)".to_string();
    }

    let rows: Vec<[String; 7]> = counters
        .iter()
        .enumerate()
        .map(|(i, c)| row(i + 1, c))
        .collect();

    // Column widths in characters; mineral names carry accents
    let mut widths: Vec<usize> = COLUMNS.iter().map(|c| c.chars().count()).collect();
    for r in &rows {
        for (i, cell) in r.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let mut output = String::new();

    let header: Vec<String> = COLUMNS
        .iter()
        .enumerate()
        .map(|(i, c)| format!("{:width$}", c, width = widths[i]))
        .collect();
    output.push_str(header.join(" | ").trim_end());
    output.push('\n');

    let sep: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    output.push_str(&sep.join("-+-"));
    output.push('\n');

    for r in &rows {
        let vals: Vec<String> = r
            .iter()
            .enumerate()
            .map(|(i, cell)| format!("{:width$}", cell, width = widths[i]))
            .collect();
        output.push_str(vals.join(" | ").trim_end());
        output.push('\n');
    }

    output.push_str(&format!("total: {}\n", total_value(counters)));
    output
}

fn format_markdown(counters: &[Counter]) -> String {
    if counters.is_empty() {
        return "*No counters*\n".to_string();
    }

    let mut output = String::new();

    output.push_str("| ");
    output.push_str(&COLUMNS.join(" | "));
    output.push_str(" |\n");

    output.push_str("| ");
    let seps: Vec<&str> = COLUMNS.iter().map(|_| "---").collect();
    output.push_str(&seps.join(" | "));
    output.push_str(" |\n");

    for (i, counter) in counters.iter().enumerate() {
        output.push_str("| ");
        output.push_str(&row(i + 1, counter).join(" | "));
        output.push_str(" |\n");
    }

    output.push_str(&format!("\n**Total:** {}\n", total_value(counters)));
    output
}
