//! # tally-catalog
//!
//! Static reference catalogs the tally offers when creating or describing a
//! counter: minerals, textures, and the grain descriptor scales. The
//! counter manager never reads these; they only help callers pick a label or
//! a descriptor.
//!
//! Every search is a case-insensitive substring match; an empty query
//! matches everything.

use serde::Serialize;

use tally_core::{Descriptor, GrainSize, GrainSizeCategory};

pub mod descriptors;
pub mod minerals;
pub mod textures;

pub use minerals::MINERAL_GROUPS;
pub use textures::TEXTURE_GROUPS;

/// A mineral entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Mineral {
    pub name: &'static str,
    pub formula: &'static str,
    pub system: &'static str,
    pub category: &'static str,
}

/// Minerals of one class (e.g. tectosilicatos).
#[derive(Debug, Clone, Copy, Serialize)]
pub struct MineralGroup {
    pub key: &'static str,
    pub title: &'static str,
    pub minerals: &'static [Mineral],
}

/// A `{term, description}` catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TermEntry {
    pub term: &'static str,
    pub description: &'static str,
}

impl TermEntry {
    #[must_use]
    pub fn to_descriptor(&self) -> Descriptor {
        Descriptor::new(self.term, self.description)
    }
}

/// Term entries of one family (e.g. texturas_igneas).
#[derive(Debug, Clone, Copy, Serialize)]
pub struct TermGroup {
    pub key: &'static str,
    pub title: &'static str,
    pub entries: &'static [TermEntry],
}

/// The single-list descriptor catalogs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DescriptorKind {
    Sphericity,
    Roundness,
    Contacts,
    Sorting,
    Maturity,
    Packing,
}

impl DescriptorKind {
    pub const ALL: [DescriptorKind; 6] = [
        Self::Sphericity,
        Self::Roundness,
        Self::Contacts,
        Self::Sorting,
        Self::Maturity,
        Self::Packing,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sphericity => "sphericity",
            Self::Roundness => "roundness",
            Self::Contacts => "contacts",
            Self::Sorting => "sorting",
            Self::Maturity => "maturity",
            Self::Packing => "packing",
        }
    }

    /// Entries of this catalog, in scale order.
    #[must_use]
    pub fn entries(self) -> &'static [TermEntry] {
        match self {
            Self::Sphericity => descriptors::SPHERICITY,
            Self::Roundness => descriptors::ROUNDNESS,
            Self::Contacts => descriptors::CONTACTS,
            Self::Sorting => descriptors::SORTING,
            Self::Maturity => descriptors::MATURITY,
            Self::Packing => descriptors::PACKING,
        }
    }
}

impl std::fmt::Display for DescriptorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Grain-size scale for `category`.
#[must_use]
pub fn grain_size_entries(category: GrainSizeCategory) -> &'static [TermEntry] {
    match category {
        GrainSizeCategory::Sedimentarias => descriptors::GRAIN_SIZE_SEDIMENTARIAS,
        GrainSizeCategory::Igneas => descriptors::GRAIN_SIZE_IGNEAS,
    }
}

// === Search ===

/// Minerals of one group that matched a query.
#[derive(Debug, Clone, Serialize)]
pub struct MineralMatches {
    pub key: &'static str,
    pub title: &'static str,
    pub minerals: Vec<&'static Mineral>,
}

/// Entries of one term group that matched a query.
#[derive(Debug, Clone, Serialize)]
pub struct TermMatches {
    pub key: &'static str,
    pub title: &'static str,
    pub entries: Vec<&'static TermEntry>,
}

/// Grain-size entries of one category that matched a query.
#[derive(Debug, Clone, Serialize)]
pub struct GrainSizeMatches {
    pub category: GrainSizeCategory,
    pub entries: Vec<&'static TermEntry>,
}

fn contains_folded(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

fn term_matches(entry: &TermEntry, needle: &str) -> bool {
    contains_folded(entry.term, needle) || contains_folded(entry.description, needle)
}

fn filter_terms(entries: &'static [TermEntry], query: &str) -> Vec<&'static TermEntry> {
    let needle = query.trim().to_lowercase();
    entries.iter().filter(|e| term_matches(e, &needle)).collect()
}

/// Minerals whose name or formula contains `query`, grouped by class.
/// Groups with no match are left out.
#[must_use]
pub fn search_minerals(query: &str) -> Vec<MineralMatches> {
    let needle = query.trim().to_lowercase();
    MINERAL_GROUPS
        .iter()
        .filter_map(|group| {
            let minerals: Vec<&Mineral> = group
                .minerals
                .iter()
                .filter(|m| contains_folded(m.name, &needle) || contains_folded(m.formula, &needle))
                .collect();
            (!minerals.is_empty()).then_some(MineralMatches {
                key: group.key,
                title: group.title,
                minerals,
            })
        })
        .collect()
}

/// Texture entries whose term or description contains `query`, grouped.
#[must_use]
pub fn search_textures(query: &str) -> Vec<TermMatches> {
    TEXTURE_GROUPS
        .iter()
        .filter_map(|group| {
            let entries = filter_terms(group.entries, query);
            (!entries.is_empty()).then_some(TermMatches {
                key: group.key,
                title: group.title,
                entries,
            })
        })
        .collect()
}

/// Grain sizes whose term or description contains `query`, per category.
#[must_use]
pub fn search_grain_sizes(query: &str) -> Vec<GrainSizeMatches> {
    GrainSizeCategory::ALL
        .into_iter()
        .filter_map(|category| {
            let entries = filter_terms(grain_size_entries(category), query);
            (!entries.is_empty()).then_some(GrainSizeMatches { category, entries })
        })
        .collect()
}

/// Entries of a descriptor catalog whose term or description contains `query`.
#[must_use]
pub fn search(kind: DescriptorKind, query: &str) -> Vec<&'static TermEntry> {
    filter_terms(kind.entries(), query)
}

/// Look up a descriptor by its exact term (case-insensitive).
#[must_use]
pub fn find(kind: DescriptorKind, term: &str) -> Option<Descriptor> {
    find_entry(kind.entries(), term).map(TermEntry::to_descriptor)
}

/// Look up a grain size by its exact term, optionally within one category.
/// Without a category the sedimentary scale is searched first.
#[must_use]
pub fn find_grain_size(term: &str, category: Option<GrainSizeCategory>) -> Option<GrainSize> {
    let categories: &[GrainSizeCategory] = match category {
        Some(ref c) => std::slice::from_ref(c),
        None => &GrainSizeCategory::ALL,
    };
    categories.iter().find_map(|&category| {
        find_entry(grain_size_entries(category), term)
            .map(|entry| GrainSize::new(category, entry.to_descriptor()))
    })
}

/// Look up a mineral by its exact name (case-insensitive).
#[must_use]
pub fn find_mineral(name: &str) -> Option<&'static Mineral> {
    let needle = name.trim().to_lowercase();
    MINERAL_GROUPS
        .iter()
        .flat_map(|g| g.minerals.iter())
        .find(|m| m.name.to_lowercase() == needle)
}

/// Look up a texture by its exact term (case-insensitive), in any group.
#[must_use]
pub fn find_texture(term: &str) -> Option<&'static TermEntry> {
    TEXTURE_GROUPS
        .iter()
        .find_map(|group| find_entry(group.entries, term))
}

fn find_entry(entries: &'static [TermEntry], term: &str) -> Option<&'static TermEntry> {
    let needle = term.trim().to_lowercase();
    entries.iter().find(|e| e.term.to_lowercase() == needle)
}
