//! Descriptor types: optional textural metadata attached to a counter.
//!
//! Six of the seven descriptor slots share the same `{term, description}`
//! shape. Grain size additionally records which rock family its scale
//! belongs to.

use serde::{Deserialize, Serialize};

/// A labeled `{term, description}` pair taken from a reference catalog.
///
/// The collection manager never validates descriptors against the catalogs;
/// they are copied verbatim on create, update, export and import.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Descriptor {
    pub term: String,
    pub description: String,
}

impl Descriptor {
    pub fn new(term: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            description: description.into(),
        }
    }
}

/// Rock family a grain-size scale belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GrainSizeCategory {
    Sedimentarias,
    Igneas,
}

impl GrainSizeCategory {
    pub const ALL: [GrainSizeCategory; 2] = [Self::Sedimentarias, Self::Igneas];

    /// Serialized tag, as written in the JSON layouts.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sedimentarias => "sedimentarias",
            Self::Igneas => "igneas",
        }
    }
}

impl std::fmt::Display for GrainSizeCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for GrainSizeCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sedimentarias" | "sedimentaria" | "sedimentary" => Ok(Self::Sedimentarias),
            "igneas" | "ígneas" | "ignea" | "ígnea" | "igneous" => Ok(Self::Igneas),
            other => Err(format!(
                "unknown grain size category '{other}' (expected sedimentarias or igneas)"
            )),
        }
    }
}

/// Grain size: a descriptor tagged with the scale's rock family.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GrainSize {
    pub category: GrainSizeCategory,
    #[serde(flatten)]
    pub descriptor: Descriptor,
}

impl GrainSize {
    pub fn new(category: GrainSizeCategory, descriptor: Descriptor) -> Self {
        Self {
            category,
            descriptor,
        }
    }

    #[must_use]
    pub fn term(&self) -> &str {
        &self.descriptor.term
    }
}

/// The seven optional descriptor slots of a counter.
///
/// Flattened into the counter's JSON so the keys (`grainSize`,
/// `sphericity`, ...) sit next to `mineralName` and `value`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Descriptors {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grain_size: Option<GrainSize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sphericity: Option<Descriptor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roundness: Option<Descriptor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contacts: Option<Descriptor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sorting: Option<Descriptor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maturity: Option<Descriptor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub packing: Option<Descriptor>,
}

impl Descriptors {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
