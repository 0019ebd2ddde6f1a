//! Counter type: one tally record for a mineral or texture.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::descriptor::{Descriptor, Descriptors, GrainSize};

/// Opaque unique identifier of a counter. Never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CounterId(Uuid);

impl CounterId {
    /// Generate a fresh random identifier.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl std::fmt::Display for CounterId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl std::str::FromStr for CounterId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

/// A tally record.
///
/// Invariants (upheld by every method that mutates a counter):
/// - `value <= max_value` whenever `max_value` is set
/// - `increment >= 1`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Counter {
    pub id: CounterId,

    /// Mineral or texture name. Immutable after creation.
    #[serde(rename = "mineralName")]
    pub label: String,

    pub value: u64,
    pub increment: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_value: Option<u64>,
    pub color: String,

    #[serde(flatten)]
    pub descriptors: Descriptors,

    pub created_at: DateTime<Utc>,
}

impl Counter {
    /// Create a counter at zero with the default step of 1 and no upper bound.
    pub fn new(
        label: impl Into<String>,
        color: impl Into<String>,
        descriptors: Descriptors,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: CounterId::generate(),
            label: label.into(),
            value: 0,
            increment: 1,
            max_value: None,
            color: color.into(),
            descriptors,
            created_at,
        }
    }

    /// Add one step. Returns `false` (and leaves the value alone) when the
    /// step would pass `max_value`.
    pub fn step_up(&mut self) -> bool {
        let Some(next) = self.value.checked_add(self.increment) else {
            return false;
        };
        if self.max_value.is_some_and(|max| next > max) {
            return false;
        }
        self.value = next;
        true
    }

    /// Remove one step, stopping at zero.
    pub fn step_down(&mut self) {
        self.value = self.value.saturating_sub(self.increment);
    }

    pub fn reset(&mut self) {
        self.value = 0;
    }

    /// Merge a partial update into this counter.
    ///
    /// `increment` below 1 is raised to 1. A `max_value` of 0 clears the
    /// bound. Lowering the bound below the current value pulls the value
    /// down to the bound.
    pub fn apply(&mut self, patch: CounterPatch) {
        if let Some(increment) = patch.increment {
            self.increment = increment.max(1);
        }
        if let Some(max_value) = patch.max_value {
            self.max_value = max_value.filter(|max| *max > 0);
        }
        if let Some(color) = patch.color {
            self.color = color;
        }

        let d = &mut self.descriptors;
        if let Some(v) = patch.grain_size {
            d.grain_size = v;
        }
        if let Some(v) = patch.sphericity {
            d.sphericity = v;
        }
        if let Some(v) = patch.roundness {
            d.roundness = v;
        }
        if let Some(v) = patch.contacts {
            d.contacts = v;
        }
        if let Some(v) = patch.sorting {
            d.sorting = v;
        }
        if let Some(v) = patch.maturity {
            d.maturity = v;
        }
        if let Some(v) = patch.packing {
            d.packing = v;
        }

        if let Some(max) = self.max_value {
            self.value = self.value.min(max);
        }
    }
}

/// A partial update for [`Counter::apply`].
///
/// `None` leaves a field untouched. For the clearable fields,
/// `Some(None)` clears and `Some(Some(v))` sets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CounterPatch {
    pub increment: Option<u64>,
    pub max_value: Option<Option<u64>>,
    pub color: Option<String>,
    pub grain_size: Option<Option<GrainSize>>,
    pub sphericity: Option<Option<Descriptor>>,
    pub roundness: Option<Option<Descriptor>>,
    pub contacts: Option<Option<Descriptor>>,
    pub sorting: Option<Option<Descriptor>>,
    pub maturity: Option<Option<Descriptor>>,
    pub packing: Option<Option<Descriptor>>,
}

impl CounterPatch {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Sum of the counters' values, saturating at `u64::MAX`.
#[must_use]
pub fn total_value(counters: &[Counter]) -> u64 {
    counters.iter().map(|c| c.value).fold(0, u64::saturating_add)
}

/// Coerce free-text step input: anything unparseable or below 1 becomes 1.
#[must_use]
pub fn parse_increment(text: &str) -> u64 {
    text.trim().parse::<u64>().ok().filter(|n| *n >= 1).unwrap_or(1)
}

/// Coerce free-text upper-bound input. Empty, unparseable, or zero input
/// means "no bound".
#[must_use]
pub fn parse_max_value(text: &str) -> Option<u64> {
    text.trim().parse::<u64>().ok().filter(|n| *n > 0)
}
