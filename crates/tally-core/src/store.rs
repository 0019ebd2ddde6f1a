//! Persistence contract for the counter collection.
//!
//! The whole ordered collection is the unit of persistence. Stores hold it
//! as a JSON array under a single fixed key:
//! ```json
//! [
//!   { "id": "…", "mineralName": "Cuarzo", "value": 4, "increment": 1,
//!     "color": "#3b82f6", "createdAt": "2025-02-10T09:15:00Z" }
//! ]
//! ```

use std::collections::HashSet;

use crate::counter::{Counter, CounterPatch};
use crate::error::{Result, TallyError};

/// Default key the collection is stored under.
pub const STORAGE_KEY: &str = "mineral_counters";

/// Durable home of the counter collection.
pub trait Store {
    /// Read the stored collection. `Ok(None)` means nothing has been saved yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the stored data cannot be read or decoded.
    fn load(&self) -> Result<Option<Vec<Counter>>>;

    /// Replace the stored collection with `counters`.
    ///
    /// # Errors
    ///
    /// Returns an error if the collection cannot be written.
    fn save(&mut self, counters: &[Counter]) -> Result<()>;
}

/// Serialize a collection into the persisted layout.
///
/// # Errors
///
/// Returns [`TallyError::Serialization`] if serialization fails.
pub fn encode_collection(counters: &[Counter]) -> Result<String> {
    serde_json::to_string(counters).map_err(|e| TallyError::Serialization(e.to_string()))
}

/// Parse the persisted layout back into a collection.
///
/// Counters whose step or bound break the counter invariants are repaired
/// in place rather than rejected.
///
/// # Errors
///
/// Returns [`TallyError::Serialization`] if `raw` is not a counter array and
/// [`TallyError::Store`] if two counters share an id.
pub fn decode_collection(raw: &str) -> Result<Vec<Counter>> {
    let mut counters: Vec<Counter> =
        serde_json::from_str(raw).map_err(|e| TallyError::Serialization(e.to_string()))?;

    let mut seen = HashSet::with_capacity(counters.len());
    for counter in &mut counters {
        if !seen.insert(counter.id) {
            return Err(TallyError::Store(format!(
                "duplicate counter id {} in stored collection",
                counter.id
            )));
        }

        let before = (counter.value, counter.increment, counter.max_value);
        let patch = CounterPatch {
            increment: Some(counter.increment),
            max_value: Some(counter.max_value),
            ..CounterPatch::default()
        };
        counter.apply(patch);
        if before != (counter.value, counter.increment, counter.max_value) {
            tracing::warn!(id = %counter.id, label = %counter.label, "repaired stored counter");
        }
    }

    Ok(counters)
}

/// In-memory store. Keeps the serialized form so the real codec is exercised.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    raw: Option<String>,
    saves: usize,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose key already holds `raw`, valid or not.
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            raw: Some(raw.into()),
            saves: 0,
        }
    }

    /// Current serialized content, if anything was stored.
    #[must_use]
    pub fn raw(&self) -> Option<&str> {
        self.raw.as_deref()
    }

    /// Number of successful `save` calls.
    #[must_use]
    pub fn saves(&self) -> usize {
        self.saves
    }
}

impl Store for MemoryStore {
    fn load(&self) -> Result<Option<Vec<Counter>>> {
        self.raw.as_deref().map(decode_collection).transpose()
    }

    fn save(&mut self, counters: &[Counter]) -> Result<()> {
        self.raw = Some(encode_collection(counters)?);
        self.saves += 1;
        Ok(())
    }
}
