//! The counter collection manager.
//!
//! Owns the ordered list of counters and writes the whole list back to its
//! [`Store`] after every mutating operation. Operations aimed at an unknown
//! id, or a reorder with an out-of-range index, change nothing.

use chrono::Utc;

use crate::counter::{Counter, CounterId, CounterPatch};
use crate::descriptor::Descriptors;
use crate::error::ImportError;
use crate::exchange::{parse_import, ExportSnapshot};
use crate::store::Store;

/// Authoritative in-memory collection of counters, mirrored to a store.
#[derive(Debug)]
pub struct CounterManager<S: Store> {
    store: S,
    counters: Vec<Counter>,
}

impl<S: Store> CounterManager<S> {
    /// Open the manager over `store`, loading whatever it holds.
    ///
    /// A missing collection starts empty. An unreadable one is logged and
    /// also starts empty; opening never fails.
    pub fn open(store: S) -> Self {
        let mut manager = Self {
            store,
            counters: Vec::new(),
        };
        manager.counters = manager.load_or_empty();
        manager
    }

    /// Re-read the store, replacing the in-memory collection.
    pub fn reload(&mut self) {
        self.counters = self.load_or_empty();
    }

    fn load_or_empty(&self) -> Vec<Counter> {
        match self.store.load() {
            Ok(Some(counters)) => {
                tracing::debug!(count = counters.len(), "loaded counters");
                counters
            }
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::warn!(error = %e, "could not load stored counters, starting empty");
                Vec::new()
            }
        }
    }

    fn persist(&mut self) {
        if let Err(e) = self.store.save(&self.counters) {
            tracing::error!(error = %e, count = self.counters.len(), "failed to save counters");
        }
    }

    fn find_mut(&mut self, id: CounterId) -> Option<&mut Counter> {
        self.counters.iter_mut().find(|c| c.id == id)
    }

    /// Apply `f` to the counter with `id` (if any), then persist.
    fn mutate(&mut self, id: CounterId, f: impl FnOnce(&mut Counter)) {
        match self.find_mut(id) {
            Some(counter) => f(counter),
            None => tracing::debug!(%id, "no counter with this id"),
        }
        self.persist();
    }

    // === Reads ===

    /// Counters in presentation order.
    #[must_use]
    pub fn counters(&self) -> &[Counter] {
        &self.counters
    }

    #[must_use]
    pub fn get(&self, id: CounterId) -> Option<&Counter> {
        self.counters.iter().find(|c| c.id == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.counters.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counters.is_empty()
    }

    /// Sum of every counter's value, saturating at `u64::MAX`.
    #[must_use]
    pub fn total_count(&self) -> u64 {
        crate::counter::total_value(&self.counters)
    }

    /// Colors currently assigned, in collection order.
    #[must_use]
    pub fn used_colors(&self) -> Vec<&str> {
        self.counters.iter().map(|c| c.color.as_str()).collect()
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    #[must_use]
    pub fn into_store(self) -> S {
        self.store
    }

    // === Mutations ===

    /// Append a new counter at zero and return a copy of it.
    pub fn add(
        &mut self,
        label: impl Into<String>,
        color: impl Into<String>,
        descriptors: Descriptors,
    ) -> Counter {
        let counter = Counter::new(label, color, descriptors, Utc::now());
        tracing::info!(id = %counter.id, label = %counter.label, "added counter");
        self.counters.push(counter.clone());
        self.persist();
        counter
    }

    /// Merge `patch` into the counter with `id`.
    pub fn update(&mut self, id: CounterId, patch: CounterPatch) {
        self.mutate(id, |c| c.apply(patch));
    }

    pub fn delete(&mut self, id: CounterId) {
        let before = self.counters.len();
        self.counters.retain(|c| c.id != id);
        if self.counters.len() < before {
            tracing::info!(%id, "deleted counter");
        }
        self.persist();
    }

    /// Add one step, unless that would pass the counter's `max_value`.
    pub fn increment(&mut self, id: CounterId) {
        self.mutate(id, |c| {
            if !c.step_up() {
                tracing::debug!(id = %c.id, value = c.value, max = ?c.max_value, "increment blocked");
            }
        });
    }

    /// Remove one step, stopping at zero.
    pub fn decrement(&mut self, id: CounterId) {
        self.mutate(id, Counter::step_down);
    }

    pub fn reset(&mut self, id: CounterId) {
        self.mutate(id, Counter::reset);
    }

    pub fn reset_all(&mut self) {
        self.counters.iter_mut().for_each(Counter::reset);
        self.persist();
    }

    pub fn delete_all(&mut self) {
        self.counters.clear();
        self.persist();
    }

    /// Move the counter at `from` so that it ends up at `to`, shifting the
    /// ones in between.
    ///
    /// Both indices must be `< len()`. Out-of-range indices leave the order
    /// untouched.
    pub fn reorder(&mut self, from: usize, to: usize) {
        let len = self.counters.len();
        if from >= len || to >= len {
            tracing::warn!(from, to, len, "reorder index out of range");
        } else if from != to {
            let moved = self.counters.remove(from);
            self.counters.insert(to, moved);
        }
        self.persist();
    }

    // === Exchange ===

    /// Snapshot of the collection for export. Has no side effects.
    #[must_use]
    pub fn export(&self) -> ExportSnapshot {
        ExportSnapshot::capture(&self.counters, Utc::now())
    }

    /// Export snapshot as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`crate::TallyError::Serialization`] if serialization fails.
    pub fn export_json(&self) -> crate::Result<String> {
        self.export().to_json()
    }

    /// Append every counter in `raw` with fresh ids. Returns how many were
    /// appended. The collection is untouched on error.
    ///
    /// # Errors
    ///
    /// Returns an [`ImportError`] if `raw` is not a valid import blob.
    pub fn import_counters(&mut self, raw: &str) -> Result<usize, ImportError> {
        let entries = parse_import(raw)?;
        let now = Utc::now();
        let count = entries.len();
        self.counters
            .extend(entries.into_iter().map(|entry| entry.into_counter(now)));
        tracing::info!(count, "imported counters");
        self.persist();
        Ok(count)
    }

    /// Boolean form of [`Self::import_counters`]; failures are only logged.
    pub fn import(&mut self, raw: &str) -> bool {
        match self.import_counters(raw) {
            Ok(_) => true,
            Err(e) => {
                tracing::warn!(error = %e, "import rejected");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::{Descriptor, GrainSize, GrainSizeCategory};
    use crate::error::{Result, TallyError};
    use crate::palette::DEFAULT_COLOR;
    use crate::store::{encode_collection, MemoryStore};

    fn manager() -> CounterManager<MemoryStore> {
        CounterManager::open(MemoryStore::new())
    }

    fn add(m: &mut CounterManager<MemoryStore>, label: &str) -> CounterId {
        m.add(label, "#3b82f6", Descriptors::default()).id
    }

    fn labels(m: &CounterManager<MemoryStore>) -> Vec<&str> {
        m.counters().iter().map(|c| c.label.as_str()).collect()
    }

    /// A store whose writes always fail.
    struct BrokenStore;

    impl Store for BrokenStore {
        fn load(&self) -> Result<Option<Vec<Counter>>> {
            Err(TallyError::Store("disk on fire".to_string()))
        }

        fn save(&mut self, _counters: &[Counter]) -> Result<()> {
            Err(TallyError::Store("disk on fire".to_string()))
        }
    }

    // === Initialization ===

    #[test]
    fn open_on_empty_store_starts_empty() {
        let m = manager();
        assert!(m.is_empty());
        assert_eq!(m.total_count(), 0);
    }

    #[test]
    fn open_restores_saved_collection() {
        let mut m = manager();
        let id = add(&mut m, "Cuarzo");
        m.increment(id);

        let reopened = CounterManager::open(m.into_store());
        assert_eq!(reopened.len(), 1);
        assert_eq!(reopened.get(id).unwrap().value, 1);
    }

    #[test]
    fn open_on_corrupt_store_starts_empty() {
        let m = CounterManager::open(MemoryStore::with_raw("{{{ not json"));
        assert!(m.is_empty());
    }

    #[test]
    fn open_on_failing_store_starts_empty_and_keeps_working() {
        let mut m = CounterManager::open(BrokenStore);
        let id = m.add("Cuarzo", "#3b82f6", Descriptors::default()).id;
        m.increment(id);
        assert_eq!(m.get(id).unwrap().value, 1);
    }

    #[test]
    fn reload_picks_up_store_contents() {
        let mut m = manager();
        add(&mut m, "Cuarzo");

        let other = Counter::new("Biotita", "#ef4444", Descriptors::default(), Utc::now());
        m.store = MemoryStore::with_raw(encode_collection(&[other]).unwrap());
        m.reload();
        assert_eq!(labels(&m), vec!["Biotita"]);
    }

    // === Add / update / delete ===

    #[test]
    fn add_appends_with_defaults() {
        let mut m = manager();
        add(&mut m, "Cuarzo");
        let counter = m.add("Olivino", "#ef4444", Descriptors::default());

        assert_eq!(labels(&m), vec!["Cuarzo", "Olivino"]);
        assert_eq!(counter.value, 0);
        assert_eq!(counter.increment, 1);
        assert_eq!(counter.max_value, None);
        assert_eq!(counter.color, "#ef4444");
    }

    #[test]
    fn add_generates_unique_ids() {
        let mut m = manager();
        let a = add(&mut m, "Cuarzo");
        let b = add(&mut m, "Cuarzo");
        assert_ne!(a, b);
    }

    #[test]
    fn add_keeps_descriptors() {
        let mut m = manager();
        let descriptors = Descriptors {
            grain_size: Some(GrainSize::new(
                GrainSizeCategory::Sedimentarias,
                Descriptor::new("Arena gruesa", "0.5 - 1 mm"),
            )),
            sorting: Some(Descriptor::new("Bien seleccionado", "Tamaños uniformes")),
            ..Descriptors::default()
        };
        let c = m.add("Cuarzo", "#3b82f6", descriptors.clone());
        assert_eq!(m.get(c.id).unwrap().descriptors, descriptors);
    }

    #[test]
    fn every_mutation_is_persisted() {
        let mut m = manager();
        let id = add(&mut m, "Cuarzo");
        m.increment(id);
        m.decrement(id);
        m.reset(id);
        m.reset_all();
        m.reorder(0, 0);
        m.update(id, CounterPatch::default());
        m.delete(id);
        m.delete_all();
        assert_eq!(m.store().saves(), 9);
    }

    #[test]
    fn update_merges_fields() {
        let mut m = manager();
        let id = add(&mut m, "Olivino");
        m.update(
            id,
            CounterPatch {
                max_value: Some(Some(5)),
                increment: Some(2),
                color: Some("#8b5cf6".to_string()),
                ..CounterPatch::default()
            },
        );
        let c = m.get(id).unwrap();
        assert_eq!(c.max_value, Some(5));
        assert_eq!(c.increment, 2);
        assert_eq!(c.color, "#8b5cf6");
        assert_eq!(c.label, "Olivino");
    }

    #[test]
    fn update_unknown_id_is_noop() {
        let mut m = manager();
        add(&mut m, "Cuarzo");
        let before = m.counters().to_vec();
        m.update(
            CounterId::generate(),
            CounterPatch {
                increment: Some(9),
                ..CounterPatch::default()
            },
        );
        assert_eq!(m.counters(), before.as_slice());
    }

    #[test]
    fn delete_removes_only_target() {
        let mut m = manager();
        add(&mut m, "Cuarzo");
        let id = add(&mut m, "Biotita");
        add(&mut m, "Calcita");
        m.delete(id);
        assert_eq!(labels(&m), vec!["Cuarzo", "Calcita"]);
    }

    #[test]
    fn delete_unknown_id_leaves_collection_unchanged() {
        let mut m = manager();
        add(&mut m, "Cuarzo");
        add(&mut m, "Biotita");
        let before_raw = m.store().raw().unwrap().to_string();
        let before = m.counters().to_vec();

        m.delete(CounterId::generate());
        assert_eq!(m.counters(), before.as_slice());
        assert_eq!(m.store().raw().unwrap(), before_raw);
    }

    // === Increment / decrement / reset ===

    #[test]
    fn two_increments_with_default_step() {
        let mut m = manager();
        let id = m.add("Cuarzo", "#3b82f6", Descriptors::default()).id;
        m.increment(id);
        m.increment(id);
        assert_eq!(m.get(id).unwrap().value, 2);
        assert_eq!(m.total_count(), 2);
    }

    #[test]
    fn increment_blocked_by_max_value() {
        let mut m = manager();
        let id = m.add("Olivino", "#ef4444", Descriptors::default()).id;
        m.update(
            id,
            CounterPatch {
                max_value: Some(Some(5)),
                increment: Some(2),
                ..CounterPatch::default()
            },
        );

        let mut seen = Vec::new();
        for _ in 0..3 {
            m.increment(id);
            seen.push(m.get(id).unwrap().value);
        }
        assert_eq!(seen, vec![2, 4, 4]);
    }

    #[test]
    fn increment_at_max_is_unchanged() {
        let mut m = manager();
        let id = add(&mut m, "Cuarzo");
        m.update(
            id,
            CounterPatch {
                max_value: Some(Some(1)),
                ..CounterPatch::default()
            },
        );
        m.increment(id);
        m.increment(id);
        assert_eq!(m.get(id).unwrap().value, 1);
    }

    #[test]
    fn decrement_at_zero_stays_zero() {
        let mut m = manager();
        let id = add(&mut m, "Cuarzo");
        m.decrement(id);
        assert_eq!(m.get(id).unwrap().value, 0);
    }

    #[test]
    fn decrement_uses_step() {
        let mut m = manager();
        let id = add(&mut m, "Cuarzo");
        m.update(
            id,
            CounterPatch {
                increment: Some(3),
                ..CounterPatch::default()
            },
        );
        m.increment(id);
        m.increment(id);
        m.decrement(id);
        assert_eq!(m.get(id).unwrap().value, 3);
        m.decrement(id);
        m.decrement(id);
        assert_eq!(m.get(id).unwrap().value, 0);
    }

    #[test]
    fn reset_zeroes_only_target() {
        let mut m = manager();
        let a = add(&mut m, "Cuarzo");
        let b = add(&mut m, "Biotita");
        m.increment(a);
        m.increment(b);
        m.reset(a);
        assert_eq!(m.get(a).unwrap().value, 0);
        assert_eq!(m.get(b).unwrap().value, 1);
    }

    #[test]
    fn reset_all_zeroes_total() {
        let mut m = manager();
        let a = add(&mut m, "Cuarzo");
        let b = add(&mut m, "Biotita");
        m.increment(a);
        m.increment(b);
        m.increment(b);
        m.reset_all();
        assert_eq!(m.total_count(), 0);
        assert_eq!(m.len(), 2);
    }

    #[test]
    fn delete_all_empties_collection() {
        let mut m = manager();
        add(&mut m, "Cuarzo");
        add(&mut m, "Biotita");
        m.delete_all();
        assert!(m.is_empty());
        assert_eq!(m.store().raw(), Some("[]"));
    }

    // === Reorder ===

    #[test]
    fn reorder_moves_forward_and_back() {
        let mut m = manager();
        for label in ["A", "B", "C", "D"] {
            add(&mut m, label);
        }
        m.reorder(0, 2);
        assert_eq!(labels(&m), vec!["B", "C", "A", "D"]);
        m.reorder(2, 0);
        assert_eq!(labels(&m), vec!["A", "B", "C", "D"]);
        m.reorder(3, 1);
        assert_eq!(labels(&m), vec!["A", "D", "B", "C"]);
    }

    #[test]
    fn reorder_out_of_range_is_noop() {
        let mut m = manager();
        add(&mut m, "A");
        add(&mut m, "B");
        m.reorder(0, 2);
        m.reorder(5, 0);
        assert_eq!(labels(&m), vec!["A", "B"]);
    }

    // === Export / import ===

    #[test]
    fn export_lists_counters_in_order_without_ids() {
        let mut m = manager();
        let id = add(&mut m, "Cuarzo");
        add(&mut m, "Biotita");
        m.increment(id);

        let snapshot = m.export();
        assert_eq!(snapshot.counters.len(), 2);
        assert_eq!(snapshot.counters[0].label, "Cuarzo");
        assert_eq!(snapshot.counters[0].value, 1);

        let json = m.export_json().unwrap();
        assert!(!json.contains(&id.to_string()));
    }

    #[test]
    fn import_minimal_entry_uses_defaults() {
        let mut m = manager();
        assert!(m.import(r#"{"counters":[{"mineralName":"Pirita","value":7}]}"#));
        assert_eq!(m.len(), 1);
        let c = &m.counters()[0];
        assert_eq!(c.value, 7);
        assert_eq!(c.increment, 1);
        assert_eq!(c.color, DEFAULT_COLOR);
    }

    #[test]
    fn import_garbage_returns_false_and_changes_nothing() {
        let mut m = manager();
        add(&mut m, "Cuarzo");
        let saves = m.store().saves();
        assert!(!m.import("not json"));
        assert!(!m.import(r#""not json""#));
        assert!(!m.import(r#"{"counters":[{"value":1}]}"#));
        assert_eq!(labels(&m), vec!["Cuarzo"]);
        assert_eq!(m.store().saves(), saves);
    }

    #[test]
    fn import_appends_even_when_labels_match() {
        let mut m = manager();
        let id = add(&mut m, "Cuarzo");
        m.increment(id);
        let count = m
            .import_counters(r#"{"counters":[{"mineralName":"Cuarzo","value":4}]}"#)
            .unwrap();
        assert_eq!(count, 1);
        assert_eq!(labels(&m), vec!["Cuarzo", "Cuarzo"]);
        assert_eq!(m.total_count(), 5);
        assert_ne!(m.counters()[1].id, id);
    }

    #[test]
    fn export_then_import_round_trips_fields() {
        let mut source = manager();
        let id = source.add(
            "Olivino",
            "#ef4444",
            Descriptors {
                packing: Some(Descriptor::new("Empaquetamiento cerrado", "Granos en contacto")),
                ..Descriptors::default()
            },
        );
        source.update(
            id.id,
            CounterPatch {
                max_value: Some(Some(20)),
                increment: Some(2),
                ..CounterPatch::default()
            },
        );
        source.increment(id.id);
        add(&mut source, "Cuarzo");

        let json = source.export_json().unwrap();
        let mut target = manager();
        assert!(target.import(&json));

        assert_eq!(target.len(), source.len());
        for (a, b) in source.counters().iter().zip(target.counters()) {
            assert_ne!(a.id, b.id);
            assert_eq!(a.label, b.label);
            assert_eq!(a.value, b.value);
            assert_eq!(a.increment, b.increment);
            assert_eq!(a.max_value, b.max_value);
            assert_eq!(a.color, b.color);
            assert_eq!(a.descriptors, b.descriptors);
            assert_eq!(a.created_at, b.created_at);
        }
    }

    #[test]
    fn total_count_saturates_instead_of_overflowing() {
        let mut m = manager();
        assert!(m.import(
            r#"{"counters":[{"mineralName":"A","value":18446744073709551615},{"mineralName":"B","value":1}]}"#
        ));
        assert_eq!(m.len(), 2);
        assert_eq!(m.total_count(), u64::MAX);
    }

    #[test]
    fn used_colors_follow_collection_order() {
        let mut m = manager();
        m.add("Cuarzo", "#3b82f6", Descriptors::default());
        m.add("Biotita", "#ef4444", Descriptors::default());
        assert_eq!(m.used_colors(), vec!["#3b82f6", "#ef4444"]);
    }
}
