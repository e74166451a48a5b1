//! Ordered in-memory record collections with upsert semantics.
//!
//! # Responsibility
//! - Provide the single CRUD reconciliation contract shared by shipments,
//!   tasks, notes and custom events.
//! - Preserve display order: newest first, edits in place.
//!
//! # Invariants
//! - At most one record per id.
//! - `save` of a known id keeps the record's position.
//! - `save` of an unknown id prepends.
//! - Mutations targeting a missing id are no-ops.

use crate::model::event::CustomEvent;
use crate::model::note::Note;
use crate::model::shipment::Shipment;
use crate::model::task::Task;

/// Record addressable by a string identifier.
pub trait Record {
    fn record_id(&self) -> &str;
}

impl Record for Shipment {
    fn record_id(&self) -> &str {
        &self.id
    }
}

impl Record for Task {
    fn record_id(&self) -> &str {
        &self.id
    }
}

impl Record for Note {
    fn record_id(&self) -> &str {
        &self.id
    }
}

impl Record for CustomEvent {
    fn record_id(&self) -> &str {
        &self.id
    }
}

/// Result of [`EntityStore::save`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// New id, record prepended.
    Inserted,
    /// Known id, record replaced at its existing position.
    Replaced,
}

/// Ordered collection keyed by [`Record::record_id`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityStore<R> {
    records: Vec<R>,
}

impl<R> Default for EntityStore<R> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
        }
    }
}

impl<R: Record> EntityStore<R> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from boot data, keeping display order.
    ///
    /// Later duplicates of an id are dropped so the uniqueness invariant holds
    /// even for hand-written seed lists.
    pub fn from_records(records: impl IntoIterator<Item = R>) -> Self {
        let mut store = Self::new();
        for record in records {
            if !store.contains(record.record_id()) {
                store.records.push(record);
            }
        }
        store
    }

    /// Upserts one record.
    pub fn save(&mut self, record: R) -> SaveOutcome {
        match self.position(record.record_id()) {
            Some(index) => {
                self.records[index] = record;
                SaveOutcome::Replaced
            }
            None => {
                self.records.insert(0, record);
                SaveOutcome::Inserted
            }
        }
    }

    /// Removes one record, returning it when it existed.
    pub fn delete(&mut self, id: &str) -> Option<R> {
        let index = self.position(id)?;
        Some(self.records.remove(index))
    }

    /// Applies `change` to the record in place.
    ///
    /// Returns `false` without calling `change` when `id` is unknown.
    pub fn update(&mut self, id: &str, change: impl FnOnce(&mut R)) -> bool {
        match self.records.iter_mut().find(|record| record.record_id() == id) {
            Some(record) => {
                change(record);
                true
            }
            None => false,
        }
    }

    pub fn get(&self, id: &str) -> Option<&R> {
        self.records.iter().find(|record| record.record_id() == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.position(id).is_some()
    }

    pub fn first(&self) -> Option<&R> {
        self.records.first()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, R> {
        self.records.iter()
    }

    pub fn as_slice(&self) -> &[R] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.records
            .iter()
            .position(|record| record.record_id() == id)
    }
}

impl<'a, R: Record> IntoIterator for &'a EntityStore<R> {
    type Item = &'a R;
    type IntoIter = std::slice::Iter<'a, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::{EntityStore, Record, SaveOutcome};

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Row {
        id: String,
        value: u32,
    }

    impl Record for Row {
        fn record_id(&self) -> &str {
            &self.id
        }
    }

    fn row(id: &str, value: u32) -> Row {
        Row {
            id: id.to_string(),
            value,
        }
    }

    #[test]
    fn from_records_drops_duplicate_ids() {
        let store = EntityStore::from_records(vec![row("a", 1), row("b", 2), row("a", 3)]);
        assert_eq!(store.len(), 2);
        assert_eq!(store.get("a").map(|r| r.value), Some(1));
    }

    #[test]
    fn update_reports_missing_id_without_calling_closure() {
        let mut store = EntityStore::from_records(vec![row("a", 1)]);
        let mut called = false;
        assert!(!store.update("zzz", |_| called = true));
        assert!(!called);
        assert!(store.update("a", |r| r.value = 9));
        assert_eq!(store.get("a").map(|r| r.value), Some(9));
    }

    #[test]
    fn save_reports_outcome() {
        let mut store = EntityStore::new();
        assert_eq!(store.save(row("a", 1)), SaveOutcome::Inserted);
        assert_eq!(store.save(row("a", 2)), SaveOutcome::Replaced);
        assert_eq!(store.len(), 1);
    }
}
