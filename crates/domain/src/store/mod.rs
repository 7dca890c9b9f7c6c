//! Generic in-memory record store.
//!
//! A [`RecordStore`] is an ordered sequence of records of one entity type.
//! Every page of the dashboard owns one store; filtering and form handling
//! live in the [`filter`] and [`form`] submodules.

pub mod filter;
pub mod form;

use shared::id::{self, RecordId};
use thiserror::Error;

pub use filter::{filter_view, NoFilter, RecordFilter, SearchTerm, Selection};
pub use form::{Draft, FormError, SubmitContext, SubmitOutcome, UpsertForm};

/// A record that can be held in a [`RecordStore`].
pub trait Record: Clone {
    fn id(&self) -> &RecordId;

    fn set_id(&mut self, id: RecordId);
}

/// A set of field changes that can be merged into an existing record.
///
/// Closures taking `&mut T` are patches too, which keeps one-off status
/// transitions terse.
pub trait Patch<T> {
    fn apply_to(self, record: &mut T);
}

impl<T, F> Patch<T> for F
where
    F: FnOnce(&mut T),
{
    fn apply_to(self, record: &mut T) {
        self(record)
    }
}

/// Where newly added records are placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertPosition {
    /// Newest record first.
    Front,
    /// Newest record last.
    Back,
}

/// Errors raised while building a store.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("Duplicate record id: {0}")]
    DuplicateId(RecordId),
}

/// Ordered in-memory collection of records of one entity type.
#[derive(Debug, Clone)]
pub struct RecordStore<T> {
    records: Vec<T>,
    position: InsertPosition,
}

impl<T: Record> RecordStore<T> {
    /// Creates an empty store.
    pub fn new(position: InsertPosition) -> Self {
        Self {
            records: Vec::new(),
            position,
        }
    }

    /// Creates a store holding `records` in the given order, keeping their ids.
    pub fn with_records(position: InsertPosition, records: Vec<T>) -> Result<Self, StoreError> {
        let mut store = Self::new(position);
        for record in records {
            if store.contains(record.id()) {
                return Err(StoreError::DuplicateId(record.id().clone()));
            }
            store.records.push(record);
        }
        Ok(store)
    }

    pub fn position(&self) -> InsertPosition {
        self.position
    }

    /// Inserts a record under a freshly generated identifier.
    ///
    /// Any identifier already on `record` is replaced.
    pub fn add(&mut self, mut record: T) -> &T {
        record.set_id(self.fresh_id());

        match self.position {
            InsertPosition::Front => {
                self.records.insert(0, record);
                &self.records[0]
            }
            InsertPosition::Back => {
                let index = self.records.len();
                self.records.push(record);
                &self.records[index]
            }
        }
    }

    /// Merges `patch` into the record with `id`.
    ///
    /// Returns `None` without touching the store when no such record exists.
    pub fn update<P: Patch<T>>(&mut self, id: &RecordId, patch: P) -> Option<&T> {
        let record = self.records.iter_mut().find(|r| r.id() == id)?;
        patch.apply_to(record);
        Some(&*record)
    }

    /// Removes the record with `id`, returning it if it was present.
    pub fn remove(&mut self, id: &RecordId) -> Option<T> {
        let index = self.records.iter().position(|r| r.id() == id)?;
        Some(self.records.remove(index))
    }

    pub fn get(&self, id: &RecordId) -> Option<&T> {
        self.records.iter().find(|r| r.id() == id)
    }

    pub fn contains(&self, id: &RecordId) -> bool {
        self.get(id).is_some()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.records.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn fresh_id(&self) -> RecordId {
        loop {
            let candidate = id::generate();
            if !self.contains(&candidate) {
                return candidate;
            }
        }
    }
}

impl<'a, T: Record> IntoIterator for &'a RecordStore<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::collections::HashSet;

    #[derive(Debug, Clone, PartialEq)]
    pub(crate) struct Item {
        pub id: RecordId,
        pub label: String,
        pub count: u32,
    }

    impl Item {
        pub fn new(id: &str, label: &str) -> Self {
            Self {
                id: RecordId::new(id),
                label: label.to_string(),
                count: 0,
            }
        }
    }

    impl Record for Item {
        fn id(&self) -> &RecordId {
            &self.id
        }

        fn set_id(&mut self, id: RecordId) {
            self.id = id;
        }
    }

    fn seeded(position: InsertPosition) -> RecordStore<Item> {
        RecordStore::with_records(
            position,
            vec![Item::new("1", "one"), Item::new("2", "two"), Item::new("3", "three")],
        )
        .unwrap()
    }

    fn labels(store: &RecordStore<Item>) -> Vec<&str> {
        store.iter().map(|i| i.label.as_str()).collect()
    }

    #[test]
    fn test_with_records_keeps_order_and_ids() {
        let store = seeded(InsertPosition::Back);
        assert_eq!(store.len(), 3);
        assert_eq!(labels(&store), vec!["one", "two", "three"]);
        assert!(store.contains(&RecordId::new("2")));
    }

    #[test]
    fn test_with_records_rejects_duplicate_ids() {
        let result = RecordStore::with_records(
            InsertPosition::Back,
            vec![Item::new("1", "a"), Item::new("1", "b")],
        );
        assert_eq!(result.unwrap_err(), StoreError::DuplicateId(RecordId::new("1")));
    }

    #[test]
    fn test_add_front_prepends() {
        let mut store = seeded(InsertPosition::Front);
        store.add(Item::new("", "new"));
        assert_eq!(labels(&store), vec!["new", "one", "two", "three"]);
    }

    #[test]
    fn test_add_back_appends() {
        let mut store = seeded(InsertPosition::Back);
        store.add(Item::new("", "new"));
        assert_eq!(labels(&store), vec!["one", "two", "three", "new"]);
    }

    #[test]
    fn test_add_assigns_fresh_unique_id() {
        let mut store = seeded(InsertPosition::Back);
        let before: HashSet<RecordId> = store.iter().map(|i| i.id.clone()).collect();

        let added = store.add(Item::new("1", "claims an existing id")).id.clone();

        assert!(!before.contains(&added));
        assert!(!added.is_unassigned());
        assert_eq!(store.len(), before.len() + 1);
        assert_eq!(store.iter().filter(|i| i.id == added).count(), 1);
    }

    #[test]
    fn test_add_many_ids_stay_unique() {
        let mut store = RecordStore::new(InsertPosition::Front);
        for n in 0..200 {
            store.add(Item::new("", &n.to_string()));
        }
        let ids: HashSet<&RecordId> = store.iter().map(|i| &i.id).collect();
        assert_eq!(ids.len(), 200);
    }

    #[test]
    fn test_update_merges_patch() {
        let mut store = seeded(InsertPosition::Back);
        let updated = store
            .update(&RecordId::new("2"), |item: &mut Item| item.count += 5)
            .cloned();

        assert_eq!(updated.unwrap().count, 5);
        assert_eq!(store.get(&RecordId::new("2")).unwrap().count, 5);
        assert_eq!(labels(&store), vec!["one", "two", "three"]);
    }

    #[test]
    fn test_update_missing_id_is_noop() {
        let mut store = seeded(InsertPosition::Back);
        let before: Vec<Item> = store.iter().cloned().collect();

        let result = store.update(&RecordId::new("99"), |item: &mut Item| item.count = 1);

        assert!(result.is_none());
        assert_eq!(store.as_slice(), before.as_slice());
    }

    #[test]
    fn test_remove_returns_record() {
        let mut store = seeded(InsertPosition::Back);
        let removed = store.remove(&RecordId::new("1")).unwrap();
        assert_eq!(removed.label, "one");
        assert_eq!(labels(&store), vec!["two", "three"]);
    }

    #[test]
    fn test_remove_twice_equals_once() {
        let mut once = seeded(InsertPosition::Back);
        once.remove(&RecordId::new("3"));

        let mut twice = seeded(InsertPosition::Back);
        twice.remove(&RecordId::new("3"));
        let second = twice.remove(&RecordId::new("3"));

        assert!(second.is_none());
        assert_eq!(once.as_slice(), twice.as_slice());
    }

    #[test]
    fn test_empty_store() {
        let store: RecordStore<Item> = RecordStore::new(InsertPosition::Back);
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
        assert!(store.get(&RecordId::new("1")).is_none());
    }
}
