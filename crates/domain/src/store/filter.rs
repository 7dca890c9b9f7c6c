//! Filter views over a record store.
//!
//! A filter combines equality predicates ([`Selection`]) and a text search
//! ([`SearchTerm`]) with logical AND. Inactive predicates match everything,
//! so a default filter yields the whole store.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer};
use tracing::debug;

use super::{Record, RecordStore};

/// Selector value meaning "no restriction".
pub const SELECT_ALL: &str = "all";

/// Equality predicate on one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection<E> {
    /// Matches every record.
    Any,
    /// Matches records whose field equals the value.
    Only(E),
}

impl<E> Default for Selection<E> {
    fn default() -> Self {
        Selection::Any
    }
}

impl<E: FromStr> Selection<E> {
    /// Parses a selector value; `"all"` and the empty string are inactive.
    pub fn parse(value: &str) -> Result<Self, E::Err> {
        let value = value.trim();
        if value.is_empty() || value.eq_ignore_ascii_case(SELECT_ALL) {
            return Ok(Selection::Any);
        }
        value.parse().map(Selection::Only)
    }
}

impl<E: PartialEq> Selection<E> {
    pub fn matches(&self, value: &E) -> bool {
        match self {
            Selection::Any => true,
            Selection::Only(expected) => expected == value,
        }
    }
}

impl<E> Selection<E> {
    pub fn is_active(&self) -> bool {
        matches!(self, Selection::Only(_))
    }
}

impl<'de, E> Deserialize<'de> for Selection<E>
where
    E: FromStr,
    E::Err: fmt::Display,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Selection::parse(&raw).map_err(serde::de::Error::custom)
    }
}

/// Case-insensitive substring predicate across a record's text fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchTerm(String);

impl SearchTerm {
    /// Surrounding whitespace is dropped, so `" rice"` matches like `"rice"`.
    pub fn new(raw: &str) -> Self {
        Self(raw.trim().to_lowercase())
    }

    pub fn is_active(&self) -> bool {
        !self.0.is_empty()
    }

    /// Returns `true` if any of `fields` contains the term.
    pub fn matches_any(&self, fields: &[&str]) -> bool {
        !self.is_active() || shared::text::any_contains_folded(fields, &self.0)
    }
}

impl<'de> Deserialize<'de> for SearchTerm {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(SearchTerm::new(&raw))
    }
}

/// Predicate over records of one entity type.
pub trait RecordFilter<T> {
    fn matches(&self, record: &T) -> bool;
}

/// Filter with every predicate inactive.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoFilter;

impl<T> RecordFilter<T> for NoFilter {
    fn matches(&self, _record: &T) -> bool {
        true
    }
}

/// Returns the records matching `filter`, in store order.
pub fn filter_view<'a, T, F>(store: &'a RecordStore<T>, filter: &F) -> Vec<&'a T>
where
    T: Record,
    F: RecordFilter<T>,
{
    let view: Vec<&T> = store.iter().filter(|record| filter.matches(record)).collect();
    debug!(total = store.len(), matched = view.len(), "Evaluated filter view");
    view
}
