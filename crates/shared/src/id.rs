//! Record identifiers.
//!
//! Identifiers are opaque strings. Generated identifiers are the number of
//! milliseconds since the Unix epoch, bumped forward when several records are
//! created within the same millisecond so that every issued value is unique.

use std::fmt;
use std::sync::atomic::{AtomicI64, Ordering};

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Last identifier value handed out by [`generate`].
static LAST_ISSUED: AtomicI64 = AtomicI64::new(0);

/// Identifier of a record within its store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    /// Wraps an existing identifier value (seed data, path parameters).
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Placeholder for records that have not been inserted into a store yet.
    pub fn unassigned() -> Self {
        Self(String::new())
    }

    /// Whether this identifier is the unassigned placeholder.
    pub fn is_unassigned(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for RecordId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Generates a fresh time-based identifier.
///
/// Values are strictly increasing for the lifetime of the process.
pub fn generate() -> RecordId {
    let now = Utc::now().timestamp_millis();
    let mut last = LAST_ISSUED.load(Ordering::Relaxed);

    loop {
        let next = if now > last { now } else { last + 1 };
        match LAST_ISSUED.compare_exchange_weak(last, next, Ordering::SeqCst, Ordering::Relaxed) {
            Ok(_) => return RecordId(next.to_string()),
            Err(actual) => last = actual,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generate_is_unique_within_same_millisecond() {
        let ids: Vec<RecordId> = (0..1000).map(|_| generate()).collect();
        let unique: HashSet<&RecordId> = ids.iter().collect();
        assert_eq!(unique.len(), ids.len());
    }

    #[test]
    fn test_generate_is_strictly_increasing() {
        let first: i64 = generate().as_str().parse().unwrap();
        let second: i64 = generate().as_str().parse().unwrap();
        assert!(second > first);
    }

    #[test]
    fn test_generate_is_time_based() {
        let before = Utc::now().timestamp_millis();
        let id: i64 = generate().as_str().parse().unwrap();
        assert!(id >= before);
    }

    #[test]
    fn test_unassigned() {
        let id = RecordId::unassigned();
        assert!(id.is_unassigned());
        assert!(!RecordId::new("1").is_unassigned());
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let id = RecordId::new("42");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"42\"");

        let parsed: RecordId = serde_json::from_str("\"7\"").unwrap();
        assert_eq!(parsed, RecordId::from("7"));
    }

    #[test]
    fn test_display() {
        assert_eq!(RecordId::new("abc").to_string(), "abc");
    }
}
