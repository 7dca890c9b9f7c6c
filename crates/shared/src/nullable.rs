//! Serde helper for partial-update fields that can be cleared.
//!
//! Use with `#[serde(default, deserialize_with = "shared::nullable::deserialize")]`
//! on an `Option<Option<T>>` field:
//! - field absent: `None` (leave unchanged)
//! - field `null`: `Some(None)` (clear)
//! - field set: `Some(Some(value))`

use serde::{Deserialize, Deserializer};

pub fn deserialize<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
