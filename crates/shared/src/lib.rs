//! Shared utilities and common types for the food donation dashboard.
//!
//! This crate provides functionality used across all other crates:
//! - Record identifiers and their time-based generator
//! - Case-insensitive text matching
//! - Common field validation logic
//! - A serde helper for clearable partial-update fields

pub mod id;
pub mod nullable;
pub mod text;
pub mod validation;

pub use id::RecordId;
