//! Storage layer for the food donation dashboard.
//!
//! This crate contains:
//! - The shared in-memory database (one record store per entity)
//! - Sample data loaded at start-up
//! - Repository implementations
//! - Store operation metrics

pub mod db;
pub mod metrics;
pub mod repositories;
pub mod seed;
pub mod table;

pub use db::{Database, RecordCounts};
pub use table::Table;
