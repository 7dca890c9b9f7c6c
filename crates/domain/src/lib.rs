//! Domain layer for the food donation dashboard.
//!
//! This crate contains:
//! - The generic record store, filter view and upsert form
//! - Domain models (Donation, FoodItem, NgoPartner, Message, Notification, Report)
//! - Map view state and the geocoding seam
//! - Business logic services

pub mod models;
pub mod services;
pub mod store;
