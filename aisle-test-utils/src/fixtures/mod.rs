//! Test fixture modules for database row creation.
//!
//! - `planner` - Profiles, guests, seating tables, chairs and table templates
//! - `vendor` - Vendor categories, vendors and access tokens
//! - `factory` - In-memory models that never touch the database

pub mod factory;
pub mod planner;
pub mod vendor;
