//! Server application core modules.
//!
//! All server-side functionality of Aisle: configuration, HTTP routing and controllers,
//! services holding the business rules, repositories over the database, and error types.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod util;
