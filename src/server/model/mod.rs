//! Server application models and type definitions.
//!
//! Application state, database model aliases, session data and the acting-user extractor.

pub mod actor;
pub mod app;
pub mod db;
pub mod session;
