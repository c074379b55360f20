//! Aisle: a wedding planning backend.
//!
//! Planners keep a guest list and lay out a seating chart of tables and chairs, optionally
//! starting from table templates. Vendors are listed in a categorized directory and can log
//! in to maintain their own listing.

pub mod model;
pub mod server;
