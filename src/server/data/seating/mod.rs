//! Seating chart repositories: tables, chairs and reusable table templates.

pub mod chair;
pub mod table;
pub mod template;
