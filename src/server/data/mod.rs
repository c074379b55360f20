//! Data access layer repositories.
//!
//! Each repository wraps one table and is generic over [`sea_orm::ConnectionTrait`], so the
//! same methods run against the pool or inside a transaction. Planner-owned rows are always
//! filtered by `created_by`.

pub mod guest;
pub mod profile;
pub mod seating;
pub mod vendor;
