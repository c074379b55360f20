//! Utility functions and helpers for server operations.
//!
//! Stateless helpers shared across services and the admin CLI: template slug checks, vendor
//! access token generation and hashing, and Argon2 password hashing.

pub mod password;
pub mod slug;
pub mod token;
