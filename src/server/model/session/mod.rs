//! Session data models.
//!
//! Type-safe wrappers for values stored in the tower-sessions store, each with methods for
//! inserting, retrieving and removing its piece of session state.

pub mod vendor;
