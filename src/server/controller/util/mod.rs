//! Helpers shared by controllers.

pub mod vendor_session;
