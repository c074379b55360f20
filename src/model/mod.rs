//! Request and response bodies of the HTTP API.

pub mod api;
pub mod guest;
pub mod profile;
pub mod seating;
pub mod vendor;
pub mod vendor_auth;
