//! HTTP controller endpoints for the Aisle web API.
//!
//! Axum handlers for the vendor directory, vendor self-service, seating charts, table
//! templates, guests and profiles. Controllers extract the acting user or vendor session,
//! call a service and return JSON. Each handler carries a utoipa annotation for the OpenAPI
//! document.

pub mod guest;
pub mod profile;
pub mod seating;
pub mod template;
pub mod util;
pub mod vendor;
pub mod vendor_auth;
