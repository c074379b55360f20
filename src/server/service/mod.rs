//! Business logic between the HTTP controllers and the repositories.
//!
//! Services validate requests, scope planner data by the acting user, open transactions for
//! multi-step writes and shape database models into API DTOs.

pub mod guest;
pub mod profile;
pub mod seating;
pub mod template;
pub mod vendor;
pub mod vendor_auth;
