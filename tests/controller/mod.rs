//! Tests for HTTP controller endpoints.
//!
//! Handlers are called directly with their extractors and the responses are checked for
//! status codes and JSON bodies. The router module drives requests through the full router.

mod guest;
mod profile;
mod router;
mod seating;
mod template;
mod vendor;
mod vendor_auth;

use aisle::server::model::{actor::ActingUser, app::AppState};
use aisle_test_utils::prelude::*;
use axum::{http::StatusCode, response::IntoResponse};

use crate::util::body_json;
