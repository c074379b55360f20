//! Error types for the Aisle server application.
//!
//! Domain errors (configuration, missing resources, validation, vendor authentication) each
//! live in their own module and carry their own HTTP mapping. The top-level [`Error`] collects
//! them together with library errors so handlers can use `?` throughout.

pub mod auth;
pub mod config;
pub mod resource;
pub mod validation;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        auth::AuthError, config::ConfigError, resource::ResourceError,
        validation::ValidationError,
    },
};

/// Main error type for the Aisle server application.
///
/// # Error Categories
/// - Configuration errors (missing/invalid environment variables)
/// - Resource errors (not found, conflicting writes)
/// - Validation errors (bad request payloads)
/// - Authentication errors (vendor login, acting user header)
/// - External library errors (database, sessions, password hashing)
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Requested row does not exist or cannot be written in its current state.
    #[error(transparent)]
    ResourceError(#[from] ResourceError),
    /// Request payload failed validation.
    #[error(transparent)]
    ValidationError(#[from] ValidationError),
    /// Vendor session or acting user could not be established.
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Parse error (failed to parse a value from string or other format).
    #[error("Failed to parse value: {0:?}")]
    ParseError(String),
    /// Internal error indicating a bug in Aisle's code.
    #[error("Internal error with Aisle's code, this indicates a bug: {0}")]
    InternalError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Session error (session retrieval, storage, serialization).
    #[error(transparent)]
    SessionError(#[from] tower_sessions::session::Error),
    /// Password hashing error.
    #[error("Failed to hash password: {0}")]
    PasswordHashError(argon2::password_hash::Error),
}

impl From<argon2::password_hash::Error> for Error {
    fn from(err: argon2::password_hash::Error) -> Self {
        Self::PasswordHashError(err)
    }
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - Validation failures
/// - 401 Unauthorized - Vendor authentication and acting user failures
/// - 404 Not Found - Missing or foreign-owned rows
/// - 409 Conflict - Writes against immutable rows
/// - 500 Internal Server Error - Everything else, logged with the raw error
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::ResourceError(err) => err.into_response(),
            Self::ValidationError(err) => err.into_response(),
            Self::AuthError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// The raw error text is logged and echoed in the `error` field of the response body.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        let error = self.0.to_string();
        tracing::error!("{}", error);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                message: "Internal server error".to_string(),
                error: Some(error),
            }),
        )
            .into_response()
    }
}

/// Builds a JSON error response carrying only a message.
pub(crate) fn message_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorDto {
            message: message.into(),
            error: None,
        }),
    )
        .into_response()
}
