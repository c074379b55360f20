use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::message_response;

#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("{0} must not be empty")]
    EmptyField(&'static str),
    #[error("{field} must be a positive number, got {value}")]
    NonPositiveDimension { field: &'static str, value: f64 },
    #[error("seats must be between 0 and {max}, got {value}")]
    SeatCountOutOfRange { value: i32, max: i32 },
    #[error("Table template ID {0:?} must be a lowercase slug of letters, digits and dashes")]
    InvalidTemplateId(String),
    #[error("Either a template ID or a shape with width and length is required")]
    MissingTableLayout,
    #[error("{0} must be a JSON list")]
    NotAList(&'static str),
    #[error("Token lifetime must be between 1 and {max} days, got {value}")]
    TokenLifetimeOutOfRange { value: i64, max: i64 },
}

impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        tracing::debug!("Validation error: {}", self);

        message_response(StatusCode::BAD_REQUEST, self.to_string())
    }
}
