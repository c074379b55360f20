use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::message_response;

/// Errors about the existence or mutability of a stored row.
#[derive(Error, Debug)]
pub enum ResourceError {
    /// No row matched; rows owned by another user are reported the same way.
    #[error("{kind} {id} not found")]
    NotFound { kind: &'static str, id: String },
    /// Predefined table templates cannot be modified or removed.
    #[error("Table template {0} is predefined and cannot be modified")]
    PredefinedTemplate(String),
}

impl ResourceError {
    pub fn not_found(kind: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            kind,
            id: id.to_string(),
        }
    }
}

impl IntoResponse for ResourceError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound { kind, .. } => {
                tracing::debug!("{}", self);

                message_response(StatusCode::NOT_FOUND, format!("{} not found", kind))
            }
            Self::PredefinedTemplate(_) => {
                tracing::debug!("{}", self);

                message_response(StatusCode::CONFLICT, self.to_string())
            }
        }
    }
}
