use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::message_response;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Vendor ID is not present in session")]
    VendorNotInSession,
    #[error("Vendor ID {0} not found in database despite having an active session")]
    VendorNotInDatabase(i32),
    #[error("Invalid vendor username or password")]
    InvalidCredentials,
    #[error("Invalid or expired vendor access token")]
    InvalidAccessToken,
    #[error("Request is missing the x-user-id header")]
    MissingActingUser,
    #[error("Header x-user-id is not a valid user ID")]
    InvalidActingUser,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::VendorNotInSession | Self::VendorNotInDatabase(_) => {
                tracing::debug!("{}", self);

                message_response(StatusCode::UNAUTHORIZED, "Vendor not logged in")
            }
            // Unknown username and wrong password are indistinguishable to the caller
            Self::InvalidCredentials | Self::InvalidAccessToken => {
                tracing::debug!("{}", self);

                message_response(StatusCode::UNAUTHORIZED, "Invalid vendor credentials")
            }
            Self::MissingActingUser | Self::InvalidActingUser => {
                tracing::debug!("{}", self);

                message_response(StatusCode::UNAUTHORIZED, self.to_string())
            }
        }
    }
}
