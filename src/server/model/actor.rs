//! Identity of the planner making a request.
//!
//! End-user authentication happens upstream; the auth layer in front of this service forwards
//! the authenticated user's ID in the `x-user-id` header.

use axum::{extract::FromRequestParts, http::request::Parts};
use uuid::Uuid;

use crate::server::error::{auth::AuthError, Error};

pub const ACTING_USER_HEADER: &str = "x-user-id";

/// The authenticated planner a request acts on behalf of.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ActingUser(pub Uuid);

impl ActingUser {
    pub fn id(&self) -> Uuid {
        self.0
    }

    fn from_parts(parts: &Parts) -> Result<Self, AuthError> {
        let value = parts
            .headers
            .get(ACTING_USER_HEADER)
            .ok_or(AuthError::MissingActingUser)?;

        let value = value.to_str().map_err(|_| AuthError::InvalidActingUser)?;

        Uuid::parse_str(value.trim())
            .map(ActingUser)
            .map_err(|_| AuthError::InvalidActingUser)
    }
}

impl<S> FromRequestParts<S> for ActingUser
where
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self::from_parts(parts)?)
    }
}
