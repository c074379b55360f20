use serde::{Deserialize, Serialize};

/// The response when an error occurs with an API request
#[derive(Serialize, Deserialize, Debug, utoipa::ToSchema)]
pub struct ErrorDto {
    /// The error message
    pub message: String,
    /// Raw error text, only present for internal server errors
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
