use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct VendorLoginDto {
    pub username: String,
    pub password: String,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct VendorTokenLoginDto {
    pub token: String,
}

/// A freshly issued access token, shown to the vendor once.
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct VendorAccessTokenDto {
    pub token: String,
    pub expires_at: NaiveDateTime,
}
