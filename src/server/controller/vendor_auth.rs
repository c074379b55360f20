use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        vendor::{UpdateVendorListingDto, VendorDto},
        vendor_auth::{VendorAccessTokenDto, VendorLoginDto, VendorTokenLoginDto},
    },
    server::{
        controller::util::vendor_session::get_vendor_id_from_session,
        error::Error,
        model::{app::AppState, session::vendor::SessionVendorId},
        service::vendor_auth::VendorAuthService,
    },
};

pub static VENDOR_AUTH_TAG: &str = "vendor-auth";

/// Log a vendor in with username and password
///
/// On success the vendor ID is stored in the session.
#[utoipa::path(
    post,
    path = "/api/vendor-auth/login",
    tag = VENDOR_AUTH_TAG,
    request_body = VendorLoginDto,
    responses(
        (status = 200, description = "Logged in", body = VendorDto),
        (status = 401, description = "Invalid vendor credentials", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(body): Json<VendorLoginDto>,
) -> Result<impl IntoResponse, Error> {
    let auth_service = VendorAuthService::new(&state.db);

    let vendor = auth_service.login(&body.username, &body.password).await?;

    session.cycle_id().await?;
    SessionVendorId::insert(&session, vendor.id).await?;

    let vendor = auth_service.get_current(vendor.id).await?;

    Ok((StatusCode::OK, Json(vendor)))
}

/// Log a vendor in with an access token
#[utoipa::path(
    post,
    path = "/api/vendor-auth/token",
    tag = VENDOR_AUTH_TAG,
    request_body = VendorTokenLoginDto,
    responses(
        (status = 200, description = "Logged in", body = VendorDto),
        (status = 401, description = "Invalid vendor credentials", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn token_login(
    State(state): State<AppState>,
    session: Session,
    Json(body): Json<VendorTokenLoginDto>,
) -> Result<impl IntoResponse, Error> {
    let auth_service = VendorAuthService::new(&state.db);

    let vendor = auth_service.login_with_token(&body.token).await?;

    session.cycle_id().await?;
    SessionVendorId::insert(&session, vendor.id).await?;

    let vendor = auth_service.get_current(vendor.id).await?;

    Ok((StatusCode::OK, Json(vendor)))
}

/// Get the logged-in vendor's listing
#[utoipa::path(
    get,
    path = "/api/vendor-auth/me",
    tag = VENDOR_AUTH_TAG,
    responses(
        (status = 200, description = "Logged-in vendor", body = VendorDto),
        (status = 401, description = "Vendor not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_me(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let vendor_id = get_vendor_id_from_session(&session).await?;

    let vendor = VendorAuthService::new(&state.db)
        .get_current(vendor_id)
        .await?;

    Ok((StatusCode::OK, Json(vendor)))
}

/// Update the logged-in vendor's listing
///
/// Only the fields present in the body are changed.
#[utoipa::path(
    put,
    path = "/api/vendor-auth/me",
    tag = VENDOR_AUTH_TAG,
    request_body = UpdateVendorListingDto,
    responses(
        (status = 200, description = "Listing updated", body = VendorDto),
        (status = 400, description = "A list field is not a JSON array", body = ErrorDto),
        (status = 401, description = "Vendor not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_me(
    State(state): State<AppState>,
    session: Session,
    Json(body): Json<UpdateVendorListingDto>,
) -> Result<impl IntoResponse, Error> {
    let vendor_id = get_vendor_id_from_session(&session).await?;

    let vendor = VendorAuthService::new(&state.db)
        .update_listing(vendor_id, body)
        .await?;

    Ok((StatusCode::OK, Json(vendor)))
}

/// Issue a new access token for the logged-in vendor
///
/// Every previously issued token stops working.
#[utoipa::path(
    post,
    path = "/api/vendor-auth/me/token",
    tag = VENDOR_AUTH_TAG,
    responses(
        (status = 201, description = "Token issued", body = VendorAccessTokenDto),
        (status = 400, description = "Token lifetime out of range", body = ErrorDto),
        (status = 401, description = "Vendor not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn rotate_token(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let vendor_id = get_vendor_id_from_session(&session).await?;

    let issued = VendorAuthService::new(&state.db)
        .rotate_access_token(vendor_id, state.vendor_token_ttl_days)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(VendorAccessTokenDto {
            token: issued.token,
            expires_at: issued.expires_at,
        }),
    ))
}

/// Log the vendor out by clearing the session
#[utoipa::path(
    post,
    path = "/api/vendor-auth/logout",
    tag = VENDOR_AUTH_TAG,
    responses(
        (status = 204, description = "Logged out"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, Error> {
    if SessionVendorId::get(&session).await?.is_some() {
        session.flush().await?;
    }

    Ok(StatusCode::NO_CONTENT)
}
