use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        profile::{ProfileDto, UpsertProfileDto},
    },
    server::{
        error::Error,
        model::{actor::ActingUser, app::AppState},
        service::profile::ProfileService,
    },
};

pub static PROFILE_TAG: &str = "profile";

/// Get the acting user's profile
#[utoipa::path(
    get,
    path = "/api/profile",
    tag = PROFILE_TAG,
    params(("x-user-id" = String, Header, description = "Acting user ID")),
    responses(
        (status = 200, description = "Profile found", body = ProfileDto),
        (status = 401, description = "Missing or invalid acting user", body = ErrorDto),
        (status = 404, description = "Profile not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_profile(
    State(state): State<AppState>,
    user: ActingUser,
) -> Result<impl IntoResponse, Error> {
    let profile = ProfileService::new(&state.db).get(user.id()).await?;

    Ok((StatusCode::OK, Json(profile)))
}

/// Create or update the acting user's profile
#[utoipa::path(
    put,
    path = "/api/profile",
    tag = PROFILE_TAG,
    params(("x-user-id" = String, Header, description = "Acting user ID")),
    request_body = UpsertProfileDto,
    responses(
        (status = 200, description = "Profile stored", body = ProfileDto),
        (status = 400, description = "Invalid profile", body = ErrorDto),
        (status = 401, description = "Missing or invalid acting user", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn put_profile(
    State(state): State<AppState>,
    user: ActingUser,
    Json(body): Json<UpsertProfileDto>,
) -> Result<impl IntoResponse, Error> {
    let profile = ProfileService::new(&state.db)
        .upsert(user.id(), body)
        .await?;

    Ok((StatusCode::OK, Json(profile)))
}
