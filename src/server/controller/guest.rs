use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        guest::{GuestDto, GuestInputDto},
    },
    server::{
        error::Error,
        model::{actor::ActingUser, app::AppState},
        service::guest::GuestService,
    },
};

pub static GUEST_TAG: &str = "guest";

/// List the acting user's guests
///
/// Guests are ordered by last name then first name.
#[utoipa::path(
    get,
    path = "/api/guests",
    tag = GUEST_TAG,
    params(("x-user-id" = String, Header, description = "Acting user ID")),
    responses(
        (status = 200, description = "Guests of the acting user", body = Vec<GuestDto>),
        (status = 401, description = "Missing or invalid acting user", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_guests(
    State(state): State<AppState>,
    user: ActingUser,
) -> Result<impl IntoResponse, Error> {
    let guests = GuestService::new(&state.db).get_all(user.id()).await?;

    Ok((StatusCode::OK, Json(guests)))
}

/// Add a guest to the acting user's list
#[utoipa::path(
    post,
    path = "/api/guests",
    tag = GUEST_TAG,
    params(("x-user-id" = String, Header, description = "Acting user ID")),
    request_body = GuestInputDto,
    responses(
        (status = 201, description = "Guest created", body = GuestDto),
        (status = 400, description = "Invalid guest", body = ErrorDto),
        (status = 401, description = "Missing or invalid acting user", body = ErrorDto),
        (status = 404, description = "Profile or table not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_guest(
    State(state): State<AppState>,
    user: ActingUser,
    Json(body): Json<GuestInputDto>,
) -> Result<impl IntoResponse, Error> {
    let guest = GuestService::new(&state.db).create(user.id(), body).await?;

    Ok((StatusCode::CREATED, Json(guest)))
}

#[utoipa::path(
    get,
    path = "/api/guests/{id}",
    tag = GUEST_TAG,
    params(
        ("id" = i32, Path, description = "Guest ID"),
        ("x-user-id" = String, Header, description = "Acting user ID")
    ),
    responses(
        (status = 200, description = "Guest found", body = GuestDto),
        (status = 401, description = "Missing or invalid acting user", body = ErrorDto),
        (status = 404, description = "Guest not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_guest(
    State(state): State<AppState>,
    user: ActingUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let guest = GuestService::new(&state.db).get(user.id(), id).await?;

    Ok((StatusCode::OK, Json(guest)))
}

/// Replace a guest's details
#[utoipa::path(
    put,
    path = "/api/guests/{id}",
    tag = GUEST_TAG,
    params(
        ("id" = i32, Path, description = "Guest ID"),
        ("x-user-id" = String, Header, description = "Acting user ID")
    ),
    request_body = GuestInputDto,
    responses(
        (status = 200, description = "Guest updated", body = GuestDto),
        (status = 400, description = "Invalid guest", body = ErrorDto),
        (status = 401, description = "Missing or invalid acting user", body = ErrorDto),
        (status = 404, description = "Guest or table not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_guest(
    State(state): State<AppState>,
    user: ActingUser,
    Path(id): Path<i32>,
    Json(body): Json<GuestInputDto>,
) -> Result<impl IntoResponse, Error> {
    let guest = GuestService::new(&state.db)
        .update(user.id(), id, body)
        .await?;

    Ok((StatusCode::OK, Json(guest)))
}

#[utoipa::path(
    delete,
    path = "/api/guests/{id}",
    tag = GUEST_TAG,
    params(
        ("id" = i32, Path, description = "Guest ID"),
        ("x-user-id" = String, Header, description = "Acting user ID")
    ),
    responses(
        (status = 204, description = "Guest deleted"),
        (status = 401, description = "Missing or invalid acting user", body = ErrorDto),
        (status = 404, description = "Guest not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_guest(
    State(state): State<AppState>,
    user: ActingUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    GuestService::new(&state.db).delete(user.id(), id).await?;

    Ok(StatusCode::NO_CONTENT)
}
