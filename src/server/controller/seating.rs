use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        seating::{
            CreateSeatingTableDto, SeatGuestDto, SeatingTableDto, TableChairDto,
            UpdateSeatingTableDto,
        },
    },
    server::{
        error::Error,
        model::{actor::ActingUser, app::AppState},
        service::seating::SeatingService,
    },
};

pub static SEATING_TAG: &str = "seating";

/// List the acting user's seating tables with their chairs
#[utoipa::path(
    get,
    path = "/api/seating/tables",
    tag = SEATING_TAG,
    params(("x-user-id" = String, Header, description = "Acting user ID")),
    responses(
        (status = 200, description = "Tables ordered by ID", body = Vec<SeatingTableDto>),
        (status = 401, description = "Missing or invalid acting user", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_tables(
    State(state): State<AppState>,
    user: ActingUser,
) -> Result<impl IntoResponse, Error> {
    let tables = SeatingService::new(&state.db).get_tables(user.id()).await?;

    Ok((StatusCode::OK, Json(tables)))
}

/// Create a seating table and its chairs
///
/// Give either a `template_id` or a full layout (`shape`, `width`, `length`).
#[utoipa::path(
    post,
    path = "/api/seating/tables",
    tag = SEATING_TAG,
    params(("x-user-id" = String, Header, description = "Acting user ID")),
    request_body = CreateSeatingTableDto,
    responses(
        (status = 201, description = "Table created", body = SeatingTableDto),
        (status = 400, description = "Invalid layout or seat count", body = ErrorDto),
        (status = 401, description = "Missing or invalid acting user", body = ErrorDto),
        (status = 404, description = "Template or profile not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_table(
    State(state): State<AppState>,
    user: ActingUser,
    Json(body): Json<CreateSeatingTableDto>,
) -> Result<impl IntoResponse, Error> {
    let table = SeatingService::new(&state.db)
        .create_table(user.id(), body)
        .await?;

    Ok((StatusCode::CREATED, Json(table)))
}

#[utoipa::path(
    get,
    path = "/api/seating/tables/{id}",
    tag = SEATING_TAG,
    params(
        ("id" = i32, Path, description = "Table ID"),
        ("x-user-id" = String, Header, description = "Acting user ID")
    ),
    responses(
        (status = 200, description = "Table found", body = SeatingTableDto),
        (status = 401, description = "Missing or invalid acting user", body = ErrorDto),
        (status = 404, description = "Table not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_table(
    State(state): State<AppState>,
    user: ActingUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let table = SeatingService::new(&state.db)
        .get_table(user.id(), id)
        .await?;

    Ok((StatusCode::OK, Json(table)))
}

#[utoipa::path(
    put,
    path = "/api/seating/tables/{id}",
    tag = SEATING_TAG,
    params(
        ("id" = i32, Path, description = "Table ID"),
        ("x-user-id" = String, Header, description = "Acting user ID")
    ),
    request_body = UpdateSeatingTableDto,
    responses(
        (status = 200, description = "Table updated", body = SeatingTableDto),
        (status = 400, description = "Invalid layout", body = ErrorDto),
        (status = 401, description = "Missing or invalid acting user", body = ErrorDto),
        (status = 404, description = "Table not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_table(
    State(state): State<AppState>,
    user: ActingUser,
    Path(id): Path<i32>,
    Json(body): Json<UpdateSeatingTableDto>,
) -> Result<impl IntoResponse, Error> {
    let table = SeatingService::new(&state.db)
        .update_table(user.id(), id, body)
        .await?;

    Ok((StatusCode::OK, Json(table)))
}

/// Delete a table and its chairs
///
/// Guests assigned to the table are kept and become unassigned.
#[utoipa::path(
    delete,
    path = "/api/seating/tables/{id}",
    tag = SEATING_TAG,
    params(
        ("id" = i32, Path, description = "Table ID"),
        ("x-user-id" = String, Header, description = "Acting user ID")
    ),
    responses(
        (status = 204, description = "Table deleted"),
        (status = 401, description = "Missing or invalid acting user", body = ErrorDto),
        (status = 404, description = "Table not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_table(
    State(state): State<AppState>,
    user: ActingUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    SeatingService::new(&state.db)
        .delete_table(user.id(), id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Add an empty chair to a table
#[utoipa::path(
    post,
    path = "/api/seating/tables/{id}/chairs",
    tag = SEATING_TAG,
    params(
        ("id" = i32, Path, description = "Table ID"),
        ("x-user-id" = String, Header, description = "Acting user ID")
    ),
    responses(
        (status = 201, description = "Chair created", body = TableChairDto),
        (status = 401, description = "Missing or invalid acting user", body = ErrorDto),
        (status = 404, description = "Table not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_chair(
    State(state): State<AppState>,
    user: ActingUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let chair = SeatingService::new(&state.db)
        .add_chair(user.id(), id)
        .await?;

    Ok((StatusCode::CREATED, Json(chair)))
}

#[utoipa::path(
    delete,
    path = "/api/seating/chairs/{id}",
    tag = SEATING_TAG,
    params(
        ("id" = i32, Path, description = "Chair ID"),
        ("x-user-id" = String, Header, description = "Acting user ID")
    ),
    responses(
        (status = 204, description = "Chair deleted"),
        (status = 401, description = "Missing or invalid acting user", body = ErrorDto),
        (status = 404, description = "Chair not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_chair(
    State(state): State<AppState>,
    user: ActingUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    SeatingService::new(&state.db)
        .delete_chair(user.id(), id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Seat a guest on a chair
#[utoipa::path(
    put,
    path = "/api/seating/chairs/{id}/guest",
    tag = SEATING_TAG,
    params(
        ("id" = i32, Path, description = "Chair ID"),
        ("x-user-id" = String, Header, description = "Acting user ID")
    ),
    request_body = SeatGuestDto,
    responses(
        (status = 200, description = "Guest seated", body = TableChairDto),
        (status = 401, description = "Missing or invalid acting user", body = ErrorDto),
        (status = 404, description = "Chair or guest not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn assign_guest(
    State(state): State<AppState>,
    user: ActingUser,
    Path(id): Path<i32>,
    Json(body): Json<SeatGuestDto>,
) -> Result<impl IntoResponse, Error> {
    let chair = SeatingService::new(&state.db)
        .assign_guest(user.id(), id, body.guest_id)
        .await?;

    Ok((StatusCode::OK, Json(chair)))
}

/// Clear the guest from a chair
#[utoipa::path(
    delete,
    path = "/api/seating/chairs/{id}/guest",
    tag = SEATING_TAG,
    params(
        ("id" = i32, Path, description = "Chair ID"),
        ("x-user-id" = String, Header, description = "Acting user ID")
    ),
    responses(
        (status = 200, description = "Chair cleared", body = TableChairDto),
        (status = 401, description = "Missing or invalid acting user", body = ErrorDto),
        (status = 404, description = "Chair not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn unassign_guest(
    State(state): State<AppState>,
    user: ActingUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let chair = SeatingService::new(&state.db)
        .unassign_guest(user.id(), id)
        .await?;

    Ok((StatusCode::OK, Json(chair)))
}

/// Move a guest onto a chair
///
/// Clears every other chair holding the guest and sets the guest's table to the chair's table.
#[utoipa::path(
    post,
    path = "/api/seating/chairs/{id}/move",
    tag = SEATING_TAG,
    params(
        ("id" = i32, Path, description = "Destination chair ID"),
        ("x-user-id" = String, Header, description = "Acting user ID")
    ),
    request_body = SeatGuestDto,
    responses(
        (status = 200, description = "Guest moved", body = TableChairDto),
        (status = 401, description = "Missing or invalid acting user", body = ErrorDto),
        (status = 404, description = "Chair or guest not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn move_guest(
    State(state): State<AppState>,
    user: ActingUser,
    Path(id): Path<i32>,
    Json(body): Json<SeatGuestDto>,
) -> Result<impl IntoResponse, Error> {
    let chair = SeatingService::new(&state.db)
        .move_guest(user.id(), id, body.guest_id)
        .await?;

    Ok((StatusCode::OK, Json(chair)))
}
