use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        seating::{TableTemplateDto, TableTemplateInputDto},
    },
    server::{error::Error, model::app::AppState, service::template::TableTemplateService},
};

pub static TEMPLATE_TAG: &str = "template";

/// List table templates, predefined first
#[utoipa::path(
    get,
    path = "/api/seating/templates",
    tag = TEMPLATE_TAG,
    responses(
        (status = 200, description = "All table templates", body = Vec<TableTemplateDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_templates(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let templates = TableTemplateService::new(&state.db).get_all().await?;

    Ok((StatusCode::OK, Json(templates)))
}

#[utoipa::path(
    get,
    path = "/api/seating/templates/{id}",
    tag = TEMPLATE_TAG,
    params(("id" = String, Path, description = "Template slug")),
    responses(
        (status = 200, description = "Template found", body = TableTemplateDto),
        (status = 404, description = "Template not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_template(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let template = TableTemplateService::new(&state.db).get(&id).await?;

    Ok((StatusCode::OK, Json(template)))
}

/// Create or replace a custom table template
#[utoipa::path(
    put,
    path = "/api/seating/templates/{id}",
    tag = TEMPLATE_TAG,
    params(("id" = String, Path, description = "Template slug")),
    request_body = TableTemplateInputDto,
    responses(
        (status = 200, description = "Template stored", body = TableTemplateDto),
        (status = 400, description = "Invalid template", body = ErrorDto),
        (status = 409, description = "Template is predefined", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn put_template(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<TableTemplateInputDto>,
) -> Result<impl IntoResponse, Error> {
    let template = TableTemplateService::new(&state.db)
        .upsert(&id, body)
        .await?;

    Ok((StatusCode::OK, Json(template)))
}

#[utoipa::path(
    delete,
    path = "/api/seating/templates/{id}",
    tag = TEMPLATE_TAG,
    params(("id" = String, Path, description = "Template slug")),
    responses(
        (status = 204, description = "Template deleted"),
        (status = 404, description = "Template not found", body = ErrorDto),
        (status = 409, description = "Template is predefined", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_template(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, Error> {
    TableTemplateService::new(&state.db).delete(&id).await?;

    Ok(StatusCode::NO_CONTENT)
}
