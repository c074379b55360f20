use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        vendor::{VendorCategoryDto, VendorDto},
    },
    server::{error::Error, model::app::AppState, service::vendor::VendorService},
};

pub static VENDOR_TAG: &str = "vendor";

/// List every vendor with its category
///
/// No pagination or filtering, vendors are ordered by name.
#[utoipa::path(
    get,
    path = "/api/vendors",
    tag = VENDOR_TAG,
    responses(
        (status = 200, description = "All vendors ordered by name", body = Vec<VendorDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_vendors(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let vendors = VendorService::new(&state.db).get_all().await?;

    Ok((StatusCode::OK, Json(vendors)))
}

/// Get one vendor with its category
#[utoipa::path(
    get,
    path = "/api/vendors/{id}",
    tag = VENDOR_TAG,
    params(("id" = i32, Path, description = "Vendor ID")),
    responses(
        (status = 200, description = "Vendor found", body = VendorDto),
        (status = 404, description = "Vendor not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_vendor(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let vendor = VendorService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(vendor)))
}

/// Get one vendor by its URL slug
#[utoipa::path(
    get,
    path = "/api/vendors/slug/{slug}",
    tag = VENDOR_TAG,
    params(("slug" = String, Path, description = "Vendor slug")),
    responses(
        (status = 200, description = "Vendor found", body = VendorDto),
        (status = 404, description = "Vendor not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_vendor_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let vendor = VendorService::new(&state.db).get_by_slug(&slug).await?;

    Ok((StatusCode::OK, Json(vendor)))
}

/// List every vendor category ordered by name
#[utoipa::path(
    get,
    path = "/api/categories",
    tag = VENDOR_TAG,
    responses(
        (status = 200, description = "All categories ordered by name", body = Vec<VendorCategoryDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_categories(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let categories = VendorService::new(&state.db).get_categories().await?;

    Ok((StatusCode::OK, Json(categories)))
}

/// List the vendors of one category
#[utoipa::path(
    get,
    path = "/api/categories/{slug}/vendors",
    tag = VENDOR_TAG,
    params(("slug" = String, Path, description = "Category slug")),
    responses(
        (status = 200, description = "Vendors of the category ordered by name", body = Vec<VendorDto>),
        (status = 404, description = "Category not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_category_vendors(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let vendors = VendorService::new(&state.db)
        .get_by_category_slug(&slug)
        .await?;

    Ok((StatusCode::OK, Json(vendors)))
}
