//! HTTP routing and OpenAPI documentation configuration.
//!
//! Every API endpoint is registered here together with its utoipa path metadata. Swagger UI
//! serves the collected document at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// # Registered Endpoints
/// - `/api/vendors`, `/api/vendors/{id}`, `/api/vendors/slug/{slug}` - Vendor directory
/// - `/api/categories`, `/api/categories/{slug}/vendors` - Vendor categories
/// - `/api/vendor-auth/*` - Vendor login, self-service listing and token rotation
/// - `/api/seating/tables/*`, `/api/seating/chairs/*` - Seating chart
/// - `/api/seating/templates/*` - Table templates
/// - `/api/guests/*` - Guest list
/// - `/api/profile` - Planner profile
///
/// The OpenAPI document is served at `/api/docs/openapi.json`.
///
/// # Example
/// ```ignore
/// let router = routes().with_state(AppState::new(db, &config));
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Aisle", description = "Aisle wedding planning API"), tags(
        (name = controller::vendor::VENDOR_TAG, description = "Vendor directory API routes"),
        (name = controller::vendor_auth::VENDOR_AUTH_TAG, description = "Vendor authentication API routes"),
        (name = controller::seating::SEATING_TAG, description = "Seating chart API routes"),
        (name = controller::template::TEMPLATE_TAG, description = "Table template API routes"),
        (name = controller::guest::GUEST_TAG, description = "Guest list API routes"),
        (name = controller::profile::PROFILE_TAG, description = "Planner profile API routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::vendor::get_vendors))
        .routes(routes!(controller::vendor::get_vendor))
        .routes(routes!(controller::vendor::get_vendor_by_slug))
        .routes(routes!(controller::vendor::get_categories))
        .routes(routes!(controller::vendor::get_category_vendors))
        .routes(routes!(controller::vendor_auth::login))
        .routes(routes!(controller::vendor_auth::token_login))
        .routes(routes!(
            controller::vendor_auth::get_me,
            controller::vendor_auth::update_me
        ))
        .routes(routes!(controller::vendor_auth::rotate_token))
        .routes(routes!(controller::vendor_auth::logout))
        .routes(routes!(
            controller::seating::get_tables,
            controller::seating::create_table
        ))
        .routes(routes!(
            controller::seating::get_table,
            controller::seating::update_table,
            controller::seating::delete_table
        ))
        .routes(routes!(controller::seating::add_chair))
        .routes(routes!(controller::seating::delete_chair))
        .routes(routes!(
            controller::seating::assign_guest,
            controller::seating::unassign_guest
        ))
        .routes(routes!(controller::seating::move_guest))
        .routes(routes!(controller::template::get_templates))
        .routes(routes!(
            controller::template::get_template,
            controller::template::put_template,
            controller::template::delete_template
        ))
        .routes(routes!(
            controller::guest::get_guests,
            controller::guest::create_guest
        ))
        .routes(routes!(
            controller::guest::get_guest,
            controller::guest::update_guest,
            controller::guest::delete_guest
        ))
        .routes(routes!(
            controller::profile::get_profile,
            controller::profile::put_profile
        ))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
