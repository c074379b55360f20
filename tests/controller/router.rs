use super::*;
use aisle::server::{model::actor::ACTING_USER_HEADER, router::routes};
use axum::{body::Body, http::Request};
use tower::ServiceExt;
use uuid::Uuid;

/// Expect 401 for a user-scoped route without the acting user header
#[tokio::test]
async fn guests_require_acting_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_wedding_tables().build().await?;
    let app = routes().with_state(test.to_app_state::<AppState>());

    let resp = app
        .oneshot(
            Request::builder()
                .uri("/api/guests")
                .body(Body::empty())
                .expect("request should build"),
        )
        .await
        .expect("router is infallible");

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

/// Expect the acting user header to scope the guest list
#[tokio::test]
async fn guests_listed_for_acting_user() -> Result<(), TestError> {
    let user_id = Uuid::new_v4();
    let test = TestBuilder::new()
        .with_wedding_tables()
        .with_profile(user_id)
        .build()
        .await?;
    test.planner()
        .insert_guest(user_id, "Ada", "Lovelace", None)
        .await?;
    let app = routes().with_state(test.to_app_state::<AppState>());

    let resp = app
        .oneshot(
            Request::builder()
                .uri("/api/guests")
                .header(ACTING_USER_HEADER, user_id.to_string())
                .body(Body::empty())
                .expect("request should build"),
        )
        .await
        .expect("router is infallible");

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await[0]["first_name"], "Ada");

    Ok(())
}

/// Expect the OpenAPI document to list the vendor routes
#[tokio::test]
async fn serves_openapi_document() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let app = routes().with_state(test.to_app_state::<AppState>());

    let resp = app
        .oneshot(
            Request::builder()
                .uri("/api/docs/openapi.json")
                .body(Body::empty())
                .expect("request should build"),
        )
        .await
        .expect("router is infallible");

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert!(body["paths"]["/api/vendors/{id}"].is_object());
    assert!(body["paths"]["/api/seating/chairs/{id}/move"].is_object());

    Ok(())
}
