use super::*;
use aisle::{
    model::profile::UpsertProfileDto,
    server::controller::profile::{get_profile, put_profile},
};
use axum::{extract::State, Json};
use uuid::Uuid;

/// Expect 404 before the profile exists and 200 after it is stored
#[tokio::test]
async fn put_creates_profile() -> Result<(), TestError> {
    let user_id = Uuid::new_v4();
    let test = TestBuilder::new().with_wedding_tables().build().await?;

    let resp = get_profile(State(test.to_app_state::<AppState>()), ActingUser(user_id))
        .await
        .into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let resp = put_profile(
        State(test.to_app_state::<AppState>()),
        ActingUser(user_id),
        Json(UpsertProfileDto {
            email: "planner@example.com".to_string(),
            first_name: Some("Ada".to_string()),
            last_name: Some("Lovelace".to_string()),
            wedding_date: chrono::NaiveDate::from_ymd_opt(2027, 6, 12),
        }),
    )
    .await
    .into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = get_profile(State(test.to_app_state::<AppState>()), ActingUser(user_id))
        .await
        .into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["id"], user_id.to_string());
    assert_eq!(body["wedding_date"], "2027-06-12");

    Ok(())
}
