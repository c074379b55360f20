use super::*;
use aisle::{
    model::guest::GuestInputDto,
    server::controller::guest::{create_guest, delete_guest, get_guests},
};
use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

fn guest_input(first_name: &str, last_name: &str) -> GuestInputDto {
    GuestInputDto {
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        ..Default::default()
    }
}

/// Expect 404 Profile not found when the acting user has no profile
#[tokio::test]
async fn create_guest_fails_without_profile() -> Result<(), TestError> {
    let test = TestBuilder::new().with_wedding_tables().build().await?;

    let resp = create_guest(
        State(test.to_app_state::<AppState>()),
        ActingUser(Uuid::new_v4()),
        Json(guest_input("Ada", "Lovelace")),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(resp).await["message"], "Profile not found");

    Ok(())
}

/// Expect 201 and the guest listed for its owner only
#[tokio::test]
async fn create_guest_then_list() -> Result<(), TestError> {
    let user_id = Uuid::new_v4();
    let other_user_id = Uuid::new_v4();
    let test = TestBuilder::new()
        .with_wedding_tables()
        .with_profile(user_id)
        .with_profile(other_user_id)
        .build()
        .await?;

    let resp = create_guest(
        State(test.to_app_state::<AppState>()),
        ActingUser(user_id),
        Json(guest_input("Ada", "Lovelace")),
    )
    .await
    .into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let resp = get_guests(State(test.to_app_state::<AppState>()), ActingUser(user_id))
        .await
        .into_response();
    let body = body_json(resp).await;
    assert_eq!(body.as_array().map(|g| g.len()), Some(1));
    assert_eq!(body[0]["last_name"], "Lovelace");

    let resp = get_guests(
        State(test.to_app_state::<AppState>()),
        ActingUser(other_user_id),
    )
    .await
    .into_response();
    assert_eq!(body_json(resp).await, serde_json::json!([]));

    Ok(())
}

/// Expect 204 when deleting an owned guest
#[tokio::test]
async fn delete_guest_returns_no_content() -> Result<(), TestError> {
    let user_id = Uuid::new_v4();
    let test = TestBuilder::new()
        .with_wedding_tables()
        .with_profile(user_id)
        .build()
        .await?;
    let guest = test
        .planner()
        .insert_guest(user_id, "Ada", "Lovelace", None)
        .await?;

    let resp = delete_guest(
        State(test.to_app_state::<AppState>()),
        ActingUser(user_id),
        Path(guest.id),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    Ok(())
}
