use super::*;
use aisle::{
    model::seating::{CreateSeatingTableDto, SeatGuestDto},
    server::controller::seating::{
        assign_guest, create_table, delete_table, get_table, get_tables, move_guest,
    },
};
use axum::{
    extract::{Path, State},
    Json,
};
use entity::sea_orm_active_enums::TableShape;
use uuid::Uuid;

/// Expect 201 with the template's chairs created alongside the table
#[tokio::test]
async fn create_table_from_template() -> Result<(), TestError> {
    let user_id = Uuid::new_v4();
    let test = TestBuilder::new()
        .with_wedding_tables()
        .with_profile(user_id)
        .with_template("round-60", true)
        .build()
        .await?;

    let resp = create_table(
        State(test.to_app_state::<AppState>()),
        ActingUser(user_id),
        Json(CreateSeatingTableDto {
            template_id: Some("round-60".to_string()),
            name: Some("Family".to_string()),
            ..Default::default()
        }),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let body = body_json(resp).await;
    assert_eq!(body["name"], "Family");
    assert_eq!(body["shape"], "circle");
    assert_eq!(body["chairs"].as_array().map(|c| c.len()), Some(8));

    Ok(())
}

/// Expect 400 for a non-positive width
#[tokio::test]
async fn create_table_rejects_non_positive_width() -> Result<(), TestError> {
    let user_id = Uuid::new_v4();
    let test = TestBuilder::new()
        .with_wedding_tables()
        .with_profile(user_id)
        .build()
        .await?;

    let resp = create_table(
        State(test.to_app_state::<AppState>()),
        ActingUser(user_id),
        Json(CreateSeatingTableDto {
            name: Some("Sweetheart".to_string()),
            shape: Some(TableShape::Rectangle),
            width: Some(-30.0),
            length: Some(48.0),
            seats: Some(2),
            ..Default::default()
        }),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = body_json(resp).await;
    assert!(body["message"].is_string());
    assert!(body.get("error").is_none());

    Ok(())
}

/// Expect one user's tables to be invisible to another user
#[tokio::test]
async fn tables_are_scoped_to_acting_user() -> Result<(), TestError> {
    let user_id = Uuid::new_v4();
    let other_user_id = Uuid::new_v4();
    let test = TestBuilder::new()
        .with_wedding_tables()
        .with_profile(user_id)
        .with_profile(other_user_id)
        .build()
        .await?;
    let (table, _) = test
        .planner()
        .insert_table_with_chairs(user_id, "Table 1", 2)
        .await?;

    let resp = get_tables(
        State(test.to_app_state::<AppState>()),
        ActingUser(other_user_id),
    )
    .await
    .into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await, serde_json::json!([]));

    let resp = get_table(
        State(test.to_app_state::<AppState>()),
        ActingUser(other_user_id),
        Path(table.id),
    )
    .await
    .into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let resp = delete_table(
        State(test.to_app_state::<AppState>()),
        ActingUser(other_user_id),
        Path(table.id),
    )
    .await
    .into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let resp = get_table(
        State(test.to_app_state::<AppState>()),
        ActingUser(user_id),
        Path(table.id),
    )
    .await
    .into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Expect 404 when seating a guest on another user's chair
#[tokio::test]
async fn assign_guest_rejects_foreign_chair() -> Result<(), TestError> {
    let user_id = Uuid::new_v4();
    let other_user_id = Uuid::new_v4();
    let test = TestBuilder::new()
        .with_wedding_tables()
        .with_profile(user_id)
        .with_profile(other_user_id)
        .build()
        .await?;
    let (_, chairs) = test
        .planner()
        .insert_table_with_chairs(other_user_id, "Their Table", 1)
        .await?;
    let guest = test
        .planner()
        .insert_guest(user_id, "Ada", "Lovelace", None)
        .await?;

    let resp = assign_guest(
        State(test.to_app_state::<AppState>()),
        ActingUser(user_id),
        Path(chairs[0].id),
        Json(SeatGuestDto { guest_id: guest.id }),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(resp).await["message"], "Chair not found");

    Ok(())
}

/// Expect 200 with the guest on the destination chair
#[tokio::test]
async fn move_guest_seats_guest() -> Result<(), TestError> {
    let user_id = Uuid::new_v4();
    let test = TestBuilder::new()
        .with_wedding_tables()
        .with_profile(user_id)
        .build()
        .await?;
    let (_, chairs) = test
        .planner()
        .insert_table_with_chairs(user_id, "Table 1", 2)
        .await?;
    let guest = test
        .planner()
        .insert_guest(user_id, "Ada", "Lovelace", None)
        .await?;

    let resp = move_guest(
        State(test.to_app_state::<AppState>()),
        ActingUser(user_id),
        Path(chairs[1].id),
        Json(SeatGuestDto { guest_id: guest.id }),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["id"], chairs[1].id);
    assert_eq!(body["guest_id"], guest.id);

    Ok(())
}
