use super::*;
use aisle::{
    model::seating::TableTemplateInputDto,
    server::controller::template::{delete_template, get_template, get_templates, put_template},
};
use axum::{
    extract::{Path, State},
    Json,
};
use entity::sea_orm_active_enums::TableShape;

fn round_60_input() -> TableTemplateInputDto {
    TableTemplateInputDto {
        name: "Round Table (60\")".to_string(),
        shape: TableShape::Circle,
        width: 60.0,
        length: 60.0,
        seats: 8,
    }
}

/// Expect a stored template to be fetched back with identical fields
#[tokio::test]
async fn put_then_get_returns_identical_fields() -> Result<(), TestError> {
    let test = TestBuilder::new().with_wedding_tables().build().await?;

    let resp = put_template(
        State(test.to_app_state::<AppState>()),
        Path("round-60".to_string()),
        Json(round_60_input()),
    )
    .await
    .into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = get_template(
        State(test.to_app_state::<AppState>()),
        Path("round-60".to_string()),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        body_json(resp).await,
        serde_json::json!({
            "id": "round-60",
            "name": "Round Table (60\")",
            "shape": "circle",
            "width": 60.0,
            "length": 60.0,
            "seats": 8,
            "is_predefined": false
        })
    );

    Ok(())
}

/// Expect 409 when replacing a predefined template
#[tokio::test]
async fn put_rejects_predefined_template() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_wedding_tables()
        .with_template("round-60", true)
        .build()
        .await?;

    let resp = put_template(
        State(test.to_app_state::<AppState>()),
        Path("round-60".to_string()),
        Json(round_60_input()),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::CONFLICT);

    Ok(())
}

/// Expect 409 when deleting a predefined template
#[tokio::test]
async fn delete_rejects_predefined_template() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_wedding_tables()
        .with_template("round-60", true)
        .build()
        .await?;

    let resp = delete_template(
        State(test.to_app_state::<AppState>()),
        Path("round-60".to_string()),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::CONFLICT);

    Ok(())
}

/// Expect predefined templates listed before custom ones
#[tokio::test]
async fn get_templates_lists_predefined_first() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_wedding_tables()
        .with_template("aaa-custom", false)
        .with_template("round-60", true)
        .build()
        .await?;

    let resp = get_templates(State(test.to_app_state::<AppState>()))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body[0]["id"], "round-60");
    assert_eq!(body[1]["id"], "aaa-custom");

    Ok(())
}
