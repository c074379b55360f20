use super::*;
use aisle::server::controller::vendor::{
    get_categories, get_category_vendors, get_vendor, get_vendors,
};
use axum::extract::{Path, State};

/// Expect 200 with exactly the requested vendor and its joined category
#[tokio::test]
async fn get_vendor_returns_vendor_with_category() -> Result<(), TestError> {
    let test = TestBuilder::new().with_wedding_tables().build().await?;
    let category = test
        .vendor()
        .insert_category("Bakers", "bakers")
        .await?;
    test.vendor().insert_vendor("Petal Works", None).await?;
    let vendor = test
        .vendor()
        .insert_vendor("Crumb & Co", Some(category.id))
        .await?;

    let resp = get_vendor(State(test.to_app_state::<AppState>()), Path(vendor.id))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["id"], vendor.id);
    assert_eq!(body["name"], "Crumb & Co");
    assert_eq!(body["category"]["id"], category.id);
    assert_eq!(body["category"]["name"], "Bakers");
    assert_eq!(body["category"]["slug"], "bakers");
    assert!(body.get("password_hash").is_none());

    Ok(())
}

/// Expect 404 with only a message for a nonexistent vendor
#[tokio::test]
async fn get_vendor_returns_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_wedding_tables().build().await?;

    let resp = get_vendor(State(test.to_app_state::<AppState>()), Path(999))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body = body_json(resp).await;
    assert_eq!(body, serde_json::json!({ "message": "Vendor not found" }));

    Ok(())
}

/// Expect a vendor without a category to be listed with a null category
#[tokio::test]
async fn get_vendors_includes_uncategorized_vendor() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_wedding_tables()
        .with_category("Venues", "venues")
        .with_vendor("Grand Hall", Some("venues"))
        .with_vendor("Anything Goes", None)
        .build()
        .await?;

    let resp = get_vendors(State(test.to_app_state::<AppState>()))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    let vendors = body.as_array().expect("vendors should be an array");
    assert_eq!(vendors.len(), 2);
    assert_eq!(vendors[0]["name"], "Anything Goes");
    assert!(vendors[0]["category"].is_null());
    assert_eq!(vendors[1]["category"]["slug"], "venues");

    Ok(())
}

/// Expect 500 with the raw error when the schema is missing
#[tokio::test]
async fn get_vendors_returns_internal_error_without_tables() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let resp = get_vendors(State(test.to_app_state::<AppState>()))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(resp).await;
    assert_eq!(body["message"], "Internal server error");
    assert!(body["error"].is_string());

    Ok(())
}

/// Expect categories sorted by name
#[tokio::test]
async fn get_categories_sorted_by_name() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_wedding_tables()
        .with_category("Venues", "venues")
        .with_category("Caterers", "caterers")
        .with_category("Musicians", "musicians")
        .build()
        .await?;

    let resp = get_categories(State(test.to_app_state::<AppState>()))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    let names: Vec<&str> = body
        .as_array()
        .expect("categories should be an array")
        .iter()
        .filter_map(|c| c["name"].as_str())
        .collect();
    assert_eq!(names, vec!["Caterers", "Musicians", "Venues"]);

    Ok(())
}

/// Expect 404 for an unknown category slug
#[tokio::test]
async fn get_category_vendors_returns_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_wedding_tables().build().await?;

    let resp = get_category_vendors(
        State(test.to_app_state::<AppState>()),
        Path("bakers".to_string()),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
