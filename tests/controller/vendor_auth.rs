use super::*;
use aisle::{
    model::{
        vendor::UpdateVendorListingDto,
        vendor_auth::{VendorLoginDto, VendorTokenLoginDto},
    },
    server::{
        controller::vendor_auth::{get_me, login, logout, rotate_token, token_login, update_me},
        model::session::vendor::SessionVendorId,
        util::password::hash_password,
    },
};
use axum::{extract::State, Json};

/// Expect 200 and the vendor stored in session for valid credentials
#[tokio::test]
async fn login_stores_vendor_in_session() -> Result<(), TestError> {
    let test = TestBuilder::new().with_wedding_tables().build().await?;
    let hash = hash_password("s3cret").expect("hashing should succeed");
    let vendor = test
        .vendor()
        .insert_vendor_with_login("Petal Works", "petals", &hash)
        .await?;

    let resp = login(
        State(test.to_app_state::<AppState>()),
        test.session.clone(),
        Json(VendorLoginDto {
            username: "petals".to_string(),
            password: "s3cret".to_string(),
        }),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await["id"], vendor.id);

    let session_vendor_id = SessionVendorId::get(&test.session)
        .await
        .expect("session should be readable");
    assert_eq!(session_vendor_id, Some(vendor.id));

    Ok(())
}

/// Expect 401 with a generic message for a wrong password
#[tokio::test]
async fn login_rejects_wrong_password() -> Result<(), TestError> {
    let test = TestBuilder::new().with_wedding_tables().build().await?;
    let hash = hash_password("s3cret").expect("hashing should succeed");
    test.vendor()
        .insert_vendor_with_login("Petal Works", "petals", &hash)
        .await?;

    let resp = login(
        State(test.to_app_state::<AppState>()),
        test.session.clone(),
        Json(VendorLoginDto {
            username: "petals".to_string(),
            password: "guess".to_string(),
        }),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        body_json(resp).await["message"],
        "Invalid vendor credentials"
    );

    Ok(())
}

/// Expect a rotated token to invalidate the previously issued one
#[tokio::test]
async fn rotated_token_invalidates_previous() -> Result<(), TestError> {
    let test = TestBuilder::new().with_wedding_tables().build().await?;
    let vendor = test.vendor().insert_vendor("Petal Works", None).await?;
    SessionVendorId::insert(&test.session, vendor.id)
        .await
        .expect("session should be writable");

    let resp = rotate_token(State(test.to_app_state::<AppState>()), test.session.clone())
        .await
        .into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let first_token = body_json(resp).await["token"]
        .as_str()
        .map(str::to_string)
        .expect("token should be a string");

    let resp = rotate_token(State(test.to_app_state::<AppState>()), test.session.clone())
        .await
        .into_response();
    let second_token = body_json(resp).await["token"]
        .as_str()
        .map(str::to_string)
        .expect("token should be a string");

    let resp = token_login(
        State(test.to_app_state::<AppState>()),
        test.session.clone(),
        Json(VendorTokenLoginDto { token: first_token }),
    )
    .await
    .into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let resp = token_login(
        State(test.to_app_state::<AppState>()),
        test.session.clone(),
        Json(VendorTokenLoginDto {
            token: second_token,
        }),
    )
    .await
    .into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Expect 401 from /me after logout
#[tokio::test]
async fn logout_clears_session() -> Result<(), TestError> {
    let test = TestBuilder::new().with_wedding_tables().build().await?;
    let vendor = test.vendor().insert_vendor("Petal Works", None).await?;
    SessionVendorId::insert(&test.session, vendor.id)
        .await
        .expect("session should be writable");

    let resp = get_me(State(test.to_app_state::<AppState>()), test.session.clone())
        .await
        .into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = logout(test.session.clone()).await.into_response();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    assert_eq!(
        SessionVendorId::get(&test.session)
            .await
            .expect("session should be readable"),
        None
    );

    let resp = get_me(State(test.to_app_state::<AppState>()), test.session.clone())
        .await
        .into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(resp).await["message"], "Vendor not logged in");

    Ok(())
}

/// Expect 400 instead of a crash when the configured token lifetime is out of range
#[tokio::test]
async fn rotate_token_rejects_oversized_lifetime() -> Result<(), TestError> {
    let test = TestBuilder::new().with_wedding_tables().build().await?;
    let vendor = test.vendor().insert_vendor("Petal Works", None).await?;
    SessionVendorId::insert(&test.session, vendor.id)
        .await
        .expect("session should be writable");

    let mut state = test.to_app_state::<AppState>();
    state.vendor_token_ttl_days = 100_000_000;

    let resp = rotate_token(State(state), test.session.clone())
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(resp).await["message"],
        "Token lifetime must be between 1 and 3650 days, got 100000000"
    );

    Ok(())
}

/// Expect 400 and an unchanged listing when a list field is sent as a scalar
#[tokio::test]
async fn update_me_rejects_non_list_fields() -> Result<(), TestError> {
    let test = TestBuilder::new().with_wedding_tables().build().await?;
    let vendor = test.vendor().insert_vendor("Petal Works", None).await?;
    SessionVendorId::insert(&test.session, vendor.id)
        .await
        .expect("session should be writable");

    let resp = update_me(
        State(test.to_app_state::<AppState>()),
        test.session.clone(),
        Json(UpdateVendorListingDto {
            gallery_images: Some(serde_json::json!("not-a-list")),
            faq: Some(serde_json::json!(42)),
            ..Default::default()
        }),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(resp).await["message"],
        "gallery_images must be a JSON list"
    );

    let resp = get_me(State(test.to_app_state::<AppState>()), test.session.clone())
        .await
        .into_response();
    let body = body_json(resp).await;
    assert_eq!(body["gallery_images"], serde_json::json!([]));
    assert_eq!(body["faq"], serde_json::json!([]));

    Ok(())
}
