//! Product catalog and saved-design flows.

#![allow(clippy::unwrap_used)]

use axum::http::{Method, StatusCode};
use serde_json::json;
use solelab_integration_tests::TestApp;

#[tokio::test]
async fn product_listing_is_public() {
    let app = TestApp::new();
    app.seed_product("Runner One", 50).await;
    app.seed_product("Court Classic", 65).await;

    let (status, body) = app.request(Method::GET, "/products", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "success");

    let products = body["data"].as_array().unwrap();
    assert_eq!(products.len(), 2);
    assert_eq!(products[0]["name"], "Runner One");
    assert_eq!(products[0]["price"], json!(50.0));
}

#[tokio::test]
async fn catalog_management_is_admin_only() {
    let app = TestApp::new();
    let user_token = app
        .register_and_login("Seda", "seda@example.com", "sup3r-secure")
        .await;
    let admin_token = app.admin_token().await;

    let payload = json!({"name": "Trail Mid", "price": 80});

    let (status, _) = app
        .request(Method::POST, "/products", None, Some(payload.clone()))
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = app
        .request(Method::POST, "/products", Some(&user_token), Some(payload.clone()))
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, body) = app
        .request(Method::POST, "/products", Some(&admin_token), Some(payload))
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["name"], "Trail Mid");

    // Validation: price must be strictly positive, name non-empty.
    for bad in [
        json!({"name": "Freebie", "price": 0}),
        json!({"name": "  ", "price": 10}),
    ] {
        let (status, body) = app
            .request(Method::POST, "/products", Some(&admin_token), Some(bad))
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["status"], "fail");
    }
}

#[tokio::test]
async fn designs_round_trip_by_id() {
    let app = TestApp::new();

    let (status, body) = app
        .request(
            Method::POST,
            "/designs",
            None,
            Some(json!({
                "name": "Neon racer",
                "customization": {
                    "laces": {"color": "#39ff14"},
                    "sole_bottom": {"texture": "gum"},
                },
            })),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = body["data"]["id"].as_str().unwrap().to_owned();

    let (status, body) = app
        .request(Method::GET, &format!("/designs/{id}"), None, None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["name"], "Neon racer");
    assert_eq!(body["data"]["customization"]["laces"]["color"], "#39ff14");
}

#[tokio::test]
async fn design_validation_and_missing_lookup() {
    let app = TestApp::new();

    // Name and customization are both required.
    for bad in [
        json!({"name": "", "customization": {"laces": {"color": "#fff"}}}),
        json!({"name": "Bare", "customization": {}}),
        json!({"name": "Empty region", "customization": {"inside": {}}}),
    ] {
        let (status, body) = app.request(Method::POST, "/designs", None, Some(bad)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["status"], "fail");
    }

    let (status, _) = app
        .request(
            Method::GET,
            "/designs/00000000-0000-4000-8000-000000000000",
            None,
            None,
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
