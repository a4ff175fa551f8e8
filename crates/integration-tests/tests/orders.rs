//! Order lifecycle flows: creation, pricing, status transitions, item
//! mutation, deletion, and role scoping.

#![allow(clippy::unwrap_used)]

use axum::http::{Method, StatusCode};
use serde_json::{Value, json};
use solelab_integration_tests::TestApp;

fn order_body(product_id: &str) -> Value {
    json!({
        "contactInfo": {
            "name": "Ezzat",
            "email": "ezzat@example.com",
            "phone": "0471234567",
        },
        "items": [{"productId": product_id, "size": 42, "quantity": 2}],
    })
}

async fn create_order(app: &TestApp, token: &str, body: Value) -> Value {
    let (status, body) = app.request(Method::POST, "/orders", Some(token), Some(body)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["status"], "success");
    body["data"].clone()
}

#[tokio::test]
async fn create_order_prices_items_and_defaults_to_pending() {
    let app = TestApp::new();
    let product = app.seed_product("Runner One", 50).await;
    let token = app
        .register_and_login("Ezzat", "ezzat@example.com", "sup3r-secure")
        .await;

    let order = create_order(&app, &token, order_body(&product.to_string())).await;

    assert_eq!(order["status"], "Pending");
    assert_eq!(order["totalAmount"], json!(100.0));
    assert_eq!(order["items"][0]["quantity"], 2);

    // Round-trip: fetching by id returns the same document.
    let (status, body) = app
        .request(
            Method::GET,
            &format!("/orders/{}", order["id"].as_str().unwrap()),
            Some(&token),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    let fetched = &body["data"];
    assert_eq!(fetched["items"], order["items"]);
    assert_eq!(fetched["contactInfo"], order["contactInfo"]);
    assert_eq!(fetched["status"], order["status"]);
}

#[tokio::test]
async fn unknown_product_ids_contribute_zero_to_the_total() {
    let app = TestApp::new();
    let product = app.seed_product("Runner One", 50).await;
    let token = app
        .register_and_login("Ezzat", "ezzat@example.com", "sup3r-secure")
        .await;

    let order = create_order(
        &app,
        &token,
        json!({
            "contactInfo": {"name": "Ezzat", "email": "ezzat@example.com"},
            "items": [
                {"productId": product.to_string(), "size": 40, "quantity": 1},
                {"productId": "00000000-0000-4000-8000-000000000000", "size": 41, "quantity": 5},
                {"size": 42, "quantity": 3},
            ],
        }),
    )
    .await;

    assert_eq!(order["totalAmount"], json!(50.0));
}

#[tokio::test]
async fn create_order_validates_input() {
    let app = TestApp::new();
    let token = app
        .register_and_login("Ezzat", "ezzat@example.com", "sup3r-secure")
        .await;

    let cases = [
        json!({"contactInfo": {"name": "", "email": "ezzat@example.com"},
               "items": [{"size": 40, "quantity": 1}]}),
        json!({"contactInfo": {"name": "Ezzat", "email": "nope"},
               "items": [{"size": 40, "quantity": 1}]}),
        json!({"contactInfo": {"name": "Ezzat", "email": "ezzat@example.com", "phone": "12 34"},
               "items": [{"size": 40, "quantity": 1}]}),
        json!({"contactInfo": {"name": "Ezzat", "email": "ezzat@example.com"}, "items": []}),
        json!({"contactInfo": {"name": "Ezzat", "email": "ezzat@example.com"},
               "items": [{"size": 35, "quantity": 1}]}),
        json!({"contactInfo": {"name": "Ezzat", "email": "ezzat@example.com"},
               "items": [{"size": 40, "quantity": 0}]}),
        json!({"contactInfo": {"name": "Ezzat", "email": "ezzat@example.com"},
               "items": [{"size": 40, "quantity": 1,
                          "customization": {"laces": {}}}]}),
    ];

    for case in cases {
        let (status, body) = app
            .request(Method::POST, "/orders", Some(&token), Some(case.clone()))
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "case: {case}");
        assert_eq!(body["status"], "fail");
    }

    // Nothing slipped into the store.
    let (_, body) = app.request(Method::GET, "/orders", Some(&token), None).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn status_updates_are_admin_only_and_validated() {
    let app = TestApp::new();
    let product = app.seed_product("Runner One", 50).await;
    let user_token = app
        .register_and_login("Ezzat", "ezzat@example.com", "sup3r-secure")
        .await;
    let admin_token = app.admin_token().await;

    let order = create_order(&app, &user_token, order_body(&product.to_string())).await;
    let path = format!("/orders/{}", order["id"].as_str().unwrap());

    // Non-admin: forbidden regardless of the payload.
    let (status, _) = app
        .request(
            Method::PATCH,
            &path,
            Some(&user_token),
            Some(json!({"status": "Shipped"})),
        )
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    // Admin with a bogus value: rejected, order untouched.
    let (status, body) = app
        .request(
            Method::PATCH,
            &path,
            Some(&admin_token),
            Some(json!({"status": "Bogus"})),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid status value");

    let (_, body) = app.request(Method::GET, &path, Some(&user_token), None).await;
    assert_eq!(body["data"]["status"], "Pending");

    // Admin with a real value, via PUT and PATCH alike.
    for (method, status_value) in [(Method::PUT, "In-Production"), (Method::PATCH, "Cancelled")] {
        let (status, body) = app
            .request(
                method,
                &path,
                Some(&admin_token),
                Some(json!({"status": status_value})),
            )
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["status"], status_value);
    }

    // Unknown order id.
    let (status, _) = app
        .request(
            Method::PATCH,
            "/orders/00000000-0000-4000-8000-000000000000",
            Some(&admin_token),
            Some(json!({"status": "Shipped"})),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_is_admin_only_and_forbidden_before_not_found() {
    let app = TestApp::new();
    let product = app.seed_product("Runner One", 50).await;
    let user_token = app
        .register_and_login("Ezzat", "ezzat@example.com", "sup3r-secure")
        .await;
    let admin_token = app.admin_token().await;

    // Non-admin deleting a nonexistent order still gets 403, not 404.
    let (status, _) = app
        .request(
            Method::DELETE,
            "/orders/00000000-0000-4000-8000-000000000000",
            Some(&user_token),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let order = create_order(&app, &user_token, order_body(&product.to_string())).await;
    let path = format!("/orders/{}", order["id"].as_str().unwrap());

    let (status, _) = app.request(Method::DELETE, &path, Some(&user_token), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, body) = app.request(Method::DELETE, &path, Some(&admin_token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "success");

    let (status, _) = app.request(Method::GET, &path, Some(&user_token), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app.request(Method::DELETE, &path, Some(&admin_token), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn bag_items_can_be_added_and_partially_updated() {
    let app = TestApp::new();
    let product = app.seed_product("Runner One", 50).await;
    let token = app
        .register_and_login("Ezzat", "ezzat@example.com", "sup3r-secure")
        .await;

    let order = create_order(&app, &token, order_body(&product.to_string())).await;
    let order_id = order["id"].as_str().unwrap().to_owned();

    // Add a second pair referencing the same product.
    let (status, body) = app
        .request(
            Method::POST,
            &format!("/orders/{order_id}/items"),
            Some(&token),
            Some(json!({"productId": product.to_string(), "size": 38, "quantity": 1})),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["items"].as_array().unwrap().len(), 2);
    assert_eq!(body["data"]["totalAmount"], json!(150.0));

    // Out-of-bounds size on add.
    let (status, _) = app
        .request(
            Method::POST,
            &format!("/orders/{order_id}/items"),
            Some(&token),
            Some(json!({"size": 29, "quantity": 1})),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Partial update: only quantity; size survives.
    let item_id = body["data"]["items"][0]["id"].as_str().unwrap().to_owned();
    let (status, body) = app
        .request(
            Method::PATCH,
            &format!("/orders/{order_id}/items/{item_id}"),
            Some(&token),
            Some(json!({"quantity": 3})),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    let item = &body["data"]["items"][0];
    assert_eq!(item["quantity"], 3);
    assert_eq!(item["size"], 42);
    assert_eq!(body["data"]["totalAmount"], json!(200.0));

    // Unknown item id.
    let (status, _) = app
        .request(
            Method::PATCH,
            &format!("/orders/{order_id}/items/00000000-0000-4000-8000-000000000000"),
            Some(&token),
            Some(json!({"quantity": 1})),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn checkout_marks_the_order_shipped() {
    let app = TestApp::new();
    let product = app.seed_product("Runner One", 50).await;
    let token = app
        .register_and_login("Ezzat", "ezzat@example.com", "sup3r-secure")
        .await;

    let order = create_order(&app, &token, order_body(&product.to_string())).await;

    let (status, body) = app
        .request(
            Method::POST,
            &format!("/orders/{}/checkout", order["id"].as_str().unwrap()),
            Some(&token),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["status"], "Shipped");
}

#[tokio::test]
async fn listings_are_role_scoped_and_newest_first() {
    let app = TestApp::new();
    let product = app.seed_product("Runner One", 50).await;
    let admin_token = app.admin_token().await;

    let seda = app
        .register_and_login("Seda", "seda@example.com", "sup3r-secure")
        .await;
    let helia = app
        .register_and_login("Helia", "helia@example.com", "sup3r-secure")
        .await;

    let first = create_order(&app, &seda, order_body(&product.to_string())).await;
    let second = create_order(&app, &seda, order_body(&product.to_string())).await;
    create_order(&app, &helia, order_body(&product.to_string())).await;

    let (_, body) = app.request(Method::GET, "/orders", Some(&admin_token), None).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 3);

    // Seda sees only her two orders, most recent first.
    let (_, body) = app.request(Method::GET, "/orders", Some(&seda), None).await;
    let mine = body["data"].as_array().unwrap();
    assert_eq!(mine.len(), 2);
    assert_eq!(mine[0]["id"], second["id"]);
    assert_eq!(mine[1]["id"], first["id"]);

    let (_, body) = app.request(Method::GET, "/orders", Some(&helia), None).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn concurrent_status_updates_settle_on_one_of_the_two() {
    let app = TestApp::new();
    let product = app.seed_product("Runner One", 50).await;
    let user_token = app
        .register_and_login("Ezzat", "ezzat@example.com", "sup3r-secure")
        .await;
    let admin_token = app.admin_token().await;

    let order = create_order(&app, &user_token, order_body(&product.to_string())).await;
    let path = format!("/orders/{}", order["id"].as_str().unwrap());

    // Two racing writers with different target statuses. Both individually
    // succeed; which one lands last is not deterministic by design.
    let (first, second) = tokio::join!(
        app.request(
            Method::PATCH,
            &path,
            Some(&admin_token),
            Some(json!({"status": "Shipped"})),
        ),
        app.request(
            Method::PATCH,
            &path,
            Some(&admin_token),
            Some(json!({"status": "Cancelled"})),
        ),
    );
    assert_eq!(first.0, StatusCode::OK);
    assert_eq!(second.0, StatusCode::OK);

    let (_, body) = app.request(Method::GET, &path, Some(&user_token), None).await;
    let final_status = body["data"]["status"].as_str().unwrap();
    assert!(
        final_status == "Shipped" || final_status == "Cancelled",
        "unexpected final status {final_status}"
    );
}
