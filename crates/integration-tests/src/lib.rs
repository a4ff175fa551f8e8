//! Integration tests for Solelab.
//!
//! Tests drive the fully assembled router in-process through
//! `tower::ServiceExt::oneshot` - no sockets, no external services. Each
//! [`TestApp`] owns fresh stores, so tests are isolated from each other.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p solelab-integration-tests
//! ```

#![allow(clippy::unwrap_used, clippy::missing_panics_doc)]

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use rust_decimal::Decimal;
use secrecy::SecretString;
use serde_json::{Value, json};
use tower::ServiceExt;

use solelab_api::config::{AdminSeed, Config};
use solelab_api::models::Product;
use solelab_api::services::AuthService;
use solelab_api::state::AppState;
use solelab_core::{Price, ProductId};

/// Seeded admin credentials used across tests.
pub const ADMIN_EMAIL: &str = "admin@solelab.dev";
pub const ADMIN_PASSWORD: &str = "w0rksh0p-master";

/// An in-process instance of the API with fresh state.
pub struct TestApp {
    pub state: AppState,
    router: Router,
}

impl TestApp {
    /// Build an app with the default test configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_token_ttl(7200)
    }

    /// Build an app whose session tokens live for `ttl_secs` (negative
    /// values issue already-expired tokens).
    #[must_use]
    pub fn with_token_ttl(ttl_secs: i64) -> Self {
        let config = Config {
            host: "127.0.0.1".parse().unwrap(),
            port: 0,
            jwt_secret: SecretString::from("kD8#mQ2$vN5@xR7!pT4&wZ9*bL6^cJ3%"),
            token_ttl_secs: ttl_secs,
            allowed_origins: Vec::new(),
            admin_seed: None,
        };

        let state = AppState::new(config);
        let router = solelab_api::app(state.clone());
        Self { state, router }
    }

    /// Fire one request at the router and return status plus parsed body.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(path);

        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }

        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(serde_json::to_vec(&body).unwrap()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };

        (status, json)
    }

    /// Register a user and log them in, returning the session token.
    pub async fn register_and_login(&self, name: &str, email: &str, password: &str) -> String {
        let (status, _) = self
            .request(
                Method::POST,
                "/register",
                None,
                Some(json!({"name": name, "email": email, "password": password})),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED);

        self.login(email, password).await
    }

    /// Log in and return the session token.
    pub async fn login(&self, email: &str, password: &str) -> String {
        let (status, body) = self
            .request(
                Method::POST,
                "/login",
                None,
                Some(json!({"email": email, "password": password})),
            )
            .await;
        assert_eq!(status, StatusCode::OK);

        body["data"]["token"].as_str().unwrap().to_owned()
    }

    /// Seed the admin account and return its session token.
    pub async fn admin_token(&self) -> String {
        let auth = AuthService::new(self.state.users(), self.state.tokens());
        auth.ensure_admin(&AdminSeed {
            email: ADMIN_EMAIL.to_owned(),
            password: SecretString::from(ADMIN_PASSWORD),
        })
        .await
        .unwrap();

        self.login(ADMIN_EMAIL, ADMIN_PASSWORD).await
    }

    /// Insert a product directly into the catalog store.
    pub async fn seed_product(&self, name: &str, price: i64) -> ProductId {
        let product = self
            .state
            .products()
            .insert(Product::new(
                name.to_owned(),
                Price::new(Decimal::from(price)).unwrap(),
            ))
            .await;
        product.id
    }
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}
