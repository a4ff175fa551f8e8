//! HTTP route handlers for the configurator API.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                  - Liveness check
//!
//! # Auth & account
//! POST /register                - Create an account
//! POST /login                   - Issue a session token
//! PUT  /change-password         - Change password (auth)
//! GET  /dashboard               - Current user + their orders (auth)
//!
//! # Catalog
//! GET  /products                - Product listing (public)
//! POST /products                - Add a product (admin)
//!
//! # Orders
//! POST   /orders                           - Place an order (auth)
//! GET    /orders                           - List orders, role-scoped (auth)
//! GET    /orders/{id}                      - Fetch one order (auth)
//! PUT    /orders/{id}                      - Set status (admin)
//! PATCH  /orders/{id}                      - Set status (admin)
//! DELETE /orders/{id}                      - Delete (admin)
//! POST   /orders/{orderId}/items           - Add an item to the bag (auth)
//! PATCH  /orders/{orderId}/items/{itemId}  - Partially update an item (auth)
//! POST   /orders/{orderId}/checkout        - Finalize the order (auth)
//!
//! # Saved designs
//! POST /designs                 - Save a standalone customization
//! GET  /designs/{id}            - Load a saved customization
//!
//! # Live channel
//! GET  /events                  - WebSocket emitting order events
//! ```

pub mod auth;
pub mod designs;
pub mod events;
pub mod orders;
pub mod products;

use axum::{
    Router,
    routing::{get, post, put},
};

use crate::state::AppState;

/// Create the order routes router.
pub fn order_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(orders::create).get(orders::list))
        .route(
            "/{id}",
            get(orders::show)
                .put(orders::update_status)
                .patch(orders::update_status)
                .delete(orders::remove),
        )
        .route("/{order_id}/items", post(orders::add_item))
        .route("/{order_id}/items/{item_id}", axum::routing::patch(orders::update_item))
        .route("/{order_id}/checkout", post(orders::checkout))
}

/// Create all routes for the API.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        // Auth & account
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
        .route("/change-password", put(auth::change_password))
        .route("/dashboard", get(auth::dashboard))
        // Catalog
        .route("/products", get(products::list).post(products::create))
        // Orders
        .nest("/orders", order_routes())
        // Saved designs
        .route("/designs", post(designs::create))
        .route("/designs/{id}", get(designs::show))
        // Live channel
        .route("/events", get(events::subscribe))
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check dependencies.
async fn health() -> &'static str {
    "ok"
}
