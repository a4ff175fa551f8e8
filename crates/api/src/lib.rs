//! Solelab API - customizable-sneaker configurator backend.
//!
//! # Architecture
//!
//! - Axum web framework serving a JSON API
//! - JWT bearer authentication with argon2 password hashing
//! - Document stores for users, products, orders, and saved designs
//! - Order lifecycle events fanned out to live listeners over WebSocket
//!
//! The binary lives in `main.rs`; everything else is exported as a library
//! so the integration-tests crate can drive the assembled router in-process.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod db;
pub mod envelope;
pub mod error;
pub mod middleware;
pub mod models;
pub mod realtime;
pub mod routes;
pub mod services;
pub mod state;

use axum::Router;
use axum::http::{HeaderValue, Method, header};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the full application router with middleware layers applied.
///
/// Route handlers live in [`routes`]; this only assembles and decorates.
#[must_use]
pub fn app(state: AppState) -> Router {
    let cors = cors_layer(&state.config().allowed_origins);

    routes::router()
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// CORS allow-list: configured origins, credentials permitted.
fn cors_layer(origins: &[HeaderValue]) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins.iter().cloned()))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .allow_credentials(true)
}
