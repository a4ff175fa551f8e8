//! Product catalog route handlers.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use rust_decimal::Decimal;
use serde::Deserialize;

use solelab_core::Price;

use crate::envelope::success;
use crate::error::{AppError, Result};
use crate::middleware::AdminUser;
use crate::models::Product;
use crate::state::AppState;

/// Catalog entry payload.
#[derive(Debug, Deserialize)]
pub struct NewProductBody {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub price: Decimal,
}

/// `GET /products` — public listing, oldest first.
pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse> {
    Ok(success(state.products().list().await))
}

/// `POST /products` — admin-only catalog management.
pub async fn create(
    State(state): State<AppState>,
    AdminUser(_): AdminUser,
    Json(body): Json<NewProductBody>,
) -> Result<impl IntoResponse> {
    let name = body.name.trim();
    if name.is_empty() {
        return Err(AppError::Validation("Product name is required".to_owned()));
    }

    let price = Price::new(body.price)
        .map_err(|_| AppError::Validation("Price must be greater than zero".to_owned()))?;

    let product = state.products().insert(Product::new(name.to_owned(), price)).await;

    tracing::info!(product_id = %product.id, "product added to catalog");
    Ok((StatusCode::CREATED, success(product)))
}
