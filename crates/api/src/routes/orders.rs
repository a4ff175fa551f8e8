//! Order route handlers.
//!
//! Thin wrappers around [`OrderService`]: extract, delegate, envelope.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Deserialize;

use solelab_core::{OrderId, OrderItemId};

use crate::envelope::success;
use crate::error::{AppError, Result};
use crate::middleware::AdminUser;
use crate::services::orders::{NewOrder, NewOrderItem, UpdateItem};
use crate::services::{Identity, OrderService};
use crate::state::AppState;

/// Status update payload for `PUT`/`PATCH /orders/{id}`.
#[derive(Debug, Deserialize)]
pub struct UpdateStatusBody {
    #[serde(default)]
    pub status: Option<String>,
}

fn service(state: &AppState) -> OrderService<'_> {
    OrderService::new(state.orders(), state.products(), state.notifier())
}

/// `POST /orders`
pub async fn create(
    State(state): State<AppState>,
    identity: Identity,
    Json(body): Json<NewOrder>,
) -> Result<impl IntoResponse> {
    let order = service(&state).create_order(identity.user_id, body).await?;

    tracing::info!(order_id = %order.id, total = %order.total_amount, "order created");
    Ok((StatusCode::CREATED, success(order)))
}

/// `GET /orders` — admins see everything, users see their own.
pub async fn list(
    State(state): State<AppState>,
    identity: Identity,
) -> Result<impl IntoResponse> {
    Ok(success(service(&state).list_orders(&identity).await))
}

/// `GET /orders/{id}`
pub async fn show(
    State(state): State<AppState>,
    _identity: Identity,
    Path(id): Path<OrderId>,
) -> Result<impl IntoResponse> {
    Ok(success(service(&state).get_order(id).await?))
}

/// `PUT`/`PATCH /orders/{id}` — admin status transition.
pub async fn update_status(
    State(state): State<AppState>,
    AdminUser(_): AdminUser,
    Path(id): Path<OrderId>,
    Json(body): Json<UpdateStatusBody>,
) -> Result<impl IntoResponse> {
    let status = body
        .status
        .ok_or_else(|| AppError::Validation("Status is required".to_owned()))?;

    let order = service(&state).update_status(id, &status).await?;

    tracing::info!(order_id = %order.id, status = %order.status, "order status updated");
    Ok(success(order))
}

/// `DELETE /orders/{id}` — admin only.
pub async fn remove(
    State(state): State<AppState>,
    AdminUser(_): AdminUser,
    Path(id): Path<OrderId>,
) -> Result<impl IntoResponse> {
    service(&state).delete_order(id).await?;

    tracing::info!(order_id = %id, "order deleted");
    Ok(success(serde_json::Value::Null))
}

/// `POST /orders/{orderId}/items`
pub async fn add_item(
    State(state): State<AppState>,
    _identity: Identity,
    Path(order_id): Path<OrderId>,
    Json(body): Json<NewOrderItem>,
) -> Result<impl IntoResponse> {
    let order = service(&state).add_item(order_id, body).await?;
    Ok((StatusCode::CREATED, success(order)))
}

/// `PATCH /orders/{orderId}/items/{itemId}`
pub async fn update_item(
    State(state): State<AppState>,
    _identity: Identity,
    Path((order_id, item_id)): Path<(OrderId, OrderItemId)>,
    Json(body): Json<UpdateItem>,
) -> Result<impl IntoResponse> {
    let order = service(&state).update_item(order_id, item_id, body).await?;
    Ok(success(order))
}

/// `POST /orders/{orderId}/checkout`
pub async fn checkout(
    State(state): State<AppState>,
    _identity: Identity,
    Path(order_id): Path<OrderId>,
) -> Result<impl IntoResponse> {
    let order = service(&state).checkout(order_id).await?;

    tracing::info!(order_id = %order.id, "order checked out");
    Ok(success(order))
}
