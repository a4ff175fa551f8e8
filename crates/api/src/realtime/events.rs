//! Live order events.

use serde::Serialize;

use solelab_core::OrderId;

use crate::models::Order;

/// An event published by the order lifecycle manager after a successful
/// state-mutating operation.
///
/// Serialized as `{"event": "...", "data": ...}`, the frame shape live
/// clients already consume. Deletion carries only the order id; everything
/// else carries the full affected order.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", content = "data", rename_all = "camelCase")]
pub enum OrderEvent {
    /// A new order was placed.
    NewOrder(Order),
    /// An order's lifecycle status changed.
    OrderStatusUpdated(Order),
    /// A line item inside an order changed.
    OrderItemUpdated(Order),
    /// An order was deleted.
    OrderDeleted(OrderId),
}

impl OrderEvent {
    /// The wire event name, e.g. `"orderStatusUpdated"`.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::NewOrder(_) => "newOrder",
            Self::OrderStatusUpdated(_) => "orderStatusUpdated",
            Self::OrderItemUpdated(_) => "orderItemUpdated",
            Self::OrderDeleted(_) => "orderDeleted",
        }
    }
}
