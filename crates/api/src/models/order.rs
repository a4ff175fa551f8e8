//! Order domain types.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use solelab_core::{Customization, Email, OrderId, OrderItemId, OrderStatus, Phone, ProductId, UserId};

/// Smallest shoe size the workshop produces.
pub const MIN_SHOE_SIZE: u8 = 36;
/// Largest shoe size the workshop produces.
pub const MAX_SHOE_SIZE: u8 = 44;

/// Contact and shipping details attached to an order.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfo {
    /// Recipient name, non-empty.
    pub name: String,
    /// Recipient email.
    pub email: Email,
    /// Optional phone number, digits only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<Phone>,
}

/// One line within an order.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    /// Unique item ID within the parent order's lifetime.
    pub id: OrderItemId,
    /// The base shoe model being customized. Items added through the
    /// shopping-bag endpoint carry no product reference and price at zero.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<ProductId>,
    /// Shoe size, 36-44 inclusive.
    pub size: u8,
    /// Pair count, at least 1.
    pub quantity: u32,
    /// Per-region color/texture choices.
    #[serde(skip_serializing_if = "Customization::is_empty")]
    pub customization: Customization,
}

/// A customer's order: contact info, customized line items, and a
/// lifecycle status.
///
/// `total_amount` is derived: the sum over items of resolved product price
/// times quantity, recomputed whenever items change. Items whose product
/// reference does not resolve contribute zero.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Unique order ID.
    pub id: OrderId,
    /// The identity that created the order. Ownership checks key on this.
    pub user_id: UserId,
    /// Contact and shipping details.
    pub contact_info: ContactInfo,
    /// Line items, never empty.
    pub items: Vec<OrderItem>,
    /// Lifecycle status.
    pub status: OrderStatus,
    /// Derived order total.
    pub total_amount: Decimal,
    /// When the order was placed.
    pub created_at: DateTime<Utc>,
    /// When the order was last written.
    pub updated_at: DateTime<Utc>,
}

impl Order {
    /// Look up an item by id.
    #[must_use]
    pub fn item(&self, item_id: OrderItemId) -> Option<&OrderItem> {
        self.items.iter().find(|item| item.id == item_id)
    }

    /// Mutable item lookup.
    pub fn item_mut(&mut self, item_id: OrderItemId) -> Option<&mut OrderItem> {
        self.items.iter_mut().find(|item| item.id == item_id)
    }
}
