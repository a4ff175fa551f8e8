//! Order lifecycle manager.
//!
//! Owns order creation, item mutation, status transitions, total
//! recomputation, and the notification publishes that follow successful
//! writes. Authorization (who may call what) is enforced at the route
//! boundary; this service assumes its caller has been vetted.
//!
//! Every mutating operation is a read-modify-write against the order store
//! with no lock held in between: two concurrent updates to one order race
//! and the last write wins, with both notification events still firing.

use rust_decimal::Decimal;
use serde::Deserialize;

use solelab_core::{
    Customization, Email, OrderId, OrderItemId, OrderStatus, Phone, ProductId, UserId,
    first_unstyled,
};

use super::tokens::Identity;
use crate::db::{OrderStore, ProductStore, StoreError};
use crate::models::order::{MAX_SHOE_SIZE, MIN_SHOE_SIZE};
use crate::models::{ContactInfo, Order, OrderItem};
use crate::realtime::{Notifier, OrderEvent};

/// Errors surfaced by order lifecycle operations.
#[derive(Debug, thiserror::Error)]
pub enum OrderError {
    /// Malformed or missing request fields.
    #[error("{0}")]
    Validation(String),

    /// Unknown order id.
    #[error("order not found")]
    OrderNotFound,

    /// Unknown item id within an existing order.
    #[error("item not found")]
    ItemNotFound,

    /// Store operation failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}

// =============================================================================
// Request payloads
// =============================================================================

/// Payload for creating an order.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOrder {
    pub contact_info: NewContactInfo,
    #[serde(default)]
    pub items: Vec<NewOrderItem>,
    /// Optional initial status; defaults to `Pending`.
    #[serde(default)]
    pub status: Option<String>,
}

/// Raw, not-yet-validated contact details.
#[derive(Debug, Deserialize)]
pub struct NewContactInfo {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
}

/// Raw, not-yet-validated line item. Also the payload for the
/// add-item-to-bag endpoint.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOrderItem {
    #[serde(default)]
    pub product_id: Option<ProductId>,
    #[serde(default)]
    pub size: i64,
    #[serde(default)]
    pub quantity: i64,
    #[serde(default)]
    pub customization: Customization,
}

/// Partial update of an existing line item. Only provided fields change.
#[derive(Debug, Deserialize)]
pub struct UpdateItem {
    #[serde(default)]
    pub size: Option<i64>,
    #[serde(default)]
    pub quantity: Option<i64>,
}

// =============================================================================
// Service
// =============================================================================

/// The order lifecycle manager.
pub struct OrderService<'a> {
    orders: &'a OrderStore,
    products: &'a ProductStore,
    notifier: &'a dyn Notifier,
}

impl<'a> OrderService<'a> {
    /// Create a new order service.
    #[must_use]
    pub const fn new(
        orders: &'a OrderStore,
        products: &'a ProductStore,
        notifier: &'a dyn Notifier,
    ) -> Self {
        Self {
            orders,
            products,
            notifier,
        }
    }

    /// Create an order, price it against the catalog, persist it, and
    /// publish `newOrder`.
    ///
    /// # Errors
    ///
    /// Returns `OrderError::Validation` on malformed contact details, an
    /// empty item list, out-of-bounds item fields, or an unknown status
    /// value.
    pub async fn create_order(&self, user_id: UserId, req: NewOrder) -> Result<Order, OrderError> {
        let contact_info = validate_contact(req.contact_info)?;

        if req.items.is_empty() {
            return Err(OrderError::Validation(
                "An order must contain at least one item".to_owned(),
            ));
        }

        let items = req
            .items
            .into_iter()
            .map(validate_new_item)
            .collect::<Result<Vec<_>, _>>()?;

        let status = match req.status.as_deref() {
            Some(raw) => parse_status(raw)?,
            None => OrderStatus::Pending,
        };

        let total_amount = self.total_of(&items).await;

        let now = chrono::Utc::now();
        let order = Order {
            id: OrderId::generate(),
            user_id,
            contact_info,
            items,
            status,
            total_amount,
            created_at: now,
            updated_at: now,
        };

        let order = self.orders.insert(order).await;
        self.notifier.publish(OrderEvent::NewOrder(order.clone()));

        Ok(order)
    }

    /// Set the lifecycle status of an order and publish
    /// `orderStatusUpdated`.
    ///
    /// Status values are validated before anything is read, so an invalid
    /// value never mutates the order. No transition graph is enforced: any
    /// status may follow any other.
    ///
    /// # Errors
    ///
    /// Returns `OrderError::Validation` for an unknown status value and
    /// `OrderError::OrderNotFound` for an unknown id.
    pub async fn update_status(&self, order_id: OrderId, raw: &str) -> Result<Order, OrderError> {
        let status = parse_status(raw)?;

        let mut order = self
            .orders
            .get(order_id)
            .await
            .ok_or(OrderError::OrderNotFound)?;
        order.status = status;

        let order = self.orders.update(order).await?;
        self.notifier
            .publish(OrderEvent::OrderStatusUpdated(order.clone()));

        Ok(order)
    }

    /// Append an item to an order's bag and recompute the total.
    ///
    /// Deliberately quiet: the bag is private to the shopper, so no event
    /// is published.
    ///
    /// # Errors
    ///
    /// Returns `OrderError::Validation` on out-of-bounds fields and
    /// `OrderError::OrderNotFound` for an unknown id.
    pub async fn add_item(&self, order_id: OrderId, req: NewOrderItem) -> Result<Order, OrderError> {
        let item = validate_new_item(req)?;

        let mut order = self
            .orders
            .get(order_id)
            .await
            .ok_or(OrderError::OrderNotFound)?;
        order.items.push(item);
        order.total_amount = self.total_of(&order.items).await;

        Ok(self.orders.update(order).await?)
    }

    /// Apply a partial update to one item, recompute the total, and publish
    /// `orderItemUpdated`.
    ///
    /// Fields that are not provided keep their value; in particular the
    /// item's customization is untouched.
    ///
    /// # Errors
    ///
    /// Returns `OrderError::Validation` if a provided field is out of
    /// bounds, `OrderError::OrderNotFound` / `OrderError::ItemNotFound` for
    /// unknown ids.
    pub async fn update_item(
        &self,
        order_id: OrderId,
        item_id: OrderItemId,
        req: UpdateItem,
    ) -> Result<Order, OrderError> {
        // Each provided field is validated on its own before any mutation.
        if let Some(size) = req.size {
            validate_size(size)?;
        }
        if let Some(quantity) = req.quantity {
            validate_quantity(quantity)?;
        }

        let mut order = self
            .orders
            .get(order_id)
            .await
            .ok_or(OrderError::OrderNotFound)?;

        let item = order.item_mut(item_id).ok_or(OrderError::ItemNotFound)?;
        if let Some(size) = req.size {
            item.size = size_as_u8(size);
        }
        if let Some(quantity) = req.quantity {
            item.quantity = quantity_as_u32(quantity);
        }

        order.total_amount = self.total_of(&order.items).await;

        let order = self.orders.update(order).await?;
        self.notifier
            .publish(OrderEvent::OrderItemUpdated(order.clone()));

        Ok(order)
    }

    /// Delete an order and publish `orderDeleted` with its id.
    ///
    /// # Errors
    ///
    /// Returns `OrderError::OrderNotFound` for an unknown id.
    pub async fn delete_order(&self, order_id: OrderId) -> Result<(), OrderError> {
        self.orders.remove(order_id).await.map_err(|e| match e {
            StoreError::NotFound => OrderError::OrderNotFound,
            other => OrderError::Store(other),
        })?;

        self.notifier.publish(OrderEvent::OrderDeleted(order_id));
        Ok(())
    }

    /// Fetch a single order.
    ///
    /// Any authenticated identity may fetch any order it can name; see
    /// DESIGN.md for the ownership discussion.
    ///
    /// # Errors
    ///
    /// Returns `OrderError::OrderNotFound` for an unknown id.
    pub async fn get_order(&self, order_id: OrderId) -> Result<Order, OrderError> {
        self.orders
            .get(order_id)
            .await
            .ok_or(OrderError::OrderNotFound)
    }

    /// List orders visible to the requesting identity, newest first.
    ///
    /// Admins see everything; everyone else sees only the orders they
    /// created.
    pub async fn list_orders(&self, identity: &Identity) -> Vec<Order> {
        if identity.is_admin {
            self.orders.list_all().await
        } else {
            self.orders.list_for_user(identity.user_id).await
        }
    }

    /// Finalize an order: mark it shipped. No payment step is modeled.
    ///
    /// # Errors
    ///
    /// Returns `OrderError::OrderNotFound` for an unknown id.
    pub async fn checkout(&self, order_id: OrderId) -> Result<Order, OrderError> {
        let mut order = self
            .orders
            .get(order_id)
            .await
            .ok_or(OrderError::OrderNotFound)?;
        order.status = OrderStatus::Shipped;

        Ok(self.orders.update(order).await?)
    }

    /// Sum of resolved product price times quantity over all items.
    ///
    /// Items with no product reference, or one that no longer resolves in
    /// the catalog, contribute zero rather than failing the order.
    async fn total_of(&self, items: &[OrderItem]) -> Decimal {
        let mut total = Decimal::ZERO;
        for item in items {
            let Some(product_id) = item.product_id else {
                continue;
            };
            if let Some(product) = self.products.get(product_id).await {
                total += product.price.extend(item.quantity);
            }
        }
        total
    }
}

// =============================================================================
// Validation
// =============================================================================

fn validate_contact(raw: NewContactInfo) -> Result<ContactInfo, OrderError> {
    let name = raw.name.trim();
    if name.is_empty() {
        return Err(OrderError::Validation("Contact name is required".to_owned()));
    }

    let email = Email::parse(&raw.email)
        .map_err(|_| OrderError::Validation("A valid email address is required".to_owned()))?;

    let phone = match raw.phone.as_deref() {
        None | Some("") => None,
        Some(raw_phone) => Some(Phone::parse(raw_phone).map_err(|_| {
            OrderError::Validation("Phone number must be 10-15 digits".to_owned())
        })?),
    };

    Ok(ContactInfo {
        name: name.to_owned(),
        email,
        phone,
    })
}

fn validate_new_item(raw: NewOrderItem) -> Result<OrderItem, OrderError> {
    validate_size(raw.size)?;
    validate_quantity(raw.quantity)?;

    if let Some(region) = first_unstyled(&raw.customization) {
        return Err(OrderError::Validation(format!(
            "Customization for '{region}' needs a color or a texture"
        )));
    }

    Ok(OrderItem {
        id: OrderItemId::generate(),
        product_id: raw.product_id,
        size: size_as_u8(raw.size),
        quantity: quantity_as_u32(raw.quantity),
        customization: raw.customization,
    })
}

fn validate_size(size: i64) -> Result<(), OrderError> {
    if size < i64::from(MIN_SHOE_SIZE) || size > i64::from(MAX_SHOE_SIZE) {
        return Err(OrderError::Validation(format!(
            "Size must be between {MIN_SHOE_SIZE} and {MAX_SHOE_SIZE}"
        )));
    }
    Ok(())
}

fn validate_quantity(quantity: i64) -> Result<(), OrderError> {
    if quantity < 1 {
        return Err(OrderError::Validation(
            "Quantity must be at least 1".to_owned(),
        ));
    }
    Ok(())
}

fn parse_status(raw: &str) -> Result<OrderStatus, OrderError> {
    raw.parse::<OrderStatus>()
        .map_err(|_| OrderError::Validation("Invalid status value".to_owned()))
}

// Bounds were checked by the validators above.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
const fn size_as_u8(size: i64) -> u8 {
    size as u8
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
const fn quantity_as_u32(quantity: i64) -> u32 {
    quantity as u32
}
