//! Order store.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use solelab_core::{OrderId, UserId};

use super::StoreError;
use crate::models::Order;

/// Store for customer orders.
///
/// Writes replace the whole document. Callers that read-modify-write do so
/// without any lock held between the read and the write; two concurrent
/// updates to one order interleave arbitrarily and the last write wins.
#[derive(Debug, Clone, Default)]
pub struct OrderStore {
    inner: Arc<RwLock<HashMap<OrderId, Order>>>,
}

impl OrderStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Persist a new order.
    pub async fn insert(&self, order: Order) -> Order {
        self.inner.write().await.insert(order.id, order.clone());
        order
    }

    /// Get an order by id.
    pub async fn get(&self, id: OrderId) -> Option<Order> {
        self.inner.read().await.get(&id).cloned()
    }

    /// Replace an existing order document, stamping `updated_at`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if the order does not exist.
    pub async fn update(&self, mut order: Order) -> Result<Order, StoreError> {
        let mut orders = self.inner.write().await;

        if !orders.contains_key(&order.id) {
            return Err(StoreError::NotFound);
        }

        order.updated_at = chrono::Utc::now();
        orders.insert(order.id, order.clone());
        Ok(order)
    }

    /// Delete an order, returning the removed document.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if the order does not exist.
    pub async fn remove(&self, id: OrderId) -> Result<Order, StoreError> {
        self.inner
            .write()
            .await
            .remove(&id)
            .ok_or(StoreError::NotFound)
    }

    /// All orders, newest first.
    pub async fn list_all(&self) -> Vec<Order> {
        let mut orders: Vec<Order> = self.inner.read().await.values().cloned().collect();
        sort_newest_first(&mut orders);
        orders
    }

    /// Orders created by the given user, newest first.
    pub async fn list_for_user(&self, user_id: UserId) -> Vec<Order> {
        let mut orders: Vec<Order> = self
            .inner
            .read()
            .await
            .values()
            .filter(|o| o.user_id == user_id)
            .cloned()
            .collect();
        sort_newest_first(&mut orders);
        orders
    }
}

fn sort_newest_first(orders: &mut [Order]) {
    orders.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
}
