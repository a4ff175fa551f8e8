//! Product catalog store.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use solelab_core::ProductId;

use crate::models::Product;

/// Store for the sellable catalog.
///
/// Products are immutable after insertion, so there is no update operation.
#[derive(Debug, Clone, Default)]
pub struct ProductStore {
    inner: Arc<RwLock<HashMap<ProductId, Product>>>,
}

impl ProductStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a product to the catalog.
    pub async fn insert(&self, product: Product) -> Product {
        self.inner
            .write()
            .await
            .insert(product.id, product.clone());
        product
    }

    /// Get a product by id.
    pub async fn get(&self, id: ProductId) -> Option<Product> {
        self.inner.read().await.get(&id).cloned()
    }

    /// All products, oldest first.
    pub async fn list(&self) -> Vec<Product> {
        let mut products: Vec<Product> = self.inner.read().await.values().cloned().collect();
        products.sort_by_key(|p| (p.created_at, p.id));
        products
    }
}
