//! Product catalog types.

use chrono::{DateTime, Utc};
use serde::Serialize;

use solelab_core::{Price, ProductId};

/// A sellable base shoe model.
///
/// Immutable after creation; order totals resolve against the price at
/// recompute time.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product ID.
    pub id: ProductId,
    /// Display name, non-empty and trimmed.
    pub name: String,
    /// Unit price, strictly positive.
    pub price: Price,
    /// When the product was added to the catalog.
    pub created_at: DateTime<Utc>,
    /// When the product was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Create a new catalog entry.
    #[must_use]
    pub fn new(name: String, price: Price) -> Self {
        let now = Utc::now();
        Self {
            id: ProductId::generate(),
            name,
            price,
            created_at: now,
            updated_at: now,
        }
    }
}
