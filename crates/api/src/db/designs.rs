//! Saved design store.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use solelab_core::DesignId;

use crate::models::Design;

/// Store for saved standalone shoe designs.
#[derive(Debug, Clone, Default)]
pub struct DesignStore {
    inner: Arc<RwLock<HashMap<DesignId, Design>>>,
}

impl DesignStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Save a design.
    pub async fn insert(&self, design: Design) -> Design {
        self.inner.write().await.insert(design.id, design.clone());
        design
    }

    /// Get a design by id.
    pub async fn get(&self, id: DesignId) -> Option<Design> {
        self.inner.read().await.get(&id).cloned()
    }
}
