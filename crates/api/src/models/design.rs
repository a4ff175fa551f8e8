//! Saved shoe designs.

use chrono::{DateTime, Utc};
use serde::Serialize;

use solelab_core::{Customization, DesignId};

/// A standalone saved customization, independent of any order.
///
/// The 3D configurator stores work-in-progress looks here so they can be
/// reloaded by id later.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Design {
    /// Unique design ID.
    pub id: DesignId,
    /// User-chosen name for the look.
    pub name: String,
    /// Per-region color/texture choices, never empty.
    pub customization: Customization,
    /// When the design was saved.
    pub created_at: DateTime<Utc>,
}

impl Design {
    /// Create a new saved design.
    #[must_use]
    pub fn new(name: String, customization: Customization) -> Self {
        Self {
            id: DesignId::generate(),
            name,
            customization,
            created_at: Utc::now(),
        }
    }
}
