//! User domain types.

use chrono::{DateTime, Utc};
use serde::Serialize;

use solelab_core::{Email, UserId};

/// A registered user.
///
/// Only `Serialize` is derived: users are built through registration, never
/// deserialized from the wire. The password hash is excluded from every
/// outward-facing read.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique user ID.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Email address, unique case-insensitively.
    pub email: Email,
    /// Argon2id password hash. Never serialized.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Whether this user may manage orders and the catalog.
    pub is_admin: bool,
    /// When the user registered.
    pub created_at: DateTime<Utc>,
    /// When the user was last updated.
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new non-admin user with the given, already-hashed password.
    #[must_use]
    pub fn new(name: String, email: Email, password_hash: String) -> Self {
        let now = Utc::now();
        Self {
            id: UserId::generate(),
            name,
            email,
            password_hash,
            is_admin: false,
            created_at: now,
            updated_at: now,
        }
    }
}
