//! Document stores for the configurator API.
//!
//! Each store is a cloneable handle over a process-local document map,
//! exposing the same repository surface a database-backed implementation
//! would (the persistence mechanics themselves are outside this service's
//! contract). Consistency matches what the service layer is written
//! against:
//!
//! - every call is an async suspension point;
//! - each insert/update/remove is atomic per document;
//! - there are no cross-document transactions and no locking across a
//!   read-modify-write: concurrent writers to the same order race, and the
//!   last write wins.

pub mod designs;
pub mod orders;
pub mod products;
pub mod users;

pub use designs::DesignStore;
pub use orders::OrderStore;
pub use products::ProductStore;
pub use users::UserStore;

use thiserror::Error;

/// Errors surfaced by the document stores.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The referenced document does not exist.
    #[error("document not found")]
    NotFound,

    /// A uniqueness constraint was violated.
    #[error("{0}")]
    Conflict(String),
}
