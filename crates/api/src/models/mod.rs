//! Domain models for the configurator API.
//!
//! These are the persisted document shapes. Wire field names are camelCase
//! to match the documents the storefront client already consumes.

pub mod design;
pub mod order;
pub mod product;
pub mod user;

pub use design::Design;
pub use order::{ContactInfo, Order, OrderItem};
pub use product::Product;
pub use user::User;
