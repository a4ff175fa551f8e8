//! Business services.
//!
//! Services borrow their stores and collaborators from [`crate::state::AppState`]
//! per request; they hold no state of their own.

pub mod auth;
pub mod orders;
pub mod tokens;

pub use auth::AuthService;
pub use orders::OrderService;
pub use tokens::{Identity, TokenService};
