//! Core types for Solelab.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod customization;
pub mod email;
pub mod id;
pub mod phone;
pub mod price;
pub mod status;

pub use customization::{Customization, Region, RegionStyle, first_unstyled};
pub use email::{Email, EmailError};
pub use id::*;
pub use phone::{Phone, PhoneError};
pub use price::{Price, PriceError};
pub use status::OrderStatus;
