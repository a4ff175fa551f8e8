//! Solelab Core - Shared types library.
//!
//! This crate provides common types used across all Solelab components:
//! - `api` - The public configurator API server
//! - `integration-tests` - End-to-end tests against the assembled router
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no database access, no HTTP
//! clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, emails, phone
//!   numbers, order statuses, and shoe customization regions

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
