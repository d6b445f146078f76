//! Canopy Core - shared types and service contracts.
//!
//! This crate provides the common vocabulary used across all Canopy Commerce
//! components:
//! - `storefront` - Shopper-facing client (browse, cart, checkout)
//! - `admin` - Partner dashboard client (catalog, inventory, orders)
//! - `client` - HTTP plumbing and observable state services
//!
//! # Architecture
//!
//! The core crate contains only types and traits - no I/O, no HTTP clients,
//! no async runtime. This keeps it lightweight and allows it to be used
//! anywhere, including in tests that never touch the network.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, emails, and statuses
//! - [`models`] - API document types shared by the storefront and admin surfaces
//! - [`snapshot`] - The observable state cell shape held by every service
//! - [`contract`] - Service traits the client crate implements
//! - [`error`] - The shopper-facing error taxonomy and message catalogue

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod contract;
pub mod error;
pub mod models;
pub mod snapshot;
pub mod types;

pub use contract::*;
pub use error::{ErrorCode, ServiceError, api_code_message};
pub use models::*;
pub use snapshot::Snapshot;
pub use types::*;
