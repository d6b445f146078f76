//! Storefront subcommands.
//!
//! Each command builds the state service for its resource, drives it
//! through the shared service contracts, and renders the resulting
//! snapshot as log lines.

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod session;
pub mod store;

use canopy_client::StorageError;
use canopy_core::ServiceError;
use thiserror::Error;

/// Errors a storefront command can surface.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error(transparent)]
    Service(#[from] ServiceError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}
