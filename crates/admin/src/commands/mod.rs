//! Admin subcommands.
//!
//! These talk to the platform API directly and report transport errors
//! as-is; an operator wants the status code and the backend's words,
//! not the softened copy the storefront shows shoppers.

pub mod orders;
pub mod products;
pub mod store;
