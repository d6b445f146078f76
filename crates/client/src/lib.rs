//! Canopy Client - API surfaces and observable state services.
//!
//! Everything the storefront and admin binaries share sits here:
//!
//! - [`http::RestClient`] - the request wrapper. Every outbound call flows
//!   through it and reports to the shared [`signals::Signals`].
//! - [`api::StorefrontApi`] - the shopper-facing surface (catalog, cart,
//!   checkout), with short-lived caching of catalog reads.
//! - [`admin::AdminApi`] - the partner surface (store config, product and
//!   inventory management, orders).
//! - [`services`] - domain state services holding observable snapshots of
//!   one resource each.
//! - [`session::SessionStore`] - the persisted session ID and theme, the
//!   local-storage analog.
//! - [`format`] - translation of transport errors into presentable
//!   [`canopy_core::ServiceError`]s.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod admin;
pub mod api;
pub mod cache;
pub mod error;
pub mod format;
pub mod http;
pub mod services;
pub mod session;
pub mod signals;

pub use admin::AdminApi;
pub use api::StorefrontApi;
pub use error::ApiError;
pub use http::RestClient;
pub use services::{CartState, CheckoutState, ProductDetailState, ProductListState};
pub use session::{SessionStore, StorageError};
pub use signals::Signals;
