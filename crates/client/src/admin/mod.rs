//! Admin API client for partner store management.
//!
//! Same transport as the storefront client but authenticated with an
//! admin token, which unlocks catalog writes, inventory adjustments,
//! and order management. Nothing here is cached: an operator acting on
//! stale state is worse than the extra round trip.

mod orders;
mod products;
mod store;

use std::sync::Arc;

use canopy_core::StoreId;

use crate::http::RestClient;

// =============================================================================
// AdminApi
// =============================================================================

/// Client for the partner-facing platform API.
#[derive(Clone)]
pub struct AdminApi {
    inner: Arc<AdminApiInner>,
}

struct AdminApiInner {
    rest: RestClient,
    store: StoreId,
}

impl AdminApi {
    /// Create a client for one store.
    #[must_use]
    pub fn new(rest: RestClient, store: StoreId) -> Self {
        Self {
            inner: Arc::new(AdminApiInner { rest, store }),
        }
    }

    /// The store this client manages.
    #[must_use]
    pub fn store(&self) -> &StoreId {
        &self.inner.store
    }

    fn store_path(&self, rest: &str) -> String {
        format!("stores/{}/{rest}", self.inner.store)
    }
}
