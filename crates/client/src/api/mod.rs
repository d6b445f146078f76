//! Storefront API client.
//!
//! Scopes every request to a single store and authenticates with the
//! publishable token. Catalog reads are cached with `moka` (5-minute
//! TTL); cart and checkout calls always hit the network because they
//! mutate server state.

mod cart;
mod catalog;
mod checkout;

use std::sync::Arc;
use std::time::Duration;

use canopy_core::StoreId;
use moka::future::Cache;

use crate::cache::{CacheKey, CacheValue};
use crate::http::RestClient;

const CACHE_CAPACITY: u64 = 1000;
const CACHE_TTL: Duration = Duration::from_secs(300);

// =============================================================================
// StorefrontApi
// =============================================================================

/// Client for the shopper-facing platform API.
///
/// Cheap to clone; clones share the HTTP connection pool and the
/// catalog cache.
#[derive(Clone)]
pub struct StorefrontApi {
    inner: Arc<StorefrontApiInner>,
}

struct StorefrontApiInner {
    rest: RestClient,
    store: StoreId,
    cache: Cache<CacheKey, CacheValue>,
}

impl StorefrontApi {
    /// Create a client for one store.
    #[must_use]
    pub fn new(rest: RestClient, store: StoreId) -> Self {
        let cache = Cache::builder()
            .max_capacity(CACHE_CAPACITY)
            .time_to_live(CACHE_TTL)
            .build();

        Self {
            inner: Arc::new(StorefrontApiInner { rest, store, cache }),
        }
    }

    /// The store this client is scoped to.
    #[must_use]
    pub fn store(&self) -> &StoreId {
        &self.inner.store
    }

    fn store_path(&self, rest: &str) -> String {
        format!("stores/{}/{rest}", self.inner.store)
    }

    // =========================================================================
    // Cache Management
    // =========================================================================

    /// Invalidate a cached product.
    pub async fn invalidate_product(&self, slug: &str) {
        self.inner
            .cache
            .invalidate(&CacheKey::Product(slug.to_owned()))
            .await;
    }

    /// Invalidate all cached catalog data.
    pub async fn invalidate_all(&self) {
        self.inner.cache.invalidate_all();
        self.inner.cache.run_pending_tasks().await;
    }
}
