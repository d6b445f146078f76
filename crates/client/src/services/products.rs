//! Product listing and detail state services.

use std::sync::Arc;

use async_trait::async_trait;
use canopy_core::{
    Page, Product, ProductDetailService, ProductListService, ProductQuery, ServiceError, Snapshot,
};
use tokio::sync::watch;

use super::StateCell;
use crate::api::StorefrontApi;

/// The browsable product listing as observable state.
///
/// The active query lives next to the snapshot so pagination derives
/// from what was actually asked for, not from what a caller remembers
/// asking.
#[derive(Clone)]
pub struct ProductListState {
    inner: Arc<ProductListStateInner>,
}

struct ProductListStateInner {
    api: StorefrontApi,
    page: StateCell<Page<Product>>,
    query: watch::Sender<ProductQuery>,
}

impl ProductListState {
    #[must_use]
    pub fn new(api: StorefrontApi) -> Self {
        let (query, _) = watch::channel(ProductQuery::default());
        Self {
            inner: Arc::new(ProductListStateInner {
                api,
                page: StateCell::new(),
                query,
            }),
        }
    }

    /// Watch the page snapshot.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Snapshot<Page<Product>>> {
        self.inner.page.subscribe()
    }

    /// Fetch the page after the current one, if there is one.
    ///
    /// # Errors
    ///
    /// Returns an error if the fetch fails.
    pub async fn next_page(&self) -> Result<(), ServiceError> {
        if !self.has_more() {
            return Ok(());
        }
        let next = self.query().next_page();
        self.load(next).await
    }

    /// Fetch the current query again, bypassing nothing: a cached page
    /// is served from the cache.
    ///
    /// # Errors
    ///
    /// Returns an error if the fetch fails.
    pub async fn reload(&self) -> Result<(), ServiceError> {
        let query = self.query();
        self.load(query).await
    }
}

#[async_trait]
impl ProductListService for ProductListState {
    fn page(&self) -> Snapshot<Page<Product>> {
        self.inner.page.snapshot()
    }

    fn query(&self) -> ProductQuery {
        self.inner.query.borrow().clone()
    }

    async fn load(&self, query: ProductQuery) -> Result<(), ServiceError> {
        self.inner.query.send_replace(query.clone());
        self.inner.page.begin();
        let result = self.inner.api.get_products(&query).await;
        self.inner.page.settle(result)
    }
}

/// A single product's detail view as observable state.
#[derive(Clone)]
pub struct ProductDetailState {
    inner: Arc<ProductDetailStateInner>,
}

struct ProductDetailStateInner {
    api: StorefrontApi,
    product: StateCell<Product>,
}

impl ProductDetailState {
    #[must_use]
    pub fn new(api: StorefrontApi) -> Self {
        Self {
            inner: Arc::new(ProductDetailStateInner {
                api,
                product: StateCell::new(),
            }),
        }
    }

    /// Watch the product snapshot.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Snapshot<Product>> {
        self.inner.product.subscribe()
    }
}

#[async_trait]
impl ProductDetailService for ProductDetailState {
    fn product(&self) -> Snapshot<Product> {
        self.inner.product.snapshot()
    }

    async fn load(&self, slug: &str) -> Result<(), ServiceError> {
        self.inner.product.begin();
        let result = self.inner.api.get_product_by_slug(slug).await;
        self.inner.product.settle(result)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::http::RestClient;
    use crate::signals::Signals;

    fn unreachable_state() -> ProductListState {
        let rest = RestClient::new("http://127.0.0.1:9", "pk_test", Signals::default());
        ProductListState::new(StorefrontApi::new(rest, "store_1".into()))
    }

    #[test]
    fn test_fresh_state_has_the_default_query_and_no_pages() {
        let state = unreachable_state();

        assert_eq!(state.query(), ProductQuery::default());
        assert!(!state.has_more());
        assert!(state.page().data.is_none());
    }

    #[tokio::test]
    async fn test_next_page_without_data_is_a_no_op() {
        let state = unreachable_state();

        state.next_page().await.unwrap();

        assert!(state.page().data.is_none());
        assert!(state.page().error.is_none());
    }

    #[tokio::test]
    async fn test_load_records_the_query_even_when_the_fetch_fails() {
        let state = unreachable_state();
        let query = ProductQuery {
            search: Some("lamp".into()),
            ..ProductQuery::default()
        };

        let err = state.load(query.clone()).await.unwrap_err();

        assert_eq!(state.query(), query);
        assert!(!err.is_validation());
    }
}
