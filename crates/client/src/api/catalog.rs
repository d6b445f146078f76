//! Catalog and store configuration reads.

use canopy_core::{Page, Product, ProductQuery, StoreConfig};
use tracing::{debug, instrument};

use super::StorefrontApi;
use crate::cache::{CacheKey, CacheValue};
use crate::error::ApiError;

impl StorefrontApi {
    /// Get the store's public configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self))]
    pub async fn get_store_config(&self) -> Result<StoreConfig, ApiError> {
        self.inner
            .rest
            .get(&format!("stores/{}", self.inner.store), &[])
            .await
    }

    /// Get a page of products.
    ///
    /// Unfiltered pages are cached; queries carrying a search term or
    /// tag always go to the network.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self, query), fields(page = query.page))]
    pub async fn get_products(&self, query: &ProductQuery) -> Result<Page<Product>, ApiError> {
        let cache_key = CacheKey::Products {
            page: query.page,
            page_size: query.page_size,
            sort: query.sort,
        };

        if !query.is_filtered()
            && let Some(CacheValue::Products(page)) = self.inner.cache.get(&cache_key).await
        {
            debug!("Cache hit for products");
            return Ok(page);
        }

        let page: Page<Product> = self
            .inner
            .rest
            .get(&self.store_path("products"), &query.to_params())
            .await?;

        if !query.is_filtered() {
            self.inner
                .cache
                .insert(cache_key, CacheValue::Products(page.clone()))
                .await;
        }

        Ok(page)
    }

    /// Get a product by its URL slug.
    ///
    /// # Errors
    ///
    /// Returns an error if the product is not found or the API request
    /// fails.
    #[instrument(skip(self), fields(slug = %slug))]
    pub async fn get_product_by_slug(&self, slug: &str) -> Result<Product, ApiError> {
        let cache_key = CacheKey::Product(slug.to_owned());

        if let Some(CacheValue::Product(product)) = self.inner.cache.get(&cache_key).await {
            debug!("Cache hit for product");
            return Ok(*product);
        }

        let product: Product = self
            .inner
            .rest
            .get(&self.store_path(&format!("products/{slug}")), &[])
            .await?;

        self.inner
            .cache
            .insert(cache_key, CacheValue::Product(Box::new(product.clone())))
            .await;

        Ok(product)
    }
}
