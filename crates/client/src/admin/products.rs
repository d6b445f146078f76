//! Catalog management operations.

use canopy_core::{
    InventoryUpdate, Page, Product, ProductId, ProductInput, ProductQuery, Variant, VariantId,
};
use tracing::instrument;

use super::AdminApi;
use crate::error::ApiError;

impl AdminApi {
    /// Get a page of products.
    ///
    /// With an admin token the listing includes drafts and archived
    /// products, not just the live catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self, query), fields(page = query.page))]
    pub async fn get_products(&self, query: &ProductQuery) -> Result<Page<Product>, ApiError> {
        self.inner
            .rest
            .get(&self.store_path("products"), &query.to_params())
            .await
    }

    /// Create a product.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is rejected or the API request
    /// fails.
    #[instrument(skip(self, input), fields(title = %input.title))]
    pub async fn create_product(&self, input: &ProductInput) -> Result<Product, ApiError> {
        self.inner
            .rest
            .post(&self.store_path("products"), input)
            .await
    }

    /// Replace a product's editable fields.
    ///
    /// # Errors
    ///
    /// Returns an error if the product is not found, the input is
    /// rejected, or the API request fails.
    #[instrument(skip(self, input), fields(id = %id))]
    pub async fn update_product(
        &self,
        id: &ProductId,
        input: &ProductInput,
    ) -> Result<Product, ApiError> {
        self.inner
            .rest
            .put(&self.store_path(&format!("products/{id}")), input)
            .await
    }

    /// Delete a product. Answers with the product as it was deleted.
    ///
    /// # Errors
    ///
    /// Returns an error if the product is not found or the API request
    /// fails.
    #[instrument(skip(self), fields(id = %id))]
    pub async fn delete_product(&self, id: &ProductId) -> Result<Product, ApiError> {
        self.inner
            .rest
            .delete(&self.store_path(&format!("products/{id}")))
            .await
    }

    /// Set a variant's stock level.
    ///
    /// # Errors
    ///
    /// Returns an error if the variant is not found or the API request
    /// fails.
    #[instrument(skip(self, update), fields(variant = %variant, quantity = update.quantity))]
    pub async fn set_inventory(
        &self,
        variant: &VariantId,
        update: &InventoryUpdate,
    ) -> Result<Variant, ApiError> {
        self.inner
            .rest
            .put(
                &self.store_path(&format!("variants/{variant}/inventory")),
                update,
            )
            .await
    }
}
