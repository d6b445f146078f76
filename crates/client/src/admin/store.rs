//! Store configuration management.

use canopy_core::{StoreConfig, StoreConfigUpdate};
use tracing::instrument;

use super::AdminApi;
use crate::error::ApiError;

impl AdminApi {
    /// Get the store's configuration.
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

    /// Update store settings. Only the fields set on `update` change.
    ///
    /// # Errors
    ///
    /// Returns an error if the update is rejected or the API request
    /// fails.
    #[instrument(skip(self, update))]
    pub async fn update_store_config(
        &self,
        update: &StoreConfigUpdate,
    ) -> Result<StoreConfig, ApiError> {
        self.inner
            .rest
            .put(&format!("stores/{}", self.inner.store), update)
            .await
    }
}
