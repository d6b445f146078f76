//! Order management operations.

use canopy_core::{Order, OrderId, OrderQuery, OrderStatus, OrderStatusUpdate, Page};
use tracing::instrument;

use super::AdminApi;
use crate::error::ApiError;

impl AdminApi {
    /// Get a page of the store's orders, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self, query), fields(page = query.page))]
    pub async fn get_orders(&self, query: &OrderQuery) -> Result<Page<Order>, ApiError> {
        self.inner
            .rest
            .get(&self.store_path("orders"), &query.to_params())
            .await
    }

    /// Get a single order by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the order is not found or the API request
    /// fails.
    #[instrument(skip(self), fields(order = %order))]
    pub async fn get_order(&self, order: &OrderId) -> Result<Order, ApiError> {
        self.inner
            .rest
            .get(&self.store_path(&format!("orders/{order}")), &[])
            .await
    }

    /// Move an order to a new fulfilment status.
    ///
    /// # Errors
    ///
    /// Returns an error if the transition is rejected or the API
    /// request fails.
    #[instrument(skip(self), fields(order = %order, status = %status))]
    pub async fn update_order_status(
        &self,
        order: &OrderId,
        status: OrderStatus,
    ) -> Result<Order, ApiError> {
        self.inner
            .rest
            .patch(
                &self.store_path(&format!("orders/{order}")),
                &OrderStatusUpdate { status },
            )
            .await
    }
}
