//! Checkout submission and order lookup.

use canopy_core::{CheckoutForm, Order, OrderId, SessionId};
use tracing::instrument;

use super::StorefrontApi;
use crate::error::ApiError;

impl StorefrontApi {
    /// Convert the session's cart into an order.
    ///
    /// The backend drains the cart on success, so a follow-up
    /// [`get_cart`](Self::get_cart) returns an empty one.
    ///
    /// # Errors
    ///
    /// Returns an error if the cart is empty, stock ran out, or the API
    /// request fails.
    #[instrument(skip(self, form), fields(session = %session))]
    pub async fn submit_checkout(
        &self,
        session: &SessionId,
        form: &CheckoutForm,
    ) -> Result<Order, ApiError> {
        self.inner
            .rest
            .post(&self.store_path(&format!("carts/{session}/checkout")), form)
            .await
    }

    /// Get a placed order by ID.
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
}
