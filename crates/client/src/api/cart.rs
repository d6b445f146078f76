//! Cart operations (not cached, mutable server state).
//!
//! Every mutation answers with the full updated cart so callers can
//! replace their local copy wholesale instead of patching it.

use canopy_core::{AddCartItemInput, Cart, CartItemId, SessionId, UpdateCartItemInput};
use tracing::instrument;

use super::StorefrontApi;
use crate::error::ApiError;

impl StorefrontApi {
    /// Get the cart for a session.
    ///
    /// Sessions that never added anything get an empty cart, not an
    /// error.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self), fields(session = %session))]
    pub async fn get_cart(&self, session: &SessionId) -> Result<Cart, ApiError> {
        self.inner
            .rest
            .get(&self.store_path(&format!("carts/{session}")), &[])
            .await
    }

    /// Add a variant to the cart.
    ///
    /// # Errors
    ///
    /// Returns an error if the variant cannot be added or the API
    /// request fails.
    #[instrument(skip(self, input), fields(session = %session, variant = %input.variant_id))]
    pub async fn add_cart_item(
        &self,
        session: &SessionId,
        input: &AddCartItemInput,
    ) -> Result<Cart, ApiError> {
        self.inner
            .rest
            .post(&self.store_path(&format!("carts/{session}/items")), input)
            .await
    }

    /// Change the quantity of a cart line.
    ///
    /// # Errors
    ///
    /// Returns an error if the line is not in the cart or the API
    /// request fails.
    #[instrument(skip(self, input), fields(session = %session, item = %item))]
    pub async fn update_cart_item(
        &self,
        session: &SessionId,
        item: &CartItemId,
        input: &UpdateCartItemInput,
    ) -> Result<Cart, ApiError> {
        self.inner
            .rest
            .patch(
                &self.store_path(&format!("carts/{session}/items/{item}")),
                input,
            )
            .await
    }

    /// Remove a line from the cart.
    ///
    /// # Errors
    ///
    /// Returns an error if the line is not in the cart or the API
    /// request fails.
    #[instrument(skip(self), fields(session = %session, item = %item))]
    pub async fn remove_cart_item(
        &self,
        session: &SessionId,
        item: &CartItemId,
    ) -> Result<Cart, ApiError> {
        self.inner
            .rest
            .delete(&self.store_path(&format!("carts/{session}/items/{item}")))
            .await
    }

    /// Empty the cart in one call.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self), fields(session = %session))]
    pub async fn clear_cart(&self, session: &SessionId) -> Result<Cart, ApiError> {
        self.inner
            .rest
            .delete(&self.store_path(&format!("carts/{session}")))
            .await
    }
}
