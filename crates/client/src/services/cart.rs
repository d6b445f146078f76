//! Cart state service.

use std::sync::Arc;

use async_trait::async_trait;
use canopy_core::{
    AddCartItemInput, Cart, CartItemId, CartService, ServiceError, SessionId, Snapshot,
    UpdateCartItemInput, VariantId,
};
use tokio::sync::watch;

use super::StateCell;
use crate::api::StorefrontApi;

/// The session's cart as observable state.
///
/// Every mutation replaces the snapshot with the cart the backend
/// answered with, so totals and line items never drift from the server.
#[derive(Clone)]
pub struct CartState {
    inner: Arc<CartStateInner>,
}

struct CartStateInner {
    api: StorefrontApi,
    session: SessionId,
    cart: StateCell<Cart>,
}

impl CartState {
    #[must_use]
    pub fn new(api: StorefrontApi, session: SessionId) -> Self {
        Self {
            inner: Arc::new(CartStateInner {
                api,
                session,
                cart: StateCell::new(),
            }),
        }
    }

    /// The session this cart belongs to.
    #[must_use]
    pub fn session(&self) -> &SessionId {
        &self.inner.session
    }

    /// Watch the cart snapshot.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Snapshot<Cart>> {
        self.inner.cart.subscribe()
    }

    fn reject_zero_quantity(&self) -> ServiceError {
        let err = ServiceError::validation("Quantity must be at least 1.");
        self.inner.cart.reject(err.clone());
        err
    }
}

#[async_trait]
impl CartService for CartState {
    fn cart(&self) -> Snapshot<Cart> {
        self.inner.cart.snapshot()
    }

    async fn load(&self) -> Result<(), ServiceError> {
        self.inner.cart.begin();
        let result = self.inner.api.get_cart(&self.inner.session).await;
        self.inner.cart.settle(result)
    }

    async fn add_item(&self, variant: &VariantId, quantity: u32) -> Result<(), ServiceError> {
        if quantity == 0 {
            return Err(self.reject_zero_quantity());
        }

        self.inner.cart.begin();
        let input = AddCartItemInput {
            variant_id: variant.clone(),
            quantity,
        };
        let result = self
            .inner
            .api
            .add_cart_item(&self.inner.session, &input)
            .await;
        self.inner.cart.settle(result)
    }

    async fn update_item(&self, item: &CartItemId, quantity: u32) -> Result<(), ServiceError> {
        if quantity == 0 {
            return Err(self.reject_zero_quantity());
        }

        self.inner.cart.begin();
        let input = UpdateCartItemInput { quantity };
        let result = self
            .inner
            .api
            .update_cart_item(&self.inner.session, item, &input)
            .await;
        self.inner.cart.settle(result)
    }

    async fn remove_item(&self, item: &CartItemId) -> Result<(), ServiceError> {
        self.inner.cart.begin();
        let result = self
            .inner
            .api
            .remove_cart_item(&self.inner.session, item)
            .await;
        self.inner.cart.settle(result)
    }

    async fn clear(&self) -> Result<(), ServiceError> {
        self.inner.cart.begin();
        let result = self.inner.api.clear_cart(&self.inner.session).await;
        self.inner.cart.settle(result)
    }
}
