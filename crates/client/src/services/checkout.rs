//! Checkout state service.

use std::sync::Arc;

use async_trait::async_trait;
use canopy_core::{CheckoutForm, CheckoutService, Order, ServiceError, SessionId, Snapshot};
use tokio::sync::watch;

use super::StateCell;
use crate::api::StorefrontApi;

/// The checkout flow as observable state.
///
/// The snapshot holds the order from the last successful submission.
/// Form problems are caught before any request leaves; the phase
/// exposed by [`CheckoutService::status`] is derived entirely from the
/// snapshot.
#[derive(Clone)]
pub struct CheckoutState {
    inner: Arc<CheckoutStateInner>,
}

struct CheckoutStateInner {
    api: StorefrontApi,
    session: SessionId,
    order: StateCell<Order>,
}

impl CheckoutState {
    #[must_use]
    pub fn new(api: StorefrontApi, session: SessionId) -> Self {
        Self {
            inner: Arc::new(CheckoutStateInner {
                api,
                session,
                order: StateCell::new(),
            }),
        }
    }

    /// Watch the order snapshot.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Snapshot<Order>> {
        self.inner.order.subscribe()
    }
}

#[async_trait]
impl CheckoutService for CheckoutState {
    fn order(&self) -> Snapshot<Order> {
        self.inner.order.snapshot()
    }

    async fn submit(&self, form: &CheckoutForm) -> Result<(), ServiceError> {
        if let Err(err) = form.validate() {
            let err = ServiceError::validation(err.to_string());
            self.inner.order.reject(err.clone());
            return Err(err);
        }

        self.inner.order.begin();
        let result = self
            .inner
            .api
            .submit_checkout(&self.inner.session, form)
            .await;
        self.inner.order.settle(result)
    }

    fn reset(&self) {
        self.inner.order.clear();
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use canopy_core::{Address, CheckoutStatus};
    use crate::http::RestClient;
    use crate::signals::Signals;

    fn unreachable_state() -> CheckoutState {
        let rest = RestClient::new("http://127.0.0.1:9", "pk_test", Signals::default());
        CheckoutState::new(
            StorefrontApi::new(rest, "store_1".into()),
            SessionId::new("sess_test"),
        )
    }

    fn form_missing_email() -> CheckoutForm {
        CheckoutForm {
            email: String::new(),
            address: Address {
                first_name: "Ada".into(),
                last_name: "Lovelace".into(),
                line1: "1 Analytical Way".into(),
                line2: None,
                city: "London".into(),
                region: None,
                postal_code: "N1 9GU".into(),
                country: "GB".into(),
            },
            note: None,
        }
    }

    #[tokio::test]
    async fn test_invalid_form_is_rejected_without_a_request() {
        let state = unreachable_state();

        let err = state.submit(&form_missing_email()).await.unwrap_err();

        assert!(err.is_validation());
        assert_eq!(state.status(), CheckoutStatus::Failed);
    }

    #[tokio::test]
    async fn test_reset_returns_to_idle() {
        let state = unreachable_state();
        let _ = state.submit(&form_missing_email()).await;

        state.reset();

        assert_eq!(state.status(), CheckoutStatus::Idle);
        assert!(state.order().error.is_none());
    }

    #[test]
    fn test_fresh_state_is_idle() {
        let state = unreachable_state();
        assert_eq!(state.status(), CheckoutStatus::Idle);
    }
}
