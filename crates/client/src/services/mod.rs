//! Observable state services for the storefront surface.
//!
//! Each service owns one resource snapshot behind a `tokio::sync::watch`
//! cell and implements the matching contract trait from `canopy-core`.
//! Operations drive the snapshot through a fixed lifecycle: loading
//! rises when the request leaves and falls with its outcome, which
//! lands as data or as an error but never both. A failed refresh keeps
//! the previous data so the surface can keep rendering it alongside the
//! error.
//!
//! Client-side rejections (a zero quantity, an invalid checkout form)
//! never start that lifecycle: they set the error directly and skip the
//! network entirely.

mod cart;
mod checkout;
mod products;

pub use cart::CartState;
pub use checkout::CheckoutState;
pub use products::{ProductDetailState, ProductListState};

use canopy_core::{ServiceError, Snapshot};
use tokio::sync::watch;

use crate::error::ApiError;
use crate::format;

/// A watchable [`Snapshot`] with the lifecycle transitions the services
/// share.
pub(crate) struct StateCell<T> {
    cell: watch::Sender<Snapshot<T>>,
}

impl<T: Clone> StateCell<T> {
    pub(crate) fn new() -> Self {
        let (cell, _) = watch::channel(Snapshot::idle());
        Self { cell }
    }

    pub(crate) fn snapshot(&self) -> Snapshot<T> {
        self.cell.borrow().clone()
    }

    pub(crate) fn subscribe(&self) -> watch::Receiver<Snapshot<T>> {
        self.cell.subscribe()
    }

    /// A request is leaving. Raises `loading` and clears the error;
    /// existing data stays visible.
    pub(crate) fn begin(&self) {
        self.cell.send_modify(|snapshot| {
            snapshot.loading = true;
            snapshot.error = None;
        });
    }

    /// The request succeeded: the response replaces the data.
    pub(crate) fn complete(&self, data: T) {
        self.cell.send_modify(|snapshot| {
            snapshot.data = Some(data);
            snapshot.loading = false;
            snapshot.error = None;
        });
    }

    /// The request failed: the error lands, previous data survives.
    pub(crate) fn fail(&self, error: ServiceError) {
        self.cell.send_modify(|snapshot| {
            snapshot.error = Some(error);
            snapshot.loading = false;
        });
    }

    /// A client-side rejection. No request is in flight, so `loading` is
    /// left alone.
    pub(crate) fn reject(&self, error: ServiceError) {
        self.cell.send_modify(|snapshot| {
            snapshot.error = Some(error);
        });
    }

    /// Back to the idle snapshot.
    pub(crate) fn clear(&self) {
        self.cell.send_replace(Snapshot::idle());
    }

    /// Fold an API result into the cell, handing the mapped error back
    /// for imperative callers.
    pub(crate) fn settle(&self, result: Result<T, ApiError>) -> Result<(), ServiceError> {
        match result {
            Ok(data) => {
                self.complete(data);
                Ok(())
            }
            Err(err) => {
                let err = format::service_error(&err);
                self.fail(err.clone());
                Err(err)
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use canopy_core::ErrorCode;

    #[test]
    fn test_begin_raises_loading_and_clears_error() {
        let cell = StateCell::<u32>::new();
        cell.fail(ServiceError::from_code(ErrorCode::Server));

        cell.begin();

        let snapshot = cell.snapshot();
        assert!(snapshot.loading);
        assert!(snapshot.error.is_none());
    }

    #[test]
    fn test_complete_lands_data_and_lowers_loading() {
        let cell = StateCell::new();
        cell.begin();

        cell.complete(7u32);

        let snapshot = cell.snapshot();
        assert_eq!(snapshot.data, Some(7));
        assert!(!snapshot.loading);
        assert!(snapshot.error.is_none());
    }

    #[test]
    fn test_fail_preserves_previous_data() {
        let cell = StateCell::new();
        cell.complete(7u32);
        cell.begin();

        cell.fail(ServiceError::from_code(ErrorCode::Network));

        let snapshot = cell.snapshot();
        assert_eq!(snapshot.data, Some(7));
        assert!(!snapshot.loading);
        assert_eq!(
            snapshot.error.map(|e| e.code),
            Some(ErrorCode::Network)
        );
    }

    #[test]
    fn test_reject_leaves_loading_untouched() {
        let cell = StateCell::<u32>::new();

        cell.reject(ServiceError::validation("no"));

        let snapshot = cell.snapshot();
        assert!(!snapshot.loading);
        assert!(snapshot.error.is_some());
    }

    #[test]
    fn test_clear_returns_to_idle() {
        let cell = StateCell::new();
        cell.complete(7u32);

        cell.clear();

        assert_eq!(cell.snapshot(), Snapshot::idle());
    }

    #[test]
    fn test_subscribers_observe_each_transition() {
        let cell = StateCell::new();
        let mut rx = cell.subscribe();

        cell.begin();
        assert!(rx.has_changed().unwrap());
        assert!(rx.borrow_and_update().loading);

        cell.complete(7u32);
        assert!(rx.has_changed().unwrap());
        assert!(!rx.borrow_and_update().loading);
    }
}
