//! Process-wide request signals.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use canopy_core::ServiceError;
use tokio::sync::watch;

/// The shared loading flag and last-error cell.
///
/// Every request dispatched through [`crate::RestClient`] reports here,
/// whatever surface it belongs to. The loading flag rises when a request
/// starts and falls exactly once when its outcome is known; starting a
/// request clears any previously stored error. When requests overlap, the
/// flag tracks "anything in flight" rather than flapping per request.
///
/// Cheap to clone; clones share the same cells.
#[derive(Clone)]
pub struct Signals {
    inner: Arc<SignalsInner>,
}

struct SignalsInner {
    inflight: AtomicUsize,
    loading: watch::Sender<bool>,
    error: watch::Sender<Option<ServiceError>>,
}

impl Signals {
    #[must_use]
    pub fn new() -> Self {
        let (loading, _) = watch::channel(false);
        let (error, _) = watch::channel(None);
        Self {
            inner: Arc::new(SignalsInner {
                inflight: AtomicUsize::new(0),
                loading,
                error,
            }),
        }
    }

    /// Whether any request is currently in flight.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        *self.inner.loading.borrow()
    }

    /// The translated failure of the most recent request, if it failed.
    #[must_use]
    pub fn last_error(&self) -> Option<ServiceError> {
        self.inner.error.borrow().clone()
    }

    /// Watch the loading flag.
    #[must_use]
    pub fn subscribe_loading(&self) -> watch::Receiver<bool> {
        self.inner.loading.subscribe()
    }

    /// Watch the error cell.
    #[must_use]
    pub fn subscribe_error(&self) -> watch::Receiver<Option<ServiceError>> {
        self.inner.error.subscribe()
    }

    pub(crate) fn request_started(&self) {
        self.inner.error.send_replace(None);
        if self.inner.inflight.fetch_add(1, Ordering::SeqCst) == 0 {
            self.inner.loading.send_replace(true);
        }
    }

    pub(crate) fn request_succeeded(&self) {
        self.request_finished();
    }

    pub(crate) fn request_failed(&self, error: ServiceError) {
        self.inner.error.send_replace(Some(error));
        self.request_finished();
    }

    fn request_finished(&self) {
        if self.inner.inflight.fetch_sub(1, Ordering::SeqCst) == 1 {
            self.inner.loading.send_replace(false);
        }
    }
}

impl Default for Signals {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use canopy_core::ErrorCode;

    #[test]
    fn test_flag_rises_and_falls_around_one_request() {
        let signals = Signals::new();
        assert!(!signals.is_loading());

        signals.request_started();
        assert!(signals.is_loading());

        signals.request_succeeded();
        assert!(!signals.is_loading());
    }

    #[test]
    fn test_starting_a_request_clears_the_previous_error() {
        let signals = Signals::new();

        signals.request_started();
        signals.request_failed(ServiceError::from_code(ErrorCode::Server));
        assert!(signals.last_error().is_some());

        signals.request_started();
        assert!(signals.last_error().is_none());
        signals.request_succeeded();
    }

    #[test]
    fn test_failure_lands_before_the_flag_falls() {
        let signals = Signals::new();
        let mut loading = signals.subscribe_loading();

        signals.request_started();
        signals.request_failed(ServiceError::from_code(ErrorCode::NotFound));

        // Once loading reads false, the error is already visible.
        assert!(!*loading.borrow_and_update());
        assert_eq!(
            signals.last_error().map(|e| e.code),
            Some(ErrorCode::NotFound)
        );
    }

    #[test]
    fn test_overlapping_requests_hold_the_flag_up() {
        let signals = Signals::new();

        signals.request_started();
        signals.request_started();
        signals.request_succeeded();
        assert!(signals.is_loading());

        signals.request_succeeded();
        assert!(!signals.is_loading());
    }
}
