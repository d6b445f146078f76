//! The observable state cell held by every domain service.

use crate::error::ServiceError;

/// One view of a service's resource at a point in time.
///
/// Every domain service holds exactly one of these per resource and hands
/// out clones. The three fields move together under a single write, so an
/// observer can never see `loading` cleared without the matching `data` or
/// `error` already in place.
///
/// A failed refresh leaves `data` at its last good value; only `error`
/// changes. Consumers that want stale-while-error rendering read `data`
/// regardless of `error`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot<T> {
    /// The last successfully loaded resource, if any.
    pub data: Option<T>,
    /// Whether a request for this resource is in flight.
    pub loading: bool,
    /// The failure from the most recent attempt, cleared when a new
    /// attempt starts.
    pub error: Option<ServiceError>,
}

impl<T> Snapshot<T> {
    /// The state before any request has been made.
    #[must_use]
    pub const fn idle() -> Self {
        Self {
            data: None,
            loading: false,
            error: None,
        }
    }

    /// Whether a successful load has ever completed.
    #[must_use]
    pub const fn has_data(&self) -> bool {
        self.data.is_some()
    }

    /// The presentable message of the current error, if any.
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        self.error.as_ref().map(|e| e.message.as_str())
    }
}

impl<T> Default for Snapshot<T> {
    fn default() -> Self {
        Self::idle()
    }
}
