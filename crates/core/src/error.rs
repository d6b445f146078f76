//! Shopper-facing error taxonomy.
//!
//! Transport-level failures carry internal detail (status codes, response
//! bodies, connection errors) that never reaches a shopper. Services
//! translate them into a [`ServiceError`]: a coarse [`ErrorCode`] class
//! plus a message from the catalogue below. The raw failure is logged at
//! the transport layer, not surfaced.

use serde::{Deserialize, Serialize};

/// Coarse classification of a failed operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// The request never reached the API (DNS, connect, timeout).
    Network,
    /// The API replied with a failure the shopper cannot fix.
    Server,
    /// The addressed resource does not exist.
    NotFound,
    /// The API asked the client to back off.
    RateLimited,
    /// The input was rejected before or by the API.
    Validation,
}

impl ErrorCode {
    /// Classify an HTTP status code.
    ///
    /// Statuses below 400 never reach this function; transport treats them
    /// as success.
    #[must_use]
    pub const fn for_status(status: u16) -> Self {
        match status {
            404 => Self::NotFound,
            429 => Self::RateLimited,
            400..=499 => Self::Validation,
            _ => Self::Server,
        }
    }

    /// The wire name of this code.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Network => "network",
            Self::Server => "server",
            Self::NotFound => "not_found",
            Self::RateLimited => "rate_limited",
            Self::Validation => "validation",
        }
    }

    /// The default shopper-facing message for this class.
    #[must_use]
    pub const fn user_message(&self) -> &'static str {
        match self {
            Self::Network => "We couldn't reach the store. Check your connection and try again.",
            Self::Server => "Something went wrong on our side. Please try again.",
            Self::NotFound => "We couldn't find what you were looking for.",
            Self::RateLimited => "Too many requests. Please wait a moment and try again.",
            Self::Validation => "Please check your input and try again.",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Shopper-facing messages for error codes the API is known to send.
///
/// Codes outside this table fall back to the class message from
/// [`ErrorCode::user_message`].
#[must_use]
pub fn api_code_message(code: &str) -> Option<&'static str> {
    match code {
        "out_of_stock" => Some("That item is out of stock."),
        "insufficient_stock" => Some("Not enough of that item is in stock."),
        "product_not_found" => Some("That product is no longer available."),
        "cart_not_found" => Some("Your cart has expired. Please start a new one."),
        "invalid_quantity" => Some("That quantity isn't available."),
        "checkout_failed" => Some("We couldn't complete your checkout. Please try again."),
        _ => None,
    }
}

/// An error a shopper (or the partner dashboard) can be shown as-is.
///
/// The `message` is always presentable; the `code` lets a caller branch on
/// the class without string matching.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ServiceError {
    /// Classification of the failure.
    pub code: ErrorCode,
    /// Presentable description of the failure.
    pub message: String,
}

impl ServiceError {
    /// Build an error with the catalogue message for its class.
    #[must_use]
    pub fn from_code(code: ErrorCode) -> Self {
        Self {
            code,
            message: code.user_message().to_owned(),
        }
    }

    /// Build an error with a specific presentable message.
    #[must_use]
    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// A client-side validation rejection.
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::Validation, message)
    }

    /// Whether this error was produced without any network traffic.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self.code, ErrorCode::Validation)
    }
}
