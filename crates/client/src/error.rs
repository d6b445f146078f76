//! Error types for the Canopy API transport.

use serde::Deserialize;
use thiserror::Error;

/// Errors from the Canopy REST API.
///
/// These carry internal detail for logs and tests; shoppers only ever see
/// the [`canopy_core::ServiceError`] produced by [`crate::format`].
#[derive(Error, Debug)]
pub enum ApiError {
    /// Transport-level failure: DNS, connect, timeout, TLS.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("API error ({status}): {message}")]
    Api {
        status: u16,
        /// Machine-readable code from the error envelope, when present.
        code: Option<String>,
        message: String,
    },

    /// The response body was not the JSON we expected.
    #[error("failed to parse response: {0}")]
    Parse(#[from] serde_json::Error),

    /// HTTP 404 for an addressed resource.
    #[error("resource not found: {0}")]
    NotFound(String),

    /// HTTP 429, with the `Retry-After` value in seconds.
    #[error("rate limited, retry after {0} seconds")]
    RateLimited(u64),
}

/// The envelope the API wraps failures in:
/// `{"error": {"code": "...", "message": "..."}}`.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorEnvelope {
    pub error: ErrorBody,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub code: Option<String>,
    pub message: String,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ApiError::NotFound("product green-tea".to_string());
        assert_eq!(err.to_string(), "resource not found: product green-tea");

        let err = ApiError::RateLimited(30);
        assert_eq!(err.to_string(), "rate limited, retry after 30 seconds");

        let err = ApiError::Api {
            status: 422,
            code: Some("out_of_stock".to_string()),
            message: "variant var_1 has no stock".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "API error (422): variant var_1 has no stock"
        );
    }

    #[test]
    fn test_envelope_parses_with_and_without_code() {
        let with_code: ErrorEnvelope = serde_json::from_str(
            r#"{"error": {"code": "out_of_stock", "message": "variant var_1 has no stock"}}"#,
        )
        .unwrap();
        assert_eq!(with_code.error.code.as_deref(), Some("out_of_stock"));

        let without_code: ErrorEnvelope =
            serde_json::from_str(r#"{"error": {"message": "boom"}}"#).unwrap();
        assert!(without_code.error.code.is_none());
        assert_eq!(without_code.error.message, "boom");
    }
}
