//! Translation of transport errors into presentable service errors.
//!
//! The single choke point between [`ApiError`] and what a shopper sees.
//! Raw detail (status codes, response bodies, connect errors) stays in the
//! logs; the returned [`ServiceError`] is always safe to display.

use canopy_core::{ErrorCode, ServiceError, api_code_message};
use tracing::debug;

use crate::error::ApiError;

/// Collapse a transport error into a [`ServiceError`].
///
/// Known envelope codes get their catalogue message; everything else falls
/// back to the message for the error's taxonomy class.
#[must_use]
pub fn service_error(err: &ApiError) -> ServiceError {
    let service = match err {
        ApiError::Http(_) => ServiceError::from_code(ErrorCode::Network),
        ApiError::Parse(_) => ServiceError::from_code(ErrorCode::Server),
        ApiError::NotFound(_) => ServiceError::from_code(ErrorCode::NotFound),
        ApiError::RateLimited(_) => ServiceError::from_code(ErrorCode::RateLimited),
        ApiError::Api { status, code, .. } => {
            let class = ErrorCode::for_status(*status);
            code.as_deref().and_then(api_code_message).map_or_else(
                || ServiceError::from_code(class),
                |message| ServiceError::with_message(class, message),
            )
        }
    };

    debug!(code = service.code.as_str(), internal = %err, "translated API error");
    service
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn parse_error() -> ApiError {
        ApiError::Parse(serde_json::from_str::<u32>("not json").unwrap_err())
    }

    #[test]
    fn test_not_found_maps_to_not_found_class() {
        let err = ApiError::NotFound("product tea".to_string());
        let service = service_error(&err);
        assert_eq!(service.code, ErrorCode::NotFound);
        assert_eq!(
            service.message,
            "We couldn't find what you were looking for."
        );
    }

    #[test]
    fn test_rate_limited_maps_to_rate_limited_class() {
        let service = service_error(&ApiError::RateLimited(30));
        assert_eq!(service.code, ErrorCode::RateLimited);
    }

    #[test]
    fn test_parse_failures_read_as_server_trouble() {
        let service = service_error(&parse_error());
        assert_eq!(service.code, ErrorCode::Server);
    }

    #[test]
    fn test_known_envelope_code_uses_the_catalogue_message() {
        let err = ApiError::Api {
            status: 422,
            code: Some("out_of_stock".to_string()),
            message: "variant var_1 has no stock at location 7".to_string(),
        };
        let service = service_error(&err);
        assert_eq!(service.code, ErrorCode::Validation);
        assert_eq!(service.message, "That item is out of stock.");
    }

    #[test]
    fn test_unknown_envelope_code_falls_back_to_the_class_message() {
        let err = ApiError::Api {
            status: 422,
            code: Some("some_future_code".to_string()),
            message: "internal detail the shopper must not see".to_string(),
        };
        let service = service_error(&err);
        assert_eq!(service.code, ErrorCode::Validation);
        assert_eq!(service.message, "Please check your input and try again.");
    }

    #[test]
    fn test_server_detail_never_leaks_into_the_message() {
        let err = ApiError::Api {
            status: 500,
            code: None,
            message: "pq: deadlock detected on relation carts".to_string(),
        };
        let service = service_error(&err);
        assert_eq!(service.code, ErrorCode::Server);
        assert!(!service.message.contains("deadlock"));
    }
}
