//! HTTP transport for the Canopy REST API.
//!
//! One [`RestClient`] is shared by every API surface in the process, so the
//! loading/error signals reflect all traffic, not one surface's.

use std::sync::Arc;

use reqwest::{Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, error, warn};

use crate::error::{ApiError, ErrorEnvelope};
use crate::format;
use crate::signals::Signals;

/// The request wrapper.
///
/// Issues exactly one call per method invocation; retrying is left to
/// the caller. Around each call it drives the shared [`Signals`]
/// lifecycle; failures are translated for the error cell but returned
/// to the caller untranslated.
///
/// Cheap to clone; clones share the connection pool and signals.
#[derive(Clone)]
pub struct RestClient {
    inner: Arc<RestClientInner>,
}

struct RestClientInner {
    client: reqwest::Client,
    base_url: String,
    token: String,
    signals: Signals,
}

impl RestClient {
    /// Create a client for an API root, e.g. `https://api.canopy.dev/v1`.
    ///
    /// The token is sent as a bearer credential on every request.
    #[must_use]
    pub fn new(base_url: &str, token: &str, signals: Signals) -> Self {
        Self {
            inner: Arc::new(RestClientInner {
                client: reqwest::Client::new(),
                base_url: base_url.trim_end_matches('/').to_owned(),
                token: token.to_owned(),
                signals,
            }),
        }
    }

    /// The shared signals this client reports to.
    #[must_use]
    pub fn signals(&self) -> &Signals {
        &self.inner.signals
    }

    /// `GET` a JSON document.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the API answers with a
    /// non-success status, or the body doesn't decode as `T`.
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let request = self.request(Method::GET, path).query(params);
        self.execute(request).await
    }

    /// `POST` a JSON body, decoding the JSON reply.
    ///
    /// # Errors
    ///
    /// Same contract as [`RestClient::get`].
    pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let request = self.request(Method::POST, path).json(body);
        self.execute(request).await
    }

    /// `PUT` a JSON body, decoding the JSON reply.
    ///
    /// # Errors
    ///
    /// Same contract as [`RestClient::get`].
    pub async fn put<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let request = self.request(Method::PUT, path).json(body);
        self.execute(request).await
    }

    /// `PATCH` a JSON body, decoding the JSON reply.
    ///
    /// # Errors
    ///
    /// Same contract as [`RestClient::get`].
    pub async fn patch<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let request = self.request(Method::PATCH, path).json(body);
        self.execute(request).await
    }

    /// `DELETE` a resource, decoding the JSON reply.
    ///
    /// Canopy delete endpoints answer with the affected document (the
    /// emptied cart, the deleted product), never `204 No Content`.
    ///
    /// # Errors
    ///
    /// Same contract as [`RestClient::get`].
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let request = self.request(Method::DELETE, path);
        self.execute(request).await
    }

    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!(
            "{}/{}",
            self.inner.base_url,
            path.trim_start_matches('/')
        );
        debug!(%method, %url, "dispatching API request");
        self.inner
            .client
            .request(method, url)
            .bearer_auth(&self.inner.token)
    }

    /// Run one request under the signals contract: clear the shared error,
    /// raise the loading flag, dispatch, then lower the flag exactly once
    /// with the outcome recorded.
    async fn execute<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ApiError> {
        self.inner.signals.request_started();
        let result = Self::dispatch(request).await;
        match &result {
            Ok(_) => self.inner.signals.request_succeeded(),
            Err(err) => self.inner.signals.request_failed(format::service_error(err)),
        }
        result
    }

    async fn dispatch<T: DeserializeOwned>(
        request: reqwest::RequestBuilder,
    ) -> Result<T, ApiError> {
        let response = request.send().await?;
        let status = response.status();

        if status == StatusCode::TOO_MANY_REQUESTS {
            let retry_after = response
                .headers()
                .get("Retry-After")
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.parse::<u64>().ok())
                .unwrap_or(1);
            warn!(retry_after, "API rate limited this client");
            return Err(ApiError::RateLimited(retry_after));
        }

        // Read the body as text first for better error diagnostics
        let body = response.text().await?;

        if !status.is_success() {
            return Err(Self::error_for(status, &body));
        }

        serde_json::from_str(&body).map_err(|err| {
            error!(
                %err,
                body = %body.chars().take(500).collect::<String>(),
                "failed to decode API response"
            );
            ApiError::Parse(err)
        })
    }

    fn error_for(status: StatusCode, body: &str) -> ApiError {
        let (code, message) = match serde_json::from_str::<ErrorEnvelope>(body) {
            Ok(envelope) => (envelope.error.code, envelope.error.message),
            Err(_) => {
                let preview: String = body.chars().take(200).collect();
                let fallback = if preview.is_empty() {
                    status
                        .canonical_reason()
                        .unwrap_or("request failed")
                        .to_owned()
                } else {
                    preview
                };
                (None, fallback)
            }
        };

        if status == StatusCode::NOT_FOUND {
            debug!(%message, "resource not found");
            return ApiError::NotFound(message);
        }

        error!(
            status = status.as_u16(),
            code = code.as_deref().unwrap_or("-"),
            %message,
            "API returned non-success status"
        );
        ApiError::Api {
            status: status.as_u16(),
            code,
            message,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_uses_the_envelope_message() {
        let body = r#"{"error": {"code": "product_not_found", "message": "no product with slug tea"}}"#;
        let err = RestClient::error_for(StatusCode::NOT_FOUND, body);
        assert!(matches!(
            err,
            ApiError::NotFound(message) if message == "no product with slug tea"
        ));
    }

    #[test]
    fn test_envelope_code_survives_into_the_error() {
        let body = r#"{"error": {"code": "out_of_stock", "message": "no stock"}}"#;
        let err = RestClient::error_for(StatusCode::UNPROCESSABLE_ENTITY, body);
        match err {
            ApiError::Api {
                status,
                code,
                message,
            } => {
                assert_eq!(status, 422);
                assert_eq!(code.as_deref(), Some("out_of_stock"));
                assert_eq!(message, "no stock");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn test_unparseable_body_falls_back_to_a_preview() {
        let err = RestClient::error_for(StatusCode::BAD_GATEWAY, "<html>upstream died</html>");
        match err {
            ApiError::Api { status, code, message } => {
                assert_eq!(status, 502);
                assert!(code.is_none());
                assert_eq!(message, "<html>upstream died</html>");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_body_falls_back_to_the_status_reason() {
        let err = RestClient::error_for(StatusCode::INTERNAL_SERVER_ERROR, "");
        match err {
            ApiError::Api { message, .. } => assert_eq!(message, "Internal Server Error"),
            other => panic!("expected Api error, got {other:?}"),
        }
    }
}
