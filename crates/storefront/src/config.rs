//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `CANOPY_API_URL` - Base URL of the Canopy platform API
//! - `CANOPY_STORE` - Store identifier (e.g., `store_8h2k`)
//! - `CANOPY_PUBLISHABLE_TOKEN` - Publishable storefront token (safe to expose)
//!
//! ## Optional
//! - `CANOPY_DATA_DIR` - Directory for the session/theme storage file
//!   (default: the platform data directory)

use std::path::PathBuf;

use canopy_core::StoreId;
use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
///
/// The publishable token only unlocks shopper-facing reads and cart
/// writes, so it is plain text here, same as it would be in a browser
/// bundle.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Base URL of the platform API
    pub api_url: String,
    /// Store this surface sells for
    pub store: StoreId,
    /// Publishable storefront token
    pub publishable_token: String,
    /// Override for the session storage directory
    pub data_dir: Option<PathBuf>,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or the
    /// API URL does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let api_url = parse_api_url(&get_required_env("CANOPY_API_URL")?, "CANOPY_API_URL")?;
        let store = StoreId::new(get_required_env("CANOPY_STORE")?);
        let publishable_token = get_required_env("CANOPY_PUBLISHABLE_TOKEN")?;
        let data_dir = get_optional_env("CANOPY_DATA_DIR").map(PathBuf::from);

        Ok(Self {
            api_url,
            store,
            publishable_token,
            data_dir,
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Validate that a value parses as an absolute HTTP(S) URL.
fn parse_api_url(value: &str, key: &str) -> Result<String, ConfigError> {
    let url = url::Url::parse(value)
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            format!("unsupported scheme '{}'", url.scheme()),
        ));
    }

    Ok(value.trim_end_matches('/').to_string())
}
