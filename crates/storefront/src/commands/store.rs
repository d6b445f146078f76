//! Store information command.

use canopy_client::{StorefrontApi, format};
use tracing::info;

use super::CommandError;

/// Show the store's public configuration.
pub async fn show(api: &StorefrontApi) -> Result<(), CommandError> {
    let config = api
        .get_store_config()
        .await
        .map_err(|e| format::service_error(&e))?;

    info!("{} ({})", config.name, config.id);
    info!("  Currency: {}", config.default_currency);
    info!("  Locale: {}", config.default_locale);
    if let Some(email) = &config.support_email {
        info!("  Support: {email}");
    }
    info!("  Updated: {}", config.updated_at);
    Ok(())
}
