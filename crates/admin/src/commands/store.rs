//! Store settings commands.

use canopy_client::{AdminApi, ApiError};
use canopy_core::{Currency, Email, StoreConfig, StoreConfigUpdate};
use tracing::info;

/// Show the store's configuration.
pub async fn show(api: &AdminApi) -> Result<(), ApiError> {
    let config = api.get_store_config().await?;
    print_config(&config);
    Ok(())
}

/// Update store settings. Flags left unset stay as they are.
pub async fn update(
    api: &AdminApi,
    name: Option<String>,
    currency: Option<Currency>,
    locale: Option<String>,
    support_email: Option<Email>,
) -> Result<(), ApiError> {
    let update = StoreConfigUpdate {
        name,
        default_currency: currency,
        default_locale: locale,
        support_email,
    };

    if update.is_empty() {
        info!("Nothing to update.");
        return Ok(());
    }

    let config = api.update_store_config(&update).await?;
    info!("Store updated.");
    print_config(&config);
    Ok(())
}

fn print_config(config: &StoreConfig) {
    info!("{} ({})", config.name, config.id);
    info!("  Currency: {}", config.default_currency);
    info!("  Locale: {}", config.default_locale);
    if let Some(email) = &config.support_email {
        info!("  Support: {email}");
    }
    info!("  Updated: {}", config.updated_at);
}
