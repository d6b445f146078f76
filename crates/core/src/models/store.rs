//! Store configuration documents.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::email::Email;
use crate::types::id::StoreId;
use crate::types::price::Currency;

/// A store's public configuration.
///
/// Fetched once at startup by both surfaces; the storefront uses it for
/// currency and locale defaults, the dashboard edits it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreConfig {
    pub id: StoreId,
    pub name: String,
    pub default_currency: Currency,
    /// BCP 47 language tag (e.g., "en-US").
    pub default_locale: String,
    #[serde(default)]
    pub support_email: Option<Email>,
    pub updated_at: DateTime<Utc>,
}

/// Write payload for the store configuration endpoint.
///
/// Partial: omitted fields keep their current values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreConfigUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_currency: Option<Currency>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_locale: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub support_email: Option<Email>,
}

impl StoreConfigUpdate {
    /// Whether the update would change nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.default_currency.is_none()
            && self.default_locale.is_none()
            && self.support_email.is_none()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_config_document_deserializes() {
        let json = r#"{
            "id": "s1",
            "name": "Canal Street Tea Co",
            "defaultCurrency": "USD",
            "defaultLocale": "en-US",
            "supportEmail": "help@canalstreet.example",
            "updatedAt": "2026-08-01T12:00:00Z"
        }"#;
        let config: StoreConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.name, "Canal Street Tea Co");
        assert_eq!(config.default_currency, Currency::USD);
    }

    #[test]
    fn test_update_serializes_only_set_fields() {
        let update = StoreConfigUpdate {
            name: Some("Canal Street Tea".to_owned()),
            ..StoreConfigUpdate::default()
        };
        let json = serde_json::to_string(&update).unwrap();
        assert_eq!(json, r#"{"name":"Canal Street Tea"}"#);
        assert!(!update.is_empty());
        assert!(StoreConfigUpdate::default().is_empty());
    }
}
