//! Checkout and order documents.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::page::DEFAULT_PAGE_SIZE;
use crate::types::email::{Email, EmailError};
use crate::types::id::{OrderId, ProductId, VariantId};
use crate::types::price::Currency;
use crate::types::status::OrderStatus;

/// A shipping address.
///
/// Locale-agnostic minimal shape: `region` and `line2` are optional
/// because many countries don't use them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub first_name: String,
    pub last_name: String,
    pub line1: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line2: Option<String>,
    pub city: String,
    /// State, province, or county.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    pub postal_code: String,
    /// Two-letter ISO 3166-1 country code.
    pub country: String,
}

impl Address {
    fn validate(&self) -> Result<(), CheckoutFormError> {
        for (field, value) in [
            ("first name", &self.first_name),
            ("last name", &self.last_name),
            ("address line 1", &self.line1),
            ("city", &self.city),
            ("postal code", &self.postal_code),
        ] {
            if value.trim().is_empty() {
                return Err(CheckoutFormError::MissingField { field });
            }
        }

        let country = self.country.trim();
        if country.len() != 2 || !country.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(CheckoutFormError::InvalidCountry);
        }

        Ok(())
    }
}

/// Errors a checkout form can fail validation with.
///
/// Every variant's message is presentable as-is.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CheckoutFormError {
    #[error("{0}")]
    InvalidEmail(#[from] EmailError),
    #[error("{field} is required")]
    MissingField { field: &'static str },
    #[error("country must be a two-letter code")]
    InvalidCountry,
}

/// The checkout form a shopper submits.
///
/// Validated client-side before any request is made; an invalid form
/// never produces network traffic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutForm {
    pub email: String,
    pub address: Address,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl CheckoutForm {
    /// Check the form the way the API would, without calling it.
    ///
    /// # Errors
    ///
    /// Returns the first problem found, as a presentable message.
    pub fn validate(&self) -> Result<(), CheckoutFormError> {
        Email::parse(self.email.trim())?;
        self.address.validate()
    }
}

/// One line in a placed order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub product_id: ProductId,
    pub variant_id: VariantId,
    pub title: String,
    pub unit_price: Decimal,
    pub quantity: u32,
    pub line_total: Decimal,
}

/// A placed order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    /// Human-readable order number (e.g., "CN-1042").
    pub number: String,
    pub status: OrderStatus,
    pub email: Email,
    pub items: Vec<OrderItem>,
    pub subtotal: Decimal,
    pub total: Decimal,
    pub currency: Currency,
    pub shipping_address: Address,
    #[serde(default)]
    pub note: Option<String>,
    pub placed_at: DateTime<Utc>,
}

/// Parameters for the admin order listing endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderQuery {
    /// 1-based page number.
    pub page: u32,
    pub page_size: u32,
    pub status: Option<OrderStatus>,
}

impl Default for OrderQuery {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            status: None,
        }
    }
}

impl OrderQuery {
    /// Encode as query parameters.
    #[must_use]
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("page", self.page.to_string()),
            ("pageSize", self.page_size.to_string()),
        ];
        if let Some(status) = self.status {
            params.push(("status", status.to_string()));
        }
        params
    }
}

/// Write payload for moving an order through its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderStatusUpdate {
    pub status: OrderStatus,
}
