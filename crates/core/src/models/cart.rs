//! Cart documents and write payloads.
//!
//! Carts are addressed by session ID, not cart ID; the API creates one
//! lazily the first time a session asks for it. An untouched session
//! therefore always reads back as a valid empty cart.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::catalog::Image;
use crate::types::id::{CartItemId, ProductId, VariantId};
use crate::types::price::Currency;

/// One line in a cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub id: CartItemId,
    pub product_id: ProductId,
    pub variant_id: VariantId,
    pub title: String,
    /// Variant title, omitted for single-variant products.
    #[serde(default)]
    pub variant_title: Option<String>,
    pub unit_price: Decimal,
    pub quantity: u32,
    pub line_total: Decimal,
    #[serde(default)]
    pub image: Option<Image>,
}

/// A session's cart.
///
/// All amounts are denominated in the document's single `currency`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    pub items: Vec<CartItem>,
    pub subtotal: Decimal,
    pub total: Decimal,
    pub currency: Currency,
    pub item_count: u32,
}

impl Cart {
    /// An empty cart in the given currency, as the API would mint it.
    #[must_use]
    pub const fn empty(currency: Currency) -> Self {
        Self {
            items: Vec::new(),
            subtotal: Decimal::ZERO,
            total: Decimal::ZERO,
            currency,
            item_count: 0,
        }
    }

    /// Whether the cart holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::empty(Currency::USD)
    }
}

/// Write payload for adding a variant to the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddCartItemInput {
    pub variant_id: VariantId,
    pub quantity: u32,
}

/// Write payload for changing a line's quantity.
///
/// Zero is not a valid quantity here; removal is its own endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCartItemInput {
    pub quantity: u32,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_session_cart_document() {
        // The API's response for a session that has never touched its cart.
        let json = r#"{"items":[],"subtotal":0,"total":0,"currency":"USD","itemCount":0}"#;
        let cart: Cart = serde_json::from_str(json).unwrap();

        assert!(cart.is_empty());
        assert_eq!(cart.subtotal, Decimal::ZERO);
        assert_eq!(cart.total, Decimal::ZERO);
        assert_eq!(cart.currency, Currency::USD);
        assert_eq!(cart.item_count, 0);
        assert_eq!(cart, Cart::default());
    }

    #[test]
    fn test_cart_with_items_deserializes() {
        let json = r#"{
            "items": [{
                "id": "line_1",
                "productId": "prod_1",
                "variantId": "var_1",
                "title": "Green Tea",
                "variantTitle": "100g",
                "unitPrice": "12.50",
                "quantity": 2,
                "lineTotal": "25.00"
            }],
            "subtotal": "25.00",
            "total": "27.10",
            "currency": "USD",
            "itemCount": 2
        }"#;
        let cart: Cart = serde_json::from_str(json).unwrap();

        assert!(!cart.is_empty());
        assert_eq!(cart.items.len(), 1);
        assert_eq!(cart.items[0].quantity, 2);
        assert_eq!(cart.items[0].line_total, Decimal::new(2500, 2));
        assert_eq!(cart.item_count, 2);
    }

    #[test]
    fn test_add_input_wire_shape() {
        let input = AddCartItemInput {
            variant_id: VariantId::new("var_1"),
            quantity: 3,
        };
        let json = serde_json::to_string(&input).unwrap();
        assert_eq!(json, r#"{"variantId":"var_1","quantity":3}"#);
    }
}
