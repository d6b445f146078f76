//! Canned backend documents.
//!
//! Each builder returns the JSON text the platform would send, ready
//! for [`MockResponse::json`](crate::MockResponse::json).

use rust_decimal::Decimal;
use serde_json::json;

/// The cart document minted for a session that has never touched it.
///
/// Kept as a literal because its numeric zeros are exactly what the
/// backend sends before any amounts exist.
#[must_use]
pub fn empty_cart() -> String {
    r#"{"items":[],"subtotal":0,"total":0,"currency":"USD","itemCount":0}"#.to_owned()
}

/// A cart holding `quantity` brass desk lamps at $89.00 each.
#[must_use]
pub fn cart_with_lamp(quantity: u32) -> String {
    let unit = Decimal::new(8900, 2);
    let line_total = unit * Decimal::from(quantity);
    json!({
        "items": [{
            "id": "line_1",
            "productId": "prod_1",
            "variantId": "var_brass",
            "title": "Brass Desk Lamp",
            "variantTitle": "Brass",
            "unitPrice": unit,
            "quantity": quantity,
            "lineTotal": line_total,
        }],
        "subtotal": line_total,
        "total": line_total,
        "currency": "USD",
        "itemCount": quantity,
    })
    .to_string()
}

fn product_value(slug: &str) -> serde_json::Value {
    json!({
        "id": "prod_1",
        "slug": slug,
        "title": "Brass Desk Lamp",
        "description": "A small lamp in solid brass.",
        "vendor": "Canopy Workshop",
        "productType": "lighting",
        "tags": ["lighting", "brass"],
        "options": [{"name": "Finish", "values": ["Brass", "Nickel"]}],
        "images": [{
            "url": "https://cdn.canopycommerce.io/lamp.jpg",
            "altText": "A brass desk lamp",
            "width": 1200,
            "height": 900,
        }],
        "variants": [
            {
                "id": "var_brass",
                "title": "Brass",
                "sku": "LAMP-BR",
                "price": {"amount": "89.00", "currency": "USD"},
                "compareAtPrice": null,
                "availableForSale": true,
            },
            {
                "id": "var_nickel",
                "title": "Nickel",
                "sku": "LAMP-NI",
                "price": {"amount": "94.00", "currency": "USD"},
                "compareAtPrice": {"amount": "109.00", "currency": "USD"},
                "availableForSale": false,
            },
        ],
        "priceRange": {
            "min": {"amount": "89.00", "currency": "USD"},
            "max": {"amount": "94.00", "currency": "USD"},
        },
        "availableForSale": true,
        "status": "active",
        "createdAt": "2026-07-01T09:00:00Z",
        "updatedAt": "2026-07-14T09:30:00Z",
    })
}

/// A single product document.
#[must_use]
pub fn product(slug: &str) -> String {
    product_value(slug).to_string()
}

/// One page of a product listing.
///
/// Each fixture page carries a single product, so `pageSize` is 1 and
/// the totals stay consistent with `total_pages`.
#[must_use]
pub fn product_page(page: u32, total_pages: u32) -> String {
    json!({
        "items": [product_value("brass-desk-lamp")],
        "page": page,
        "pageSize": 1,
        "totalItems": total_pages,
        "totalPages": total_pages,
    })
    .to_string()
}

/// A variant document with admin inventory attached.
#[must_use]
pub fn variant_with_inventory(quantity: i64) -> String {
    json!({
        "id": "var_brass",
        "title": "Brass",
        "sku": "LAMP-BR",
        "price": {"amount": "89.00", "currency": "USD"},
        "compareAtPrice": null,
        "availableForSale": quantity > 0,
        "inventory": {"quantity": quantity, "allowBackorder": false},
    })
    .to_string()
}

fn order_value() -> serde_json::Value {
    json!({
        "id": "ord_1",
        "number": "CN-1042",
        "status": "pending",
        "email": "shopper@example.com",
        "items": [{
            "productId": "prod_1",
            "variantId": "var_brass",
            "title": "Brass Desk Lamp",
            "unitPrice": "89.00",
            "quantity": 1,
            "lineTotal": "89.00",
        }],
        "subtotal": "89.00",
        "total": "96.12",
        "currency": "USD",
        "shippingAddress": {
            "firstName": "Ada",
            "lastName": "Linden",
            "line1": "1 Canal St",
            "city": "Portland",
            "region": "OR",
            "postalCode": "97201",
            "country": "US",
        },
        "placedAt": "2026-08-02T16:20:00Z",
    })
}

/// A placed order document.
#[must_use]
pub fn order() -> String {
    order_value().to_string()
}

/// One page of an order listing holding a single order.
#[must_use]
pub fn order_page() -> String {
    json!({
        "items": [order_value()],
        "page": 1,
        "pageSize": 1,
        "totalItems": 1,
        "totalPages": 1,
    })
    .to_string()
}

/// A store configuration document.
#[must_use]
pub fn store_config() -> String {
    json!({
        "id": "store_1",
        "name": "Canopy Home Goods",
        "defaultCurrency": "USD",
        "defaultLocale": "en-US",
        "supportEmail": "support@canopyhome.example",
        "updatedAt": "2026-08-01T12:00:00Z",
    })
    .to_string()
}
