//! Admin API surface against a mocked backend.
//!
//! These exercise the partner operations end to end over HTTP: verbs,
//! paths, auth, and the exact wire bodies the backend would receive.

use canopy_core::{
    Currency, InventoryUpdate, OrderId, OrderQuery, OrderStatus, Price, ProductId, ProductInput,
    StoreConfigUpdate, VariantId, VariantInput,
};
use canopy_integration_tests::{ADMIN_TOKEN, MockApi, MockResponse, admin_api, fixtures};
use rust_decimal::Decimal;
use serde_json::json;

fn lamp_input() -> ProductInput {
    ProductInput {
        title: "Brass Desk Lamp".to_owned(),
        slug: None,
        description: Some("A small lamp in solid brass.".to_owned()),
        vendor: None,
        product_type: None,
        tags: vec!["lighting".to_owned()],
        status: None,
        variants: vec![VariantInput {
            title: "Default".to_owned(),
            sku: Some("LAMP-BR".to_owned()),
            price: Price::new(Decimal::new(8900, 2), Currency::USD),
            quantity: Some(10),
        }],
    }
}

#[tokio::test]
async fn test_requests_carry_the_admin_token() {
    let mock = MockApi::start().await;
    mock.enqueue(MockResponse::json(&fixtures::store_config())).await;

    let admin = admin_api(&mock);
    admin.get_store_config().await.expect("request failed");

    let requests = mock.captured_requests().await;
    assert_eq!(
        requests[0].header("authorization"),
        Some(format!("Bearer {ADMIN_TOKEN}").as_str())
    );
}

#[tokio::test]
async fn test_update_store_config_puts_only_the_set_fields() {
    let mock = MockApi::start().await;
    mock.enqueue(MockResponse::json(&fixtures::store_config())).await;

    let admin = admin_api(&mock);
    let update = StoreConfigUpdate {
        name: Some("Canopy Home Goods".to_owned()),
        ..StoreConfigUpdate::default()
    };
    admin
        .update_store_config(&update)
        .await
        .expect("update failed");

    let requests = mock.captured_requests().await;
    assert_eq!(requests[0].method, "PUT");
    assert_eq!(requests[0].path, "/stores/store_1");
    assert_eq!(requests[0].body_json(), json!({"name": "Canopy Home Goods"}));
}

#[tokio::test]
async fn test_create_product_posts_the_priced_variant() {
    let mock = MockApi::start().await;
    mock.enqueue(MockResponse::json(&fixtures::product("brass-desk-lamp")))
        .await;

    let admin = admin_api(&mock);
    let product = admin
        .create_product(&lamp_input())
        .await
        .expect("create failed");
    assert_eq!(product.slug, "brass-desk-lamp");

    let requests = mock.captured_requests().await;
    assert_eq!(requests[0].method, "POST");
    assert_eq!(requests[0].path, "/stores/store_1/products");

    let body = requests[0].body_json();
    assert_eq!(body["title"], "Brass Desk Lamp");
    // Amounts travel as decimal strings, never floats.
    assert_eq!(body["variants"][0]["price"]["amount"], "89.00");
    assert_eq!(body["variants"][0]["quantity"], 10);
    // Unset optionals are omitted entirely.
    assert!(body.get("slug").is_none());
    assert!(body.get("status").is_none());
}

#[tokio::test]
async fn test_update_product_puts_the_replacement() {
    let mock = MockApi::start().await;
    mock.enqueue(MockResponse::json(&fixtures::product("brass-desk-lamp")))
        .await;

    let admin = admin_api(&mock);
    admin
        .update_product(&ProductId::new("prod_1"), &lamp_input())
        .await
        .expect("update failed");

    let requests = mock.captured_requests().await;
    assert_eq!(requests[0].method, "PUT");
    assert_eq!(requests[0].path, "/stores/store_1/products/prod_1");
}

#[tokio::test]
async fn test_delete_product_answers_with_the_deleted_document() {
    let mock = MockApi::start().await;
    mock.enqueue(MockResponse::json(&fixtures::product("brass-desk-lamp")))
        .await;

    let admin = admin_api(&mock);
    let deleted = admin
        .delete_product(&ProductId::new("prod_1"))
        .await
        .expect("delete failed");

    assert_eq!(deleted.slug, "brass-desk-lamp");
    let requests = mock.captured_requests().await;
    assert_eq!(requests[0].method, "DELETE");
    assert_eq!(requests[0].path, "/stores/store_1/products/prod_1");
}

#[tokio::test]
async fn test_set_inventory_puts_the_new_quantity() {
    let mock = MockApi::start().await;
    mock.enqueue(MockResponse::json(&fixtures::variant_with_inventory(12)))
        .await;

    let admin = admin_api(&mock);
    let update = InventoryUpdate {
        quantity: 12,
        allow_backorder: None,
    };
    let variant = admin
        .set_inventory(&VariantId::new("var_brass"), &update)
        .await
        .expect("inventory update failed");

    assert_eq!(variant.inventory.map(|i| i.quantity), Some(12));

    let requests = mock.captured_requests().await;
    assert_eq!(requests[0].method, "PUT");
    assert_eq!(requests[0].path, "/stores/store_1/variants/var_brass/inventory");
    assert_eq!(requests[0].body_json(), json!({"quantity": 12}));
}

#[tokio::test]
async fn test_order_listing_filters_by_status() {
    let mock = MockApi::start().await;
    mock.enqueue(MockResponse::json(&fixtures::order_page())).await;

    let admin = admin_api(&mock);
    let query = OrderQuery {
        status: Some(OrderStatus::Shipped),
        ..OrderQuery::default()
    };
    let page = admin.get_orders(&query).await.expect("listing failed");
    assert_eq!(page.items.len(), 1);

    let requests = mock.captured_requests().await;
    assert_eq!(requests[0].method, "GET");
    assert_eq!(requests[0].path, "/stores/store_1/orders");
    assert!(requests[0].query.contains("status=shipped"));
    assert!(requests[0].query.contains("pageSize=20"));
}

#[tokio::test]
async fn test_update_order_status_patches_the_lifecycle() {
    let mock = MockApi::start().await;
    mock.enqueue(MockResponse::json(&fixtures::order())).await;

    let admin = admin_api(&mock);
    admin
        .update_order_status(&OrderId::new("ord_1"), OrderStatus::Shipped)
        .await
        .expect("status update failed");

    let requests = mock.captured_requests().await;
    assert_eq!(requests[0].method, "PATCH");
    assert_eq!(requests[0].path, "/stores/store_1/orders/ord_1");
    assert_eq!(requests[0].body_json(), json!({"status": "shipped"}));
}
