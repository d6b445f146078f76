//! Service contracts implemented by the client crate.
//!
//! Each trait pairs a synchronous snapshot accessor with the async
//! operations that move it. Consumers render from snapshots and call the
//! operations; they never see the HTTP layer behind them.
//!
//! Derived facts (`can_checkout`, the checkout phase) live here as default
//! methods so every implementation agrees on them.

use async_trait::async_trait;

use crate::error::ServiceError;
use crate::models::cart::Cart;
use crate::models::catalog::{Product, ProductQuery};
use crate::models::order::{CheckoutForm, Order};
use crate::models::page::Page;
use crate::snapshot::Snapshot;
use crate::types::id::{CartItemId, VariantId};
use crate::types::status::CheckoutStatus;

/// The session's cart.
#[async_trait]
pub trait CartService: Send + Sync {
    /// The current cart snapshot.
    fn cart(&self) -> Snapshot<Cart>;

    /// Fetch the cart for this session, creating it server-side if the
    /// session has never had one.
    async fn load(&self) -> Result<(), ServiceError>;

    /// Add a variant to the cart.
    async fn add_item(&self, variant: &VariantId, quantity: u32) -> Result<(), ServiceError>;

    /// Change a line's quantity. Zero is rejected without a request;
    /// removal is explicit.
    async fn update_item(&self, item: &CartItemId, quantity: u32) -> Result<(), ServiceError>;

    /// Remove a line from the cart.
    async fn remove_item(&self, item: &CartItemId) -> Result<(), ServiceError>;

    /// Empty the cart.
    async fn clear(&self) -> Result<(), ServiceError>;

    /// Total quantity across all lines, 0 before the first load.
    fn item_count(&self) -> u32 {
        self.cart().data.map_or(0, |cart| cart.item_count)
    }

    /// Whether checkout can begin. An empty or unloaded cart cannot be
    /// checked out.
    fn can_checkout(&self) -> bool {
        self.item_count() > 0
    }
}

/// The checkout flow.
#[async_trait]
pub trait CheckoutService: Send + Sync {
    /// The order produced by the last successful submission, if any.
    fn order(&self) -> Snapshot<Order>;

    /// Validate the form and submit it. An invalid form fails without any
    /// network traffic.
    async fn submit(&self, form: &CheckoutForm) -> Result<(), ServiceError>;

    /// Forget the previous outcome and return to `Idle`.
    fn reset(&self);

    /// The phase of the flow, derived from the snapshot.
    fn status(&self) -> CheckoutStatus {
        let order = self.order();
        if order.loading {
            CheckoutStatus::Submitting
        } else if order.error.is_some() {
            CheckoutStatus::Failed
        } else if order.has_data() {
            CheckoutStatus::Completed
        } else {
            CheckoutStatus::Idle
        }
    }
}

/// The browsable product listing.
#[async_trait]
pub trait ProductListService: Send + Sync {
    /// The current page snapshot.
    fn page(&self) -> Snapshot<Page<Product>>;

    /// The query the snapshot was (or is being) loaded for.
    fn query(&self) -> ProductQuery;

    /// Fetch a page of products for the given query.
    async fn load(&self, query: ProductQuery) -> Result<(), ServiceError>;

    /// Whether a further page exists beyond the loaded one.
    fn has_more(&self) -> bool {
        self.page().data.is_some_and(|page| page.has_next())
    }
}

/// A single product's detail view.
#[async_trait]
pub trait ProductDetailService: Send + Sync {
    /// The current product snapshot.
    fn product(&self) -> Snapshot<Product>;

    /// Fetch one product by its URL slug.
    async fn load(&self, slug: &str) -> Result<(), ServiceError>;
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::models::cart::CartItem;
    use crate::models::order::{Address, OrderItem};
    use crate::types::id::{OrderId, ProductId};
    use crate::types::price::Currency;
    use crate::types::status::OrderStatus;
    use rust_decimal::Decimal;

    struct FixedCart(Snapshot<Cart>);

    #[async_trait]
    impl CartService for FixedCart {
        fn cart(&self) -> Snapshot<Cart> {
            self.0.clone()
        }
        async fn load(&self) -> Result<(), ServiceError> {
            Ok(())
        }
        async fn add_item(&self, _: &VariantId, _: u32) -> Result<(), ServiceError> {
            Ok(())
        }
        async fn update_item(&self, _: &CartItemId, _: u32) -> Result<(), ServiceError> {
            Ok(())
        }
        async fn remove_item(&self, _: &CartItemId) -> Result<(), ServiceError> {
            Ok(())
        }
        async fn clear(&self) -> Result<(), ServiceError> {
            Ok(())
        }
    }

    struct FixedCheckout(Snapshot<Order>);

    #[async_trait]
    impl CheckoutService for FixedCheckout {
        fn order(&self) -> Snapshot<Order> {
            self.0.clone()
        }
        async fn submit(&self, _: &CheckoutForm) -> Result<(), ServiceError> {
            Ok(())
        }
        fn reset(&self) {}
    }

    fn cart_with_quantity(quantity: u32) -> Cart {
        Cart {
            items: vec![CartItem {
                id: CartItemId::new("line_1"),
                product_id: ProductId::new("prod_1"),
                variant_id: VariantId::new("var_1"),
                title: "Green Tea".to_owned(),
                variant_title: None,
                unit_price: Decimal::new(1250, 2),
                quantity,
                line_total: Decimal::new(1250, 2) * Decimal::from(quantity),
                image: None,
            }],
            subtotal: Decimal::new(1250, 2),
            total: Decimal::new(1250, 2),
            currency: Currency::USD,
            item_count: quantity,
        }
    }

    fn sample_order() -> Order {
        Order {
            id: OrderId::new("ord_1"),
            number: "CN-1042".to_owned(),
            status: OrderStatus::Pending,
            email: "shopper@example.com".parse().unwrap(),
            items: vec![OrderItem {
                product_id: ProductId::new("prod_1"),
                variant_id: VariantId::new("var_1"),
                title: "Green Tea".to_owned(),
                unit_price: Decimal::new(1250, 2),
                quantity: 1,
                line_total: Decimal::new(1250, 2),
            }],
            subtotal: Decimal::new(1250, 2),
            total: Decimal::new(1250, 2),
            currency: Currency::USD,
            shipping_address: Address {
                first_name: "Ada".to_owned(),
                last_name: "Linden".to_owned(),
                line1: "1 Canal St".to_owned(),
                line2: None,
                city: "Portland".to_owned(),
                region: None,
                postal_code: "97201".to_owned(),
                country: "US".to_owned(),
            },
            note: None,
            placed_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn test_unloaded_cart_cannot_check_out() {
        let service = FixedCart(Snapshot::idle());
        assert_eq!(service.item_count(), 0);
        assert!(!service.can_checkout());
    }

    #[test]
    fn test_empty_cart_cannot_check_out() {
        let service = FixedCart(Snapshot {
            data: Some(Cart::default()),
            loading: false,
            error: None,
        });
        assert_eq!(service.item_count(), 0);
        assert!(!service.can_checkout());
    }

    #[test]
    fn test_populated_cart_can_check_out() {
        let service = FixedCart(Snapshot {
            data: Some(cart_with_quantity(2)),
            loading: false,
            error: None,
        });
        assert_eq!(service.item_count(), 2);
        assert!(service.can_checkout());
    }

    #[test]
    fn test_checkout_status_idle_before_first_submit() {
        let service = FixedCheckout(Snapshot::idle());
        assert_eq!(service.status(), CheckoutStatus::Idle);
    }

    #[test]
    fn test_checkout_status_submitting_while_loading() {
        let service = FixedCheckout(Snapshot {
            data: None,
            loading: true,
            error: None,
        });
        assert_eq!(service.status(), CheckoutStatus::Submitting);
    }

    #[test]
    fn test_checkout_status_completed_after_success() {
        let service = FixedCheckout(Snapshot {
            data: Some(sample_order()),
            loading: false,
            error: None,
        });
        assert_eq!(service.status(), CheckoutStatus::Completed);
    }

    #[test]
    fn test_checkout_status_failed_outranks_stale_order() {
        // A second submission failed; the order from the first one is
        // still held but the flow reads as failed.
        let service = FixedCheckout(Snapshot {
            data: Some(sample_order()),
            loading: false,
            error: Some(ServiceError::from_code(ErrorCode::Server)),
        });
        assert_eq!(service.status(), CheckoutStatus::Failed);
    }
}
