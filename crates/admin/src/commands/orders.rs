//! Order management commands.

use canopy_client::{AdminApi, ApiError};
use canopy_core::{Order, OrderId, OrderQuery, OrderStatus};
use tracing::info;

/// List a page of orders.
pub async fn list(
    api: &AdminApi,
    page: u32,
    page_size: u32,
    status: Option<OrderStatus>,
) -> Result<(), ApiError> {
    let query = OrderQuery {
        page,
        page_size,
        status,
    };
    let orders = api.get_orders(&query).await?;

    if orders.is_empty() {
        info!("No orders matched.");
        return Ok(());
    }

    for order in &orders.items {
        info!(
            "{}  {}  {}  {:.2} {}  {}",
            order.id, order.number, order.status, order.total, order.currency, order.email
        );
    }
    info!(
        "Page {} of {} ({} orders total)",
        orders.page, orders.total_pages, orders.total_items
    );
    Ok(())
}

/// Show one order in full.
pub async fn show(api: &AdminApi, id: &str) -> Result<(), ApiError> {
    let order = api.get_order(&OrderId::new(id)).await?;
    print_order(&order);
    Ok(())
}

/// Move an order to a new status.
pub async fn set_status(api: &AdminApi, id: &str, status: OrderStatus) -> Result<(), ApiError> {
    let order = api.update_order_status(&OrderId::new(id), status).await?;
    info!("Order {} is now {}", order.number, order.status);
    Ok(())
}

fn print_order(order: &Order) {
    info!("Order {} ({})", order.number, order.id);
    info!("  Status: {}", order.status);
    info!("  Email: {}", order.email);
    info!("  Placed: {}", order.placed_at);

    for item in &order.items {
        info!(
            "  {}  x{}  @ {:.2} = {:.2}",
            item.title, item.quantity, item.unit_price, item.line_total
        );
    }
    info!(
        "  Subtotal {:.2} {currency}, total {:.2} {currency}",
        order.subtotal,
        order.total,
        currency = order.currency
    );

    let address = &order.shipping_address;
    info!(
        "  Ship to: {} {}, {}, {} {}, {}",
        address.first_name,
        address.last_name,
        address.line1,
        address.city,
        address.postal_code,
        address.country
    );
    if let Some(note) = &order.note {
        info!("  Note: {note}");
    }
}
