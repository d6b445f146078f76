//! Checkout and order commands.

use canopy_client::services::CheckoutState;
use canopy_client::{SessionStore, StorefrontApi, format};
use canopy_core::{CheckoutForm, CheckoutService, Order, OrderId};
use tracing::info;

use super::CommandError;

/// Validate the form and convert the cart into an order.
pub async fn place_order(
    api: &StorefrontApi,
    session: &SessionStore,
    form: CheckoutForm,
) -> Result<(), CommandError> {
    let session_id = session.session_id()?;
    let state = CheckoutState::new(api.clone(), session_id);

    state.submit(&form).await?;

    if let Some(order) = state.order().data {
        info!("Order placed.");
        print_order(&order);
    }
    Ok(())
}

/// Show a placed order.
pub async fn show_order(api: &StorefrontApi, id: &str) -> Result<(), CommandError> {
    let order = api
        .get_order(&OrderId::new(id))
        .await
        .map_err(|e| format::service_error(&e))?;

    print_order(&order);
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
    info!("  Ship to: {} {}", address.first_name, address.last_name);
    info!("    {}", address.line1);
    if let Some(line2) = &address.line2 {
        info!("    {line2}");
    }
    let region = address
        .region
        .as_deref()
        .map(|r| format!(", {r}"))
        .unwrap_or_default();
    info!(
        "    {}{region} {}, {}",
        address.city, address.postal_code, address.country
    );
    if let Some(note) = &order.note {
        info!("  Note: {note}");
    }
}
