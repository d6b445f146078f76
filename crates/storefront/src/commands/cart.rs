//! Cart commands.

use canopy_client::services::CartState;
use canopy_client::{SessionStore, StorefrontApi};
use canopy_core::{Cart, CartService};
use tracing::info;

use super::CommandError;

fn cart_state(api: &StorefrontApi, session: &SessionStore) -> Result<CartState, CommandError> {
    let session_id = session.session_id()?;
    Ok(CartState::new(api.clone(), session_id))
}

/// Show the cart.
pub async fn show(api: &StorefrontApi, session: &SessionStore) -> Result<(), CommandError> {
    let state = cart_state(api, session)?;
    state.load().await?;
    tracing::debug!(session = %state.session(), "loaded cart");
    present(&state);
    Ok(())
}

/// Add a variant to the cart.
pub async fn add(
    api: &StorefrontApi,
    session: &SessionStore,
    variant: &str,
    quantity: u32,
) -> Result<(), CommandError> {
    let state = cart_state(api, session)?;
    state.add_item(&variant.into(), quantity).await?;
    present(&state);
    Ok(())
}

/// Change a line's quantity.
pub async fn update(
    api: &StorefrontApi,
    session: &SessionStore,
    item: &str,
    quantity: u32,
) -> Result<(), CommandError> {
    let state = cart_state(api, session)?;
    state.update_item(&item.into(), quantity).await?;
    present(&state);
    Ok(())
}

/// Remove a line from the cart.
pub async fn remove(
    api: &StorefrontApi,
    session: &SessionStore,
    item: &str,
) -> Result<(), CommandError> {
    let state = cart_state(api, session)?;
    state.remove_item(&item.into()).await?;
    present(&state);
    Ok(())
}

/// Empty the cart.
pub async fn clear(api: &StorefrontApi, session: &SessionStore) -> Result<(), CommandError> {
    let state = cart_state(api, session)?;
    state.clear().await?;
    info!("Cart emptied.");
    Ok(())
}

fn present(state: &CartState) {
    if let Some(cart) = state.cart().data {
        print_cart(&cart);
    }
    if !state.can_checkout() {
        info!("Cart is empty; nothing to check out.");
    }
}

fn print_cart(cart: &Cart) {
    for item in &cart.items {
        let variant = item
            .variant_title
            .as_deref()
            .map(|title| format!(" ({title})"))
            .unwrap_or_default();
        info!(
            "{}  {}{}  x{}  @ {:.2} = {:.2}",
            item.id, item.title, variant, item.quantity, item.unit_price, item.line_total
        );
    }
    info!(
        "Subtotal {:.2} {currency}, total {:.2} {currency}, {} items",
        cart.subtotal,
        cart.total,
        cart.item_count,
        currency = cart.currency
    );
}
