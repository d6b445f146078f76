//! Catalog management commands.

use canopy_client::{AdminApi, ApiError};
use canopy_core::{InventoryUpdate, Product, ProductInput, ProductQuery};
use tracing::info;

/// List a page of products.
pub async fn list(api: &AdminApi, query: ProductQuery) -> Result<(), ApiError> {
    let page = api.get_products(&query).await?;

    if page.is_empty() {
        info!("No products matched.");
        return Ok(());
    }

    for product in &page.items {
        info!(
            "{}  {}  {}  [{}]",
            product.id,
            product.title,
            product.price_range.display(),
            product.status
        );
    }
    info!(
        "Page {} of {} ({} products total)",
        page.page, page.total_pages, page.total_items
    );
    Ok(())
}

/// Create a product.
pub async fn create(api: &AdminApi, input: ProductInput) -> Result<(), ApiError> {
    let product = api.create_product(&input).await?;
    info!("Created {} ({})", product.title, product.id);
    print_product(&product);
    Ok(())
}

/// Replace a product's editable fields.
pub async fn update(api: &AdminApi, id: &str, input: ProductInput) -> Result<(), ApiError> {
    let product = api.update_product(&id.into(), &input).await?;
    info!("Updated {} ({})", product.title, product.id);
    print_product(&product);
    Ok(())
}

/// Delete a product.
pub async fn delete(api: &AdminApi, id: &str) -> Result<(), ApiError> {
    let product = api.delete_product(&id.into()).await?;
    info!("Deleted {} ({})", product.title, product.id);
    Ok(())
}

/// Set a variant's stock level.
pub async fn set_inventory(
    api: &AdminApi,
    variant: &str,
    quantity: i64,
    allow_backorder: Option<bool>,
) -> Result<(), ApiError> {
    let update = InventoryUpdate {
        quantity,
        allow_backorder,
    };
    let variant = api.set_inventory(&variant.into(), &update).await?;

    let stock = variant
        .inventory
        .as_ref()
        .map_or_else(|| "untracked".to_string(), |inv| inv.quantity.to_string());
    info!("{}  {}  stock: {stock}", variant.id, variant.title);
    Ok(())
}

fn print_product(product: &Product) {
    info!("  Slug: {}", product.slug);
    info!("  Status: {}", product.status);
    info!("  Price: {}", product.price_range.display());
    for variant in &product.variants {
        info!("  Variant {}  {}  {}", variant.id, variant.title, variant.price);
    }
}
