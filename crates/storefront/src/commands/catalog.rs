//! Catalog browsing commands.

use canopy_client::StorefrontApi;
use canopy_client::services::{ProductDetailState, ProductListState};
use canopy_core::{Product, ProductDetailService, ProductListService, ProductQuery};
use tracing::info;

use super::CommandError;

/// List a page of products.
pub async fn list(api: &StorefrontApi, query: ProductQuery) -> Result<(), CommandError> {
    let state = ProductListState::new(api.clone());
    state.load(query).await?;

    let snapshot = state.page();
    let Some(page) = snapshot.data else {
        return Ok(());
    };

    if page.is_empty() {
        info!("No products matched.");
        return Ok(());
    }

    for product in &page.items {
        info!(
            "{}  {}  ({})",
            product.title,
            product.price_range.display(),
            product.slug
        );
    }
    info!(
        "Page {} of {} ({} products total)",
        page.page, page.total_pages, page.total_items
    );
    if state.has_more() {
        info!("More available: pass --page {}", page.page + 1);
    }

    Ok(())
}

/// Show one product by slug.
pub async fn show(api: &StorefrontApi, slug: &str) -> Result<(), CommandError> {
    let state = ProductDetailState::new(api.clone());
    state.load(slug).await?;

    if let Some(product) = state.product().data {
        print_product(&product);
    }
    Ok(())
}

fn print_product(product: &Product) {
    info!("{}", product.title);
    info!("  Price: {}", product.price_range.display());
    if let Some(vendor) = &product.vendor {
        info!("  Vendor: {vendor}");
    }
    if !product.tags.is_empty() {
        info!("  Tags: {}", product.tags.join(", "));
    }
    if let Some(description) = product.description.as_deref().filter(|d| !d.is_empty()) {
        info!("  {description}");
    }

    for variant in &product.variants {
        let availability = if variant.available_for_sale {
            "in stock"
        } else {
            "sold out"
        };
        info!(
            "  {}  {}  {}  [{}]",
            variant.id, variant.title, variant.price, availability
        );
    }
}
