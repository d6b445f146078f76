//! Cache types for catalog responses.

use canopy_core::{Page, Product, ProductSort};

/// Cache key for catalog lookups.
///
/// Listing keys carry everything that shapes the response; filtered
/// queries (search, tag) never reach the cache at all.
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub enum CacheKey {
    Product(String),
    Products {
        page: u32,
        page_size: u32,
        sort: Option<ProductSort>,
    },
}

/// Cached value types.
#[derive(Debug, Clone)]
pub enum CacheValue {
    Product(Box<Product>),
    Products(Page<Product>),
}
