//! Catalog documents: products, variants, images, inventory.

use serde::{Deserialize, Serialize};

use crate::models::page::DEFAULT_PAGE_SIZE;
use crate::types::id::{ProductId, VariantId};
use crate::types::price::{Price, PriceRange};
use crate::types::status::ProductStatus;

/// A product image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Image {
    pub url: String,
    pub alt_text: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

/// A choosable axis on a product (e.g., "Size" with "S", "M", "L").
///
/// Variant titles encode the chosen values; options exist so a detail
/// view can render pickers without parsing titles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductOption {
    pub name: String,
    pub values: Vec<String>,
}

/// Stock level for a variant.
///
/// Only present on admin payloads; the storefront surface sees just
/// `available_for_sale`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Inventory {
    pub quantity: i64,
    pub allow_backorder: bool,
}

/// A purchasable variant of a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Variant {
    pub id: VariantId,
    pub title: String,
    pub sku: Option<String>,
    pub price: Price,
    pub compare_at_price: Option<Price>,
    pub available_for_sale: bool,
    #[serde(default)]
    pub inventory: Option<Inventory>,
}

/// A product in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    /// URL-safe handle, unique within a store.
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub vendor: Option<String>,
    #[serde(default)]
    pub product_type: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub options: Vec<ProductOption>,
    #[serde(default)]
    pub images: Vec<Image>,
    #[serde(default)]
    pub variants: Vec<Variant>,
    pub price_range: PriceRange,
    pub available_for_sale: bool,
    /// Omitted on storefront payloads, where every product is active.
    #[serde(default)]
    pub status: ProductStatus,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl Product {
    /// The image to show in listings, if the product has any.
    #[must_use]
    pub fn primary_image(&self) -> Option<&Image> {
        self.images.first()
    }

    /// The variant preselected on a detail page.
    #[must_use]
    pub fn default_variant(&self) -> Option<&Variant> {
        self.variants.first()
    }
}

/// Sort orders accepted by the product listing endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProductSort {
    Newest,
    PriceAsc,
    PriceDesc,
    TitleAsc,
    TitleDesc,
    BestSelling,
}

impl ProductSort {
    /// The wire value sent as the `sort` query parameter.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Newest => "newest",
            Self::PriceAsc => "price-asc",
            Self::PriceDesc => "price-desc",
            Self::TitleAsc => "title-asc",
            Self::TitleDesc => "title-desc",
            Self::BestSelling => "best-selling",
        }
    }
}

impl std::fmt::Display for ProductSort {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ProductSort {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "newest" => Ok(Self::Newest),
            "price-asc" => Ok(Self::PriceAsc),
            "price-desc" => Ok(Self::PriceDesc),
            "title-asc" => Ok(Self::TitleAsc),
            "title-desc" => Ok(Self::TitleDesc),
            "best-selling" => Ok(Self::BestSelling),
            _ => Err(format!("invalid sort order: {s}")),
        }
    }
}

/// Parameters for the product listing endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductQuery {
    /// 1-based page number.
    pub page: u32,
    pub page_size: u32,
    pub search: Option<String>,
    pub sort: Option<ProductSort>,
    pub tag: Option<String>,
}

impl Default for ProductQuery {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            search: None,
            sort: None,
            tag: None,
        }
    }
}

impl ProductQuery {
    /// Encode as query parameters.
    ///
    /// `page` and `pageSize` are always sent; the filters only when set.
    #[must_use]
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("page", self.page.to_string()),
            ("pageSize", self.page_size.to_string()),
        ];
        if let Some(search) = &self.search {
            params.push(("search", search.clone()));
        }
        if let Some(sort) = self.sort {
            params.push(("sort", sort.as_str().to_owned()));
        }
        if let Some(tag) = &self.tag {
            params.push(("tag", tag.clone()));
        }
        params
    }

    /// Whether this query narrows the catalog beyond plain pagination.
    ///
    /// Filtered result sets are too volatile to cache.
    #[must_use]
    pub const fn is_filtered(&self) -> bool {
        self.search.is_some() || self.tag.is_some()
    }

    /// The same query, advanced to the next page.
    #[must_use]
    pub fn next_page(&self) -> Self {
        let mut next = self.clone();
        next.page += 1;
        next
    }
}

/// Write payload for creating or replacing a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductInput {
    pub title: String,
    /// Server derives one from the title when omitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_type: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ProductStatus>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub variants: Vec<VariantInput>,
}

/// Write payload for a variant nested in a [`ProductInput`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantInput {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    pub price: Price,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,
}

/// Write payload for the inventory endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryUpdate {
    pub quantity: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_backorder: Option<bool>,
}
