//! Canopy Admin - partner store management surface.
//!
//! # Usage
//!
//! ```bash
//! # Store settings
//! canopy-admin store show
//! canopy-admin store update --name "Treeline Goods"
//!
//! # Catalog management
//! canopy-admin products list --page 2
//! canopy-admin products create --title "Walnut Desk Lamp" --price 89.00
//! canopy-admin inventory set var_3f9a --quantity 40
//!
//! # Orders
//! canopy-admin orders list --status pending
//! canopy-admin orders set-status ord_91xx shipped
//! ```
//!
//! # Security
//!
//! **This binary carries the HIGH PRIVILEGE admin token.** It can
//! rewrite the catalog, adjust stock, and move orders through
//! fulfilment. Keep the token out of shopper-facing environments; the
//! storefront binary never needs it.

#![cfg_attr(not(test), forbid(unsafe_code))]

use canopy_client::{AdminApi, RestClient, Signals};
use canopy_core::{DEFAULT_PAGE_SIZE, OrderStatus, ProductSort, ProductStatus};
use clap::{Args, Parser, Subcommand};
use rust_decimal::Decimal;
use secrecy::ExposeSecret;

mod commands;
mod config;

use config::AdminConfig;

#[derive(Parser)]
#[command(name = "canopy-admin")]
#[command(author, version, about = "Canopy Commerce store management")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Store settings
    Store {
        #[command(subcommand)]
        action: StoreAction,
    },
    /// Catalog management
    Products {
        #[command(subcommand)]
        action: ProductsAction,
    },
    /// Stock levels
    Inventory {
        #[command(subcommand)]
        action: InventoryAction,
    },
    /// Order management
    Orders {
        #[command(subcommand)]
        action: OrdersAction,
    },
}

#[derive(Subcommand)]
enum StoreAction {
    /// Show the store's configuration
    Show,
    /// Update store settings; omitted flags stay unchanged
    Update {
        /// Display name
        #[arg(long)]
        name: Option<String>,

        /// Default currency code (e.g., `USD`)
        #[arg(long)]
        currency: Option<canopy_core::Currency>,

        /// Default locale (e.g., `en-US`)
        #[arg(long)]
        locale: Option<String>,

        /// Shopper support email
        #[arg(long)]
        support_email: Option<canopy_core::Email>,
    },
}

#[derive(Subcommand)]
enum ProductsAction {
    /// List products, drafts and archived included
    List {
        /// Page to fetch (1-based)
        #[arg(long, default_value_t = 1)]
        page: u32,

        /// Products per page
        #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
        page_size: u32,

        /// Free-text search
        #[arg(short, long)]
        search: Option<String>,

        /// Sort key
        #[arg(long)]
        sort: Option<ProductSort>,

        /// Only products carrying this tag
        #[arg(long)]
        tag: Option<String>,
    },
    /// Create a product with one variant
    Create(ProductArgs),
    /// Replace a product's editable fields
    Update {
        /// Product ID
        id: String,

        #[command(flatten)]
        args: ProductArgs,
    },
    /// Delete a product
    Delete {
        /// Product ID
        id: String,
    },
}

#[derive(Args)]
struct ProductArgs {
    /// Product title
    #[arg(long)]
    title: String,

    /// URL slug (derived from the title when omitted)
    #[arg(long)]
    slug: Option<String>,

    #[arg(long)]
    description: Option<String>,

    #[arg(long)]
    vendor: Option<String>,

    /// Free-form type (e.g., `Lighting`)
    #[arg(long)]
    product_type: Option<String>,

    /// Tag, repeatable
    #[arg(long = "tag")]
    tags: Vec<String>,

    /// `draft`, `active`, or `archived`
    #[arg(long)]
    status: Option<ProductStatus>,

    /// Price for the default variant
    #[arg(long)]
    price: Decimal,

    /// Currency code for the price
    #[arg(long, default_value_t)]
    currency: canopy_core::Currency,

    /// SKU for the default variant
    #[arg(long)]
    sku: Option<String>,

    /// Opening stock for the default variant
    #[arg(long)]
    quantity: Option<i64>,
}

impl From<ProductArgs> for canopy_core::ProductInput {
    fn from(args: ProductArgs) -> Self {
        Self {
            title: args.title,
            slug: args.slug,
            description: args.description,
            vendor: args.vendor,
            product_type: args.product_type,
            tags: args.tags,
            status: args.status,
            variants: vec![canopy_core::VariantInput {
                title: "Default".to_string(),
                sku: args.sku,
                price: canopy_core::Price::new(args.price, args.currency),
                quantity: args.quantity,
            }],
        }
    }
}

#[derive(Subcommand)]
enum InventoryAction {
    /// Set a variant's stock level
    Set {
        /// Variant ID
        variant: String,

        /// Units on hand
        #[arg(long)]
        quantity: i64,

        /// Keep selling at zero stock
        #[arg(long)]
        allow_backorder: Option<bool>,
    },
}

#[derive(Subcommand)]
enum OrdersAction {
    /// List orders, newest first
    List {
        /// Page to fetch (1-based)
        #[arg(long, default_value_t = 1)]
        page: u32,

        /// Orders per page
        #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
        page_size: u32,

        /// Only orders in this status
        #[arg(long)]
        status: Option<OrderStatus>,
    },
    /// Show one order
    Show {
        /// Order ID
        id: String,
    },
    /// Move an order to a new status
    SetStatus {
        /// Order ID
        id: String,

        /// `pending`, `processing`, `shipped`, `delivered`, or `cancelled`
        status: OrderStatus,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = AdminConfig::from_env()?;

    let rest = RestClient::new(
        &config.api_url,
        config.admin_token.expose_secret(),
        Signals::default(),
    );
    let api = AdminApi::new(rest, config.store.clone());
    tracing::debug!(store = %api.store(), "admin client ready");

    match cli.command {
        Commands::Store { action } => match action {
            StoreAction::Show => commands::store::show(&api).await?,
            StoreAction::Update {
                name,
                currency,
                locale,
                support_email,
            } => commands::store::update(&api, name, currency, locale, support_email).await?,
        },
        Commands::Products { action } => match action {
            ProductsAction::List {
                page,
                page_size,
                search,
                sort,
                tag,
            } => {
                let query = canopy_core::ProductQuery {
                    page,
                    page_size,
                    search,
                    sort,
                    tag,
                };
                commands::products::list(&api, query).await?;
            }
            ProductsAction::Create(args) => {
                commands::products::create(&api, args.into()).await?;
            }
            ProductsAction::Update { id, args } => {
                commands::products::update(&api, &id, args.into()).await?;
            }
            ProductsAction::Delete { id } => commands::products::delete(&api, &id).await?,
        },
        Commands::Inventory { action } => match action {
            InventoryAction::Set {
                variant,
                quantity,
                allow_backorder,
            } => commands::products::set_inventory(&api, &variant, quantity, allow_backorder).await?,
        },
        Commands::Orders { action } => match action {
            OrdersAction::List {
                page,
                page_size,
                status,
            } => commands::orders::list(&api, page, page_size, status).await?,
            OrdersAction::Show { id } => commands::orders::show(&api, &id).await?,
            OrdersAction::SetStatus { id, status } => {
                commands::orders::set_status(&api, &id, status).await?;
            }
        },
    }
    Ok(())
}
