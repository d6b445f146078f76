//! Canopy Storefront - shopper-facing terminal surface.
//!
//! # Usage
//!
//! ```bash
//! # Browse the catalog
//! canopy-store products list --page 2 --sort price-asc
//! canopy-store products show walnut-desk-lamp
//!
//! # Work with the cart
//! canopy-store cart add var_3f9a --quantity 2
//! canopy-store cart show
//!
//! # Place the order
//! canopy-store checkout --email ada@example.com --first-name Ada \
//!     --last-name Lovelace --line1 "1 Analytical Way" --city London \
//!     --postal-code "N1 9GU" --country GB
//! ```
//!
//! # Security
//!
//! This binary only carries the publishable token. It can browse the
//! catalog and act on its own session's cart; store management lives in
//! the admin binary.

#![cfg_attr(not(test), forbid(unsafe_code))]

use canopy_client::{RestClient, SessionStore, Signals, StorefrontApi};
use canopy_core::{DEFAULT_PAGE_SIZE, ProductQuery, ProductSort};
use clap::{Args, Parser, Subcommand};

mod commands;
mod config;

use config::StorefrontConfig;

#[derive(Parser)]
#[command(name = "canopy-store")]
#[command(author, version, about = "Canopy Commerce storefront")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the product catalog
    Products {
        #[command(subcommand)]
        action: ProductsAction,
    },
    /// Inspect and edit the cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Place an order from the current cart
    Checkout(CheckoutArgs),
    /// Show the store's public configuration
    Store,
    /// Show a placed order
    Order {
        /// Order ID
        id: String,
    },
    /// Manage the device session
    Session {
        #[command(subcommand)]
        action: SessionAction,
    },
    /// Read or change the display theme
    Theme {
        #[command(subcommand)]
        action: ThemeAction,
    },
}

#[derive(Subcommand)]
enum ProductsAction {
    /// List products
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

        /// Sort key (`newest`, `price-asc`, `price-desc`, `title-asc`,
        /// `title-desc`, `best-selling`)
        #[arg(long)]
        sort: Option<ProductSort>,

        /// Only products carrying this tag
        #[arg(long)]
        tag: Option<String>,
    },
    /// Show one product
    Show {
        /// Product URL slug
        slug: String,
    },
}

#[derive(Subcommand)]
enum CartAction {
    /// Show the cart
    Show,
    /// Add a variant to the cart
    Add {
        /// Variant ID
        variant: String,

        /// How many to add
        #[arg(short, long, default_value_t = 1)]
        quantity: u32,
    },
    /// Change a line's quantity
    Update {
        /// Cart line ID
        item: String,

        /// New quantity
        #[arg(short, long)]
        quantity: u32,
    },
    /// Remove a line from the cart
    Remove {
        /// Cart line ID
        item: String,
    },
    /// Empty the cart
    Clear,
}

#[derive(Args)]
struct CheckoutArgs {
    /// Contact email for the order
    #[arg(long)]
    email: String,

    #[arg(long)]
    first_name: String,

    #[arg(long)]
    last_name: String,

    /// First address line
    #[arg(long)]
    line1: String,

    /// Second address line
    #[arg(long)]
    line2: Option<String>,

    #[arg(long)]
    city: String,

    /// State, province, or county
    #[arg(long)]
    region: Option<String>,

    #[arg(long)]
    postal_code: String,

    /// Two-letter country code
    #[arg(long)]
    country: String,

    /// Note to the seller
    #[arg(long)]
    note: Option<String>,
}

impl From<CheckoutArgs> for canopy_core::CheckoutForm {
    fn from(args: CheckoutArgs) -> Self {
        Self {
            email: args.email,
            address: canopy_core::Address {
                first_name: args.first_name,
                last_name: args.last_name,
                line1: args.line1,
                line2: args.line2,
                city: args.city,
                region: args.region,
                postal_code: args.postal_code,
                country: args.country,
            },
            note: args.note,
        }
    }
}

#[derive(Subcommand)]
enum SessionAction {
    /// Show the session ID and storage location
    Show,
    /// Forget the session; the next command mints a fresh one
    Reset,
}

#[derive(Subcommand)]
enum ThemeAction {
    /// Show the persisted theme
    Show,
    /// Persist a theme
    Set {
        /// Theme name (e.g., `light`, `dark`)
        theme: String,
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

/// Log the shared signals as they move, the way a web shell would bind
/// a global spinner and error banner to them.
fn watch_network(signals: &Signals) {
    let mut loading = signals.subscribe_loading();
    tokio::spawn(async move {
        while loading.changed().await.is_ok() {
            let active = *loading.borrow_and_update();
            tracing::debug!(active, "network activity");
        }
    });

    let mut errors = signals.subscribe_error();
    tokio::spawn(async move {
        while errors.changed().await.is_ok() {
            let Some(error) = errors.borrow_and_update().clone() else {
                continue;
            };
            tracing::warn!(%error, "request failed");
        }
    });
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = StorefrontConfig::from_env()?;

    let signals = Signals::default();
    watch_network(&signals);

    let rest = RestClient::new(&config.api_url, &config.publishable_token, signals);
    let api = StorefrontApi::new(rest, config.store.clone());
    tracing::debug!(store = %api.store(), "storefront client ready");

    let session = match &config.data_dir {
        Some(dir) => SessionStore::at(dir),
        None => SessionStore::new()?,
    };

    match cli.command {
        Commands::Products { action } => match action {
            ProductsAction::List {
                page,
                page_size,
                search,
                sort,
                tag,
            } => {
                let query = ProductQuery {
                    page,
                    page_size,
                    search,
                    sort,
                    tag,
                };
                commands::catalog::list(&api, query).await?;
            }
            ProductsAction::Show { slug } => commands::catalog::show(&api, &slug).await?,
        },
        Commands::Cart { action } => match action {
            CartAction::Show => commands::cart::show(&api, &session).await?,
            CartAction::Add { variant, quantity } => {
                commands::cart::add(&api, &session, &variant, quantity).await?;
            }
            CartAction::Update { item, quantity } => {
                commands::cart::update(&api, &session, &item, quantity).await?;
            }
            CartAction::Remove { item } => commands::cart::remove(&api, &session, &item).await?,
            CartAction::Clear => commands::cart::clear(&api, &session).await?,
        },
        Commands::Checkout(args) => {
            commands::checkout::place_order(&api, &session, args.into()).await?;
        }
        Commands::Store => commands::store::show(&api).await?,
        Commands::Order { id } => commands::checkout::show_order(&api, &id).await?,
        Commands::Session { action } => match action {
            SessionAction::Show => commands::session::show(&session)?,
            SessionAction::Reset => commands::session::reset(&session)?,
        },
        Commands::Theme { action } => match action {
            ThemeAction::Show => commands::session::theme_show(&session)?,
            ThemeAction::Set { theme } => commands::session::theme_set(&session, &theme)?,
        },
    }
    Ok(())
}
