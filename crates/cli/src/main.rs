//! Asili CLI - catalog browsing and cart management.
//!
//! # Usage
//!
//! ```bash
//! # List the catalog
//! asili catalog list
//! asili catalog list --category shoes --in-stock --sort price-asc
//!
//! # Show one product
//! asili catalog show kente-slides
//!
//! # Drive the cart
//! asili cart add kente-slides --size 39 -q 1
//! asili cart show
//! asili cart update "kente-slides::39::" -q 2
//! asili cart remove "kente-slides::39::"
//! asili cart clear --yes
//! ```
//!
//! The cart persists under the configured data directory (`ASILI_DATA_DIR`),
//! so it survives between invocations the way a browser cart survives page
//! reloads.

#![cfg_attr(not(test), forbid(unsafe_code))]
// This binary talks to a terminal.
#![allow(clippy::print_stdout)]

use clap::{Parser, Subcommand};

use asili_storefront::catalog::ProductSort;
use asili_storefront::config::StoreConfig;
use asili_storefront::state::Store;

mod commands;

#[derive(Parser)]
#[command(name = "asili")]
#[command(author, version, about = "Asili storefront tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the product catalog
    Catalog {
        #[command(subcommand)]
        action: CatalogAction,
    },
    /// Manage the shopping cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
}

#[derive(Subcommand)]
enum CatalogAction {
    /// List products, optionally filtered and sorted
    List {
        /// Restrict to one category handle
        #[arg(long)]
        category: Option<String>,

        /// Drop unavailable and sold-out products
        #[arg(long)]
        in_stock: bool,

        /// Minimum price, inclusive (e.g. 25.00)
        #[arg(long)]
        min: Option<rust_decimal::Decimal>,

        /// Maximum price, inclusive
        #[arg(long)]
        max: Option<rust_decimal::Decimal>,

        /// Sort order (defaults to catalog order)
        #[arg(long, value_enum)]
        sort: Option<SortArg>,
    },
    /// Show one product in detail
    Show {
        /// Product handle
        handle: String,
    },
}

#[derive(Subcommand)]
enum CartAction {
    /// Show the cart contents and totals
    Show,
    /// Add a product to the cart
    Add {
        /// Product handle
        product: String,

        /// Quantity to add
        #[arg(short, long, default_value_t = 1)]
        quantity: u32,

        /// Size selection (required when the product is sized)
        #[arg(long, default_value = "")]
        size: String,

        /// Color selection (required when the product has colorways)
        #[arg(long, default_value = "")]
        color: String,
    },
    /// Remove a line from the cart
    Remove {
        /// Line id, as printed by `cart show`
        line_id: String,
    },
    /// Set a line's quantity (0 removes the line)
    Update {
        /// Line id, as printed by `cart show`
        line_id: String,

        /// New quantity
        #[arg(short, long)]
        quantity: u32,
    },
    /// Empty the cart
    Clear {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

/// Sort orders accepted on the command line.
#[derive(Clone, Copy, clap::ValueEnum)]
enum SortArg {
    Catalog,
    PriceAsc,
    PriceDesc,
    Newest,
    Name,
}

impl From<SortArg> for ProductSort {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Catalog => Self::Catalog,
            SortArg::PriceAsc => Self::PriceAsc,
            SortArg::PriceDesc => Self::PriceDesc,
            SortArg::Newest => Self::Newest,
            SortArg::Name => Self::Name,
        }
    }
}

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli);

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = StoreConfig::from_env()?;
    let mut store = Store::open(config)?;

    match cli.command {
        Commands::Catalog { action } => match action {
            CatalogAction::List {
                category,
                in_stock,
                min,
                max,
                sort,
            } => {
                let sort = sort.map_or(ProductSort::Catalog, Into::into);
                commands::catalog::list(&store, category, in_stock, min, max, sort)?;
            }
            CatalogAction::Show { handle } => commands::catalog::show(&store, &handle)?,
        },
        Commands::Cart { action } => match action {
            CartAction::Show => commands::cart::show(&store),
            CartAction::Add {
                product,
                quantity,
                size,
                color,
            } => commands::cart::add(&mut store, &product, quantity, &size, &color)?,
            CartAction::Remove { line_id } => commands::cart::remove(&mut store, &line_id)?,
            CartAction::Update { line_id, quantity } => {
                commands::cart::update(&mut store, &line_id, quantity)?;
            }
            CartAction::Clear { yes } => commands::cart::clear(&mut store, yes)?,
        },
    }
    Ok(())
}
