//! Mapleshop CLI - Command-line front end for the cart engine.
//!
//! # Usage
//!
//! ```bash
//! # Browse the catalog
//! mapleshop catalog list
//! mapleshop catalog search shirt
//!
//! # Favorites
//! mapleshop fav toggle 2
//! mapleshop fav list
//!
//! # Cart
//! mapleshop cart add 1
//! mapleshop cart inc 1
//! mapleshop cart show
//!
//! # Checkout (simulated payment, local validation only)
//! mapleshop checkout --card-number 1234567890123456 --expiry 12/25 --cvv 123
//! ```
//!
//! Favorites and cart persist between invocations in a JSON session file;
//! see [`config`] for the environment variables involved.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::fs;
use std::io;
use std::path::Path;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use mapleshop_cart::{CartError, IdentityGate, InMemoryCatalog, ShopStore};
use mapleshop_core::ProductId;

mod commands;
mod config;
mod session;

use config::{CliConfig, ConfigError};
use session::{SessionError, SessionState};

#[derive(Parser)]
#[command(name = "mapleshop")]
#[command(author, version, about = "Mapleshop cart CLI")]
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
    /// Manage favorites
    Fav {
        #[command(subcommand)]
        action: FavAction,
    },
    /// Manage the shopping cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Validate payment details and place the order
    Checkout {
        /// 16-digit card number
        #[arg(long)]
        card_number: String,

        /// Expiry date as MM/YY
        #[arg(long)]
        expiry: String,

        /// 3-digit CVV
        #[arg(long)]
        cvv: String,
    },
}

#[derive(Subcommand)]
enum CatalogAction {
    /// List all products
    List,
    /// Search product titles (case-insensitive)
    Search {
        /// Search query
        query: String,
    },
}

#[derive(Subcommand)]
enum FavAction {
    /// Toggle favorite membership for a product
    Toggle {
        /// Product id
        id: i64,
    },
    /// List favorited products
    List,
}

#[derive(Subcommand)]
enum CartAction {
    /// Add a product to the cart
    Add {
        /// Product id
        id: i64,
    },
    /// Remove a product from the cart
    Remove {
        /// Product id
        id: i64,
    },
    /// Increase a line's quantity by one
    Inc {
        /// Product id
        id: i64,
    },
    /// Decrease a line's quantity by one (minimum 1)
    Dec {
        /// Product id
        id: i64,
    },
    /// Show cart lines and the pricing breakdown
    Show,
}

/// Top-level CLI error.
#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error(transparent)]
    Cart(#[from] CartError),
    #[error("cannot read catalog file: {0}")]
    CatalogIo(#[from] io::Error),
    #[error("catalog file is not valid JSON: {0}")]
    CatalogParse(#[from] serde_json::Error),
    #[error("no verified user session; set MAPLESHOP_VERIFIED=true to sign in")]
    SignedOut,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn load_catalog(config: &CliConfig) -> Result<InMemoryCatalog, CliError> {
    match &config.catalog_path {
        Some(path) => {
            let contents = fs::read_to_string(path)?;
            Ok(InMemoryCatalog::from_json(&contents)?)
        }
        None => Ok(InMemoryCatalog::seed()),
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let config = CliConfig::load()?;
    let catalog = Arc::new(load_catalog(&config)?);

    match cli.command {
        Commands::Catalog { action } => match action {
            CatalogAction::List => commands::catalog::list(&catalog),
            CatalogAction::Search { query } => commands::catalog::search(&catalog, &query),
        },
        Commands::Fav { action } => {
            let mut store = open_session(&config, catalog)?;
            match action {
                FavAction::Toggle { id } => {
                    commands::favorites::toggle(&mut store, ProductId::new(id));
                }
                FavAction::List => commands::favorites::list(&store),
            }
            save_session(&config.session_path, &store)?;
        }
        Commands::Cart { action } => {
            // The cart flow is only reachable with a verified user active
            if !config.verified_user_active() {
                return Err(CliError::SignedOut);
            }
            let mut store = open_session(&config, catalog)?;
            match action {
                CartAction::Add { id } => commands::cart::add(&mut store, ProductId::new(id)),
                CartAction::Remove { id } => {
                    commands::cart::remove(&mut store, ProductId::new(id));
                }
                CartAction::Inc { id } => {
                    commands::cart::increment(&mut store, ProductId::new(id))?;
                }
                CartAction::Dec { id } => {
                    commands::cart::decrement(&mut store, ProductId::new(id))?;
                }
                CartAction::Show => commands::cart::show(&mut store)?,
            }
            save_session(&config.session_path, &store)?;
        }
        Commands::Checkout {
            card_number,
            expiry,
            cvv,
        } => {
            if !config.verified_user_active() {
                return Err(CliError::SignedOut);
            }
            let mut store = open_session(&config, catalog)?;
            commands::checkout::run(&mut store, &card_number, &expiry, &cvv)?;
            save_session(&config.session_path, &store)?;
        }
    }
    Ok(())
}

fn open_session(
    config: &CliConfig,
    catalog: Arc<InMemoryCatalog>,
) -> Result<ShopStore<InMemoryCatalog>, CliError> {
    let state = SessionState::load(&config.session_path)?;
    Ok(ShopStore::restore(catalog, state.favorites, state.cart))
}

fn save_session(path: &Path, store: &ShopStore<InMemoryCatalog>) -> Result<(), CliError> {
    let state = SessionState {
        favorites: store.favorites().clone(),
        cart: store.cart_lines(),
    };
    state.save(path)?;
    Ok(())
}
