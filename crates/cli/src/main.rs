//! BuildMart CLI - Session, cart and catalog tools.
//!
//! Operates on the same local storage file as the storefront server, so a
//! session started here is picked up by the web UI and vice versa.
//!
//! # Usage
//!
//! ```bash
//! # Start a session
//! bm-cli login -e alice@example.com -u alice
//!
//! # List machines matching "mixer"
//! bm-cli products --category machine --search mixer
//!
//! # Add product 12 to the cart and show it
//! bm-cli cart add 12
//! bm-cli cart show
//! ```
//!
//! # Commands
//!
//! - `login`, `logout`, `whoami` - Manage the persisted session
//! - `products` - List the catalog
//! - `cart add`, `cart show` - Manage the cart
//! - `profile` - Update session display fields
//! - `theme toggle`, `theme show` - Dark mode flag

#![cfg_attr(not(test), forbid(unsafe_code))]

use buildmart_core::{Category, ProductId};
use buildmart_storefront::config::StorefrontConfig;
use buildmart_storefront::state::AppState;
use buildmart_storefront::stores::IdentityPolicy;
use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "bm-cli")]
#[command(author, version, about = "BuildMart CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start a new session
    Login {
        /// Email address
        #[arg(short, long)]
        email: String,

        /// Display name
        #[arg(short, long)]
        username: String,
    },
    /// End the current session (the cart is kept)
    Logout,
    /// Show the current session
    Whoami,
    /// List catalog products
    Products {
        /// Only list one category (`material`, `machine`, `worker`)
        #[arg(short, long)]
        category: Option<Category>,

        /// Case-insensitive name filter
        #[arg(short, long, default_value = "")]
        search: String,
    },
    /// Manage the cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Update the session's display fields
    Profile {
        /// Email address
        #[arg(short, long)]
        email: String,

        /// Display name
        #[arg(short, long)]
        username: String,

        /// Phone number (accepted but not stored)
        #[arg(short, long, default_value = "")]
        phone: String,

        /// Keep the current user id instead of issuing a new one
        #[arg(long)]
        keep_id: bool,
    },
    /// Manage the dark mode flag
    Theme {
        #[command(subcommand)]
        action: ThemeAction,
    },
}

#[derive(Subcommand)]
enum CartAction {
    /// Fetch the catalog and append a product to the cart
    Add {
        /// Product id
        product_id: ProductId,
    },
    /// Show cart contents and total
    Show,
}

#[derive(Subcommand)]
enum ThemeAction {
    /// Flip dark mode
    Toggle,
    /// Show whether dark mode is on
    Show,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "warn".into());
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let ctx = AppState::new(&StorefrontConfig::from_env()?);

    match cli.command {
        Commands::Login { email, username } => commands::session::login(&ctx, &email, &username)?,
        Commands::Logout => commands::session::logout(&ctx)?,
        Commands::Whoami => commands::session::whoami(&ctx)?,
        Commands::Products { category, search } => {
            commands::catalog::list(&ctx, category, &search).await?;
        }
        Commands::Cart { action } => match action {
            CartAction::Add { product_id } => commands::cart::add(&ctx, product_id).await?,
            CartAction::Show => commands::cart::show(&ctx)?,
        },
        Commands::Profile {
            email,
            username,
            phone,
            keep_id,
        } => {
            let policy = if keep_id {
                IdentityPolicy::Preserve
            } else {
                IdentityPolicy::Regenerate
            };
            commands::profile::update(&ctx, email, username, phone, policy)?;
        }
        Commands::Theme { action } => match action {
            ThemeAction::Toggle => commands::theme::toggle(&ctx)?,
            ThemeAction::Show => commands::theme::show(&ctx)?,
        },
    }
    Ok(())
}
