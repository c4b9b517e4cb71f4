//! Cart Widget CLI - Drive the cart widget from a terminal.
//!
//! # Usage
//!
//! ```bash
//! # Add an item (acknowledgment waits for Enter)
//! cart-cli add "Widget" 9.99
//!
//! # Show the item count or the full cart
//! cart-cli count
//! cart-cli list
//!
//! # Scroll to the products section
//! cart-cli scroll
//!
//! # Submit a form (contents are discarded)
//! cart-cli submit --field email=ada@example.com --field message=Hi
//! ```
//!
//! The cart persists in the file named by `CART_STORAGE_PATH`
//! (default `.cart-storage.json`), see `cart_widget::config`.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use cart_widget::WidgetConfig;
use clap::{Parser, Subcommand};

mod commands;
mod terminal;

#[derive(Parser)]
#[command(name = "cart-cli")]
#[command(author, version, about = "Cart widget CLI")]
struct Cli {
    /// Backing storage file (overrides `CART_STORAGE_PATH`)
    #[arg(long, global = true)]
    storage: Option<PathBuf>,

    /// Log acknowledgments instead of waiting for Enter
    #[arg(short, long, global = true)]
    yes: bool,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add an item to the cart
    Add {
        /// Product name
        name: String,

        /// Product price
        #[arg(allow_negative_numbers = true)]
        price: f64,
    },
    /// Print the number of items in the cart
    Count,
    /// Print every item in the cart with the subtotal
    List,
    /// Scroll to the products section
    Scroll,
    /// Submit a form
    Submit {
        /// Form id
        #[arg(long, default_value = "contact")]
        form: String,

        /// Form field as `name=value` (repeatable)
        #[arg(short, long = "field", value_parser = commands::page::parse_field)]
        fields: Vec<(String, String)>,
    },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.json_logs);

    let result: Result<(), Box<dyn std::error::Error>> = run(cli);

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

/// Install the tracing subscriber, writing to stderr so stdout stays clean.
///
/// Defaults to info level for the widget crates if `RUST_LOG` is not set.
fn init_tracing(json: bool) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "cart_widget=info,cart_widget_cli=info".into());

    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = WidgetConfig::from_env()?;
    if let Some(path) = cli.storage {
        config.storage_path = path;
    }

    let mut session = commands::Session::open(&config, cli.yes)?;
    match cli.command {
        Commands::Add { name, price } => commands::cart::add(&mut session, &name, price)?,
        Commands::Count => commands::cart::count(&session)?,
        Commands::List => commands::cart::list(&session)?,
        Commands::Scroll => commands::page::scroll(&mut session)?,
        Commands::Submit { form, fields } => commands::page::submit(&mut session, &form, fields)?,
    }
    Ok(())
}
