//! # Taiga Storefront Entry Point
//!
//! An interactive terminal storefront over taiga-core.
//!
//! ## Application Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Taiga Storefront                                 │
//! │                                                                         │
//! │  stdin ──► Session::run ──► Command::parse ──► Session::dispatch        │
//! │                                                      │                  │
//! │  ┌───────────────────────────────────────────────────┼───────────────┐  │
//! │  │                    This crate                     ▼               │  │
//! │  │                                                                   │  │
//! │  │  main.rs ────► Sets up logging, catalog, session loop            │  │
//! │  │                                                                   │  │
//! │  │  session.rs ─► add_to_cart, checkout, export, ...                │  │
//! │  │                                                                   │  │
//! │  │  catalog.rs ─► The six-product demo catalog                      │  │
//! │  │                                                                   │  │
//! │  │  render.rs ──► Catalog/cart tables, order summary                │  │
//! │  │                                                                   │  │
//! │  └───────────────────────────────────┬───────────────────────────────┘  │
//! │                                      │ plain function calls             │
//! │                                      ▼                                  │
//! │  ┌──────────────────────────────────────────────────────────────────┐   │
//! │  │                       taiga-core                                 │   │
//! │  │  Product, Cart, Customer, Order, receipt rendering               │   │
//! │  └──────────────────────────────────────────────────────────────────┘   │
//! │                                      │                                  │
//! │                                      ▼                                  │
//! │  stdout ◄── tables, receipts, replies      stderr ◄── tracing logs     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Startup Sequence
//! 1. Initialize tracing (logs to stderr)
//! 2. Build the sample catalog
//! 3. Greet the user and run the session loop on stdin/stdout
//! 4. Return when the user quits or input ends

mod catalog;
mod error;
mod render;
mod session;

use std::io;

use tracing::info;
use tracing_subscriber::EnvFilter;

use catalog::sample_catalog;
use session::Session;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let catalog = sample_catalog()?;
    info!(products = catalog.len(), "Catalog loaded");

    println!("Welcome to Taiga!");
    println!("Type 'help' for commands, 'quit' to leave.");
    println!();

    let mut session = Session::new(catalog);
    let stdin = io::stdin();
    session.run(stdin.lock(), &mut io::stdout())?;

    info!("Session ended");
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// Logs go to stderr so receipts and tables on stdout stay clean when
/// piped.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show per-command dispatch messages
/// - `RUST_LOG=taiga_storefront=trace` - Trace this crate only
/// - Default: INFO level
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
