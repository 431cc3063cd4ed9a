//! # Grocer Terminal Application
//!
//! Text-menu front end for the grocery store.
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Application Startup                               │
//! │                                                                         │
//! │  1. Load Configuration ──────────────────────────────────────────────► │
//! │     • GROCER_* environment variables over defaults                      │
//! │                                                                         │
//! │  2. Initialize Tracing ──────────────────────────────────────────────► │
//! │     • tracing-subscriber with env filter, written to stderr             │
//! │     • Default from GROCER_LOG, can be overridden with RUST_LOG          │
//! │                                                                         │
//! │  3. Build AppState ──────────────────────────────────────────────────► │
//! │     • Seeded (or empty) Store, admin secret                             │
//! │                                                                         │
//! │  4. Run Menu on stdin/stdout ────────────────────────────────────────► │
//! │     • Until "Exit" or end of input                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod commands;
pub mod error;
pub mod menu;
pub mod render;
pub mod state;

use std::io;

use tracing::info;
use tracing_subscriber::EnvFilter;

use error::AppError;
use menu::Menu;
use state::{AppState, ConfigState};

/// Runs one session of the store against the process's stdin and stdout.
pub fn run() -> Result<(), AppError> {
    let config = ConfigState::from_env()?;

    init_tracing(&config.log_filter);

    info!(store = %config.store_name, seeded = config.seed_catalog, strict = config.strict_admin, "Starting Grocer POS");

    let state = AppState::new(config)?;
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut menu = Menu::new(stdin.lock(), stdout.lock(), state);
    menu.run()?;

    let ledger = menu.state().store.ledger();
    info!(sales = ledger.len(), revenue = %ledger.total_revenue(), "Session ended");
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=grocer_terminal=debug` - Debug for the command layer only
/// - Otherwise `default_filter` (from `GROCER_LOG`)
fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    // A subscriber may already be installed when embedded; keep that one.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}
