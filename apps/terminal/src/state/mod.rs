//! # State Module
//!
//! Everything one session of the menu needs, owned in one place.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────┐  ┌──────────────────────┐  ┌──────────────────┐      │
//! │  │ ConfigState  │  │        Store         │  │    AdminAuth     │      │
//! │  │              │  │  Catalog             │  │                  │      │
//! │  │ store_name   │  │  Cart                │  │  shared secret   │      │
//! │  │ strict_admin │  │  Ledger              │  │                  │      │
//! │  └──────────────┘  └──────────────────────┘  └──────────────────┘      │
//! │                                                                         │
//! │  Single session, single thread: plain ownership, no Mutex.             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;

pub use config::{ConfigError, ConfigState};

use grocer_core::{AdminAuth, Store};

use crate::error::AppError;

#[derive(Debug)]
pub struct AppState {
    pub config: ConfigState,
    pub store: Store,
    pub auth: AdminAuth,
}

impl AppState {
    /// Builds the store (seeded or empty, per config) and the admin check.
    pub fn new(config: ConfigState) -> Result<Self, AppError> {
        let store = if config.seed_catalog {
            Store::seeded()?
        } else {
            Store::new()
        };
        let auth = AdminAuth::new(config.admin_password.clone());

        Ok(AppState {
            config,
            store,
            auth,
        })
    }
}
