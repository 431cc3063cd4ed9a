//! # Configuration State
//!
//! Stores application configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`GROCER_*`)
//! 2. Defaults (this file)
//!
//! Configuration is read-only after initialization.

use serde::{Deserialize, Serialize};

use grocer_core::auth::DEFAULT_ADMIN_PASSWORD;

/// Application configuration.
#[derive(Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Banner shown on the main menu and on bills
    pub store_name: String,

    /// Shared admin secret
    #[serde(skip_serializing)]
    pub admin_password: String,

    /// Load the seed products at startup
    pub seed_catalog: bool,

    /// Reject negative prices / stock and empty names in the admin menu
    pub strict_admin: bool,

    /// Default tracing filter when `RUST_LOG` is unset
    pub log_filter: String,
}

impl Default for ConfigState {
    /// ## Default Values
    /// - Store: "GROCERY STORE"
    /// - Admin password: "admin123"
    /// - Seed catalog: on
    /// - Strict admin input: off
    /// - Log filter: "warn"
    fn default() -> Self {
        ConfigState {
            store_name: "GROCERY STORE".to_string(),
            admin_password: DEFAULT_ADMIN_PASSWORD.to_string(),
            seed_catalog: true,
            strict_admin: false,
            log_filter: "warn".to_string(),
        }
    }
}

impl ConfigState {
    /// Creates a new ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `GROCER_STORE_NAME`: Override store name
    /// - `GROCER_ADMIN_PASSWORD`: Override admin password
    /// - `GROCER_SEED`: `true`/`false`, load seed products
    /// - `GROCER_STRICT_ADMIN`: `true`/`false`, validate admin product input
    /// - `GROCER_LOG`: Default log filter (e.g. "info", "grocer_terminal=debug")
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ConfigState::from_env`] but reads variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ConfigState::default();

        if let Some(store_name) = lookup("GROCER_STORE_NAME") {
            config.store_name = store_name;
        }

        if let Some(password) = lookup("GROCER_ADMIN_PASSWORD") {
            if password.is_empty() {
                return Err(ConfigError::InvalidValue("GROCER_ADMIN_PASSWORD".to_string()));
            }
            config.admin_password = password;
        }

        if let Some(value) = lookup("GROCER_SEED") {
            config.seed_catalog = parse_flag("GROCER_SEED", &value)?;
        }

        if let Some(value) = lookup("GROCER_STRICT_ADMIN") {
            config.strict_admin = parse_flag("GROCER_STRICT_ADMIN", &value)?;
        }

        if let Some(filter) = lookup("GROCER_LOG") {
            config.log_filter = filter;
        }

        Ok(config)
    }
}

impl std::fmt::Debug for ConfigState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfigState")
            .field("store_name", &self.store_name)
            .field("admin_password", &"***")
            .field("seed_catalog", &self.seed_catalog)
            .field("strict_admin", &self.strict_admin)
            .field("log_filter", &self.log_filter)
            .finish()
    }
}

fn parse_flag(var: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue(var.to_string())),
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ConfigState::from_lookup(|_| None).unwrap();
        assert_eq!(config.store_name, "GROCERY STORE");
        assert_eq!(config.admin_password, "admin123");
        assert!(config.seed_catalog);
        assert!(!config.strict_admin);
        assert_eq!(config.log_filter, "warn");
    }

    #[test]
    fn test_overrides() {
        let config = ConfigState::from_lookup(lookup_from(&[
            ("GROCER_STORE_NAME", "Corner Shop"),
            ("GROCER_ADMIN_PASSWORD", "hunter2"),
            ("GROCER_SEED", "false"),
            ("GROCER_STRICT_ADMIN", "YES"),
            ("GROCER_LOG", "debug"),
        ]))
        .unwrap();

        assert_eq!(config.store_name, "Corner Shop");
        assert_eq!(config.admin_password, "hunter2");
        assert!(!config.seed_catalog);
        assert!(config.strict_admin);
        assert_eq!(config.log_filter, "debug");
    }

    #[test]
    fn test_invalid_flag() {
        let err = ConfigState::from_lookup(lookup_from(&[("GROCER_SEED", "maybe")])).unwrap_err();
        assert_eq!(err, ConfigError::InvalidValue("GROCER_SEED".to_string()));
        assert_eq!(err.to_string(), "Invalid value for GROCER_SEED");
    }

    #[test]
    fn test_empty_password_rejected() {
        let err =
            ConfigState::from_lookup(lookup_from(&[("GROCER_ADMIN_PASSWORD", "")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidValue("GROCER_ADMIN_PASSWORD".to_string())
        );
    }

    #[test]
    fn test_debug_hides_password() {
        let rendered = format!("{:?}", ConfigState::default());
        assert!(!rendered.contains("admin123"));
        assert!(rendered.contains("GROCERY STORE"));
    }
}
