//! # Auth Commands
//!
//! Gatekeeper for the admin menu.

use tracing::{debug, info, warn};

use grocer_core::AdminAuth;

use crate::error::ApiError;

/// Checks the admin password.
pub fn admin_login(auth: &AdminAuth, password: &str) -> Result<(), ApiError> {
    debug!("admin_login command");

    if auth.authenticate(password) {
        info!("Admin logged in");
        Ok(())
    } else {
        warn!("Admin login rejected");
        Err(ApiError::unauthorized())
    }
}
