//! # Admin Authentication
//!
//! A single shared admin secret, compared as plain text. No hashing, no
//! lockout.

/// Secret used when none is configured.
pub const DEFAULT_ADMIN_PASSWORD: &str = "admin123";

/// Checks admin passwords against one configured secret.
#[derive(Clone)]
pub struct AdminAuth {
    secret: String,
}

impl AdminAuth {
    pub fn new(secret: impl Into<String>) -> Self {
        AdminAuth {
            secret: secret.into(),
        }
    }

    /// Exact, case-sensitive comparison with the configured secret.
    ///
    /// ## Example
    /// ```rust
    /// use grocer_core::auth::AdminAuth;
    ///
    /// let auth = AdminAuth::default();
    /// assert!(auth.authenticate("admin123"));
    /// assert!(!auth.authenticate("ADMIN123"));
    /// ```
    pub fn authenticate(&self, password: &str) -> bool {
        password == self.secret
    }
}

impl Default for AdminAuth {
    fn default() -> Self {
        AdminAuth::new(DEFAULT_ADMIN_PASSWORD)
    }
}

// The secret stays out of debug output and logs.
impl std::fmt::Debug for AdminAuth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminAuth").field("secret", &"***").finish()
    }
}
