//! Session configuration.
//!
//! The session identity travels in an HttpOnly cookie holding a signed,
//! expiring token. The same secret signs the short-lived flash cookie.
//!
//! # Environment Variables
//!
//! - `SESSION_SECRET`: signing secret (default is for development only)
//! - `SESSION_EXPIRY`: session lifetime in seconds (default: 28800, 8 hours)
//! - `SESSION_COOKIE_SECURE`: mark cookies `Secure` (default: false)
//! - `STUDENT_LOGIN_REQUIRES_PASSWORD`: check the secret for student logins
//!   (default: false, which keeps the legacy matricule-only student login)

use std::env;

use crate::{env_flag, env_parse};

pub const SESSION_COOKIE: &str = "presence_session";
pub const FLASH_COOKIE: &str = "presence_flash";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionConfig {
    pub secret: String,
    pub expiry_seconds: i64,
    /// Lifetime of a flash notice that was never displayed.
    pub flash_expiry_seconds: i64,
    pub secure_cookies: bool,
    pub student_login_requires_password: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            secret: "presence-dev-secret-change-in-production".to_string(),
            expiry_seconds: 28_800,
            flash_expiry_seconds: 300,
            secure_cookies: false,
            student_login_requires_password: false,
        }
    }
}

impl SessionConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            secret: env::var("SESSION_SECRET").unwrap_or(defaults.secret),
            expiry_seconds: env_parse("SESSION_EXPIRY").unwrap_or(defaults.expiry_seconds),
            flash_expiry_seconds: defaults.flash_expiry_seconds,
            secure_cookies: env_flag("SESSION_COOKIE_SECURE").unwrap_or(defaults.secure_cookies),
            student_login_requires_password: env_flag("STUDENT_LOGIN_REQUIRES_PASSWORD")
                .unwrap_or(defaults.student_login_requires_password),
        }
    }
}
