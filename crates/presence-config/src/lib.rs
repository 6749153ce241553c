//! # Presence Config
//!
//! Configuration structures loaded from environment variables:
//!
//! - [`database`]: PostgreSQL connection settings
//! - [`session`]: session cookie signing and lifetime, student login policy
//! - [`server`]: listen address
//!
//! # Example
//!
//! ```ignore
//! use presence_config::{DatabaseConfig, ServerConfig, SessionConfig};
//!
//! let database = DatabaseConfig::from_env();
//! let session = SessionConfig::from_env();
//! let server = ServerConfig::from_env();
//! ```

pub mod database;
pub mod server;
pub mod session;

pub use database::DatabaseConfig;
pub use server::ServerConfig;
pub use session::{FLASH_COOKIE, SESSION_COOKIE, SessionConfig};

pub(crate) fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|v| v.trim().parse().ok())
}

pub(crate) fn env_flag(key: &str) -> Option<bool> {
    std::env::var(key)
        .ok()
        .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
}
