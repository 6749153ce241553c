//! # Presence CLI
//!
//! Administrator creation and database seeding for development and
//! testing.
//!
//! ## Usage
//!
//! ```ignore
//! use presence_cli::seeder::{seed_all, SeedConfig};
//!
//! let config = SeedConfig::new(4); // 4 departments with defaults
//! seed_all(&pool, config).await?;
//! ```

pub mod admin;
pub mod seeder;
