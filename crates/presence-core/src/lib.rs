//! # Presence Core
//!
//! Core types shared by every crate of the attendance console:
//!
//! - [`errors`]: the application error taxonomy
//! - [`forms`]: helpers turning raw form fields into typed values
//! - [`serde`]: custom deserializers for query strings
//!
//! # Example
//!
//! ```ignore
//! use presence_core::{AppError, forms::required_id};
//!
//! let department_id = required_id("department", Some("3"))?;
//! if department_id < 1 {
//!     return Err(AppError::not_found("Department not found"));
//! }
//! ```

pub mod errors;
pub mod forms;
pub mod serde;

pub use errors::{AppError, ErrorKind};
