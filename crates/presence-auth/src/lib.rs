//! # Presence Auth
//!
//! Session identity types and the signed tokens stored in cookies.
//!
//! - [`claims`]: the tagged [`Principal`], [`SessionIdentity`] and the
//!   token claim structures
//! - [`token`]: creation and verification of session and flash tokens
//!
//! A session token is an HS256 JWT carrying `{type, id, name}`. It is
//! created at login, read by every gated request and discarded at logout or
//! when it expires. Nothing about it is stored in the database.
//!
//! # Example
//!
//! ```ignore
//! use presence_auth::{Principal, SessionIdentity, create_session_token, verify_session_token};
//! use presence_config::SessionConfig;
//!
//! let config = SessionConfig::from_env();
//! let identity = SessionIdentity::new(Principal::Admin(1), "Root");
//! let token = create_session_token(&identity, &config)?;
//! assert_eq!(verify_session_token(&token, &config)?, identity);
//! ```

pub mod claims;
pub mod token;

pub use claims::{FlashClaims, Notice, NoticeLevel, Principal, SessionClaims, SessionIdentity, UserKind};
pub use token::{create_flash_token, create_session_token, verify_flash_token, verify_session_token};
