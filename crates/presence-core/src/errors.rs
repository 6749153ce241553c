//! Application error taxonomy.
//!
//! Every failure the console can report falls into one of the variants of
//! [`AppError`]. None of them is fatal: controllers turn them into a
//! redirect carrying a flash notice built from the `Display` text.

use thiserror::Error;
use validator::ValidationErrors;

/// Generic login failure text. Never says which account kind was checked.
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Incorrect identifier or password";

/// Shown when a session does not carry the role a route requires.
pub const ACCESS_DENIED_MESSAGE: &str = "Access reserved to the administrator";

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{}", INVALID_CREDENTIALS_MESSAGE)]
    InvalidCredentials,

    #[error("{0}")]
    AccessDenied(String),

    /// A required field is missing or malformed.
    #[error("{0}")]
    Validation(String),

    /// A unique constraint was violated.
    #[error("{0}")]
    DuplicateKey(String),

    /// A delete was blocked by dependent records.
    #[error("{0}")]
    ReferentialIntegrity(String),

    #[error("{0}")]
    NotFound(String),

    /// Catch-all storage failure.
    #[error("Server error: {0}")]
    Persistence(anyhow::Error),
}

/// Discriminant of [`AppError`], handy for assertions and log fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidCredentials,
    AccessDenied,
    Validation,
    DuplicateKey,
    ReferentialIntegrity,
    NotFound,
    Persistence,
}

impl AppError {
    pub fn access_denied() -> Self {
        Self::AccessDenied(ACCESS_DENIED_MESSAGE.to_string())
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn duplicate_key(message: impl Into<String>) -> Self {
        Self::DuplicateKey(message.into())
    }

    pub fn referential_integrity(message: impl Into<String>) -> Self {
        Self::ReferentialIntegrity(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn persistence<E>(err: E) -> Self
    where
        E: Into<anyhow::Error>,
    {
        Self::Persistence(err.into())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidCredentials => ErrorKind::InvalidCredentials,
            Self::AccessDenied(_) => ErrorKind::AccessDenied,
            Self::Validation(_) => ErrorKind::Validation,
            Self::DuplicateKey(_) => ErrorKind::DuplicateKey,
            Self::ReferentialIntegrity(_) => ErrorKind::ReferentialIntegrity,
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::Persistence(_) => ErrorKind::Persistence,
        }
    }

    /// True for failures caused by the request rather than the server.
    pub fn is_client_error(&self) -> bool {
        !matches!(self, Self::Persistence(_))
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let mut messages: Vec<String> = errors
            .field_errors()
            .iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |error| {
                    error
                        .message
                        .as_ref()
                        .map(|msg| msg.to_string())
                        .unwrap_or_else(|| format!("{} is required", field))
                })
            })
            .collect();
        messages.sort();
        messages.dedup();

        if messages.is_empty() {
            return Self::validation("Please fill in all required fields");
        }
        Self::validation(messages.join(", "))
    }
}
