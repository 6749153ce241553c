//! Signed cookie tokens.
//!
//! Both the session cookie and the flash cookie hold an HS256 JWT signed
//! with [`SessionConfig::secret`]. Signature and expiry are checked on every
//! read; a token that fails either check is treated as absent.

use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};

use presence_config::SessionConfig;
use presence_core::AppError;

use crate::claims::{FlashClaims, Notice, SessionClaims, SessionIdentity};

/// Signs a session token for `identity`, valid for `expiry_seconds`.
pub fn create_session_token(
    identity: &SessionIdentity,
    config: &SessionConfig,
) -> Result<String, AppError> {
    let now = Utc::now().timestamp() as usize;
    let claims = SessionClaims {
        sub: identity.id(),
        kind: identity.kind(),
        name: identity.name.clone(),
        exp: now + config.expiry_seconds.max(0) as usize,
        iat: now,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
    .map_err(AppError::persistence)
}

/// Verifies a session token and rebuilds the identity it carries.
pub fn verify_session_token(
    token: &str,
    config: &SessionConfig,
) -> Result<SessionIdentity, AppError> {
    decode::<SessionClaims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims.identity())
    .map_err(|_| AppError::access_denied())
}

pub fn create_flash_token(notice: &Notice, config: &SessionConfig) -> Result<String, AppError> {
    let now = Utc::now().timestamp() as usize;
    let claims = FlashClaims {
        level: notice.level,
        message: notice.message.clone(),
        exp: now + config.flash_expiry_seconds.max(0) as usize,
        iat: now,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
    .map_err(AppError::persistence)
}

/// Returns the notice, or `None` for a tampered or stale flash cookie.
pub fn verify_flash_token(token: &str, config: &SessionConfig) -> Option<Notice> {
    decode::<FlashClaims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &Validation::default(),
    )
    .ok()
    .map(|data| data.claims.notice())
}
