//! Session cookie handling.
//!
//! The session is an HttpOnly cookie holding a signed token that encodes
//! the [`SessionIdentity`]. A missing, forged or expired cookie reads as
//! "no session".

use std::convert::Infallible;

use axum::{extract::FromRequestParts, http::request::Parts};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};

use presence_auth::{SessionIdentity, verify_session_token};
use presence_config::{SESSION_COOKIE, SessionConfig};

use crate::state::AppState;

/// Identity recovered from the session cookie, if any. Never rejects.
#[derive(Debug, Clone)]
pub struct CurrentSession(pub Option<SessionIdentity>);

impl FromRequestParts<AppState> for CurrentSession {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        Ok(Self(session_from_jar(&jar, &state.session_config)))
    }
}

pub fn session_from_jar(jar: &CookieJar, config: &SessionConfig) -> Option<SessionIdentity> {
    let cookie = jar.get(SESSION_COOKIE)?;
    verify_session_token(cookie.value(), config).ok()
}

pub fn with_session(jar: CookieJar, token: String, config: &SessionConfig) -> CookieJar {
    jar.add(
        Cookie::build((SESSION_COOKIE, token))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .secure(config.secure_cookies),
    )
}

pub fn without_session(jar: CookieJar) -> CookieJar {
    jar.remove(Cookie::build(SESSION_COOKIE).path("/"))
}
