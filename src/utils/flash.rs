//! One-shot notices carried across the redirect that ends every POST.
//!
//! The notice rides in a signed cookie. The next GET view reads it, clears
//! the cookie and embeds the notice in its payload.

use std::convert::Infallible;

use axum::{
    Json,
    extract::FromRequestParts,
    http::request::Parts,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::Serialize;
use tracing::{error, warn};

use presence_auth::{Notice, create_flash_token, verify_flash_token};
use presence_config::{FLASH_COOKIE, SessionConfig};
use presence_core::AppError;

use crate::state::AppState;

pub struct Flash {
    jar: CookieJar,
    config: SessionConfig,
}

impl FromRequestParts<AppState> for Flash {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(Self::new(
            CookieJar::from_headers(&parts.headers),
            state.session_config.clone(),
        ))
    }
}

impl Flash {
    pub fn new(jar: CookieJar, config: SessionConfig) -> Self {
        Self { jar, config }
    }

    pub fn jar(&self) -> &CookieJar {
        &self.jar
    }

    /// Applies a change to the outgoing cookie jar (session set/clear).
    pub fn map_jar(self, f: impl FnOnce(CookieJar) -> CookieJar) -> Self {
        Self {
            jar: f(self.jar),
            config: self.config,
        }
    }

    /// Reads the pending notice and schedules the flash cookie for removal.
    /// A tampered or expired cookie is dropped without a notice.
    pub fn take_notice(self) -> (Self, Option<Notice>) {
        let Some(cookie) = self.jar.get(FLASH_COOKIE) else {
            return (self, None);
        };

        let notice = verify_flash_token(cookie.value(), &self.config);
        let jar = self.jar.remove(Cookie::build(FLASH_COOKIE).path("/"));
        (
            Self {
                jar,
                config: self.config,
            },
            notice,
        )
    }

    /// Renders a GET view as JSON, consuming the pending notice.
    pub fn render<T, F>(self, build: F) -> Response
    where
        T: Serialize,
        F: FnOnce(Option<Notice>) -> T,
    {
        let (flash, notice) = self.take_notice();
        (flash.jar, Json(build(notice))).into_response()
    }

    /// 303 redirect to `to` with `notice` queued for the next view.
    pub fn redirect(self, to: &str, notice: Notice) -> Response {
        match create_flash_token(&notice, &self.config) {
            Ok(token) => {
                let cookie = Cookie::build((FLASH_COOKIE, token))
                    .path("/")
                    .http_only(true)
                    .same_site(SameSite::Lax)
                    .secure(self.config.secure_cookies);
                (self.jar.add(cookie), Redirect::to(to)).into_response()
            }
            Err(err) => {
                error!(error = %err, "Failed to sign flash notice");
                (self.jar, Redirect::to(to)).into_response()
            }
        }
    }

    pub fn success(self, to: &str, message: impl Into<String>) -> Response {
        self.redirect(to, Notice::success(message))
    }

    /// Redirects with the error's text as notice. Never fails the request.
    pub fn failure(self, to: &str, err: &AppError) -> Response {
        if err.is_client_error() {
            warn!(kind = ?err.kind(), error = %err, redirect = %to, "Request rejected");
        } else {
            error!(error = %err, redirect = %to, "Request failed");
        }
        self.redirect(to, Notice::error(err.to_string()))
    }
}
