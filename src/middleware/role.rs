//! Session gate.
//!
//! Each gate accepts a request only when the session cookie holds a
//! principal of the required kind. On success the [`SessionIdentity`] is
//! inserted as a request extension for handlers to read; otherwise the
//! request is redirected to the login page with an access-denied notice.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use axum_extra::extract::cookie::CookieJar;
use tracing::warn;

use presence_auth::{Principal, SessionIdentity, UserKind};
use presence_core::AppError;

use crate::middleware::session::session_from_jar;
use crate::state::AppState;
use crate::utils::flash::Flash;
use crate::utils::paths;

/// True when `principal` is of the `required` kind.
pub fn is_allowed(principal: &Principal, required: UserKind) -> bool {
    matches!(
        (principal, required),
        (Principal::Admin(_), UserKind::Admin)
            | (Principal::Teacher(_), UserKind::Teacher)
            | (Principal::Student(_), UserKind::Student)
    )
}

fn denial_for(required: UserKind) -> AppError {
    match required {
        UserKind::Admin => AppError::access_denied(),
        UserKind::Teacher => AppError::AccessDenied("Access reserved to teachers".to_string()),
        UserKind::Student => AppError::AccessDenied("Access reserved to students".to_string()),
    }
}

async fn require_kind(state: &AppState, mut req: Request, next: Next, required: UserKind) -> Response {
    let jar = CookieJar::from_headers(req.headers());

    match session_from_jar(&jar, &state.session_config) {
        Some(identity) if is_allowed(&identity.principal, required) => {
            req.extensions_mut().insert::<SessionIdentity>(identity);
            next.run(req).await
        }
        other => {
            warn!(
                path = %req.uri().path(),
                required = required.as_str(),
                found = ?other.as_ref().map(|identity| identity.kind()),
                "Session gate denied request"
            );
            Flash::new(jar, state.session_config.clone())
                .failure(paths::LOGIN, &denial_for(required))
        }
    }
}

pub async fn require_admin(State(state): State<AppState>, req: Request, next: Next) -> Response {
    require_kind(&state, req, next, UserKind::Admin).await
}

pub async fn require_teacher(State(state): State<AppState>, req: Request, next: Next) -> Response {
    require_kind(&state, req, next, UserKind::Teacher).await
}

pub async fn require_student(State(state): State<AppState>, req: Request, next: Next) -> Response {
    require_kind(&state, req, next, UserKind::Student).await
}
