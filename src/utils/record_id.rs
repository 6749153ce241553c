//! Numeric record id taken from the URL.
//!
//! A segment that is not an `i32` redirects to the owning list with a
//! "not found" notice instead of axum's plain-text 400.

use axum::{
    extract::{FromRequestParts, MatchedPath, Path},
    http::request::Parts,
    response::Response,
};
use tracing::debug;

use presence_core::AppError;

use crate::state::AppState;
use crate::utils::flash::Flash;
use crate::utils::paths;

pub struct RecordId(pub i32);

impl FromRequestParts<AppState> for RecordId {
    type Rejection = Response;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        match Path::<i32>::from_request_parts(parts, state).await {
            Ok(Path(id)) => Ok(Self(id)),
            Err(rejection) => {
                let route = parts
                    .extensions
                    .get::<MatchedPath>()
                    .map(|p| p.as_str().to_string())
                    .unwrap_or_else(|| parts.uri.path().to_string());
                debug!(route = %route, reason = %rejection.body_text(), "Unusable record id");

                let (to, message) = missing_record(&route);
                let flash = match Flash::from_request_parts(parts, state).await {
                    Ok(flash) => flash,
                    Err(never) => match never {},
                };
                Err(flash.failure(to, &AppError::not_found(message)))
            }
        }
    }
}

/// List to fall back to, and the notice, for the resource a route addresses.
/// The resource is the first segment below `/admin`.
fn missing_record(route: &str) -> (&'static str, &'static str) {
    let resource = route
        .split('/')
        .find(|segment| !segment.is_empty() && *segment != "admin");

    match resource {
        Some("teachers") => (paths::TEACHERS, "Teacher not found"),
        Some("student" | "students") => (paths::STUDENTS, "Student not found"),
        Some("filieres") => (paths::DEPARTMENTS, "Program not found"),
        Some("matieres") => (paths::DEPARTMENTS, "Course not found"),
        _ => (paths::DEPARTMENTS, "Department not found"),
    }
}
