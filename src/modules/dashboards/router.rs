use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::{dashboard, home};

pub fn init_home_router() -> Router<AppState> {
    Router::new().route("/", get(home))
}

/// Mounted under `/admin`, behind the admin gate.
pub fn init_admin_dashboard_router() -> Router<AppState> {
    Router::new().route("/dashboard", get(dashboard))
}

/// Mounted under `/enseignant`, behind the teacher gate.
pub fn init_teacher_dashboard_router() -> Router<AppState> {
    Router::new().route("/dashboard", get(dashboard))
}

/// Mounted under `/etudiant`, behind the student gate.
pub fn init_student_dashboard_router() -> Router<AppState> {
    Router::new().route("/dashboard", get(dashboard))
}
