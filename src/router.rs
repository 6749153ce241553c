use axum::http::{HeaderValue, header};
use axum::{Router, middleware};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::logging::logging_middleware;
use crate::middleware::role::{require_admin, require_student, require_teacher};
use crate::modules::auth::init_auth_router;
use crate::modules::courses::init_courses_router;
use crate::modules::dashboards::{
    init_admin_dashboard_router, init_home_router, init_student_dashboard_router,
    init_teacher_dashboard_router,
};
use crate::modules::departments::init_departments_router;
use crate::modules::programs::init_programs_router;
use crate::modules::students::init_students_router;
use crate::modules::teachers::init_teachers_router;
use crate::state::AppState;

/// Every `/admin` route, before the gate is applied.
fn admin_routes() -> Router<AppState> {
    Router::new()
        .merge(init_admin_dashboard_router())
        .merge(init_departments_router())
        .merge(init_programs_router())
        .merge(init_courses_router())
        .merge(init_teachers_router())
        .merge(init_students_router())
}

pub fn init_router(state: AppState) -> Router {
    Router::new()
        .merge(init_home_router())
        .merge(init_auth_router())
        .nest(
            "/admin",
            admin_routes()
                .route_layer(middleware::from_fn_with_state(state.clone(), require_admin)),
        )
        .nest(
            "/enseignant",
            init_teacher_dashboard_router()
                .route_layer(middleware::from_fn_with_state(state.clone(), require_teacher)),
        )
        .nest(
            "/etudiant",
            init_student_dashboard_router()
                .route_layer(middleware::from_fn_with_state(state.clone(), require_student)),
        )
        .with_state(state)
        .layer(SetResponseHeaderLayer::overriding(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(logging_middleware))
}
