use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

use super::controller::{
    create_course, delete_course, edit_course_form, list_courses, new_course_form, update_course,
};

pub fn init_courses_router() -> Router<AppState> {
    Router::new()
        .route("/filieres/{id}/matieres", get(list_courses))
        .route(
            "/filieres/{id}/matieres/add",
            get(new_course_form).post(create_course),
        )
        .route(
            "/matieres/{id}/edit",
            get(edit_course_form).post(update_course),
        )
        .route("/matieres/{id}/delete", post(delete_course))
}
