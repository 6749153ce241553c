use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

use super::controller::{
    create_teacher, delete_teacher, edit_teacher_form, list_teachers, new_teacher_form,
    update_teacher,
};

pub fn init_teachers_router() -> Router<AppState> {
    Router::new()
        .route("/teachers", get(list_teachers))
        .route("/teachers/add", get(new_teacher_form).post(create_teacher))
        .route(
            "/teachers/edit/{id}",
            get(edit_teacher_form).post(update_teacher),
        )
        .route("/teachers/delete/{id}", post(delete_teacher))
}
