use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

use super::controller::{
    create_student, delete_student, edit_student_form, list_students, new_student_form,
    update_student,
};

/// Note the singular `/student/edit/{id}`: the console's edit links use it.
pub fn init_students_router() -> Router<AppState> {
    Router::new()
        .route("/students", get(list_students))
        .route("/students/add", get(new_student_form).post(create_student))
        .route(
            "/student/edit/{id}",
            get(edit_student_form).post(update_student),
        )
        .route("/students/delete/{id}", post(delete_student))
}
