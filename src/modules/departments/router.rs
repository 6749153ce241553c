use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

use super::controller::{
    create_department, delete_department, edit_department_form, list_departments,
    new_department_form, update_department,
};

pub fn init_departments_router() -> Router<AppState> {
    Router::new()
        .route("/departements", get(list_departments))
        .route(
            "/departements/add",
            get(new_department_form).post(create_department),
        )
        .route(
            "/departements/{id}/edit",
            get(edit_department_form).post(update_department),
        )
        .route("/departements/delete/{id}", post(delete_department))
}
