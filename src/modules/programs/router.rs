use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

use super::controller::{
    create_program, delete_program, edit_program_form, list_programs, new_program_form,
    update_program,
};

/// Programs are listed and created under their department, then edited
/// and deleted by their own id.
pub fn init_programs_router() -> Router<AppState> {
    Router::new()
        .route("/departements/{id}/filieres", get(list_programs))
        .route(
            "/departements/{id}/filieres/add",
            get(new_program_form).post(create_program),
        )
        .route(
            "/filieres/{id}/edit",
            get(edit_program_form).post(update_program),
        )
        .route("/filieres/{id}/delete", post(delete_program))
}
