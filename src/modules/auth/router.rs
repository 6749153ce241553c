use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::{login, login_page, logout};

pub fn init_auth_router() -> Router<AppState> {
    Router::new()
        .route("/login", get(login_page).post(login))
        .route("/logout", get(logout))
}
