use axum::{Form, extract::State, response::Response};
use chrono::{Datelike, Utc};
use tracing::{info, instrument};
use validator::Validate;

use presence_auth::{SessionIdentity, create_session_token};
use presence_core::{AppError, forms::required_text};
use presence_models::views::HomeView;

use crate::middleware::session::{CurrentSession, with_session, without_session};
use crate::modules::auth::model::LoginForm;
use crate::modules::auth::service::AuthService;
use crate::state::AppState;
use crate::utils::flash::Flash;
use crate::utils::paths;

#[instrument(skip_all)]
pub async fn login_page(CurrentSession(current_user): CurrentSession, flash: Flash) -> Response {
    flash.render(|notice| HomeView {
        notice,
        current_user,
        current_year: Utc::now().year(),
    })
}

#[instrument(skip_all)]
pub async fn login(
    State(state): State<AppState>,
    flash: Flash,
    Form(form): Form<LoginForm>,
) -> Response {
    let identity = match authenticate(&state, form).await {
        Ok(identity) => identity,
        Err(err) => return flash.failure(paths::LOGIN, &err),
    };

    match create_session_token(&identity, &state.session_config) {
        Ok(token) => {
            let target = paths::dashboard_for(identity.kind());
            flash
                .map_jar(|jar| with_session(jar, token, &state.session_config))
                .success(target, format!("Welcome, {}", identity.name))
        }
        Err(err) => flash.failure(paths::LOGIN, &err),
    }
}

async fn authenticate(state: &AppState, form: LoginForm) -> Result<SessionIdentity, AppError> {
    form.validate()?;
    let identifier = required_text(form.username, "Identifier is required")?;
    let secret = form.password.unwrap_or_default();

    AuthService::authenticate(
        &state.db,
        &identifier,
        &secret,
        state.session_config.student_login_requires_password,
    )
    .await
}

#[instrument(skip_all)]
pub async fn logout(CurrentSession(current_user): CurrentSession, flash: Flash) -> Response {
    if let Some(identity) = current_user {
        info!(kind = identity.kind().as_str(), id = identity.id(), "Logged out");
    }
    flash
        .map_jar(without_session)
        .success(paths::LOGIN, "You have been logged out")
}
