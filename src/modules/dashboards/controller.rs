use axum::{Extension, response::Response};
use chrono::{Datelike, Utc};
use tracing::instrument;

use presence_auth::SessionIdentity;
use presence_models::views::{DashboardView, HomeView};

use crate::middleware::session::CurrentSession;
use crate::utils::flash::Flash;

#[instrument(skip_all)]
pub async fn home(CurrentSession(current_user): CurrentSession, flash: Flash) -> Response {
    flash.render(|notice| HomeView {
        notice,
        current_user,
        current_year: Utc::now().year(),
    })
}

/// Shared by the three role dashboards; the gate in front of each one
/// guarantees the identity has the right kind.
#[instrument(skip_all, fields(kind = identity.kind().as_str(), id = identity.id()))]
pub async fn dashboard(Extension(identity): Extension<SessionIdentity>, flash: Flash) -> Response {
    flash.render(|notice| DashboardView {
        notice,
        current_user: identity,
        current_year: Utc::now().year(),
    })
}
