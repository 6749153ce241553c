use axum::{
    Extension, Form,
    extract::State,
    response::Response,
};
use tracing::instrument;

use presence_auth::SessionIdentity;
use presence_models::views::{DepartmentFormView, DepartmentsView};

use crate::modules::departments::model::DepartmentForm;
use crate::modules::departments::service::DepartmentService;
use crate::state::AppState;
use crate::utils::flash::Flash;
use crate::utils::record_id::RecordId;
use crate::utils::paths;

#[instrument(skip_all)]
pub async fn list_departments(State(state): State<AppState>, flash: Flash) -> Response {
    match DepartmentService::list_departments(&state.db).await {
        Ok(departments) => flash.render(|notice| DepartmentsView {
            notice,
            departments,
        }),
        Err(err) => flash.failure(paths::ADMIN_DASHBOARD, &err),
    }
}

pub async fn new_department_form(flash: Flash) -> Response {
    flash.render(|notice| DepartmentFormView {
        notice,
        department: None,
    })
}

#[instrument(skip_all, fields(admin_id = admin.id()))]
pub async fn create_department(
    State(state): State<AppState>,
    Extension(admin): Extension<SessionIdentity>,
    flash: Flash,
    Form(form): Form<DepartmentForm>,
) -> Response {
    match DepartmentService::create_department(&state.db, form).await {
        Ok(_) => flash.success(paths::DEPARTMENTS, "Department added successfully"),
        Err(err) => flash.failure(paths::DEPARTMENTS, &err),
    }
}

#[instrument(skip_all, fields(department_id = id))]
pub async fn edit_department_form(
    State(state): State<AppState>,
    RecordId(id): RecordId,
    flash: Flash,
) -> Response {
    match DepartmentService::get_department(&state.db, id).await {
        Ok(department) => flash.render(|notice| DepartmentFormView {
            notice,
            department: Some(department),
        }),
        Err(err) => flash.failure(paths::DEPARTMENTS, &err),
    }
}

#[instrument(skip_all, fields(admin_id = admin.id(), department_id = id))]
pub async fn update_department(
    State(state): State<AppState>,
    Extension(admin): Extension<SessionIdentity>,
    RecordId(id): RecordId,
    flash: Flash,
    Form(form): Form<DepartmentForm>,
) -> Response {
    match DepartmentService::update_department(&state.db, id, form).await {
        Ok(_) => flash.success(paths::DEPARTMENTS, "Department updated successfully"),
        Err(err) => flash.failure(paths::DEPARTMENTS, &err),
    }
}

#[instrument(skip_all, fields(admin_id = admin.id(), department_id = id))]
pub async fn delete_department(
    State(state): State<AppState>,
    Extension(admin): Extension<SessionIdentity>,
    RecordId(id): RecordId,
    flash: Flash,
) -> Response {
    match DepartmentService::delete_department(&state.db, id).await {
        Ok(_) => flash.success(paths::DEPARTMENTS, "Department deleted successfully"),
        Err(err) => flash.failure(paths::DEPARTMENTS, &err),
    }
}
