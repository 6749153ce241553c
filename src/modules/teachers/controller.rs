use axum::{
    Extension, Form,
    extract::{Query, State},
    response::Response,
};
use tracing::instrument;

use presence_auth::SessionIdentity;
use presence_core::AppError;
use presence_models::views::{TeacherFormView, TeachersView};

use crate::modules::departments::service::DepartmentService;
use crate::modules::teachers::model::{CreateTeacherForm, TeacherFilterParams, UpdateTeacherForm};
use crate::modules::teachers::service::TeacherService;
use crate::state::AppState;
use crate::utils::flash::Flash;
use crate::utils::record_id::RecordId;
use crate::utils::paths;

#[instrument(skip_all, fields(department_id = ?filters.department_id))]
pub async fn list_teachers(
    State(state): State<AppState>,
    Query(filters): Query<TeacherFilterParams>,
    flash: Flash,
) -> Response {
    match TeacherService::list_teachers(&state.db, filters).await {
        Ok(teachers) => flash.render(|notice| TeachersView { notice, teachers }),
        Err(err) => flash.failure(paths::ADMIN_DASHBOARD, &err),
    }
}

#[instrument(skip_all)]
pub async fn new_teacher_form(State(state): State<AppState>, flash: Flash) -> Response {
    match DepartmentService::list_departments(&state.db).await {
        Ok(departments) => flash.render(|notice| TeacherFormView {
            notice,
            teacher: None,
            departments,
        }),
        Err(err) => flash.failure(paths::TEACHERS, &err),
    }
}

#[instrument(skip_all, fields(admin_id = admin.id()))]
pub async fn create_teacher(
    State(state): State<AppState>,
    Extension(admin): Extension<SessionIdentity>,
    flash: Flash,
    Form(form): Form<CreateTeacherForm>,
) -> Response {
    match TeacherService::create_teacher(&state.db, form).await {
        Ok(_) => flash.success(paths::TEACHERS, "Teacher added successfully"),
        Err(err) => flash.failure(paths::TEACHERS, &err),
    }
}

#[instrument(skip_all, fields(teacher_id = id))]
pub async fn edit_teacher_form(
    State(state): State<AppState>,
    RecordId(id): RecordId,
    flash: Flash,
) -> Response {
    let loaded = async {
        let teacher = TeacherService::get_teacher(&state.db, id).await?;
        let departments = DepartmentService::list_departments(&state.db).await?;
        Ok::<_, AppError>((teacher, departments))
    };

    match loaded.await {
        Ok((teacher, departments)) => flash.render(|notice| TeacherFormView {
            notice,
            teacher: Some(teacher),
            departments,
        }),
        Err(err) => flash.failure(paths::TEACHERS, &err),
    }
}

#[instrument(skip_all, fields(admin_id = admin.id(), teacher_id = id))]
pub async fn update_teacher(
    State(state): State<AppState>,
    Extension(admin): Extension<SessionIdentity>,
    RecordId(id): RecordId,
    flash: Flash,
    Form(form): Form<UpdateTeacherForm>,
) -> Response {
    match TeacherService::update_teacher(&state.db, id, form).await {
        Ok(_) => flash.success(paths::TEACHERS, "Teacher updated successfully"),
        Err(err) => flash.failure(paths::TEACHERS, &err),
    }
}

#[instrument(skip_all, fields(admin_id = admin.id(), teacher_id = id))]
pub async fn delete_teacher(
    State(state): State<AppState>,
    Extension(admin): Extension<SessionIdentity>,
    RecordId(id): RecordId,
    flash: Flash,
) -> Response {
    match TeacherService::delete_teacher(&state.db, id).await {
        Ok(_) => flash.success(paths::TEACHERS, "Teacher deleted successfully"),
        Err(err) => flash.failure(paths::TEACHERS, &err),
    }
}
