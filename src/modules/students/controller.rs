use axum::{
    Extension, Form,
    extract::{Query, State},
    response::Response,
};
use tracing::instrument;

use presence_auth::SessionIdentity;
use presence_core::AppError;
use presence_models::views::{StudentFormView, StudentsView};

use crate::modules::programs::service::ProgramService;
use crate::modules::students::model::{CreateStudentForm, StudentFilterParams, UpdateStudentForm};
use crate::modules::students::service::StudentService;
use crate::state::AppState;
use crate::utils::flash::Flash;
use crate::utils::record_id::RecordId;
use crate::utils::paths;

#[instrument(skip_all, fields(program_id = ?filters.program_id))]
pub async fn list_students(
    State(state): State<AppState>,
    Query(filters): Query<StudentFilterParams>,
    flash: Flash,
) -> Response {
    let loaded = async {
        let students = StudentService::list_students(&state.db, filters).await?;
        let programs = ProgramService::list_all_programs(&state.db).await?;
        Ok::<_, AppError>((students, programs))
    };

    match loaded.await {
        Ok((students, programs)) => flash.render(|notice| StudentsView {
            notice,
            students,
            programs,
        }),
        Err(err) => flash.failure(paths::ADMIN_DASHBOARD, &err),
    }
}

#[instrument(skip_all)]
pub async fn new_student_form(State(state): State<AppState>, flash: Flash) -> Response {
    match ProgramService::list_all_programs(&state.db).await {
        Ok(programs) => flash.render(|notice| StudentFormView {
            notice,
            student: None,
            programs,
        }),
        Err(err) => flash.failure(paths::STUDENTS, &err),
    }
}

#[instrument(skip_all, fields(admin_id = admin.id()))]
pub async fn create_student(
    State(state): State<AppState>,
    Extension(admin): Extension<SessionIdentity>,
    flash: Flash,
    Form(form): Form<CreateStudentForm>,
) -> Response {
    match StudentService::create_student(&state.db, form).await {
        Ok(_) => flash.success(paths::STUDENTS, "Student added successfully"),
        Err(err) => flash.failure(paths::STUDENTS, &err),
    }
}

#[instrument(skip_all, fields(student_id = id))]
pub async fn edit_student_form(
    State(state): State<AppState>,
    RecordId(id): RecordId,
    flash: Flash,
) -> Response {
    let loaded = async {
        let student = StudentService::get_student(&state.db, id).await?;
        let programs = ProgramService::list_all_programs(&state.db).await?;
        Ok::<_, AppError>((student, programs))
    };

    match loaded.await {
        Ok((student, programs)) => flash.render(|notice| StudentFormView {
            notice,
            student: Some(student),
            programs,
        }),
        Err(err) => flash.failure(paths::STUDENTS, &err),
    }
}

#[instrument(skip_all, fields(admin_id = admin.id(), student_id = id))]
pub async fn update_student(
    State(state): State<AppState>,
    Extension(admin): Extension<SessionIdentity>,
    RecordId(id): RecordId,
    flash: Flash,
    Form(form): Form<UpdateStudentForm>,
) -> Response {
    match StudentService::update_student(&state.db, id, form).await {
        Ok(_) => flash.success(paths::STUDENTS, "Student updated successfully"),
        Err(err) => flash.failure(paths::STUDENTS, &err),
    }
}

#[instrument(skip_all, fields(admin_id = admin.id(), student_id = id))]
pub async fn delete_student(
    State(state): State<AppState>,
    Extension(admin): Extension<SessionIdentity>,
    RecordId(id): RecordId,
    flash: Flash,
) -> Response {
    match StudentService::delete_student(&state.db, id).await {
        Ok(_) => flash.success(paths::STUDENTS, "Student deleted successfully"),
        Err(err) => flash.failure(paths::STUDENTS, &err),
    }
}
