use axum::{
    Extension, Form,
    extract::State,
    response::Response,
};
use tracing::instrument;

use presence_auth::SessionIdentity;
use presence_core::AppError;
use presence_models::views::{ProgramFormView, ProgramsView};

use crate::modules::departments::service::DepartmentService;
use crate::modules::programs::model::ProgramForm;
use crate::modules::programs::service::ProgramService;
use crate::state::AppState;
use crate::utils::flash::Flash;
use crate::utils::record_id::RecordId;
use crate::utils::paths;

#[instrument(skip_all, fields(department_id = department_id))]
pub async fn list_programs(
    State(state): State<AppState>,
    RecordId(department_id): RecordId,
    flash: Flash,
) -> Response {
    match ProgramService::list_programs(&state.db, department_id).await {
        Ok((department, programs)) => flash.render(|notice| ProgramsView {
            notice,
            department,
            programs,
        }),
        Err(err) => flash.failure(paths::DEPARTMENTS, &err),
    }
}

#[instrument(skip_all, fields(department_id = department_id))]
pub async fn new_program_form(
    State(state): State<AppState>,
    RecordId(department_id): RecordId,
    flash: Flash,
) -> Response {
    match DepartmentService::get_department(&state.db, department_id).await {
        Ok(department) => flash.render(|notice| ProgramFormView {
            notice,
            department,
            program: None,
            departments: Vec::new(),
        }),
        Err(err) => flash.failure(paths::DEPARTMENTS, &err),
    }
}

#[instrument(skip_all, fields(admin_id = admin.id(), department_id = department_id))]
pub async fn create_program(
    State(state): State<AppState>,
    Extension(admin): Extension<SessionIdentity>,
    RecordId(department_id): RecordId,
    flash: Flash,
    Form(form): Form<ProgramForm>,
) -> Response {
    let target = paths::department_programs(department_id);
    match ProgramService::create_program(&state.db, department_id, form).await {
        Ok(_) => flash.success(&target, "Program added successfully"),
        Err(err) => flash.failure(&target, &err),
    }
}

#[instrument(skip_all, fields(program_id = id))]
pub async fn edit_program_form(
    State(state): State<AppState>,
    RecordId(id): RecordId,
    flash: Flash,
) -> Response {
    let loaded = async {
        let program = ProgramService::get_program(&state.db, id).await?;
        let department = DepartmentService::get_department(&state.db, program.department_id).await?;
        let departments = DepartmentService::list_departments(&state.db).await?;
        Ok::<_, AppError>((program, department, departments))
    };

    match loaded.await {
        Ok((program, department, departments)) => flash.render(|notice| ProgramFormView {
            notice,
            department,
            program: Some(program),
            departments,
        }),
        Err(err) => flash.failure(paths::DEPARTMENTS, &err),
    }
}

#[instrument(skip_all, fields(admin_id = admin.id(), program_id = id))]
pub async fn update_program(
    State(state): State<AppState>,
    Extension(admin): Extension<SessionIdentity>,
    RecordId(id): RecordId,
    flash: Flash,
    Form(form): Form<ProgramForm>,
) -> Response {
    match ProgramService::update_program(&state.db, id, form).await {
        Ok(program) => flash.success(
            &paths::department_programs(program.department_id),
            "Program updated successfully",
        ),
        Err(err) => {
            let target = owning_department_path(&state, id).await;
            flash.failure(&target, &err)
        }
    }
}

#[instrument(skip_all, fields(admin_id = admin.id(), program_id = id))]
pub async fn delete_program(
    State(state): State<AppState>,
    Extension(admin): Extension<SessionIdentity>,
    RecordId(id): RecordId,
    flash: Flash,
) -> Response {
    match ProgramService::delete_program(&state.db, id).await {
        Ok(deleted) => flash.success(
            &paths::department_programs(deleted.program.department_id),
            "Program deleted successfully",
        ),
        Err(err) => {
            let target = owning_department_path(&state, id).await;
            flash.failure(&target, &err)
        }
    }
}

/// Program list of the department owning `program_id`, or the department
/// list when the program is gone.
async fn owning_department_path(state: &AppState, program_id: i32) -> String {
    match ProgramService::get_program(&state.db, program_id).await {
        Ok(program) => paths::department_programs(program.department_id),
        Err(_) => paths::DEPARTMENTS.to_string(),
    }
}
