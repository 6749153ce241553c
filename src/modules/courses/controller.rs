use axum::{
    Extension, Form,
    extract::State,
    response::Response,
};
use tracing::instrument;

use presence_auth::SessionIdentity;
use presence_core::AppError;
use presence_models::views::{CourseFormView, CoursesView};

use crate::modules::courses::model::CourseForm;
use crate::modules::courses::service::CourseService;
use crate::modules::programs::service::ProgramService;
use crate::state::AppState;
use crate::utils::flash::Flash;
use crate::utils::record_id::RecordId;
use crate::utils::paths;

#[instrument(skip_all, fields(program_id = program_id))]
pub async fn list_courses(
    State(state): State<AppState>,
    RecordId(program_id): RecordId,
    flash: Flash,
) -> Response {
    match CourseService::list_courses(&state.db, program_id).await {
        Ok((program, courses)) => flash.render(|notice| CoursesView {
            notice,
            program,
            courses,
        }),
        Err(err) => flash.failure(paths::DEPARTMENTS, &err),
    }
}

#[instrument(skip_all, fields(program_id = program_id))]
pub async fn new_course_form(
    State(state): State<AppState>,
    RecordId(program_id): RecordId,
    flash: Flash,
) -> Response {
    match ProgramService::get_program(&state.db, program_id).await {
        Ok(program) => flash.render(|notice| CourseFormView {
            notice,
            program,
            course: None,
        }),
        Err(err) => flash.failure(paths::DEPARTMENTS, &err),
    }
}

#[instrument(skip_all, fields(admin_id = admin.id(), program_id = program_id))]
pub async fn create_course(
    State(state): State<AppState>,
    Extension(admin): Extension<SessionIdentity>,
    RecordId(program_id): RecordId,
    flash: Flash,
    Form(form): Form<CourseForm>,
) -> Response {
    let target = paths::program_courses(program_id);
    match CourseService::create_course(&state.db, program_id, form).await {
        Ok(_) => flash.success(&target, "Course added successfully"),
        Err(err) => flash.failure(&target, &err),
    }
}

#[instrument(skip_all, fields(course_id = id))]
pub async fn edit_course_form(
    State(state): State<AppState>,
    RecordId(id): RecordId,
    flash: Flash,
) -> Response {
    let loaded = async {
        let course = CourseService::get_course(&state.db, id).await?;
        let program = ProgramService::get_program(&state.db, course.program_id).await?;
        Ok::<_, AppError>((course, program))
    };

    match loaded.await {
        Ok((course, program)) => flash.render(|notice| CourseFormView {
            notice,
            program,
            course: Some(course),
        }),
        Err(err) => flash.failure(paths::DEPARTMENTS, &err),
    }
}

#[instrument(skip_all, fields(admin_id = admin.id(), course_id = id))]
pub async fn update_course(
    State(state): State<AppState>,
    Extension(admin): Extension<SessionIdentity>,
    RecordId(id): RecordId,
    flash: Flash,
    Form(form): Form<CourseForm>,
) -> Response {
    match CourseService::update_course(&state.db, id, form).await {
        Ok(course) => flash.success(
            &paths::program_courses(course.program_id),
            "Course updated successfully",
        ),
        Err(err) => {
            let target = owning_program_path(&state, id).await;
            flash.failure(&target, &err)
        }
    }
}

#[instrument(skip_all, fields(admin_id = admin.id(), course_id = id))]
pub async fn delete_course(
    State(state): State<AppState>,
    Extension(admin): Extension<SessionIdentity>,
    RecordId(id): RecordId,
    flash: Flash,
) -> Response {
    match CourseService::delete_course(&state.db, id).await {
        Ok(course) => flash.success(
            &paths::program_courses(course.program_id),
            "Course deleted successfully",
        ),
        Err(err) => flash.failure(paths::DEPARTMENTS, &err),
    }
}

async fn owning_program_path(state: &AppState, course_id: i32) -> String {
    match CourseService::get_course(&state.db, course_id).await {
        Ok(course) => paths::program_courses(course.program_id),
        Err(_) => paths::DEPARTMENTS.to_string(),
    }
}
