use sqlx::PgPool;
use tracing::{debug, info, instrument};
use validator::Validate;

use presence_core::{
    AppError,
    forms::{optional_id, required_text, submitted},
};
use presence_db::{classify, storage_error};

use crate::modules::courses::model::{Course, CourseForm};
use crate::modules::programs::model::Program;
use crate::modules::programs::service::ProgramService;

const DUPLICATE_MESSAGE: &str = "This course already exists";
const NAME_REQUIRED: &str = "Course name is required";

pub struct CourseService;

impl CourseService {
    #[instrument(skip(db))]
    pub async fn list_courses(
        db: &PgPool,
        program_id: i32,
    ) -> Result<(Program, Vec<Course>), AppError> {
        let program = ProgramService::get_program(db, program_id).await?;

        let courses = sqlx::query_as::<_, Course>(
            "SELECT id, name, code, program_id FROM courses WHERE program_id = $1 ORDER BY id",
        )
        .bind(program_id)
        .fetch_all(db)
        .await
        .map_err(storage_error)?;

        debug!(count = courses.len(), "Listed courses");
        Ok((program, courses))
    }

    #[instrument(skip(db))]
    pub async fn get_course(db: &PgPool, id: i32) -> Result<Course, AppError> {
        sqlx::query_as::<_, Course>("SELECT id, name, code, program_id FROM courses WHERE id = $1")
            .bind(id)
            .fetch_optional(db)
            .await
            .map_err(storage_error)?
            .ok_or_else(|| AppError::not_found("Course not found"))
    }

    #[instrument(skip(db, form), fields(db.operation = "INSERT", db.table = "courses"))]
    pub async fn create_course(
        db: &PgPool,
        program_id: i32,
        form: CourseForm,
    ) -> Result<Course, AppError> {
        form.validate()?;
        let name = required_text(form.name, NAME_REQUIRED)?;
        let code = submitted(form.code.as_deref()).map(str::to_string);

        let mut tx = db.begin().await.map_err(storage_error)?;
        let course = sqlx::query_as::<_, Course>(
            r#"INSERT INTO courses (name, code, program_id)
               VALUES ($1, $2, $3)
               RETURNING id, name, code, program_id"#,
        )
        .bind(&name)
        .bind(&code)
        .bind(program_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| classify(e, DUPLICATE_MESSAGE))?;
        tx.commit().await.map_err(|e| classify(e, DUPLICATE_MESSAGE))?;

        info!(course_id = course.id, program_id, name = %course.name, "Course created");
        Ok(course)
    }

    /// Updates name and code. An absent code keeps the stored one, a blank
    /// code clears it; a submitted `id_filiere` moves the course to that
    /// program.
    #[instrument(skip(db, form), fields(db.operation = "UPDATE", db.table = "courses"))]
    pub async fn update_course(db: &PgPool, id: i32, form: CourseForm) -> Result<Course, AppError> {
        form.validate()?;
        let name = required_text(form.name, NAME_REQUIRED)?;
        let new_program = optional_id("program", form.program_id.as_deref())?;

        let mut tx = db.begin().await.map_err(storage_error)?;
        let existing = sqlx::query_as::<_, Course>(
            "SELECT id, name, code, program_id FROM courses WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(storage_error)?
        .ok_or_else(|| AppError::not_found("Course not found"))?;

        let code = match form.code {
            Some(code) => submitted(Some(&code)).map(str::to_string),
            None => existing.code,
        };

        let course = sqlx::query_as::<_, Course>(
            r#"UPDATE courses SET name = $1, code = $2, program_id = $3
               WHERE id = $4
               RETURNING id, name, code, program_id"#,
        )
        .bind(&name)
        .bind(&code)
        .bind(new_program.unwrap_or(existing.program_id))
        .bind(id)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| classify(e, DUPLICATE_MESSAGE))?;
        tx.commit().await.map_err(|e| classify(e, DUPLICATE_MESSAGE))?;

        info!(course_id = id, program_id = course.program_id, "Course updated");
        Ok(course)
    }

    #[instrument(skip(db), fields(db.operation = "DELETE", db.table = "courses"))]
    pub async fn delete_course(db: &PgPool, id: i32) -> Result<Course, AppError> {
        let mut tx = db.begin().await.map_err(storage_error)?;
        let course = sqlx::query_as::<_, Course>(
            "DELETE FROM courses WHERE id = $1 RETURNING id, name, code, program_id",
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(storage_error)?
        .ok_or_else(|| AppError::not_found("Course not found"))?;
        tx.commit().await.map_err(storage_error)?;

        info!(course_id = id, program_id = course.program_id, "Course deleted");
        Ok(course)
    }
}
