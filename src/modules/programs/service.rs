use sqlx::PgPool;
use tracing::{debug, info, instrument, warn};
use validator::Validate;

use presence_core::{
    AppError,
    forms::{optional_id, required_text},
};
use presence_db::{classify, classify_delete, storage_error};

use crate::modules::departments::model::Department;
use crate::modules::departments::service::DepartmentService;
use crate::modules::programs::model::{Program, ProgramForm};

const DUPLICATE_MESSAGE: &str = "This program already exists";
const NAME_REQUIRED: &str = "Program name is required";
const STUDENTS_ENROLLED: &str = "Cannot delete this program because students are enrolled in it";

/// Outcome of a program delete: the removed record and how many of its
/// courses went with it.
#[derive(Debug)]
pub struct DeletedProgram {
    pub program: Program,
    pub courses_deleted: u64,
}

pub struct ProgramService;

impl ProgramService {
    /// Lists the programs of one department, failing if it does not exist.
    #[instrument(skip(db))]
    pub async fn list_programs(
        db: &PgPool,
        department_id: i32,
    ) -> Result<(Department, Vec<Program>), AppError> {
        let department = DepartmentService::get_department(db, department_id).await?;

        let programs = sqlx::query_as::<_, Program>(
            "SELECT id, name, department_id FROM programs WHERE department_id = $1 ORDER BY id",
        )
        .bind(department_id)
        .fetch_all(db)
        .await
        .map_err(storage_error)?;

        debug!(count = programs.len(), "Listed programs");
        Ok((department, programs))
    }

    /// Every program, for the student form's program picker.
    #[instrument(skip(db))]
    pub async fn list_all_programs(db: &PgPool) -> Result<Vec<Program>, AppError> {
        sqlx::query_as::<_, Program>("SELECT id, name, department_id FROM programs ORDER BY id")
            .fetch_all(db)
            .await
            .map_err(storage_error)
    }

    #[instrument(skip(db))]
    pub async fn get_program(db: &PgPool, id: i32) -> Result<Program, AppError> {
        sqlx::query_as::<_, Program>("SELECT id, name, department_id FROM programs WHERE id = $1")
            .bind(id)
            .fetch_optional(db)
            .await
            .map_err(storage_error)?
            .ok_or_else(|| AppError::not_found("Program not found"))
    }

    #[instrument(skip(db, form), fields(db.operation = "INSERT", db.table = "programs"))]
    pub async fn create_program(
        db: &PgPool,
        department_id: i32,
        form: ProgramForm,
    ) -> Result<Program, AppError> {
        form.validate()?;
        let name = required_text(form.name, NAME_REQUIRED)?;

        let mut tx = db.begin().await.map_err(storage_error)?;
        let program = sqlx::query_as::<_, Program>(
            r#"INSERT INTO programs (name, department_id)
               VALUES ($1, $2)
               RETURNING id, name, department_id"#,
        )
        .bind(&name)
        .bind(department_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| classify(e, DUPLICATE_MESSAGE))?;
        tx.commit().await.map_err(|e| classify(e, DUPLICATE_MESSAGE))?;

        info!(program_id = program.id, department_id, name = %program.name, "Program created");
        Ok(program)
    }

    /// Renames a program and, when `id_departement` is submitted, moves it
    /// to that department.
    #[instrument(skip(db, form), fields(db.operation = "UPDATE", db.table = "programs"))]
    pub async fn update_program(
        db: &PgPool,
        id: i32,
        form: ProgramForm,
    ) -> Result<Program, AppError> {
        form.validate()?;
        let name = required_text(form.name, NAME_REQUIRED)?;
        let new_department = optional_id("department", form.department_id.as_deref())?;

        let mut tx = db.begin().await.map_err(storage_error)?;
        let existing = sqlx::query_as::<_, Program>(
            "SELECT id, name, department_id FROM programs WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(storage_error)?
        .ok_or_else(|| AppError::not_found("Program not found"))?;

        let program = sqlx::query_as::<_, Program>(
            r#"UPDATE programs SET name = $1, department_id = $2
               WHERE id = $3
               RETURNING id, name, department_id"#,
        )
        .bind(&name)
        .bind(new_department.unwrap_or(existing.department_id))
        .bind(id)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| classify(e, DUPLICATE_MESSAGE))?;
        tx.commit().await.map_err(|e| classify(e, DUPLICATE_MESSAGE))?;

        info!(program_id = id, department_id = program.department_id, "Program updated");
        Ok(program)
    }

    /// Deletes a program together with its courses.
    ///
    /// Refused while any student is enrolled in the program.
    #[instrument(skip(db), fields(db.operation = "DELETE", db.table = "programs"))]
    pub async fn delete_program(db: &PgPool, id: i32) -> Result<DeletedProgram, AppError> {
        let mut tx = db.begin().await.map_err(storage_error)?;

        let program = sqlx::query_as::<_, Program>(
            "SELECT id, name, department_id FROM programs WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(storage_error)?
        .ok_or_else(|| AppError::not_found("Program not found"))?;

        let students: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM students WHERE program_id = $1")
                .bind(id)
                .fetch_one(&mut *tx)
                .await
                .map_err(storage_error)?;
        if students > 0 {
            warn!(program_id = id, students, "Program still has enrolled students");
            return Err(AppError::referential_integrity(STUDENTS_ENROLLED));
        }

        let courses_deleted = sqlx::query("DELETE FROM courses WHERE program_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(storage_error)?
            .rows_affected();

        sqlx::query("DELETE FROM programs WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|e| classify_delete(e, STUDENTS_ENROLLED))?;
        tx.commit().await.map_err(storage_error)?;

        info!(program_id = id, courses_deleted, "Program deleted");
        Ok(DeletedProgram {
            program,
            courses_deleted,
        })
    }
}
