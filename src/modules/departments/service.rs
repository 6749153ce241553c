use sqlx::PgPool;
use tracing::{debug, info, instrument, warn};
use validator::Validate;

use presence_core::{AppError, forms::required_text};
use presence_db::{classify, classify_delete, storage_error};

use crate::modules::departments::model::{Department, DepartmentForm};

const DUPLICATE_MESSAGE: &str = "This department already exists";
const NAME_REQUIRED: &str = "Department name is required";
const IN_USE_MESSAGE: &str = "Cannot delete this department because it contains programs or teachers";

pub struct DepartmentService;

impl DepartmentService {
    #[instrument(skip(db))]
    pub async fn list_departments(db: &PgPool) -> Result<Vec<Department>, AppError> {
        let departments =
            sqlx::query_as::<_, Department>("SELECT id, name FROM departments ORDER BY id")
                .fetch_all(db)
                .await
                .map_err(storage_error)?;

        debug!(count = departments.len(), "Listed departments");
        Ok(departments)
    }

    #[instrument(skip(db))]
    pub async fn get_department(db: &PgPool, id: i32) -> Result<Department, AppError> {
        sqlx::query_as::<_, Department>("SELECT id, name FROM departments WHERE id = $1")
            .bind(id)
            .fetch_optional(db)
            .await
            .map_err(storage_error)?
            .ok_or_else(|| AppError::not_found("Department not found"))
    }

    #[instrument(skip(db, form), fields(db.operation = "INSERT", db.table = "departments"))]
    pub async fn create_department(
        db: &PgPool,
        form: DepartmentForm,
    ) -> Result<Department, AppError> {
        form.validate()?;
        let name = required_text(form.name, NAME_REQUIRED)?;

        let mut tx = db.begin().await.map_err(storage_error)?;
        let department = sqlx::query_as::<_, Department>(
            "INSERT INTO departments (name) VALUES ($1) RETURNING id, name",
        )
        .bind(&name)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| classify(e, DUPLICATE_MESSAGE))?;
        tx.commit().await.map_err(|e| classify(e, DUPLICATE_MESSAGE))?;

        info!(department_id = department.id, name = %department.name, "Department created");
        Ok(department)
    }

    #[instrument(skip(db, form), fields(db.operation = "UPDATE", db.table = "departments"))]
    pub async fn update_department(
        db: &PgPool,
        id: i32,
        form: DepartmentForm,
    ) -> Result<Department, AppError> {
        form.validate()?;
        let name = required_text(form.name, NAME_REQUIRED)?;

        let mut tx = db.begin().await.map_err(storage_error)?;
        let department = sqlx::query_as::<_, Department>(
            "UPDATE departments SET name = $1 WHERE id = $2 RETURNING id, name",
        )
        .bind(&name)
        .bind(id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| classify(e, DUPLICATE_MESSAGE))?
        .ok_or_else(|| AppError::not_found("Department not found"))?;
        tx.commit().await.map_err(|e| classify(e, DUPLICATE_MESSAGE))?;

        info!(department_id = department.id, name = %department.name, "Department updated");
        Ok(department)
    }

    /// Deletes a department that owns no program and no teacher.
    ///
    /// The dependent counts and the delete share one transaction; a
    /// non-empty department is left untouched.
    #[instrument(skip(db), fields(db.operation = "DELETE", db.table = "departments"))]
    pub async fn delete_department(db: &PgPool, id: i32) -> Result<Department, AppError> {
        let mut tx = db.begin().await.map_err(storage_error)?;

        let department =
            sqlx::query_as::<_, Department>("SELECT id, name FROM departments WHERE id = $1")
                .bind(id)
                .fetch_optional(&mut *tx)
                .await
                .map_err(storage_error)?
                .ok_or_else(|| AppError::not_found("Department not found"))?;

        let programs: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM programs WHERE department_id = $1")
                .bind(id)
                .fetch_one(&mut *tx)
                .await
                .map_err(storage_error)?;
        if programs > 0 {
            warn!(department_id = id, programs, "Department still contains programs");
            return Err(AppError::referential_integrity(
                "Cannot delete this department because it contains programs",
            ));
        }

        let teachers: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM teachers WHERE department_id = $1")
                .bind(id)
                .fetch_one(&mut *tx)
                .await
                .map_err(storage_error)?;
        if teachers > 0 {
            warn!(department_id = id, teachers, "Department still contains teachers");
            return Err(AppError::referential_integrity(
                "Cannot delete this department because it contains teachers",
            ));
        }

        sqlx::query("DELETE FROM departments WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|e| classify_delete(e, IN_USE_MESSAGE))?;
        tx.commit().await.map_err(storage_error)?;

        info!(department_id = id, name = %department.name, "Department deleted");
        Ok(department)
    }
}
