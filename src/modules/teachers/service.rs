use sqlx::PgPool;
use tracing::{debug, info, instrument};
use validator::Validate;

use presence_core::{
    AppError,
    forms::{keep_or_replace, optional_id, required_id, required_text, submitted},
};
use presence_db::{classify, storage_error};

use crate::modules::teachers::model::{
    CreateTeacherForm, Teacher, TeacherFilterParams, UpdateTeacherForm,
};

const DUPLICATE_MESSAGE: &str = "This matricule or email already exists";

const TEACHER_COLUMNS: &str = "id, matricule, name, surname, email, password, department_id";

pub struct TeacherService;

impl TeacherService {
    /// Lists teachers with their department name, ordered by surname then
    /// name.
    #[instrument(skip(db))]
    pub async fn list_teachers(
        db: &PgPool,
        filters: TeacherFilterParams,
    ) -> Result<Vec<Teacher>, AppError> {
        let teachers = sqlx::query_as::<_, Teacher>(
            r#"SELECT t.id, t.matricule, t.name, t.surname, t.email, t.password,
                      t.department_id, d.name AS department_name
               FROM teachers t
               JOIN departments d ON d.id = t.department_id
               WHERE ($1::INT IS NULL OR t.department_id = $1)
               ORDER BY t.surname, t.name, t.id"#,
        )
        .bind(filters.department_id)
        .fetch_all(db)
        .await
        .map_err(storage_error)?;

        debug!(count = teachers.len(), "Listed teachers");
        Ok(teachers)
    }

    #[instrument(skip(db))]
    pub async fn get_teacher(db: &PgPool, id: i32) -> Result<Teacher, AppError> {
        sqlx::query_as::<_, Teacher>(&format!(
            "SELECT {} FROM teachers WHERE id = $1",
            TEACHER_COLUMNS
        ))
        .bind(id)
        .fetch_optional(db)
        .await
        .map_err(storage_error)?
        .ok_or_else(|| AppError::not_found("Teacher not found"))
    }

    #[instrument(skip(db, form), fields(db.operation = "INSERT", db.table = "teachers"))]
    pub async fn create_teacher(db: &PgPool, form: CreateTeacherForm) -> Result<Teacher, AppError> {
        form.validate()?;
        let matricule = required_text(form.matricule, "Matricule is required")?;
        let name = required_text(form.name, "Name is required")?;
        let surname = required_text(form.surname, "Surname is required")?;
        let email = submitted(form.email.as_deref()).map(str::to_string);
        let password = form
            .password
            .filter(|password| !password.trim().is_empty())
            .ok_or_else(|| AppError::validation("Password is required"))?;
        let department_id = required_id("department", form.department_id.as_deref())?;

        let mut tx = db.begin().await.map_err(storage_error)?;
        let teacher = sqlx::query_as::<_, Teacher>(&format!(
            r#"INSERT INTO teachers (matricule, name, surname, email, password, department_id)
               VALUES ($1, $2, $3, $4, $5, $6)
               RETURNING {}"#,
            TEACHER_COLUMNS
        ))
        .bind(&matricule)
        .bind(&name)
        .bind(&surname)
        .bind(&email)
        .bind(&password)
        .bind(department_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| classify(e, DUPLICATE_MESSAGE))?;
        tx.commit().await.map_err(|e| classify(e, DUPLICATE_MESSAGE))?;

        info!(teacher_id = teacher.id, matricule = %teacher.matricule, department_id, "Teacher created");
        Ok(teacher)
    }

    /// Applies the submitted fields over the stored record.
    ///
    /// Blank text keeps the stored value, a blank password keeps the stored
    /// password, a submitted blank email clears it.
    #[instrument(skip(db, form), fields(db.operation = "UPDATE", db.table = "teachers"))]
    pub async fn update_teacher(
        db: &PgPool,
        id: i32,
        form: UpdateTeacherForm,
    ) -> Result<Teacher, AppError> {
        form.validate()?;
        let new_department = optional_id("department", form.department_id.as_deref())?;

        let mut tx = db.begin().await.map_err(storage_error)?;
        let existing = sqlx::query_as::<_, Teacher>(&format!(
            "SELECT {} FROM teachers WHERE id = $1",
            TEACHER_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(storage_error)?
        .ok_or_else(|| AppError::not_found("Teacher not found"))?;

        let password_changed = form
            .password
            .as_deref()
            .is_some_and(|password| !password.trim().is_empty());
        let email = match form.email {
            Some(email) => submitted(Some(&email)).map(str::to_string),
            None => existing.email,
        };
        let password = form
            .password
            .filter(|password| !password.trim().is_empty())
            .unwrap_or(existing.password);

        let teacher = sqlx::query_as::<_, Teacher>(&format!(
            r#"UPDATE teachers
               SET matricule = $1, name = $2, surname = $3, email = $4, password = $5,
                   department_id = $6
               WHERE id = $7
               RETURNING {}"#,
            TEACHER_COLUMNS
        ))
        .bind(keep_or_replace(form.matricule, existing.matricule))
        .bind(keep_or_replace(form.name, existing.name))
        .bind(keep_or_replace(form.surname, existing.surname))
        .bind(&email)
        .bind(&password)
        .bind(new_department.unwrap_or(existing.department_id))
        .bind(id)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| classify(e, DUPLICATE_MESSAGE))?;
        tx.commit().await.map_err(|e| classify(e, DUPLICATE_MESSAGE))?;

        info!(teacher_id = id, password_changed, "Teacher updated");
        Ok(teacher)
    }

    #[instrument(skip(db), fields(db.operation = "DELETE", db.table = "teachers"))]
    pub async fn delete_teacher(db: &PgPool, id: i32) -> Result<Teacher, AppError> {
        let mut tx = db.begin().await.map_err(storage_error)?;
        let teacher = sqlx::query_as::<_, Teacher>(&format!(
            "DELETE FROM teachers WHERE id = $1 RETURNING {}",
            TEACHER_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(storage_error)?
        .ok_or_else(|| AppError::not_found("Teacher not found"))?;
        tx.commit().await.map_err(storage_error)?;

        info!(teacher_id = id, matricule = %teacher.matricule, "Teacher deleted");
        Ok(teacher)
    }
}
