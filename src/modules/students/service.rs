use sqlx::PgPool;
use tracing::{debug, info, instrument};
use validator::Validate;

use presence_core::{
    AppError,
    forms::{keep_or_replace, optional_id, required_id, required_text, submitted},
};
use presence_db::{classify, storage_error};

use crate::modules::students::model::{
    CreateStudentForm, Student, StudentFilterParams, UpdateStudentForm,
};

const DUPLICATE_MESSAGE: &str = "This matricule already exists";

const STUDENT_COLUMNS: &str = "id, matricule, name, surname, year, password, program_id";

pub struct StudentService;

impl StudentService {
    #[instrument(skip(db))]
    pub async fn list_students(
        db: &PgPool,
        filters: StudentFilterParams,
    ) -> Result<Vec<Student>, AppError> {
        let students = sqlx::query_as::<_, Student>(
            r#"SELECT s.id, s.matricule, s.name, s.surname, s.year, s.password,
                      s.program_id, p.name AS program_name
               FROM students s
               JOIN programs p ON p.id = s.program_id
               WHERE ($1::INT IS NULL OR s.program_id = $1)
               ORDER BY s.surname, s.name, s.id"#,
        )
        .bind(filters.program_id)
        .fetch_all(db)
        .await
        .map_err(storage_error)?;

        debug!(count = students.len(), "Listed students");
        Ok(students)
    }

    #[instrument(skip(db))]
    pub async fn get_student(db: &PgPool, id: i32) -> Result<Student, AppError> {
        sqlx::query_as::<_, Student>(&format!(
            "SELECT {} FROM students WHERE id = $1",
            STUDENT_COLUMNS
        ))
        .bind(id)
        .fetch_optional(db)
        .await
        .map_err(storage_error)?
        .ok_or_else(|| AppError::not_found("Student not found"))
    }

    /// Creates a student. Every text field is trimmed before storage.
    #[instrument(skip(db, form), fields(db.operation = "INSERT", db.table = "students"))]
    pub async fn create_student(db: &PgPool, form: CreateStudentForm) -> Result<Student, AppError> {
        form.validate()?;
        let matricule = required_text(form.matricule, "Matricule is required")?;
        let name = required_text(form.name, "Name is required")?;
        let surname = required_text(form.surname, "Surname is required")?;
        let password = required_text(form.password, "Password is required")?;
        let year = required_text(form.year, "Year is required")?;
        let program_id = required_id("program", form.program_id.as_deref())?;

        let mut tx = db.begin().await.map_err(storage_error)?;
        let student = sqlx::query_as::<_, Student>(&format!(
            r#"INSERT INTO students (matricule, name, surname, year, password, program_id)
               VALUES ($1, $2, $3, $4, $5, $6)
               RETURNING {}"#,
            STUDENT_COLUMNS
        ))
        .bind(&matricule)
        .bind(&name)
        .bind(&surname)
        .bind(&year)
        .bind(&password)
        .bind(program_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| classify(e, DUPLICATE_MESSAGE))?;
        tx.commit().await.map_err(|e| classify(e, DUPLICATE_MESSAGE))?;

        info!(student_id = student.id, matricule = %student.matricule, program_id, "Student created");
        Ok(student)
    }

    /// Applies the submitted fields over the stored record; blank fields
    /// (password included) keep the stored value.
    #[instrument(skip(db, form), fields(db.operation = "UPDATE", db.table = "students"))]
    pub async fn update_student(
        db: &PgPool,
        id: i32,
        form: UpdateStudentForm,
    ) -> Result<Student, AppError> {
        form.validate()?;
        let new_program = optional_id("program", form.program_id.as_deref())?;

        let mut tx = db.begin().await.map_err(storage_error)?;
        let existing = sqlx::query_as::<_, Student>(&format!(
            "SELECT {} FROM students WHERE id = $1",
            STUDENT_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(storage_error)?
        .ok_or_else(|| AppError::not_found("Student not found"))?;

        let password_changed = submitted(form.password.as_deref()).is_some();

        let student = sqlx::query_as::<_, Student>(&format!(
            r#"UPDATE students
               SET matricule = $1, name = $2, surname = $3, year = $4, password = $5,
                   program_id = $6
               WHERE id = $7
               RETURNING {}"#,
            STUDENT_COLUMNS
        ))
        .bind(keep_or_replace(form.matricule, existing.matricule))
        .bind(keep_or_replace(form.name, existing.name))
        .bind(keep_or_replace(form.surname, existing.surname))
        .bind(keep_or_replace(form.year, existing.year))
        .bind(keep_or_replace(form.password, existing.password))
        .bind(new_program.unwrap_or(existing.program_id))
        .bind(id)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| classify(e, DUPLICATE_MESSAGE))?;
        tx.commit().await.map_err(|e| classify(e, DUPLICATE_MESSAGE))?;

        info!(student_id = id, password_changed, "Student updated");
        Ok(student)
    }

    #[instrument(skip(db), fields(db.operation = "DELETE", db.table = "students"))]
    pub async fn delete_student(db: &PgPool, id: i32) -> Result<Student, AppError> {
        let mut tx = db.begin().await.map_err(storage_error)?;
        let student = sqlx::query_as::<_, Student>(&format!(
            "DELETE FROM students WHERE id = $1 RETURNING {}",
            STUDENT_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(storage_error)?
        .ok_or_else(|| AppError::not_found("Student not found"))?;
        tx.commit().await.map_err(storage_error)?;

        info!(student_id = id, matricule = %student.matricule, "Student deleted");
        Ok(student)
    }
}
