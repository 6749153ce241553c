use sqlx::PgPool;
use tracing::{debug, info, instrument, warn};

use presence_auth::{Principal, SessionIdentity};
use presence_core::AppError;
use presence_db::storage_error;

use crate::modules::auth::model::Admin;
use crate::modules::students::model::Student;
use crate::modules::teachers::model::Teacher;

pub struct AuthService;

impl AuthService {
    /// Resolves `identifier` + `secret` to a session identity.
    ///
    /// Kinds are tried in a fixed order (admin by email, teacher by
    /// matricule, student by matricule) and the first match wins. Student
    /// logins skip the secret check unless `student_requires_password` is
    /// set. Never writes to the database.
    #[instrument(skip(db, secret), fields(identifier = %identifier))]
    pub async fn authenticate(
        db: &PgPool,
        identifier: &str,
        secret: &str,
        student_requires_password: bool,
    ) -> Result<SessionIdentity, AppError> {
        if let Some(admin) = Self::find_admin(db, identifier, secret).await? {
            info!(admin_id = admin.id, "Admin logged in");
            return Ok(SessionIdentity::new(Principal::Admin(admin.id), admin.name));
        }

        if let Some(teacher) = Self::find_teacher(db, identifier, secret).await? {
            info!(teacher_id = teacher.id, "Teacher logged in");
            return Ok(SessionIdentity::new(
                Principal::Teacher(teacher.id),
                teacher.display_name(),
            ));
        }

        if let Some(student) = Self::find_student(db, identifier).await? {
            if student.password == secret {
                info!(student_id = student.id, "Student logged in");
            } else if student_requires_password {
                warn!("Login failed: no account matched");
                return Err(AppError::InvalidCredentials);
            } else {
                warn!(
                    student_id = student.id,
                    "Student logged in by matricule only; password was not verified"
                );
            }
            return Ok(SessionIdentity::new(
                Principal::Student(student.id),
                student.display_name(),
            ));
        }

        warn!("Login failed: no account matched");
        Err(AppError::InvalidCredentials)
    }

    async fn find_admin(db: &PgPool, email: &str, secret: &str) -> Result<Option<Admin>, AppError> {
        let admin = sqlx::query_as::<_, Admin>(
            "SELECT id, name, email, password FROM admins WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(db)
        .await
        .map_err(storage_error)?;

        debug!(found = admin.is_some(), "Admin lookup");
        Ok(admin.filter(|admin| admin.password == secret))
    }

    async fn find_teacher(
        db: &PgPool,
        matricule: &str,
        secret: &str,
    ) -> Result<Option<Teacher>, AppError> {
        let teacher = sqlx::query_as::<_, Teacher>(
            r#"SELECT id, matricule, name, surname, email, password, department_id
               FROM teachers WHERE matricule = $1"#,
        )
        .bind(matricule)
        .fetch_optional(db)
        .await
        .map_err(storage_error)?;

        debug!(found = teacher.is_some(), "Teacher lookup");
        Ok(teacher.filter(|teacher| teacher.password == secret))
    }

    async fn find_student(db: &PgPool, matricule: &str) -> Result<Option<Student>, AppError> {
        let student = sqlx::query_as::<_, Student>(
            r#"SELECT id, matricule, name, surname, year, password, program_id
               FROM students WHERE matricule = $1"#,
        )
        .bind(matricule)
        .fetch_optional(db)
        .await
        .map_err(storage_error)?;

        debug!(found = student.is_some(), "Student lookup");
        Ok(student)
    }
}
