//! Administrator accounts.
//!
//! Administrators have no HTTP creation path; this is the only way to add
//! one.

use sqlx::PgPool;

use presence_core::AppError;
use presence_core::forms::submitted;
use presence_db::{classify, storage_error};
use presence_models::Admin;

pub struct NewAdmin<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}

impl NewAdmin<'_> {
    /// Checks that every field is non-blank and within the column limits.
    pub fn validate(&self) -> Result<(), AppError> {
        let name = submitted(Some(self.name))
            .ok_or_else(|| AppError::validation("Name is required"))?;
        let email = submitted(Some(self.email))
            .ok_or_else(|| AppError::validation("Email is required"))?;
        if self.password.is_empty() {
            return Err(AppError::validation("Password is required"));
        }

        if name.chars().count() > 100 {
            return Err(AppError::validation("Name must be at most 100 characters"));
        }
        if email.chars().count() > 150 {
            return Err(AppError::validation("Email must be at most 150 characters"));
        }
        if !email.contains('@') {
            return Err(AppError::validation("Email address is not valid"));
        }
        if self.password.chars().count() > 255 {
            return Err(AppError::validation("Password must be at most 255 characters"));
        }
        Ok(())
    }
}

/// Inserts an administrator. A taken email is a `DuplicateKey` error.
pub async fn create_admin(db: &PgPool, admin: NewAdmin<'_>) -> Result<Admin, AppError> {
    admin.validate()?;

    let mut tx = db.begin().await.map_err(storage_error)?;
    let created = sqlx::query_as::<_, Admin>(
        r#"INSERT INTO admins (name, email, password)
           VALUES ($1, $2, $3)
           RETURNING id, name, email, password"#,
    )
    .bind(admin.name.trim())
    .bind(admin.email.trim())
    .bind(admin.password)
    .fetch_one(&mut *tx)
    .await
    .map_err(|e| classify(e, "An administrator with this email already exists"))?;
    tx.commit().await.map_err(storage_error)?;

    Ok(created)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn admin<'a>(name: &'a str, email: &'a str, password: &'a str) -> NewAdmin<'a> {
        NewAdmin {
            name,
            email,
            password,
        }
    }

    #[test]
    fn test_valid_admin() {
        assert!(admin("Root", "root@univ.test", "secret").validate().is_ok());
    }

    #[test]
    fn test_blank_fields_are_rejected() {
        assert!(admin("  ", "root@univ.test", "secret").validate().is_err());
        assert!(admin("Root", "", "secret").validate().is_err());
        assert!(admin("Root", "root@univ.test", "").validate().is_err());
    }

    #[test]
    fn test_email_must_look_like_an_address() {
        let err = admin("Root", "root", "secret").validate().unwrap_err();
        assert_eq!(err.to_string(), "Email address is not valid");
    }

    #[sqlx::test(migrations = "../../migrations")]
    async fn test_create_admin_rejects_duplicate_email(pool: PgPool) {
        let first = create_admin(&pool, admin("Root", "root@univ.test", "secret"))
            .await
            .unwrap();
        assert_eq!(first.email, "root@univ.test");

        let err = create_admin(&pool, admin("Other", "root@univ.test", "other"))
            .await
            .unwrap_err();
        assert_eq!(err.kind(), presence_core::ErrorKind::DuplicateKey);
    }
}
