use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Admin {
    pub id: i32,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
}

/// Login form. `username` is an admin email or a teacher/student matricule.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginForm {
    #[validate(
        required(message = "Identifier is required"),
        length(min = 1, message = "Identifier is required")
    )]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}
