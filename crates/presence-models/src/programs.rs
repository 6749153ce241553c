use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A course of study ("filiere") inside a department.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq, Eq)]
pub struct Program {
    pub id: i32,
    pub name: String,
    pub department_id: i32,
}

/// Add/edit form for a program. The department comes from the URL on
/// create; on edit `id_departement` optionally moves the program.
#[derive(Debug, Deserialize, Validate)]
pub struct ProgramForm {
    #[serde(rename = "nom_filiere")]
    #[validate(
        required(message = "Program name is required"),
        length(min = 1, max = 100, message = "Program name must be 1 to 100 characters")
    )]
    pub name: Option<String>,
    #[serde(rename = "id_departement")]
    pub department_id: Option<String>,
}
