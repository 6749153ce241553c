use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A subject ("matiere") offered under a program.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq, Eq)]
pub struct Course {
    pub id: i32,
    pub name: String,
    pub code: Option<String>,
    pub program_id: i32,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CourseForm {
    #[serde(rename = "nom_matiere")]
    #[validate(
        required(message = "Course name is required"),
        length(min = 1, max = 100, message = "Course name must be 1 to 100 characters")
    )]
    pub name: Option<String>,
    #[validate(length(max = 20, message = "Course code must be at most 20 characters"))]
    pub code: Option<String>,
    #[serde(rename = "id_filiere")]
    pub program_id: Option<String>,
}
