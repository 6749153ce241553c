use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq, Eq)]
pub struct Department {
    pub id: i32,
    pub name: String,
}

/// Add/edit form for a department. Posted field: `nom`.
#[derive(Debug, Deserialize, Validate)]
pub struct DepartmentForm {
    #[serde(rename = "nom")]
    #[validate(
        required(message = "Department name is required"),
        length(min = 1, max = 100, message = "Department name must be 1 to 100 characters")
    )]
    pub name: Option<String>,
}
