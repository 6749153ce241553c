use presence_core::serde::deserialize_optional_id;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Student {
    pub id: i32,
    pub matricule: String,
    pub name: String,
    pub surname: String,
    /// Study year as entered by the administration (e.g. "2024", "L3").
    pub year: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub program_id: i32,
    #[sqlx(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub program_name: Option<String>,
}

impl Student {
    pub fn display_name(&self) -> String {
        format!("{} {}", self.name, self.surname)
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateStudentForm {
    #[validate(
        required(message = "Matricule is required"),
        length(min = 1, max = 50, message = "Matricule must be 1 to 50 characters")
    )]
    pub matricule: Option<String>,
    #[serde(rename = "nom")]
    #[validate(
        required(message = "Name is required"),
        length(min = 1, max = 100, message = "Name must be 1 to 100 characters")
    )]
    pub name: Option<String>,
    #[serde(rename = "prenom")]
    #[validate(
        required(message = "Surname is required"),
        length(min = 1, max = 100, message = "Surname must be 1 to 100 characters")
    )]
    pub surname: Option<String>,
    #[serde(rename = "mot_de_passe")]
    #[validate(
        required(message = "Password is required"),
        length(min = 1, max = 100, message = "Password must be 1 to 100 characters")
    )]
    pub password: Option<String>,
    #[serde(rename = "filiere_id")]
    #[validate(
        required(message = "Program is required"),
        length(min = 1, message = "Program is required")
    )]
    pub program_id: Option<String>,
    #[serde(rename = "annee")]
    #[validate(
        required(message = "Year is required"),
        length(min = 1, max = 20, message = "Year must be 1 to 20 characters")
    )]
    pub year: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateStudentForm {
    #[validate(length(max = 50, message = "Matricule must be at most 50 characters"))]
    pub matricule: Option<String>,
    #[serde(rename = "nom")]
    #[validate(length(max = 100, message = "Name must be at most 100 characters"))]
    pub name: Option<String>,
    #[serde(rename = "prenom")]
    #[validate(length(max = 100, message = "Surname must be at most 100 characters"))]
    pub surname: Option<String>,
    #[serde(rename = "mot_de_passe")]
    #[validate(length(max = 100, message = "Password must be at most 100 characters"))]
    pub password: Option<String>,
    #[serde(rename = "filiere_id")]
    pub program_id: Option<String>,
    #[serde(rename = "annee")]
    #[validate(length(max = 20, message = "Year must be at most 20 characters"))]
    pub year: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct StudentFilterParams {
    #[serde(default, deserialize_with = "deserialize_optional_id")]
    pub program_id: Option<i32>,
}
