use presence_core::serde::deserialize_optional_id;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Teacher {
    pub id: i32,
    pub matricule: String,
    pub name: String,
    pub surname: String,
    pub email: Option<String>,
    #[serde(skip_serializing)]
    pub password: String,
    pub department_id: i32,
    /// Filled by list queries that join the department.
    #[sqlx(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department_name: Option<String>,
}

impl Teacher {
    pub fn display_name(&self) -> String {
        format!("{} {}", self.name, self.surname)
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateTeacherForm {
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
    #[validate(length(max = 150, message = "Email must be at most 150 characters"))]
    pub email: Option<String>,
    #[serde(rename = "mot_de_passe")]
    #[validate(
        required(message = "Password is required"),
        length(min = 1, max = 150, message = "Password must be 1 to 150 characters")
    )]
    pub password: Option<String>,
    #[serde(rename = "id_departement")]
    #[validate(
        required(message = "Department is required"),
        length(min = 1, message = "Department is required")
    )]
    pub department_id: Option<String>,
}

/// Edit form: every field is optional. Blank text keeps the stored value,
/// a blank password keeps the stored password, a blank email clears it.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateTeacherForm {
    #[validate(length(max = 50, message = "Matricule must be at most 50 characters"))]
    pub matricule: Option<String>,
    #[serde(rename = "nom")]
    #[validate(length(max = 100, message = "Name must be at most 100 characters"))]
    pub name: Option<String>,
    #[serde(rename = "prenom")]
    #[validate(length(max = 100, message = "Surname must be at most 100 characters"))]
    pub surname: Option<String>,
    #[validate(length(max = 150, message = "Email must be at most 150 characters"))]
    pub email: Option<String>,
    #[serde(rename = "mot_de_passe")]
    #[validate(length(max = 150, message = "Password must be at most 150 characters"))]
    pub password: Option<String>,
    #[serde(rename = "id_departement")]
    pub department_id: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct TeacherFilterParams {
    #[serde(default, deserialize_with = "deserialize_optional_id")]
    pub department_id: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL: &str =
        "matricule=T001&nom=Kone&prenom=Ibrahim&email=&mot_de_passe=pw&id_departement=2";

    #[test]
    fn test_create_form_field_names() {
        let form: CreateTeacherForm = serde_urlencoded::from_str(FULL).unwrap();
        assert_eq!(form.matricule.as_deref(), Some("T001"));
        assert_eq!(form.name.as_deref(), Some("Kone"));
        assert_eq!(form.surname.as_deref(), Some("Ibrahim"));
        assert_eq!(form.email.as_deref(), Some(""));
        assert_eq!(form.password.as_deref(), Some("pw"));
        assert_eq!(form.department_id.as_deref(), Some("2"));
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_create_form_each_required_field() {
        for missing in ["matricule", "nom", "prenom", "mot_de_passe", "id_departement"] {
            let body: Vec<&str> = FULL
                .split('&')
                .filter(|pair| !pair.starts_with(&format!("{}=", missing)))
                .collect();
            let form: CreateTeacherForm = serde_urlencoded::from_str(&body.join("&")).unwrap();
            assert!(form.validate().is_err(), "{} should be required", missing);
        }
    }

    #[test]
    fn test_email_is_optional() {
        let form: CreateTeacherForm = serde_urlencoded::from_str(
            "matricule=T001&nom=Kone&prenom=Ibrahim&mot_de_passe=pw&id_departement=2",
        )
        .unwrap();
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_update_form_allows_empty() {
        let form: UpdateTeacherForm = serde_urlencoded::from_str("mot_de_passe=").unwrap();
        assert!(form.validate().is_ok());
        assert_eq!(form.password.as_deref(), Some(""));
    }

    #[test]
    fn test_password_is_not_serialized() {
        let teacher = Teacher {
            id: 1,
            matricule: "T001".to_string(),
            name: "Kone".to_string(),
            surname: "Ibrahim".to_string(),
            email: None,
            password: "hidden".to_string(),
            department_id: 2,
            department_name: None,
        };
        let json = serde_json::to_string(&teacher).unwrap();
        assert!(!json.contains("hidden"));
        assert!(!json.contains("department_name"));
        assert_eq!(teacher.display_name(), "Kone Ibrahim");
    }
}
