//! Redirect targets shared by controllers and middleware.

use presence_auth::UserKind;

pub const HOME: &str = "/";
pub const LOGIN: &str = "/login";
pub const ADMIN_DASHBOARD: &str = "/admin/dashboard";
pub const TEACHER_DASHBOARD: &str = "/enseignant/dashboard";
pub const STUDENT_DASHBOARD: &str = "/etudiant/dashboard";
pub const DEPARTMENTS: &str = "/admin/departements";
pub const TEACHERS: &str = "/admin/teachers";
pub const STUDENTS: &str = "/admin/students";

/// Landing page for each account kind after login.
pub fn dashboard_for(kind: UserKind) -> &'static str {
    match kind {
        UserKind::Admin => ADMIN_DASHBOARD,
        UserKind::Teacher => TEACHER_DASHBOARD,
        UserKind::Student => STUDENT_DASHBOARD,
    }
}

pub fn department_programs(department_id: i32) -> String {
    format!("/admin/departements/{}/filieres", department_id)
}

pub fn program_courses(program_id: i32) -> String {
    format!("/admin/filieres/{}/matieres", program_id)
}
