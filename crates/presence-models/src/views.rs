//! JSON payloads returned by GET views.
//!
//! Each view carries the pending flash `notice` (if any) next to the data a
//! page would render.

use presence_auth::{Notice, SessionIdentity};
use serde::Serialize;

use crate::{Course, Department, Program, Student, Teacher};

#[derive(Debug, Serialize)]
pub struct HomeView {
    pub notice: Option<Notice>,
    pub current_user: Option<SessionIdentity>,
    pub current_year: i32,
}

#[derive(Debug, Serialize)]
pub struct DashboardView {
    pub notice: Option<Notice>,
    pub current_user: SessionIdentity,
    pub current_year: i32,
}

#[derive(Debug, Serialize)]
pub struct DepartmentsView {
    pub notice: Option<Notice>,
    pub departments: Vec<Department>,
}

#[derive(Debug, Serialize)]
pub struct DepartmentFormView {
    pub notice: Option<Notice>,
    pub department: Option<Department>,
}

#[derive(Debug, Serialize)]
pub struct ProgramsView {
    pub notice: Option<Notice>,
    pub department: Department,
    pub programs: Vec<Program>,
}

#[derive(Debug, Serialize)]
pub struct ProgramFormView {
    pub notice: Option<Notice>,
    pub department: Department,
    pub program: Option<Program>,
    /// Departments the program may be moved to (edit form).
    pub departments: Vec<Department>,
}

#[derive(Debug, Serialize)]
pub struct CoursesView {
    pub notice: Option<Notice>,
    pub program: Program,
    pub courses: Vec<Course>,
}

#[derive(Debug, Serialize)]
pub struct CourseFormView {
    pub notice: Option<Notice>,
    pub program: Program,
    pub course: Option<Course>,
}

#[derive(Debug, Serialize)]
pub struct TeachersView {
    pub notice: Option<Notice>,
    pub teachers: Vec<Teacher>,
}

#[derive(Debug, Serialize)]
pub struct TeacherFormView {
    pub notice: Option<Notice>,
    pub teacher: Option<Teacher>,
    pub departments: Vec<Department>,
}

#[derive(Debug, Serialize)]
pub struct StudentsView {
    pub notice: Option<Notice>,
    pub students: Vec<Student>,
    pub programs: Vec<Program>,
}

#[derive(Debug, Serialize)]
pub struct StudentFormView {
    pub notice: Option<Notice>,
    pub student: Option<Student>,
    pub programs: Vec<Program>,
}
