//! # Presence Models
//!
//! Records, form DTOs and view payloads for the attendance console.
//!
//! Records map one-to-one onto the tables in `migrations/`. Form DTOs use
//! the field names posted by the console's HTML forms (`nom`, `prenom`,
//! `mot_de_passe`, `id_departement`, ...) and keep every field optional so
//! that a missing value surfaces as a validation notice rather than an
//! extractor rejection.
//!
//! # Modules
//!
//! - [`admins`]: administrator accounts and the login form
//! - [`departments`]: departments
//! - [`programs`]: programs (filieres), owned by a department
//! - [`courses`]: courses (matieres), owned by a program
//! - [`teachers`]: teachers, attached to a department
//! - [`students`]: students, attached to a program
//! - [`views`]: JSON payloads returned by GET views

pub mod admins;
pub mod courses;
pub mod departments;
pub mod programs;
pub mod students;
pub mod teachers;
pub mod views;

pub use admins::{Admin, LoginForm};
pub use courses::{Course, CourseForm};
pub use departments::{Department, DepartmentForm};
pub use programs::{Program, ProgramForm};
pub use students::{CreateStudentForm, Student, StudentFilterParams, UpdateStudentForm};
pub use teachers::{CreateTeacherForm, Teacher, TeacherFilterParams, UpdateTeacherForm};
