pub mod auth;
pub mod courses;
pub mod dashboards;
pub mod departments;
pub mod programs;
pub mod students;
pub mod teachers;
