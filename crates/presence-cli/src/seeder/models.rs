//! Seed records and seeding configuration.

pub struct DepartmentSeed {
    pub name: String,
}

pub struct ProgramSeed {
    pub name: String,
    pub department_id: i32,
}

pub struct CourseSeed {
    pub name: String,
    pub code: Option<String>,
    pub program_id: i32,
}

pub struct TeacherSeed {
    pub matricule: String,
    pub name: String,
    pub surname: String,
    pub email: Option<String>,
    pub password: String,
    pub department_id: i32,
}

pub struct StudentSeed {
    pub matricule: String,
    pub name: String,
    pub surname: String,
    pub year: String,
    pub password: String,
    pub program_id: i32,
}

/// Record counts for one seeding run.
#[derive(Clone, Debug)]
pub struct SeedConfig {
    pub departments: usize,
    pub programs_per_department: usize,
    pub courses_per_program: usize,
    pub teachers_per_department: usize,
    pub students_per_program: usize,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            departments: 4,
            programs_per_department: 3,
            courses_per_program: 6,
            teachers_per_department: 5,
            students_per_program: 25,
        }
    }
}

impl SeedConfig {
    pub fn new(departments: usize) -> Self {
        Self {
            departments,
            ..Default::default()
        }
    }

    pub fn total_programs(&self) -> usize {
        self.departments * self.programs_per_department
    }

    pub fn total_students(&self) -> usize {
        self.total_programs() * self.students_per_program
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_totals() {
        let config = SeedConfig {
            departments: 2,
            programs_per_department: 3,
            courses_per_program: 1,
            teachers_per_department: 1,
            students_per_program: 10,
        };
        assert_eq!(config.total_programs(), 6);
        assert_eq!(config.total_students(), 60);
        assert_eq!(SeedConfig::new(7).departments, 7);
    }
}
