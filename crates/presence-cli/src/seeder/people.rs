//! Teachers and students.
//!
//! Matricules carry a per-run token so that repeated runs never collide.

use fake::Fake;
use fake::faker::internet::en::SafeEmail;
use fake::faker::name::en::{FirstName, LastName};
use rayon::prelude::*;
use sqlx::{PgPool, Postgres, QueryBuilder, Transaction};
use std::time::Instant;

use super::BATCH_SIZE;
use super::models::{StudentSeed, TeacherSeed};

/// Password given to every seeded account.
pub const SEED_PASSWORD: &str = "password123";

const STUDY_YEARS: [&str; 5] = ["L1", "L2", "L3", "M1", "M2"];

/// Short random token distinguishing the matricules of one run.
pub fn run_token() -> String {
    uuid::Uuid::new_v4().simple().to_string()[..6].to_uppercase()
}

pub fn generate_teachers(
    department_ids: &[i32],
    per_department: usize,
    token: &str,
) -> Vec<TeacherSeed> {
    department_ids
        .par_iter()
        .enumerate()
        .flat_map_iter(|(d, &department_id)| {
            (0..per_department).map(move |i| {
                let with_email = (0u8..4).fake::<u8>() > 0;
                TeacherSeed {
                    matricule: format!("T{}-{:03}-{:03}", token, d + 1, i + 1),
                    name: LastName().fake(),
                    surname: FirstName().fake(),
                    email: with_email.then(|| SafeEmail().fake()),
                    password: SEED_PASSWORD.to_string(),
                    department_id,
                }
            })
        })
        .collect()
}

pub fn generate_students(program_ids: &[i32], per_program: usize, token: &str) -> Vec<StudentSeed> {
    program_ids
        .par_iter()
        .enumerate()
        .flat_map_iter(|(p, &program_id)| {
            (0..per_program).map(move |i| StudentSeed {
                matricule: format!("E{}-{:03}-{:04}", token, p + 1, i + 1),
                name: LastName().fake(),
                surname: FirstName().fake(),
                year: STUDY_YEARS[(0..STUDY_YEARS.len()).fake::<usize>()].to_string(),
                password: SEED_PASSWORD.to_string(),
                program_id,
            })
        })
        .collect()
}

pub async fn seed_teachers(
    db: &PgPool,
    department_ids: &[i32],
    per_department: usize,
    token: &str,
) -> Result<u64, sqlx::Error> {
    let start_time = Instant::now();
    println!("👩‍🏫 Seeding teachers...");

    let teachers = generate_teachers(department_ids, per_department, token);
    let mut tx = db.begin().await?;
    let mut inserted = 0;
    for chunk in teachers.chunks(BATCH_SIZE) {
        inserted += insert_teachers_chunk(&mut tx, chunk).await?;
    }
    tx.commit().await?;

    println!(
        "   ✓ Inserted {} teachers in {:?}",
        inserted,
        start_time.elapsed()
    );
    Ok(inserted)
}

pub async fn seed_students(
    db: &PgPool,
    program_ids: &[i32],
    per_program: usize,
    token: &str,
) -> Result<u64, sqlx::Error> {
    let start_time = Instant::now();
    println!("🧑‍🎓 Seeding students...");

    let students = generate_students(program_ids, per_program, token);
    let mut tx = db.begin().await?;
    let mut inserted = 0;
    for chunk in students.chunks(BATCH_SIZE) {
        inserted += insert_students_chunk(&mut tx, chunk).await?;
    }
    tx.commit().await?;

    println!(
        "   ✓ Inserted {} students in {:?}",
        inserted,
        start_time.elapsed()
    );
    Ok(inserted)
}

async fn insert_teachers_chunk(
    tx: &mut Transaction<'_, Postgres>,
    teachers: &[TeacherSeed],
) -> Result<u64, sqlx::Error> {
    if teachers.is_empty() {
        return Ok(0);
    }

    let mut builder = QueryBuilder::<Postgres>::new(
        "INSERT INTO teachers (matricule, name, surname, email, password, department_id) ",
    );
    builder.push_values(teachers, |mut row, teacher| {
        row.push_bind(teacher.matricule.clone())
            .push_bind(teacher.name.clone())
            .push_bind(teacher.surname.clone())
            .push_bind(teacher.email.clone())
            .push_bind(teacher.password.clone())
            .push_bind(teacher.department_id);
    });

    Ok(builder.build().execute(&mut **tx).await?.rows_affected())
}

async fn insert_students_chunk(
    tx: &mut Transaction<'_, Postgres>,
    students: &[StudentSeed],
) -> Result<u64, sqlx::Error> {
    if students.is_empty() {
        return Ok(0);
    }

    let mut builder = QueryBuilder::<Postgres>::new(
        "INSERT INTO students (matricule, name, surname, year, password, program_id) ",
    );
    builder.push_values(students, |mut row, student| {
        row.push_bind(student.matricule.clone())
            .push_bind(student.name.clone())
            .push_bind(student.surname.clone())
            .push_bind(student.year.clone())
            .push_bind(student.password.clone())
            .push_bind(student.program_id);
    });

    Ok(builder.build().execute(&mut **tx).await?.rows_affected())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_teacher_matricules_are_unique() {
        let teachers = generate_teachers(&[1, 2, 3], 10, "ABC123");
        assert_eq!(teachers.len(), 30);
        let matricules: HashSet<_> = teachers.iter().map(|t| t.matricule.as_str()).collect();
        assert_eq!(matricules.len(), 30);
        assert!(teachers.iter().all(|t| t.matricule.len() <= 50));
    }

    #[test]
    fn test_students_get_a_known_year() {
        let students = generate_students(&[4], 20, "ABC123");
        assert_eq!(students.len(), 20);
        assert!(students.iter().all(|s| STUDY_YEARS.contains(&s.year.as_str())));
        assert!(students.iter().all(|s| s.program_id == 4));
    }

    #[test]
    fn test_run_token_shape() {
        let token = run_token();
        assert_eq!(token.len(), 6);
        assert_ne!(token, run_token());
    }
}
