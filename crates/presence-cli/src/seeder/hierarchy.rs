//! Departments, programs and courses.

use fake::Fake;
use fake::faker::company::en::{Industry, Profession};
use fake::faker::lorem::en::Word;
use rayon::prelude::*;
use sqlx::{PgPool, Postgres, QueryBuilder, Transaction};
use std::time::Instant;

use super::BATCH_SIZE;
use super::models::{CourseSeed, DepartmentSeed, ProgramSeed};

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn generate_departments(count: usize) -> Vec<DepartmentSeed> {
    (0..count)
        .into_par_iter()
        .map(|i| DepartmentSeed {
            name: format!("{} {}", Industry().fake::<String>(), i + 1),
        })
        .collect()
}

/// Generates `per_department` programs for each department id.
pub fn generate_programs(department_ids: &[i32], per_department: usize) -> Vec<ProgramSeed> {
    department_ids
        .par_iter()
        .flat_map_iter(|&department_id| {
            (0..per_department).map(move |i| ProgramSeed {
                name: format!("{} {}", Profession().fake::<String>(), i + 1),
                department_id,
            })
        })
        .collect()
}

/// Generates `per_program` courses for each program id. Codes are unique
/// within a run.
pub fn generate_courses(program_ids: &[i32], per_program: usize) -> Vec<CourseSeed> {
    program_ids
        .par_iter()
        .enumerate()
        .flat_map_iter(|(p, &program_id)| {
            (0..per_program).map(move |i| CourseSeed {
                name: capitalize(&Word().fake::<String>()),
                code: Some(format!("C{:03}-{:02}", p + 1, i + 1)),
                program_id,
            })
        })
        .collect()
}

pub async fn seed_departments(
    db: &PgPool,
    count: usize,
) -> Result<Vec<i32>, sqlx::Error> {
    let start_time = Instant::now();
    println!("🏛️  Seeding {} departments...", count);

    let departments = generate_departments(count);
    let mut tx = db.begin().await?;
    let mut ids = Vec::with_capacity(departments.len());
    for chunk in departments.chunks(BATCH_SIZE) {
        ids.extend(insert_departments_chunk(&mut tx, chunk).await?);
    }
    tx.commit().await?;

    println!(
        "   ✓ Inserted {} departments in {:?}",
        ids.len(),
        start_time.elapsed()
    );
    Ok(ids)
}

pub async fn seed_programs(
    db: &PgPool,
    department_ids: &[i32],
    per_department: usize,
) -> Result<Vec<i32>, sqlx::Error> {
    let start_time = Instant::now();
    println!("🎓 Seeding programs...");

    let programs = generate_programs(department_ids, per_department);
    let mut tx = db.begin().await?;
    let mut ids = Vec::with_capacity(programs.len());
    for chunk in programs.chunks(BATCH_SIZE) {
        ids.extend(insert_programs_chunk(&mut tx, chunk).await?);
    }
    tx.commit().await?;

    println!(
        "   ✓ Inserted {} programs in {:?}",
        ids.len(),
        start_time.elapsed()
    );
    Ok(ids)
}

pub async fn seed_courses(
    db: &PgPool,
    program_ids: &[i32],
    per_program: usize,
) -> Result<u64, sqlx::Error> {
    let start_time = Instant::now();
    println!("📖 Seeding courses...");

    let courses = generate_courses(program_ids, per_program);
    let mut tx = db.begin().await?;
    let mut inserted = 0;
    for chunk in courses.chunks(BATCH_SIZE) {
        inserted += insert_courses_chunk(&mut tx, chunk).await?;
    }
    tx.commit().await?;

    println!(
        "   ✓ Inserted {} courses in {:?}",
        inserted,
        start_time.elapsed()
    );
    Ok(inserted)
}

async fn insert_departments_chunk(
    tx: &mut Transaction<'_, Postgres>,
    departments: &[DepartmentSeed],
) -> Result<Vec<i32>, sqlx::Error> {
    if departments.is_empty() {
        return Ok(Vec::new());
    }

    let mut builder = QueryBuilder::<Postgres>::new("INSERT INTO departments (name) ");
    builder.push_values(departments, |mut row, department| {
        row.push_bind(department.name.clone());
    });
    builder.push(" RETURNING id");

    builder.build_query_scalar().fetch_all(&mut **tx).await
}

async fn insert_programs_chunk(
    tx: &mut Transaction<'_, Postgres>,
    programs: &[ProgramSeed],
) -> Result<Vec<i32>, sqlx::Error> {
    if programs.is_empty() {
        return Ok(Vec::new());
    }

    let mut builder = QueryBuilder::<Postgres>::new("INSERT INTO programs (name, department_id) ");
    builder.push_values(programs, |mut row, program| {
        row.push_bind(program.name.clone())
            .push_bind(program.department_id);
    });
    builder.push(" RETURNING id");

    builder.build_query_scalar().fetch_all(&mut **tx).await
}

async fn insert_courses_chunk(
    tx: &mut Transaction<'_, Postgres>,
    courses: &[CourseSeed],
) -> Result<u64, sqlx::Error> {
    if courses.is_empty() {
        return Ok(0);
    }

    let mut builder = QueryBuilder::<Postgres>::new("INSERT INTO courses (name, code, program_id) ");
    builder.push_values(courses, |mut row, course| {
        row.push_bind(course.name.clone())
            .push_bind(course.code.clone())
            .push_bind(course.program_id);
    });

    Ok(builder.build().execute(&mut **tx).await?.rows_affected())
}
