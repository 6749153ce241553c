//! Database seeding with generated data.
//!
//! Records are generated in parallel with `rayon` and `fake`, then inserted
//! in multi-row batches, one transaction per table.

pub mod hierarchy;
pub mod models;
pub mod people;

use sqlx::PgPool;
use std::time::Instant;

pub use models::SeedConfig;

/// Rows per multi-value INSERT.
pub(crate) const BATCH_SIZE: usize = 500;

/// Totals reported by [`seed_all`].
#[derive(Debug, Default)]
pub struct SeedSummary {
    pub departments: usize,
    pub programs: usize,
    pub courses: u64,
    pub teachers: u64,
    pub students: u64,
}

pub async fn seed_all(db: &PgPool, config: SeedConfig) -> Result<SeedSummary, sqlx::Error> {
    let start_time = Instant::now();
    println!("🌱 Seeding database...\n");

    let token = people::run_token();
    let department_ids = hierarchy::seed_departments(db, config.departments).await?;
    let program_ids =
        hierarchy::seed_programs(db, &department_ids, config.programs_per_department).await?;
    let courses = hierarchy::seed_courses(db, &program_ids, config.courses_per_program).await?;
    let teachers =
        people::seed_teachers(db, &department_ids, config.teachers_per_department, &token).await?;
    let students =
        people::seed_students(db, &program_ids, config.students_per_program, &token).await?;

    let summary = SeedSummary {
        departments: department_ids.len(),
        programs: program_ids.len(),
        courses,
        teachers,
        students,
    };

    println!("\n✅ Seeding completed in {:?}", start_time.elapsed());
    println!("   Departments: {}", summary.departments);
    println!("   Programs:    {}", summary.programs);
    println!("   Courses:     {}", summary.courses);
    println!("   Teachers:    {}", summary.teachers);
    println!("   Students:    {}", summary.students);
    println!("   Password for seeded accounts: {}", people::SEED_PASSWORD);

    Ok(summary)
}

/// Deletes every department, program, course, teacher and student.
/// Administrator accounts are kept.
pub async fn clear_all(db: &PgPool) -> Result<(), sqlx::Error> {
    let start_time = Instant::now();
    println!("🗑️  Clearing seeded data...");

    let mut tx = db.begin().await?;
    // Children first; the foreign keys restrict the other order.
    for table in ["students", "teachers", "courses", "programs", "departments"] {
        let deleted = sqlx::query(&format!("DELETE FROM {}", table))
            .execute(&mut *tx)
            .await?
            .rows_affected();
        println!("   ✓ Deleted {} {}", deleted, table);
    }
    tx.commit().await?;

    println!("\n✅ Cleared in {:?}", start_time.elapsed());
    Ok(())
}
