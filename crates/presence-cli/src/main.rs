use clap::{Parser, Subcommand};
use dialoguer::{Input, Password};
use dotenvy::dotenv;
use sqlx::PgPool;

use presence_cli::admin::{NewAdmin, create_admin};
use presence_cli::seeder::{self, SeedConfig};
use presence_config::DatabaseConfig;
use presence_db::{init_db_pool, run_migrations};

#[derive(Parser)]
#[command(name = "presence-cli")]
#[command(about = "Presence CLI - Administrative tools for the attendance console", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create an administrator account
    CreateAdmin {
        /// Display name of the administrator
        #[arg(short = 'n', long)]
        name: Option<String>,

        /// Email address (used as login identifier)
        #[arg(short = 'e', long)]
        email: Option<String>,

        /// Password (will be prompted if not provided)
        #[arg(short = 'p', long)]
        password: Option<String>,
    },
    /// Seed the database with fake departments, programs, courses, teachers and students
    Seed {
        /// Number of departments to create
        #[arg(short = 'd', long, default_value = "4")]
        departments: usize,

        /// Number of programs per department
        #[arg(long, default_value = "3")]
        programs: usize,

        /// Number of courses per program
        #[arg(long, default_value = "6")]
        courses: usize,

        /// Number of teachers per department
        #[arg(long, default_value = "5")]
        teachers: usize,

        /// Number of students per program
        #[arg(long, default_value = "25")]
        students: usize,
    },
    /// Clear all hierarchy and people records (keeps administrators)
    ClearSeed,
}

#[tokio::main]
async fn main() {
    dotenv().ok();
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("\n❌ Error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let pool = init_db_pool(&DatabaseConfig::from_env()).await?;
    run_migrations(&pool).await?;

    match cli.command {
        Commands::CreateAdmin {
            name,
            email,
            password,
        } => handle_create_admin(&pool, name, email, password).await,
        Commands::Seed {
            departments,
            programs,
            courses,
            teachers,
            students,
        } => {
            let config = SeedConfig {
                departments,
                programs_per_department: programs,
                courses_per_program: courses,
                teachers_per_department: teachers,
                students_per_program: students,
            };
            seeder::seed_all(&pool, config).await?;
            Ok(())
        }
        Commands::ClearSeed => {
            seeder::clear_all(&pool).await?;
            Ok(())
        }
    }
}

async fn handle_create_admin(
    pool: &PgPool,
    name: Option<String>,
    email: Option<String>,
    password: Option<String>,
) -> anyhow::Result<()> {
    let name = match name {
        Some(name) => name,
        None => Input::new().with_prompt("Name").interact_text()?,
    };

    let email = match email {
        Some(email) => email,
        None => Input::new().with_prompt("Email address").interact_text()?,
    };

    let password = match password {
        Some(password) => password,
        None => Password::new()
            .with_prompt("Password")
            .with_confirmation("Confirm password", "Passwords don't match")
            .interact()?,
    };

    let admin = create_admin(
        pool,
        NewAdmin {
            name: &name,
            email: &email,
            password: &password,
        },
    )
    .await?;

    println!("\n✅ Administrator created successfully!");
    println!("   Id: {}", admin.id);
    println!("   Email: {}", admin.email);
    println!("   Name: {}", admin.name);
    Ok(())
}
