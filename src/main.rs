use anyhow::Context;
use dotenvy::dotenv;
use tracing::{info, warn};

use presence::logging::init_logging;
use presence::router::init_router;
use presence::state::init_app_state;
use presence_config::{DatabaseConfig, ServerConfig};
use presence_db::run_migrations;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    init_logging();

    let database = DatabaseConfig::from_env();
    let server = ServerConfig::from_env();

    let state = init_app_state(&database)
        .await
        .context("Failed to connect to database")?;
    run_migrations(&state.db)
        .await
        .context("Failed to run database migrations")?;

    if !state.session_config.student_login_requires_password {
        warn!(
            "Student logins are accepted on matricule alone; set STUDENT_LOGIN_REQUIRES_PASSWORD=true to check passwords"
        );
    }

    let app = init_router(state);

    let address = server.bind_address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {}", address))?;
    info!(address = %address, "Server listening");

    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}
