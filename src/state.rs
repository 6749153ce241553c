use presence_config::{DatabaseConfig, SessionConfig};
use presence_db::{PgPool, init_db_pool};

#[derive(Clone, Debug)]
pub struct AppState {
    pub db: PgPool,
    pub session_config: SessionConfig,
}

impl AppState {
    pub fn new(db: PgPool, session_config: SessionConfig) -> Self {
        Self { db, session_config }
    }
}

pub async fn init_app_state(database: &DatabaseConfig) -> Result<AppState, sqlx::Error> {
    Ok(AppState {
        db: init_db_pool(database).await?,
        session_config: SessionConfig::from_env(),
    })
}
