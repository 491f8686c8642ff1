use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use std::env;

/// Reads `DATABASE_URL`, honouring a `.env` file when present
pub fn database_url() -> Result<String, env::VarError> {
    dotenvy::dotenv().ok();
    env::var("DATABASE_URL")
}

/// Creates a pooled database connection
pub async fn create_connection(url: &str) -> Result<DatabaseConnection, DbErr> {
    let mut options = ConnectOptions::new(url);
    options.sqlx_logging_level(log::LevelFilter::Debug);

    // Every connection to `sqlite::memory:` opens its own empty database
    if url.starts_with("sqlite::memory:") {
        options.max_connections(1);
    }

    Database::connect(options).await
}
