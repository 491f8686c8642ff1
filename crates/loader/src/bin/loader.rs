use database::db::{create_connection, database_url};
use loader::{
    dataset::{DEFAULT_DATASET_DIR, Dataset},
    load::load,
};
use log::{error, info};
use std::{env, path::PathBuf, process::ExitCode};

/// Seeds the database from a directory of JSON files
#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init();

    let dir = env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATASET_DIR));

    match run(dir).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

async fn run(dir: PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    let url = database_url().map_err(|_| "DATABASE_URL must be set")?;

    info!("Reading dataset from {}", dir.display());
    let dataset = Dataset::read(&dir)?;

    let db = create_connection(&url).await?;
    load(&db, dataset).await?;
    db.close().await?;

    Ok(())
}
