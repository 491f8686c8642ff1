use database::db::create_connection;
use log::{error, info};
use migration::{Migrator, MigratorTrait};
use server::{app, config::Config, state::AppState, utils::shutdown::shutdown_signal};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env()?;

    let db = create_connection(&config.database_url).await?;
    if config.run_migrations {
        info!("Applying pending migrations");
        Migrator::up(&db, None).await?;
    }

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!("Running axum on http://{}", config.bind_addr);

    axum::serve(listener, app(AppState { db: db.clone() }))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    db.close().await?;
    info!("Server stopped");
    Ok(())
}
