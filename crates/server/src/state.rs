use sea_orm::DatabaseConnection;

/// Shared handler state; the connection is a pool and cheap to clone
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
}
