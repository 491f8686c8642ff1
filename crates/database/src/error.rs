use models::{rent::TransitionError, rent_detail::DetailError, stock::StockError};
use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

/// Errors surfaced by repositories and services
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The referenced parent row does not exist
    #[error("{entity} not found")]
    NotFound { entity: &'static str, id: i32 },

    /// Malformed or referentially invalid input
    #[error("{0}")]
    Validation(String),

    /// The request clashes with the current state of the data
    #[error("{0}")]
    Conflict(String),

    #[error("database error: {0}")]
    Database(DbErr),
}

impl ServiceError {
    pub fn not_found(entity: &'static str, id: i32) -> Self {
        Self::NotFound { entity, id }
    }
}

impl From<DbErr> for ServiceError {
    fn from(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::ForeignKeyConstraintViolation(msg)) => Self::Validation(msg),
            Some(SqlErr::UniqueConstraintViolation(msg)) => Self::Conflict(msg),
            _ => Self::Database(err),
        }
    }
}

impl From<StockError> for ServiceError {
    fn from(err: StockError) -> Self {
        Self::Conflict(err.to_string())
    }
}

impl From<DetailError> for ServiceError {
    fn from(err: DetailError) -> Self {
        Self::Validation(err.to_string())
    }
}

impl From<TransitionError> for ServiceError {
    fn from(err: TransitionError) -> Self {
        match err {
            TransitionError::Inconsistent => Self::Database(DbErr::Custom(err.to_string())),
            TransitionError::Reopen | TransitionError::AlreadyClosed => {
                Self::Conflict(err.to_string())
            }
        }
    }
}
