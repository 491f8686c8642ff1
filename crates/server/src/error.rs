use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use database::error::ServiceError;
use log::error;
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

/// Error body returned by every endpoint
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub detail: String,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Service(#[from] ServiceError),

    #[error(transparent)]
    Json(#[from] JsonRejection),

    #[error(transparent)]
    Query(#[from] QueryRejection),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Service(ServiceError::NotFound { .. }) => StatusCode::NOT_FOUND,
            Self::Service(ServiceError::Validation(_)) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Service(ServiceError::Conflict(_)) => StatusCode::CONFLICT,
            Self::Service(ServiceError::Database(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Json(rejection) => rejection.status(),
            Self::Query(rejection) => rejection.status(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        let detail = match &self {
            Self::Service(ServiceError::Database(err)) => {
                error!("Database error: {err}");
                "Internal server error".to_owned()
            }
            Self::Json(rejection) => rejection.body_text(),
            Self::Query(rejection) => rejection.body_text(),
            Self::Service(err) => err.to_string(),
        };

        (status, Json(ErrorResponse { detail })).into_response()
    }
}
