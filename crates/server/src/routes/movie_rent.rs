use crate::{
    dtos::movie_rent::{MovieRentCreate, MovieRentResponse, MovieRentUpdate},
    error::{ApiError, ErrorResponse},
    extract::AppJson,
    state::AppState,
};
use axum::{
    Json,
    extract::{Path, State},
};
use database::{
    error::ServiceError,
    services::rental::{RentalService, RentWithDetails},
};

/// List all rents with their line items
#[utoipa::path(
    get,
    path = "/movie_rents",
    responses(
        (status = 200, description = "Movie rents retrieved successfully", body = Vec<MovieRentResponse>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Movie rents"
)]
pub async fn list_movie_rents(
    State(state): State<AppState>,
) -> Result<Json<Vec<MovieRentResponse>>, ApiError> {
    let rents = RentalService::list_rents(&state.db).await?;
    Ok(Json(rents.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    get,
    path = "/movie_rents/{id}",
    params(("id" = i32, Path, description = "Movie rent ID")),
    responses(
        (status = 200, description = "Movie rent found", body = MovieRentResponse),
        (status = 404, description = "Movie Rent not found", body = ErrorResponse)
    ),
    tag = "Movie rents"
)]
pub async fn get_movie_rent(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<MovieRentResponse>, ApiError> {
    let rent = RentalService::get_rent(&state.db, id)
        .await?
        .ok_or_else(|| ServiceError::not_found("Movie Rent", id))?;

    Ok(Json(rent.into()))
}

/// Open a rent for a client
#[utoipa::path(
    post,
    path = "/movie_rents",
    request_body = MovieRentCreate,
    responses(
        (status = 200, description = "Movie rent created", body = MovieRentResponse),
        (status = 422, description = "Invalid body, unknown client or unknown copies", body = ErrorResponse)
    ),
    tag = "Movie rents"
)]
pub async fn create_movie_rent(
    State(state): State<AppState>,
    AppJson(rent): AppJson<MovieRentCreate>,
) -> Result<Json<MovieRentResponse>, ApiError> {
    let created = RentalService::create_rent(&state.db, rent.into()).await?;
    Ok(Json(created.into()))
}

/// Replace the line items of an open rent.
///
/// Items carrying the id of one of the rent's line items are kept, the rest
/// are added, and stored items left out of the list are removed.
#[utoipa::path(
    put,
    path = "/movie_rents/{id}",
    params(("id" = i32, Path, description = "Movie rent ID")),
    request_body = MovieRentUpdate,
    responses(
        (status = 200, description = "Movie rent updated", body = MovieRentResponse),
        (status = 404, description = "Movie Rent not found", body = ErrorResponse),
        (status = 409, description = "Movie rent is closed", body = ErrorResponse),
        (status = 422, description = "Invalid body, unknown client or unknown copies", body = ErrorResponse)
    ),
    tag = "Movie rents"
)]
pub async fn update_movie_rent(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    AppJson(rent): AppJson<MovieRentUpdate>,
) -> Result<Json<MovieRentResponse>, ApiError> {
    let updated = RentalService::update_rent(&state.db, id, rent.into()).await?;
    Ok(Json(updated.into()))
}

/// Close a rent. Closing twice keeps the first closing time.
#[utoipa::path(
    put,
    path = "/movie_rents/{id}/close",
    params(("id" = i32, Path, description = "Movie rent ID")),
    responses(
        (status = 200, description = "Movie rent closed", body = MovieRentResponse),
        (status = 404, description = "Movie Rent not found", body = ErrorResponse)
    ),
    tag = "Movie rents"
)]
pub async fn close_movie_rent(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<MovieRentResponse>, ApiError> {
    let rent = RentalService::close_rent(&state.db, id).await?;
    let details = RentalService::details_of(&state.db, id).await?;
    let closed: RentWithDetails = (rent, details);

    Ok(Json(closed.into()))
}

#[utoipa::path(
    delete,
    path = "/movie_rents/{id}",
    params(("id" = i32, Path, description = "Movie rent ID")),
    responses(
        (status = 200, description = "Movie rent deleted", body = bool),
        (status = 404, description = "Movie Rent not found", body = ErrorResponse)
    ),
    tag = "Movie rents"
)]
pub async fn delete_movie_rent(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<bool>, ApiError> {
    RentalService::delete_rent(&state.db, id).await?;
    Ok(Json(true))
}
