use crate::{
    dtos::movie::{MovieCreate, MovieQueryParams, MovieResponse, MovieUpdate},
    error::{ApiError, ErrorResponse},
    extract::{AppJson, AppQuery},
    state::AppState,
};
use axum::{
    Json,
    extract::{Path, State},
};
use database::{error::ServiceError, services::catalog::CatalogService};

/// List movies with their copies
#[utoipa::path(
    get,
    path = "/movies",
    params(MovieQueryParams),
    responses(
        (status = 200, description = "Movies retrieved successfully", body = Vec<MovieResponse>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Movies"
)]
pub async fn list_movies(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<MovieQueryParams>,
) -> Result<Json<Vec<MovieResponse>>, ApiError> {
    let movies = CatalogService::list_movies(&state.db, params.title).await?;
    Ok(Json(movies.into_iter().map(Into::into).collect()))
}

/// Get a movie by ID
#[utoipa::path(
    get,
    path = "/movies/{id}",
    params(("id" = i32, Path, description = "Movie ID")),
    responses(
        (status = 200, description = "Movie found", body = MovieResponse),
        (status = 404, description = "Movie not found", body = ErrorResponse)
    ),
    tag = "Movies"
)]
pub async fn get_movie(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<MovieResponse>, ApiError> {
    let movie = CatalogService::get_movie(&state.db, id)
        .await?
        .ok_or_else(|| ServiceError::not_found("Movie", id))?;

    Ok(Json(movie.into()))
}

/// Create a movie together with `stock` copies
#[utoipa::path(
    post,
    path = "/movies",
    request_body = MovieCreate,
    responses(
        (status = 200, description = "Movie created", body = MovieResponse),
        (status = 422, description = "Invalid body or unknown genre", body = ErrorResponse)
    ),
    tag = "Movies"
)]
pub async fn create_movie(
    State(state): State<AppState>,
    AppJson(movie): AppJson<MovieCreate>,
) -> Result<Json<MovieResponse>, ApiError> {
    let (movie, stock) = movie.into_parts();
    let created = CatalogService::create_movie(&state.db, movie, stock).await?;
    Ok(Json(created.into()))
}

/// Update a movie; a `stock` value adds or removes copies to match it
#[utoipa::path(
    put,
    path = "/movies/{id}",
    params(("id" = i32, Path, description = "Movie ID")),
    request_body = MovieUpdate,
    responses(
        (status = 200, description = "Movie updated", body = MovieResponse),
        (status = 404, description = "Movie not found", body = ErrorResponse),
        (status = 409, description = "Rented copies prevent the stock change", body = ErrorResponse),
        (status = 422, description = "Invalid body or unknown genre", body = ErrorResponse)
    ),
    tag = "Movies"
)]
pub async fn update_movie(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    AppJson(movie): AppJson<MovieUpdate>,
) -> Result<Json<MovieResponse>, ApiError> {
    let (changes, stock) = movie.into_parts();
    let updated = CatalogService::update_movie(&state.db, id, changes, stock).await?;
    Ok(Json(updated.into()))
}

/// Delete a movie and all of its copies
#[utoipa::path(
    delete,
    path = "/movies/{id}",
    params(("id" = i32, Path, description = "Movie ID")),
    responses(
        (status = 200, description = "Movie deleted", body = bool),
        (status = 404, description = "Movie not found", body = ErrorResponse),
        (status = 409, description = "Some copies are part of a rent", body = ErrorResponse)
    ),
    tag = "Movies"
)]
pub async fn delete_movie(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<bool>, ApiError> {
    CatalogService::delete_movie(&state.db, id).await?;
    Ok(Json(true))
}
