use crate::{
    dtos::movie_copy::{MovieCopyCreate, MovieCopyResponse, MovieCopyUpdate},
    error::{ApiError, ErrorResponse},
    extract::AppJson,
    state::AppState,
};
use axum::{
    Json,
    extract::{Path, State},
};
use database::repository::MovieCopyRepository;

#[utoipa::path(
    get,
    path = "/movie_copies",
    responses(
        (status = 200, description = "Movie copies retrieved successfully", body = Vec<MovieCopyResponse>)
    ),
    tag = "Movie copies"
)]
pub async fn list_movie_copies(
    State(state): State<AppState>,
) -> Result<Json<Vec<MovieCopyResponse>>, ApiError> {
    let copies = MovieCopyRepository::get_all(&state.db).await?;
    Ok(Json(copies.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    get,
    path = "/movie_copies/{id}",
    params(("id" = i32, Path, description = "Movie copy ID")),
    responses(
        (status = 200, description = "Movie copy found", body = MovieCopyResponse),
        (status = 404, description = "Movie copy not found", body = ErrorResponse)
    ),
    tag = "Movie copies"
)]
pub async fn get_movie_copy(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<MovieCopyResponse>, ApiError> {
    let copy = MovieCopyRepository::require(&state.db, id).await?;
    Ok(Json(copy.into()))
}

/// Register a single copy of an existing movie
#[utoipa::path(
    post,
    path = "/movie_copies",
    request_body = MovieCopyCreate,
    responses(
        (status = 200, description = "Movie copy created", body = MovieCopyResponse),
        (status = 422, description = "Invalid body or unknown movie", body = ErrorResponse)
    ),
    tag = "Movie copies"
)]
pub async fn create_movie_copy(
    State(state): State<AppState>,
    AppJson(copy): AppJson<MovieCopyCreate>,
) -> Result<Json<MovieCopyResponse>, ApiError> {
    let copy = MovieCopyRepository::add(&state.db, copy.into()).await?;
    Ok(Json(copy.into()))
}

#[utoipa::path(
    put,
    path = "/movie_copies/{id}",
    params(("id" = i32, Path, description = "Movie copy ID")),
    request_body = MovieCopyUpdate,
    responses(
        (status = 200, description = "Movie copy updated", body = MovieCopyResponse),
        (status = 404, description = "Movie copy not found", body = ErrorResponse),
        (status = 422, description = "Unknown movie", body = ErrorResponse)
    ),
    tag = "Movie copies"
)]
pub async fn update_movie_copy(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    AppJson(copy): AppJson<MovieCopyUpdate>,
) -> Result<Json<MovieCopyResponse>, ApiError> {
    let copy = MovieCopyRepository::update(&state.db, id, copy.into()).await?;
    Ok(Json(copy.into()))
}

/// Delete a copy that no rent refers to
#[utoipa::path(
    delete,
    path = "/movie_copies/{id}",
    params(("id" = i32, Path, description = "Movie copy ID")),
    responses(
        (status = 200, description = "Movie copy deleted", body = bool),
        (status = 404, description = "Movie copy not found", body = ErrorResponse),
        (status = 422, description = "Movie copy is part of a rent", body = ErrorResponse)
    ),
    tag = "Movie copies"
)]
pub async fn delete_movie_copy(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<bool>, ApiError> {
    MovieCopyRepository::delete(&state.db, id).await?;
    Ok(Json(true))
}
