use crate::{
    dtos::genre::{GenreCreate, GenreResponse, GenreUpdate},
    error::{ApiError, ErrorResponse},
    extract::AppJson,
    state::AppState,
};
use axum::{
    Json,
    extract::{Path, State},
};
use database::repository::GenreRepository;

/// List all genres
#[utoipa::path(
    get,
    path = "/genres",
    responses(
        (status = 200, description = "Genres retrieved successfully", body = Vec<GenreResponse>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Genres"
)]
pub async fn list_genres(State(state): State<AppState>) -> Result<Json<Vec<GenreResponse>>, ApiError> {
    let genres = GenreRepository::get_all(&state.db).await?;
    Ok(Json(genres.into_iter().map(Into::into).collect()))
}

/// Get a genre by ID
#[utoipa::path(
    get,
    path = "/genres/{id}",
    params(("id" = i32, Path, description = "Genre ID")),
    responses(
        (status = 200, description = "Genre found", body = GenreResponse),
        (status = 404, description = "Genre not found", body = ErrorResponse)
    ),
    tag = "Genres"
)]
pub async fn get_genre(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<GenreResponse>, ApiError> {
    let genre = GenreRepository::require(&state.db, id).await?;
    Ok(Json(genre.into()))
}

#[utoipa::path(
    post,
    path = "/genres",
    request_body = GenreCreate,
    responses(
        (status = 200, description = "Genre created", body = GenreResponse),
        (status = 422, description = "Invalid body", body = ErrorResponse)
    ),
    tag = "Genres"
)]
pub async fn create_genre(
    State(state): State<AppState>,
    AppJson(genre): AppJson<GenreCreate>,
) -> Result<Json<GenreResponse>, ApiError> {
    let genre = GenreRepository::add(&state.db, genre.into()).await?;
    Ok(Json(genre.into()))
}

#[utoipa::path(
    put,
    path = "/genres/{id}",
    params(("id" = i32, Path, description = "Genre ID")),
    request_body = GenreUpdate,
    responses(
        (status = 200, description = "Genre updated", body = GenreResponse),
        (status = 404, description = "Genre not found", body = ErrorResponse)
    ),
    tag = "Genres"
)]
pub async fn update_genre(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    AppJson(genre): AppJson<GenreUpdate>,
) -> Result<Json<GenreResponse>, ApiError> {
    let genre = GenreRepository::update(&state.db, id, genre.into()).await?;
    Ok(Json(genre.into()))
}

/// Delete a genre. Genres still used by movies cannot be deleted.
#[utoipa::path(
    delete,
    path = "/genres/{id}",
    params(("id" = i32, Path, description = "Genre ID")),
    responses(
        (status = 200, description = "Genre deleted", body = bool),
        (status = 404, description = "Genre not found", body = ErrorResponse),
        (status = 422, description = "Genre still referenced by movies", body = ErrorResponse)
    ),
    tag = "Genres"
)]
pub async fn delete_genre(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<bool>, ApiError> {
    GenreRepository::delete(&state.db, id).await?;
    Ok(Json(true))
}
