pub mod config;
pub mod doc;
pub mod dtos;
pub mod error;
pub mod extract;
pub mod routes;
pub mod state;
pub mod utils;

use crate::{
    doc::ApiDoc,
    routes::{client, genre, health, movie, movie_copy, movie_rent, root},
    state::AppState,
};
use axum::{
    Router,
    routing::{get, put},
};
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Builds the application router with every route, the docs UI and compression
pub fn app(state: AppState) -> Router {
    let api = Router::new()
        .route("/", get(root::root))
        .route("/health", get(health::health))
        .route("/genres", get(genre::list_genres).post(genre::create_genre))
        .route(
            "/genres/{id}",
            get(genre::get_genre)
                .put(genre::update_genre)
                .delete(genre::delete_genre),
        )
        .route("/clients", get(client::list_clients).post(client::create_client))
        .route(
            "/clients/{id}",
            get(client::get_client)
                .put(client::update_client)
                .delete(client::delete_client),
        )
        .route("/movies", get(movie::list_movies).post(movie::create_movie))
        .route(
            "/movies/{id}",
            get(movie::get_movie)
                .put(movie::update_movie)
                .delete(movie::delete_movie),
        )
        .route(
            "/movie_copies",
            get(movie_copy::list_movie_copies).post(movie_copy::create_movie_copy),
        )
        .route(
            "/movie_copies/{id}",
            get(movie_copy::get_movie_copy)
                .put(movie_copy::update_movie_copy)
                .delete(movie_copy::delete_movie_copy),
        )
        .route(
            "/movie_rents",
            get(movie_rent::list_movie_rents).post(movie_rent::create_movie_rent),
        )
        .route(
            "/movie_rents/{id}",
            get(movie_rent::get_movie_rent)
                .put(movie_rent::update_movie_rent)
                .delete(movie_rent::delete_movie_rent),
        )
        .route("/movie_rents/{id}/close", put(movie_rent::close_movie_rent))
        .with_state(state);

    api.merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(ServiceBuilder::new().layer(CompressionLayer::new()))
}
