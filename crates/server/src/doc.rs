use crate::routes::{client, genre, health, movie, movie_copy, movie_rent, root};
use utoipa::OpenApi;

/// API Documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        root::root,
        health::health,
        genre::list_genres,
        genre::get_genre,
        genre::create_genre,
        genre::update_genre,
        genre::delete_genre,
        client::list_clients,
        client::get_client,
        client::create_client,
        client::update_client,
        client::delete_client,
        movie::list_movies,
        movie::get_movie,
        movie::create_movie,
        movie::update_movie,
        movie::delete_movie,
        movie_copy::list_movie_copies,
        movie_copy::get_movie_copy,
        movie_copy::create_movie_copy,
        movie_copy::update_movie_copy,
        movie_copy::delete_movie_copy,
        movie_rent::list_movie_rents,
        movie_rent::get_movie_rent,
        movie_rent::create_movie_rent,
        movie_rent::update_movie_rent,
        movie_rent::close_movie_rent,
        movie_rent::delete_movie_rent
    ),
    tags(
        (name = "Health", description = "Liveness endpoints"),
        (name = "Genres", description = "Movie genres"),
        (name = "Clients", description = "Registered clients"),
        (name = "Movies", description = "Movie catalog and stock"),
        (name = "Movie copies", description = "Individual physical copies"),
        (name = "Movie rents", description = "Rentals and their line items"),
    ),
    info(
        title = "Video Rental API",
        version = "1.0.0",
        description = "Catalog, stock and rental management for a video rental store",
        license(
            name = "MIT OR Apache-2.0",
        )
    )
)]
pub struct ApiDoc;
