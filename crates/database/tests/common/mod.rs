#![allow(dead_code)]

use database::{
    db::create_connection,
    entities::{clients, genres, movie_copies, movies},
    repository::{ClientRepository, GenreRepository},
    services::catalog::{CatalogService, NewMovie},
};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ActiveValue::Set, DatabaseConnection};

/// Fresh in-memory database with the full schema applied
pub async fn setup() -> DatabaseConnection {
    let db = create_connection("sqlite::memory:")
        .await
        .expect("Failed to open in-memory database");
    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");
    db
}

pub async fn seed_genre(db: &DatabaseConnection) -> genres::Model {
    GenreRepository::add(
        db,
        genres::ActiveModel {
            name: Set("Animation".to_owned()),
            description: Set("Animated films".to_owned()),
            ..Default::default()
        },
    )
    .await
    .unwrap()
}

pub async fn seed_client(db: &DatabaseConnection) -> clients::Model {
    ClientRepository::add(
        db,
        clients::ActiveModel {
            first_name: Set("Ada".to_owned()),
            last_name: Set("Lovelace".to_owned()),
            address: Set("12 St James's Square".to_owned()),
            license_number: Set(1815),
            ..Default::default()
        },
    )
    .await
    .unwrap()
}

pub fn lion_king(genre_id: i32) -> NewMovie {
    NewMovie {
        title: "The Lion King".to_owned(),
        description: "The Lion King movie".to_owned(),
        year: 2024,
        director: "Rob Minkoff · Roger Allers".to_owned(),
        genre_id,
    }
}

pub async fn seed_movie(
    db: &DatabaseConnection,
    stock: u32,
) -> (movies::Model, Vec<movie_copies::Model>) {
    let genre = seed_genre(db).await;
    CatalogService::create_movie(db, lion_king(genre.id), stock)
        .await
        .unwrap()
}
