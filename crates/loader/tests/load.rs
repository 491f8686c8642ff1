use database::{
    db::create_connection,
    entities::movie_copies,
    repository::{GenreRepository, MovieRentRepository},
    services::{
        catalog::{CatalogService, MovieChanges},
        rental::RentalService,
    },
};
use loader::{
    dataset::Dataset,
    load::{LoadSummary, load},
};
use migration::{Migrator, MigratorTrait};
use sea_orm::DatabaseConnection;
use std::path::PathBuf;

fn datasets_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../datasets")
}

async fn setup() -> DatabaseConnection {
    let db = create_connection("sqlite::memory:")
        .await
        .expect("Failed to open in-memory database");
    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");
    db
}

#[tokio::test]
async fn test_load_bundled_dataset() {
    let db = setup().await;
    let dataset = Dataset::read(&datasets_dir()).unwrap();

    let summary = load(&db, dataset).await.unwrap();

    assert_eq!(
        summary,
        LoadSummary {
            genres: 3,
            movies: 4,
            movie_copies: 8,
            clients: 2,
            movie_rents: 2,
            movie_rent_details: 4,
        }
    );

    let closed = MovieRentRepository::require(&db, 1).await.unwrap();
    assert!(closed.is_closed);
    let open = MovieRentRepository::require(&db, 2).await.unwrap();
    assert!(!open.is_closed);

    let slam_dunk = CatalogService::list_movies(&db, Some("Slam Dunk".to_owned()))
        .await
        .unwrap();
    assert_eq!(slam_dunk.len(), 2);
}

#[tokio::test]
async fn test_loaded_rows_keep_their_ids() {
    let db = setup().await;
    load(&db, Dataset::read(&datasets_dir()).unwrap()).await.unwrap();

    let (movie, copies) = CatalogService::get_movie(&db, 4).await.unwrap().unwrap();
    assert_eq!(movie.title, "Akira");
    assert_eq!(copies.iter().map(|c| c.id).collect::<Vec<_>>(), vec![7, 8]);

    let (_, details) = RentalService::get_rent(&db, 2).await.unwrap().unwrap();
    assert_eq!(details.iter().map(|d| d.movie_copy_id).collect::<Vec<_>>(), vec![2, 7]);

    let genre = GenreRepository::require(&db, 3).await.unwrap();
    assert_eq!(genre.name, "Science Fiction");
}

#[tokio::test]
async fn test_loaded_rents_pin_their_copies() {
    let db = setup().await;
    load(&db, Dataset::read(&datasets_dir()).unwrap()).await.unwrap();

    // copy 7 is rented, only copy 8 can go
    let (_, copies) = CatalogService::update_movie(&db, 4, MovieChanges::default(), Some(1))
        .await
        .unwrap();
    assert_eq!(copies.iter().map(|c| c.id).collect::<Vec<_>>(), vec![7]);
}

#[tokio::test]
async fn test_failed_load_writes_nothing() {
    let db = setup().await;
    let mut dataset = Dataset::read(&datasets_dir()).unwrap();
    // points at a client that is not part of the dataset
    dataset.movie_rents[1].client_id = 99;

    assert!(load(&db, dataset).await.is_err());
    assert!(GenreRepository::get_all(&db).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_load_many_copies() {
    let db = setup().await;
    let mut dataset = Dataset::read(&datasets_dir()).unwrap();
    dataset
        .movie_copies
        .extend((100..2_600).map(|id| movie_copies::Model {
            id,
            movie_id: 1,
            code: None,
        }));

    let summary = load(&db, dataset).await.unwrap();

    assert_eq!(summary.movie_copies, 2_508);
    let copies = CatalogService::copies_of(&db, 1).await.unwrap();
    assert_eq!(copies.len(), 2_503);
    assert_eq!(copies.last().map(|c| c.id), Some(2_599));
}
