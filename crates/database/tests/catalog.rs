mod common;

use common::{lion_king, seed_client, seed_genre, seed_movie, setup};
use database::{
    error::ServiceError,
    repository::MovieRepository,
    services::{
        catalog::{CatalogService, MovieChanges},
        rental::{NewRent, RentalService},
    },
};
use models::rent_detail::DetailEntry;
use sea_orm::TransactionTrait;

fn ids<T>(rows: &[T], id: impl Fn(&T) -> i32) -> Vec<i32> {
    rows.iter().map(id).collect()
}

#[tokio::test]
async fn test_create_movie_with_stock() {
    let db = setup().await;
    let (movie, copies) = seed_movie(&db, 5).await;

    assert_eq!(movie.title, "The Lion King");
    assert_eq!(copies.len(), 5);
    assert!(copies.iter().all(|c| c.movie_id == movie.id && c.code.is_none()));
}

#[tokio::test]
async fn test_update_stock_down_then_up() {
    let db = setup().await;
    let (movie, copies) = seed_movie(&db, 5).await;

    let changes = MovieChanges {
        title: Some("The Lion King 2".to_owned()),
        description: Some("The Lion King 2 movie".to_owned()),
        ..Default::default()
    };
    let (updated, remaining) = CatalogService::update_movie(&db, movie.id, changes, Some(2))
        .await
        .unwrap();

    assert_eq!(updated.title, "The Lion King 2");
    assert_eq!(updated.description, "The Lion King 2 movie");
    assert_eq!(updated.director, movie.director);
    // lowest ids go first
    assert_eq!(ids(&remaining, |c| c.id), ids(&copies[3..], |c| c.id));

    let (_, grown) = CatalogService::update_movie(&db, movie.id, MovieChanges::default(), Some(10))
        .await
        .unwrap();
    assert_eq!(grown.len(), 10);
    assert!(grown.iter().all(|c| c.movie_id == movie.id));
}

#[tokio::test]
async fn test_update_without_stock_keeps_copies() {
    let db = setup().await;
    let (movie, copies) = seed_movie(&db, 3).await;

    let changes = MovieChanges {
        year: Some(1994),
        ..Default::default()
    };
    let (updated, after) = CatalogService::update_movie(&db, movie.id, changes, None)
        .await
        .unwrap();

    assert_eq!(updated.year, 1994);
    assert_eq!(after, copies);
}

#[tokio::test]
async fn test_reconcile_stock_is_idempotent() {
    let db = setup().await;
    let (movie, _) = seed_movie(&db, 0).await;

    let txn = db.begin().await.unwrap();
    let first = CatalogService::reconcile_stock(&txn, movie.id, 4).await.unwrap();
    let second = CatalogService::reconcile_stock(&txn, movie.id, 4).await.unwrap();
    txn.commit().await.unwrap();

    assert_eq!(first.len(), 4);
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_reconcile_stock_to_zero() {
    let db = setup().await;
    let (movie, _) = seed_movie(&db, 3).await;

    let txn = db.begin().await.unwrap();
    let remaining = CatalogService::reconcile_stock(&txn, movie.id, 0).await.unwrap();
    txn.commit().await.unwrap();

    assert!(remaining.is_empty());
    assert!(CatalogService::copies_of(&db, movie.id).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_reconcile_stock_of_missing_movie() {
    let db = setup().await;

    let txn = db.begin().await.unwrap();
    let err = CatalogService::reconcile_stock(&txn, 404, 3).await.unwrap_err();
    txn.rollback().await.unwrap();

    assert!(matches!(err, ServiceError::NotFound { entity: "Movie", id: 404 }));
}

#[tokio::test]
async fn test_large_stock_is_written_in_batches() {
    let db = setup().await;
    let (movie, copies) = seed_movie(&db, 20_000).await;
    assert_eq!(copies.len(), 20_000);

    let listed = CatalogService::list_movies(&db, None).await.unwrap();
    assert_eq!(listed[0].1.len(), 20_000);

    let (_, remaining) =
        CatalogService::update_movie(&db, movie.id, MovieChanges::default(), Some(3))
            .await
            .unwrap();

    assert_eq!(ids(&remaining, |c| c.id), ids(&copies[..3], |c| c.id));
    assert_eq!(CatalogService::copies_of(&db, movie.id).await.unwrap().len(), 3);
}

#[tokio::test]
async fn test_create_movie_with_unknown_genre() {
    let db = setup().await;

    let err = CatalogService::create_movie(&db, lion_king(42), 5)
        .await
        .unwrap_err();

    assert!(matches!(err, ServiceError::Validation(_)));
    assert!(MovieRepository::get_all(&db).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_update_missing_movie() {
    let db = setup().await;

    let err = CatalogService::update_movie(&db, 1000, MovieChanges::default(), Some(2))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ServiceError::NotFound {
            entity: "Movie",
            id: 1000
        }
    ));
    assert_eq!(err.to_string(), "Movie not found");
}

#[tokio::test]
async fn test_rented_copies_are_never_removed() {
    let db = setup().await;
    let (movie, copies) = seed_movie(&db, 3).await;
    let client = seed_client(&db).await;

    RentalService::create_rent(
        &db,
        NewRent {
            client_id: client.id,
            details: vec![DetailEntry::new(None, copies[0].id)],
        },
    )
    .await
    .unwrap();

    let (_, remaining) = CatalogService::update_movie(&db, movie.id, MovieChanges::default(), Some(1))
        .await
        .unwrap();
    assert_eq!(ids(&remaining, |c| c.id), vec![copies[0].id]);

    let err = CatalogService::update_movie(&db, movie.id, MovieChanges::default(), Some(0))
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::Conflict(_)));
    assert_eq!(CatalogService::copies_of(&db, movie.id).await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_delete_movie_removes_copies() {
    let db = setup().await;
    let (movie, _) = seed_movie(&db, 4).await;

    CatalogService::delete_movie(&db, movie.id).await.unwrap();

    assert!(MovieRepository::get(&db, movie.id).await.unwrap().is_none());
    assert!(CatalogService::copies_of(&db, movie.id).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_delete_movie_with_rented_copy_is_rejected() {
    let db = setup().await;
    let (movie, copies) = seed_movie(&db, 2).await;
    let client = seed_client(&db).await;

    RentalService::create_rent(
        &db,
        NewRent {
            client_id: client.id,
            details: vec![DetailEntry::new(None, copies[1].id)],
        },
    )
    .await
    .unwrap();

    let err = CatalogService::delete_movie(&db, movie.id).await.unwrap_err();

    assert!(matches!(err, ServiceError::Conflict(_)));
    assert!(MovieRepository::get(&db, movie.id).await.unwrap().is_some());
    assert_eq!(CatalogService::copies_of(&db, movie.id).await.unwrap(), copies);
}

#[tokio::test]
async fn test_list_movies_by_title() {
    let db = setup().await;
    let genre = seed_genre(&db).await;

    for (title, stock) in [("Slam Dunk", 1), ("Slam Dunk 2", 2), ("Akira", 3)] {
        let mut movie = lion_king(genre.id);
        movie.title = title.to_owned();
        CatalogService::create_movie(&db, movie, stock).await.unwrap();
    }

    let all = CatalogService::list_movies(&db, None).await.unwrap();
    assert_eq!(all.len(), 3);

    let slam_dunk = CatalogService::list_movies(&db, Some("Slam Dunk".to_owned()))
        .await
        .unwrap();
    assert_eq!(slam_dunk.len(), 2);
    assert_eq!(slam_dunk[0].1.len(), 1);
    assert_eq!(slam_dunk[1].1.len(), 2);
}
