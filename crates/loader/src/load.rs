use crate::dataset::Dataset;
use database::{
    entities::{clients, genres, movie_copies, movie_rent_details, movie_rents, movies},
    repository::BATCH_SIZE,
};
use log::{debug, info};
use sea_orm::{
    ActiveModelTrait, ConnectionTrait, DatabaseConnection, DatabaseTransaction, DbBackend, DbErr,
    EntityTrait, IntoActiveModel, TransactionTrait,
};

/// Tables whose `id` sequence is moved past the loaded rows, in load order
const TABLES: [&str; 6] = [
    "genres",
    "movies",
    "movie_copies",
    "clients",
    "movie_rents",
    "movie_rent_details",
];

/// Row counts written per table
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LoadSummary {
    pub genres: usize,
    pub movies: usize,
    pub movie_copies: usize,
    pub clients: usize,
    pub movie_rents: usize,
    pub movie_rent_details: usize,
}

/// Inserts every row of `dataset`, keeping the ids it carries.
///
/// Everything happens in a single transaction. On PostgreSQL the id
/// sequences are advanced afterwards so new rows do not collide.
pub async fn load(db: &DatabaseConnection, dataset: Dataset) -> Result<LoadSummary, DbErr> {
    let summary = LoadSummary {
        genres: dataset.genres.len(),
        movies: dataset.movies.len(),
        movie_copies: dataset.movie_copies.len(),
        clients: dataset.clients.len(),
        movie_rents: dataset.movie_rents.len(),
        movie_rent_details: dataset.movie_rent_details.len(),
    };

    let txn = db.begin().await?;

    insert_all::<genres::Entity, _>(&txn, dataset.genres).await?;
    insert_all::<movies::Entity, _>(&txn, dataset.movies).await?;
    insert_all::<movie_copies::Entity, _>(&txn, dataset.movie_copies).await?;
    insert_all::<clients::Entity, _>(&txn, dataset.clients).await?;
    insert_all::<movie_rents::Entity, _>(&txn, dataset.movie_rents).await?;
    insert_all::<movie_rent_details::Entity, _>(&txn, dataset.movie_rent_details).await?;

    if db.get_database_backend() == DbBackend::Postgres {
        for table in TABLES {
            let sql = format!(
                "SELECT setval(pg_get_serial_sequence('{table}', 'id'), \
                 COALESCE((SELECT MAX(id) FROM {table}), 0) + 1, false)"
            );
            txn.execute_unprepared(&sql).await?;
            debug!("Advanced id sequence of {table}");
        }
    }

    txn.commit().await?;
    info!("Loaded dataset: {summary:?}");
    Ok(summary)
}

async fn insert_all<E, M>(txn: &DatabaseTransaction, rows: Vec<M>) -> Result<(), DbErr>
where
    E: EntityTrait<Model = M>,
    M: IntoActiveModel<E::ActiveModel>,
    E::ActiveModel: ActiveModelTrait<Entity = E>,
{
    // Models convert to unchanged values; reset them so every column is written
    let mut rows = rows
        .into_iter()
        .map(|row| row.into_active_model().reset_all())
        .peekable();

    while rows.peek().is_some() {
        let batch: Vec<_> = rows.by_ref().take(BATCH_SIZE).collect();
        E::insert_many(batch).exec(txn).await?;
    }

    Ok(())
}
