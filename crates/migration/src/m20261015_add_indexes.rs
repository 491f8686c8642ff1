use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// `(index name, table, column)` for every single-column index
const INDEXES: [(&str, &str, &str); 7] = [
    ("idx_genres_name", "genres", "name"),
    ("idx_movies_title", "movies", "title"),
    ("idx_movies_genre_id", "movies", "genre_id"),
    ("idx_movie_copies_movie_id", "movie_copies", "movie_id"),
    ("idx_movie_rents_client_id", "movie_rents", "client_id"),
    (
        "idx_movie_rent_details_movie_rent_id",
        "movie_rent_details",
        "movie_rent_id",
    ),
    (
        "idx_movie_rent_details_movie_copy_id",
        "movie_rent_details",
        "movie_copy_id",
    ),
];

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for (name, table, column) in INDEXES {
            manager
                .create_index(
                    Index::create()
                        .name(name)
                        .table(Alias::new(table))
                        .col(Alias::new(column))
                        .to_owned(),
                )
                .await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Drop indexes in reverse order
        for (name, table, _) in INDEXES.iter().rev() {
            manager
                .drop_index(
                    Index::drop()
                        .name(*name)
                        .table(Alias::new(*table))
                        .to_owned(),
                )
                .await?;
        }

        Ok(())
    }
}
