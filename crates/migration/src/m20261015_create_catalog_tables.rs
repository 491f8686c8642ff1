use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create genres table
        manager
            .create_table(
                Table::create()
                    .table(Genres::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Genres::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Genres::Name).string().not_null())
                    .col(ColumnDef::new(Genres::Description).text().not_null())
                    .to_owned(),
            )
            .await?;

        // Create movies table
        manager
            .create_table(
                Table::create()
                    .table(Movies::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Movies::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Movies::Title).string().not_null())
                    .col(ColumnDef::new(Movies::Description).text().not_null())
                    .col(ColumnDef::new(Movies::Year).integer().not_null())
                    .col(ColumnDef::new(Movies::Director).string().not_null())
                    .col(ColumnDef::new(Movies::GenreId).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-movies-genre_id")
                            .from(Movies::Table, Movies::GenreId)
                            .to(Genres::Table, Genres::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        // Copies are removed through stock reconciliation, never by cascade
        manager
            .create_table(
                Table::create()
                    .table(MovieCopies::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(MovieCopies::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(MovieCopies::MovieId).integer().not_null())
                    .col(ColumnDef::new(MovieCopies::Code).string())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-movie_copies-movie_id")
                            .from(MovieCopies::Table, MovieCopies::MovieId)
                            .to(Movies::Table, Movies::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Drop tables in reverse order due to foreign key constraints
        manager
            .drop_table(Table::drop().table(MovieCopies::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Movies::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Genres::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(Iden)]
enum Genres {
    Table,
    Id,
    Name,
    Description,
}

#[derive(Iden)]
enum Movies {
    Table,
    Id,
    Title,
    Description,
    Year,
    Director,
    GenreId,
}

#[derive(Iden)]
enum MovieCopies {
    Table,
    Id,
    MovieId,
    Code,
}
