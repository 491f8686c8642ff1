use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create clients table
        manager
            .create_table(
                Table::create()
                    .table(Clients::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Clients::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Clients::FirstName).string().not_null())
                    .col(ColumnDef::new(Clients::LastName).string().not_null())
                    .col(ColumnDef::new(Clients::Address).string().not_null())
                    .col(
                        ColumnDef::new(Clients::LicenseNumber)
                            .big_integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Create movie_rents table
        manager
            .create_table(
                Table::create()
                    .table(MovieRents::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(MovieRents::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(MovieRents::ClientId).integer().not_null())
                    .col(
                        ColumnDef::new(MovieRents::CreationDatetime)
                            .date_time()
                            .not_null(),
                    )
                    .col(ColumnDef::new(MovieRents::ClosedDatetime).date_time())
                    .col(
                        ColumnDef::new(MovieRents::IsClosed)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-movie_rents-client_id")
                            .from(MovieRents::Table, MovieRents::ClientId)
                            .to(Clients::Table, Clients::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        // Line items go away with their rent
        manager
            .create_table(
                Table::create()
                    .table(MovieRentDetails::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(MovieRentDetails::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(MovieRentDetails::MovieRentId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(MovieRentDetails::MovieCopyId)
                            .integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-movie_rent_details-movie_rent_id")
                            .from(MovieRentDetails::Table, MovieRentDetails::MovieRentId)
                            .to(MovieRents::Table, MovieRents::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-movie_rent_details-movie_copy_id")
                            .from(MovieRentDetails::Table, MovieRentDetails::MovieCopyId)
                            .to(MovieCopies::Table, MovieCopies::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MovieRentDetails::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(MovieRents::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Clients::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(Iden)]
enum Clients {
    Table,
    Id,
    FirstName,
    LastName,
    Address,
    LicenseNumber,
}

#[derive(Iden)]
enum MovieRents {
    Table,
    Id,
    ClientId,
    CreationDatetime,
    ClosedDatetime,
    IsClosed,
}

#[derive(Iden)]
enum MovieRentDetails {
    Table,
    Id,
    MovieRentId,
    MovieCopyId,
}

#[derive(Iden)]
enum MovieCopies {
    Table,
    Id,
}
