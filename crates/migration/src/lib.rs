pub use sea_orm_migration::prelude::*;

mod m20261015_add_indexes;
mod m20261015_create_catalog_tables;
mod m20261015_create_rental_tables;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20261015_create_catalog_tables::Migration),
            Box::new(m20261015_create_rental_tables::Migration),
            Box::new(m20261015_add_indexes::Migration),
        ]
    }
}
