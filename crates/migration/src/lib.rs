//! Migrator creating one table per persisted record type.
//! The two tables are independent; order only matters for readability.
pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_flight;
mod m20240101_000002_create_documents;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_flight::Migration),
            Box::new(m20240101_000002_create_documents::Migration),
        ]
    }
}
