//! Create `flight` table.
//!
//! Every column except the key is nullable; nothing is validated on write.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Flight::Table)
                    .if_not_exists()
                    .col(pk_auto(Flight::Id))
                    .col(string_null(Flight::Source))
                    .col(string_null(Flight::Destination))
                    .col(date_null(Flight::DepartureDate))
                    .to_owned(),
            )
            .await?;

        // Backs the exact (source, destination, departure_date) lookup
        manager
            .create_index(
                Index::create()
                    .name("idx_flight_route_date")
                    .table(Flight::Table)
                    .col(Flight::Source)
                    .col(Flight::Destination)
                    .col(Flight::DepartureDate)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Flight::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Flight {
    Table,
    Id,
    Source,
    Destination,
    DepartureDate,
}
