#![cfg(test)]
use sea_orm::DatabaseConnection;

/// Isolated database per test: in-memory SQLite with migrations applied.
pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    models::db::connect_memory().await
}
