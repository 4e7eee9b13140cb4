//! Database connection handling
pub mod entities;
pub mod migrations;

use sea_orm::{Database, DatabaseConnection, DbErr};

/// Connects to the database named by a full connection URL.
pub async fn connect_db(url: &str) -> Result<DatabaseConnection, DbErr> {
    Database::connect(url).await
}

#[cfg(test)]
/// In-memory database for tests
pub async fn connect_test_db() -> Result<DatabaseConnection, DbErr> {
    Database::connect("sqlite::memory:").await
}
