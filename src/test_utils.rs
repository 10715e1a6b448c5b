//! Shared test utilities for `MeterBuddy`.
//!
//! Provides the standard in-memory database setup used by every test that
//! touches persisted state.

use crate::errors::Result;
use sea_orm::DatabaseConnection;

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all persistence tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}
