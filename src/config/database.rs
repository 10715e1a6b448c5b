//! Database configuration module for `MeterBuddy`.
//!
//! This module handles `SQLite` database connection and table creation using `SeaORM`.
//! It provides functions for establishing database connections and creating the
//! settings table based on the entity definition. The module uses `SeaORM`'s
//! `Schema::create_table_from_entity` method to generate SQL from the entity model,
//! so the database schema matches the Rust struct definition without manual SQL.

use crate::entities::Setting;
use crate::errors::Result;
use sea_orm::sea_query::TableCreateStatement;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Schema};

/// Default local database location, used when `DATABASE_URL` is not set.
/// `mode=rwc` lets `SQLite` create the file on first run.
const DEFAULT_DATABASE_URL: &str = "sqlite://meter_buddy.sqlite?mode=rwc";

/// Gets the database URL from the `DATABASE_URL` environment variable or
/// returns the default local `SQLite` path.
#[must_use]
pub fn get_database_url() -> String {
    std::env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string())
}

/// Establishes a connection to the `SQLite` database.
///
/// Falls back to a default local `SQLite` file if no `DATABASE_URL` environment
/// variable is set. This function provides a clean interface for database access
/// throughout the application.
pub async fn create_connection() -> Result<DatabaseConnection> {
    Database::connect(get_database_url()).await.map_err(Into::into)
}

/// Creates the settings table using `SeaORM`'s schema generation from the entity
/// definition.
///
/// Table creation is idempotent (`IF NOT EXISTS`) so startup can run it
/// unconditionally against an existing database.
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    let mut settings_table: TableCreateStatement = schema.create_table_from_entity(Setting);
    settings_table.if_not_exists();

    db.execute(builder.build(&settings_table)).await?;

    Ok(())
}
