//! Key-value settings access - the explicit get/set interface over persisted state.
//!
//! All persisted preferences go through these two functions so the rest of the
//! crate never performs ambient lookups against the storage layer directly.

use crate::{
    entities::{Setting, setting},
    errors::Result,
};
use chrono::Utc;
use sea_orm::{Set, prelude::*};

/// Retrieves a value from the key-value `settings` table.
///
/// # Returns
/// * `Ok(Some(String))` - The key exists and a value is found
/// * `Ok(None)` - The key does not exist in the table
pub async fn get_setting(db: &DatabaseConnection, key: &str) -> Result<Option<String>> {
    let value = Setting::find()
        .filter(setting::Column::Key.eq(key))
        .one(db)
        .await?
        .map(|s| s.value);
    tracing::debug!("Setting '{}': {:?}", key, value);
    Ok(value)
}

/// Sets or updates a value in the key-value `settings` table.
///
/// If the key already exists, its value is updated; otherwise a new key-value
/// pair is inserted (UPSERT behavior).
pub async fn set_setting(db: &DatabaseConnection, key: &str, value: &str) -> Result<()> {
    let now = Utc::now().naive_utc();

    let existing = Setting::find()
        .filter(setting::Column::Key.eq(key))
        .one(db)
        .await?;

    if let Some(model) = existing {
        let mut active: setting::ActiveModel = model.into();
        active.value = Set(value.to_string());
        active.updated_at = Set(now);
        active.update(db).await?;
    } else {
        let new_setting = setting::ActiveModel {
            key: Set(key.to_string()),
            value: Set(value.to_string()),
            updated_at: Set(now),
            ..Default::default()
        };
        new_setting.insert(db).await?;
    }

    tracing::info!("Set setting: {} = {}", key, value);
    Ok(())
}
