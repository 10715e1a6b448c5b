//! Settings entity - Stores key-value pairs for user preferences.
//! Used for storing the persisted theme preference and any future
//! widget-level configuration data.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Settings database model - stores key-value preference pairs
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "settings")]
pub struct Model {
    /// Unique identifier
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Preference key (e.g., `"theme"`)
    pub key: String,
    /// Preference value stored as string
    pub value: String,
    /// When this preference was last modified
    pub updated_at: DateTime,
}

/// `Setting` has no relationships with other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
