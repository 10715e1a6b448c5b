//! SeaORM entity definitions for the persisted tables.
//!
//! The application persists a single `settings` key-value table; the only key
//! written today is the theme preference.

/// Key-value settings table
pub mod setting;

pub use setting::Entity as Setting;
