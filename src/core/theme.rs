//! Theme state - the persisted light/dark preference and its toggle semantics.
//!
//! The preference is stored under one settings key as the literal string
//! `"light"` or `"dark"`. An absent or unrecognized stored value reads as
//! [`Theme::Light`], so a fresh database starts in light mode.

use crate::{core::settings, errors::Result};
use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};

/// Settings key under which the theme preference is persisted.
pub const THEME_KEY: &str = "theme";

/// Visual theme selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Light display mode (the default)
    #[default]
    Light,
    /// Dark display mode
    Dark,
}

impl Theme {
    /// The literal string stored in the settings table.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parses a stored value; anything other than `"dark"` reads as light.
    #[must_use]
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("dark") => Self::Dark,
            _ => Self::Light,
        }
    }

    /// The other theme - what a toggle switches to.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Glyph shown on the toggle hint. It names the action the next toggle
    /// takes: dark mode shows a sun, light mode shows a moon.
    #[must_use]
    pub const fn indicator(self) -> &'static str {
        match self {
            Self::Light => "🌙",
            Self::Dark => "☀",
        }
    }
}

/// Loads the persisted theme preference, defaulting to light when absent.
pub async fn load_theme(db: &DatabaseConnection) -> Result<Theme> {
    let stored = settings::get_setting(db, THEME_KEY).await?;
    Ok(Theme::from_stored(stored.as_deref()))
}

/// Persists the theme preference.
pub async fn store_theme(db: &DatabaseConnection, theme: Theme) -> Result<()> {
    settings::set_setting(db, THEME_KEY, theme.as_str()).await
}
