//! Unified error type for `MeterBuddy`.
//!
//! The only user-facing error kind is [`Error::InvalidInput`]; it is surfaced as
//! form state rather than a process failure. Everything else is an ambient
//! startup or persistence failure with no in-widget recovery path.

use thiserror::Error;

/// All errors the application can produce.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration file could not be read or parsed
    #[error("Configuration error: {message}")]
    Config {
        /// Human-readable description of the failure
        message: String,
    },

    /// Database connection or query failure
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// I/O failure (terminal setup, log file)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Environment variable lookup failure
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),

    /// Rejected form input - meter number empty or amount not a positive number
    #[error("Invalid input: {message}")]
    InvalidInput {
        /// The fixed corrective notice shown in the message area
        message: String,
    },
}

/// Convenience `Result` type used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
