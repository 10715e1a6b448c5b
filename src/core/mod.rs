//! Core widget logic - framework-agnostic and testable without a terminal.
//!
//! Nothing in this module touches the rendering host; the TUI layer consumes
//! these types and functions and maps them onto the screen.

/// The form state machine (fields, message, status, submission cycle)
pub mod form;
/// Key-value settings access backed by the `settings` table
pub mod settings;
/// Light/dark theme state and persistence
pub mod theme;
/// Token composition and the cancellable delayed generation task
pub mod token;
/// Meter-number and amount validation
pub mod validate;
