//! Terminal interface - the rendering host for the form widget.
//!
//! This layer owns the terminal, the key bindings, and the bookkeeping for the
//! in-flight generation task. All widget semantics live in [`crate::core`];
//! everything here is translation between crossterm events, core state, and
//! ratatui draw calls.

/// Application event loop and key handling
pub mod app;
/// Frame rendering and the theme palette
pub mod ui;

pub use app::App;
