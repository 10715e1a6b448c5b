//! `MeterBuddy` - A terminal widget that simulates prepaid meter token purchases
//!
//! This crate provides a small TUI form: the user enters a meter number and an
//! amount, the input is validated, and after a short simulated delay a fabricated
//! token string is displayed. A light/dark theme preference persists across runs.
//! The token is display-only and carries no real credential semantics.

// Deny the most critical lints that could lead to bugs or security issues
#![deny(
    // Security and correctness
    unsafe_code,
    unsafe_op_in_unsafe_fn,

    // Code quality - things that are almost always bugs
    unreachable_code,
    unreachable_patterns,
    unused_must_use,

    // Documentation - broken links are bugs
    rustdoc::broken_intra_doc_links,
    rustdoc::private_intra_doc_links,
)]
// Warn on things that should be fixed but aren't necessarily bugs
#![warn(
    missing_docs,

    // Clippy categories for overall code quality
    clippy::all,
    clippy::pedantic,

    // Correctness
    clippy::clone_on_ref_ptr,
    clippy::dbg_macro,
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unwrap_used,

    // Style consistency
    clippy::enum_glob_use,
    clippy::semicolon_if_nothing_returned,
    clippy::wildcard_imports,

    // Future compatibility
    future_incompatible,
    rust_2018_idioms,
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,  // Common pattern in Rust
    clippy::missing_errors_doc,        // Will add gradually
    clippy::missing_panics_doc,        // Will add gradually
)]

/// Configuration management for the database and application settings
pub mod config;
/// Core widget logic - theme, validation, token generation, and the form state machine
pub mod core;
/// SeaORM entity definitions for persisted state
pub mod entities;
/// Unified error types and result handling
pub mod errors;
/// Terminal interface - event loop, key bindings, and rendering
pub mod tui;

#[cfg(test)]
pub mod test_utils;
