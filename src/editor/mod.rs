//! The controller: explicit editor state driven by shell commands.

/// Shell commands and their dispatch.
pub mod command;
/// Trailing-edge debounce for parameter redraws.
pub mod debounce;
/// Editor configuration.
pub mod opts;
/// Editor state and per-command behavior.
pub mod state;
