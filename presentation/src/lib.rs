//! Presentation layer for llm-qa
//!
//! This crate contains CLI definitions, output formatters,
//! progress reporters, the interactive chat interface and the HTTP front end.

pub mod chat;
pub mod cli;
pub mod output;
pub mod progress;
pub mod web;

// Re-export commonly used types
pub use chat::ChatRepl;
pub use cli::commands::Cli;
pub use output::console::ConsoleFormatter;
pub use progress::reporter::{ProgressReporter, SimpleProgress};
pub use web::{AppState, router, serve};
