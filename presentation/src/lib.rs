//! Presentation layer for persona-chat
//!
//! This crate contains the HTTP API with its access gate, CLI definitions,
//! console output formatting, and the interactive chat interface.

pub mod chat;
pub mod cli;
pub mod output;
pub mod server;

// Re-export commonly used types
pub use chat::{ChatRepl, ReplCommand};
pub use cli::commands::{Cli, Command};
pub use output::console::ConsoleFormatter;
pub use server::{AccessGate, ApiError, AppState, router, serve};
