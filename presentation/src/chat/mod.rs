//! Interactive chat module
//!
//! Provides a line-editor chat interface that drives the chat session
//! controller.

mod repl;

pub use repl::{ChatRepl, ReplCommand};
