//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for persona-chat
#[derive(Parser, Debug)]
#[command(name = "persona-chat")]
#[command(author, version, about = "Chat with AI personas")]
#[command(long_about = r#"
persona-chat serves a small persona directory with a mock chat backend, and
ships a terminal client that keeps per-persona history on disk.

Configuration files are loaded from (in priority order):
1. PERSONA_CHAT_<SECTION>__<KEY>   Environment variables
2. --config <path>                 Explicit config file
3. ./persona-chat.toml             Project-level config
4. ~/.config/persona-chat/config.toml   Global config

Example:
  persona-chat serve --port 3000
  persona-chat chat --persona 1
  persona-chat personas
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Run the HTTP API
    Serve {
        /// Interface to bind (overrides server.host)
        #[arg(long)]
        host: Option<String>,
        /// Port to bind (overrides server.port)
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Start an interactive chat session
    Chat {
        /// Persona to select on start
        #[arg(short, long, value_name = "ID")]
        persona: Option<u32>,
        /// API base URL (overrides client.api_base_url)
        #[arg(long, value_name = "URL")]
        api: Option<String>,
    },
    /// List the available personas
    Personas {
        /// API base URL (overrides client.api_base_url)
        #[arg(long, value_name = "URL")]
        api: Option<String>,
    },
}
