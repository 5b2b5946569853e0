//! Configuration file loading for persona-chat
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. Environment: `PERSONA_CHAT_<SECTION>__<KEY>`
//! 2. `--config <path>` specified file
//! 3. Project root: `./persona-chat.toml` or `./.persona-chat.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/persona-chat/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    DEFAULT_COOKIE_NAME, DEFAULT_PROTECTED_PATHS, DEFAULT_SIGN_IN_PATH, FileAuthConfig,
    FileClientConfig, FileConfig, FileLoggingConfig, FileMockConfig, FileServerConfig,
};
pub use loader::ConfigLoader;
