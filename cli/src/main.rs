//! CLI entrypoint for persona-chat
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use persona_application::{
    ChatSessionController, DenyAllSessions, KeyValueStore, LocalChatStore, PersonaDirectory,
    SessionVerifier,
};
use persona_domain::{ConfigIssue, PersonaId};
use persona_infrastructure::{
    CannedReplies, ConfigLoader, FileConfig, HttpApiClient, InMemoryKeyValueStore,
    JsonFileKeyValueStore, JsonlConversationLogger, MockReplyService, StaticCatalog,
    StaticSessionVerifier,
};
use persona_presentation::{AccessGate, AppState, ChatRepl, Cli, Command, ConsoleFormatter};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_deref());
        return Ok(());
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref()).context("Failed to load configuration")?
    };

    // Keep the guard alive so buffered file logs are flushed on exit
    let _log_guard = init_logging(cli.verbose, &config);

    let issues = config.validate();
    if !issues.is_empty() {
        eprint!("{}", ConsoleFormatter::config_issues(&issues));
    }
    if issues.iter().any(ConfigIssue::is_error) {
        bail!("Invalid configuration");
    }

    match cli.command.unwrap_or(Command::Chat {
        persona: None,
        api: None,
    }) {
        Command::Serve { host, port } => serve(&config, host, port).await,
        Command::Chat { persona, api } => chat(&config, persona, api).await,
        Command::Personas { api } => personas(&config, api).await,
    }
}

/// Console logging from `-v`, optionally mirrored to a daily log file.
///
/// `RUST_LOG` takes precedence over the verbosity flag.
fn init_logging(verbose: u8, config: &FileConfig) -> Option<WorkerGuard> {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let (file_layer, guard) = match config.logging.resolved_directory() {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, "persona-chat.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(file_layer)
        .init();

    guard
}

async fn serve(config: &FileConfig, host: Option<String>, port: Option<u16>) -> Result<()> {
    let mut server = config.server.clone();
    if let Some(host) = host {
        server.host = host;
    }
    if let Some(port) = port {
        server.port = port;
    }

    // === Dependency Injection ===
    let catalog =
        Arc::new(StaticCatalog::builtin().with_latency(config.mock.to_catalog_latency()));
    let (delay, _) = config.mock.to_reply_delay();
    let replies = Arc::new(MockReplyService::new(CannedReplies::builtin()).with_delay(delay));

    let (policy, _) = config.auth.to_access_policy();
    let (tokens, _) = config.auth.parse_session_tokens();
    let verifier: Arc<dyn SessionVerifier> = if tokens.is_empty() {
        warn!("No session tokens configured; protected routes will always redirect");
        Arc::new(DenyAllSessions)
    } else {
        Arc::new(StaticSessionVerifier::new(tokens))
    };

    let state = AppState {
        directory: catalog.clone(),
        replies,
        summaries: catalog.clone(),
        pricing: catalog,
        gate: Arc::new(AccessGate::new(
            policy,
            verifier,
            config.auth.cookie_name.clone(),
        )),
    };

    let address = server.bind_address();
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {}", address))?;
    persona_presentation::serve(listener, state).await?;
    Ok(())
}

fn api_client(config: &FileConfig, api: Option<String>) -> Result<HttpApiClient> {
    let base_url = api.unwrap_or_else(|| config.client.api_base_url.clone());
    let mut client = HttpApiClient::new(base_url).context("Failed to build HTTP client")?;
    if let Some(token) = config.client.session_token() {
        client = client.with_session_token(token);
    }
    Ok(client)
}

async fn chat(config: &FileConfig, persona: Option<u32>, api: Option<String>) -> Result<()> {
    let client = Arc::new(api_client(config, api)?);
    info!("Using API at {}", client.base_url());

    let storage: Arc<dyn KeyValueStore> = match config.client.resolved_storage_path() {
        Some(path) => {
            info!("Chat history stored in {}", path.display());
            Arc::new(JsonFileKeyValueStore::new(path))
        }
        None => {
            warn!("No data directory available; chat history will not be kept");
            Arc::new(InMemoryKeyValueStore::new())
        }
    };

    let (behavior, _) = config.client.to_chat_behavior();
    let mut controller =
        ChatSessionController::new(client.clone(), client.clone(), LocalChatStore::new(storage))
            .with_behavior(behavior);

    if let Some(path) = config.logging.resolved_conversation_log()
        && let Some(logger) = JsonlConversationLogger::new(&path)
    {
        info!("Conversation log: {}", logger.path().display());
        controller = controller.with_conversation_logger(Arc::new(logger));
    }
    let controller = Arc::new(controller);

    if let Some(id) = persona {
        match controller.select_persona(PersonaId::new(id)).await {
            Ok(detail) => print!("{}", ConsoleFormatter::persona_detail(&detail)),
            Err(e) => eprintln!("Could not select persona {}: {}", id, e),
        }
    }

    ChatRepl::new(controller, client.clone(), client)
        .with_history_file(config.client.resolved_history_path())
        .run()
        .await?;
    Ok(())
}

async fn personas(config: &FileConfig, api: Option<String>) -> Result<()> {
    let client = api_client(config, api)?;
    let personas = client.list().await.context("Failed to fetch personas")?;
    print!("{}", ConsoleFormatter::persona_list(&personas));
    Ok(())
}
