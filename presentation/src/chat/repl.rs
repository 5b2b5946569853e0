//! REPL (Read-Eval-Print Loop) for interactive chat

use crate::ConsoleFormatter;
use colored::Colorize;
use persona_application::{
    ChatSessionController, ChatSummarySource, DirectoryError, PricingCatalog, SendOutcome,
    SessionError,
};
use persona_domain::{PersonaId, SendRejection};
use reedline::{DefaultPrompt, DefaultPromptSegment, FileBackedHistory, Reedline, Signal};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::warn;

const HISTORY_CAPACITY: usize = 1000;

/// A parsed input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    Help,
    Quit,
    Personas,
    Select(PersonaId),
    History,
    Clear,
    Dashboard,
    Pricing,
    /// Plain text to send to the selected persona
    Say(String),
    Invalid(String),
}

impl ReplCommand {
    /// Parse one input line. Blank lines yield `None`.
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }
        if !line.starts_with('/') {
            return Some(Self::Say(line.to_string()));
        }

        let (cmd, arg) = match line.split_once(char::is_whitespace) {
            Some((cmd, arg)) => (cmd, arg.trim()),
            None => (line, ""),
        };
        let command = match cmd {
            "/quit" | "/exit" | "/q" => Self::Quit,
            "/help" | "/h" | "/?" => Self::Help,
            "/personas" => Self::Personas,
            "/persona" | "/p" => match arg.parse() {
                Ok(id) => Self::Select(id),
                Err(_) => Self::Invalid(format!("Usage: /persona <id> (got '{}')", arg)),
            },
            "/history" => Self::History,
            "/clear" => Self::Clear,
            "/dashboard" => Self::Dashboard,
            "/pricing" => Self::Pricing,
            _ => Self::Invalid(format!("Unknown command: {}", cmd)),
        };
        Some(command)
    }
}

/// Interactive chat REPL
pub struct ChatRepl {
    controller: Arc<ChatSessionController>,
    summaries: Arc<dyn ChatSummarySource>,
    pricing: Arc<dyn PricingCatalog>,
    history_path: Option<PathBuf>,
}

impl ChatRepl {
    pub fn new(
        controller: Arc<ChatSessionController>,
        summaries: Arc<dyn ChatSummarySource>,
        pricing: Arc<dyn PricingCatalog>,
    ) -> Self {
        Self {
            controller,
            summaries,
            pricing,
            history_path: None,
        }
    }

    /// Persist line history to this file
    pub fn with_history_file(mut self, path: Option<PathBuf>) -> Self {
        self.history_path = path;
        self
    }

    fn line_editor(&self) -> Reedline {
        let editor = Reedline::create();
        let Some(path) = &self.history_path else {
            return editor;
        };
        if let Some(parent) = path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        match FileBackedHistory::with_file(HISTORY_CAPACITY, path.clone()) {
            Ok(history) => editor.with_history(Box::new(history)),
            Err(e) => {
                warn!("Could not open history file {}: {}", path.display(), e);
                editor
            }
        }
    }

    /// Run the interactive REPL
    pub async fn run(&self) -> std::io::Result<()> {
        let mut editor = self.line_editor();
        self.print_welcome();

        loop {
            let prompt = self.prompt();
            let signal = match editor.read_line(&prompt) {
                Ok(signal) => signal,
                Err(e) => {
                    eprintln!("Error: {}", e);
                    return Err(e);
                }
            };

            match signal {
                Signal::Success(line) => {
                    let Some(command) = ReplCommand::parse(&line) else {
                        continue;
                    };
                    if !self.execute(command).await {
                        break;
                    }
                }
                Signal::CtrlC => {
                    println!("^C");
                }
                Signal::CtrlD => {
                    println!("Bye!");
                    break;
                }
                #[allow(unreachable_patterns)]
                _ => break,
            }
        }

        Ok(())
    }

    fn prompt(&self) -> DefaultPrompt {
        let left = match self.controller.persona() {
            Some(persona) => persona.name().to_string(),
            None => "persona-chat".to_string(),
        };
        DefaultPrompt::new(DefaultPromptSegment::Basic(left), DefaultPromptSegment::Empty)
    }

    fn speaker(&self) -> String {
        self.controller
            .persona()
            .map(|p| p.name().to_string())
            .unwrap_or_else(|| "Assistant".to_string())
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│           persona-chat - Chat Mode          │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        Self::print_help();
    }

    fn print_help() {
        println!("Commands:");
        println!("  /personas          - List personas");
        println!("  /persona <id>      - Chat with a persona");
        println!("  /history           - Show this conversation");
        println!("  /clear             - Erase this conversation");
        println!("  /dashboard         - Recent chats (needs a session token)");
        println!("  /pricing           - Membership tiers");
        println!("  /help, /h, /?      - Show this help");
        println!("  /quit, /exit, /q   - Exit chat");
        println!();
        println!("Anything else is sent to the selected persona.");
        println!();
    }

    /// Execute one command. Returns false when the REPL should exit.
    async fn execute(&self, command: ReplCommand) -> bool {
        match command {
            ReplCommand::Quit => {
                println!("Bye!");
                return false;
            }
            ReplCommand::Help => Self::print_help(),
            ReplCommand::Invalid(message) => {
                println!("{}", message);
                println!("Type /help for available commands");
            }
            ReplCommand::Personas => match self.controller.list_personas().await {
                Ok(personas) => print!("{}", ConsoleFormatter::persona_list(&personas)),
                Err(e) => Self::print_error(&e),
            },
            ReplCommand::Select(id) => self.select(id).await,
            ReplCommand::History => {
                print!(
                    "{}",
                    ConsoleFormatter::transcript(&self.controller.messages(), &self.speaker())
                );
            }
            ReplCommand::Clear => {
                if self.controller.clear_history() {
                    println!("{}", "Conversation cleared.".dimmed());
                } else {
                    println!("Select a persona first: /persona <id>");
                }
            }
            ReplCommand::Dashboard => match self.summaries.recent_chats().await {
                Ok(rows) => print!("{}", ConsoleFormatter::chat_summaries(&rows)),
                Err(DirectoryError::Unauthorized) => {
                    println!("Sign in required: set client.session_token in your config.");
                }
                Err(e) => Self::print_error(&e),
            },
            ReplCommand::Pricing => match self.pricing.tiers().await {
                Ok(tiers) => print!("{}", ConsoleFormatter::pricing(&tiers)),
                Err(e) => Self::print_error(&e),
            },
            ReplCommand::Say(text) => self.say(&text).await,
        }
        true
    }

    async fn select(&self, id: PersonaId) {
        match self.controller.select_persona(id).await {
            Ok(detail) => {
                print!("{}", ConsoleFormatter::persona_detail(&detail));
                let messages = self.controller.messages();
                if !messages.is_empty() {
                    print!("{}", ConsoleFormatter::transcript(&messages, detail.name()));
                }
            }
            Err(SessionError::PersonaNotFound(id)) => {
                println!("Persona {} not found. Try /personas.", id);
            }
            Err(e) => Self::print_error(&e),
        }
    }

    async fn say(&self, text: &str) {
        println!("{}", "...".dimmed());
        let speaker = self.speaker();
        match self.controller.send_message(text).await {
            SendOutcome::Replied(reply) => {
                println!("{}", ConsoleFormatter::message(&reply, &speaker));
            }
            SendOutcome::Fallback(reply) => {
                println!("{}", ConsoleFormatter::message(&reply, &speaker).dimmed());
            }
            SendOutcome::Rejected(SendRejection::NoPersona) => {
                println!("Select a persona first: /persona <id>");
            }
            SendOutcome::Rejected(SendRejection::EmptyMessage) | SendOutcome::Abandoned => {}
        }
    }

    fn print_error(e: &dyn std::error::Error) {
        eprintln!("{} {}", "Error:".red().bold(), e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_is_sent() {
        assert_eq!(
            ReplCommand::parse("  你好  "),
            Some(ReplCommand::Say("你好".to_string()))
        );
        assert_eq!(ReplCommand::parse("   "), None);
    }

    #[test]
    fn test_select_parses_id() {
        assert_eq!(
            ReplCommand::parse("/persona 2"),
            Some(ReplCommand::Select(PersonaId::new(2)))
        );
        assert!(matches!(
            ReplCommand::parse("/persona two"),
            Some(ReplCommand::Invalid(_))
        ));
        assert!(matches!(ReplCommand::parse("/persona"), Some(ReplCommand::Invalid(_))));
    }

    #[test]
    fn test_command_aliases() {
        for line in ["/quit", "/exit", "/q"] {
            assert_eq!(ReplCommand::parse(line), Some(ReplCommand::Quit));
        }
        assert_eq!(ReplCommand::parse("/dashboard"), Some(ReplCommand::Dashboard));
        assert_eq!(ReplCommand::parse("/pricing"), Some(ReplCommand::Pricing));
        assert!(matches!(ReplCommand::parse("/nope"), Some(ReplCommand::Invalid(_))));
    }
}
