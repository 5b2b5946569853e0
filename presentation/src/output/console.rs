//! Console output formatter for chat data

use colored::Colorize;
use persona_domain::{
    ChatMessage, ChatSummary, ConfigIssue, Persona, PersonaDetail, PricingTier, Role, Severity,
};

/// Formats personas, messages and catalog data for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// One line per persona: `[id] name - description`
    pub fn persona_list(personas: &[Persona]) -> String {
        if personas.is_empty() {
            return format!("{}\n", "No personas available.".dimmed());
        }
        let mut output = Self::section_header("Personas");
        for persona in personas {
            output.push_str(&format!(
                "  {} {} {}\n",
                format!("[{}]", persona.id).yellow(),
                persona.name.bold(),
                format!("- {}", persona.description).dimmed()
            ));
        }
        output
    }

    /// Full profile card shown after selecting a persona
    pub fn persona_detail(detail: &PersonaDetail) -> String {
        let mut output = Self::header(detail.name());
        output.push('\n');
        output.push_str(&format!("{}\n\n", detail.persona.description.italic()));
        output.push_str(&format!("{}\n", Self::indent(&detail.bio, "  ")));

        if !detail.details.is_empty() {
            output.push('\n');
            for (label, value) in detail.details.iter() {
                output.push_str(&format!("  {} {}\n", format!("{}:", label).cyan().bold(), value));
            }
        }
        output.push_str(&Self::footer());
        output
    }

    /// A single chat bubble; `speaker` names the assistant side.
    pub fn message(message: &ChatMessage, speaker: &str) -> String {
        match message.role {
            Role::User => format!("{} {}", "You:".green().bold(), message.content),
            Role::Assistant => format!(
                "{} {}",
                format!("{}:", speaker).magenta().bold(),
                message.content
            ),
        }
    }

    pub fn transcript(messages: &[ChatMessage], speaker: &str) -> String {
        if messages.is_empty() {
            return format!("{}\n", "No messages yet.".dimmed());
        }
        messages
            .iter()
            .map(|m| format!("{}\n", Self::message(m, speaker)))
            .collect()
    }

    /// Dashboard rows, newest first as given
    pub fn chat_summaries(rows: &[ChatSummary]) -> String {
        if rows.is_empty() {
            return format!("{}\n", "No recent chats.".dimmed());
        }
        let mut output = Self::section_header("Recent chats");
        for row in rows {
            output.push_str(&format!(
                "  {} {}\n    {} {}\n",
                row.title.bold(),
                format!("({})", row.persona_name).dimmed(),
                "updated".dimmed(),
                row.last_updated.format("%Y-%m-%d %H:%M UTC")
            ));
        }
        output
    }

    pub fn pricing(tiers: &[PricingTier]) -> String {
        let mut output = Self::section_header("Membership");
        for tier in tiers {
            let badge = if tier.is_popular {
                format!(" {}", "最受欢迎".magenta().bold())
            } else {
                String::new()
            };
            output.push_str(&format!(
                "  {} {}{}\n    {}\n",
                tier.name.bold(),
                format!("${}/month", tier.price).yellow(),
                badge,
                tier.description.dimmed()
            ));
            for feature in &tier.features {
                output.push_str(&format!("      {} {}\n", "✓".green(), feature));
            }
        }
        output
    }

    /// Config validation results, errors first.
    pub fn config_issues(issues: &[ConfigIssue]) -> String {
        let mut sorted: Vec<&ConfigIssue> = issues.iter().collect();
        sorted.sort_by_key(|i| !i.is_error());
        sorted
            .into_iter()
            .map(|issue| match issue.severity {
                Severity::Error => format!("{} {}\n", "config error:".red().bold(), issue.message),
                Severity::Warning => {
                    format!("{} {}\n", "config warning:".yellow().bold(), issue.message)
                }
            })
            .collect()
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("{}\n", "=".repeat(60).cyan())
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
