//! Mock backend configuration from TOML (`[mock]` section)

use crate::catalog::CatalogLatency;
use crate::reply::ReplyDelay;
use persona_domain::{ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Raw mock backend configuration from TOML
///
/// # Example
///
/// ```toml
/// [mock]
/// personas_delay_ms = 500
/// summary_delay_ms = 600
/// reply_delay_min_ms = 1000
/// reply_delay_max_ms = 2000
/// ```
///
/// Set everything to 0 for an instant backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileMockConfig {
    /// Latency of `GET /api/personas`
    pub personas_delay_ms: u64,
    /// Latency of `GET /api/user/chats/summary`
    pub summary_delay_ms: u64,
    /// Lower bound of the reply delay
    pub reply_delay_min_ms: u64,
    /// Upper bound of the reply delay
    pub reply_delay_max_ms: u64,
}

impl Default for FileMockConfig {
    fn default() -> Self {
        Self {
            personas_delay_ms: 500,
            summary_delay_ms: 600,
            reply_delay_min_ms: 1000,
            reply_delay_max_ms: 2000,
        }
    }
}

impl FileMockConfig {
    pub fn to_catalog_latency(&self) -> CatalogLatency {
        CatalogLatency {
            personas: Duration::from_millis(self.personas_delay_ms),
            summaries: Duration::from_millis(self.summary_delay_ms),
        }
    }

    /// Reply delay range. An inverted range is collapsed to its minimum.
    pub fn to_reply_delay(&self) -> (ReplyDelay, Vec<ConfigIssue>) {
        let min = Duration::from_millis(self.reply_delay_min_ms);
        if self.reply_delay_min_ms > self.reply_delay_max_ms {
            let issue = ConfigIssue::warning(
                ConfigIssueCode::InvertedRange {
                    field: "mock.reply_delay_ms".to_string(),
                },
                format!(
                    "mock.reply_delay_min_ms ({}) exceeds mock.reply_delay_max_ms ({}), using a fixed {} ms",
                    self.reply_delay_min_ms, self.reply_delay_max_ms, self.reply_delay_min_ms
                ),
            );
            return (ReplyDelay::fixed(min), vec![issue]);
        }
        (
            ReplyDelay {
                min,
                max: Duration::from_millis(self.reply_delay_max_ms),
            },
            vec![],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_original_timings() {
        let config = FileMockConfig::default();
        let latency = config.to_catalog_latency();
        assert_eq!(latency.personas, Duration::from_millis(500));
        assert_eq!(latency.summaries, Duration::from_millis(600));

        let (delay, issues) = config.to_reply_delay();
        assert!(issues.is_empty());
        assert_eq!(delay, ReplyDelay::default());
    }

    #[test]
    fn test_inverted_range_warns() {
        let config = FileMockConfig {
            reply_delay_min_ms: 300,
            reply_delay_max_ms: 100,
            ..Default::default()
        };
        let (delay, issues) = config.to_reply_delay();
        assert_eq!(delay, ReplyDelay::fixed(Duration::from_millis(300)));
        assert_eq!(issues.len(), 1);
        assert!(!issues[0].is_error());
    }
}
