//! File-level configuration schema.

use crate::logging::JsonlEventLog;
use confero_application::EngineConfig;
use confero_domain::ReviewQuorum;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("configuration error: {0}")]
    Figment(#[from] Box<figment::Error>),

    #[error("invalid review quorum '{value}': {reason}")]
    InvalidQuorum { value: String, reason: String },
}

/// Configuration as written in `confero.toml` / `CONFERO_*` env vars.
///
/// The quorum is kept as its string form here (`"all"`, `"atleast:2"`,
/// `"ratio:75"`, `"75%"`) so the same value works in TOML and in an
/// environment variable; conversion parses it into [`ReviewQuorum`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// When a paper counts as fully reviewed.
    pub review_quorum: String,
    /// Upper bound on discussion comment length, in characters.
    pub comment_max_chars: usize,
    /// Default review period when no due date is given, in days.
    pub default_review_days: i64,
    /// Where the JSONL audit log is written, if anywhere.
    pub event_log_path: Option<String>,
}

impl Default for FileConfig {
    fn default() -> Self {
        let defaults = EngineConfig::default();
        Self {
            review_quorum: "all".to_string(),
            comment_max_chars: defaults.comment_max_chars,
            default_review_days: defaults.default_review_days,
            event_log_path: None,
        }
    }
}

impl FileConfig {
    /// Convert into the application layer's config, parsing the quorum.
    pub fn into_engine_config(self) -> Result<EngineConfig, ConfigError> {
        let review_quorum: ReviewQuorum =
            self.review_quorum
                .parse()
                .map_err(|reason| ConfigError::InvalidQuorum {
                    value: self.review_quorum.clone(),
                    reason,
                })?;

        Ok(EngineConfig {
            review_quorum,
            comment_max_chars: self.comment_max_chars,
            default_review_days: self.default_review_days,
        })
    }

    /// Open the JSONL audit log at `event_log_path`.
    ///
    /// Returns `None` when no path is configured or the file cannot be
    /// created; the caller falls back to a null dispatcher.
    pub fn open_event_log(&self) -> Option<JsonlEventLog> {
        self.event_log_path.as_deref().and_then(JsonlEventLog::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_convert() {
        let config = FileConfig::default().into_engine_config().unwrap();
        assert_eq!(config.review_quorum, ReviewQuorum::AllAssigned);
        assert_eq!(config.comment_max_chars, 10_000);
    }

    #[test]
    fn test_quorum_string_forms() {
        let mut file = FileConfig::default();
        file.review_quorum = "atleast:2".to_string();
        assert_eq!(
            file.into_engine_config().unwrap().review_quorum,
            ReviewQuorum::AtLeast(2)
        );

        let mut file = FileConfig::default();
        file.review_quorum = "75%".to_string();
        assert_eq!(
            file.into_engine_config().unwrap().review_quorum,
            ReviewQuorum::Ratio(75)
        );
    }

    #[test]
    fn test_open_event_log_from_config() {
        use confero_application::ports::event_dispatcher::EventDispatcher;
        use chrono::{TimeZone, Utc};
        use confero_domain::{DomainEvent, PaperId};

        let mut file = FileConfig::default();
        assert!(file.open_event_log().is_none());

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("audit/events.jsonl");
        file.event_log_path = Some(path.to_string_lossy().into_owned());

        let log = file.open_event_log().unwrap();
        log.dispatch(&DomainEvent::PaperWithdrawn {
            paper: PaperId::new("p1"),
            at: Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap(),
        });
        drop(log);

        let content = std::fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(content.trim()).unwrap();
        assert_eq!(value["event"], "paper_withdrawn");
        assert_eq!(value["paper"], "p1");
    }

    #[test]
    fn test_bad_quorum_is_reported() {
        let mut file = FileConfig::default();
        file.review_quorum = "sometimes".to_string();
        assert!(matches!(
            file.into_engine_config(),
            Err(ConfigError::InvalidQuorum { value, .. }) if value == "sometimes"
        ));
    }
}
