//! Engine behavior configuration.

use confero_domain::ReviewQuorum;
use serde::{Deserialize, Serialize};

/// Tunable policy knobs for the review engine.
///
/// Loaded from file/environment by the infrastructure layer; defaults
/// match the portal's observed behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// When a paper counts as fully reviewed.
    pub review_quorum: ReviewQuorum,
    /// Upper bound on discussion comment length, in characters.
    pub comment_max_chars: usize,
    /// Default review period used when a chair assigns without an
    /// explicit due date, in days.
    pub default_review_days: i64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            review_quorum: ReviewQuorum::AllAssigned,
            comment_max_chars: 10_000,
            default_review_days: 21,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.review_quorum, ReviewQuorum::AllAssigned);
        assert_eq!(config.comment_max_chars, 10_000);
        assert_eq!(config.default_review_days, 21);
    }
}
