//! Chair decisions.

use crate::core::ids::{DecisionId, PaperId, UserId};
use crate::submission::status::StatusEvent;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The verdict a chair issues on a reviewed paper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DecisionKind {
    Accept,
    Reject,
    MinorRevision,
    MajorRevision,
}

impl DecisionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DecisionKind::Accept => "accept",
            DecisionKind::Reject => "reject",
            DecisionKind::MinorRevision => "minor_revision",
            DecisionKind::MajorRevision => "major_revision",
        }
    }

    /// Revision decisions are recorded but leave the paper at `Reviewed`.
    pub fn is_revision(&self) -> bool {
        matches!(self, DecisionKind::MinorRevision | DecisionKind::MajorRevision)
    }

    /// The lifecycle event this decision feeds into the state machine.
    pub fn status_event(&self) -> StatusEvent {
        match self {
            DecisionKind::Accept => StatusEvent::Accept,
            DecisionKind::Reject => StatusEvent::Reject,
            DecisionKind::MinorRevision | DecisionKind::MajorRevision => StatusEvent::Revise,
        }
    }
}

impl std::fmt::Display for DecisionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A recorded chair decision (Entity).
///
/// Decisions are append-only; the latest record for a paper is the current
/// one, earlier records remain as history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Decision {
    pub id: DecisionId,
    pub paper: PaperId,
    pub kind: DecisionKind,
    pub comment: String,
    pub decided_by: UserId,
    pub decided_at: DateTime<Utc>,
}

impl Decision {
    pub fn new(
        paper: PaperId,
        kind: DecisionKind,
        comment: impl Into<String>,
        decided_by: UserId,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: DecisionId::generate(),
            paper,
            kind,
            comment: comment.into(),
            decided_by,
            decided_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_event_mapping() {
        assert_eq!(DecisionKind::Accept.status_event(), StatusEvent::Accept);
        assert_eq!(DecisionKind::Reject.status_event(), StatusEvent::Reject);
        assert_eq!(
            DecisionKind::MinorRevision.status_event(),
            StatusEvent::Revise
        );
        assert_eq!(
            DecisionKind::MajorRevision.status_event(),
            StatusEvent::Revise
        );
    }

    #[test]
    fn test_is_revision() {
        assert!(!DecisionKind::Accept.is_revision());
        assert!(!DecisionKind::Reject.is_revision());
        assert!(DecisionKind::MinorRevision.is_revision());
        assert!(DecisionKind::MajorRevision.is_revision());
    }
}
