//! Domain error types
//!
//! Every variant is a caller-visible, non-retryable business-rule violation
//! and carries enough structured context (ids, current status, attempted
//! operation) for a caller to render an actionable message. Transient
//! storage faults are a separate category owned by the application layer.

use crate::assignment::AssignmentStatus;
use crate::core::ids::{AssignmentId, CoiId, CommentId, PaperId, UserId};
use crate::submission::status::{PaperStatus, StatusEvent};
use chrono::{DateTime, Utc};
use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("paper {paper} cannot {attempted} from status {from}")]
    InvalidTransition {
        paper: PaperId,
        from: PaperStatus,
        attempted: StatusEvent,
    },

    #[error("submission deadline {deadline} has passed for paper {paper}")]
    DeadlinePassed {
        paper: PaperId,
        deadline: DateTime<Utc>,
    },

    #[error("reviewer {reviewer} has a declared conflict of interest with paper {paper}")]
    ConflictOfInterest { reviewer: UserId, paper: PaperId },

    #[error("a conflict of interest for reviewer {reviewer} and paper {paper} already exists ({existing})")]
    DuplicateCoi {
        reviewer: UserId,
        paper: PaperId,
        existing: CoiId,
    },

    #[error("reviewer {reviewer} already has an active assignment for paper {paper}")]
    DuplicateAssignment { reviewer: UserId, paper: PaperId },

    #[error("assignment {assignment} is {status}, expected {expected}")]
    InvalidAssignmentState {
        assignment: AssignmentId,
        status: AssignmentStatus,
        expected: AssignmentStatus,
    },

    #[error("assignment {assignment} is {status}; reviews require an accepted assignment")]
    AssignmentNotAccepted {
        assignment: AssignmentId,
        status: AssignmentStatus,
    },

    #[error("assignment {assignment} already has a review")]
    DuplicateReview { assignment: AssignmentId },

    #[error("review score {score} or confidence {confidence} out of range (score -3..=3, confidence 1..=5)")]
    InvalidScore { score: i8, confidence: u8 },

    #[error("paper {paper} is {status}; decisions require a reviewed paper")]
    NotReviewed { paper: PaperId, status: PaperStatus },

    #[error("paper {paper} is {status}; its decision can no longer change")]
    DecisionLocked { paper: PaperId, status: PaperStatus },

    #[error("paper {paper} is {status} and no longer accepts review activity")]
    PaperInactive { paper: PaperId, status: PaperStatus },

    #[error("comment content is empty")]
    ContentEmpty,

    #[error("comment content is {length} characters, limit is {max}")]
    ContentTooLong { length: usize, max: usize },

    #[error("comment {parent} cannot be a parent: {reason}")]
    InvalidParent { parent: CommentId, reason: String },

    #[error("user {user} is not authorized to {action}")]
    NotAuthorized { user: UserId, action: &'static str },

    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: String },
}

impl DomainError {
    /// Convenience constructor for missing-entity errors.
    pub fn not_found(entity: &'static str, id: impl std::fmt::Display) -> Self {
        DomainError::NotFound {
            entity,
            id: id.to_string(),
        }
    }

    /// Check whether this error reports a missing entity.
    pub fn is_not_found(&self) -> bool {
        matches!(self, DomainError::NotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_transition_display() {
        let error = DomainError::InvalidTransition {
            paper: PaperId::new("p1"),
            from: PaperStatus::Draft,
            attempted: StatusEvent::Withdraw,
        };
        assert_eq!(error.to_string(), "paper p1 cannot withdraw from status draft");
    }

    #[test]
    fn test_not_found_helper() {
        let error = DomainError::not_found("assignment", AssignmentId::new("a1"));
        assert!(error.is_not_found());
        assert_eq!(error.to_string(), "assignment a1 not found");
    }

    #[test]
    fn test_content_too_long_display() {
        let error = DomainError::ContentTooLong {
            length: 10_500,
            max: 10_000,
        };
        assert_eq!(
            error.to_string(),
            "comment content is 10500 characters, limit is 10000"
        );
    }
}
