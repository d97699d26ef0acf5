//! Domain events.
//!
//! Every committed mutation yields events describing what happened. A
//! dispatcher (notification e-mail, audit log) consumes them after the
//! transaction commits; the core never fails because dispatch failed.

use crate::core::ids::{AssignmentId, CoiId, CommentId, PaperId, UserId};
use crate::decision::DecisionKind;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Something that happened to a paper or its surrounding records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum DomainEvent {
    PaperSubmitted {
        paper: PaperId,
        at: DateTime<Utc>,
    },
    PaperWithdrawn {
        paper: PaperId,
        at: DateTime<Utc>,
    },
    AssignmentCreated {
        assignment: AssignmentId,
        paper: PaperId,
        reviewer: UserId,
        due: DateTime<Utc>,
    },
    AssignmentAccepted {
        assignment: AssignmentId,
        paper: PaperId,
        reviewer: UserId,
    },
    AssignmentDeclined {
        assignment: AssignmentId,
        paper: PaperId,
        reviewer: UserId,
    },
    AssignmentReopened {
        assignment: AssignmentId,
        paper: PaperId,
        reviewer: UserId,
    },
    ReviewSubmitted {
        assignment: AssignmentId,
        paper: PaperId,
        reviewer: UserId,
        score: i8,
    },
    /// The review quorum was reached.
    PaperReviewed {
        paper: PaperId,
    },
    DecisionFinalized {
        paper: PaperId,
        decision: DecisionKind,
        decided_by: UserId,
    },
    CameraReadyAttached {
        paper: PaperId,
    },
    CommentPosted {
        comment: CommentId,
        paper: PaperId,
        author: UserId,
        parent: Option<CommentId>,
    },
    CommentRemoved {
        comment: CommentId,
        paper: PaperId,
    },
    CoiDeclared {
        coi: CoiId,
        reviewer: UserId,
        paper: PaperId,
    },
}

impl DomainEvent {
    /// Stable event name, used as the `event` tag in serialized form.
    pub fn kind(&self) -> &'static str {
        match self {
            DomainEvent::PaperSubmitted { .. } => "paper_submitted",
            DomainEvent::PaperWithdrawn { .. } => "paper_withdrawn",
            DomainEvent::AssignmentCreated { .. } => "assignment_created",
            DomainEvent::AssignmentAccepted { .. } => "assignment_accepted",
            DomainEvent::AssignmentDeclined { .. } => "assignment_declined",
            DomainEvent::AssignmentReopened { .. } => "assignment_reopened",
            DomainEvent::ReviewSubmitted { .. } => "review_submitted",
            DomainEvent::PaperReviewed { .. } => "paper_reviewed",
            DomainEvent::DecisionFinalized { .. } => "decision_finalized",
            DomainEvent::CameraReadyAttached { .. } => "camera_ready_attached",
            DomainEvent::CommentPosted { .. } => "comment_posted",
            DomainEvent::CommentRemoved { .. } => "comment_removed",
            DomainEvent::CoiDeclared { .. } => "coi_declared",
        }
    }

    /// The paper this event concerns.
    pub fn paper(&self) -> &PaperId {
        match self {
            DomainEvent::PaperSubmitted { paper, .. }
            | DomainEvent::PaperWithdrawn { paper, .. }
            | DomainEvent::AssignmentCreated { paper, .. }
            | DomainEvent::AssignmentAccepted { paper, .. }
            | DomainEvent::AssignmentDeclined { paper, .. }
            | DomainEvent::AssignmentReopened { paper, .. }
            | DomainEvent::ReviewSubmitted { paper, .. }
            | DomainEvent::PaperReviewed { paper }
            | DomainEvent::DecisionFinalized { paper, .. }
            | DomainEvent::CameraReadyAttached { paper }
            | DomainEvent::CommentPosted { paper, .. }
            | DomainEvent::CommentRemoved { paper, .. }
            | DomainEvent::CoiDeclared { paper, .. } => paper,
        }
    }
}
