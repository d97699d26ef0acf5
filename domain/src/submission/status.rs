//! Paper lifecycle state machine.
//!
//! The status of a paper is only reachable through [`PaperStatus::apply`],
//! the single authoritative transition function. Call sites never assign
//! the status field directly; they describe what happened as a
//! [`StatusEvent`] and let the table decide.

use serde::{Deserialize, Serialize};

/// Lifecycle status of a paper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaperStatus {
    /// Being edited by the author, not yet visible to chairs
    #[default]
    Draft,
    /// Finalized by the author before the submission deadline
    Submitted,
    /// At least one reviewer has accepted an assignment
    UnderReview,
    /// The review quorum has been met
    Reviewed,
    /// Chair decision: accept
    Accepted,
    /// Chair decision: reject (terminal)
    Rejected,
    /// Camera-ready artifact attached (terminal)
    CameraReady,
    /// Withdrawn by the author (terminal)
    Withdrawn,
}

impl PaperStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaperStatus::Draft => "draft",
            PaperStatus::Submitted => "submitted",
            PaperStatus::UnderReview => "under_review",
            PaperStatus::Reviewed => "reviewed",
            PaperStatus::Accepted => "accepted",
            PaperStatus::Rejected => "rejected",
            PaperStatus::CameraReady => "camera_ready",
            PaperStatus::Withdrawn => "withdrawn",
        }
    }

    /// Terminal states admit no further transition.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            PaperStatus::Withdrawn | PaperStatus::Rejected | PaperStatus::CameraReady
        )
    }

    /// States in which reviewer assignments may be created or answered.
    pub fn accepts_review_activity(&self) -> bool {
        matches!(self, PaperStatus::Submitted | PaperStatus::UnderReview)
    }

    /// Apply a lifecycle event, returning the new status.
    ///
    /// Returns `None` when the edge is not in the transition table; the
    /// caller maps that to `DomainError::InvalidTransition` with context.
    /// The decision events (`Accept`, `Reject`, `Revise`) are legal from any
    /// of the post-quorum states so a chair may overwrite a decision until
    /// the paper reaches camera-ready.
    pub fn apply(self, event: StatusEvent) -> Option<PaperStatus> {
        use PaperStatus::*;
        use StatusEvent::*;

        match (self, event) {
            (Draft, Submit) => Some(Submitted),
            (Submitted, StartReview) => Some(UnderReview),
            (UnderReview, QuorumReached) => Some(Reviewed),
            (Reviewed | Accepted | Rejected, Accept) => Some(Accepted),
            (Reviewed | Accepted | Rejected, Reject) => Some(Rejected),
            (Reviewed | Accepted | Rejected, Revise) => Some(Reviewed),
            (Submitted | UnderReview, Withdraw) => Some(Withdrawn),
            (Accepted, AttachCameraReady) => Some(CameraReady),
            _ => None,
        }
    }
}

impl std::fmt::Display for PaperStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Lifecycle event fed into the transition table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusEvent {
    /// Author finalizes the draft
    Submit,
    /// First assignment accepted
    StartReview,
    /// Review quorum met
    QuorumReached,
    /// Chair decision: accept
    Accept,
    /// Chair decision: reject
    Reject,
    /// Chair decision: minor/major revision (status stays reviewed)
    Revise,
    /// Author withdraws
    Withdraw,
    /// Camera-ready artifact attached
    AttachCameraReady,
}

impl StatusEvent {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusEvent::Submit => "submit",
            StatusEvent::StartReview => "start review",
            StatusEvent::QuorumReached => "reach quorum",
            StatusEvent::Accept => "accept",
            StatusEvent::Reject => "reject",
            StatusEvent::Revise => "request revision",
            StatusEvent::Withdraw => "withdraw",
            StatusEvent::AttachCameraReady => "attach camera-ready",
        }
    }
}

impl std::fmt::Display for StatusEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use PaperStatus::*;
    use StatusEvent::*;

    #[test]
    fn test_happy_path_to_camera_ready() {
        let status = Draft;
        let status = status.apply(Submit).unwrap();
        assert_eq!(status, Submitted);
        let status = status.apply(StartReview).unwrap();
        assert_eq!(status, UnderReview);
        let status = status.apply(QuorumReached).unwrap();
        assert_eq!(status, Reviewed);
        let status = status.apply(Accept).unwrap();
        assert_eq!(status, Accepted);
        let status = status.apply(AttachCameraReady).unwrap();
        assert_eq!(status, CameraReady);
    }

    #[test]
    fn test_withdraw_only_from_submitted_or_under_review() {
        assert_eq!(Submitted.apply(Withdraw), Some(Withdrawn));
        assert_eq!(UnderReview.apply(Withdraw), Some(Withdrawn));
        assert_eq!(Draft.apply(Withdraw), None);
        assert_eq!(Reviewed.apply(Withdraw), None);
        assert_eq!(Withdrawn.apply(Withdraw), None);
        assert_eq!(CameraReady.apply(Withdraw), None);
    }

    #[test]
    fn test_decision_overwrite_before_camera_ready() {
        assert_eq!(Reviewed.apply(Accept), Some(Accepted));
        assert_eq!(Accepted.apply(Reject), Some(Rejected));
        assert_eq!(Rejected.apply(Accept), Some(Accepted));
        assert_eq!(Accepted.apply(Revise), Some(Reviewed));
        // Once camera-ready, nothing moves
        assert_eq!(CameraReady.apply(Reject), None);
        assert_eq!(CameraReady.apply(Accept), None);
    }

    #[test]
    fn test_camera_ready_only_from_accepted() {
        assert_eq!(Accepted.apply(AttachCameraReady), Some(CameraReady));
        assert_eq!(Rejected.apply(AttachCameraReady), None);
        assert_eq!(Reviewed.apply(AttachCameraReady), None);
    }

    #[test]
    fn test_terminal_states_admit_nothing() {
        let events = [
            Submit,
            StartReview,
            QuorumReached,
            Accept,
            Reject,
            Revise,
            Withdraw,
            AttachCameraReady,
        ];
        for terminal in [Withdrawn, Rejected, CameraReady] {
            assert!(terminal.is_terminal());
            for event in events {
                if terminal == Rejected && matches!(event, Accept | Reject | Revise) {
                    // Rejected is terminal for the author, but the chair may
                    // still overwrite the decision until camera-ready.
                    continue;
                }
                assert_eq!(terminal.apply(event), None, "{terminal} should reject {event}");
            }
        }
    }

    #[test]
    fn test_no_skipping_states() {
        assert_eq!(Draft.apply(StartReview), None);
        assert_eq!(Draft.apply(Accept), None);
        assert_eq!(Submitted.apply(QuorumReached), None);
        assert_eq!(Submitted.apply(Accept), None);
        assert_eq!(UnderReview.apply(Accept), None);
    }
}
