//! Reviewer assignments.
//!
//! An assignment ties one reviewer to one paper and carries its own
//! accept/decline lifecycle, distinct from the paper's status.

use crate::core::ids::{AssignmentId, PaperId, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Status of a reviewer assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AssignmentStatus {
    /// Created by a chair, awaiting the reviewer's answer
    #[default]
    Pending,
    /// Reviewer accepted; a review may be submitted
    Accepted,
    /// Reviewer declined; the pair may be re-assigned only via chair reopen
    Declined,
    /// Review submitted
    Completed,
}

impl AssignmentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AssignmentStatus::Pending => "pending",
            AssignmentStatus::Accepted => "accepted",
            AssignmentStatus::Declined => "declined",
            AssignmentStatus::Completed => "completed",
        }
    }

    /// Active assignments count toward the uniqueness rule and the quorum.
    pub fn is_active(&self) -> bool {
        !matches!(self, AssignmentStatus::Declined)
    }
}

impl std::fmt::Display for AssignmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The relationship between one reviewer and one paper (Entity).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assignment {
    pub id: AssignmentId,
    pub paper: PaperId,
    pub reviewer: UserId,
    pub status: AssignmentStatus,
    pub assigned_at: DateTime<Utc>,
    pub due: DateTime<Utc>,
}

impl Assignment {
    pub fn new(
        paper: PaperId,
        reviewer: UserId,
        due: DateTime<Utc>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: AssignmentId::generate(),
            paper,
            reviewer,
            status: AssignmentStatus::Pending,
            assigned_at: now,
            due,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_new_assignment_is_pending() {
        let now = Utc.with_ymd_and_hms(2026, 4, 1, 9, 0, 0).unwrap();
        let due = Utc.with_ymd_and_hms(2026, 4, 22, 9, 0, 0).unwrap();
        let assignment = Assignment::new(PaperId::new("p1"), UserId::new("r1"), due, now);
        assert_eq!(assignment.status, AssignmentStatus::Pending);
        assert_eq!(assignment.assigned_at, now);
    }

    #[test]
    fn test_only_declined_is_inactive() {
        assert!(AssignmentStatus::Pending.is_active());
        assert!(AssignmentStatus::Accepted.is_active());
        assert!(AssignmentStatus::Completed.is_active());
        assert!(!AssignmentStatus::Declined.is_active());
    }
}
