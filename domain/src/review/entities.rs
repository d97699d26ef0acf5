//! Review entities.

use crate::core::error::DomainError;
use crate::core::ids::{AssignmentId, ReviewId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Score range accepted on a review.
pub const SCORE_RANGE: std::ops::RangeInclusive<i8> = -3..=3;
/// Confidence range accepted on a review.
pub const CONFIDENCE_RANGE: std::ops::RangeInclusive<u8> = 1..=5;

/// The content of a review before it is recorded (Value Object).
///
/// Separating the draft from the stored [`Review`] keeps validation in one
/// place: a `Review` only ever exists with an in-range score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewDraft {
    /// Overall score, -3 (strong reject) to +3 (strong accept)
    pub score: i8,
    /// Reviewer confidence, 1 (none) to 5 (expert)
    pub confidence: u8,
    /// Feedback shown to the author
    pub comment_for_author: String,
    /// Feedback visible only to the program committee
    pub comment_for_pc: String,
}

impl ReviewDraft {
    pub fn new(
        score: i8,
        confidence: u8,
        comment_for_author: impl Into<String>,
        comment_for_pc: impl Into<String>,
    ) -> Self {
        Self {
            score,
            confidence,
            comment_for_author: comment_for_author.into(),
            comment_for_pc: comment_for_pc.into(),
        }
    }

    /// Check score and confidence bounds.
    pub fn validate(&self) -> Result<(), DomainError> {
        if !SCORE_RANGE.contains(&self.score) || !CONFIDENCE_RANGE.contains(&self.confidence) {
            return Err(DomainError::InvalidScore {
                score: self.score,
                confidence: self.confidence,
            });
        }
        Ok(())
    }
}

/// A recorded review, exactly one per completed assignment (Entity).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    pub id: ReviewId,
    pub assignment: AssignmentId,
    pub score: i8,
    pub confidence: u8,
    pub comment_for_author: String,
    pub comment_for_pc: String,
    pub submitted_at: DateTime<Utc>,
}

impl Review {
    /// Record a validated draft against an assignment.
    pub fn record(
        assignment: AssignmentId,
        draft: ReviewDraft,
        now: DateTime<Utc>,
    ) -> Result<Self, DomainError> {
        draft.validate()?;
        Ok(Self {
            id: ReviewId::generate(),
            assignment,
            score: draft.score,
            confidence: draft.confidence,
            comment_for_author: draft.comment_for_author,
            comment_for_pc: draft.comment_for_pc,
            submitted_at: now,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 5, 1, 10, 0, 0).unwrap()
    }

    #[test]
    fn test_record_valid_draft() {
        let draft = ReviewDraft::new(2, 4, "Solid work", "Lean accept");
        let review = Review::record(AssignmentId::new("a1"), draft, now()).unwrap();
        assert_eq!(review.score, 2);
        assert_eq!(review.confidence, 4);
    }

    #[test]
    fn test_score_out_of_range_rejected() {
        let draft = ReviewDraft::new(4, 3, "", "");
        let err = Review::record(AssignmentId::new("a1"), draft, now()).unwrap_err();
        assert!(matches!(err, DomainError::InvalidScore { score: 4, .. }));
    }

    #[test]
    fn test_confidence_out_of_range_rejected() {
        let draft = ReviewDraft::new(0, 0, "", "");
        assert!(Review::record(AssignmentId::new("a1"), draft, now()).is_err());

        let draft = ReviewDraft::new(0, 6, "", "");
        assert!(Review::record(AssignmentId::new("a1"), draft, now()).is_err());
    }

    #[test]
    fn test_boundary_values_accepted() {
        for (score, confidence) in [(-3, 1), (3, 5), (0, 3)] {
            let draft = ReviewDraft::new(score, confidence, "", "");
            assert!(draft.validate().is_ok(), "({score}, {confidence}) should be valid");
        }
    }
}
