//! The paper aggregate: one paper and everything it owns.
//!
//! A paper exclusively owns its assignments, reviews, decision history, and
//! discussion comments, so the whole group forms one consistency boundary.
//! Every rule from assignment uniqueness to decision locking is enforced
//! here; callers load the aggregate, call one method, and persist the
//! result under an optimistic version check.
//!
//! Methods are pure with respect to the outside world: they mutate `self`,
//! never perform I/O, and return the [`DomainEvent`]s a dispatcher should
//! see once the change commits.

use crate::assignment::{Assignment, AssignmentStatus};
use crate::core::error::DomainError;
use crate::core::ids::{AssignmentId, CommentId, PaperId, UserId};
use crate::decision::{Decision, DecisionKind};
use crate::discussion::{DiscussionComment, DiscussionThread, build_threads};
use crate::events::DomainEvent;
use crate::review::entities::{Review, ReviewDraft};
use crate::review::quorum::ReviewQuorum;
use crate::review::scoring::ScoreSummary;
use crate::submission::entities::Paper;
use crate::submission::status::{PaperStatus, StatusEvent};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaperAggregate {
    pub paper: Paper,
    pub assignments: Vec<Assignment>,
    pub reviews: Vec<Review>,
    pub decisions: Vec<Decision>,
    pub comments: Vec<DiscussionComment>,
}

impl PaperAggregate {
    pub fn new(paper: Paper) -> Self {
        Self {
            paper,
            assignments: Vec::new(),
            reviews: Vec::new(),
            decisions: Vec::new(),
            comments: Vec::new(),
        }
    }

    pub fn id(&self) -> &PaperId {
        &self.paper.id
    }

    pub fn status(&self) -> PaperStatus {
        self.paper.status
    }

    /// The single point through which the status ever changes.
    fn transition(&mut self, event: StatusEvent, now: DateTime<Utc>) -> Result<(), DomainError> {
        match self.paper.status.apply(event) {
            Some(next) => {
                self.paper.status = next;
                self.paper.updated_at = now;
                Ok(())
            }
            None => Err(DomainError::InvalidTransition {
                paper: self.paper.id.clone(),
                from: self.paper.status,
                attempted: event,
            }),
        }
    }

    // --- Submission lifecycle -------------------------------------------

    /// Author finalizes the draft. Fails with `DeadlinePassed` after the
    /// conference's submission deadline.
    pub fn submit(
        &mut self,
        submission_deadline: DateTime<Utc>,
        now: DateTime<Utc>,
    ) -> Result<Vec<DomainEvent>, DomainError> {
        if self.paper.status == PaperStatus::Draft && now > submission_deadline {
            return Err(DomainError::DeadlinePassed {
                paper: self.paper.id.clone(),
                deadline: submission_deadline,
            });
        }
        self.transition(StatusEvent::Submit, now)?;
        self.paper.submitted_at = Some(now);
        Ok(vec![DomainEvent::PaperSubmitted {
            paper: self.paper.id.clone(),
            at: now,
        }])
    }

    /// Author withdraws. Only legal from `Submitted` or `UnderReview`.
    pub fn withdraw(&mut self, now: DateTime<Utc>) -> Result<Vec<DomainEvent>, DomainError> {
        self.transition(StatusEvent::Withdraw, now)?;
        Ok(vec![DomainEvent::PaperWithdrawn {
            paper: self.paper.id.clone(),
            at: now,
        }])
    }

    /// Attach the camera-ready artifact handle. Only legal from `Accepted`.
    pub fn attach_camera_ready(
        &mut self,
        reference: impl Into<String>,
        now: DateTime<Utc>,
    ) -> Result<Vec<DomainEvent>, DomainError> {
        self.transition(StatusEvent::AttachCameraReady, now)?;
        self.paper.camera_ready_ref = Some(reference.into());
        Ok(vec![DomainEvent::CameraReadyAttached {
            paper: self.paper.id.clone(),
        }])
    }

    // --- Assignments -----------------------------------------------------

    /// Create a pending assignment for a reviewer.
    ///
    /// The COI check happens in the coordinator before this call; the
    /// aggregate enforces the uniqueness rule (at most one non-declined
    /// assignment per reviewer) and that the paper still accepts review
    /// activity. The paper's status is not changed by assignment creation.
    pub fn assign(
        &mut self,
        reviewer: UserId,
        due: DateTime<Utc>,
        now: DateTime<Utc>,
    ) -> Result<(AssignmentId, Vec<DomainEvent>), DomainError> {
        if !self.paper.status.accepts_review_activity() {
            return Err(self.inactive());
        }
        if self
            .assignments
            .iter()
            .any(|a| a.reviewer == reviewer && a.status.is_active())
        {
            return Err(DomainError::DuplicateAssignment {
                reviewer,
                paper: self.paper.id.clone(),
            });
        }

        let assignment = Assignment::new(self.paper.id.clone(), reviewer.clone(), due, now);
        let id = assignment.id.clone();
        let event = DomainEvent::AssignmentCreated {
            assignment: id.clone(),
            paper: self.paper.id.clone(),
            reviewer,
            due,
        };
        self.assignments.push(assignment);
        Ok((id, vec![event]))
    }

    /// Reviewer accepts a pending assignment. The paper's first accepted
    /// assignment moves it from `Submitted` to `UnderReview`.
    pub fn accept_assignment(
        &mut self,
        id: &AssignmentId,
        now: DateTime<Utc>,
    ) -> Result<Vec<DomainEvent>, DomainError> {
        if !self.paper.status.accepts_review_activity() {
            return Err(self.inactive());
        }
        let assignment = self.expect_assignment_in_state(id, AssignmentStatus::Pending)?;
        assignment.status = AssignmentStatus::Accepted;
        let reviewer = assignment.reviewer.clone();
        let assignment_id = assignment.id.clone();

        let events = vec![DomainEvent::AssignmentAccepted {
            assignment: assignment_id,
            paper: self.paper.id.clone(),
            reviewer,
        }];
        if self.paper.status == PaperStatus::Submitted {
            self.transition(StatusEvent::StartReview, now)?;
        }
        Ok(events)
    }

    /// Reviewer declines a pending assignment. The paper's status is
    /// unaffected; the chair may assign someone else.
    pub fn decline_assignment(
        &mut self,
        id: &AssignmentId,
        now: DateTime<Utc>,
    ) -> Result<Vec<DomainEvent>, DomainError> {
        let assignment = self.expect_assignment_in_state(id, AssignmentStatus::Pending)?;
        assignment.status = AssignmentStatus::Declined;
        let assignment_id = assignment.id.clone();
        let reviewer = assignment.reviewer.clone();
        self.paper.updated_at = now;
        Ok(vec![DomainEvent::AssignmentDeclined {
            assignment: assignment_id,
            paper: self.paper.id.clone(),
            reviewer,
        }])
    }

    /// Chair override: put a declined assignment back to pending so the
    /// same reviewer can be asked again.
    pub fn reopen_assignment(
        &mut self,
        id: &AssignmentId,
        now: DateTime<Utc>,
    ) -> Result<Vec<DomainEvent>, DomainError> {
        if !self.paper.status.accepts_review_activity() {
            return Err(self.inactive());
        }
        let assignment = self.expect_assignment_in_state(id, AssignmentStatus::Declined)?;
        assignment.status = AssignmentStatus::Pending;
        let assignment_id = assignment.id.clone();
        let reviewer = assignment.reviewer.clone();
        self.paper.updated_at = now;
        Ok(vec![DomainEvent::AssignmentReopened {
            assignment: assignment_id,
            paper: self.paper.id.clone(),
            reviewer,
        }])
    }

    // --- Reviews ----------------------------------------------------------

    /// Record the one review an accepted assignment may carry.
    ///
    /// Atomically completes the assignment and, when the quorum policy is
    /// now met, moves the paper from `UnderReview` to `Reviewed`.
    pub fn submit_review(
        &mut self,
        assignment_id: &AssignmentId,
        draft: ReviewDraft,
        quorum: ReviewQuorum,
        now: DateTime<Utc>,
    ) -> Result<Vec<DomainEvent>, DomainError> {
        if !matches!(
            self.paper.status,
            PaperStatus::UnderReview | PaperStatus::Reviewed
        ) {
            return Err(self.inactive());
        }
        if self.reviews.iter().any(|r| r.assignment == *assignment_id) {
            return Err(DomainError::DuplicateReview {
                assignment: assignment_id.clone(),
            });
        }

        let assignment = self
            .assignments
            .iter_mut()
            .find(|a| a.id == *assignment_id)
            .ok_or_else(|| DomainError::not_found("assignment", assignment_id))?;
        if assignment.status != AssignmentStatus::Accepted {
            return Err(DomainError::AssignmentNotAccepted {
                assignment: assignment_id.clone(),
                status: assignment.status,
            });
        }

        let review = Review::record(assignment_id.clone(), draft, now)?;
        assignment.status = AssignmentStatus::Completed;
        let reviewer = assignment.reviewer.clone();

        let mut events = vec![DomainEvent::ReviewSubmitted {
            assignment: assignment_id.clone(),
            paper: self.paper.id.clone(),
            reviewer,
            score: review.score,
        }];
        self.reviews.push(review);
        self.paper.updated_at = now;

        if self.paper.status == PaperStatus::UnderReview
            && quorum.is_met(self.completed_assignments(), self.active_assignments())
        {
            self.transition(StatusEvent::QuorumReached, now)?;
            events.push(DomainEvent::PaperReviewed {
                paper: self.paper.id.clone(),
            });
        }
        Ok(events)
    }

    /// Aggregate score over all completed reviews. Pure and read-only.
    pub fn score_summary(&self) -> ScoreSummary {
        ScoreSummary::from_reviews(&self.reviews)
    }

    // --- Decisions ---------------------------------------------------------

    /// Chair finalizes (or overwrites) the decision for this paper.
    ///
    /// Requires a reviewed paper; `override_quorum` lets a chair finalize
    /// early, but only once at least one completed review exists. Once the
    /// paper is camera-ready or withdrawn the decision is locked.
    pub fn finalize(
        &mut self,
        kind: DecisionKind,
        comment: impl Into<String>,
        chair: UserId,
        override_quorum: bool,
        now: DateTime<Utc>,
    ) -> Result<Vec<DomainEvent>, DomainError> {
        let mut events = Vec::new();
        match self.paper.status {
            PaperStatus::CameraReady | PaperStatus::Withdrawn => {
                return Err(DomainError::DecisionLocked {
                    paper: self.paper.id.clone(),
                    status: self.paper.status,
                });
            }
            PaperStatus::Reviewed | PaperStatus::Accepted | PaperStatus::Rejected => {}
            PaperStatus::UnderReview if override_quorum && !self.reviews.is_empty() => {
                self.transition(StatusEvent::QuorumReached, now)?;
                events.push(DomainEvent::PaperReviewed {
                    paper: self.paper.id.clone(),
                });
            }
            PaperStatus::Draft | PaperStatus::Submitted | PaperStatus::UnderReview => {
                return Err(DomainError::NotReviewed {
                    paper: self.paper.id.clone(),
                    status: self.paper.status,
                });
            }
        }

        self.transition(kind.status_event(), now)?;
        let decision = Decision::new(
            self.paper.id.clone(),
            kind,
            comment,
            chair.clone(),
            now,
        );
        self.decisions.push(decision);
        events.push(DomainEvent::DecisionFinalized {
            paper: self.paper.id.clone(),
            decision: kind,
            decided_by: chair,
        });
        Ok(events)
    }

    /// The authoritative decision: the latest record.
    pub fn current_decision(&self) -> Option<&Decision> {
        self.decisions.last()
    }

    // --- Discussion ---------------------------------------------------------

    /// Post a comment or a reply. Depth is capped at two levels: replying
    /// to a reply fails with `InvalidParent`.
    pub fn post_comment(
        &mut self,
        author: UserId,
        content: &str,
        parent: Option<CommentId>,
        max_chars: usize,
        now: DateTime<Utc>,
    ) -> Result<(CommentId, Vec<DomainEvent>), DomainError> {
        let trimmed = content.trim();
        if trimmed.is_empty() {
            return Err(DomainError::ContentEmpty);
        }
        let length = trimmed.chars().count();
        if length > max_chars {
            return Err(DomainError::ContentTooLong {
                length,
                max: max_chars,
            });
        }

        if let Some(parent_id) = &parent {
            let parent_comment = self
                .comments
                .iter()
                .find(|c| c.id == *parent_id)
                .ok_or_else(|| DomainError::InvalidParent {
                    parent: parent_id.clone(),
                    reason: "no such comment on this paper".to_string(),
                })?;
            if parent_comment.parent.is_some() {
                return Err(DomainError::InvalidParent {
                    parent: parent_id.clone(),
                    reason: "replies cannot be nested".to_string(),
                });
            }
        }

        let comment = DiscussionComment::new(
            self.paper.id.clone(),
            author.clone(),
            trimmed,
            parent.clone(),
            now,
        );
        let id = comment.id.clone();
        let event = DomainEvent::CommentPosted {
            comment: id.clone(),
            paper: self.paper.id.clone(),
            author,
            parent,
        };
        self.comments.push(comment);
        Ok((id, vec![event]))
    }

    /// Mark a comment removed. Replies stay visible and attributed; a
    /// second removal of the same comment is a no-op.
    pub fn remove_comment(
        &mut self,
        id: &CommentId,
    ) -> Result<Vec<DomainEvent>, DomainError> {
        let comment = self
            .comments
            .iter_mut()
            .find(|c| c.id == *id)
            .ok_or_else(|| DomainError::not_found("comment", id))?;
        if comment.removed {
            return Ok(Vec::new());
        }
        comment.removed = true;
        Ok(vec![DomainEvent::CommentRemoved {
            comment: id.clone(),
            paper: self.paper.id.clone(),
        }])
    }

    /// Two-level thread view over the stored comments.
    pub fn threads(&self) -> Vec<DiscussionThread> {
        build_threads(&self.comments)
    }

    // --- Lookups ------------------------------------------------------------

    pub fn assignment(&self, id: &AssignmentId) -> Option<&Assignment> {
        self.assignments.iter().find(|a| a.id == *id)
    }

    /// Non-declined assignments, the quorum denominator.
    pub fn active_assignments(&self) -> usize {
        self.assignments
            .iter()
            .filter(|a| a.status.is_active())
            .count()
    }

    /// Completed assignments, the quorum numerator.
    pub fn completed_assignments(&self) -> usize {
        self.assignments
            .iter()
            .filter(|a| a.status == AssignmentStatus::Completed)
            .count()
    }

    fn inactive(&self) -> DomainError {
        DomainError::PaperInactive {
            paper: self.paper.id.clone(),
            status: self.paper.status,
        }
    }

    fn expect_assignment_in_state(
        &mut self,
        id: &AssignmentId,
        expected: AssignmentStatus,
    ) -> Result<&mut Assignment, DomainError> {
        let assignment = self
            .assignments
            .iter_mut()
            .find(|a| a.id == *id)
            .ok_or_else(|| DomainError::not_found("assignment", id))?;
        if assignment.status != expected {
            return Err(DomainError::InvalidAssignmentState {
                assignment: id.clone(),
                status: assignment.status,
                expected,
            });
        }
        Ok(assignment)
    }
}
