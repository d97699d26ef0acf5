//! Domain layer for confero
//!
//! This crate contains the core business rules of the conference review
//! engine: the paper lifecycle state machine, conflict-of-interest records,
//! reviewer assignments, review scoring, chair decisions, and discussion
//! threads. It has no dependencies on storage, transport, or presentation
//! concerns.
//!
//! # Core Concepts
//!
//! ## Paper aggregate
//!
//! A [`PaperAggregate`] is the consistency boundary: a paper together with
//! its assignments, reviews, decision history, and discussion comments.
//! Every mutation is a method on the aggregate that validates the rule,
//! applies the change, and returns the [`DomainEvent`]s to dispatch.
//!
//! ## Quorum
//!
//! A paper moves from `UnderReview` to `Reviewed` when its configured
//! [`ReviewQuorum`] is met (default: every non-declined assignment has a
//! completed review).

pub mod assignment;
pub mod coi;
pub mod conference;
pub mod core;
pub mod decision;
pub mod discussion;
pub mod events;
pub mod identity;
pub mod progress;
pub mod review;
pub mod submission;

// Re-export commonly used types
pub use assignment::{Assignment, AssignmentStatus};
pub use coi::ConflictOfInterest;
pub use conference::{Conference, Deadlines, SessionSlot, Track};
pub use core::error::DomainError;
pub use core::ids::{
    AssignmentId, CoiId, CommentId, ConferenceId, DecisionId, PaperId, ReviewId, TrackId, UserId,
};
pub use decision::{Decision, DecisionKind};
pub use discussion::{DiscussionComment, DiscussionThread, build_threads, can_participate};
pub use events::DomainEvent;
pub use identity::{Role, UserProfile};
pub use progress::ProgressReport;
pub use review::{
    entities::{Review, ReviewDraft},
    quorum::ReviewQuorum,
    scoring::ScoreSummary,
};
pub use submission::{
    aggregate::PaperAggregate,
    entities::{CoAuthor, Paper},
    status::{PaperStatus, StatusEvent},
};
