//! Port for the conflict-of-interest registry.
//!
//! The registry is consulted synchronously before every assignment
//! creation and must never block on external I/O, so the trait is
//! deliberately non-async.

use chrono::{DateTime, Utc};
use confero_domain::{CoiId, ConflictOfInterest, DomainError, PaperId, UserId};

pub trait CoiRegistry: Send + Sync {
    /// Declare a conflict. Fails with `DuplicateCoi` when an active record
    /// already exists for the pair.
    fn declare(
        &self,
        reviewer: UserId,
        paper: PaperId,
        reason: &str,
        now: DateTime<Utc>,
    ) -> Result<ConflictOfInterest, DomainError>;

    /// Revoke a record by id. Idempotent: revoking an absent id is a no-op.
    fn revoke(&self, id: &CoiId);

    /// Whether an active record excludes this reviewer from this paper.
    fn is_excluded(&self, reviewer: &UserId, paper: &PaperId) -> bool;

    /// All active records for a paper.
    fn records_for_paper(&self, paper: &PaperId) -> Vec<ConflictOfInterest>;
}
