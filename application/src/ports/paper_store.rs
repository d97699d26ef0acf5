//! Persistence port for paper aggregates.
//!
//! The store holds whole [`PaperAggregate`]s under an optimistic version.
//! Use cases load, mutate in memory, and save with the version they read;
//! a concurrent writer makes the save fail with [`StoreError::VersionConflict`]
//! and the use case retries against fresh state. That is the per-paper
//! mutual-exclusion scope the engine's rules rely on.

use async_trait::async_trait;
use confero_domain::{AssignmentId, PaperAggregate, PaperId, TrackId};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Monotonic per-aggregate version for optimistic concurrency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub struct Version(pub u64);

impl Version {
    pub fn next(self) -> Version {
        Version(self.0 + 1)
    }
}

/// Storage faults. These are the retryable category, distinct from
/// domain errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("aggregate was modified concurrently")]
    VersionConflict,

    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Repository for paper aggregates.
///
/// Implementations live in the infrastructure layer. `save` must compare
/// the expected version atomically with the write.
#[async_trait]
pub trait PaperStore: Send + Sync {
    /// Insert a new aggregate at version 1. The id must be fresh.
    async fn insert(&self, aggregate: PaperAggregate) -> Result<Version, StoreError>;

    /// Load an aggregate snapshot with its current version.
    async fn load(&self, id: &PaperId) -> Result<Option<(PaperAggregate, Version)>, StoreError>;

    /// Persist a mutated aggregate. Fails with `VersionConflict` when the
    /// stored version no longer matches `expected`.
    async fn save(
        &self,
        aggregate: PaperAggregate,
        expected: Version,
    ) -> Result<Version, StoreError>;

    /// Resolve which paper an assignment belongs to.
    async fn paper_of_assignment(
        &self,
        id: &AssignmentId,
    ) -> Result<Option<PaperId>, StoreError>;

    /// Snapshot of every aggregate in a track, for the read model.
    async fn list_by_track(&self, track: &TrackId) -> Result<Vec<PaperAggregate>, StoreError>;
}
