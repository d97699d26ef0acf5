//! Conflict-of-interest records.
//!
//! A COI record permanently excludes one reviewer from eligibility for one
//! paper. The registry holding these records is a port; this module only
//! defines the record itself.

use crate::core::ids::{CoiId, PaperId, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A declared reviewer-paper exclusion (Entity).
///
/// At most one active record exists per (reviewer, paper) pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConflictOfInterest {
    pub id: CoiId,
    pub reviewer: UserId,
    pub paper: PaperId,
    pub reason: String,
    pub created_at: DateTime<Utc>,
}

impl ConflictOfInterest {
    pub fn new(
        reviewer: UserId,
        paper: PaperId,
        reason: impl Into<String>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: CoiId::generate(),
            reviewer,
            paper,
            reason: reason.into(),
            created_at: now,
        }
    }
}
