//! In-memory conflict-of-interest registry.
//!
//! Synchronous by contract: the registry is consulted before every
//! assignment creation and must never block on external I/O. A plain
//! `std::sync::RwLock` over two maps is enough.

use chrono::{DateTime, Utc};
use confero_application::ports::coi_registry::CoiRegistry;
use confero_domain::{CoiId, ConflictOfInterest, DomainError, PaperId, UserId};
use std::collections::HashMap;
use std::sync::RwLock;

#[derive(Default)]
struct Inner {
    by_pair: HashMap<(UserId, PaperId), ConflictOfInterest>,
    by_id: HashMap<CoiId, (UserId, PaperId)>,
}

/// In-memory implementation of [`CoiRegistry`].
#[derive(Default)]
pub struct InMemoryCoiRegistry {
    inner: RwLock<Inner>,
}

impl InMemoryCoiRegistry {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CoiRegistry for InMemoryCoiRegistry {
    fn declare(
        &self,
        reviewer: UserId,
        paper: PaperId,
        reason: &str,
        now: DateTime<Utc>,
    ) -> Result<ConflictOfInterest, DomainError> {
        let mut inner = self.inner.write().expect("coi registry lock poisoned");
        let pair = (reviewer.clone(), paper.clone());
        if let Some(existing) = inner.by_pair.get(&pair) {
            return Err(DomainError::DuplicateCoi {
                reviewer,
                paper,
                existing: existing.id.clone(),
            });
        }

        let record = ConflictOfInterest::new(reviewer, paper, reason, now);
        inner.by_id.insert(record.id.clone(), pair.clone());
        inner.by_pair.insert(pair, record.clone());
        Ok(record)
    }

    fn revoke(&self, id: &CoiId) {
        let mut inner = self.inner.write().expect("coi registry lock poisoned");
        if let Some(pair) = inner.by_id.remove(id) {
            inner.by_pair.remove(&pair);
        }
    }

    fn is_excluded(&self, reviewer: &UserId, paper: &PaperId) -> bool {
        let inner = self.inner.read().expect("coi registry lock poisoned");
        inner
            .by_pair
            .contains_key(&(reviewer.clone(), paper.clone()))
    }

    fn records_for_paper(&self, paper: &PaperId) -> Vec<ConflictOfInterest> {
        let inner = self.inner.read().expect("coi registry lock poisoned");
        inner
            .by_pair
            .values()
            .filter(|record| record.paper == *paper)
            .cloned()
            .collect()
    }
}
