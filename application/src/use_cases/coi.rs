//! Conflict-of-interest declarations.
//!
//! Thin wrapper over the registry port so declarations go through the
//! same commit-then-dispatch path as every other mutation: consumers
//! (notification e-mail, audit log) see a `CoiDeclared` event once the
//! record exists.

use crate::error::EngineError;
use crate::ports::clock::Clock;
use crate::ports::coi_registry::CoiRegistry;
use crate::ports::event_dispatcher::EventDispatcher;
use confero_domain::{CoiId, ConflictOfInterest, DomainEvent, PaperId, UserId};
use std::sync::Arc;
use tracing::info;

pub struct CoiService {
    coi: Arc<dyn CoiRegistry>,
    clock: Arc<dyn Clock>,
    dispatcher: Arc<dyn EventDispatcher>,
}

impl CoiService {
    pub fn new(
        coi: Arc<dyn CoiRegistry>,
        clock: Arc<dyn Clock>,
        dispatcher: Arc<dyn EventDispatcher>,
    ) -> Self {
        Self {
            coi,
            clock,
            dispatcher,
        }
    }

    /// Declare a conflict, excluding the reviewer from the paper.
    ///
    /// Fails with `DuplicateCoi` when an active record already exists for
    /// the pair; nothing is dispatched in that case.
    pub fn declare(
        &self,
        reviewer: UserId,
        paper: PaperId,
        reason: &str,
    ) -> Result<ConflictOfInterest, EngineError> {
        let record = self.coi.declare(reviewer, paper, reason, self.clock.now())?;
        info!(coi = %record.id, paper = %record.paper, reviewer = %record.reviewer,
            "conflict of interest declared");
        self.dispatcher.dispatch(&DomainEvent::CoiDeclared {
            coi: record.id.clone(),
            reviewer: record.reviewer.clone(),
            paper: record.paper.clone(),
        });
        Ok(record)
    }

    /// Revoke a record by id. Idempotent.
    pub fn revoke(&self, id: &CoiId) {
        self.coi.revoke(id);
    }

    /// All active records for a paper.
    pub fn records_for_paper(&self, paper: &PaperId) -> Vec<ConflictOfInterest> {
        self.coi.records_for_paper(paper)
    }
}
