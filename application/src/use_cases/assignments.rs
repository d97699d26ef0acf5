//! Assignment coordination: COI-aware assignment creation and the
//! reviewer's accept/decline flow.
//!
//! Reviewer workload balancing is a policy the caller applies before
//! calling `assign`; the coordinator validates and persists one assignment
//! at a time.

use crate::config::EngineConfig;
use crate::error::EngineError;
use crate::ports::clock::Clock;
use crate::ports::coi_registry::CoiRegistry;
use crate::ports::event_dispatcher::EventDispatcher;
use crate::ports::paper_store::PaperStore;
use crate::use_cases::shared::mutate_paper;
use chrono::{DateTime, Duration, Utc};
use confero_domain::{AssignmentId, DomainError, PaperId, UserId};
use std::sync::Arc;
use tracing::{info, warn};

pub struct AssignmentCoordinator<S: PaperStore> {
    store: Arc<S>,
    coi: Arc<dyn CoiRegistry>,
    clock: Arc<dyn Clock>,
    dispatcher: Arc<dyn EventDispatcher>,
    config: EngineConfig,
}

impl<S: PaperStore> AssignmentCoordinator<S> {
    pub fn new(
        store: Arc<S>,
        coi: Arc<dyn CoiRegistry>,
        clock: Arc<dyn Clock>,
        dispatcher: Arc<dyn EventDispatcher>,
        config: EngineConfig,
    ) -> Self {
        Self {
            store,
            coi,
            clock,
            dispatcher,
            config,
        }
    }

    /// Assign a reviewer to a paper.
    ///
    /// Fails with `ConflictOfInterest` when the registry excludes the pair
    /// and with `DuplicateAssignment` when a non-declined assignment
    /// already exists. Without an explicit due date the configured review
    /// period applies. The paper's status is not changed.
    pub async fn assign(
        &self,
        paper: &PaperId,
        reviewer: &UserId,
        due: Option<DateTime<Utc>>,
    ) -> Result<AssignmentId, EngineError> {
        let now = self.clock.now();
        let due = due.unwrap_or(now + Duration::days(self.config.default_review_days));
        let coi = Arc::clone(&self.coi);
        let reviewer = reviewer.clone();

        // The COI check runs inside the retry loop so a conflict declared
        // concurrently is still honored at assignment time.
        let (id, events) = mutate_paper(self.store.as_ref(), paper, |aggregate| {
            if coi.is_excluded(&reviewer, aggregate.id()) {
                warn!(paper = %aggregate.id(), reviewer = %reviewer, "assignment blocked by COI");
                return Err(DomainError::ConflictOfInterest {
                    reviewer: reviewer.clone(),
                    paper: aggregate.id().clone(),
                });
            }
            aggregate.assign(reviewer.clone(), due, now)
        })
        .await?;

        info!(paper = %paper, assignment = %id, "assignment created");
        self.dispatcher.dispatch_all(&events);
        Ok(id)
    }

    /// Reviewer accepts a pending assignment. The paper's first accepted
    /// assignment moves it under review.
    pub async fn accept(&self, assignment: &AssignmentId) -> Result<(), EngineError> {
        let paper = self.paper_of(assignment).await?;
        let now = self.clock.now();

        let (_, events) = mutate_paper(self.store.as_ref(), &paper, |aggregate| {
            aggregate
                .accept_assignment(assignment, now)
                .map(|events| ((), events))
        })
        .await?;

        info!(paper = %paper, assignment = %assignment, "assignment accepted");
        self.dispatcher.dispatch_all(&events);
        Ok(())
    }

    /// Reviewer declines a pending assignment. The paper keeps its status;
    /// the same reviewer can only be re-asked after a chair reopens.
    pub async fn decline(&self, assignment: &AssignmentId) -> Result<(), EngineError> {
        let paper = self.paper_of(assignment).await?;
        let now = self.clock.now();

        let (_, events) = mutate_paper(self.store.as_ref(), &paper, |aggregate| {
            aggregate
                .decline_assignment(assignment, now)
                .map(|events| ((), events))
        })
        .await?;

        info!(paper = %paper, assignment = %assignment, "assignment declined");
        self.dispatcher.dispatch_all(&events);
        Ok(())
    }

    /// Chair override: reset a declined assignment to pending.
    pub async fn reopen(&self, assignment: &AssignmentId) -> Result<(), EngineError> {
        let paper = self.paper_of(assignment).await?;
        let now = self.clock.now();

        let (_, events) = mutate_paper(self.store.as_ref(), &paper, |aggregate| {
            aggregate
                .reopen_assignment(assignment, now)
                .map(|events| ((), events))
        })
        .await?;

        info!(paper = %paper, assignment = %assignment, "assignment reopened");
        self.dispatcher.dispatch_all(&events);
        Ok(())
    }

    async fn paper_of(&self, assignment: &AssignmentId) -> Result<PaperId, EngineError> {
        self.store
            .paper_of_assignment(assignment)
            .await?
            .ok_or_else(|| EngineError::not_found("assignment", assignment))
    }
}
