//! Review submission and aggregation.

use crate::config::EngineConfig;
use crate::error::EngineError;
use crate::ports::clock::Clock;
use crate::ports::event_dispatcher::EventDispatcher;
use crate::ports::paper_store::PaperStore;
use crate::use_cases::shared::mutate_paper;
use confero_domain::{AssignmentId, PaperId, ReviewDraft, ScoreSummary};
use std::sync::Arc;
use tracing::info;

pub struct ReviewService<S: PaperStore> {
    store: Arc<S>,
    clock: Arc<dyn Clock>,
    dispatcher: Arc<dyn EventDispatcher>,
    config: EngineConfig,
}

impl<S: PaperStore> ReviewService<S> {
    pub fn new(
        store: Arc<S>,
        clock: Arc<dyn Clock>,
        dispatcher: Arc<dyn EventDispatcher>,
        config: EngineConfig,
    ) -> Self {
        Self {
            store,
            clock,
            dispatcher,
            config,
        }
    }

    /// Record the one review an accepted assignment may carry.
    ///
    /// One-shot: there is no edit-in-place, a second submission fails with
    /// `DuplicateReview`. Completing the assignment and re-evaluating the
    /// paper's quorum happen atomically in the same transaction.
    pub async fn submit_review(
        &self,
        assignment: &AssignmentId,
        draft: ReviewDraft,
    ) -> Result<(), EngineError> {
        let paper = self
            .store
            .paper_of_assignment(assignment)
            .await?
            .ok_or_else(|| EngineError::not_found("assignment", assignment))?;
        let now = self.clock.now();
        let quorum = self.config.review_quorum;

        let (_, events) = mutate_paper(self.store.as_ref(), &paper, |aggregate| {
            aggregate
                .submit_review(assignment, draft.clone(), quorum, now)
                .map(|events| ((), events))
        })
        .await?;

        info!(paper = %paper, assignment = %assignment, "review submitted");
        self.dispatcher.dispatch_all(&events);
        Ok(())
    }

    /// Deterministic aggregate of all completed reviews for a paper.
    /// Read-only; never mutates state.
    pub async fn aggregate_for_paper(&self, paper: &PaperId) -> Result<ScoreSummary, EngineError> {
        let (aggregate, _) = self
            .store
            .load(paper)
            .await?
            .ok_or_else(|| EngineError::not_found("paper", paper))?;
        Ok(aggregate.score_summary())
    }
}
