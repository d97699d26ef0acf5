//! Chair decision finalization.

use crate::error::EngineError;
use crate::ports::clock::Clock;
use crate::ports::event_dispatcher::EventDispatcher;
use crate::ports::identity::IdentityDirectory;
use crate::ports::paper_store::PaperStore;
use crate::use_cases::shared::mutate_paper;
use confero_domain::{DecisionKind, DomainError, PaperId, UserId};
use std::sync::Arc;
use tracing::info;

pub struct DecisionService<S: PaperStore> {
    store: Arc<S>,
    identity: Arc<dyn IdentityDirectory>,
    clock: Arc<dyn Clock>,
    dispatcher: Arc<dyn EventDispatcher>,
}

impl<S: PaperStore> DecisionService<S> {
    pub fn new(
        store: Arc<S>,
        identity: Arc<dyn IdentityDirectory>,
        clock: Arc<dyn Clock>,
        dispatcher: Arc<dyn EventDispatcher>,
    ) -> Self {
        Self {
            store,
            identity,
            clock,
            dispatcher,
        }
    }

    /// Finalize (or overwrite) the decision for a paper.
    ///
    /// Only chairs and admins may decide. `override_quorum` lets a chair
    /// finalize before the quorum is met, provided at least one completed
    /// review exists. Accept/reject drive the paper's status; revision
    /// decisions are recorded and leave it at reviewed. Once the paper is
    /// camera-ready or withdrawn the decision is locked.
    pub async fn finalize(
        &self,
        paper: &PaperId,
        kind: DecisionKind,
        comment: &str,
        chair: &UserId,
        override_quorum: bool,
    ) -> Result<(), EngineError> {
        let profile = self
            .identity
            .get_user(chair)
            .await?
            .ok_or_else(|| EngineError::not_found("user", chair))?;
        if !profile.role.is_chair_or_admin() {
            return Err(DomainError::NotAuthorized {
                user: chair.clone(),
                action: "finalize a decision",
            }
            .into());
        }

        let now = self.clock.now();
        let comment = comment.to_string();
        let chair = chair.clone();
        let (_, events) = mutate_paper(self.store.as_ref(), paper, |aggregate| {
            aggregate
                .finalize(kind, comment.clone(), chair.clone(), override_quorum, now)
                .map(|events| ((), events))
        })
        .await?;

        info!(paper = %paper, decision = %kind, "decision finalized");
        self.dispatcher.dispatch_all(&events);
        Ok(())
    }
}
