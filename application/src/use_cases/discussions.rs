//! Discussion threads on a paper.
//!
//! Posting validates content and thread depth; the visibility policy is a
//! read helper for the caller's authorization layer, `post` itself does
//! not authorize (per the blind-discussion design, enforcement sits where
//! the user's role is known).

use crate::config::EngineConfig;
use crate::error::EngineError;
use crate::ports::clock::Clock;
use crate::ports::event_dispatcher::EventDispatcher;
use crate::ports::identity::IdentityDirectory;
use crate::ports::paper_store::PaperStore;
use crate::use_cases::shared::mutate_paper;
use confero_domain::{CommentId, DiscussionThread, PaperId, UserId, can_participate};
use std::sync::Arc;
use tracing::info;

pub struct DiscussionService<S: PaperStore> {
    store: Arc<S>,
    identity: Arc<dyn IdentityDirectory>,
    clock: Arc<dyn Clock>,
    dispatcher: Arc<dyn EventDispatcher>,
    config: EngineConfig,
}

impl<S: PaperStore> DiscussionService<S> {
    pub fn new(
        store: Arc<S>,
        identity: Arc<dyn IdentityDirectory>,
        clock: Arc<dyn Clock>,
        dispatcher: Arc<dyn EventDispatcher>,
        config: EngineConfig,
    ) -> Self {
        Self {
            store,
            identity,
            clock,
            dispatcher,
            config,
        }
    }

    /// Post a comment or a reply (depth capped at two levels).
    pub async fn post(
        &self,
        paper: &PaperId,
        author: &UserId,
        content: &str,
        parent: Option<CommentId>,
    ) -> Result<CommentId, EngineError> {
        let now = self.clock.now();
        let max_chars = self.config.comment_max_chars;
        let author = author.clone();
        let content = content.to_string();

        let (id, events) = mutate_paper(self.store.as_ref(), paper, |aggregate| {
            aggregate.post_comment(author.clone(), &content, parent.clone(), max_chars, now)
        })
        .await?;

        info!(paper = %paper, comment = %id, "comment posted");
        self.dispatcher.dispatch_all(&events);
        Ok(id)
    }

    /// Mark a comment removed. Replies stay visible.
    pub async fn remove(&self, paper: &PaperId, comment: &CommentId) -> Result<(), EngineError> {
        let (_, events) = mutate_paper(self.store.as_ref(), paper, |aggregate| {
            aggregate.remove_comment(comment).map(|events| ((), events))
        })
        .await?;

        self.dispatcher.dispatch_all(&events);
        Ok(())
    }

    /// Two-level thread view of a paper's discussion.
    pub async fn threads(&self, paper: &PaperId) -> Result<Vec<DiscussionThread>, EngineError> {
        let (aggregate, _) = self
            .store
            .load(paper)
            .await?
            .ok_or_else(|| EngineError::not_found("paper", paper))?;
        Ok(aggregate.threads())
    }

    /// Visibility helper for the caller's authorization layer: reviewers
    /// with an accepted or completed assignment and chairs/admins may
    /// participate; authors never do.
    pub async fn may_participate(
        &self,
        paper: &PaperId,
        user: &UserId,
    ) -> Result<bool, EngineError> {
        let profile = self
            .identity
            .get_user(user)
            .await?
            .ok_or_else(|| EngineError::not_found("user", user))?;
        let (aggregate, _) = self
            .store
            .load(paper)
            .await?
            .ok_or_else(|| EngineError::not_found("paper", paper))?;
        Ok(can_participate(user, profile.role, &aggregate.assignments))
    }
}
