//! Submission lifecycle use cases: draft creation, finalization,
//! withdrawal, camera-ready upload.

use crate::error::EngineError;
use crate::ports::clock::Clock;
use crate::ports::conference_store::ConferenceStore;
use crate::ports::event_dispatcher::EventDispatcher;
use crate::ports::paper_store::PaperStore;
use crate::use_cases::shared::mutate_paper;
use confero_domain::{
    CoAuthor, Conference, Paper, PaperAggregate, PaperId, TrackId, UserId,
};
use std::sync::Arc;
use tracing::info;

/// Input for creating a draft paper.
#[derive(Debug, Clone)]
pub struct NewSubmission {
    pub track: TrackId,
    pub title: String,
    pub abstract_text: String,
    pub keywords: Vec<String>,
    pub author: UserId,
    pub co_authors: Vec<CoAuthor>,
    /// Opaque handle into the manuscript store.
    pub manuscript_ref: String,
}

/// Use cases owned by the paper's author.
pub struct SubmissionService<S: PaperStore> {
    store: Arc<S>,
    conferences: Arc<dyn ConferenceStore>,
    clock: Arc<dyn Clock>,
    dispatcher: Arc<dyn EventDispatcher>,
}

impl<S: PaperStore> SubmissionService<S> {
    pub fn new(
        store: Arc<S>,
        conferences: Arc<dyn ConferenceStore>,
        clock: Arc<dyn Clock>,
        dispatcher: Arc<dyn EventDispatcher>,
    ) -> Self {
        Self {
            store,
            conferences,
            clock,
            dispatcher,
        }
    }

    /// Create a draft paper on an existing track.
    pub async fn create_draft(&self, input: NewSubmission) -> Result<PaperId, EngineError> {
        // The track must exist; deadlines are only checked at submit time.
        self.conferences
            .get_track(&input.track)
            .await?
            .ok_or_else(|| EngineError::not_found("track", &input.track))?;

        let paper = Paper::draft(
            PaperId::generate(),
            input.track,
            input.title,
            input.abstract_text,
            input.author,
            input.manuscript_ref,
            self.clock.now(),
        )
        .with_keywords(input.keywords)
        .with_co_authors(input.co_authors);
        let id = paper.id.clone();

        self.store.insert(PaperAggregate::new(paper)).await?;
        info!(paper = %id, "draft created");
        Ok(id)
    }

    /// Author finalizes the draft before the submission deadline.
    pub async fn submit(&self, paper: &PaperId) -> Result<(), EngineError> {
        let conference = self.conference_of(paper).await?;
        let deadline = conference.deadlines.submission;
        let now = self.clock.now();

        let (_, events) = mutate_paper(self.store.as_ref(), paper, |aggregate| {
            aggregate.submit(deadline, now).map(|events| ((), events))
        })
        .await?;

        info!(paper = %paper, "paper submitted");
        self.dispatcher.dispatch_all(&events);
        Ok(())
    }

    /// Author withdraws the paper.
    pub async fn withdraw(&self, paper: &PaperId) -> Result<(), EngineError> {
        let now = self.clock.now();
        let (_, events) = mutate_paper(self.store.as_ref(), paper, |aggregate| {
            aggregate.withdraw(now).map(|events| ((), events))
        })
        .await?;

        info!(paper = %paper, "paper withdrawn");
        self.dispatcher.dispatch_all(&events);
        Ok(())
    }

    /// Attach the camera-ready artifact handle to an accepted paper.
    pub async fn attach_camera_ready(
        &self,
        paper: &PaperId,
        reference: &str,
    ) -> Result<(), EngineError> {
        let now = self.clock.now();
        let reference = reference.to_string();
        let (_, events) = mutate_paper(self.store.as_ref(), paper, |aggregate| {
            aggregate
                .attach_camera_ready(reference.clone(), now)
                .map(|events| ((), events))
        })
        .await?;

        info!(paper = %paper, "camera-ready attached");
        self.dispatcher.dispatch_all(&events);
        Ok(())
    }

    /// Read a snapshot of the paper and everything it owns.
    pub async fn get(&self, paper: &PaperId) -> Result<PaperAggregate, EngineError> {
        let (aggregate, _) = self
            .store
            .load(paper)
            .await?
            .ok_or_else(|| EngineError::not_found("paper", paper))?;
        Ok(aggregate)
    }

    async fn conference_of(&self, paper: &PaperId) -> Result<Conference, EngineError> {
        let aggregate = self.get(paper).await?;
        let track = self
            .conferences
            .get_track(&aggregate.paper.track)
            .await?
            .ok_or_else(|| EngineError::not_found("track", &aggregate.paper.track))?;
        self.conferences
            .get_conference(&track.conference)
            .await?
            .ok_or_else(|| EngineError::not_found("conference", &track.conference))
    }
}
