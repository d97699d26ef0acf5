//! Progress and track statistics.
//!
//! Pure read model over paper snapshots: it takes no part in the write
//! path's mutual exclusion and is recomputed on demand.

use crate::error::EngineError;
use crate::ports::conference_store::ConferenceStore;
use crate::ports::paper_store::PaperStore;
use confero_domain::{ConferenceId, ProgressReport, TrackId};
use std::sync::Arc;

pub struct ProgressService<S: PaperStore> {
    store: Arc<S>,
    conferences: Arc<dyn ConferenceStore>,
}

impl<S: PaperStore> ProgressService<S> {
    pub fn new(store: Arc<S>, conferences: Arc<dyn ConferenceStore>) -> Self {
        Self { store, conferences }
    }

    /// Statistics for one track.
    pub async fn track_progress(&self, track: &TrackId) -> Result<ProgressReport, EngineError> {
        self.conferences
            .get_track(track)
            .await?
            .ok_or_else(|| EngineError::not_found("track", track))?;
        let papers = self.store.list_by_track(track).await?;
        Ok(ProgressReport::compute(&papers))
    }

    /// Statistics across every track of a conference.
    pub async fn conference_progress(
        &self,
        conference: &ConferenceId,
    ) -> Result<ProgressReport, EngineError> {
        let tracks = self.conferences.tracks_of(conference).await?;
        let mut papers = Vec::new();
        for track in &tracks {
            papers.extend(self.store.list_by_track(&track.id).await?);
        }
        Ok(ProgressReport::compute(&papers))
    }
}
