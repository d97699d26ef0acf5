//! In-memory conference/track store.

use async_trait::async_trait;
use confero_application::ports::conference_store::ConferenceStore;
use confero_application::ports::paper_store::StoreError;
use confero_domain::{Conference, ConferenceId, Track, TrackId};
use std::collections::HashMap;
use tokio::sync::RwLock;

#[derive(Default)]
struct Inner {
    conferences: HashMap<ConferenceId, Conference>,
    tracks: HashMap<TrackId, Track>,
}

/// In-memory implementation of [`ConferenceStore`].
#[derive(Default)]
pub struct InMemoryConferenceStore {
    inner: RwLock<Inner>,
}

impl InMemoryConferenceStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ConferenceStore for InMemoryConferenceStore {
    async fn insert_conference(&self, conference: Conference) -> Result<(), StoreError> {
        let mut inner = self.inner.write().await;
        inner.conferences.insert(conference.id.clone(), conference);
        Ok(())
    }

    async fn update_conference(&self, conference: Conference) -> Result<(), StoreError> {
        let mut inner = self.inner.write().await;
        if !inner.conferences.contains_key(&conference.id) {
            return Err(StoreError::Unavailable(format!(
                "conference {} was never inserted",
                conference.id
            )));
        }
        inner.conferences.insert(conference.id.clone(), conference);
        Ok(())
    }

    async fn get_conference(
        &self,
        id: &ConferenceId,
    ) -> Result<Option<Conference>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner.conferences.get(id).cloned())
    }

    async fn insert_track(&self, track: Track) -> Result<(), StoreError> {
        let mut inner = self.inner.write().await;
        inner.tracks.insert(track.id.clone(), track);
        Ok(())
    }

    async fn get_track(&self, id: &TrackId) -> Result<Option<Track>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner.tracks.get(id).cloned())
    }

    async fn tracks_of(&self, conference: &ConferenceId) -> Result<Vec<Track>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner
            .tracks
            .values()
            .filter(|track| track.conference == *conference)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use confero_domain::Deadlines;

    fn conference() -> Conference {
        let t = |d| Utc.with_ymd_and_hms(2026, d, 1, 0, 0, 0).unwrap();
        Conference::new(
            "RustConf",
            true,
            Deadlines {
                submission: t(3),
                review: t(5),
                camera_ready: t(6),
                end: t(9),
            },
        )
    }

    #[tokio::test]
    async fn test_conference_and_tracks_roundtrip() {
        let store = InMemoryConferenceStore::new();
        let conf = conference();
        let id = conf.id.clone();
        store.insert_conference(conf).await.unwrap();

        let systems = Track::new(id.clone(), "Systems");
        let theory = Track::new(id.clone(), "Theory");
        let systems_id = systems.id.clone();
        store.insert_track(systems).await.unwrap();
        store.insert_track(theory).await.unwrap();

        assert!(store.get_conference(&id).await.unwrap().is_some());
        assert!(store.get_track(&systems_id).await.unwrap().is_some());
        assert_eq!(store.tracks_of(&id).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_update_requires_existing() {
        let store = InMemoryConferenceStore::new();
        let err = store.update_conference(conference()).await.unwrap_err();
        assert!(matches!(err, StoreError::Unavailable(_)));
    }
}
