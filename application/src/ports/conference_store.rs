//! Persistence port for conferences and tracks.
//!
//! Read-mostly: conferences are created once and consulted for deadlines
//! and track membership. No optimistic versioning is needed here; edits go
//! through whole-record replacement by chairs/admins.

use crate::ports::paper_store::StoreError;
use async_trait::async_trait;
use confero_domain::{Conference, ConferenceId, Track, TrackId};

#[async_trait]
pub trait ConferenceStore: Send + Sync {
    async fn insert_conference(&self, conference: Conference) -> Result<(), StoreError>;

    /// Replace an existing conference record.
    async fn update_conference(&self, conference: Conference) -> Result<(), StoreError>;

    async fn get_conference(
        &self,
        id: &ConferenceId,
    ) -> Result<Option<Conference>, StoreError>;

    async fn insert_track(&self, track: Track) -> Result<(), StoreError>;

    async fn get_track(&self, id: &TrackId) -> Result<Option<Track>, StoreError>;

    /// All tracks belonging to a conference.
    async fn tracks_of(&self, conference: &ConferenceId) -> Result<Vec<Track>, StoreError>;
}
