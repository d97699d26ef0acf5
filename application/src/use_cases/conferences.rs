//! Conference and track administration.

use crate::error::EngineError;
use crate::ports::clock::Clock;
use crate::ports::conference_store::ConferenceStore;
use crate::ports::identity::IdentityDirectory;
use confero_domain::{
    Conference, ConferenceId, Deadlines, DomainError, Role, SessionSlot, Track, TrackId, UserId,
};
use std::sync::Arc;
use tracing::info;

pub struct ConferenceService {
    conferences: Arc<dyn ConferenceStore>,
    identity: Arc<dyn IdentityDirectory>,
    clock: Arc<dyn Clock>,
}

impl ConferenceService {
    pub fn new(
        conferences: Arc<dyn ConferenceStore>,
        identity: Arc<dyn IdentityDirectory>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            conferences,
            identity,
            clock,
        }
    }

    /// Create a conference. Chairs and admins only.
    pub async fn create(
        &self,
        name: &str,
        blind_review: bool,
        deadlines: Deadlines,
        created_by: &UserId,
    ) -> Result<ConferenceId, EngineError> {
        self.require_chair_or_admin(created_by, "create a conference")
            .await?;
        let conference = Conference::new(name, blind_review, deadlines);
        let id = conference.id.clone();
        self.conferences.insert_conference(conference).await?;
        info!(conference = %id, "conference created");
        Ok(id)
    }

    /// Replace a conference record.
    ///
    /// Once the end date has passed the record is immutable except for
    /// administrative correction, so only admins may edit it then.
    pub async fn update(
        &self,
        conference: Conference,
        updated_by: &UserId,
    ) -> Result<(), EngineError> {
        let role = self
            .require_chair_or_admin(updated_by, "edit a conference")
            .await?;

        let existing = self
            .conferences
            .get_conference(&conference.id)
            .await?
            .ok_or_else(|| EngineError::not_found("conference", &conference.id))?;
        if existing.has_ended(self.clock.now()) && role != Role::Admin {
            return Err(DomainError::NotAuthorized {
                user: updated_by.clone(),
                action: "edit an ended conference",
            }
            .into());
        }

        self.conferences.update_conference(conference).await?;
        Ok(())
    }

    /// Add a track to a conference. Chairs and admins only.
    pub async fn add_track(
        &self,
        conference: &ConferenceId,
        name: &str,
        session: Option<SessionSlot>,
        created_by: &UserId,
    ) -> Result<TrackId, EngineError> {
        self.require_chair_or_admin(created_by, "add a track")
            .await?;
        self.conferences
            .get_conference(conference)
            .await?
            .ok_or_else(|| EngineError::not_found("conference", conference))?;

        let mut track = Track::new(conference.clone(), name);
        if let Some(slot) = session {
            track = track.with_session(slot);
        }
        let id = track.id.clone();
        self.conferences.insert_track(track).await?;
        info!(conference = %conference, track = %id, "track added");
        Ok(id)
    }

    async fn require_chair_or_admin(
        &self,
        user: &UserId,
        action: &'static str,
    ) -> Result<Role, EngineError> {
        let profile = self
            .identity
            .get_user(user)
            .await?
            .ok_or_else(|| EngineError::not_found("user", user))?;
        if !profile.role.is_chair_or_admin() {
            return Err(DomainError::NotAuthorized {
                user: user.clone(),
                action,
            }
            .into());
        }
        Ok(profile.role)
    }
}
