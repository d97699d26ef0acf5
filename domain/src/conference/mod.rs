//! Conferences and tracks.

use crate::core::ids::{ConferenceId, TrackId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The four deadlines that pace a conference (Value Object).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deadlines {
    pub submission: DateTime<Utc>,
    pub review: DateTime<Utc>,
    pub camera_ready: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

/// A conference owning tracks and, through them, papers (Entity).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Conference {
    pub id: ConferenceId,
    pub name: String,
    /// When set, reviewer identities are hidden from authors and
    /// discussion threads are closed to authors.
    pub blind_review: bool,
    pub deadlines: Deadlines,
}

impl Conference {
    pub fn new(name: impl Into<String>, blind_review: bool, deadlines: Deadlines) -> Self {
        Self {
            id: ConferenceId::generate(),
            name: name.into(),
            blind_review,
            deadlines,
        }
    }

    /// Past its end date a conference is immutable except for
    /// administrative correction.
    pub fn has_ended(&self, now: DateTime<Utc>) -> bool {
        now > self.deadlines.end
    }
}

/// Optional session metadata for a track.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSlot {
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
    pub room: String,
}

/// A topical subdivision of a conference (Entity).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Track {
    pub id: TrackId,
    pub conference: ConferenceId,
    pub name: String,
    pub session: Option<SessionSlot>,
}

impl Track {
    pub fn new(conference: ConferenceId, name: impl Into<String>) -> Self {
        Self {
            id: TrackId::generate(),
            conference,
            name: name.into(),
            session: None,
        }
    }

    pub fn with_session(mut self, session: SessionSlot) -> Self {
        self.session = Some(session);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn deadlines() -> Deadlines {
        Deadlines {
            submission: Utc.with_ymd_and_hms(2026, 3, 15, 23, 59, 59).unwrap(),
            review: Utc.with_ymd_and_hms(2026, 5, 15, 23, 59, 59).unwrap(),
            camera_ready: Utc.with_ymd_and_hms(2026, 6, 15, 23, 59, 59).unwrap(),
            end: Utc.with_ymd_and_hms(2026, 9, 1, 0, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_has_ended() {
        let conference = Conference::new("RustConf", true, deadlines());
        let before = Utc.with_ymd_and_hms(2026, 8, 31, 0, 0, 0).unwrap();
        let after = Utc.with_ymd_and_hms(2026, 9, 2, 0, 0, 0).unwrap();
        assert!(!conference.has_ended(before));
        assert!(conference.has_ended(after));
    }

    #[test]
    fn test_track_belongs_to_conference() {
        let conference = Conference::new("RustConf", false, deadlines());
        let track = Track::new(conference.id.clone(), "Systems");
        assert_eq!(track.conference, conference.id);
        assert!(track.session.is_none());
    }
}
