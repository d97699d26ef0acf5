//! Submission entities.

use crate::core::ids::{PaperId, TrackId, UserId};
use crate::submission::status::PaperStatus;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A co-author listed on a paper. Co-authors need no account and never
/// mutate the paper's status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoAuthor {
    pub name: String,
    pub email: String,
    pub affiliation: String,
}

impl CoAuthor {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        affiliation: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            affiliation: affiliation.into(),
        }
    }
}

/// A paper tracked through the review lifecycle (Entity).
///
/// The manuscript and camera-ready fields are opaque handles into an
/// external artifact store; the engine never reads file bytes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paper {
    pub id: PaperId,
    pub track: TrackId,
    pub title: String,
    pub abstract_text: String,
    pub keywords: Vec<String>,
    /// Main author; the only author with an account and a write path.
    pub author: UserId,
    pub co_authors: Vec<CoAuthor>,
    pub manuscript_ref: String,
    pub camera_ready_ref: Option<String>,
    pub status: PaperStatus,
    pub submitted_at: Option<DateTime<Utc>>,
    pub updated_at: DateTime<Utc>,
}

impl Paper {
    /// Create a new draft paper.
    pub fn draft(
        id: PaperId,
        track: TrackId,
        title: impl Into<String>,
        abstract_text: impl Into<String>,
        author: UserId,
        manuscript_ref: impl Into<String>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            track,
            title: title.into(),
            abstract_text: abstract_text.into(),
            keywords: Vec::new(),
            author,
            co_authors: Vec::new(),
            manuscript_ref: manuscript_ref.into(),
            camera_ready_ref: None,
            status: PaperStatus::Draft,
            submitted_at: None,
            updated_at: now,
        }
    }

    pub fn with_keywords(mut self, keywords: Vec<String>) -> Self {
        self.keywords = keywords;
        self
    }

    pub fn with_co_authors(mut self, co_authors: Vec<CoAuthor>) -> Self {
        self.co_authors = co_authors;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_draft_starts_in_draft_status() {
        let now = Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap();
        let paper = Paper::draft(
            PaperId::new("p1"),
            TrackId::new("t1"),
            "On Testing",
            "We test things.",
            UserId::new("alice"),
            "ms-0001",
            now,
        );
        assert_eq!(paper.status, PaperStatus::Draft);
        assert!(paper.submitted_at.is_none());
        assert!(paper.camera_ready_ref.is_none());
    }

    #[test]
    fn test_builder_style_extras() {
        let now = Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap();
        let paper = Paper::draft(
            PaperId::new("p1"),
            TrackId::new("t1"),
            "On Testing",
            "We test things.",
            UserId::new("alice"),
            "ms-0001",
            now,
        )
        .with_keywords(vec!["testing".into(), "rust".into()])
        .with_co_authors(vec![CoAuthor::new("Bob", "bob@example.org", "Example U")]);
        assert_eq!(paper.keywords.len(), 2);
        assert_eq!(paper.co_authors[0].name, "Bob");
    }
}
