//! Typed identifiers for domain entities.
//!
//! Every entity gets its own string newtype so a reviewer id can never be
//! passed where a paper id is expected. Ids are opaque; `generate()` makes
//! a fresh UUID-like value without an external dependency.

use serde::{Deserialize, Serialize};

macro_rules! entity_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub struct $name(String);

        impl $name {
            /// Creates an id from an existing string.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Generates a new unique id.
            pub fn generate() -> Self {
                Self(uuid_v4())
            }

            /// Returns the id as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

entity_id!(
    /// Unique identifier for a conference.
    ConferenceId
);
entity_id!(
    /// Unique identifier for a track within a conference.
    TrackId
);
entity_id!(
    /// Unique identifier for a paper (submission).
    PaperId
);
entity_id!(
    /// Unique identifier for a user (author, reviewer, chair, admin).
    UserId
);
entity_id!(
    /// Unique identifier for a reviewer assignment.
    AssignmentId
);
entity_id!(
    /// Unique identifier for a review.
    ReviewId
);
entity_id!(
    /// Unique identifier for a chair decision.
    DecisionId
);
entity_id!(
    /// Unique identifier for a conflict-of-interest record.
    CoiId
);
entity_id!(
    /// Unique identifier for a discussion comment.
    CommentId
);

/// Generate a simple UUID v4 (without external dependency)
fn uuid_v4() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};

    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();

    // Simple pseudo-random based on time
    let nanos = now.as_nanos();
    format!(
        "{:08x}-{:04x}-4{:03x}-{:04x}-{:012x}",
        (nanos >> 96) as u32,
        (nanos >> 80) as u16,
        (nanos >> 64) as u16 & 0x0fff,
        ((nanos >> 48) as u16 & 0x3fff) | 0x8000,
        (nanos & 0xffffffffffff) as u64
    )
}
