//! Reviews: scoring entities, the quorum policy, and aggregation math.

pub mod entities;
pub mod quorum;
pub mod scoring;

pub use entities::{Review, ReviewDraft};
pub use quorum::ReviewQuorum;
pub use scoring::ScoreSummary;
