//! Application layer for confero
//!
//! This crate contains the use cases of the review engine and the port
//! definitions its adapters implement. It depends only on the domain layer.
//!
//! Every public operation is a short-lived transaction: load the paper
//! aggregate, apply one domain mutation, save under an optimistic version
//! check, then dispatch the resulting domain events. Version conflicts are
//! retried inside the use case; a retried loser of a race re-validates
//! against fresh state and observes the proper domain error.

pub mod config;
pub mod error;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::EngineConfig;
pub use error::EngineError;
pub use ports::{
    clock::{Clock, SystemClock},
    coi_registry::CoiRegistry,
    conference_store::ConferenceStore,
    event_dispatcher::{EventDispatcher, NoEventDispatcher},
    identity::IdentityDirectory,
    paper_store::{PaperStore, StoreError, Version},
};
pub use use_cases::{
    assignments::AssignmentCoordinator,
    coi::CoiService,
    conferences::ConferenceService,
    decisions::DecisionService,
    discussions::DiscussionService,
    progress::ProgressService,
    reviews::ReviewService,
    submissions::{NewSubmission, SubmissionService},
};
