//! In-memory adapters.
//!
//! These implement the application ports for tests and for embedding the
//! engine without an external database. The paper store is the reference
//! implementation of the optimistic-concurrency contract.

pub mod coi_registry;
pub mod conference_store;
pub mod identity;
pub mod paper_store;

pub use coi_registry::InMemoryCoiRegistry;
pub use conference_store::InMemoryConferenceStore;
pub use identity::InMemoryIdentityDirectory;
pub use paper_store::InMemoryPaperStore;
