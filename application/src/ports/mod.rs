//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement:
//! persistence, the COI registry, the identity provider, the event
//! dispatcher, and the clock.

pub mod clock;
pub mod coi_registry;
pub mod conference_store;
pub mod event_dispatcher;
pub mod identity;
pub mod paper_store;
