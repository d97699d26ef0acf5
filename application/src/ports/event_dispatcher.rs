//! Port for dispatching domain events after a transaction commits.
//!
//! Consumers include the e-mail notification dispatcher and audit logs.
//! The `dispatch` method is intentionally synchronous and non-fallible:
//! a slow or failing consumer must never fail or delay the core operation,
//! so implementations hand off (queue, buffered write) and return.

use confero_domain::DomainEvent;

pub trait EventDispatcher: Send + Sync {
    /// Hand one committed event to the outside world.
    fn dispatch(&self, event: &DomainEvent);

    /// Dispatch a batch in order.
    fn dispatch_all(&self, events: &[DomainEvent]) {
        for event in events {
            self.dispatch(event);
        }
    }
}

/// No-op implementation for tests and when notifications are disabled.
pub struct NoEventDispatcher;

impl EventDispatcher for NoEventDispatcher {
    fn dispatch(&self, _event: &DomainEvent) {}
}
