//! Application-level error type.
//!
//! Domain errors are caller-visible business-rule violations and must never
//! be retried; transient storage faults are retryable by the caller where
//! the operation is idempotent. The two categories stay distinct here.

use crate::ports::paper_store::StoreError;
use confero_domain::DomainError;
use thiserror::Error;

/// Error returned by every use case.
#[derive(Error, Debug)]
pub enum EngineError {
    /// A business rule rejected the operation. Not retryable.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// The storage layer failed transiently. The caller may retry the
    /// whole operation if it is idempotent; non-idempotent operations
    /// require checking whether the prior attempt committed.
    #[error("transient storage failure: {0}")]
    Transient(String),
}

impl EngineError {
    pub fn is_transient(&self) -> bool {
        matches!(self, EngineError::Transient(_))
    }

    /// Convenience constructor mirroring [`DomainError::not_found`].
    pub fn not_found(entity: &'static str, id: impl std::fmt::Display) -> Self {
        EngineError::Domain(DomainError::not_found(entity, id))
    }
}

impl From<StoreError> for EngineError {
    fn from(err: StoreError) -> Self {
        match err {
            // A conflict that escapes the retry loop is reported as
            // transient: the caller's view was stale, nothing committed.
            StoreError::VersionConflict => {
                EngineError::Transient("optimistic version conflict".to_string())
            }
            StoreError::Unavailable(msg) => EngineError::Transient(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_errors_are_not_transient() {
        let err = EngineError::from(DomainError::ContentEmpty);
        assert!(!err.is_transient());
    }

    #[test]
    fn test_store_errors_are_transient() {
        assert!(EngineError::from(StoreError::VersionConflict).is_transient());
        assert!(EngineError::from(StoreError::Unavailable("db down".into())).is_transient());
    }
}
