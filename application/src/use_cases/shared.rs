//! Shared mutation loop for paper aggregates.

use crate::error::EngineError;
use crate::ports::paper_store::{PaperStore, StoreError};
use confero_domain::{DomainError, DomainEvent, PaperAggregate, PaperId};

/// Attempts before a persistent version conflict is reported as transient.
pub(crate) const MAX_SAVE_ATTEMPTS: usize = 4;

/// Load-mutate-save with optimistic retry.
///
/// The closure must be a pure function of the aggregate: it is re-run from
/// fresh state after a version conflict, so the loser of a race re-validates
/// and observes the proper domain error (e.g. `DuplicateReview`). Domain
/// errors abort immediately and are never retried.
pub(crate) async fn mutate_paper<S, T, F>(
    store: &S,
    paper: &PaperId,
    mut apply: F,
) -> Result<(T, Vec<DomainEvent>), EngineError>
where
    S: PaperStore + ?Sized,
    F: FnMut(&mut PaperAggregate) -> Result<(T, Vec<DomainEvent>), DomainError>,
{
    for _ in 0..MAX_SAVE_ATTEMPTS {
        let (mut aggregate, version) = store
            .load(paper)
            .await?
            .ok_or_else(|| EngineError::not_found("paper", paper))?;

        let (value, events) = apply(&mut aggregate)?;

        match store.save(aggregate, version).await {
            Ok(_) => return Ok((value, events)),
            Err(StoreError::VersionConflict) => continue,
            Err(err) => return Err(err.into()),
        }
    }

    Err(EngineError::Transient(format!(
        "gave up on paper {paper} after {MAX_SAVE_ATTEMPTS} version conflicts"
    )))
}
