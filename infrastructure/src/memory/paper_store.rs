//! In-memory versioned paper store.
//!
//! One `tokio::sync::RwLock` over the whole map serializes writers, and
//! `save` compares the expected version under that write lock, so the
//! version check is atomic with the write exactly as the port requires.
//! An assignment index keeps `paper_of_assignment` from scanning.

use async_trait::async_trait;
use confero_application::ports::paper_store::{PaperStore, StoreError, Version};
use confero_domain::{AssignmentId, PaperAggregate, PaperId, TrackId};
use std::collections::HashMap;
use tokio::sync::RwLock;

#[derive(Default)]
struct Inner {
    papers: HashMap<PaperId, (PaperAggregate, Version)>,
    assignment_index: HashMap<AssignmentId, PaperId>,
}

impl Inner {
    fn index_assignments(&mut self, aggregate: &PaperAggregate) {
        for assignment in &aggregate.assignments {
            self.assignment_index
                .insert(assignment.id.clone(), aggregate.id().clone());
        }
    }
}

/// In-memory implementation of [`PaperStore`].
#[derive(Default)]
pub struct InMemoryPaperStore {
    inner: RwLock<Inner>,
}

impl InMemoryPaperStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PaperStore for InMemoryPaperStore {
    async fn insert(&self, aggregate: PaperAggregate) -> Result<Version, StoreError> {
        let mut inner = self.inner.write().await;
        let id = aggregate.id().clone();
        if inner.papers.contains_key(&id) {
            return Err(StoreError::Unavailable(format!(
                "paper {id} already exists"
            )));
        }
        let version = Version(1);
        inner.index_assignments(&aggregate);
        inner.papers.insert(id, (aggregate, version));
        Ok(version)
    }

    async fn load(&self, id: &PaperId) -> Result<Option<(PaperAggregate, Version)>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner.papers.get(id).cloned())
    }

    async fn save(
        &self,
        aggregate: PaperAggregate,
        expected: Version,
    ) -> Result<Version, StoreError> {
        let mut inner = self.inner.write().await;
        let id = aggregate.id().clone();
        let current = inner
            .papers
            .get(&id)
            .map(|(_, version)| *version)
            .ok_or_else(|| StoreError::Unavailable(format!("paper {id} was never inserted")))?;
        if current != expected {
            return Err(StoreError::VersionConflict);
        }
        let next = expected.next();
        inner.index_assignments(&aggregate);
        inner.papers.insert(id, (aggregate, next));
        Ok(next)
    }

    async fn paper_of_assignment(
        &self,
        id: &AssignmentId,
    ) -> Result<Option<PaperId>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner.assignment_index.get(id).cloned())
    }

    async fn list_by_track(&self, track: &TrackId) -> Result<Vec<PaperAggregate>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner
            .papers
            .values()
            .filter(|(aggregate, _)| aggregate.paper.track == *track)
            .map(|(aggregate, _)| aggregate.clone())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use confero_domain::{Paper, UserId};

    fn aggregate(id: &str) -> PaperAggregate {
        let now = Utc.with_ymd_and_hms(2026, 3, 1, 0, 0, 0).unwrap();
        PaperAggregate::new(Paper::draft(
            PaperId::new(id),
            TrackId::new("t1"),
            "Title",
            "Abstract",
            UserId::new("alice"),
            "ms-1",
            now,
        ))
    }

    #[tokio::test]
    async fn test_insert_then_load() {
        let store = InMemoryPaperStore::new();
        store.insert(aggregate("p1")).await.unwrap();

        let (loaded, version) = store.load(&PaperId::new("p1")).await.unwrap().unwrap();
        assert_eq!(loaded.id().as_str(), "p1");
        assert_eq!(version, Version(1));
        assert!(store.load(&PaperId::new("p2")).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_double_insert_rejected() {
        let store = InMemoryPaperStore::new();
        store.insert(aggregate("p1")).await.unwrap();
        assert!(store.insert(aggregate("p1")).await.is_err());
    }

    #[tokio::test]
    async fn test_stale_save_conflicts() {
        let store = InMemoryPaperStore::new();
        store.insert(aggregate("p1")).await.unwrap();

        let (snapshot, version) = store.load(&PaperId::new("p1")).await.unwrap().unwrap();
        store.save(snapshot.clone(), version).await.unwrap();

        // Saving again with the stale version must fail
        let err = store.save(snapshot, version).await.unwrap_err();
        assert_eq!(err, StoreError::VersionConflict);
    }

    #[tokio::test]
    async fn test_assignment_index() {
        let store = InMemoryPaperStore::new();
        let mut agg = aggregate("p1");
        let now = Utc.with_ymd_and_hms(2026, 3, 2, 0, 0, 0).unwrap();
        agg.submit(now, now).unwrap();
        let (assignment, _) = agg.assign(UserId::new("r1"), now, now).unwrap();
        store.insert(agg).await.unwrap();

        let paper = store.paper_of_assignment(&assignment).await.unwrap();
        assert_eq!(paper, Some(PaperId::new("p1")));
        assert!(
            store
                .paper_of_assignment(&AssignmentId::new("ghost"))
                .await
                .unwrap()
                .is_none()
        );
    }

    #[tokio::test]
    async fn test_list_by_track() {
        let store = InMemoryPaperStore::new();
        store.insert(aggregate("p1")).await.unwrap();
        store.insert(aggregate("p2")).await.unwrap();

        let papers = store.list_by_track(&TrackId::new("t1")).await.unwrap();
        assert_eq!(papers.len(), 2);
        assert!(
            store
                .list_by_track(&TrackId::new("t2"))
                .await
                .unwrap()
                .is_empty()
        );
    }
}
