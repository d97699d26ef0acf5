//! Progress reporting read model.
//!
//! Pure functions over a snapshot of paper aggregates. Nothing here
//! mutates state or caches results; callers recompute on demand.

use crate::assignment::AssignmentStatus;
use crate::submission::aggregate::PaperAggregate;
use crate::submission::status::PaperStatus;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Completion and acceptance statistics for a set of papers
/// (a track or a whole conference).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressReport {
    /// Total papers in the set.
    pub papers: usize,
    /// Papers per lifecycle status.
    pub by_status: BTreeMap<PaperStatus, usize>,
    /// Completed assignments over all non-declined assignments.
    /// 0.0 when there are no assignments, never NaN.
    pub completion_rate: f64,
    /// Accepted papers over all decided papers (accepted + rejected,
    /// including camera-ready). 0.0 when nothing is decided.
    pub acceptance_rate: f64,
}

impl ProgressReport {
    /// Compute the report for a snapshot of papers.
    pub fn compute(papers: &[PaperAggregate]) -> Self {
        let mut by_status: BTreeMap<PaperStatus, usize> = BTreeMap::new();
        let mut total_assignments = 0usize;
        let mut completed_assignments = 0usize;
        let mut accepted = 0usize;
        let mut decided = 0usize;

        for aggregate in papers {
            *by_status.entry(aggregate.status()).or_insert(0) += 1;

            for assignment in &aggregate.assignments {
                if assignment.status.is_active() {
                    total_assignments += 1;
                }
                if assignment.status == AssignmentStatus::Completed {
                    completed_assignments += 1;
                }
            }

            match aggregate.status() {
                PaperStatus::Accepted | PaperStatus::CameraReady => {
                    accepted += 1;
                    decided += 1;
                }
                PaperStatus::Rejected => decided += 1,
                _ => {}
            }
        }

        let completion_rate = if total_assignments == 0 {
            0.0
        } else {
            completed_assignments as f64 / total_assignments as f64
        };
        let acceptance_rate = if decided == 0 {
            0.0
        } else {
            accepted as f64 / decided as f64
        };

        Self {
            papers: papers.len(),
            by_status,
            completion_rate,
            acceptance_rate,
        }
    }

    /// Papers in a given status.
    pub fn count(&self, status: PaperStatus) -> usize {
        self.by_status.get(&status).copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ids::{PaperId, TrackId, UserId};
    use crate::decision::DecisionKind;
    use crate::review::entities::ReviewDraft;
    use crate::review::quorum::ReviewQuorum;
    use crate::submission::entities::Paper;
    use chrono::{DateTime, TimeZone, Utc};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 4, 1, 0, 0, 0).unwrap()
    }

    fn paper(n: usize) -> PaperAggregate {
        PaperAggregate::new(Paper::draft(
            PaperId::new(format!("p{n}")),
            TrackId::new("t1"),
            format!("Paper {n}"),
            "Abstract",
            UserId::new("author"),
            format!("ms-{n}"),
            now(),
        ))
    }

    fn reviewed_paper(n: usize, decision: Option<DecisionKind>) -> PaperAggregate {
        let mut aggregate = paper(n);
        aggregate.submit(now(), now()).unwrap();
        let (a, _) = aggregate
            .assign(UserId::new(format!("r{n}")), now(), now())
            .unwrap();
        aggregate.accept_assignment(&a, now()).unwrap();
        aggregate
            .submit_review(&a, ReviewDraft::new(1, 3, "", ""), ReviewQuorum::AllAssigned, now())
            .unwrap();
        if let Some(kind) = decision {
            aggregate
                .finalize(kind, "", UserId::new("chair"), false, now())
                .unwrap();
        }
        aggregate
    }

    #[test]
    fn test_empty_set_yields_zero_rates() {
        let report = ProgressReport::compute(&[]);
        assert_eq!(report.papers, 0);
        assert_eq!(report.completion_rate, 0.0);
        assert_eq!(report.acceptance_rate, 0.0);
    }

    #[test]
    fn test_counts_and_rates() {
        let papers = vec![
            paper(1),                                            // Draft, no assignments
            reviewed_paper(2, Some(DecisionKind::Accept)),       // Accepted
            reviewed_paper(3, Some(DecisionKind::Reject)),       // Rejected
            reviewed_paper(4, None),                             // Reviewed
        ];
        let report = ProgressReport::compute(&papers);

        assert_eq!(report.papers, 4);
        assert_eq!(report.count(PaperStatus::Draft), 1);
        assert_eq!(report.count(PaperStatus::Accepted), 1);
        assert_eq!(report.count(PaperStatus::Rejected), 1);
        assert_eq!(report.count(PaperStatus::Reviewed), 1);
        // 3 assignments, all completed
        assert_eq!(report.completion_rate, 1.0);
        // 1 accepted out of 2 decided
        assert_eq!(report.acceptance_rate, 0.5);
    }

    #[test]
    fn test_pending_assignments_lower_completion() {
        let mut aggregate = paper(1);
        aggregate.submit(now(), now()).unwrap();
        let (a1, _) = aggregate.assign(UserId::new("r1"), now(), now()).unwrap();
        aggregate.assign(UserId::new("r2"), now(), now()).unwrap();
        aggregate.accept_assignment(&a1, now()).unwrap();
        aggregate
            .submit_review(&a1, ReviewDraft::new(0, 3, "", ""), ReviewQuorum::AtLeast(1), now())
            .unwrap();

        let report = ProgressReport::compute(&[aggregate]);
        assert_eq!(report.completion_rate, 0.5);
    }

    #[test]
    fn test_recompute_is_deterministic() {
        let papers = vec![reviewed_paper(1, Some(DecisionKind::Accept))];
        assert_eq!(
            ProgressReport::compute(&papers),
            ProgressReport::compute(&papers)
        );
    }
}
