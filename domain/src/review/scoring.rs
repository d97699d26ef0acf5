//! Review score aggregation.

use crate::review::entities::Review;
use serde::{Deserialize, Serialize};

/// Aggregate of all completed reviews for one paper (Value Object).
///
/// Pure function of its inputs: recomputing without intervening mutation
/// yields an identical result.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreSummary {
    /// Mean score, rounded to 2 decimals. 0.0 when there are no reviews.
    pub mean_score: f64,
    /// Mean confidence. 0.0 when there are no reviews.
    pub mean_confidence: f64,
    /// Number of completed reviews aggregated.
    pub count: usize,
}

impl ScoreSummary {
    /// Aggregate a set of reviews.
    ///
    /// Scores are summed with integer accumulators and divided as floating
    /// point once at the end, so there is no intermediate rounding drift.
    pub fn from_reviews<'a>(reviews: impl IntoIterator<Item = &'a Review>) -> Self {
        let mut score_sum: i64 = 0;
        let mut confidence_sum: u64 = 0;
        let mut count: usize = 0;

        for review in reviews {
            score_sum += i64::from(review.score);
            confidence_sum += u64::from(review.confidence);
            count += 1;
        }

        if count == 0 {
            return Self {
                mean_score: 0.0,
                mean_confidence: 0.0,
                count: 0,
            };
        }

        let mean_score = (score_sum as f64 / count as f64 * 100.0).round() / 100.0;
        let mean_confidence = confidence_sum as f64 / count as f64;

        Self {
            mean_score,
            mean_confidence,
            count,
        }
    }
}
