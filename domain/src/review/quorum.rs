//! Review quorum policy.
//!
//! The condition that moves a paper from `UnderReview` to `Reviewed` is a
//! named, swappable policy rather than a rule buried in a call site, so an
//! "N-of-M reviews" conference is a configuration change.

use serde::{Deserialize, Serialize};

/// Rule deciding when enough reviews are in for a paper.
///
/// `completed` counts COMPLETED assignments, `active` counts all
/// non-DECLINED assignments for the paper.
///
/// # Example
///
/// ```
/// use confero_domain::review::quorum::ReviewQuorum;
///
/// let all = ReviewQuorum::AllAssigned;
/// assert!(all.is_met(3, 3));
/// assert!(!all.is_met(2, 3));
///
/// let three = ReviewQuorum::AtLeast(3);
/// assert!(three.is_met(3, 5));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ReviewQuorum {
    /// Every non-declined assignment has a completed review (default)
    #[default]
    AllAssigned,

    /// At least n completed reviews
    AtLeast(usize),

    /// At least this percentage of non-declined assignments completed (0-100)
    Ratio(u8),
}

impl ReviewQuorum {
    /// Check if the quorum is met.
    ///
    /// A paper with no active assignments never meets quorum.
    pub fn is_met(&self, completed: usize, active: usize) -> bool {
        if active == 0 {
            return false;
        }

        match self {
            ReviewQuorum::AllAssigned => completed == active,
            ReviewQuorum::AtLeast(n) => completed >= *n,
            ReviewQuorum::Ratio(p) => {
                let required = (active as f64 * (*p as f64 / 100.0)).ceil() as usize;
                completed >= required
            }
        }
    }

    /// Human-readable description of this rule.
    pub fn description(&self) -> String {
        match self {
            ReviewQuorum::AllAssigned => "all assigned reviews completed".to_string(),
            ReviewQuorum::AtLeast(n) => format!("at least {} completed reviews", n),
            ReviewQuorum::Ratio(p) => format!("at least {}% of assigned reviews completed", p),
        }
    }
}

impl std::fmt::Display for ReviewQuorum {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description())
    }
}

impl std::str::FromStr for ReviewQuorum {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" | "all_assigned" => Ok(ReviewQuorum::AllAssigned),
            s if s.starts_with("atleast:") || s.starts_with("at_least:") => {
                let n: usize = s
                    .split(':')
                    .nth(1)
                    .ok_or("Missing number after atleast:")?
                    .parse()
                    .map_err(|_| "Invalid number for atleast")?;
                Ok(ReviewQuorum::AtLeast(n))
            }
            s if s.starts_with("ratio:") || s.ends_with('%') => {
                let num_str = s.trim_start_matches("ratio:").trim_end_matches('%');
                let p: u8 = num_str.parse().map_err(|_| "Invalid percentage")?;
                Ok(ReviewQuorum::Ratio(p))
            }
            _ => Err(format!(
                "Unknown quorum rule: {}. Valid: all, atleast:N, ratio:N or N%",
                s
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_assigned_rule() {
        let rule = ReviewQuorum::AllAssigned;

        assert!(!rule.is_met(2, 3));
        assert!(rule.is_met(3, 3));
        assert!(rule.is_met(1, 1));
    }

    #[test]
    fn test_at_least_rule() {
        let rule = ReviewQuorum::AtLeast(2);

        assert!(!rule.is_met(1, 5));
        assert!(rule.is_met(2, 5));
        assert!(rule.is_met(5, 5));
    }

    #[test]
    fn test_ratio_rule() {
        let rule = ReviewQuorum::Ratio(75);

        // 4 active: need 75% = 3
        assert!(!rule.is_met(2, 4));
        assert!(rule.is_met(3, 4));

        // 5 active: need ceil(3.75) = 4
        assert!(!rule.is_met(3, 5));
        assert!(rule.is_met(4, 5));
    }

    #[test]
    fn test_zero_active_never_met() {
        assert!(!ReviewQuorum::AllAssigned.is_met(0, 0));
        assert!(!ReviewQuorum::AtLeast(0).is_met(0, 0));
        assert!(!ReviewQuorum::Ratio(50).is_met(0, 0));
    }

    #[test]
    fn test_parse_rule() {
        assert_eq!(
            "all".parse::<ReviewQuorum>().ok(),
            Some(ReviewQuorum::AllAssigned)
        );
        assert_eq!(
            "atleast:2".parse::<ReviewQuorum>().ok(),
            Some(ReviewQuorum::AtLeast(2))
        );
        assert_eq!(
            "at_least:3".parse::<ReviewQuorum>().ok(),
            Some(ReviewQuorum::AtLeast(3))
        );
        assert_eq!(
            "ratio:75".parse::<ReviewQuorum>().ok(),
            Some(ReviewQuorum::Ratio(75))
        );
        assert_eq!(
            "80%".parse::<ReviewQuorum>().ok(),
            Some(ReviewQuorum::Ratio(80))
        );
        assert!("sometimes".parse::<ReviewQuorum>().is_err());
    }

    #[test]
    fn test_default_is_all_assigned() {
        assert_eq!(ReviewQuorum::default(), ReviewQuorum::AllAssigned);
    }
}
