//! The downtime activity record.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::outcome::OutcomeRange;

/// Roll expression given to new activities.
pub const DEFAULT_ROLL_EXPRESSION: &str = "1d20";

/// One downtime activity: what the character does, what it costs, and what
/// can come of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityRecord {
    /// Display name.
    pub name: String,
    /// Rich-text description (markup is stored verbatim).
    #[serde(default)]
    pub description: String,
    /// Free-form duration, e.g. "1 week".
    #[serde(default)]
    pub duration: String,
    /// Free-form cost, e.g. "50 gp".
    #[serde(default)]
    pub cost: String,
    /// Whether the activity has been finished. Only ever goes false to true.
    #[serde(default)]
    pub is_complete: bool,
    /// Die expression rolled to pick an outcome, e.g. "1d20".
    #[serde(default)]
    pub roll_expression: String,
    /// Text of the most recently resolved outcome.
    #[serde(default)]
    pub current_outcome: String,
    /// Total of the most recent roll.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_roll: Option<i64>,
    /// Ordered outcome ranges; the first range containing a roll wins.
    #[serde(default)]
    pub outcomes: Vec<OutcomeRange>,
}

impl ActivityRecord {
    /// Create an activity with a d20 roll and the three default ranges
    /// (1-7, 8-15, 16-20) left blank.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            duration: String::new(),
            cost: String::new(),
            is_complete: false,
            roll_expression: DEFAULT_ROLL_EXPRESSION.to_string(),
            current_outcome: String::new(),
            last_roll: None,
            outcomes: default_outcomes(),
        }
    }

    /// Check every range for negative bounds.
    ///
    /// Overlaps, gaps and inverted ranges are allowed; see
    /// [`inverted_ranges`](Self::inverted_ranges) and
    /// [`coverage_gaps`](Self::coverage_gaps) for advisory checks.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (index, range) in self.outcomes.iter().enumerate() {
            range
                .validate()
                .map_err(|source| ValidationError::Outcome {
                    index,
                    source: Box::new(source),
                })?;
        }
        Ok(())
    }

    /// Indices of ranges whose minimum exceeds their maximum.
    pub fn inverted_ranges(&self) -> Vec<usize> {
        self.outcomes
            .iter()
            .enumerate()
            .filter(|(_, r)| r.is_inverted())
            .map(|(i, _)| i)
            .collect()
    }

    /// Roll values in `[low, high]` that no range covers, as inclusive spans.
    pub fn coverage_gaps(&self, low: i64, high: i64) -> Vec<(i64, i64)> {
        if low > high {
            return Vec::new();
        }

        let mut covered: Vec<(i64, i64)> = self
            .outcomes
            .iter()
            .filter(|r| !r.is_inverted())
            .map(|r| (r.min_roll.max(low), r.max_roll.min(high)))
            .filter(|(a, b)| a <= b)
            .collect();
        covered.sort_unstable();

        let mut gaps = Vec::new();
        let mut next = low;
        for (a, b) in covered {
            if a > next {
                gaps.push((next, a - 1));
            }
            if b >= next {
                if b == high {
                    return gaps;
                }
                next = b + 1;
            }
        }
        gaps.push((next, high));
        gaps
    }
}

fn default_outcomes() -> Vec<OutcomeRange> {
    [(1, 7), (8, 15), (16, 20)]
        .into_iter()
        .map(|(min_roll, max_roll)| OutcomeRange {
            min_roll,
            max_roll,
            description: String::new(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range(min: i64, max: i64) -> OutcomeRange {
        OutcomeRange {
            min_roll: min,
            max_roll: max,
            description: String::new(),
        }
    }

    #[test]
    fn new_has_default_ranges() {
        let a = ActivityRecord::new("Carousing");
        assert_eq!(a.name, "Carousing");
        assert!(!a.is_complete);
        assert_eq!(a.roll_expression, "1d20");
        assert!(a.current_outcome.is_empty());
        assert_eq!(a.last_roll, None);
        let bounds: Vec<_> = a.outcomes.iter().map(|r| (r.min_roll, r.max_roll)).collect();
        assert_eq!(bounds, vec![(1, 7), (8, 15), (16, 20)]);
        assert!(a.outcomes.iter().all(|r| r.description.is_empty()));
    }

    #[test]
    fn validate_accepts_defaults_and_inverted() {
        let mut a = ActivityRecord::new("Research");
        assert!(a.validate().is_ok());
        a.outcomes.push(range(12, 3));
        assert!(a.validate().is_ok());
    }

    #[test]
    fn validate_reports_index_of_bad_range() {
        let mut a = ActivityRecord::new("Research");
        a.outcomes[1].min_roll = -4;
        let err = a.validate().unwrap_err();
        assert_eq!(
            err,
            ValidationError::Outcome {
                index: 1,
                source: Box::new(ValidationError::NegativeBound {
                    field: "minRoll",
                    value: -4
                }),
            }
        );
        assert_eq!(err.to_string(), "outcome 1: minRoll must be at least 0, got -4");
    }

    #[test]
    fn inverted_ranges_listed() {
        let mut a = ActivityRecord::new("Crafting");
        a.outcomes.push(range(9, 2));
        assert_eq!(a.inverted_ranges(), vec![3]);
    }

    #[test]
    fn default_ranges_cover_a_d20() {
        let a = ActivityRecord::new("Training");
        assert!(a.coverage_gaps(1, 20).is_empty());
        assert_eq!(a.coverage_gaps(1, 25), vec![(21, 25)]);
        assert_eq!(a.coverage_gaps(-2, 20), vec![(-2, 0)]);
    }

    #[test]
    fn gaps_between_and_around_ranges() {
        let mut a = ActivityRecord::new("Gambling");
        a.outcomes = vec![range(3, 5), range(10, 12), range(4, 6)];
        assert_eq!(a.coverage_gaps(1, 20), vec![(1, 2), (7, 9), (13, 20)]);
    }

    #[test]
    fn no_ranges_means_one_big_gap() {
        let mut a = ActivityRecord::new("Idle");
        a.outcomes.clear();
        assert_eq!(a.coverage_gaps(1, 6), vec![(1, 6)]);
        assert!(a.coverage_gaps(6, 1).is_empty());
    }

    #[test]
    fn serde_matches_item_layout() {
        let a = ActivityRecord::new("Pit Fighting");
        let json = serde_json::to_value(&a).unwrap();
        assert_eq!(json["isComplete"], false);
        assert_eq!(json["rollExpression"], "1d20");
        assert_eq!(json["currentOutcome"], "");
        assert_eq!(json["outcomes"][2]["minRoll"], 16);
        assert!(json.get("lastRoll").is_none());
    }

    #[test]
    fn deserialize_fills_missing_fields() {
        let a: ActivityRecord = serde_json::from_str(r#"{"name":"Bare"}"#).unwrap();
        assert_eq!(a.name, "Bare");
        assert!(a.roll_expression.is_empty());
        assert!(a.outcomes.is_empty());
        assert!(!a.is_complete);
    }
}
