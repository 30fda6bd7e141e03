//! Outcome ranges and the first-match resolver.
//!
//! An activity carries an ordered list of `[min, max]` ranges, each with some
//! narrative text. A roll result is resolved by scanning that list in order and
//! taking the first range that contains it. Ranges may overlap (the earlier one
//! wins) or leave gaps (the roll resolves to [`Resolution::NoMatch`]).

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// A closed roll interval paired with outcome text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutcomeRange {
    /// Lowest roll covered (inclusive).
    pub min_roll: i64,
    /// Highest roll covered (inclusive).
    pub max_roll: i64,
    /// Text shown when a roll lands in this range.
    #[serde(default)]
    pub description: String,
}

impl OutcomeRange {
    /// Create a range, rejecting negative bounds.
    ///
    /// `min_roll > max_roll` is accepted; such a range simply never matches.
    pub fn new(
        min_roll: i64,
        max_roll: i64,
        description: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let range = Self {
            min_roll,
            max_roll,
            description: description.into(),
        };
        range.validate()?;
        Ok(range)
    }

    /// The range appended by "add outcome": 1-20 with empty text.
    pub fn placeholder() -> Self {
        Self {
            min_roll: 1,
            max_roll: 20,
            description: String::new(),
        }
    }

    /// Check the bounds are non-negative.
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_bound("minRoll", self.min_roll)?;
        check_bound("maxRoll", self.max_roll)
    }

    /// Whether `roll` lies within `[min_roll, max_roll]`.
    pub fn contains(&self, roll: i64) -> bool {
        self.min_roll <= roll && roll <= self.max_roll
    }

    /// Whether the bounds are inverted, making the range unreachable.
    pub fn is_inverted(&self) -> bool {
        self.min_roll > self.max_roll
    }
}

pub(crate) fn check_bound(field: &'static str, value: i64) -> Result<(), ValidationError> {
    if value < 0 {
        Err(ValidationError::NegativeBound { field, value })
    } else {
        Ok(())
    }
}

/// The result of resolving a roll against a list of ranges.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// A range contained the roll.
    Matched {
        /// Position of the first matching range.
        index: usize,
        /// That range's text.
        description: String,
    },
    /// No range contained the roll.
    NoMatch,
}

impl Resolution {
    /// The matched text, or `fallback` for [`Resolution::NoMatch`].
    pub fn text_or(self, fallback: impl Into<String>) -> String {
        match self {
            Self::Matched { description, .. } => description,
            Self::NoMatch => fallback.into(),
        }
    }

    /// Index of the matching range, if any.
    pub fn index(&self) -> Option<usize> {
        match self {
            Self::Matched { index, .. } => Some(*index),
            Self::NoMatch => None,
        }
    }
}

/// Resolve `roll` against `outcomes`, first match wins.
///
/// Total and pure: any integer is accepted (zero and negative rolls are not
/// clamped), and an empty list always yields [`Resolution::NoMatch`].
pub fn resolve(roll: i64, outcomes: &[OutcomeRange]) -> Resolution {
    outcomes
        .iter()
        .enumerate()
        .find(|(_, range)| range.contains(roll))
        .map_or(Resolution::NoMatch, |(index, range)| Resolution::Matched {
            index,
            description: range.description.clone(),
        })
}
