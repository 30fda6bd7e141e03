//! Parsing and rolling `XdY+Z` formulas.

use std::fmt;

use rand::Rng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use super::DiceParseError;
use super::roll::DiceRoll;

/// Upper bound on dice in one formula.
pub const MAX_DICE: u32 = 1000;

/// A parsed dice formula like "2d6+3".
///
/// A formula with `count == 0` is a constant: it always totals `modifier`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiceFormula {
    /// Number of dice (X in XdY).
    pub count: u32,
    /// Sides per die (Y in XdY).
    pub sides: u32,
    /// Added after summing the dice.
    pub modifier: i64,
}

impl DiceFormula {
    /// Build a formula, checking the dice count, die size and that both
    /// extreme totals fit in an `i64`.
    pub fn new(count: u32, sides: u32, modifier: i64) -> Result<Self, DiceParseError> {
        if count == 0 || count > MAX_DICE {
            return Err(DiceParseError::InvalidDiceCount);
        }
        if sides < 2 {
            return Err(DiceParseError::InvalidDieSize);
        }
        let low = i64::from(count).checked_add(modifier);
        let high = i64::from(count)
            .checked_mul(i64::from(sides))
            .and_then(|dice| dice.checked_add(modifier));
        if low.is_none() || high.is_none() {
            return Err(DiceParseError::ModifierOutOfRange(modifier));
        }
        Ok(Self {
            count,
            sides,
            modifier,
        })
    }

    /// A formula that always rolls `value`.
    pub fn constant(value: i64) -> Self {
        Self {
            count: 0,
            sides: 0,
            modifier: value,
        }
    }

    /// Parse "XdY", "dY", "XdY+Z", "XdY-Z" or a bare integer.
    ///
    /// Case and surrounding whitespace are ignored, as is whitespace around
    /// the modifier sign ("1d20 + 2").
    pub fn parse(input: &str) -> Result<Self, DiceParseError> {
        let compact: String = input
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_lowercase();
        if compact.is_empty() {
            return Err(DiceParseError::Empty);
        }

        let Some(d_pos) = compact.find('d') else {
            return compact
                .parse::<i64>()
                .map(Self::constant)
                .map_err(|_| DiceParseError::InvalidFormat(format!("'{}'", input.trim())));
        };

        let count_str = &compact[..d_pos];
        let count: u32 = if count_str.is_empty() {
            1
        } else {
            count_str.parse().map_err(|_| {
                DiceParseError::InvalidFormat(format!("invalid dice count '{count_str}'"))
            })?
        };

        let after_d = &compact[d_pos + 1..];
        let (sides_str, modifier) = match after_d.find(['+', '-']) {
            None if after_d.is_empty() => {
                return Err(DiceParseError::InvalidFormat(format!(
                    "missing die size in '{}'",
                    input.trim()
                )));
            }
            Some(pos) => {
                let (sides, rest) = after_d.split_at(pos);
                let modifier: i64 = rest.parse().map_err(|_| {
                    DiceParseError::InvalidFormat(format!("invalid modifier '{rest}'"))
                })?;
                (sides, modifier)
            }
            None => (after_d, 0),
        };

        let sides: u32 = sides_str.parse().map_err(|_| {
            DiceParseError::InvalidFormat(format!("invalid die size '{sides_str}'"))
        })?;

        Self::new(count, sides, modifier)
    }

    /// Whether this formula rolls no dice.
    pub fn is_constant(&self) -> bool {
        self.count == 0
    }

    /// Lowest possible total.
    pub fn min_roll(&self) -> i64 {
        i64::from(self.count).saturating_add(self.modifier)
    }

    /// Highest possible total.
    pub fn max_roll(&self) -> i64 {
        i64::from(self.count)
            .saturating_mul(i64::from(self.sides))
            .saturating_add(self.modifier)
    }

    /// Roll the dice.
    pub fn roll(&self, rng: &mut StdRng) -> DiceRoll {
        let values: Vec<u32> = (0..self.count)
            .map(|_| rng.random_range(1..=self.sides))
            .collect();
        let dice_total: i64 = values.iter().map(|&v| i64::from(v)).sum();
        DiceRoll {
            formula: Some(*self),
            values,
            modifier: self.modifier,
            total: dice_total.saturating_add(self.modifier),
        }
    }
}

impl fmt::Display for DiceFormula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_constant() {
            return write!(f, "{}", self.modifier);
        }
        write!(f, "{}d{}", self.count, self.sides)?;
        match self.modifier {
            0 => Ok(()),
            m if m > 0 => write!(f, "+{m}"),
            m => write!(f, "{m}"),
        }
    }
}
