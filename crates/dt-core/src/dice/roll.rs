//! Dice roll results.

use serde::{Deserialize, Serialize};

use super::formula::DiceFormula;

/// The result of evaluating a die expression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiceRoll {
    /// The formula rolled, or `None` for a manually entered result.
    pub formula: Option<DiceFormula>,
    /// Individual die values.
    pub values: Vec<u32>,
    /// Modifier added to the dice.
    pub modifier: i64,
    /// Final total.
    pub total: i64,
}

impl DiceRoll {
    /// A result typed in by the player (physical dice).
    pub fn manual(total: i64) -> Self {
        Self {
            formula: None,
            values: Vec::new(),
            modifier: 0,
            total,
        }
    }

    /// Whether this result was entered by hand.
    pub fn is_manual(&self) -> bool {
        self.formula.is_none()
    }

    /// Human-readable breakdown, e.g. `1d20(14) + 5 = 19` or `2d6[3, 4] = 7`.
    pub fn breakdown(&self) -> String {
        let Some(formula) = self.formula else {
            return format!("manual {}", self.total);
        };
        if formula.is_constant() {
            return self.total.to_string();
        }

        let dice = format!("{}d{}", formula.count, formula.sides);
        let values = match self.values.as_slice() {
            [single] => format!("({single})"),
            many => {
                let parts: Vec<String> = many.iter().map(u32::to_string).collect();
                format!("[{}]", parts.join(", "))
            }
        };
        match self.modifier {
            0 => format!("{dice}{values} = {}", self.total),
            m if m > 0 => format!("{dice}{values} + {m} = {}", self.total),
            m => format!("{dice}{values} - {} = {}", -m, self.total),
        }
    }
}

impl std::fmt::Display for DiceRoll {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.breakdown())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rolled(count: u32, sides: u32, modifier: i64, values: &[u32]) -> DiceRoll {
        let sum: i64 = values.iter().map(|&v| i64::from(v)).sum();
        DiceRoll {
            formula: Some(DiceFormula::new(count, sides, modifier).unwrap()),
            values: values.to_vec(),
            modifier,
            total: sum + modifier,
        }
    }

    #[test]
    fn breakdown_single_die() {
        assert_eq!(rolled(1, 20, 0, &[14]).breakdown(), "1d20(14) = 14");
        assert_eq!(rolled(1, 20, 5, &[14]).breakdown(), "1d20(14) + 5 = 19");
        assert_eq!(rolled(1, 20, -2, &[14]).breakdown(), "1d20(14) - 2 = 12");
    }

    #[test]
    fn breakdown_multiple_dice() {
        assert_eq!(rolled(2, 6, 0, &[3, 4]).breakdown(), "2d6[3, 4] = 7");
        assert_eq!(rolled(2, 6, 3, &[4, 5]).breakdown(), "2d6[4, 5] + 3 = 12");
    }

    #[test]
    fn manual_result() {
        let r = DiceRoll::manual(18);
        assert!(r.is_manual());
        assert_eq!(r.breakdown(), "manual 18");
        assert_eq!(r.to_string(), "manual 18");
    }

    #[test]
    fn constant_breakdown() {
        let r = DiceRoll {
            formula: Some(DiceFormula::constant(9)),
            values: Vec::new(),
            modifier: 9,
            total: 9,
        };
        assert_eq!(r.breakdown(), "9");
    }
}
