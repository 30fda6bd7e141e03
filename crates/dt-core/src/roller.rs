//! Roll-number sources: whatever turns a die expression into a total.

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::EditorConfig;
use crate::dice::{DiceFormula, DiceRoll};
use crate::error::RollError;

/// Evaluates a die expression into a roll result.
pub trait RollSource {
    /// Roll `expression` and return the result.
    fn roll(&mut self, expression: &str) -> Result<DiceRoll, RollError>;
}

impl<T: RollSource + ?Sized> RollSource for &mut T {
    fn roll(&mut self, expression: &str) -> Result<DiceRoll, RollError> {
        (**self).roll(expression)
    }
}

impl<T: RollSource + ?Sized> RollSource for Box<T> {
    fn roll(&mut self, expression: &str) -> Result<DiceRoll, RollError> {
        (**self).roll(expression)
    }
}

/// Parses expressions with [`DiceFormula`] and rolls them with a seeded RNG.
#[derive(Debug, Clone)]
pub struct SeededRoller {
    rng: StdRng,
}

impl SeededRoller {
    /// A roller with a fixed seed.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// A roller seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Honour the config's seed if set, otherwise seed from the OS.
    pub fn from_config(config: &EditorConfig) -> Self {
        config.seed.map_or_else(Self::from_entropy, Self::new)
    }
}

impl RollSource for SeededRoller {
    fn roll(&mut self, expression: &str) -> Result<DiceRoll, RollError> {
        let formula = DiceFormula::parse(expression).map_err(|source| RollError::Parse {
            expression: expression.to_string(),
            source,
        })?;
        Ok(formula.roll(&mut self.rng))
    }
}

/// Always yields the same total, whatever the expression.
///
/// Stands in for a physical roll typed in by the player.
#[derive(Debug, Clone, Copy)]
pub struct FixedRoll(pub i64);

impl RollSource for FixedRoll {
    fn roll(&mut self, _expression: &str) -> Result<DiceRoll, RollError> {
        Ok(DiceRoll::manual(self.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::DiceParseError;

    #[test]
    fn seeded_roller_is_reproducible() {
        let mut a = SeededRoller::new(9);
        let mut b = SeededRoller::new(9);
        for _ in 0..20 {
            assert_eq!(a.roll("3d6").unwrap(), b.roll("3d6").unwrap());
        }
    }

    #[test]
    fn seeded_roller_respects_formula_range() {
        let mut r = SeededRoller::new(1);
        for _ in 0..100 {
            let total = r.roll("1d20").unwrap().total;
            assert!((1..=20).contains(&total));
        }
    }

    #[test]
    fn seeded_roller_reports_parse_failure() {
        let mut r = SeededRoller::new(1);
        let err = r.roll("1d1").unwrap_err();
        assert_eq!(
            err,
            RollError::Parse {
                expression: "1d1".to_string(),
                source: DiceParseError::InvalidDieSize,
            }
        );
        assert_eq!(
            err.to_string(),
            "cannot evaluate '1d1': die size must be at least 2"
        );
    }

    #[test]
    fn seeded_roller_rejects_overflowing_modifier() {
        let mut r = SeededRoller::new(1);
        let err = r.roll("1d20+9223372036854775807").unwrap_err();
        assert!(matches!(
            err,
            RollError::Parse {
                source: DiceParseError::ModifierOutOfRange(i64::MAX),
                ..
            }
        ));
    }

    #[test]
    fn from_config_uses_seed() {
        let cfg = EditorConfig::default().with_seed(5);
        let mut a = SeededRoller::from_config(&cfg);
        let mut b = SeededRoller::new(5);
        assert_eq!(a.roll("1d100").unwrap(), b.roll("1d100").unwrap());
    }

    #[test]
    fn entropy_roller_still_rolls() {
        let mut r = SeededRoller::from_entropy();
        let total = r.roll("d6").unwrap().total;
        assert!((1..=6).contains(&total));
    }

    #[test]
    fn fixed_roll_ignores_expression() {
        let mut r = FixedRoll(17);
        let roll = r.roll("whatever").unwrap();
        assert!(roll.is_manual());
        assert_eq!(roll.total, 17);
    }

    fn roll_with(mut source: impl RollSource) -> i64 {
        source.roll("1d4").unwrap().total
    }

    #[test]
    fn boxed_and_borrowed_sources() {
        let mut fixed = FixedRoll(3);
        assert_eq!(roll_with(&mut fixed), 3);
        let boxed: Box<dyn RollSource> = Box::new(FixedRoll(4));
        assert_eq!(roll_with(boxed), 4);
    }
}
