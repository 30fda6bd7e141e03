//! Dice formulas and rolling.
//!
//! Supports the `XdY+Z` family of expressions (`1d20`, `d6`, `2d6-1`,
//! `3d8+4`) and plain integer constants, which is what downtime activities
//! use in practice. Rolling is driven by a caller-supplied [`StdRng`] so that
//! results can be reproduced from a seed.
//!
//! [`StdRng`]: rand::rngs::StdRng

pub mod formula;
pub mod roll;

pub use formula::DiceFormula;
pub use roll::DiceRoll;

/// Error when parsing a dice formula.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DiceParseError {
    /// The formula string is empty.
    #[error("empty dice formula")]
    Empty,
    /// Not of the form `XdY`, `XdY+Z`, `XdY-Z` or `N`.
    #[error("invalid dice format: {0}")]
    InvalidFormat(String),
    /// Zero dice, or more than [`formula::MAX_DICE`].
    #[error("dice count must be between 1 and {}", formula::MAX_DICE)]
    InvalidDiceCount,
    /// A die with fewer than two sides.
    #[error("die size must be at least 2")]
    InvalidDieSize,
    /// The modifier pushes a total outside the 64-bit range.
    #[error("modifier {0} is out of range")]
    ModifierOutOfRange(i64),
}
