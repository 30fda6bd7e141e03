use crate::dice::DiceParseError;

/// Alias for `Result<T, EditorError>`.
pub type EditorResult<T> = Result<T, EditorError>;

/// A record or range failed an explicit validation check.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A roll bound was below zero.
    #[error("{field} must be at least 0, got {value}")]
    NegativeBound {
        /// Which bound was rejected (`minRoll` or `maxRoll`).
        field: &'static str,
        /// The rejected value.
        value: i64,
    },

    /// A range inside a record failed validation.
    #[error("outcome {index}: {source}")]
    Outcome {
        /// Position of the offending range.
        index: usize,
        /// What was wrong with it.
        #[source]
        source: Box<ValidationError>,
    },
}

/// A roll-number source could not produce a result.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RollError {
    /// The die expression could not be parsed.
    #[error("cannot evaluate '{expression}': {source}")]
    Parse {
        /// The expression as given.
        expression: String,
        /// The parser's complaint.
        #[source]
        source: DiceParseError,
    },

    /// The roll source itself failed (e.g. a remote dice engine went away).
    #[error("roll source unavailable: {0}")]
    Unavailable(String),
}

/// Errors reported by [`ActivityEditor`](crate::ActivityEditor) operations.
///
/// Every variant leaves the record untouched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EditorError {
    /// The activity has no roll expression to evaluate.
    #[error("activity has no roll expression")]
    MissingRollExpression,

    /// The roll source failed to evaluate the expression.
    #[error("roll failed: {0}")]
    RollEvaluation(#[from] RollError),

    /// An outcome index did not point at an existing range.
    #[error("outcome index {index} out of range (activity has {len})")]
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// Number of ranges on the record.
        len: usize,
    },

    /// An edit would have produced an invalid range.
    #[error("{0}")]
    Validation(#[from] ValidationError),
}
