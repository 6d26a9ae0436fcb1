//! Session-level error type.

use calc_eval::EvalError;
use thiserror::Error;

/// Why a submission produced no result.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalculationError {
    /// Blank input. Not a failure from the user's point of view: nothing
    /// changes and nothing should be shown.
    #[error("expression is empty")]
    EmptyInput,

    /// The expression could not be turned into a finite number.
    #[error("invalid expression: {0}")]
    InvalidExpression(#[from] EvalError),
}

impl CalculationError {
    /// Short machine-readable kind, for display layers.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::EmptyInput => "empty_input",
            Self::InvalidExpression(_) => "invalid_expression",
        }
    }
}
