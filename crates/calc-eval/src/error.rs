//! Evaluation error types.

use calc_types::ast::Function;
use calc_types::{CalcError, Diagnostics, ErrorCode, Span};
use thiserror::Error;

/// Evaluation error — syntax problems or a value that is not a finite real.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    /// The text did not lex or parse as a well-formed expression.
    #[error("syntax error: {0}")]
    Syntax(Diagnostics),

    /// Division by zero (including `0/0`).
    #[error("division by zero")]
    DivisionByZero { span: Span },

    /// A function was applied outside its domain, e.g. `sqrt(-1)`.
    #[error("{function} is undefined for {argument}")]
    Domain {
        function: Function,
        argument: f64,
        span: Span,
    },

    /// Overflow, or a power without a real result.
    #[error("result is not a finite number")]
    NonFinite { span: Span },
}

impl EvalError {
    /// Error code of the primary diagnostic.
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Syntax(errors) => errors
                .first()
                .map_or(ErrorCode::UNEXPECTED_TOKEN, |e| e.code),
            Self::DivisionByZero { .. } => ErrorCode::DIVISION_BY_ZERO,
            Self::Domain { .. } => ErrorCode::DOMAIN_ERROR,
            Self::NonFinite { .. } => ErrorCode::NON_FINITE_RESULT,
        }
    }

    /// The error as structured diagnostics, for display layers.
    pub fn diagnostics(&self) -> Diagnostics {
        let span = match self {
            Self::Syntax(errors) => return errors.clone(),
            Self::DivisionByZero { span }
            | Self::NonFinite { span }
            | Self::Domain { span, .. } => *span,
        };
        let mut diagnostics = Diagnostics::empty();
        diagnostics.push(CalcError::new(self.code(), self.to_string(), span));
        diagnostics
    }
}

/// Result alias for evaluator operations.
pub type EvalResult<T> = Result<T, EvalError>;
