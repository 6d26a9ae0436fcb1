use crate::Span;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Maximum number of diagnostics stored before further ones are only counted.
pub const MAX_ERRORS: usize = 20;

/// Error category, determined by error code range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorCategory {
    Syntax,
    Arithmetic,
    Structure,
}

/// Numeric error code (E100–E399).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ErrorCode(pub u16);

impl ErrorCode {
    // ── Syntax errors (E100–E199) ──
    pub const UNEXPECTED_TOKEN: Self = Self(100);
    pub const UNCLOSED_PAREN: Self = Self(101);
    pub const UNKNOWN_IDENTIFIER: Self = Self(102);
    pub const UNEXPECTED_CHARACTER: Self = Self(103);
    pub const UNKNOWN_FUNCTION: Self = Self(104);
    pub const EMPTY_EXPRESSION: Self = Self(105);
    pub const MALFORMED_NUMBER: Self = Self(106);

    // ── Arithmetic errors (E200–E299) ──
    pub const DIVISION_BY_ZERO: Self = Self(200);
    pub const DOMAIN_ERROR: Self = Self(201);
    pub const NON_FINITE_RESULT: Self = Self(202);

    // ── Structure errors (E300–E399) ──
    pub const NESTING_LIMIT_EXCEEDED: Self = Self(300);

    /// Get the category for this error code.
    pub fn category(self) -> ErrorCategory {
        match self.0 {
            100..=199 => ErrorCategory::Syntax,
            200..=299 => ErrorCategory::Arithmetic,
            300..=399 => ErrorCategory::Structure,
            _ => ErrorCategory::Syntax, // fallback
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{}", self.0)
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Syntax => write!(f, "syntax"),
            Self::Arithmetic => write!(f, "arithmetic"),
            Self::Structure => write!(f, "structure"),
        }
    }
}

/// A structured diagnostic produced by the lexer or parser.
///
/// The display layer may render these however it likes; the session only
/// ever surfaces a generic error indicator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Error)]
#[error("{span}: {code} [{category}] {message}")]
pub struct CalcError {
    /// Error code (e.g., E102).
    pub code: ErrorCode,
    /// Error category (derived from code).
    pub category: ErrorCategory,
    /// Human-readable error message.
    pub message: String,
    /// Location in the expression text.
    pub span: Span,
    /// Optional fix suggestion.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl CalcError {
    /// Create a new error.
    pub fn new(code: ErrorCode, message: impl Into<String>, span: Span) -> Self {
        Self {
            code,
            category: code.category(),
            message: message.into(),
            span,
            suggestion: None,
        }
    }

    /// Attach a fix suggestion.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

/// Diagnostics collected by one pipeline stage.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Diagnostics {
    pub errors: Vec<CalcError>,
    pub total_errors: usize,
}

impl Diagnostics {
    /// Create an empty collection (no errors).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Check if there are any errors.
    pub fn has_errors(&self) -> bool {
        self.total_errors > 0
    }

    /// Returns `true` once the storage cap has been reached.
    pub fn is_full(&self) -> bool {
        self.total_errors >= MAX_ERRORS
    }

    /// Add an error, respecting the MAX_ERRORS limit.
    pub fn push(&mut self, error: CalcError) {
        if self.errors.len() < MAX_ERRORS {
            self.errors.push(error);
        }
        self.total_errors += 1;
    }

    /// Append every diagnostic from `other`, keeping the running total.
    pub fn extend(&mut self, other: Diagnostics) {
        let dropped = other.total_errors.saturating_sub(other.errors.len());
        for error in other.errors {
            self.push(error);
        }
        self.total_errors += dropped;
    }

    /// The first recorded error, if any.
    pub fn first(&self) -> Option<&CalcError> {
        self.errors.first()
    }
}

impl fmt::Display for Diagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.errors.first() {
            Some(first) if self.total_errors > 1 => {
                write!(f, "{first} (and {} more)", self.total_errors - 1)
            }
            Some(first) => write!(f, "{first}"),
            None => write!(f, "no errors"),
        }
    }
}
