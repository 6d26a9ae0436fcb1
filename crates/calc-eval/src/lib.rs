//! Calculator evaluator: reference semantics for canonical expressions.
//!
//! ```text
//! canonical text → Lexer → Parser → Evaluator → f64
//! ```
//!
//! Evaluation is a pure tree walk over a fixed grammar. Any value that is
//! not finite, at any node, is an error rather than a result.

pub mod error;
pub mod evaluator;
pub mod format;

use calc_lexer::Lexer;
use calc_parser::{Parser, DEFAULT_MAX_DEPTH};
use calc_types::SourceText;

pub use error::{EvalError, EvalResult};
pub use evaluator::Evaluator;
pub use format::format_number;

/// Parse and evaluate a canonical expression.
pub fn evaluate(canonical: &str) -> EvalResult<f64> {
    evaluate_with_depth(canonical, DEFAULT_MAX_DEPTH)
}

/// Parse and evaluate with an explicit nesting limit.
pub fn evaluate_with_depth(canonical: &str, max_depth: u32) -> EvalResult<f64> {
    let source = SourceText::new(canonical);
    let lexed = Lexer::new(&source).lex();
    let mut errors = lexed.errors;
    let parsed = Parser::new(lexed.tokens)
        .with_max_depth(max_depth)
        .parse();
    errors.extend(parsed.errors);

    let result = match parsed.expr {
        Some(expr) if !errors.has_errors() => Evaluator::new().eval_expr(&expr),
        _ => Err(EvalError::Syntax(errors)),
    };
    if let Err(err) = &result {
        tracing::trace!(canonical, error = %err, "evaluation failed");
    }
    result
}
