//! Shared types for the calculator core.
//!
//! This crate defines the expression AST, byte-offset source spans,
//! structured diagnostics, and other data shared by every pipeline stage.

mod error;
mod span;
pub mod ast;

pub use error::{CalcError, Diagnostics, ErrorCategory, ErrorCode, MAX_ERRORS};
pub use span::{SourceText, Span};
