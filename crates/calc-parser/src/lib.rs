//! Calculator parser: converts a token stream into an expression AST.

mod parse_expr;
mod parser;

pub use parser::{ParseResult, Parser, DEFAULT_MAX_DEPTH};
