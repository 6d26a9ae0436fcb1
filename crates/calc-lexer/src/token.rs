//! Token types for the calculator lexer.
//!
//! Defines [`TokenKind`] covering every lexeme a calculator expression can
//! contain and [`Token`], which pairs a kind with a source [`Span`].

use calc_types::Span;
use std::fmt;

// ─────────────────────────────────────────────────────────────────────
// Token
// ─────────────────────────────────────────────────────────────────────

/// A single token produced by the lexer.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// What kind of token this is.
    pub kind: TokenKind,
    /// Source location (byte offsets).
    pub span: Span,
}

impl Token {
    /// Create a new token.
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }
}

// ─────────────────────────────────────────────────────────────────────
// TokenKind
// ─────────────────────────────────────────────────────────────────────

/// Every token kind in a calculator expression.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    // ── Literals ──────────────────────────────────────────────

    /// Numeric literal: `42`, `3.14`, `.5`, `2.`, `1e-3`
    Number(f64),

    // ── Identifiers ──────────────────────────────────────────

    /// Function or constant name: `sqrt`, `pi`, `e`, `log10`
    Identifier(String),
    /// The `π` symbol
    PiSymbol,

    // ── Operators ────────────────────────────────────────────

    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `^`
    Caret,
    /// `**`
    StarStar,

    // ── Delimiters ───────────────────────────────────────────

    /// `(`
    LParen,
    /// `)`
    RParen,

    // ── Special ──────────────────────────────────────────────

    /// End of input
    Eof,
}

impl TokenKind {
    /// Returns `true` for either spelling of the power operator.
    pub fn is_power(&self) -> bool {
        matches!(self, TokenKind::Caret | TokenKind::StarStar)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Number(n) => write!(f, "{n}"),
            TokenKind::Identifier(s) => f.write_str(s),
            TokenKind::PiSymbol => f.write_str("π"),
            TokenKind::Plus => f.write_str("+"),
            TokenKind::Minus => f.write_str("-"),
            TokenKind::Star => f.write_str("*"),
            TokenKind::Slash => f.write_str("/"),
            TokenKind::Caret => f.write_str("^"),
            TokenKind::StarStar => f.write_str("**"),
            TokenKind::LParen => f.write_str("("),
            TokenKind::RParen => f.write_str(")"),
            TokenKind::Eof => f.write_str("end of input"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(TokenKind::StarStar.to_string(), "**");
        assert_eq!(TokenKind::PiSymbol.to_string(), "π");
        assert_eq!(TokenKind::Identifier("ln".into()).to_string(), "ln");
        assert_eq!(TokenKind::Eof.to_string(), "end of input");
    }

    #[test]
    fn test_is_power() {
        assert!(TokenKind::Caret.is_power());
        assert!(TokenKind::StarStar.is_power());
        assert!(!TokenKind::Star.is_power());
    }
}
