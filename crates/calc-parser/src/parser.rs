//! Core parser infrastructure: token cursor, error reporting, helpers.

use calc_lexer::token::{Token, TokenKind};
use calc_types::ast::Expr;
use calc_types::{CalcError, Diagnostics, ErrorCode, Span};

/// Default limit on nested parentheses, calls and unary/power chains.
pub const DEFAULT_MAX_DEPTH: u32 = 64;

/// The calculator parser.
///
/// Consumes a token stream produced by the lexer and builds an [`Expr`].
/// Parsing stops at the first syntax error.
pub struct Parser {
    /// The token stream.
    tokens: Vec<Token>,
    /// Current index into `tokens`.
    pos: usize,
    /// Collected errors.
    errors: Diagnostics,
    /// Current nesting depth.
    pub(crate) depth: u32,
    /// Maximum nesting depth before `E300`.
    pub(crate) max_depth: u32,
}

/// Result of parsing.
#[derive(Debug)]
pub struct ParseResult {
    /// The expression, present only when no error was reported.
    pub expr: Option<Expr>,
    pub errors: Diagnostics,
}

impl Parser {
    /// Create a new parser from a token stream.
    pub fn new(mut tokens: Vec<Token>) -> Self {
        if !matches!(tokens.last(), Some(t) if t.kind == TokenKind::Eof) {
            let end = tokens.last().map_or(0, |t| t.span.end);
            tokens.push(Token::new(TokenKind::Eof, Span::point(end)));
        }
        Self {
            tokens,
            pos: 0,
            errors: Diagnostics::empty(),
            depth: 0,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Override the nesting limit.
    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }

    // ── Token Cursor ──────────────────────────────────────────────────────────

    /// Returns the current token without advancing.
    pub(crate) fn peek(&self) -> &Token {
        // `new` guarantees a trailing Eof, so the fallback is never empty.
        let last = self.tokens.len() - 1;
        &self.tokens[self.pos.min(last)]
    }

    /// Returns the kind of the current token.
    pub(crate) fn peek_kind(&self) -> &TokenKind {
        &self.peek().kind
    }

    /// Advance the cursor by one and return the consumed token.
    pub(crate) fn advance(&mut self) -> Token {
        let token = self.peek().clone();
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
        token
    }

    /// Returns the previously consumed token's span.
    pub(crate) fn previous_span(&self) -> Span {
        if self.pos > 0 {
            self.tokens[self.pos - 1].span
        } else {
            Span::point(0)
        }
    }

    /// Returns the span of the current token.
    pub(crate) fn current_span(&self) -> Span {
        self.peek().span
    }

    /// Returns `true` if the current token is `Eof`.
    pub(crate) fn at_end(&self) -> bool {
        matches!(self.peek_kind(), TokenKind::Eof)
    }

    /// Check if the current token matches the given kind exactly.
    pub(crate) fn check_exact(&self, kind: &TokenKind) -> bool {
        self.peek_kind() == kind
    }

    /// Look ahead by `n` tokens from current position.
    pub(crate) fn look_ahead(&self, n: usize) -> &TokenKind {
        self.tokens
            .get(self.pos + n)
            .map(|t| &t.kind)
            .unwrap_or(&TokenKind::Eof)
    }

    // ── Nesting ───────────────────────────────────────────────────────────────

    /// Run `f` one nesting level deeper, failing with `E300` past the limit.
    pub(crate) fn nested<T>(&mut self, f: impl FnOnce(&mut Self) -> Option<T>) -> Option<T> {
        self.depth += 1;
        if self.depth > self.max_depth {
            self.error_at_current(
                ErrorCode::NESTING_LIMIT_EXCEEDED,
                format!("maximum nesting depth is {}", self.max_depth),
            );
            self.depth -= 1;
            return None;
        }
        let result = f(self);
        self.depth -= 1;
        result
    }

    // ── Error Reporting ───────────────────────────────────────────────────────

    /// Report an error at the current token position.
    pub(crate) fn error_at_current(&mut self, code: ErrorCode, message: impl Into<String>) {
        let span = self.current_span();
        self.error_at(code, message, span);
    }

    /// Report an error at a specific span.
    pub(crate) fn error_at(&mut self, code: ErrorCode, message: impl Into<String>, span: Span) {
        self.errors.push(CalcError::new(code, message, span));
    }

    /// Report a prepared error.
    pub(crate) fn report(&mut self, error: CalcError) {
        self.errors.push(error);
    }

    // ── Public API ────────────────────────────────────────────────────────────

    /// Parse the token stream into a single expression.
    ///
    /// The whole stream must be consumed; trailing tokens are an error.
    pub fn parse(mut self) -> ParseResult {
        if self.at_end() {
            self.error_at_current(ErrorCode::EMPTY_EXPRESSION, "expression is empty");
            return ParseResult {
                expr: None,
                errors: self.errors,
            };
        }

        let expr = self.parse_expression();
        if expr.is_some() && !self.at_end() {
            let found = self.peek_kind().clone();
            let error = match found {
                TokenKind::RParen => CalcError::new(
                    ErrorCode::UNEXPECTED_TOKEN,
                    "unmatched ')'",
                    self.current_span(),
                )
                .with_suggestion("remove the ')' or add a matching '('"),
                other => CalcError::new(
                    ErrorCode::UNEXPECTED_TOKEN,
                    format!("unexpected '{other}' after expression"),
                    self.current_span(),
                )
                .with_suggestion("insert an operator such as '*' between the two terms"),
            };
            self.report(error);
        }

        ParseResult {
            expr: if self.errors.has_errors() { None } else { expr },
            errors: self.errors,
        }
    }
}
