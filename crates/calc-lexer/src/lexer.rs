//! Core lexer — converts expression text to a token stream.
//!
//! Features:
//! - Decimal literals with optional fraction, leading dot and exponent
//! - ASCII identifiers plus the `π` symbol
//! - `^` and `**` both lexed (the transformer rewrites one into the other)
//! - Error recovery: unknown characters are reported and skipped

use calc_types::{CalcError, Diagnostics, ErrorCode, SourceText, Span};

use crate::token::{Token, TokenKind};

/// The calculator lexer.
///
/// Converts source text into a vector of [`Token`]s, collecting up to
/// [`calc_types::MAX_ERRORS`] errors along the way.
pub struct Lexer<'src> {
    /// The full source text.
    text: &'src str,
    /// The same text as bytes, for cheap ASCII peeking.
    source: &'src [u8],
    /// Current byte offset into `source`.
    pos: usize,
    /// Collected errors.
    errors: Diagnostics,
}

/// Result of lexing: tokens + any errors collected.
#[derive(Debug)]
pub struct LexResult {
    /// The token stream (always ends with [`TokenKind::Eof`]).
    pub tokens: Vec<Token>,
    /// Errors encountered during lexing.
    pub errors: Diagnostics,
}

impl<'src> Lexer<'src> {
    /// Create a new lexer for the given source text.
    pub fn new(source_text: &'src SourceText) -> Self {
        Self::from_text(&source_text.source)
    }

    /// Create a lexer directly over a string slice.
    pub fn from_text(text: &'src str) -> Self {
        Self {
            text,
            source: text.as_bytes(),
            pos: 0,
            errors: Diagnostics::empty(),
        }
    }

    /// Lex the entire input into a token stream.
    pub fn lex(mut self) -> LexResult {
        let mut tokens = Vec::new();

        loop {
            let token = self.scan_token();
            let is_eof = token.kind == TokenKind::Eof;
            tokens.push(token);
            if is_eof {
                break;
            }
        }

        LexResult {
            tokens,
            errors: self.errors,
        }
    }

    // ─────────────────────────────────────────────────────────────
    // Character-level helpers
    // ─────────────────────────────────────────────────────────────

    fn peek(&self) -> Option<u8> {
        self.source.get(self.pos).copied()
    }

    fn peek_at(&self, offset: usize) -> Option<u8> {
        self.source.get(self.pos + offset).copied()
    }

    fn advance(&mut self) -> Option<u8> {
        let ch = self.peek()?;
        self.pos += 1;
        Some(ch)
    }

    fn at_end(&self) -> bool {
        self.pos >= self.source.len()
    }

    fn offset(&self) -> u32 {
        self.pos as u32
    }

    fn span_from(&self, start: usize) -> Span {
        Span::new(start as u32, self.pos as u32)
    }

    fn emit_error(&mut self, code: ErrorCode, message: impl Into<String>, span: Span) {
        self.errors.push(CalcError::new(code, message, span));
    }

    fn skip_whitespace(&mut self) {
        while let Some(b' ' | b'\t' | b'\r' | b'\n') = self.peek() {
            self.advance();
        }
    }

    // ─────────────────────────────────────────────────────────────
    // Scanning
    // ─────────────────────────────────────────────────────────────

    /// Scan one token, skipping over (and reporting) anything unlexable.
    fn scan_token(&mut self) -> Token {
        loop {
            self.skip_whitespace();

            if self.at_end() || self.errors.is_full() {
                return Token::new(TokenKind::Eof, Span::point(self.offset()));
            }

            let start = self.pos;
            let Some(ch) = self.peek() else {
                return Token::new(TokenKind::Eof, Span::point(self.offset()));
            };

            let kind = match ch {
                b'0'..=b'9' => return self.scan_number(start),
                b'.' if matches!(self.peek_at(1), Some(b'0'..=b'9')) => {
                    return self.scan_number(start)
                }
                b'a'..=b'z' | b'A'..=b'Z' | b'_' => return self.scan_identifier(start),

                b'+' => TokenKind::Plus,
                b'-' => TokenKind::Minus,
                b'/' => TokenKind::Slash,
                b'^' => TokenKind::Caret,
                b'(' => TokenKind::LParen,
                b')' => TokenKind::RParen,
                b'*' => {
                    if self.peek_at(1) == Some(b'*') {
                        self.advance();
                        TokenKind::StarStar
                    } else {
                        TokenKind::Star
                    }
                }

                0x80..=0xFF => {
                    if let Some(token) = self.scan_non_ascii(start) {
                        return token;
                    }
                    continue;
                }

                _ => {
                    self.advance();
                    let span = self.span_from(start);
                    self.emit_error(
                        ErrorCode::UNEXPECTED_CHARACTER,
                        format!("Unexpected character '{}'", ch as char),
                        span,
                    );
                    continue;
                }
            };

            self.advance();
            return Token::new(kind, self.span_from(start));
        }
    }

    /// Multi-byte characters: only `π` is meaningful.
    fn scan_non_ascii(&mut self, start: usize) -> Option<Token> {
        let ch = self.text.get(start..)?.chars().next()?;
        self.pos += ch.len_utf8();
        let span = self.span_from(start);
        if ch == 'π' {
            return Some(Token::new(TokenKind::PiSymbol, span));
        }
        self.emit_error(
            ErrorCode::UNEXPECTED_CHARACTER,
            format!("Unexpected character '{ch}'"),
            span,
        );
        None
    }

    // ─────────────────────────────────────────────────────────────
    // Number literals
    // ─────────────────────────────────────────────────────────────

    fn scan_number(&mut self, start: usize) -> Token {
        self.skip_digits();

        if self.peek() == Some(b'.') {
            self.advance();
            self.skip_digits();
        }

        // `1.2.3`: swallow the whole run so it is reported once.
        let mut extra_points = false;
        while self.peek() == Some(b'.') {
            extra_points = true;
            self.advance();
            self.skip_digits();
        }

        // Exponent only when digits actually follow, so `2e` stays `2` `e`.
        if matches!(self.peek(), Some(b'e' | b'E')) {
            let digits_at = match self.peek_at(1) {
                Some(b'+' | b'-') => 2,
                _ => 1,
            };
            if matches!(self.peek_at(digits_at), Some(b'0'..=b'9')) {
                for _ in 0..digits_at {
                    self.advance();
                }
                self.skip_digits();
            }
        }

        let span = self.span_from(start);
        let source = self.text;
        let text = &source[start..self.pos];
        let value = match text.parse::<f64>() {
            Ok(value) if !extra_points => value,
            _ => {
                self.emit_error(
                    ErrorCode::MALFORMED_NUMBER,
                    format!("Malformed number '{text}'"),
                    span,
                );
                0.0
            }
        };

        Token::new(TokenKind::Number(value), span)
    }

    fn skip_digits(&mut self) {
        while let Some(b'0'..=b'9') = self.peek() {
            self.advance();
        }
    }

    // ─────────────────────────────────────────────────────────────
    // Identifiers
    // ─────────────────────────────────────────────────────────────

    fn scan_identifier(&mut self, start: usize) -> Token {
        while let Some(ch) = self.peek() {
            if ch.is_ascii_alphanumeric() || ch == b'_' {
                self.advance();
            } else {
                break;
            }
        }

        let span = self.span_from(start);
        let text = &self.text[start..self.pos];
        Token::new(TokenKind::Identifier(text.to_string()), span)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex(src: &str) -> LexResult {
        Lexer::from_text(src).lex()
    }

    #[test]
    fn test_empty_input_is_just_eof() {
        let result = lex("");
        assert_eq!(result.tokens.len(), 1);
        assert_eq!(result.tokens[0].kind, TokenKind::Eof);
        assert_eq!(result.tokens[0].span, Span::point(0));
    }

    #[test]
    fn test_spans_are_byte_offsets() {
        let result = lex("  12 + π");
        let spans: Vec<Span> = result.tokens.iter().map(|t| t.span).collect();
        assert_eq!(
            spans,
            vec![
                Span::new(2, 4),
                Span::new(5, 6),
                Span::new(7, 9),
                Span::point(9),
            ]
        );
    }

    #[test]
    fn test_unknown_multibyte_character_is_skipped_whole() {
        let result = lex("2×3");
        assert_eq!(result.errors.total_errors, 1);
        assert_eq!(result.errors.errors[0].span, Span::new(1, 3));
        assert_eq!(result.tokens.len(), 3);
    }

    #[test]
    fn test_error_cap_stops_lexing() {
        let src = "#".repeat(40);
        let result = lex(&src);
        assert_eq!(result.errors.total_errors, calc_types::MAX_ERRORS);
        assert_eq!(result.tokens.last().map(|t| &t.kind), Some(&TokenKind::Eof));
    }
}
