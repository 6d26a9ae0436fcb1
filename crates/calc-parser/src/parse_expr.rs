//! Expression parsing with full operator precedence.
//!
//! Precedence (lowest → highest):
//! 5. `+`, `-` (left-associative)
//! 4. `*`, `/` (left-associative)
//! 3. `**` / `^` (right-associative)
//! 2. unary `-`
//! 1. number, constant, `f(expr)`, `( expr )`
//!
//! Unary minus binds tighter than power, so `-2**2` is `(-2)**2`.

use calc_lexer::token::TokenKind;
use calc_types::ast::*;
use calc_types::{CalcError, ErrorCode};

use crate::parser::Parser;

impl Parser {
    /// Parse an expression.
    pub(crate) fn parse_expression(&mut self) -> Option<Expr> {
        self.nested(Self::parse_add)
    }

    // ══════════════════════════════════════════════════════════════════════════
    // Precedence Chain
    // ══════════════════════════════════════════════════════════════════════════

    /// `AddExpr = MulExpr { ("+" | "-") MulExpr }`
    fn parse_add(&mut self) -> Option<Expr> {
        let first = self.parse_mul()?;
        let mut rest = Vec::new();
        loop {
            let op = match self.peek_kind() {
                TokenKind::Plus => BinOp::Add,
                TokenKind::Minus => BinOp::Sub,
                _ => break,
            };
            self.advance();
            rest.push((op, self.parse_mul()?));
        }
        Some(chain(first, rest))
    }

    /// `MulExpr = PowExpr { ("*" | "/") PowExpr }`
    fn parse_mul(&mut self) -> Option<Expr> {
        let first = self.parse_power()?;
        let mut rest = Vec::new();
        loop {
            let op = match self.peek_kind() {
                TokenKind::Star => BinOp::Mul,
                TokenKind::Slash => BinOp::Div,
                _ => break,
            };
            self.advance();
            rest.push((op, self.parse_power()?));
        }
        Some(chain(first, rest))
    }

    /// `PowExpr = UnaryExpr [ ("**" | "^") PowExpr ]`
    fn parse_power(&mut self) -> Option<Expr> {
        let base = self.parse_unary()?;
        if !self.peek_kind().is_power() {
            return Some(base);
        }
        self.advance();
        let exponent = self.nested(Self::parse_power)?;
        Some(binary(base, BinOp::Pow, exponent))
    }

    /// `UnaryExpr = "-" UnaryExpr | PrimaryExpr`
    fn parse_unary(&mut self) -> Option<Expr> {
        if !self.check_exact(&TokenKind::Minus) {
            return self.parse_primary();
        }
        let start = self.advance().span;
        let operand = self.nested(Self::parse_unary)?;
        let span = start.merge(operand.span);
        Some(Expr::new(
            ExprKind::Unary {
                op: UnaryOp::Neg,
                operand: Box::new(operand),
            },
            span,
        ))
    }

    // ══════════════════════════════════════════════════════════════════════════
    // Primary Expressions
    // ══════════════════════════════════════════════════════════════════════════

    /// Parse a primary expression.
    fn parse_primary(&mut self) -> Option<Expr> {
        let start = self.current_span();
        match self.peek_kind().clone() {
            TokenKind::Number(n) => {
                self.advance();
                Some(Expr::new(ExprKind::Number(n), start))
            }

            TokenKind::PiSymbol => {
                self.advance();
                Some(Expr::new(ExprKind::Constant(Constant::Pi), start))
            }

            TokenKind::LParen => {
                self.advance(); // eat `(`
                let inner = self.parse_expression()?;
                self.expect_closing_paren(start)?;
                let span = start.merge(self.previous_span());
                Some(Expr::new(ExprKind::Paren(Box::new(inner)), span))
            }

            TokenKind::Identifier(name) => {
                if *self.look_ahead(1) == TokenKind::LParen {
                    self.parse_call(&name)
                } else {
                    self.parse_constant(&name)
                }
            }

            TokenKind::RParen => {
                self.error_at_current(
                    ErrorCode::UNEXPECTED_TOKEN,
                    "expected expression, got ')'",
                );
                None
            }

            TokenKind::Eof => {
                self.error_at_current(
                    ErrorCode::UNEXPECTED_TOKEN,
                    "unexpected end of input, expected expression",
                );
                None
            }

            other => {
                self.error_at_current(
                    ErrorCode::UNEXPECTED_TOKEN,
                    format!("expected expression, got '{other}'"),
                );
                None
            }
        }
    }

    /// `Call = FunctionName "(" Expr ")"`
    fn parse_call(&mut self, name: &str) -> Option<Expr> {
        let name_span = self.current_span();
        let Some(function) = Function::from_name(name) else {
            let known: Vec<&str> = Function::ALL.iter().map(|f| f.name()).collect();
            self.report(
                CalcError::new(
                    ErrorCode::UNKNOWN_FUNCTION,
                    format!("unknown function '{name}'"),
                    name_span,
                )
                .with_suggestion(format!("available functions: {}", known.join(", "))),
            );
            return None;
        };
        self.advance(); // name
        let open = self.advance().span; // `(`
        let arg = self.parse_expression()?;
        self.expect_closing_paren(open)?;
        let span = name_span.merge(self.previous_span());
        Some(Expr::new(
            ExprKind::Call {
                function,
                arg: Box::new(arg),
            },
            span,
        ))
    }

    fn parse_constant(&mut self, name: &str) -> Option<Expr> {
        let span = self.current_span();
        match Constant::from_name(name) {
            Some(constant) => {
                self.advance();
                Some(Expr::new(ExprKind::Constant(constant), span))
            }
            None => {
                self.report(
                    CalcError::new(
                        ErrorCode::UNKNOWN_IDENTIFIER,
                        format!("unknown identifier '{name}'"),
                        span,
                    )
                    .with_suggestion("known constants are PI and E"),
                );
                None
            }
        }
    }

    /// Expect `)` closing the `(` at `open`.
    fn expect_closing_paren(&mut self, open: calc_types::Span) -> Option<()> {
        if self.check_exact(&TokenKind::RParen) {
            self.advance();
            return Some(());
        }
        let found = self.peek_kind().clone();
        self.report(
            CalcError::new(
                ErrorCode::UNCLOSED_PAREN,
                format!("expected ')' to close '(' at {open}, got '{found}'"),
                self.current_span(),
            )
            .with_suggestion("add a closing ')'"),
        );
        None
    }
}

/// Fold a left-associative run into one flat node; a lone operand is
/// returned as is.
fn chain(first: Expr, rest: Vec<(BinOp, Expr)>) -> Expr {
    let Some((_, last)) = rest.last() else {
        return first;
    };
    let span = first.span.merge(last.span);
    Expr::new(
        ExprKind::Chain {
            first: Box::new(first),
            rest,
        },
        span,
    )
}

fn binary(left: Expr, op: BinOp, right: Expr) -> Expr {
    let span = left.span.merge(right.span);
    Expr::new(
        ExprKind::Binary {
            left: Box::new(left),
            op,
            right: Box::new(right),
        },
        span,
    )
}
