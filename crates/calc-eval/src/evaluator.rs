//! Core expression evaluator.

use crate::error::{EvalError, EvalResult};
use calc_types::ast::*;
use calc_types::Span;

/// The evaluator — walks AST nodes and produces finite `f64` values.
///
/// Stateless: evaluating the same tree always yields the same result.
#[derive(Debug, Default, Clone, Copy)]
pub struct Evaluator;

impl Evaluator {
    /// Create a new evaluator.
    pub fn new() -> Self {
        Self
    }

    /// Evaluate an expression to a finite number.
    pub fn eval_expr(&self, expr: &Expr) -> EvalResult<f64> {
        let value = match &expr.kind {
            ExprKind::Number(n) => *n,
            ExprKind::Constant(c) => c.value(),
            ExprKind::Paren(inner) => self.eval_expr(inner)?,
            ExprKind::Unary { op, operand } => self.eval_unary(*op, operand)?,
            ExprKind::Chain { first, rest } => self.eval_chain(first, rest)?,
            ExprKind::Binary { left, op, right } => {
                self.eval_binary(left, *op, right, expr.span)?
            }
            ExprKind::Call { function, arg } => self.eval_call(*function, arg, expr.span)?,
        };
        finite(value, expr.span)
    }

    // ── Operators ─────────────────────────────────────────────────────────

    fn eval_unary(&self, op: UnaryOp, operand: &Expr) -> EvalResult<f64> {
        let value = self.eval_expr(operand)?;
        Ok(match op {
            UnaryOp::Neg => -value,
        })
    }

    /// Fold a flat left-associative run. Each partial result is checked,
    /// and reported against the span it covers so far.
    fn eval_chain(&self, first: &Expr, rest: &[(BinOp, Expr)]) -> EvalResult<f64> {
        let mut acc = self.eval_expr(first)?;
        for (op, operand) in rest {
            let span = first.span.merge(operand.span);
            let r = self.eval_expr(operand)?;
            acc = finite(apply(acc, *op, r, span)?, span)?;
        }
        Ok(acc)
    }

    fn eval_binary(&self, left: &Expr, op: BinOp, right: &Expr, span: Span) -> EvalResult<f64> {
        let l = self.eval_expr(left)?;
        let r = self.eval_expr(right)?;
        apply(l, op, r, span)
    }

    // ── Functions ─────────────────────────────────────────────────────────

    fn eval_call(&self, function: Function, arg: &Expr, span: Span) -> EvalResult<f64> {
        let x = self.eval_expr(arg)?;
        let in_domain = match function {
            Function::Sqrt => x >= 0.0,
            Function::Ln | Function::Log10 => x > 0.0,
            Function::Sin | Function::Cos | Function::Tan => true,
        };
        if !in_domain {
            return Err(EvalError::Domain {
                function,
                argument: x,
                span,
            });
        }
        Ok(match function {
            Function::Sin => x.sin(),
            Function::Cos => x.cos(),
            Function::Tan => x.tan(),
            Function::Log10 => x.log10(),
            Function::Ln => x.ln(),
            Function::Sqrt => x.sqrt(),
        })
    }
}

fn apply(l: f64, op: BinOp, r: f64, span: Span) -> EvalResult<f64> {
    Ok(match op {
        BinOp::Add => l + r,
        BinOp::Sub => l - r,
        BinOp::Mul => l * r,
        BinOp::Div => {
            if r == 0.0 {
                return Err(EvalError::DivisionByZero { span });
            }
            l / r
        }
        BinOp::Pow => l.powf(r),
    })
}

fn finite(value: f64, span: Span) -> EvalResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(EvalError::NonFinite { span })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn num(n: f64) -> Expr {
        Expr::new(ExprKind::Number(n), Span::new(0, 1))
    }

    fn bin(l: f64, op: BinOp, r: f64) -> Expr {
        Expr::new(
            ExprKind::Binary {
                left: Box::new(num(l)),
                op,
                right: Box::new(num(r)),
            },
            Span::new(0, 3),
        )
    }

    #[test]
    fn test_arithmetic() {
        let ev = Evaluator::new();
        assert_eq!(ev.eval_expr(&bin(2.0, BinOp::Add, 2.0)), Ok(4.0));
        assert_eq!(ev.eval_expr(&bin(2.0, BinOp::Sub, 5.0)), Ok(-3.0));
        assert_eq!(ev.eval_expr(&bin(6.0, BinOp::Div, 4.0)), Ok(1.5));
        assert_eq!(ev.eval_expr(&bin(2.0, BinOp::Pow, 10.0)), Ok(1024.0));
    }

    #[test]
    fn test_zero_over_zero_is_division_by_zero() {
        let ev = Evaluator::new();
        assert_eq!(
            ev.eval_expr(&bin(0.0, BinOp::Div, 0.0)),
            Err(EvalError::DivisionByZero {
                span: Span::new(0, 3)
            })
        );
    }

    #[test]
    fn test_infinite_literal_rejected() {
        let ev = Evaluator::new();
        assert!(matches!(
            ev.eval_expr(&num(f64::INFINITY)),
            Err(EvalError::NonFinite { .. })
        ));
    }

    #[test]
    fn test_ln_of_zero_is_domain_error() {
        let call = Expr::new(
            ExprKind::Call {
                function: Function::Ln,
                arg: Box::new(num(0.0)),
            },
            Span::new(0, 5),
        );
        assert!(matches!(
            Evaluator::new().eval_expr(&call),
            Err(EvalError::Domain {
                function: Function::Ln,
                ..
            })
        ));
    }
}
