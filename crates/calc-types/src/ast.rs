//! AST node types for calculator expressions.
//!
//! Every node carries a [`Span`] for error reporting.
//! Recursive children are boxed to keep enum sizes reasonable.

use crate::Span;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A spanned expression node.
#[derive(Debug, Clone, PartialEq)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

impl Expr {
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Self { kind, span }
    }
}

/// Expression variants, one per grammar production.
#[derive(Debug, Clone, PartialEq)]
pub enum ExprKind {
    /// `42`, `3.14`, `.5`, `1e3`
    Number(f64),
    /// `PI`, `E`
    Constant(Constant),
    /// `sqrt(expr)`
    Call { function: Function, arg: Box<Expr> },
    /// `-expr`
    Unary { op: UnaryOp, operand: Box<Expr> },
    /// `first op operand op operand ...` for the left-associative `+ - * /`.
    ///
    /// Kept flat so that long sums and products cost no stack depth.
    Chain {
        first: Box<Expr>,
        rest: Vec<(BinOp, Expr)>,
    },
    /// `left ** right`
    Binary {
        left: Box<Expr>,
        op: BinOp,
        right: Box<Expr>,
    },
    /// `( expr )`
    Paren(Box<Expr>),
}

/// Named constants understood by the evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Constant {
    Pi,
    E,
}

impl Constant {
    /// Resolve a canonical constant name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "PI" => Some(Self::Pi),
            "E" => Some(Self::E),
            _ => None,
        }
    }

    /// Canonical spelling.
    pub fn name(self) -> &'static str {
        match self {
            Self::Pi => "PI",
            Self::E => "E",
        }
    }

    /// Double-precision value.
    pub fn value(self) -> f64 {
        match self {
            Self::Pi => std::f64::consts::PI,
            Self::E => std::f64::consts::E,
        }
    }
}

/// Unary functions callable as `name(expr)`.
///
/// Trigonometric arguments are in radians.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Function {
    Sin,
    Cos,
    Tan,
    Log10,
    Ln,
    Sqrt,
}

impl Function {
    /// Every canonical function, in display order.
    pub const ALL: [Function; 6] = [
        Self::Sin,
        Self::Cos,
        Self::Tan,
        Self::Log10,
        Self::Ln,
        Self::Sqrt,
    ];

    /// Resolve a canonical function name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.name() == name)
    }

    /// Canonical spelling.
    pub fn name(self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Log10 => "log10",
            Self::Ln => "ln",
            Self::Sqrt => "sqrt",
        }
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Binary arithmetic operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

impl BinOp {
    /// Returns the operator symbol for error messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            BinOp::Add => "+",
            BinOp::Sub => "-",
            BinOp::Mul => "*",
            BinOp::Div => "/",
            BinOp::Pow => "**",
        }
    }
}

/// Unary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    Neg,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_function_names_round_trip() {
        for f in Function::ALL {
            assert_eq!(Function::from_name(f.name()), Some(f));
        }
        assert_eq!(Function::from_name("log"), None);
        assert_eq!(Function::from_name("SIN"), None);
    }

    #[test]
    fn test_constant_values() {
        assert_eq!(Constant::from_name("PI"), Some(Constant::Pi));
        assert_eq!(Constant::from_name("pi"), None);
        assert_eq!(Constant::E.value(), std::f64::consts::E);
        assert_eq!(Constant::Pi.name(), "PI");
    }
}
