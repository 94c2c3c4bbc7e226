// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under MIT License.

//! # Operators Module
//!
//! Arithmetic operators, operation modes, and the operation tags that
//! select a combination of the two, e.g. `"m_add"` or `"s_mult"`.

use std::fmt;
use std::str::FromStr;

use num_traits::Float;

use crate::enums::error::GridError;

/// Binary arithmetic applied cell-by-cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArithmeticOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
    /// `a.powf(b)`. A negative base with a non-integer exponent yields NaN.
    Power,
}

impl ArithmeticOperator {
    /// Applies the operator with `a` as the grid element and `b` as the other operand.
    ///
    /// No guards: division by zero and invalid powers follow IEEE-754.
    #[inline(always)]
    pub fn apply<T: Float>(self, a: T, b: T) -> T {
        match self {
            ArithmeticOperator::Add => a + b,
            ArithmeticOperator::Subtract => a - b,
            ArithmeticOperator::Multiply => a * b,
            ArithmeticOperator::Divide => a / b,
            ArithmeticOperator::Power => a.powf(b),
        }
    }

    /// Tag suffix, e.g. `"mult"` for `Multiply`.
    pub fn suffix(self) -> &'static str {
        match self {
            ArithmeticOperator::Add => "add",
            ArithmeticOperator::Subtract => "sub",
            ArithmeticOperator::Multiply => "mult",
            ArithmeticOperator::Divide => "div",
            ArithmeticOperator::Power => "exp",
        }
    }

    fn noun(self) -> &'static str {
        match self {
            ArithmeticOperator::Add => "Addition",
            ArithmeticOperator::Subtract => "Subtraction",
            ArithmeticOperator::Multiply => "Multiplication",
            ArithmeticOperator::Divide => "Division",
            ArithmeticOperator::Power => "Exponentiation",
        }
    }

    /// Returns `true` when swapping the operands cannot change the result.
    pub fn is_commutative(self) -> bool {
        matches!(self, ArithmeticOperator::Add | ArithmeticOperator::Multiply)
    }
}

/// Which traversal an operation runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationMode {
    /// Elementwise between two grids of identical shape - `m_` tags.
    MatrixMatrix,
    /// One scalar against every cell - `s_` tags.
    MatrixScalar,
}

impl OperationMode {
    pub fn prefix(self) -> &'static str {
        match self {
            OperationMode::MatrixMatrix => "m",
            OperationMode::MatrixScalar => "s",
        }
    }
}

/// # OperationKind
///
/// Operator and mode pair, identified by its string tag.
///
/// ### Tags
/// Exact and case-sensitive:
/// `m_add`, `s_add`, `m_sub`, `s_sub`, `m_mult`, `s_mult`,
/// `m_div`, `s_div`, `m_exp`, `s_exp`.
///
/// ### Example
/// ```rust
/// use gridwise::{ArithmeticOperator, OperationKind, OperationMode};
///
/// let kind: OperationKind = "s_mult".parse().unwrap();
/// assert_eq!(kind.op, ArithmeticOperator::Multiply);
/// assert_eq!(kind.mode, OperationMode::MatrixScalar);
/// assert_eq!(kind.to_string(), "s_mult");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OperationKind {
    pub op: ArithmeticOperator,
    pub mode: OperationMode,
}

impl OperationKind {
    /// All ten supported kinds, matrix before scalar for each operator.
    pub const ALL: [OperationKind; 10] = {
        use ArithmeticOperator::*;
        use OperationMode::*;
        [
            OperationKind::new(Add, MatrixMatrix),
            OperationKind::new(Add, MatrixScalar),
            OperationKind::new(Subtract, MatrixMatrix),
            OperationKind::new(Subtract, MatrixScalar),
            OperationKind::new(Multiply, MatrixMatrix),
            OperationKind::new(Multiply, MatrixScalar),
            OperationKind::new(Divide, MatrixMatrix),
            OperationKind::new(Divide, MatrixScalar),
            OperationKind::new(Power, MatrixMatrix),
            OperationKind::new(Power, MatrixScalar),
        ]
    };

    pub const fn new(op: ArithmeticOperator, mode: OperationMode) -> Self {
        OperationKind { op, mode }
    }

    #[inline]
    pub fn is_scalar(&self) -> bool {
        self.mode == OperationMode::MatrixScalar
    }

    /// Human-readable name, e.g. `"Scalar Exponentiation"`.
    pub fn display_name(&self) -> String {
        let mode = match self.mode {
            OperationMode::MatrixMatrix => "Matrix",
            OperationMode::MatrixScalar => "Scalar",
        };
        format!("{} {}", mode, self.op.noun())
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.mode.prefix(), self.op.suffix())
    }
}

impl FromStr for OperationKind {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        use ArithmeticOperator::*;
        use OperationMode::*;

        let kind = match s {
            "m_add" => OperationKind::new(Add, MatrixMatrix),
            "s_add" => OperationKind::new(Add, MatrixScalar),
            "m_sub" => OperationKind::new(Subtract, MatrixMatrix),
            "s_sub" => OperationKind::new(Subtract, MatrixScalar),
            "m_mult" => OperationKind::new(Multiply, MatrixMatrix),
            "s_mult" => OperationKind::new(Multiply, MatrixScalar),
            "m_div" => OperationKind::new(Divide, MatrixMatrix),
            "s_div" => OperationKind::new(Divide, MatrixScalar),
            "m_exp" => OperationKind::new(Power, MatrixMatrix),
            "s_exp" => OperationKind::new(Power, MatrixScalar),
            other => {
                return Err(GridError::InvalidOperation {
                    op: other.to_string(),
                    message: None,
                });
            }
        };
        Ok(kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_all_tags() {
        for kind in OperationKind::ALL {
            let tag = kind.to_string();
            assert_eq!(tag.parse::<OperationKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        let err = "M_ADD".parse::<OperationKind>().unwrap_err();
        assert_eq!(
            err,
            GridError::InvalidOperation {
                op: "M_ADD".into(),
                message: None
            }
        );
        assert!("add".parse::<OperationKind>().is_err());
        assert!("m_add ".parse::<OperationKind>().is_err());
    }

    #[test]
    fn test_operator_apply() {
        use ArithmeticOperator::*;
        assert_eq!(Add.apply(3.0, 2.0), 5.0);
        assert_eq!(Subtract.apply(3.0, 2.0), 1.0);
        assert_eq!(Multiply.apply(3.0, 2.0), 6.0);
        assert_eq!(Divide.apply(3.0, 2.0), 1.5);
        assert_eq!(Power.apply(3.0, 2.0), 9.0);
        assert_eq!(Power.apply(2.0f32, 3.0f32), 8.0f32);
    }

    #[test]
    fn test_operator_ieee_edges() {
        use ArithmeticOperator::*;
        assert_eq!(Divide.apply(1.0, 0.0), f64::INFINITY);
        assert_eq!(Divide.apply(-1.0, 0.0), f64::NEG_INFINITY);
        assert!(Divide.apply(0.0, 0.0).is_nan());
        assert!(Power.apply(-8.0, 1.0 / 3.0).is_nan());
        assert_eq!(Power.apply(-2.0, 3.0), -8.0);
    }

    #[test]
    fn test_display_names() {
        let names: Vec<String> = OperationKind::ALL.iter().map(|k| k.display_name()).collect();
        assert_eq!(
            names,
            vec![
                "Matrix Addition",
                "Scalar Addition",
                "Matrix Subtraction",
                "Scalar Subtraction",
                "Matrix Multiplication",
                "Scalar Multiplication",
                "Matrix Division",
                "Scalar Division",
                "Matrix Exponentiation",
                "Scalar Exponentiation",
            ]
        );
    }

    #[test]
    fn test_commutative_flags() {
        assert!(ArithmeticOperator::Add.is_commutative());
        assert!(ArithmeticOperator::Multiply.is_commutative());
        assert!(!ArithmeticOperator::Subtract.is_commutative());
        assert!(!ArithmeticOperator::Divide.is_commutative());
        assert!(!ArithmeticOperator::Power.is_commutative());
    }
}
