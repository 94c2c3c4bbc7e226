//! # Operand Enum Module
//!
//! Right-hand side of an operation: a grid for elementwise operations, or
//! a scalar for broadcast. `From` impls let entry points accept
//! `impl Into<Operand>` so callers pass `&grid` or `2.0` directly.

use crate::Grid;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operand<'a> {
    Grid(&'a Grid),
    Scalar(f64),
}

impl<'a> From<&'a Grid> for Operand<'a> {
    fn from(grid: &'a Grid) -> Self {
        Operand::Grid(grid)
    }
}

impl From<f64> for Operand<'_> {
    fn from(value: f64) -> Self {
        Operand::Scalar(value)
    }
}

/// Owned copy of an [`Operand`], kept by records that outlive the call.
#[derive(Debug, Clone, PartialEq)]
pub enum OwnedOperand {
    Grid(Grid),
    Scalar(f64),
}

impl OwnedOperand {
    /// Borrows back as an [`Operand`].
    pub fn as_operand(&self) -> Operand<'_> {
        match self {
            OwnedOperand::Grid(g) => Operand::Grid(g),
            OwnedOperand::Scalar(s) => Operand::Scalar(*s),
        }
    }
}

impl From<Operand<'_>> for OwnedOperand {
    fn from(operand: Operand<'_>) -> Self {
        match operand {
            Operand::Grid(g) => OwnedOperand::Grid(g.clone()),
            Operand::Scalar(s) => OwnedOperand::Scalar(s),
        }
    }
}
