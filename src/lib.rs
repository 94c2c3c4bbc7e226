//! Copyright © 2025 Peter Garfield Bower. All rights reserved.
//!
//! # Gridwise
//!
//! Elementwise and scalar-broadcast arithmetic over dense two-dimensional
//! `f64` grids, selected by operation tag.
//!
//! | tag | operation |
//! |---|---|
//! | `m_add` / `s_add` | `a + b` |
//! | `m_sub` / `s_sub` | `a - b` |
//! | `m_mult` / `s_mult` | `a * b` |
//! | `m_div` / `s_div` | `a / b` |
//! | `m_exp` / `s_exp` | `a.powf(b)` |
//!
//! `m_` tags pair cells of two equally shaped grids, `s_` tags apply one
//! scalar to every cell. Results are always new grids.
//!
//! ```rust
//! use gridwise::{apply, apply_scalar, grid};
//!
//! let a = grid![[1, 2], [3, 4]].unwrap();
//! let b = grid![[5, 6], [7, 8]].unwrap();
//!
//! assert_eq!(apply("m_mult", &a, &b).unwrap().to_rows(), vec![vec![5.0, 12.0], vec![21.0, 32.0]]);
//! assert_eq!(apply_scalar("s_mult", &a, 2.0).unwrap().to_rows(), vec![vec![2.0, 4.0], vec![6.0, 8.0]]);
//! ```

pub mod enums {
    pub mod error;
    pub mod operand;
    pub mod operators;
}

pub mod structs {
    pub mod grid;
    #[cfg(feature = "history")]
    pub mod history;
}

pub mod kernels {
    pub mod arithmetic;
    pub mod routing;
}

pub mod macros;

pub use enums::error::GridError;
pub use enums::operand::{Operand, OwnedOperand};
pub use enums::operators::{ArithmeticOperator, OperationKind, OperationMode};
pub use structs::grid::Grid;
#[cfg(feature = "history")]
pub use structs::history::{DEFAULT_HISTORY_CAPACITY, History, Metrics, OperationRecord};

pub use kernels::routing::{apply, apply_kind, apply_operand, apply_scalar, apply_scalar_from_grid};

pub use vec64::{Vec64, vec64};
