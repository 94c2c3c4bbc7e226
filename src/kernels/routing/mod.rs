// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under MIT License.

//! # Routing Module
//!
//! Resolves operation tags and dispatches to the grid-grid or
//! grid-scalar kernel.

pub mod arithmetic;

pub use arithmetic::{apply, apply_kind, apply_operand, apply_scalar, apply_scalar_from_grid};
