// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under MIT License.

//! # Arithmetic Kernels Module
//!
//! Cell-wise traversal kernels for grid-grid and grid-scalar arithmetic.

pub mod dispatch;

pub use dispatch::{apply_grid_grid, apply_grid_scalar};
