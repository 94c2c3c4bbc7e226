// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under MIT License.

//! # Dispatch Module
//!
//! Elementwise kernels over flat row-major buffers.
//!
//! The slice kernels are generic over `num_traits::Float`; the grid kernels
//! wrap them for `f64` grids. With `parallel_proc` the per-cell map runs on
//! `rayon`, which produces the same output as the sequential loop since no
//! cell depends on another.

use num_traits::Float;
use vec64::Vec64;

use crate::Grid;
use crate::enums::error::GridError;
use crate::enums::operators::ArithmeticOperator;

#[cfg(feature = "parallel_proc")]
use rayon::prelude::*;
#[cfg(feature = "parallel_proc")]
use vec64::vec64;

/// Applies `op` pairwise over two equal-length slices.
#[cfg(not(feature = "parallel_proc"))]
#[inline]
pub fn zip_map<T: Float>(lhs: &[T], rhs: &[T], op: ArithmeticOperator) -> Vec64<T> {
    debug_assert_eq!(lhs.len(), rhs.len(), "zip_map: length mismatch");
    lhs.iter()
        .zip(rhs.iter())
        .map(|(&a, &b)| op.apply(a, b))
        .collect()
}

/// Applies `op` pairwise over two equal-length slices.
#[cfg(feature = "parallel_proc")]
#[inline]
pub fn zip_map<T: Float + Send + Sync>(lhs: &[T], rhs: &[T], op: ArithmeticOperator) -> Vec64<T> {
    debug_assert_eq!(lhs.len(), rhs.len(), "zip_map: length mismatch");
    let mut out: Vec64<T> = vec64![T::zero(); lhs.len()];
    out.as_mut_slice()
        .par_iter_mut()
        .zip(lhs.par_iter().zip(rhs.par_iter()))
        .for_each(|(o, (&a, &b))| *o = op.apply(a, b));
    out
}

/// Applies `op` between every element and `scalar`.
#[cfg(not(feature = "parallel_proc"))]
#[inline]
pub fn scalar_map<T: Float>(data: &[T], scalar: T, op: ArithmeticOperator) -> Vec64<T> {
    data.iter().map(|&a| op.apply(a, scalar)).collect()
}

/// Applies `op` between every element and `scalar`.
#[cfg(feature = "parallel_proc")]
#[inline]
pub fn scalar_map<T: Float + Send + Sync>(data: &[T], scalar: T, op: ArithmeticOperator) -> Vec64<T> {
    let mut out: Vec64<T> = vec64![T::zero(); data.len()];
    out.as_mut_slice()
        .par_iter_mut()
        .zip(data.par_iter())
        .for_each(|(o, &a)| *o = op.apply(a, scalar));
    out
}

/// Elementwise `op(lhs[i][j], rhs[i][j])` into a new grid.
///
/// Errors with `DimensionMismatch` before allocating if the shapes differ.
pub fn apply_grid_grid(
    lhs: &Grid,
    rhs: &Grid,
    op: ArithmeticOperator,
) -> Result<Grid, GridError> {
    let (rows, cols) = lhs.shape();
    if rhs.shape() != (rows, cols) {
        return Err(GridError::DimensionMismatch {
            expected: (rows, cols),
            found: rhs.shape(),
        });
    }
    log::trace!(
        "apply_grid_grid: {:?} over {} cells (parallel: {})",
        op,
        lhs.n_cells(),
        cfg!(feature = "parallel_proc")
    );
    let data = zip_map(lhs.as_slice(), rhs.as_slice(), op);
    Ok(Grid::from_parts(data, rows, cols))
}

/// `op(grid[i][j], scalar)` into a new grid.
pub fn apply_grid_scalar(grid: &Grid, scalar: f64, op: ArithmeticOperator) -> Grid {
    let (rows, cols) = grid.shape();
    log::trace!(
        "apply_grid_scalar: {:?} {} over {} cells (parallel: {})",
        op,
        scalar,
        grid.n_cells(),
        cfg!(feature = "parallel_proc")
    );
    let data = scalar_map(grid.as_slice(), scalar, op);
    Grid::from_parts(data, rows, cols)
}
