// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under MIT License.

//! # Arithmetic Routing
//!
//! Public entry-points. Each resolves an operation tag into an
//! [`OperationKind`] before touching any data, then runs the kernel
//! matching the tag's mode.

use crate::Grid;
use crate::enums::error::GridError;
use crate::enums::operand::Operand;
use crate::enums::operators::{OperationKind, OperationMode};
use crate::kernels::arithmetic::{apply_grid_grid, apply_grid_scalar};

/// Applies the operation named by `op` to two grids.
///
/// - `m_*` tags: elementwise, both grids must have the same shape.
/// - `s_*` tags: `rhs[0][0]` is used as the scalar, via
///   [`apply_scalar_from_grid`].
///
/// # Errors
/// - `InvalidOperation` for an unknown tag.
/// - `DimensionMismatch` for `m_*` tags on differently shaped grids.
///
/// # Example
/// ```rust
/// use gridwise::{apply, grid};
///
/// let a = grid![[1, 2], [3, 4]].unwrap();
/// let b = grid![[5, 6], [7, 8]].unwrap();
/// let sum = apply("m_add", &a, &b).unwrap();
/// assert_eq!(sum.to_rows(), vec![vec![6.0, 8.0], vec![10.0, 12.0]]);
/// ```
pub fn apply(op: &str, lhs: &Grid, rhs: &Grid) -> Result<Grid, GridError> {
    apply_kind(op.parse()?, lhs, rhs)
}

/// Applies the scalar operation named by `op` between every cell and `scalar`.
///
/// # Errors
/// `InvalidOperation` for an unknown tag or an `m_*` tag.
///
/// # Example
/// ```rust
/// use gridwise::{apply_scalar, grid};
///
/// let a = grid![[1, 2], [3, 4]].unwrap();
/// let sq = apply_scalar("s_exp", &a, 2.0).unwrap();
/// assert_eq!(sq.to_rows(), vec![vec![1.0, 4.0], vec![9.0, 16.0]]);
/// ```
pub fn apply_scalar(op: &str, grid: &Grid, scalar: f64) -> Result<Grid, GridError> {
    apply_kind(op.parse()?, grid, scalar)
}

/// Scalar operation whose scalar is element `[0][0]` of `scalar_grid`.
///
/// Other cells of `scalar_grid` are ignored, and its shape need not
/// match `grid`.
///
/// # Errors
/// `InvalidOperation` for an unknown tag or an `m_*` tag.
pub fn apply_scalar_from_grid(
    op: &str,
    grid: &Grid,
    scalar_grid: &Grid,
) -> Result<Grid, GridError> {
    let kind: OperationKind = op.parse()?;
    if !kind.is_scalar() {
        return Err(expected_scalar(kind));
    }
    Ok(scalar_from_grid(kind, grid, scalar_grid))
}

/// Routes a grid operand to [`apply`] and a scalar operand to [`apply_scalar`].
///
/// # Example
/// ```rust
/// use gridwise::{apply_operand, grid};
///
/// let a = grid![[1, 2], [3, 4]].unwrap();
/// let doubled = apply_operand("s_mult", &a, 2.0).unwrap();
/// let summed = apply_operand("m_add", &a, &a).unwrap();
/// assert_eq!(doubled, summed);
/// ```
pub fn apply_operand<'a>(
    op: &str,
    lhs: &Grid,
    rhs: impl Into<Operand<'a>>,
) -> Result<Grid, GridError> {
    apply_kind(op.parse()?, lhs, rhs)
}

/// Runs an already resolved [`OperationKind`].
///
/// Every tag-based entry point lands here after parsing.
///
/// # Errors
/// - `InvalidOperation` for a scalar operand with an `m_*` kind.
/// - `DimensionMismatch` for `m_*` kinds on differently shaped grids.
pub fn apply_kind<'a>(
    kind: OperationKind,
    lhs: &Grid,
    rhs: impl Into<Operand<'a>>,
) -> Result<Grid, GridError> {
    match (kind.mode, rhs.into()) {
        (OperationMode::MatrixMatrix, Operand::Grid(rhs)) => {
            log::debug!("apply: {} lhs {:?} rhs {:?}", kind, lhs.shape(), rhs.shape());
            apply_grid_grid(lhs, rhs, kind.op)
        }
        (OperationMode::MatrixMatrix, Operand::Scalar(_)) => Err(expected_scalar(kind)),
        (OperationMode::MatrixScalar, Operand::Grid(scalar_grid)) => {
            Ok(scalar_from_grid(kind, lhs, scalar_grid))
        }
        (OperationMode::MatrixScalar, Operand::Scalar(scalar)) => {
            log::debug!("apply_scalar: {} grid {:?} scalar {}", kind, lhs.shape(), scalar);
            Ok(apply_grid_scalar(lhs, scalar, kind.op))
        }
    }
}

fn expected_scalar(kind: OperationKind) -> GridError {
    GridError::InvalidOperation {
        op: kind.to_string(),
        message: Some(format!(
            "expected a scalar operation, use 's_{}' or pass a grid operand",
            kind.op.suffix()
        )),
    }
}

fn scalar_from_grid(kind: OperationKind, grid: &Grid, scalar_grid: &Grid) -> Grid {
    let scalar = scalar_grid.first();
    log::debug!(
        "{}: taking scalar {} from [0][0] of {:?} grid",
        kind,
        scalar,
        scalar_grid.shape()
    );
    apply_grid_scalar(grid, scalar, kind.op)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid;

    fn a() -> Grid {
        grid![[1, 2], [3, 4]].unwrap()
    }

    fn b() -> Grid {
        grid![[5, 6], [7, 8]].unwrap()
    }

    #[test]
    fn test_apply_matrix_tags() {
        assert_eq!(
            apply("m_add", &a(), &b()).unwrap().to_rows(),
            vec![vec![6.0, 8.0], vec![10.0, 12.0]]
        );
        assert_eq!(
            apply("m_sub", &a(), &b()).unwrap().to_rows(),
            vec![vec![-4.0, -4.0], vec![-4.0, -4.0]]
        );
        assert_eq!(
            apply("m_mult", &a(), &b()).unwrap().to_rows(),
            vec![vec![5.0, 12.0], vec![21.0, 32.0]]
        );
        assert_eq!(
            apply("m_exp", &a(), &a()).unwrap().to_rows(),
            vec![vec![1.0, 4.0], vec![27.0, 256.0]]
        );
    }

    #[test]
    fn test_apply_scalar_tag_uses_first_cell() {
        let s = grid![[10, 99], [99, 99]].unwrap();
        assert_eq!(
            apply("s_add", &a(), &s).unwrap().to_rows(),
            vec![vec![11.0, 12.0], vec![13.0, 14.0]]
        );
        // Scalar grid shape is irrelevant
        let one = grid![[2]].unwrap();
        assert_eq!(apply("s_mult", &a(), &one).unwrap(), apply_scalar("s_mult", &a(), 2.0).unwrap());
    }

    #[test]
    fn test_apply_unknown_tag() {
        assert_eq!(
            apply("m_xyz", &a(), &b()).unwrap_err(),
            GridError::InvalidOperation {
                op: "m_xyz".into(),
                message: None
            }
        );
        assert!(apply_scalar("s_xyz", &a(), 1.0).is_err());
        assert!(apply_scalar_from_grid("", &a(), &b()).is_err());
    }

    #[test]
    fn test_apply_scalar_rejects_matrix_tag() {
        let err = apply_scalar("m_add", &a(), 1.0).unwrap_err();
        match err {
            GridError::InvalidOperation { op, message } => {
                assert_eq!(op, "m_add");
                assert!(message.unwrap().contains("s_add"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(matches!(
            apply_scalar_from_grid("m_mult", &a(), &b()),
            Err(GridError::InvalidOperation { .. })
        ));
    }

    #[test]
    fn test_apply_dimension_mismatch() {
        let wide = Grid::zeros(2, 3).unwrap();
        let tall = Grid::zeros(3, 2).unwrap();
        assert!(matches!(
            apply("m_add", &wide, &tall),
            Err(GridError::DimensionMismatch { .. })
        ));
        // Scalar tags do not compare shapes
        assert!(apply("s_add", &wide, &tall).is_ok());
    }

    #[test]
    fn test_apply_operand_routes_by_kind() {
        let via_scalar = apply_operand("s_sub", &a(), 1.0).unwrap();
        assert_eq!(via_scalar.to_rows(), vec![vec![0.0, 1.0], vec![2.0, 3.0]]);

        let b = b();
        let via_grid = apply_operand("m_div", &b, &a()).unwrap();
        assert_eq!(via_grid.to_rows(), vec![vec![5.0, 3.0], vec![7.0 / 3.0, 2.0]]);

        // A scalar operand cannot satisfy a matrix tag
        assert!(apply_operand("m_add", &a(), 1.0).is_err());
    }

    #[test]
    fn test_apply_kind_skips_parsing() {
        let kind: OperationKind = "s_exp".parse().unwrap();
        assert_eq!(apply_kind(kind, &a(), 2.0).unwrap(), apply_scalar("s_exp", &a(), 2.0).unwrap());

        let kind: OperationKind = "m_sub".parse().unwrap();
        assert_eq!(apply_kind(kind, &a(), &b()).unwrap(), apply("m_sub", &a(), &b()).unwrap());
        assert!(matches!(
            apply_kind(kind, &a(), 1.0),
            Err(GridError::InvalidOperation { .. })
        ));
    }

    #[test]
    fn test_scalar_division_by_zero() {
        let one = grid![[1.0]].unwrap();
        let out = apply_scalar("s_div", &one, 0.0).unwrap();
        assert_eq!(out.get(0, 0), f64::INFINITY);
        let out = apply_scalar("s_div", &grid![[0.0, -1.0]].unwrap(), 0.0).unwrap();
        assert!(out.get(0, 0).is_nan());
        assert_eq!(out.get(0, 1), f64::NEG_INFINITY);
    }
}
