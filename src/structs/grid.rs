//! # Grid Module - *Dense row-major f64 grid*
//!
//! Rectangular two-dimensional grid of `f64` values backed by a single
//! 64-byte aligned buffer, the operand type of every elementwise kernel.

use std::fmt;
use std::ops::Index;

use vec64::{Vec64, vec64};

use crate::enums::error::GridError;

/// Rows shown by the `Debug` preview.
const PREVIEW_ROWS: usize = 6;
/// Columns shown per row by the `Debug` preview.
const PREVIEW_COLS: usize = 8;

/// # Grid
///
/// Row-major dense grid.
///
/// ### Description
/// Every constructor validates its input, so a `Grid` that exists is always
/// rectangular with at least one row and one column, and its buffer holds
/// exactly `nrows * ncols` cells. The library never mutates a grid; every
/// operation produces a new one.
///
/// ### Properties
/// - `nrows`: Number of rows.
/// - `ncols`: Number of columns.
/// - `data`: Flat buffer in row-major order, `nrows * ncols` long.
///
/// ### Non-finite values
/// - Cells may hold `NaN` or `±inf`. Arithmetic follows IEEE-754 and never
/// rejects them.
#[repr(C, align(64))]
#[derive(Clone, PartialEq)]
pub struct Grid {
    nrows: usize,
    ncols: usize,
    data: Vec64<f64>,
}

impl Grid {
    /// Builds a grid from a sequence of rows.
    ///
    /// Fails with `MalformedGrid` if there are no rows, the first row is
    /// empty, or any row differs in length from the first.
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self, GridError> {
        let Some(first) = rows.first() else {
            return Err(GridError::MalformedGrid {
                message: "grid has no rows".to_string(),
            });
        };
        let nrows = rows.len();
        let ncols = first.as_ref().len();
        let len = Self::checked_len(nrows, ncols)?;

        let mut data = Vec64::with_capacity(len);
        for (idx, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != ncols {
                return Err(GridError::MalformedGrid {
                    message: format!(
                        "row {} has {} values, expected {} (ragged rows)",
                        idx,
                        row.len(),
                        ncols
                    ),
                });
            }
            data.extend_from_slice(row);
        }
        Ok(Grid { nrows, ncols, data })
    }

    /// Constructs a grid from a flat buffer in row-major order.
    pub fn from_flat(data: Vec64<f64>, nrows: usize, ncols: usize) -> Result<Self, GridError> {
        let len = Self::checked_len(nrows, ncols)?;
        if data.len() != len {
            return Err(GridError::MalformedGrid {
                message: format!(
                    "buffer of length {} does not match shape {} × {}",
                    data.len(),
                    nrows,
                    ncols
                ),
            });
        }
        Ok(Grid { nrows, ncols, data })
    }

    /// Grid with every cell set to `value`.
    pub fn filled(nrows: usize, ncols: usize, value: f64) -> Result<Self, GridError> {
        let len = Self::checked_len(nrows, ncols)?;
        Ok(Grid {
            nrows,
            ncols,
            data: vec64![value; len],
        })
    }

    /// Zero-filled grid.
    pub fn zeros(nrows: usize, ncols: usize) -> Result<Self, GridError> {
        Self::filled(nrows, ncols, 0.0)
    }

    /// `1.0` on the leading diagonal, `0.0` elsewhere. Need not be square.
    pub fn identity(nrows: usize, ncols: usize) -> Result<Self, GridError> {
        let mut grid = Self::zeros(nrows, ncols)?;
        for i in 0..nrows.min(ncols) {
            grid.data[i * ncols + i] = 1.0;
        }
        Ok(grid)
    }

    /// Whole numbers drawn uniformly from `-10..10`.
    ///
    /// ```rust
    /// use gridwise::Grid;
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    ///
    /// let mut rng = StdRng::seed_from_u64(7);
    /// let g = Grid::random(2, 3, &mut rng).unwrap();
    /// assert!(g.as_slice().iter().all(|v| (-10.0..10.0).contains(v) && v.fract() == 0.0));
    /// ```
    #[cfg(feature = "random")]
    pub fn random<G: rand::Rng>(
        nrows: usize,
        ncols: usize,
        rng: &mut G,
    ) -> Result<Self, GridError> {
        let len = Self::checked_len(nrows, ncols)?;
        let data: Vec64<f64> = (0..len).map(|_| rng.gen_range(-10i32..10) as f64).collect();
        Ok(Grid { nrows, ncols, data })
    }

    /// Wraps a kernel output buffer. The caller guarantees the shape.
    #[inline]
    pub(crate) fn from_parts(data: Vec64<f64>, nrows: usize, ncols: usize) -> Self {
        debug_assert!(nrows > 0 && ncols > 0, "Grid must be non-empty");
        debug_assert_eq!(Some(data.len()), nrows.checked_mul(ncols), "Grid shape does not match buffer length");
        Grid { nrows, ncols, data }
    }

    /// Cell count for a shape, rejecting zero dimensions and overflow.
    fn checked_len(nrows: usize, ncols: usize) -> Result<usize, GridError> {
        if nrows == 0 {
            return Err(GridError::MalformedGrid {
                message: "grid has no rows".to_string(),
            });
        }
        if ncols == 0 {
            return Err(GridError::MalformedGrid {
                message: "grid rows are empty".to_string(),
            });
        }
        nrows.checked_mul(ncols).ok_or_else(|| GridError::MalformedGrid {
            message: format!("shape {} × {} overflows the addressable cell count", nrows, ncols),
        })
    }

    #[inline]
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    #[inline]
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// `(rows, cols)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.nrows, self.ncols)
    }

    /// Total number of cells.
    #[inline]
    pub fn n_cells(&self) -> usize {
        self.data.len()
    }

    /// Returns the value at (row, col) (0-based). Panics if out of bounds.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        assert!(row < self.nrows, "Row out of bounds");
        assert!(col < self.ncols, "Col out of bounds");
        self.data[row * self.ncols + col]
    }

    /// Returns the value at (row, col), or `None` if out of bounds.
    #[inline]
    pub fn try_get(&self, row: usize, col: usize) -> Option<f64> {
        (row < self.nrows && col < self.ncols).then(|| self.data[row * self.ncols + col])
    }

    /// Element `[0][0]`.
    #[inline]
    pub fn first(&self) -> f64 {
        self.data[0]
    }

    /// Returns a single row as a slice, panics if row out of bounds.
    #[inline]
    pub fn row(&self, row: usize) -> &[f64] {
        assert!(row < self.nrows, "Row out of bounds");
        &self.data.as_slice()[(row * self.ncols)..((row + 1) * self.ncols)]
    }

    /// Iterates the rows as slices.
    #[inline]
    pub fn rows(&self) -> std::slice::ChunksExact<'_, f64> {
        self.data.as_slice().chunks_exact(self.ncols)
    }

    /// Returns an immutable reference to the flat row-major buffer.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        self.data.as_slice()
    }

    /// Copies the grid out as a vector of rows.
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.rows().map(|r| r.to_vec()).collect()
    }
}

impl Index<(usize, usize)> for Grid {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        assert!(row < self.nrows, "Row out of bounds");
        assert!(col < self.ncols, "Col out of bounds");
        &self.data[row * self.ncols + col]
    }
}

// Preview of the leading rows and columns
impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Grid {}×{} (row-major)", self.nrows, self.ncols)?;
        for row in self.rows().take(PREVIEW_ROWS) {
            write!(f, "\n  [")?;
            for (j, v) in row.iter().take(PREVIEW_COLS).enumerate() {
                if j > 0 {
                    write!(f, ",")?;
                }
                write!(f, " {:>9.4}", v)?;
            }
            if row.len() > PREVIEW_COLS {
                write!(f, ", … +{} cols", row.len() - PREVIEW_COLS)?;
            }
            write!(f, " ]")?;
        }
        if self.nrows > PREVIEW_ROWS {
            write!(f, "\n  … +{} rows", self.nrows - PREVIEW_ROWS)?;
        }
        Ok(())
    }
}

/// One `[a, b, ...]` line per row. Honours the precision flag, so
/// `format!("{:.2}", grid)` prints two decimals per cell.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "[")?;
            for (j, v) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, ", ")?;
                }
                match f.precision() {
                    Some(p) => write!(f, "{:.*}", p, v)?,
                    None => write!(f, "{}", v)?,
                }
            }
            write!(f, "]")?;
        }
        Ok(())
    }
}

impl TryFrom<Vec<Vec<f64>>> for Grid {
    type Error = GridError;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self, Self::Error> {
        Grid::from_rows(&rows)
    }
}

impl TryFrom<&[Vec<f64>]> for Grid {
    type Error = GridError;

    fn try_from(rows: &[Vec<f64>]) -> Result<Self, Self::Error> {
        Grid::from_rows(rows)
    }
}

impl From<Grid> for Vec<Vec<f64>> {
    fn from(grid: Grid) -> Self {
        grid.to_rows()
    }
}

// ===================== Serde ======================

/// Serialises as nested rows, e.g. `[[1.0, 2.0], [3.0, 4.0]]`.
#[cfg(feature = "serde")]
impl serde::Serialize for Grid {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeSeq;

        let mut seq = serializer.serialize_seq(Some(self.nrows))?;
        for row in self.rows() {
            seq.serialize_element(row)?;
        }
        seq.end()
    }
}

/// Reads nested rows through [`Grid::from_rows`], so ragged or empty
/// input is rejected.
#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Grid {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let rows = <Vec<Vec<f64>> as serde::Deserialize>::deserialize(deserializer)?;
        Grid::from_rows(&rows).map_err(serde::de::Error::custom)
    }
}

// ===================== Iterators ======================

impl<'a> IntoIterator for &'a Grid {
    type Item = &'a f64;
    type IntoIter = std::slice::Iter<'a, f64>;
    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.data.as_slice().iter()
    }
}
