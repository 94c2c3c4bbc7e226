//! # Macros Module
//!
//! Literal construction helpers.

/// Builds a [`Grid`](crate::Grid) from nested row literals.
///
/// Each cell is cast with `as f64`, so integer literals are accepted.
/// Returns `Result<Grid, GridError>`, as ragged rows are rejected.
///
/// ```rust
/// use gridwise::grid;
///
/// let g = grid![[1, 2, 3], [4, 5, 6]].unwrap();
/// assert_eq!(g.ncols(), 3);
/// assert!(grid![[1, 2], [3]].is_err());
/// ```
#[macro_export]
macro_rules! grid {
    ($([$($x:expr),* $(,)?]),+ $(,)?) => {
        $crate::Grid::from_rows(&[$(::std::vec![$(($x) as f64),*]),+])
    };
}
