use crate::{error::MatrixError, interpreter::value::core::MatrixResult};

/// A dense, row-major grid of `f64` elements.
///
/// Backs the `General` and `Square` representations and serves as scratch
/// space for operations that build a fresh matrix before normalizing it.
/// Dimensions are stored separately so that `0 x n` and `n x 0` grids keep
/// their shape.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Grid {
    /// Creates a grid with no rows and no columns.
    #[must_use]
    pub const fn empty() -> Self {
        Self { rows: 0,
               cols: 0,
               data: Vec::new() }
    }

    /// Builds a grid from a list of rows.
    ///
    /// An empty list yields a `0 x 0` grid. A list of empty rows keeps its
    /// row count and has zero columns.
    ///
    /// # Errors
    /// Returns `MatrixError::Shape` if the rows have different lengths.
    ///
    /// # Example
    /// ```
    /// use matix::interpreter::value::grid::Grid;
    ///
    /// let grid = Grid::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
    /// assert_eq!((grid.rows(), grid.cols()), (2, 2));
    /// assert_eq!(grid.get(1, 0), 3.0);
    ///
    /// assert!(Grid::from_rows(vec![vec![1.0, 2.0], vec![3.0]]).is_err());
    /// ```
    pub fn from_rows(rows: Vec<Vec<f64>>) -> MatrixResult<Self> {
        let cols = rows.first().map_or(0, Vec::len);
        if let Some(ragged) = rows.iter().position(|row| row.len() != cols) {
            return Err(MatrixError::shape(format!("Rows have different sizes: row 0 has {cols} elements but row {ragged} has {}",
                                                  rows[ragged].len())));
        }

        Ok(Self { rows: rows.len(),
                  cols,
                  data: rows.into_iter().flatten().collect() })
    }

    /// Builds a `rows x cols` grid whose element at `(row, col)` is
    /// `element(row, col)`.
    pub fn from_fn(rows: usize, cols: usize, mut element: impl FnMut(usize, usize) -> f64) -> Self {
        let mut data = Vec::with_capacity(rows * cols);
        for row in 0..rows {
            for col in 0..cols {
                data.push(element(row, col));
            }
        }
        Self { rows, cols, data }
    }

    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Returns the element at `(row, col)`.
    ///
    /// # Panics
    /// Panics if the position lies outside the grid.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.data[row * self.cols + col]
    }

    /// Overwrites the element at `(row, col)`.
    ///
    /// # Panics
    /// Panics if the position lies outside the grid.
    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        self.data[row * self.cols + col] = value;
    }

    /// Swaps two whole rows in place.
    pub fn swap_rows(&mut self, first: usize, second: usize) {
        if first == second {
            return;
        }
        for col in 0..self.cols {
            self.data.swap(first * self.cols + col, second * self.cols + col);
        }
    }
}

/// The upper triangle of a square matrix, diagonal included.
///
/// Row `i` keeps only the `size - i` elements from the diagonal rightwards,
/// packed one after another.
#[derive(Debug, Clone, PartialEq)]
pub struct UpperTriangle {
    size:   usize,
    packed: Vec<f64>,
}

impl UpperTriangle {
    /// Copies the upper triangle of a square `size x size` matrix whose
    /// elements are produced by `element`.
    pub fn from_fn(size: usize, element: impl Fn(usize, usize) -> f64) -> Self {
        let mut packed = Vec::with_capacity(size * (size + 1) / 2);
        for row in 0..size {
            for col in row..size {
                packed.push(element(row, col));
            }
        }
        Self { size, packed }
    }

    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Returns the element at `(row, col)`; everything below the diagonal is
    /// zero.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        if row > col {
            return 0.0;
        }
        let row_start = row * self.size - row * row.saturating_sub(1) / 2;
        self.packed[row_start + col - row]
    }
}
