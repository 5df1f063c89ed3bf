use std::fmt;

use crate::{
    error::MatrixError,
    interpreter::value::{
        grid::{Grid, UpperTriangle},
        normalize::normalize,
    },
};

/// Result type used by the value model.
pub type MatrixResult<T> = Result<T, MatrixError>;

/// A matrix value in one of its specialised representations.
///
/// Every variant describes the same logical thing, an immutable rectangular
/// grid of `f64`, but stores only what its invariant leaves undetermined.
/// Values produced by this crate are always normalized: the variant is the
/// most specific one whose invariant the content satisfies (see
/// [`normalize`]). Constructing a variant by hand skips that step; passing
/// the result through [`normalize`] restores it.
///
/// All operations read their operands through [`Matrix::rows`],
/// [`Matrix::cols`] and [`Matrix::get`], so the representation of the
/// right-hand operand never changes the result.
#[derive(Debug, Clone)]
pub enum Matrix {
    /// Any rectangular grid, including the empty matrix.
    General(Grid),
    /// A `1 x 1` matrix.
    Number(f64),
    /// A matrix whose elements are all zero. Both dimensions are at least one.
    Zero {
        /// Number of rows.
        rows: usize,
        /// Number of columns.
        cols: usize,
    },
    /// A matrix with as many rows as columns.
    Square(Grid),
    /// A square matrix with nothing but zeros below the main diagonal.
    Triangular(UpperTriangle),
    /// A square matrix with nothing but zeros off the main diagonal.
    Diagonal(Vec<f64>),
    /// The identity matrix of the given size.
    Identity(usize),
}

impl Matrix {
    /// Builds a normalized matrix from a list of rows.
    ///
    /// # Errors
    /// Returns `MatrixError::Shape` if the rows have different lengths.
    ///
    /// # Example
    /// ```
    /// use matix::interpreter::value::core::Matrix;
    ///
    /// let m = Matrix::from_rows(vec![vec![1.0, 0.0], vec![0.0, 1.0]]).unwrap();
    /// assert_eq!(m.label(), "Identity Matrix");
    /// assert!(matches!(m, Matrix::Identity(2)));
    /// ```
    pub fn from_rows(rows: Vec<Vec<f64>>) -> MatrixResult<Self> {
        Ok(normalize(Self::General(Grid::from_rows(rows)?)))
    }

    /// The empty matrix, written `[]`.
    #[must_use]
    pub const fn empty() -> Self {
        Self::General(Grid::empty())
    }

    /// A normalized all-zero matrix of the given shape; `1 x 1` gives
    /// `Number(0.0)`.
    ///
    /// # Errors
    /// Returns `MatrixError::Shape` if either dimension is zero. The empty
    /// matrix is [`Matrix::empty`].
    ///
    /// # Example
    /// ```
    /// use matix::interpreter::value::core::Matrix;
    ///
    /// assert_eq!(Matrix::zeros(2, 3).unwrap().label(), "Zero Matrix");
    /// assert_eq!(Matrix::zeros(1, 1).unwrap(), Matrix::Number(0.0));
    /// assert!(Matrix::zeros(0, 3).is_err());
    /// ```
    pub fn zeros(rows: usize, cols: usize) -> MatrixResult<Self> {
        match (rows, cols) {
            (0, _) | (_, 0) => Err(MatrixError::shape(format!("Zero matrix cannot be {rows}x{cols}"))),
            (1, 1) => Ok(Self::Number(0.0)),
            _ => Ok(Self::Zero { rows, cols }),
        }
    }

    /// A normalized identity matrix of the given size.
    #[must_use]
    pub const fn identity(size: usize) -> Self {
        match size {
            0 => Self::empty(),
            1 => Self::Number(1.0),
            _ => Self::Identity(size),
        }
    }

    /// Number of rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        match self {
            Self::General(grid) | Self::Square(grid) => grid.rows(),
            Self::Number(_) => 1,
            Self::Zero { rows, .. } => *rows,
            Self::Triangular(triangle) => triangle.size(),
            Self::Diagonal(diagonal) => diagonal.len(),
            Self::Identity(size) => *size,
        }
    }

    /// Number of columns.
    #[must_use]
    pub fn cols(&self) -> usize {
        match self {
            Self::General(grid) | Self::Square(grid) => grid.cols(),
            Self::Zero { cols, .. } => *cols,
            _ => self.rows(),
        }
    }

    /// Returns the element at `(row, col)`.
    ///
    /// Elements that a variant does not store are derived from its invariant.
    ///
    /// # Errors
    /// Returns `MatrixError::Index` if the position lies outside the matrix.
    ///
    /// # Example
    /// ```
    /// use matix::interpreter::value::core::Matrix;
    ///
    /// let identity = Matrix::identity(3);
    /// assert_eq!(identity.get(1, 1).unwrap(), 1.0);
    /// assert_eq!(identity.get(0, 2).unwrap(), 0.0);
    /// assert!(identity.get(3, 0).is_err());
    /// ```
    pub fn get(&self, row: usize, col: usize) -> MatrixResult<f64> {
        if row >= self.rows() || col >= self.cols() {
            return Err(MatrixError::Index { row,
                                            col,
                                            rows: self.rows(),
                                            cols: self.cols() });
        }
        Ok(self.at(row, col))
    }

    /// Element access for positions already known to be in range.
    pub(crate) fn at(&self, row: usize, col: usize) -> f64 {
        match self {
            Self::General(grid) | Self::Square(grid) => grid.get(row, col),
            Self::Number(n) => *n,
            Self::Zero { .. } => 0.0,
            Self::Triangular(triangle) => triangle.get(row, col),
            Self::Diagonal(diagonal) if row == col => diagonal[row],
            Self::Identity(_) if row == col => 1.0,
            Self::Diagonal(_) | Self::Identity(_) => 0.0,
        }
    }

    /// Returns the single element of a `1 x 1` matrix.
    #[must_use]
    pub fn number(&self) -> Option<f64> {
        self.is_number().then(|| self.at(0, 0))
    }

    /// Copies the content into a dense grid.
    #[must_use]
    pub fn to_grid(&self) -> Grid {
        match self {
            Self::General(grid) | Self::Square(grid) => grid.clone(),
            _ => Grid::from_fn(self.rows(), self.cols(), |row, col| self.at(row, col)),
        }
    }

    /// Copies the content into a list of rows.
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        (0..self.rows()).map(|row| (0..self.cols()).map(|col| self.at(row, col)).collect())
                        .collect()
    }

    /// Returns `true` if the matrix has no rows or no columns.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows() == 0 || self.cols() == 0
    }

    /// Returns `true` if the matrix is `1 x 1`.
    #[must_use]
    pub fn is_number(&self) -> bool {
        self.rows() == 1 && self.cols() == 1
    }

    /// Returns `true` if every element is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.all(|_, _, value| value == 0.0)
    }

    /// Returns `true` if the matrix has as many rows as columns.
    #[must_use]
    pub fn is_square(&self) -> bool {
        self.rows() == self.cols()
    }

    /// Returns `true` if every element below the main diagonal is zero.
    #[must_use]
    pub fn is_triangular(&self) -> bool {
        self.all(|row, col, value| row <= col || value == 0.0)
    }

    /// Returns `true` if every element off the main diagonal is zero.
    #[must_use]
    pub fn is_diagonal(&self) -> bool {
        self.all(|row, col, value| row == col || value == 0.0)
    }

    /// Returns `true` for a square diagonal matrix with ones on the diagonal.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.is_square() && self.all(|row, col, value| value == if row == col { 1.0 } else { 0.0 })
    }

    fn all(&self, predicate: impl Fn(usize, usize, f64) -> bool) -> bool {
        (0..self.rows()).all(|row| (0..self.cols()).all(|col| predicate(row, col, self.at(row, col))))
    }

    /// The classification label shown above a rendered result.
    ///
    /// # Example
    /// ```
    /// use matix::interpreter::value::core::Matrix;
    ///
    /// assert_eq!(Matrix::empty().label(), "Empty Matrix");
    /// assert_eq!(Matrix::zeros(2, 3).unwrap().label(), "Zero Matrix");
    /// assert_eq!(Matrix::Number(4.0).label(), "Number");
    /// ```
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::General(_) if self.is_empty() => "Empty Matrix",
            Self::General(_) => "Matrix",
            Self::Number(_) => "Number",
            Self::Zero { .. } => "Zero Matrix",
            Self::Square(_) => "Square Matrix",
            Self::Triangular(_) => "Triangular Matrix",
            Self::Diagonal(_) => "Diagonal Matrix",
            Self::Identity(_) => "Identity Matrix",
        }
    }
}

/// Two matrices are equal when they have the same shape and the same
/// elements, whatever their representations.
impl PartialEq for Matrix {
    fn eq(&self, other: &Self) -> bool {
        self.rows() == other.rows()
        && self.cols() == other.cols()
        && self.all(|row, col, value| value == other.at(row, col))
    }
}

impl UpperTriangle {
    pub(crate) fn from_matrix(matrix: &Matrix) -> Self {
        Self::from_fn(matrix.rows(), |row, col| matrix.at(row, col))
    }
}

/// Renders one line per row; each element is followed by a single space.
///
/// The same text is what the storage collaborator writes to disk, so the
/// element formatting is the shortest one that reads back to the same `f64`.
impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows() {
            for col in 0..self.cols() {
                write!(f, "{} ", self.at(row, col))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
