use crate::{
    error::MatrixError,
    interpreter::value::{
        core::{Matrix, MatrixResult},
        grid::Grid,
        normalize::normalize,
    },
    util::num::f64_to_usize_checked,
};

impl Matrix {
    /// Swaps rows and columns.
    ///
    /// Numbers, diagonal and identity matrices are their own transpose; a
    /// zero matrix only swaps its dimensions.
    ///
    /// # Example
    /// ```
    /// use matix::interpreter::value::core::Matrix;
    ///
    /// let row = Matrix::from_rows(vec![vec![1.0, 2.0, 3.0]]).unwrap();
    /// let column = row.transpose();
    /// assert_eq!((column.rows(), column.cols()), (3, 1));
    /// assert_eq!(column.transpose(), row);
    /// ```
    #[must_use]
    pub fn transpose(&self) -> Self {
        match self {
            Self::Zero { rows, cols } => Self::Zero { rows: *cols,
                                                      cols: *rows },
            Self::Number(_) | Self::Diagonal(_) | Self::Identity(_) => self.clone(),
            _ => normalize(Self::General(Grid::from_fn(self.cols(), self.rows(), |row, col| {
                                             self.at(col, row)
                                         }))),
        }
    }

    /// Places `rhs` to the right of this matrix (`a | b`).
    ///
    /// # Errors
    /// Returns `MatrixError::Shape` if the row counts differ.
    pub fn hconcat(&self, rhs: &Self) -> MatrixResult<Self> {
        if self.rows() != rhs.rows() {
            return Err(MatrixError::shape(format!("Different number of rows: {} and {}",
                                                  self.rows(),
                                                  rhs.rows())));
        }
        let split = self.cols();
        let joined = Grid::from_fn(self.rows(), split + rhs.cols(), |row, col| {
                         if col < split { self.at(row, col) } else { rhs.at(row, col - split) }
                     });
        Ok(normalize(Self::General(joined)))
    }

    /// Places `rhs` below this matrix (`a & b`).
    ///
    /// # Errors
    /// Returns `MatrixError::Shape` if the column counts differ.
    pub fn vconcat(&self, rhs: &Self) -> MatrixResult<Self> {
        if self.cols() != rhs.cols() {
            return Err(MatrixError::shape(format!("Different number of columns: {} and {}",
                                                  self.cols(),
                                                  rhs.cols())));
        }
        let split = self.rows();
        let joined = Grid::from_fn(split + rhs.rows(), self.cols(), |row, col| {
                         if row < split { self.at(row, col) } else { rhs.at(row - split, col) }
                     });
        Ok(normalize(Self::General(joined)))
    }

    /// Extracts a rectangular region (`a \ selector`).
    ///
    /// The selector is `[height width]` or `[height width & top left]`.
    /// Height and width must be positive integers, offsets non-negative
    /// integers, and the region must fit inside the matrix.
    ///
    /// # Errors
    /// Returns `MatrixError::Domain` for a malformed selector or a region that
    /// exceeds the matrix.
    ///
    /// # Example
    /// ```
    /// use matix::interpreter::value::core::Matrix;
    ///
    /// let m = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
    /// let selector = Matrix::from_rows(vec![vec![1.0, 2.0], vec![1.0, 0.0]]).unwrap();
    /// assert_eq!(m.crop(&selector).unwrap().to_rows(), vec![vec![3.0, 4.0]]);
    ///
    /// let too_tall = Matrix::from_rows(vec![vec![3.0, 1.0]]).unwrap();
    /// assert!(m.crop(&too_tall).is_err());
    /// ```
    pub fn crop(&self, selector: &Self) -> MatrixResult<Self> {
        let region = CropRegion::from_selector(selector)?;
        let fits = |offset: usize, extent: usize, limit: usize| {
            offset.checked_add(extent).is_some_and(|end| end <= limit)
        };
        if !fits(region.top, region.height, self.rows()) || !fits(region.left, region.width, self.cols())
        {
            return Err(MatrixError::domain(format!("Crop region {}x{} at ({}, {}) exceeds a {}x{} matrix",
                                                   region.height,
                                                   region.width,
                                                   region.top,
                                                   region.left,
                                                   self.rows(),
                                                   self.cols())));
        }

        let cropped = Grid::from_fn(region.height, region.width, |row, col| {
                          self.at(row + region.top, col + region.left)
                      });
        Ok(normalize(Self::General(cropped)))
    }
}

/// A sub-region decoded from a crop selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct CropRegion {
    height: usize,
    width:  usize,
    top:    usize,
    left:   usize,
}

impl CropRegion {
    fn from_selector(selector: &Matrix) -> MatrixResult<Self> {
        if selector.cols() != 2 || !matches!(selector.rows(), 1 | 2) {
            return Err(invalid_selector());
        }
        let extent = |value: f64| {
            if value <= 0.0 {
                return Err(invalid_selector());
            }
            f64_to_usize_checked(value, f64::EPSILON, invalid_selector())
        };
        let offset = |value: f64| f64_to_usize_checked(value, f64::EPSILON, invalid_selector());

        let (top, left) = if selector.rows() == 2 {
            (offset(selector.at(1, 0))?, offset(selector.at(1, 1))?)
        } else {
            (0, 0)
        };
        Ok(Self { height: extent(selector.at(0, 0))?,
                  width: extent(selector.at(0, 1))?,
                  top,
                  left })
    }
}

fn invalid_selector() -> MatrixError {
    MatrixError::domain("Invalid crop parameters: expected [height width] or [height width & top left] \
                         with positive sizes and non-negative whole offsets")
}
