use crate::{
    error::MatrixError,
    interpreter::value::{
        core::{Matrix, MatrixResult},
        grid::Grid,
        normalize::normalize,
    },
    util::num::usize_to_f64,
};

impl Matrix {
    /// Gaussian elimination, forward pass only.
    ///
    /// For each column `i`, the first row at or below `i` with a non-zero
    /// entry in that column is swapped into row `i` and its multiples are
    /// subtracted from every row below. A column with no such row is left as
    /// it is.
    ///
    /// # Example
    /// ```
    /// use matix::interpreter::value::core::Matrix;
    ///
    /// let m = Matrix::from_rows(vec![vec![2.0, 1.0], vec![4.0, 3.0]]).unwrap();
    /// assert_eq!(m.gem().to_rows(), vec![vec![2.0, 1.0], vec![0.0, 1.0]]);
    /// assert_eq!(m.gem().label(), "Triangular Matrix");
    /// ```
    #[must_use]
    pub fn gem(&self) -> Self {
        match self {
            Self::Number(_) | Self::Zero { .. } | Self::Identity(_) => self.clone(),
            _ => {
                let mut grid = self.to_grid();
                eliminate(&mut grid);
                normalize(Self::General(grid))
            },
        }
    }

    /// Determinant, as a number.
    ///
    /// The product of the diagonal left by [`Matrix::gem`]. Row swaps made
    /// during the elimination do not change the sign.
    ///
    /// # Errors
    /// Returns `MatrixError::Domain` if the matrix is not square.
    ///
    /// # Example
    /// ```
    /// use matix::interpreter::value::core::Matrix;
    ///
    /// let singular = Matrix::from_rows(vec![vec![1.0, 2.0], vec![2.0, 4.0]]).unwrap();
    /// assert_eq!(singular.det().unwrap(), Matrix::Number(0.0));
    ///
    /// let swap = Matrix::from_rows(vec![vec![0.0, 1.0], vec![1.0, 0.0]]).unwrap();
    /// assert_eq!(swap.det().unwrap(), Matrix::Number(1.0));
    /// ```
    pub fn det(&self) -> MatrixResult<Self> {
        if !self.is_square() {
            return Err(MatrixError::domain("Non-square matrix"));
        }
        let determinant = match self {
            Self::Number(n) => *n,
            Self::Zero { .. } => 0.0,
            Self::Identity(_) => 1.0,
            _ => {
                let mut grid = self.to_grid();
                eliminate(&mut grid);
                let product = (0..grid.rows()).fold(1.0, |product, i| product * grid.get(i, i));
                // collapse -0 so singular matrices render as 0
                product + 0.0
            },
        };
        Ok(Self::Number(determinant))
    }

    /// Rank, as a number: the count of rows left non-zero by
    /// [`Matrix::gem`].
    #[must_use]
    pub fn rank(&self) -> Self {
        let reduced = self.gem();
        let rank = (0..reduced.rows()).filter(|&row| {
                                          (0..reduced.cols()).any(|col| reduced.at(row, col) != 0.0)
                                      })
                                      .count();
        Self::Number(usize_to_f64(rank))
    }
}

/// Runs the forward elimination in place.
fn eliminate(grid: &mut Grid) {
    let (rows, cols) = (grid.rows(), grid.cols());

    for pivot in 0..rows.min(cols) {
        let Some(found) = (pivot..rows).find(|&row| grid.get(row, pivot) != 0.0) else {
            continue;
        };
        if found != pivot {
            grid.swap_rows(pivot, found);
        }

        let pivot_value = grid.get(pivot, pivot);
        for row in pivot + 1..rows {
            let factor = grid.get(row, pivot) / pivot_value;
            for col in pivot..cols {
                let reduced = grid.get(row, col) - grid.get(pivot, col) * factor;
                grid.set(row, col, reduced);
            }
        }
    }
}
