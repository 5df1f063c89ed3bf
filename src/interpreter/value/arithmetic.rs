use crate::{
    error::MatrixError,
    interpreter::value::{
        core::{Matrix, MatrixResult},
        grid::Grid,
        normalize::normalize,
    },
    util::num::{f64_to_usize_checked, is_integral},
};

/// Largest exponent accepted by [`Matrix::power`] for matrices.
pub const MAX_MATRIX_POWER: f64 = 100.0;

impl Matrix {
    /// Elementwise sum.
    ///
    /// A zero left operand returns the right operand unchanged.
    ///
    /// # Errors
    /// Returns `MatrixError::Shape` if the dimensions differ.
    ///
    /// # Example
    /// ```
    /// use matix::interpreter::value::core::Matrix;
    ///
    /// let a = Matrix::from_rows(vec![vec![1.0, 2.0]]).unwrap();
    /// let b = Matrix::from_rows(vec![vec![3.0, -2.0]]).unwrap();
    /// assert_eq!(a.add(&b).unwrap().to_rows(), vec![vec![4.0, 0.0]]);
    /// ```
    pub fn add(&self, rhs: &Self) -> MatrixResult<Self> {
        self.ensure_same_shape(rhs)?;
        match self {
            Self::Zero { .. } => Ok(normalize(rhs.clone())),
            Self::Number(n) => Ok(Self::Number(n + rhs.at(0, 0))),
            _ => Ok(self.zip_with(rhs, |a, b| a + b)),
        }
    }

    /// Elementwise difference.
    ///
    /// A zero left operand returns the negated right operand.
    ///
    /// # Errors
    /// Returns `MatrixError::Shape` if the dimensions differ.
    pub fn sub(&self, rhs: &Self) -> MatrixResult<Self> {
        self.ensure_same_shape(rhs)?;
        match self {
            Self::Zero { .. } => Ok(rhs.neg()),
            Self::Number(n) => Ok(Self::Number(n - rhs.at(0, 0))),
            _ => Ok(self.zip_with(rhs, |a, b| a - b)),
        }
    }

    /// Flips the sign of every element.
    #[must_use]
    pub fn neg(&self) -> Self {
        match self {
            Self::Zero { .. } => self.clone(),
            Self::Number(n) => Self::Number(-n),
            _ => self.map(|value| -value),
        }
    }

    /// Scalar or matrix product.
    ///
    /// A `1 x 1` right operand scales every element. Otherwise this is the
    /// usual matrix product, and a zero left operand yields a zero matrix of
    /// the output shape without multiplying anything.
    ///
    /// # Errors
    /// Returns `MatrixError::Shape` if the left operand's column count differs
    /// from the right operand's row count.
    ///
    /// # Example
    /// ```
    /// use matix::interpreter::value::core::Matrix;
    ///
    /// let a = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
    /// assert_eq!(a.prod(&a).unwrap().to_rows(),
    ///            vec![vec![7.0, 10.0], vec![15.0, 22.0]]);
    /// assert_eq!(a.prod(&Matrix::Number(2.0)).unwrap().to_rows(),
    ///            vec![vec![2.0, 4.0], vec![6.0, 8.0]]);
    /// ```
    pub fn prod(&self, rhs: &Self) -> MatrixResult<Self> {
        if let Some(factor) = rhs.number() {
            return Ok(match self {
                          Self::Zero { .. } => self.clone(),
                          Self::Number(n) => Self::Number(n * factor),
                          _ => self.map(|value| value * factor),
                      });
        }
        if self.cols() != rhs.rows() {
            return Err(MatrixError::shape(format!("Cannot multiply a {}x{} matrix by a {}x{} matrix",
                                                  self.rows(),
                                                  self.cols(),
                                                  rhs.rows(),
                                                  rhs.cols())));
        }
        if let Self::Zero { rows, .. } = self
           && rhs.cols() > 0
        {
            return Self::zeros(*rows, rhs.cols());
        }

        let inner = self.cols();
        let product = Grid::from_fn(self.rows(), rhs.cols(), |row, col| {
                          (0..inner).fold(0.0, |sum, k| sum + self.at(row, k) * rhs.at(k, col))
                      });
        Ok(normalize(Self::General(product)))
    }

    /// Divides every element by a number.
    ///
    /// # Errors
    /// - `MatrixError::Domain` if the divisor is not `1 x 1`.
    /// - `MatrixError::Arithmetic` if the divisor is exactly zero.
    ///
    /// # Example
    /// ```
    /// use matix::{error::MatrixError, interpreter::value::core::Matrix};
    ///
    /// let a = Matrix::from_rows(vec![vec![1.0, 2.0]]).unwrap();
    /// let err = a.div(&Matrix::Number(0.0)).unwrap_err();
    /// assert!(matches!(err, MatrixError::Arithmetic { .. }));
    /// assert_eq!(err.to_string(), "Division by zero");
    /// ```
    pub fn div(&self, rhs: &Self) -> MatrixResult<Self> {
        let divisor = rhs.number()
                         .ok_or_else(|| MatrixError::domain("Division by non-number"))?;
        if divisor == 0.0 {
            return Err(MatrixError::Arithmetic { details: "Division by zero".to_string() });
        }
        match self {
            Self::Number(n) => Ok(Self::Number(n / divisor)),
            _ => self.prod(&Self::Number(1.0 / divisor)),
        }
    }

    /// Raises the matrix to a power.
    ///
    /// A number is raised to any real exponent. A square matrix is raised to
    /// a whole exponent between 0 and 100 by repeated multiplication starting
    /// from the identity.
    ///
    /// # Errors
    /// Returns `MatrixError::Domain` if the exponent is not a number, if the
    /// base is not square, or if the exponent of a matrix is fractional,
    /// negative or greater than 100.
    ///
    /// # Example
    /// ```
    /// use matix::interpreter::value::core::Matrix;
    ///
    /// let a = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
    /// assert_eq!(a.power(&Matrix::Number(0.0)).unwrap(), Matrix::identity(2));
    /// assert!(a.power(&Matrix::Number(0.5)).is_err());
    /// ```
    pub fn power(&self, rhs: &Self) -> MatrixResult<Self> {
        let exponent = rhs.number()
                          .ok_or_else(|| MatrixError::domain("Exponent must be a number"))?;
        if let Self::Number(base) = self {
            return Ok(Self::Number(base.powf(exponent)));
        }
        if !self.is_square() {
            return Err(MatrixError::domain("Non-square matrix"));
        }
        let times = matrix_exponent(exponent)?;

        if let Self::Zero { .. } = self {
            return Ok(if times == 0 { Self::identity(self.rows()) } else { self.clone() });
        }

        let mut result = Self::identity(self.rows());
        for _ in 0..times {
            result = self.prod(&result)?;
        }
        Ok(result)
    }

    fn ensure_same_shape(&self, rhs: &Self) -> MatrixResult<()> {
        if self.rows() != rhs.rows() {
            return Err(MatrixError::shape(format!("Different number of rows: {} and {}",
                                                  self.rows(),
                                                  rhs.rows())));
        }
        if self.cols() != rhs.cols() {
            return Err(MatrixError::shape(format!("Different number of columns: {} and {}",
                                                  self.cols(),
                                                  rhs.cols())));
        }
        Ok(())
    }

    pub(crate) fn map(&self, f: impl Fn(f64) -> f64) -> Self {
        normalize(Self::General(Grid::from_fn(self.rows(), self.cols(), |row, col| {
                                    f(self.at(row, col))
                                })))
    }

    fn zip_with(&self, rhs: &Self, f: impl Fn(f64, f64) -> f64) -> Self {
        normalize(Self::General(Grid::from_fn(self.rows(), self.cols(), |row, col| {
                                    f(self.at(row, col), rhs.at(row, col))
                                })))
    }
}

/// Validates the exponent of a matrix power and turns it into a count.
fn matrix_exponent(exponent: f64) -> MatrixResult<usize> {
    let tolerance = f64::EPSILON * 10.0;
    if !is_integral(exponent, tolerance) {
        return Err(MatrixError::domain("Non-integer power"));
    }
    if exponent < 0.0 {
        return Err(MatrixError::domain("Negative matrix power"));
    }
    if exponent > MAX_MATRIX_POWER {
        return Err(MatrixError::domain("Matrix power too large"));
    }
    f64_to_usize_checked(exponent, tolerance, MatrixError::domain("Non-integer power"))
}
