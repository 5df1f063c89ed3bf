use log::trace;

use crate::interpreter::value::{
    core::Matrix,
    grid::{Grid, UpperTriangle},
};

/// Reclassifies a matrix into the most specific representation its content
/// satisfies.
///
/// The checks run from the most general to the most specific:
///
/// ```text
///     empty                      -> General (empty)
///     1 x 1                      -> Number
///     all zero                   -> Zero
///     square, zero below diagonal
///         zero off diagonal
///             ones on diagonal   -> Identity
///             otherwise          -> Diagonal
///         otherwise              -> Triangular
///     square                     -> Square
///     otherwise                  -> General
/// ```
///
/// Classification looks only at the content, never at the incoming variant,
/// so the function is idempotent and accepts hand-built variants as well.
///
/// # Example
/// ```
/// use matix::interpreter::value::{core::Matrix, grid::Grid, normalize::normalize};
///
/// let grid = Grid::from_rows(vec![vec![2.0, 0.0], vec![0.0, 3.0]]).unwrap();
/// let m = normalize(Matrix::General(grid));
/// assert_eq!(m.label(), "Diagonal Matrix");
/// assert_eq!(normalize(m.clone()).label(), m.label());
/// ```
#[must_use]
pub fn normalize(matrix: Matrix) -> Matrix {
    let normalized = if matrix.is_empty() {
        Matrix::General(into_grid(matrix))
    } else if matrix.is_number() {
        Matrix::Number(matrix.at(0, 0))
    } else if matrix.is_zero() {
        Matrix::Zero { rows: matrix.rows(),
                       cols: matrix.cols() }
    } else if matrix.is_square() {
        narrow_square(matrix)
    } else {
        Matrix::General(into_grid(matrix))
    };

    trace!("normalized {}x{} matrix to {}",
           normalized.rows(),
           normalized.cols(),
           normalized.label());
    normalized
}

fn narrow_square(matrix: Matrix) -> Matrix {
    if !matrix.is_triangular() {
        return Matrix::Square(into_grid(matrix));
    }
    if !matrix.is_diagonal() {
        return Matrix::Triangular(UpperTriangle::from_matrix(&matrix));
    }
    if matrix.is_identity() {
        return Matrix::Identity(matrix.rows());
    }
    Matrix::Diagonal((0..matrix.rows()).map(|i| matrix.at(i, i)).collect())
}

fn into_grid(matrix: Matrix) -> Grid {
    match matrix {
        Matrix::General(grid) | Matrix::Square(grid) => grid,
        other => other.to_grid(),
    }
}
