use matix::{
    error::MatrixError,
    interpreter::value::{core::Matrix, grid::Grid, normalize::normalize},
};

fn grids() -> Vec<Vec<Vec<f64>>> {
    vec![vec![],
         vec![vec![4.0]],
         vec![vec![0.0]],
         vec![vec![0.0, 0.0, 0.0]],
         vec![vec![1.0, 2.0, 3.0]],
         vec![vec![1.0], vec![-2.0]],
         vec![vec![1.0, 2.0], vec![3.0, 4.0]],
         vec![vec![1.0, 2.0], vec![0.0, 4.0]],
         vec![vec![1.0, 0.0], vec![2.0, 4.0]],
         vec![vec![2.0, 0.0], vec![0.0, -1.0]],
         vec![vec![1.0, 0.0, 0.0], vec![0.0, 1.0, 0.0], vec![0.0, 0.0, 1.0]],
         vec![vec![0.0, 0.0], vec![0.0, 0.0]],
         vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]]
}

fn matrices() -> Vec<Matrix> {
    grids().into_iter().map(|rows| Matrix::from_rows(rows).unwrap()).collect()
}

fn general(rows: Vec<Vec<f64>>) -> Matrix {
    Matrix::General(Grid::from_rows(rows).unwrap())
}

fn classification_holds(m: &Matrix) -> bool {
    match m {
        Matrix::General(_) => m.is_empty() || (!m.is_number() && !m.is_zero() && !m.is_square()),
        Matrix::Number(_) => m.is_number(),
        Matrix::Zero { .. } => m.is_zero() && !m.is_number(),
        Matrix::Square(_) => m.is_square() && !m.is_triangular(),
        Matrix::Triangular(_) => m.is_triangular() && !m.is_diagonal(),
        Matrix::Diagonal(_) => m.is_diagonal() && !m.is_identity() && !m.is_zero(),
        Matrix::Identity(_) => m.is_identity(),
    }
}

#[test]
fn normalize_is_idempotent_and_classifies() {
    for rows in grids() {
        let once = normalize(general(rows.clone()));
        let twice = normalize(once.clone());
        assert_eq!(once, twice);
        assert_eq!(once.label(), twice.label());
        assert!(classification_holds(&once), "{rows:?} classified as {}", once.label());
        assert_eq!(once.to_rows(), general(rows).to_rows());
    }
}

#[test]
fn labels_follow_content() {
    let labels: Vec<&str> = matrices().iter().map(Matrix::label).collect();
    assert_eq!(labels,
               vec!["Empty Matrix",
                    "Number",
                    "Number",
                    "Zero Matrix",
                    "Matrix",
                    "Matrix",
                    "Square Matrix",
                    "Triangular Matrix",
                    "Square Matrix",
                    "Diagonal Matrix",
                    "Identity Matrix",
                    "Zero Matrix",
                    "Matrix"]);
}

#[test]
fn transpose_twice_is_identity() {
    for m in matrices() {
        assert_eq!(m.transpose().transpose(), m);
        assert_eq!((m.transpose().rows(), m.transpose().cols()), (m.cols(), m.rows()));
    }
}

#[test]
fn addition_commutes_and_associates() {
    let a = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
    let b = Matrix::from_rows(vec![vec![0.5, 0.0], vec![0.0, 2.0]]).unwrap();
    let c = Matrix::identity(2);

    assert_eq!(a.add(&b).unwrap(), b.add(&a).unwrap());
    assert_eq!(a.add(&b).unwrap().add(&c).unwrap(), a.add(&b.add(&c).unwrap()).unwrap());
    assert_eq!(a.add(&Matrix::zeros(2, 2).unwrap()).unwrap(), a);
    assert_eq!(Matrix::zeros(2, 2).unwrap().add(&a).unwrap(), a);
    assert_eq!(a.sub(&a).unwrap().label(), "Zero Matrix");
}

#[test]
fn shape_mismatches_are_rejected() {
    let row = Matrix::from_rows(vec![vec![1.0, 2.0]]).unwrap();
    let column = row.transpose();

    assert!(matches!(row.add(&column), Err(MatrixError::Shape { .. })));
    assert!(matches!(row.prod(&row), Err(MatrixError::Shape { .. })));
    assert!(matches!(row.hconcat(&column), Err(MatrixError::Shape { .. })));
    assert!(matches!(row.vconcat(&column), Err(MatrixError::Shape { .. })));
    assert_eq!(row.prod(&column).unwrap(), Matrix::Number(5.0));
}

#[test]
fn zero_products_keep_the_output_shape() {
    let zero = Matrix::zeros(2, 3).unwrap();
    let m = Matrix::from_rows(vec![vec![1.0], vec![2.0], vec![3.0]]).unwrap();

    let product = zero.prod(&m).unwrap();
    assert_eq!((product.rows(), product.cols()), (2, 1));
    assert!(product.is_zero());
    assert!(matches!(zero.div(&Matrix::Number(0.0)), Err(MatrixError::Arithmetic { .. })));
}

#[test]
fn determinant_of_special_matrices() {
    for n in 0..5 {
        assert_eq!(Matrix::identity(n).det().unwrap(), Matrix::Number(1.0), "identity {n}");
    }
    for n in 2..5 {
        assert_eq!(Matrix::zeros(n, n).unwrap().det().unwrap(), Matrix::Number(0.0), "zero {n}");
    }
    let triangular = Matrix::from_rows(vec![vec![2.0, 7.0, 1.0],
                                            vec![0.0, 3.0, 5.0],
                                            vec![0.0, 0.0, 4.0]]).unwrap();
    assert_eq!(triangular.det().unwrap(), Matrix::Number(24.0));
    assert!(matches!(Matrix::zeros(2, 3).unwrap().det(), Err(MatrixError::Domain { .. })));
}

#[test]
fn power_zero_and_one() {
    let square = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
    let zero = Matrix::zeros(3, 3).unwrap();

    for m in [&square, &zero, &Matrix::identity(3)] {
        assert_eq!(m.power(&Matrix::Number(0.0)).unwrap(), Matrix::identity(m.rows()));
        assert_eq!(&m.power(&Matrix::Number(1.0)).unwrap(), m);
    }
    assert_eq!(zero.power(&Matrix::Number(5.0)).unwrap(), zero);
    assert!(matches!(zero.power(&Matrix::Number(-1.0)), Err(MatrixError::Domain { .. })));
    assert!(matches!(square.power(&square), Err(MatrixError::Domain { .. })));
    assert_eq!(Matrix::Number(2.0).power(&Matrix::Number(-1.0)).unwrap(), Matrix::Number(0.5));
}

#[test]
fn matrix_exponents_allow_ten_epsilon() {
    let shear = Matrix::from_rows(vec![vec![1.0, 1.0], vec![0.0, 1.0]]).unwrap();
    let squared = Matrix::from_rows(vec![vec![1.0, 2.0], vec![0.0, 1.0]]).unwrap();

    assert_eq!(shear.power(&Matrix::Number(2.0 + 1e-15)).unwrap(), squared);
    assert_eq!(shear.power(&Matrix::Number(2.0 + 5.0 * f64::EPSILON)).unwrap(), squared);

    let err = shear.power(&Matrix::Number(2.0001)).unwrap_err();
    assert!(matches!(err, MatrixError::Domain { .. }));
    assert_eq!(err.to_string(), "Non-integer power");
    assert_eq!(shear.power(&Matrix::Number(2.0 + 100.0 * f64::EPSILON)).unwrap_err().to_string(),
               "Non-integer power");
}

#[test]
fn crop_selectors_allow_one_epsilon() {
    let m = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
    let one = 1.0 + f64::EPSILON;

    let top_left = Matrix::from_rows(vec![vec![one, 1.0]]).unwrap();
    assert_eq!(m.crop(&top_left).unwrap(), Matrix::Number(1.0));
    let below = Matrix::from_rows(vec![vec![1.0, one], vec![one, 0.0]]).unwrap();
    assert_eq!(m.crop(&below).unwrap(), Matrix::Number(3.0));
    let rounded = Matrix::from_rows(vec![vec![1.0 + 1e-16, 1.0]]).unwrap();
    assert_eq!(m.crop(&rounded).unwrap(), Matrix::Number(1.0));

    for bad in [1.000_001, 1.0 + 2.0 * f64::EPSILON] {
        let selector = Matrix::from_rows(vec![vec![bad, 1.0]]).unwrap();
        assert!(matches!(m.crop(&selector), Err(MatrixError::Domain { .. })), "{bad}");
    }
}

#[test]
fn crop_bounds() {
    let m = Matrix::from_rows(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap();
    let selector = |rows: Vec<Vec<f64>>| Matrix::from_rows(rows).unwrap();

    assert_eq!(m.crop(&selector(vec![vec![2.0, 3.0]])).unwrap(), m);
    assert_eq!(m.crop(&selector(vec![vec![2.0, 3.0], vec![0.0, 0.0]])).unwrap(), m);

    for bad in [vec![vec![3.0, 1.0]],
                vec![vec![1.0, 4.0]],
                vec![vec![1.0, 1.0], vec![2.0, 0.0]],
                vec![vec![1.0, 2.0], vec![0.0, 2.0]],
                vec![vec![0.0, 1.0]],
                vec![vec![1.5, 1.0]],
                vec![vec![1.0, 1.0], vec![-1.0, 0.0]],
                vec![vec![1.0, 1.0, 1.0]]]
    {
        assert!(matches!(m.crop(&selector(bad.clone())), Err(MatrixError::Domain { .. })),
                "{bad:?}");
    }
}

#[test]
fn gem_leaves_an_upper_triangle() {
    let m = Matrix::from_rows(vec![vec![0.0, 2.0, 1.0],
                                   vec![1.0, 1.0, 1.0],
                                   vec![2.0, 4.0, 3.0]]).unwrap();
    let reduced = m.gem();
    assert!(reduced.is_triangular());
    assert_eq!(reduced.to_rows()[0], vec![1.0, 1.0, 1.0]);

    let wide = Matrix::from_rows(vec![vec![1.0, 2.0, 3.0], vec![2.0, 4.0, 7.0]]).unwrap();
    assert_eq!(wide.gem().to_rows(), vec![vec![1.0, 2.0, 3.0], vec![0.0, 0.0, 1.0]]);
    assert_eq!(wide.rank(), Matrix::Number(2.0));
}

#[test]
fn nan_propagates_without_detection() {
    let m = Matrix::from_rows(vec![vec![f64::NAN, 1.0]]).unwrap();
    let product = m.prod(&Matrix::identity(2)).unwrap();
    assert!(product.get(0, 0).unwrap().is_nan());
    // NaN * 0 is still NaN
    assert!(product.get(0, 1).unwrap().is_nan());
    assert_eq!(product.label(), "Matrix");
}
