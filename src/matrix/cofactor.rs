//! Determinant, minors and cofactors by Laplace expansion.
//!
//! `determinant` expands along the first column through `adjoint`, which
//! takes the `minor`, which is again a `determinant`. The recursion depth is
//! the matrix size and the total work is `O(n!)`: there is no elimination
//! step, so every value stays an exact integer.

use itertools::Itertools;
use log::{debug, trace, warn};
use num_bigint::BigInt;
use num_traits::Zero;

use crate::error::{MatrixError, MatrixResult};
use crate::matrix::matrix::Matrix;
use crate::matrix::matrix_gen::{GenElement, MatrixGen};
use crate::rings::fraction::Fraction;

fn require_square<T: GenElement>(matrix: &MatrixGen<T>, operation: &str) -> MatrixResult<()> {
    if !matrix.is_square() {
        return Err(MatrixError::shape(format!(
            "{} requires a square matrix, got {}x{}",
            operation,
            matrix.rows(),
            matrix.cols()
        )));
    }
    Ok(())
}

pub fn determinant<T: GenElement>(matrix: &MatrixGen<T>) -> MatrixResult<T> {
    require_square(matrix, "determinant")?;
    trace!("determinant of a {}x{} matrix", matrix.rows(), matrix.cols());

    if matrix.rows() == 1 {
        return Ok(matrix.at(0, 0));
    }

    (0..matrix.rows())
        .map(|row| -> MatrixResult<T> { Ok(matrix.at(row, 0) * adjoint(matrix, row, 0)?) })
        .sum()
}

/// Copy of `matrix` without row `i` and column `j`.
fn submatrix<T: GenElement>(matrix: &MatrixGen<T>, i: usize, j: usize) -> MatrixGen<T> {
    let cells = (0..matrix.rows())
        .filter(|&r| r != i)
        .flat_map(|r| {
            (0..matrix.cols())
                .filter(move |&c| c != j)
                .map(move |c| matrix.at(r, c))
        })
        .collect();

    MatrixGen::from_cells(matrix.rows() - 1, matrix.cols() - 1, cells)
}

pub fn minor<T: GenElement>(matrix: &MatrixGen<T>, i: usize, j: usize) -> MatrixResult<T> {
    require_square(matrix, "minor")?;
    if i >= matrix.rows() || j >= matrix.cols() {
        return Err(MatrixError::out_of_range(i, j, matrix.rows(), matrix.cols()));
    }
    // the submatrix of a 1x1 matrix is empty, its determinant is 1
    if matrix.rows() == 1 {
        return Ok(T::one());
    }

    determinant(&submatrix(matrix, i, j))
}

/// Cofactor of the cell at (`row`, `column`): the signed minor.
pub fn adjoint<T: GenElement>(matrix: &MatrixGen<T>, row: usize, column: usize) -> MatrixResult<T> {
    let minor = minor(matrix, row, column)?;
    if (row + column) % 2 == 0 {
        Ok(minor)
    } else {
        Ok(-minor)
    }
}

/// Matrix of all cofactors. Its transpose is the adjugate.
pub fn adjoint_matrix<T: GenElement>(matrix: &MatrixGen<T>) -> MatrixResult<MatrixGen<T>> {
    require_square(matrix, "adjoint matrix")?;
    debug!("cofactor matrix of a {}x{} matrix", matrix.rows(), matrix.cols());

    let cells = (0..matrix.rows())
        .cartesian_product(0..matrix.cols())
        .map(|(row, column)| adjoint(matrix, row, column))
        .collect::<MatrixResult<Vec<T>>>()?;

    Ok(MatrixGen::from_cells(matrix.rows(), matrix.cols(), cells))
}

/// Inverse through the adjugate, scaled by `1 / det` in integer division.
///
/// The scale factor truncates toward zero, so the result is the true inverse
/// only when the determinant is `1` or `-1`; any other determinant yields the
/// zero matrix. Use [`inverse_exact`] for the rational inverse.
pub fn inverse<T: GenElement>(matrix: &MatrixGen<T>) -> MatrixResult<MatrixGen<T>> {
    require_square(matrix, "inverse")?;

    let det = determinant(matrix)?;
    if det.is_zero() {
        return Err(MatrixError::SingularMatrix);
    }
    debug!("inverse of a {}x{} matrix, determinant {}", matrix.rows(), matrix.cols(), det);

    let factor = T::one() / det.clone();
    if factor.is_zero() {
        warn!(
            "determinant {} is not a unit, the truncated inverse is the zero matrix",
            det
        );
    }

    Ok(adjoint_matrix(matrix)?.transpose().scale(&factor))
}

/// Exact inverse over the rationals.
pub fn inverse_exact<T>(matrix: &MatrixGen<T>) -> MatrixResult<MatrixGen<Fraction>>
where
    T: GenElement + Into<BigInt>,
{
    require_square(matrix, "inverse")?;

    let det: BigInt = determinant(matrix)?.into();
    if det.is_zero() {
        return Err(MatrixError::SingularMatrix);
    }
    debug!("exact inverse of a {}x{} matrix, determinant {}", matrix.rows(), matrix.cols(), det);

    Ok(adjoint_matrix(matrix)?
        .transpose()
        .map(|cell| Fraction::new(cell.clone().into(), det.clone())))
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::operand::Operand;
    use rand::Rng;

    fn m(lines: Vec<Vec<i64>>) -> MatrixGen<i64> {
        MatrixGen::from_list(lines).unwrap()
    }

    #[test]
    fn test_determinant() {
        assert_eq!(determinant(&m(vec![vec![-7]])), Ok(-7));
        assert_eq!(determinant(&m(vec![vec![1, 4], vec![1, 3]])), Ok(-1));
        assert_eq!(
            determinant(&m(vec![vec![1, 2, 3], vec![2, 0, -1], vec![3, 2, 1]])),
            Ok(4)
        );
        assert_eq!(
            determinant(&m(vec![
                vec![1, 0, 2, -1],
                vec![3, 0, 0, 5],
                vec![2, 1, 4, -3],
                vec![1, 0, 5, 0],
            ])),
            Ok(30)
        );
        assert_eq!(determinant(&m(vec![vec![1, 2], vec![2, 4]])), Ok(0));

        for n in 1..6 {
            assert_eq!(determinant(&MatrixGen::<i64>::identity(n).unwrap()), Ok(1));
        }

        assert!(matches!(
            determinant(&m(vec![vec![1, 2, 3], vec![4, 5, 6]])),
            Err(MatrixError::Shape(_))
        ));
    }

    #[test]
    fn test_determinant_bigint() {
        let bi = |s: &str| BigInt::parse_bytes(s.as_bytes(), 10).unwrap();

        let a = MatrixGen::<BigInt>::from_list(vec![
            vec![bi("100000000000000000000"), bi("3")],
            vec![bi("7"), bi("100000000000000000000")],
        ])
        .unwrap();
        assert_eq!(
            determinant(&a),
            Ok(bi("9999999999999999999999999999999999999979"))
        );
    }

    #[test]
    fn test_minor_and_adjoint() {
        let a = m(vec![vec![1, 2, 3], vec![2, 0, -1], vec![3, 2, 1]]);

        assert_eq!(minor(&a, 0, 0), Ok(2));
        assert_eq!(minor(&a, 0, 1), Ok(5));
        assert_eq!(minor(&a, 1, 1), Ok(-8));
        assert_eq!(adjoint(&a, 0, 1), Ok(-5));
        assert_eq!(adjoint(&a, 1, 1), Ok(-8));
        assert_eq!(adjoint(&a, 2, 1), Ok(7));

        // the source matrix is left untouched
        assert_eq!(
            a.to_list(),
            vec![vec![1, 2, 3], vec![2, 0, -1], vec![3, 2, 1]]
        );

        assert!(matches!(minor(&a, 3, 0), Err(MatrixError::Index { .. })));
        assert_eq!(minor(&m(vec![vec![5]]), 0, 0), Ok(1));
        assert_eq!(adjoint(&m(vec![vec![9]]), 0, 0), Ok(1));
        assert!(matches!(minor(&m(vec![vec![5]]), 0, 1), Err(MatrixError::Index { .. })));
        assert!(matches!(
            adjoint(&m(vec![vec![1, 2, 3], vec![4, 5, 6]]), 0, 0),
            Err(MatrixError::Shape(_))
        ));
    }

    #[test]
    fn test_adjoint_matrix() {
        let a = m(vec![vec![1, 2, 3], vec![2, 0, -1], vec![3, 2, 1]]);
        assert_eq!(
            adjoint_matrix(&a).unwrap().to_list(),
            vec![vec![2, -5, 4], vec![4, -8, 4], vec![-2, 7, -4]]
        );
        assert_eq!(adjoint_matrix(&m(vec![vec![9]])).unwrap().to_list(), vec![vec![1]]);
    }

    #[test]
    fn test_inverse_worked_example() {
        let a = m(vec![vec![1, 4], vec![1, 3]]);
        let b = m(vec![vec![4, 0], vec![1, 2]]);

        assert_eq!(determinant(&a), Ok(-1));
        let inv = inverse(&a).unwrap();
        assert_eq!(inv.to_list(), vec![vec![-3, 4], vec![1, -1]]);
        assert_eq!(
            (&b * &inv).unwrap().to_list(),
            vec![vec![-12, 16], vec![-1, 2]]
        );
        assert_eq!((&a * &inv).unwrap(), MatrixGen::<i64>::identity(2).unwrap());
    }

    #[test]
    fn test_inverse_errors() {
        assert_eq!(
            inverse(&m(vec![vec![1, 2], vec![2, 4]])),
            Err(MatrixError::SingularMatrix)
        );
        assert!(matches!(
            inverse(&m(vec![vec![1, 2, 3], vec![4, 5, 6]])),
            Err(MatrixError::Shape(_))
        ));
        assert_eq!(
            inverse_exact(&m(vec![vec![0, 0], vec![0, 0]])),
            Err(MatrixError::SingularMatrix)
        );
    }

    #[test]
    fn test_inverse_truncates() {
        // determinant 4, 1/4 truncates to 0
        let a = m(vec![vec![1, 2, 3], vec![2, 0, -1], vec![3, 2, 1]]);
        assert_eq!(
            inverse(&a).unwrap().to_list(),
            vec![vec![0, 0, 0], vec![0, 0, 0], vec![0, 0, 0]]
        );
        // determinant -2
        let a = m(vec![vec![1, 2], vec![3, 4]]);
        assert_eq!(inverse(&a).unwrap().to_list(), vec![vec![0, 0], vec![0, 0]]);

        assert_eq!(inverse(&m(vec![vec![1]])).unwrap().to_list(), vec![vec![1]]);
        assert_eq!(inverse(&m(vec![vec![-1]])).unwrap().to_list(), vec![vec![-1]]);
        assert_eq!(inverse(&m(vec![vec![5]])).unwrap().to_list(), vec![vec![0]]);
    }

    #[test]
    fn test_inverse_exact() {
        let a = m(vec![vec![1, 2, 3], vec![2, 0, -1], vec![3, 2, 1]]);
        let inv = inverse_exact(&a).unwrap();
        assert_eq!(inv.to_string(), "(  1/2  1 -1/2  )\n( -5/4 -2  7/4  )\n(  1  1 -1  )");

        let lifted = a.map(|cell| Fraction::from(*cell));
        assert_eq!((&lifted * &inv).unwrap(), MatrixGen::<Fraction>::identity(3).unwrap());

        // over the rationals the truncating inverse is exact too
        assert_eq!(inverse(&lifted).unwrap(), inv);
    }

    #[test]
    fn test_unit_determinant_round_trip() {
        let mut rng = rand::thread_rng();

        for _ in 0..30 {
            // upper triangular with unit diagonal times a row swap: det = -1
            let n = rng.gen_range(2..5);
            let upper = m((0..n)
                .map(|r| {
                    (0..n)
                        .map(|c| match c.cmp(&r) {
                            std::cmp::Ordering::Less => 0,
                            std::cmp::Ordering::Equal => 1,
                            std::cmp::Ordering::Greater => rng.gen_range(-5..6),
                        })
                        .collect()
                })
                .collect());
            let mut swap = MatrixGen::<i64>::identity(n).unwrap().to_list();
            swap.swap(0, 1);
            let a = (&m(swap) * &upper).unwrap();

            assert_eq!(determinant(&a), Ok(-1));
            let inv = inverse(&a).unwrap();
            let identity = MatrixGen::<i64>::identity(n).unwrap();
            assert_eq!((&a * &inv).unwrap(), identity);
            assert_eq!((&inv * &a).unwrap(), identity);

            // scaling a row by 2 doubles the determinant
            let mut doubled = a.to_list();
            doubled[0] = doubled[0].iter().map(|x| x * 2).collect();
            assert_eq!(determinant(&m(doubled)), Ok(-2));
            assert_eq!(determinant(&(&a * Operand::Scalar(1)).unwrap()), Ok(-1));
        }
    }
}
