use itertools::Itertools;
use num_bigint::BigInt;
use num_traits::{One, Zero};

use crate::error::{MatrixError, MatrixResult};
use crate::matrix::format::MatrixFormat;
use crate::matrix::matrix::Matrix;
use crate::matrix::operand::Operand;
use crate::rings::fraction::Fraction;
use std::fmt;
use std::ops;
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::str::FromStr;

pub trait GenElement:  // Avoid repeating all the traits
    Clone
    + Zero
    + One
    + PartialEq
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + std::iter::Sum<Self>
    + std::fmt::Display
    + std::cmp::Ord
    + std::fmt::Debug
{
}

impl<T> GenElement for T where
    T: Clone
        + Zero
        + One
        + PartialEq
        + Add<Output = T>
        + Sub<Output = T>
        + Mul<Output = T>
        + Div<Output = T>
        + Neg<Output = T>
        + std::iter::Sum<T>
        + std::fmt::Display
        + std::cmp::Ord
        + std::fmt::Debug
{
}

/// Dense row-major matrix. Never mutated once built, every operation returns
/// a new value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatrixGen<T> {
    cols: usize,
    rows: usize,
    cells: Vec<T>,
}

impl<T: GenElement> Matrix<T> for MatrixGen<T> {
    fn from_list(lines: Vec<Vec<T>>) -> MatrixResult<Self> {
        let rows = lines.len();
        let cols = lines.first().map(|l| l.len()).unwrap_or(0);

        if rows == 0 || cols == 0 {
            return Err(MatrixError::shape(
                "a matrix needs at least one row and one column",
            ));
        }
        if let Some(bad) = lines.iter().position(|l| l.len() != cols) {
            return Err(MatrixError::shape(format!(
                "all rows must have the same number of columns (expected {}, row {} has {})",
                cols,
                bad,
                lines[bad].len()
            )));
        }

        Ok(MatrixGen {
            rows,
            cols,
            cells: lines.into_iter().flatten().collect(),
        })
    }

    fn to_list(&self) -> Vec<Vec<T>> {
        self.cells
            .chunks(self.cols)
            .map(|line| line.to_vec())
            .collect()
    }

    fn rows(&self) -> usize {
        self.rows
    }

    fn cols(&self) -> usize {
        self.cols
    }

    fn identity(n: usize) -> MatrixResult<MatrixGen<T>> {
        if n == 0 {
            return Err(MatrixError::shape("identity size must be positive"));
        }

        Ok(MatrixGen {
            rows: n,
            cols: n,
            cells: (0..n)
                .flat_map(|i| (0..n).map(move |j| if i == j { T::one() } else { T::zero() }))
                .collect(),
        })
    }

    fn transpose(&self) -> MatrixGen<T> {
        MatrixGen {
            rows: self.cols,
            cols: self.rows,
            cells: (0..self.cols)
                .flat_map(|c| (0..self.rows).map(move |r| self.at(r, c)))
                .collect(),
        }
    }

    fn element(&self, row: usize, col: usize) -> MatrixResult<T> {
        if row >= self.rows || col >= self.cols {
            return Err(MatrixError::out_of_range(row, col, self.rows, self.cols));
        }
        Ok(self.at(row, col))
    }

    #[inline(always)]
    fn at(&self, row: usize, col: usize) -> T {
        self.cells[row * self.cols + col].clone()
    }
}

impl<T> MatrixGen<T> {
    /// Callers guarantee `cells.len() == rows * cols` and a non-empty shape.
    pub(crate) fn from_cells(rows: usize, cols: usize, cells: Vec<T>) -> MatrixGen<T> {
        debug_assert_eq!(cells.len(), rows * cols);
        MatrixGen { rows, cols, cells }
    }

    pub(crate) fn row(&self, row: usize) -> &[T] {
        &self.cells[row * self.cols..(row + 1) * self.cols]
    }

    pub fn map<U, F: FnMut(&T) -> U>(&self, f: F) -> MatrixGen<U> {
        MatrixGen {
            rows: self.rows,
            cols: self.cols,
            cells: self.cells.iter().map(f).collect(),
        }
    }
}

impl<T: GenElement> MatrixGen<T> {
    pub fn scale(&self, factor: &T) -> MatrixGen<T> {
        self.map(|cell| cell.clone() * factor.clone())
    }

    pub fn add(&self, rhs: Operand<'_, T>) -> MatrixResult<MatrixGen<T>> {
        self.elementwise(rhs, "added to", |a, b| a + b)
    }

    pub fn subtract(&self, rhs: Operand<'_, T>) -> MatrixResult<MatrixGen<T>> {
        self.elementwise(rhs, "subtracted from", |a, b| a - b)
    }

    pub fn multiply(&self, rhs: Operand<'_, T>) -> MatrixResult<MatrixGen<T>> {
        let rhs = match rhs {
            Operand::Scalar(factor) => return Ok(self.scale(&factor)),
            Operand::Matrix(rhs) => rhs,
        };

        if self.cols != rhs.rows {
            return Err(MatrixError::shape(format!(
                "these matrices can't be multiplied ({}x{} by {}x{})",
                self.rows, self.cols, rhs.rows, rhs.cols
            )));
        }

        Ok(MatrixGen {
            rows: self.rows,
            cols: rhs.cols,
            cells: (0..self.rows)
                .flat_map(|i| {
                    (0..rhs.cols).map(move |j| {
                        (0..self.cols)
                            .map(|k| self.at(i, k) * rhs.at(k, j))
                            .sum::<T>()
                    })
                })
                .collect(),
        })
    }

    pub fn to_delimited(&self, format: &MatrixFormat) -> String {
        format.render(self)
    }

    fn elementwise(
        &self,
        rhs: Operand<'_, T>,
        verb: &str,
        op: impl Fn(T, T) -> T,
    ) -> MatrixResult<MatrixGen<T>> {
        match rhs {
            Operand::Scalar(value) => Ok(self.map(|cell| op(cell.clone(), value.clone()))),
            Operand::Matrix(rhs) => {
                if self.cols != rhs.cols || self.rows != rhs.rows {
                    return Err(MatrixError::shape(format!(
                        "a {}x{} matrix can't be {} a {}x{} matrix",
                        rhs.rows, rhs.cols, verb, self.rows, self.cols
                    )));
                }

                Ok(MatrixGen {
                    rows: self.rows,
                    cols: self.cols,
                    cells: self
                        .cells
                        .iter()
                        .zip(rhs.cells.iter())
                        .map(|(a, b)| op(a.clone(), b.clone()))
                        .collect(),
                })
            }
        }
    }
}

impl<T: GenElement> ops::Add<&MatrixGen<T>> for &MatrixGen<T> {
    type Output = MatrixResult<MatrixGen<T>>;

    fn add(self, rhs: &MatrixGen<T>) -> MatrixResult<MatrixGen<T>> {
        MatrixGen::add(self, Operand::Matrix(rhs))
    }
}

impl<'a, T: GenElement> ops::Add<Operand<'a, T>> for &MatrixGen<T> {
    type Output = MatrixResult<MatrixGen<T>>;

    fn add(self, rhs: Operand<'a, T>) -> MatrixResult<MatrixGen<T>> {
        MatrixGen::add(self, rhs)
    }
}

impl<T: GenElement> ops::Sub<&MatrixGen<T>> for &MatrixGen<T> {
    type Output = MatrixResult<MatrixGen<T>>;

    fn sub(self, rhs: &MatrixGen<T>) -> MatrixResult<MatrixGen<T>> {
        self.subtract(Operand::Matrix(rhs))
    }
}

impl<'a, T: GenElement> ops::Sub<Operand<'a, T>> for &MatrixGen<T> {
    type Output = MatrixResult<MatrixGen<T>>;

    fn sub(self, rhs: Operand<'a, T>) -> MatrixResult<MatrixGen<T>> {
        self.subtract(rhs)
    }
}

impl<T: GenElement> ops::Mul<&MatrixGen<T>> for &MatrixGen<T> {
    type Output = MatrixResult<MatrixGen<T>>;

    fn mul(self, rhs: &MatrixGen<T>) -> MatrixResult<MatrixGen<T>> {
        self.multiply(Operand::Matrix(rhs))
    }
}

impl<'a, T: GenElement> ops::Mul<Operand<'a, T>> for &MatrixGen<T> {
    type Output = MatrixResult<MatrixGen<T>>;

    fn mul(self, rhs: Operand<'a, T>) -> MatrixResult<MatrixGen<T>> {
        self.multiply(rhs)
    }
}

impl<T: GenElement> ops::Neg for &MatrixGen<T> {
    type Output = MatrixGen<T>;

    fn neg(self) -> MatrixGen<T> {
        self.map(|cell| -cell.clone())
    }
}

// scalar * matrix, same result as matrix * scalar
macro_rules! impl_scalar_mul {
    ($($scalar:ty),*) => {
        $(
            impl ops::Mul<&MatrixGen<$scalar>> for $scalar {
                type Output = MatrixGen<$scalar>;

                fn mul(self, rhs: &MatrixGen<$scalar>) -> MatrixGen<$scalar> {
                    rhs.scale(&self)
                }
            }
        )*
    };
}

impl_scalar_mul!(i32, i64, i128, BigInt, Fraction);

impl<T: GenElement> fmt::Display for MatrixGen<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines = self
            .cells
            .chunks(self.cols)
            .map(|line| {
                let cells = line
                    .iter()
                    .map(|cell| {
                        if *cell >= T::zero() {
                            format!(" {}", cell)
                        } else {
                            cell.to_string()
                        }
                    })
                    .join(" ");
                format!("( {}  )", cells)
            })
            .join("\n");
        write!(f, "{}", lines)
    }
}

impl<T: GenElement + FromStr> FromStr for MatrixGen<T> {
    type Err = MatrixError;

    fn from_str(s: &str) -> MatrixResult<MatrixGen<T>> {
        MatrixFormat::default().parse_matrix(s)
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
