use num_bigint::BigInt;
use num_traits::Signed;
use pyo3::prelude::*;
use pyo3::types::PyType;

use crate::error::{MatrixError, MatrixResult};
use crate::matrix::cofactor;
use crate::matrix::matrix::Matrix;
use crate::matrix::matrix_gen::MatrixGen;
use crate::matrix::operand::Operand;

// --------------------------------------------------
//                      PYTHON
// --------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
#[pyclass(frozen, name = "Matrix")]
pub struct PyMatrix {
    inner: MatrixGen<BigInt>,
}

/// Accepted constructor input: `'1 2; 3 4'` or `[[1, 2], [3, 4]]`.
#[derive(Debug, FromPyObject)]
pub enum MatrixSource {
    Text(String),
    List(Vec<Vec<BigInt>>),
}

#[derive(Debug, FromPyObject)]
pub enum MatrixOrInt<'a> {
    Matrix(Bound<'a, PyMatrix>),
    Int(BigInt),
}

impl From<MatrixGen<BigInt>> for PyMatrix {
    fn from(inner: MatrixGen<BigInt>) -> Self {
        PyMatrix { inner }
    }
}

impl PyMatrix {
    fn operate(
        &self,
        other: MatrixOrInt,
        op: impl Fn(&MatrixGen<BigInt>, Operand<'_, BigInt>) -> MatrixResult<MatrixGen<BigInt>>,
    ) -> PyResult<PyMatrix> {
        let result = match other {
            MatrixOrInt::Matrix(other) => op(&self.inner, Operand::Matrix(&other.get().inner)),
            MatrixOrInt::Int(value) => op(&self.inner, Operand::Scalar(value)),
        };
        Ok(result?.into())
    }
}

#[pymethods]
impl PyMatrix {
    #[new]
    pub fn new(data: MatrixSource) -> PyResult<Self> {
        let inner = match data {
            MatrixSource::Text(text) => text.parse::<MatrixGen<BigInt>>()?,
            MatrixSource::List(lines) => MatrixGen::from_list(lines)?,
        };
        Ok(inner.into())
    }

    #[classmethod]
    pub fn from_list(_cls: &Bound<PyType>, lines: Vec<Vec<BigInt>>) -> PyResult<Self> {
        Ok(MatrixGen::from_list(lines)?.into())
    }

    pub fn to_list(&self) -> Vec<Vec<BigInt>> {
        self.inner.to_list()
    }

    pub fn element(&self, row: isize, column: isize) -> PyResult<BigInt> {
        let (row, column) = cell_index(&self.inner, row, column)?;
        Ok(self.inner.element(row, column)?)
    }

    #[getter]
    pub fn rows(&self) -> usize {
        self.inner.rows()
    }

    #[getter]
    pub fn columns(&self) -> usize {
        self.inner.cols()
    }

    #[getter]
    #[allow(non_snake_case)]
    pub fn T(&self) -> PyMatrix {
        self.inner.transpose().into()
    }

    pub fn transpose(&self) -> PyMatrix {
        self.inner.transpose().into()
    }

    pub fn __add__(&self, other: MatrixOrInt) -> PyResult<PyMatrix> {
        self.operate(other, MatrixGen::add)
    }

    pub fn __sub__(&self, other: MatrixOrInt) -> PyResult<PyMatrix> {
        self.operate(other, MatrixGen::subtract)
    }

    pub fn __mul__(&self, other: MatrixOrInt) -> PyResult<PyMatrix> {
        self.operate(other, MatrixGen::multiply)
    }

    pub fn __rmul__(&self, other: BigInt) -> PyMatrix {
        (other * &self.inner).into()
    }

    pub fn __neg__(&self) -> PyMatrix {
        (-&self.inner).into()
    }

    pub fn __eq__(&self, other: &Bound<PyMatrix>) -> bool {
        self.inner == other.get().inner
    }

    pub fn __str__(&self) -> String {
        self.inner.to_string()
    }

    pub fn __repr__(&self) -> String {
        format!("Matrix('{}')", self.inner.to_delimited(&Default::default()))
    }
}

// Module level functions, same names as the pure python implementation

#[pyfunction]
pub fn determinant(matrix: &Bound<PyMatrix>) -> PyResult<BigInt> {
    Ok(cofactor::determinant(&matrix.get().inner)?)
}

#[pyfunction]
pub fn minor(matrix: &Bound<PyMatrix>, i: isize, j: isize) -> PyResult<BigInt> {
    let inner = &matrix.get().inner;
    let (i, j) = cell_index(inner, i, j)?;
    Ok(cofactor::minor(inner, i, j)?)
}

#[pyfunction]
pub fn adjoint(matrix: &Bound<PyMatrix>, row: isize, column: isize) -> PyResult<BigInt> {
    let inner = &matrix.get().inner;
    let (row, column) = cell_index(inner, row, column)?;
    Ok(cofactor::adjoint(inner, row, column)?)
}

#[pyfunction]
pub fn adjoint_matrix(matrix: &Bound<PyMatrix>) -> PyResult<PyMatrix> {
    Ok(cofactor::adjoint_matrix(&matrix.get().inner)?.into())
}

#[pyfunction]
pub fn inverse(matrix: &Bound<PyMatrix>) -> PyResult<PyMatrix> {
    Ok(cofactor::inverse(&matrix.get().inner)?.into())
}

#[pyfunction]
pub fn transpose(matrix: &Bound<PyMatrix>) -> PyMatrix {
    matrix.get().transpose()
}

#[pyfunction]
pub fn identity(size: BigInt) -> PyResult<PyMatrix> {
    Ok(MatrixGen::identity(identity_size(&size)?)?.into())
}

/// Python indices may be negative, those are reported as out of range.
fn cell_index(matrix: &MatrixGen<BigInt>, row: isize, col: isize) -> MatrixResult<(usize, usize)> {
    match (usize::try_from(row), usize::try_from(col)) {
        (Ok(row), Ok(col)) => Ok((row, col)),
        _ => Err(MatrixError::Index {
            row,
            col,
            rows: matrix.rows(),
            cols: matrix.cols(),
        }),
    }
}

/// Python sizes may be negative or huge, only `1..=usize::MAX` is accepted.
fn identity_size(size: &BigInt) -> MatrixResult<usize> {
    if !size.is_positive() {
        return Err(MatrixError::shape(format!(
            "identity size must be positive, got {}",
            size
        )));
    }
    usize::try_from(size).map_err(|_| MatrixError::shape(format!("identity size {} is too large", size)))
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
