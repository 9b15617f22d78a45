use pyo3::exceptions::{PyIndexError, PyValueError};
use pyo3::PyErr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatrixError {
    /// Dimensions are not compatible with the requested operation.
    #[error("shape error: {0}")]
    Shape(String),

    /// The textual encoding of a matrix is malformed.
    #[error("parse error: {0}")]
    Parse(String),

    #[error("this matrix has no inverse (determinant is 0)")]
    SingularMatrix,

    #[error("index ({row}, {col}) out of range for a {rows}x{cols} matrix")]
    Index {
        row: isize,
        col: isize,
        rows: usize,
        cols: usize,
    },
}

pub type MatrixResult<T> = Result<T, MatrixError>;

impl MatrixError {
    pub fn shape(message: impl Into<String>) -> Self {
        MatrixError::Shape(message.into())
    }

    pub fn parse(message: impl Into<String>) -> Self {
        MatrixError::Parse(message.into())
    }

    pub fn out_of_range(row: usize, col: usize, rows: usize, cols: usize) -> Self {
        MatrixError::Index {
            row: row as isize,
            col: col as isize,
            rows,
            cols,
        }
    }
}

impl From<MatrixError> for PyErr {
    fn from(error: MatrixError) -> PyErr {
        match error {
            MatrixError::Index { .. } => PyIndexError::new_err(error.to_string()),
            _ => PyValueError::new_err(error.to_string()),
        }
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
