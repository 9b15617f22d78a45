use pyo3::prelude::*;

pub mod error;
pub mod matrix {
    pub mod cofactor;
    pub mod format;
    pub mod matrix;
    pub mod matrix_gen;
    pub mod matrix_py;
    pub mod operand;
}
pub mod rings {
    pub mod fraction;
}

pub use error::{MatrixError, MatrixResult};
pub use matrix::cofactor::{adjoint, adjoint_matrix, determinant, inverse, inverse_exact, minor};
pub use matrix::format::MatrixFormat;
pub use matrix::matrix::Matrix;
pub use matrix::matrix_gen::{GenElement, MatrixGen};
pub use matrix::operand::Operand;
pub use rings::fraction::Fraction;

/// Integer matrices with exact determinant, cofactors and inverse.
#[pymodule]
fn rust_matrices(_py: Python, m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<matrix::matrix_py::PyMatrix>()?;
    m.add_function(wrap_pyfunction!(matrix::matrix_py::determinant, m)?)?;
    m.add_function(wrap_pyfunction!(matrix::matrix_py::minor, m)?)?;
    m.add_function(wrap_pyfunction!(matrix::matrix_py::adjoint, m)?)?;
    m.add_function(wrap_pyfunction!(matrix::matrix_py::adjoint_matrix, m)?)?;
    m.add_function(wrap_pyfunction!(matrix::matrix_py::inverse, m)?)?;
    m.add_function(wrap_pyfunction!(matrix::matrix_py::transpose, m)?)?;
    m.add_function(wrap_pyfunction!(matrix::matrix_py::identity, m)?)?;
    Ok(())
}
