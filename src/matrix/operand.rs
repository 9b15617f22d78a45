use crate::matrix::matrix_gen::MatrixGen;

/// Right-hand side of `+`, `-` and `*`: either a scalar applied to every
/// cell or a whole matrix.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand<'a, T> {
    Scalar(T),
    Matrix(&'a MatrixGen<T>),
}

impl<'a, T> From<&'a MatrixGen<T>> for Operand<'a, T> {
    fn from(matrix: &'a MatrixGen<T>) -> Self {
        Operand::Matrix(matrix)
    }
}
