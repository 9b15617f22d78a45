use crate::error::MatrixResult;

pub trait Matrix<T>
where
    Self: Sized,
{
    /// Build a matrix from rows of equal length.
    fn from_list(lines: Vec<Vec<T>>) -> MatrixResult<Self>;
    fn to_list(&self) -> Vec<Vec<T>>;

    fn rows(&self) -> usize;
    fn cols(&self) -> usize;
    fn is_square(&self) -> bool {
        self.rows() == self.cols()
    }

    fn identity(n: usize) -> MatrixResult<Self>;
    fn transpose(&self) -> Self;

    /// Bounds-checked access.
    fn element(&self, row: usize, col: usize) -> MatrixResult<T>;
    fn at(&self, row: usize, col: usize) -> T;
}
