use itertools::Itertools;
use std::str::FromStr;

use crate::error::{MatrixError, MatrixResult};
use crate::matrix::matrix::Matrix;
use crate::matrix::matrix_gen::{GenElement, MatrixGen};

/// Delimited text encoding of a matrix, e.g. `1 2 3; 2 0 -1; 3 2 2`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatrixFormat {
    pub row_delimiter: String,
    pub column_delimiter: String,
}

impl Default for MatrixFormat {
    fn default() -> Self {
        MatrixFormat {
            row_delimiter: "; ".into(),
            column_delimiter: " ".into(),
        }
    }
}

impl MatrixFormat {
    pub fn new(row_delimiter: &str, column_delimiter: &str) -> Self {
        MatrixFormat {
            row_delimiter: row_delimiter.into(),
            column_delimiter: column_delimiter.into(),
        }
    }

    /// Split `text` into rows of values. Ragged rows are reported as
    /// `MatrixError::Parse`.
    pub fn parse<T: FromStr>(&self, text: &str) -> MatrixResult<Vec<Vec<T>>> {
        let text = text.trim_end_matches(['\r', '\n']);
        if text.trim().is_empty() {
            return Err(MatrixError::parse("no values given"));
        }

        let lines = text
            .split(self.row_delimiter.as_str())
            .enumerate()
            .map(|(row, line)| {
                line.split(self.column_delimiter.as_str())
                    .map(|token| {
                        token.trim().parse::<T>().map_err(|_| {
                            MatrixError::parse(format!(
                                "invalid integer {:?} in row {}",
                                token, row
                            ))
                        })
                    })
                    .collect::<MatrixResult<Vec<T>>>()
            })
            .collect::<MatrixResult<Vec<Vec<T>>>>()?;

        let cols = lines[0].len();
        if let Some(bad) = lines.iter().position(|line| line.len() != cols) {
            return Err(MatrixError::parse(format!(
                "row {} has {} values, expected {}",
                bad,
                lines[bad].len(),
                cols
            )));
        }

        Ok(lines)
    }

    pub fn parse_matrix<T: GenElement + FromStr>(&self, text: &str) -> MatrixResult<MatrixGen<T>> {
        MatrixGen::from_list(self.parse(text)?)
    }

    pub fn render<T: GenElement>(&self, matrix: &MatrixGen<T>) -> String {
        (0..matrix.rows())
            .map(|r| matrix.row(r).iter().join(&self.column_delimiter))
            .join(&self.row_delimiter)
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
