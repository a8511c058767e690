use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize, Serializer};

use crate::{Error, Result};

/// A square matrix stored row-major in one contiguous buffer.
///
/// Serializes as a list of rows and is validated through
/// [`Matrix::from_rows`] when deserialized.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "Vec<Vec<T>>")]
pub struct Matrix<T> {
    /// Number of rows (and columns)
    size: usize,

    /// Cells in row-major order, `size * size` of them
    cells: Vec<T>,
}

impl<T: Clone> Matrix<T> {
    /// Creates a `size x size` matrix with every cell set to `fill`
    pub fn new(size: usize, fill: T) -> Self {
        Matrix {
            size,
            cells: vec![fill; size * size],
        }
    }
}

impl<T> Matrix<T> {
    /// Builds a matrix from a list of rows.
    ///
    /// Fails with [`Error::InvalidArgument`] when there are no rows or when any
    /// row length differs from the number of rows.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        let size = rows.len();
        if size == 0 {
            return Err(Error::InvalidArgument("matrix must not be empty".to_string()));
        }
        if let Some((index, row)) = rows.iter().enumerate().find(|(_, row)| row.len() != size) {
            return Err(Error::InvalidArgument(format!(
                "matrix must be square: row {} has {} columns, expected {}",
                index,
                row.len(),
                size
            )));
        }

        let cells = rows.into_iter().flatten().collect();
        Ok(Matrix { size, cells })
    }

    /// Number of rows (equal to the number of columns)
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the cell at `(row, column)` or `None` when either index is out of range
    pub fn get(&self, row: usize, column: usize) -> Option<&T> {
        if row < self.size && column < self.size {
            self.cells.get(row * self.size + column)
        } else {
            None
        }
    }

    /// Returns a mutable reference to the cell at `(row, column)`
    pub fn get_mut(&mut self, row: usize, column: usize) -> Option<&mut T> {
        if row < self.size && column < self.size {
            self.cells.get_mut(row * self.size + column)
        } else {
            None
        }
    }

    /// Returns one full row, or `None` when `row` is out of range
    pub fn row(&self, row: usize) -> Option<&[T]> {
        if row < self.size {
            Some(&self.cells[row * self.size..(row + 1) * self.size])
        } else {
            None
        }
    }

    /// Iterates over the rows in order
    pub fn rows(&self) -> impl Iterator<Item = &[T]> + '_ {
        // chunks(0) panics, and a zero-sized matrix has no rows anyway
        self.cells.chunks(self.size.max(1))
    }

    /// Iterates over every cell in row-major order
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.cells.iter()
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, (row, column): (usize, usize)) -> &T {
        assert!(column < self.size, "column {} out of range for size {}", column, self.size);
        &self.cells[row * self.size + column]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, (row, column): (usize, usize)) -> &mut T {
        assert!(column < self.size, "column {} out of range for size {}", column, self.size);
        &mut self.cells[row * self.size + column]
    }
}

impl<T> TryFrom<Vec<Vec<T>>> for Matrix<T> {
    type Error = Error;

    fn try_from(rows: Vec<Vec<T>>) -> Result<Self> {
        Matrix::from_rows(rows)
    }
}

impl<T: Serialize> Serialize for Matrix<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.rows())
    }
}
