use std::convert::TryFrom;
use std::fmt;
use std::ops::{Add, Index, IndexMut, Sub};

use log::{debug, trace};
use serde_derive::{Deserialize, Serialize};

use crate::errors::{Error, Result};
use crate::vector::Vector;
use crate::MAX_MATRIX_SIZE;

/// An upper-triangular square matrix.
///
/// Row `i` of a matrix of size `n` is a [`Vector`] of `n - i` elements
/// starting at index `i`, so only the cells on or above the diagonal are
/// stored. `m[i][j]` reads a cell through both bounds checks, and
/// `m[(i, j)]` reads or writes one. Cells below the diagonal are out of
/// range.
#[derive(Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawMatrix<T>")]
pub struct Matrix<T> {
    rows: Vector<Vector<T>>,
}

#[derive(Deserialize)]
struct RawMatrix<T> {
    rows: Vector<Vector<T>>,
}

impl<T> TryFrom<RawMatrix<T>> for Matrix<T> {
    type Error = Error;

    fn try_from(raw: RawMatrix<T>) -> Result<Self> {
        Matrix::from_rows(raw.rows)
    }
}

fn check_size(size: usize) -> Result<()> {
    if size == 0 || size > MAX_MATRIX_SIZE {
        debug!("rejecting matrix of size {}", size);
        return Err(Error::InvalidArgument {
            what: "matrix size",
            value: size,
            min: 1,
            max: MAX_MATRIX_SIZE,
        });
    }
    Ok(())
}

fn exactly(what: &'static str, value: usize, expected: usize) -> Result<()> {
    if value != expected {
        return Err(Error::InvalidArgument {
            what,
            value,
            min: expected,
            max: expected,
        });
    }
    Ok(())
}

impl<T: Default> Matrix<T> {
    /// Create a `size` x `size` matrix with every stored cell defaulted.
    pub fn new(size: usize) -> Result<Self> {
        check_size(size)?;
        trace!("allocating {}x{} triangular matrix", size, size);
        let rows = (0..size)
            .map(|i| Vector::with_start_index(size - i, i))
            .collect::<Result<Vec<_>>>()?;
        Ok(Matrix {
            rows: Vector::from_vec(rows, 0)?,
        })
    }
}

impl<T> Matrix<T> {
    /// Wrap a row table, checking that it has the triangular shape.
    fn from_rows(rows: Vector<Vector<T>>) -> Result<Self> {
        let size = rows.size();
        check_size(size)?;
        exactly("row table start index", rows.start_index(), 0)?;
        for (i, row) in rows.iter().enumerate() {
            exactly("row start index", row.start_index(), i)?;
            exactly("row size", row.size(), size - i)?;
        }
        Ok(Matrix { rows })
    }

    /// Number of rows, which is also the number of columns.
    pub fn size(&self) -> usize {
        self.rows.size()
    }

    /// Row `i`, holding the columns `i..size`.
    pub fn row(&self, i: usize) -> Result<&Vector<T>> {
        self.rows.get(i)
    }

    pub fn rows(&self) -> impl Iterator<Item = &Vector<T>> {
        self.rows.iter()
    }

    pub fn get(&self, i: usize, j: usize) -> Result<&T> {
        self.rows.get(i)?.get(j)
    }

    pub fn get_mut(&mut self, i: usize, j: usize) -> Result<&mut T> {
        self.rows.get_mut(i)?.get_mut(j)
    }

    fn check_same_size(&self, other: &Self) -> Result<()> {
        self.rows.check_same_window(&other.rows)
    }
}

impl<T: Clone> Matrix<T> {
    /// Make `self` a deep copy of `other`, size included.
    pub fn assign(&mut self, other: &Self) {
        self.clone_from(other);
    }

    fn zip_rows<F>(&self, other: &Self, f: F) -> Result<Matrix<T>>
    where
        F: Fn(&Vector<T>, &Vector<T>) -> Result<Vector<T>>,
    {
        self.check_same_size(other)?;
        let rows = self
            .rows
            .iter()
            .zip(other.rows.iter())
            .map(|(a, b)| f(a, b))
            .collect::<Result<Vec<_>>>()?;
        Ok(Matrix {
            rows: Vector::from_vec(rows, 0)?,
        })
    }

    /// Elementwise sum over the stored triangle.
    pub fn try_add(&self, other: &Self) -> Result<Matrix<T>>
    where
        T: Add<Output = T>,
    {
        self.zip_rows(other, Vector::try_add)
    }

    /// Elementwise difference over the stored triangle.
    pub fn try_sub(&self, other: &Self) -> Result<Matrix<T>>
    where
        T: Sub<Output = T>,
    {
        self.zip_rows(other, Vector::try_sub)
    }
}

impl<T: Clone> Clone for Matrix<T> {
    fn clone(&self) -> Self {
        Matrix {
            rows: self.rows.clone(),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.rows.clone_from(&source.rows);
    }
}

impl<T> Index<usize> for Matrix<T> {
    type Output = Vector<T>;

    fn index(&self, i: usize) -> &Vector<T> {
        &self.rows[i]
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, (i, j): (usize, usize)) -> &T {
        &self.rows[i][j]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut T {
        &mut self.rows[i][j]
    }
}

impl<T: fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for _ in 0..i {
                f.write_str("0 ")?;
            }
            write!(f, "{}", row)?;
        }
        Ok(())
    }
}
