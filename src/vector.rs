use std::convert::TryFrom;
use std::fmt;
use std::ops::{Add, Index, IndexMut, Mul, Range, Sub};
use std::slice;

use log::{debug, trace};
use serde_derive::{Deserialize, Serialize};

use crate::errors::{Error, Result};
use crate::MAX_VECTOR_SIZE;

/// A heap-allocated vector whose logical indices start at `start_index`.
///
/// A vector of size `n` starting at `s` answers to the indices `s..s + n`;
/// every access outside that window fails with [`Error::OutOfRange`].
/// Copies are always deep: two vectors never share their buffer.
///
/// Construct one with [`Vector::new`] or [`Vector::with_start_index`],
/// then read and write elements either through [`Vector::get`] and
/// [`Vector::get_mut`] or through the panicking `v[i]` sugar.
#[derive(Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawVector<T>")]
pub struct Vector<T> {
    start_index: usize,
    data: Vec<T>,
}

#[derive(Deserialize)]
struct RawVector<T> {
    start_index: usize,
    data: Vec<T>,
}

impl<T> TryFrom<RawVector<T>> for Vector<T> {
    type Error = Error;

    fn try_from(raw: RawVector<T>) -> Result<Self> {
        Vector::from_vec(raw.data, raw.start_index)
    }
}

fn check_window(size: usize, start_index: usize) -> Result<()> {
    if size == 0 || size > MAX_VECTOR_SIZE {
        debug!("rejecting vector of size {}", size);
        return Err(Error::InvalidArgument {
            what: "vector size",
            value: size,
            min: 1,
            max: MAX_VECTOR_SIZE,
        });
    }
    // The window `start_index..start_index + size` must be representable.
    let max_start = usize::MAX - size;
    if start_index > max_start {
        debug!("rejecting start index {} for size {}", start_index, size);
        return Err(Error::InvalidArgument {
            what: "start index",
            value: start_index,
            min: 0,
            max: max_start,
        });
    }
    Ok(())
}

impl<T: Default> Vector<T> {
    /// Create a vector of `size` default elements indexed from zero.
    pub fn new(size: usize) -> Result<Self> {
        Self::with_start_index(size, 0)
    }

    /// Create a vector of `size` default elements indexed from `start_index`.
    pub fn with_start_index(size: usize, start_index: usize) -> Result<Self> {
        check_window(size, start_index)?;
        trace!("allocating vector {}..{}", start_index, start_index + size);
        let mut data = Vec::new();
        data.resize_with(size, Default::default);
        Ok(Vector { start_index, data })
    }
}

impl<T> Vector<T> {
    /// Take ownership of `data`, addressing its first element as `start_index`.
    pub fn from_vec(data: Vec<T>, start_index: usize) -> Result<Self> {
        check_window(data.len(), start_index)?;
        Ok(Vector { start_index, data })
    }

    /// Number of stored elements.
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// The smallest valid logical index.
    pub fn start_index(&self) -> usize {
        self.start_index
    }

    /// One past the last valid logical index.
    pub fn end_index(&self) -> usize {
        self.start_index + self.data.len()
    }

    /// The logical indices this vector answers to.
    pub fn window(&self) -> Range<usize> {
        self.start_index..self.end_index()
    }

    fn offset(&self, index: usize) -> Result<usize> {
        if index < self.start_index || index >= self.end_index() {
            return Err(Error::OutOfRange {
                index,
                start: self.start_index,
                end: self.end_index(),
            });
        }
        Ok(index - self.start_index)
    }

    /// The element at logical position `index`.
    pub fn get(&self, index: usize) -> Result<&T> {
        let offset = self.offset(index)?;
        Ok(&self.data[offset])
    }

    /// A mutable reference to the element at logical position `index`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        let offset = self.offset(index)?;
        Ok(&mut self.data[offset])
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.data.iter()
    }

    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.data.iter_mut()
    }

    pub(crate) fn check_same_window<U>(&self, other: &Vector<U>) -> Result<()> {
        if self.window() != other.window() {
            return Err(Error::SizeMismatch {
                left: self.window(),
                right: other.window(),
            });
        }
        Ok(())
    }
}

impl<T: Clone> Vector<T> {
    /// Make `self` a deep copy of `other`, taking over its size and start
    /// index. The existing buffer is reused where possible.
    pub fn assign(&mut self, other: &Self) {
        self.clone_from(other);
    }

    fn map<F>(&self, f: F) -> Vector<T>
    where
        F: FnMut(&T) -> T,
    {
        Vector {
            start_index: self.start_index,
            data: self.data.iter().map(f).collect(),
        }
    }

    fn zip_with<F>(&self, other: &Self, mut f: F) -> Result<Vector<T>>
    where
        F: FnMut(&T, &T) -> T,
    {
        self.check_same_window(other)?;
        Ok(Vector {
            start_index: self.start_index,
            data: self
                .data
                .iter()
                .zip(other.data.iter())
                .map(|(a, b)| f(a, b))
                .collect(),
        })
    }

    pub fn add_scalar(&self, scalar: T) -> Vector<T>
    where
        T: Add<Output = T>,
    {
        self.map(|x| x.clone() + scalar.clone())
    }

    pub fn sub_scalar(&self, scalar: T) -> Vector<T>
    where
        T: Sub<Output = T>,
    {
        self.map(|x| x.clone() - scalar.clone())
    }

    pub fn mul_scalar(&self, scalar: T) -> Vector<T>
    where
        T: Mul<Output = T>,
    {
        self.map(|x| x.clone() * scalar.clone())
    }

    /// Elementwise sum. Both operands must cover the same index window.
    pub fn try_add(&self, other: &Self) -> Result<Vector<T>>
    where
        T: Add<Output = T>,
    {
        self.zip_with(other, |a, b| a.clone() + b.clone())
    }

    /// Elementwise difference. Both operands must cover the same index window.
    pub fn try_sub(&self, other: &Self) -> Result<Vector<T>>
    where
        T: Sub<Output = T>,
    {
        self.zip_with(other, |a, b| a.clone() - b.clone())
    }

    /// Sum of the elementwise products, starting from `T::default()`.
    pub fn dot(&self, other: &Self) -> Result<T>
    where
        T: Default + Add<Output = T> + Mul<Output = T>,
    {
        self.check_same_window(other)?;
        Ok(self
            .data
            .iter()
            .zip(other.data.iter())
            .fold(T::default(), |acc, (a, b)| acc + a.clone() * b.clone()))
    }
}

impl<T: Clone> Clone for Vector<T> {
    fn clone(&self) -> Self {
        Vector {
            start_index: self.start_index,
            data: self.data.clone(),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.start_index = source.start_index;
        self.data.clone_from(&source.data);
    }
}

impl<T> Index<usize> for Vector<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Ok(element) => element,
            Err(e) => panic!("{}", e),
        }
    }
}

impl<T> IndexMut<usize> for Vector<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        match self.get_mut(index) {
            Ok(element) => element,
            Err(e) => panic!("{}", e),
        }
    }
}

impl<'a, T> IntoIterator for &'a Vector<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<T: fmt::Display> fmt::Display for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, element) in self.data.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", element)?;
        }
        Ok(())
    }
}
