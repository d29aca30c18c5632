//! Bounds-checked containers: a [`Vector`] whose indices start at a chosen
//! offset, and an upper-triangular [`Matrix`] built from such vectors.
//!
//! ```
//! use utmatrix::{Error, Matrix, Vector};
//!
//! # fn main() -> Result<(), Error> {
//! let mut v = Vector::<i32>::with_start_index(3, 2)?;
//! v[2] = 1;
//! assert_eq!(v.get(5).unwrap_err(), Error::OutOfRange { index: 5, start: 2, end: 5 });
//! assert_eq!((&v + 1).as_slice(), &[2, 1, 1]);
//!
//! let mut m = Matrix::<i32>::new(2)?;
//! m[(0, 1)] = 4;
//! assert_eq!(m[0][1], 4);
//! assert!(m.get(1, 0).is_err());
//! # Ok(())
//! # }
//! ```

pub mod errors;
pub mod matrix;
mod ops;
pub mod vector;

pub use crate::errors::{Error, Result};
pub use crate::matrix::Matrix;
pub use crate::vector::Vector;

/// The largest size a [`Vector`] can be constructed with.
pub const MAX_VECTOR_SIZE: usize = 100_000_000;

/// The largest size a [`Matrix`] can be constructed with.
pub const MAX_MATRIX_SIZE: usize = 10_000;
