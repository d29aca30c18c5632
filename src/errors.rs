use std::ops::Range;

use thiserror::Error;

/// An error which can occur when building, indexing or combining
/// vectors and matrices.
#[derive(Error, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    /// A size or start index that cannot describe a container.
    #[error("invalid {what}: {value} (must be in {min}..={max})")]
    InvalidArgument {
        what: &'static str,
        value: usize,
        min: usize,
        max: usize,
    },
    /// An index outside the addressable window `start..end`.
    #[error("index {index} out of range {start}..{end}")]
    OutOfRange { index: usize, start: usize, end: usize },
    /// A binary operation between operands whose index windows differ.
    #[error("size mismatch: {left:?} vs {right:?}")]
    SizeMismatch {
        left: Range<usize>,
        right: Range<usize>,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
