use thiserror::Error;

/// Errors produced by bit vector operations.
///
/// Mutation and query operations are total except for [`set_bit`], which
/// rejects out-of-range positions, and the write path, which surfaces sink
/// failures unmodified.
///
/// [`set_bit`]: crate::BitVector::set_bit
#[derive(Error, Debug)]
pub enum BitsError {
    #[error("bit position {position} is out of bounds for a vector of {len} bits")]
    OutOfBounds { position: usize, len: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
