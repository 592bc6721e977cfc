//! Packbits - growable bit vectors with ordered byte serialization
//!
//! A [`BitVector`] is a dense sequence of bits that grows on demand when
//! merged with a larger operand. It serializes into the minimal number of
//! bytes, with the byte arrangement chosen by the caller.
//!
//! - **Merging**: bitwise OR that expands to the larger operand
//! - **Scanning**: forward search for the next set bit
//! - **Serialization**: packed bytes in little- or big-endian arrangement
//!
//! # Quick Start
//!
//! ```
//! use packbits::BitVector;
//!
//! let mut mask = BitVector::new(4);
//! mask.set_bit(1, true)?;
//!
//! let mut merged = BitVector::new(8);
//! merged.set_bit(6, true)?;
//! merged.or(&mask);
//!
//! let mut out = Vec::new();
//! merged.write_to(&mut out)?;
//! assert_eq!(out, [0b0100_0010]);
//! # Ok::<(), packbits::BitsError>(())
//! ```

pub mod bits;
pub mod errors;

pub use bits::{BitVector, ByteOrder};
pub use errors::BitsError;
