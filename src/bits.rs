//! Growable bit vector with OR-merging and packed byte serialization

use std::fmt;
use std::io::Write;

use tracing::trace;

use crate::errors::BitsError;

/// Byte arrangement used when serializing a [`BitVector`].
///
/// Only the order of the emitted bytes changes. Bit packing within each byte
/// is fixed: bit `i` of the vector carries weight `1 << (i % 8)` inside byte
/// `i / 8`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ByteOrder {
    /// Byte 0 first. The default.
    #[default]
    LittleEndian,
    /// Highest-indexed byte first.
    BigEndian,
}

/// A dense, growable sequence of bits addressed by position.
///
/// Created with a fixed number of bits, all unset. Capacity only ever grows,
/// and only as a side effect of [`or`](Self::or) with a larger operand;
/// [`set_bit`](Self::set_bit) never grows the vector.
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BitVector {
    bits: Vec<bool>,
}

impl BitVector {
    /// Creates a vector of `size` bits, all unset.
    pub fn new(size: usize) -> Self {
        Self {
            bits: vec![false; size],
        }
    }

    /// Current capacity in bits.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Reads the bit at `position`. Positions at or beyond [`len`](Self::len)
    /// read as unset.
    pub fn get(&self, position: usize) -> bool {
        self.bits.get(position).copied().unwrap_or(false)
    }

    /// Sets the bit at `position` to `value`.
    ///
    /// Fails with [`BitsError::OutOfBounds`] when `position >= len()`,
    /// leaving the vector unmodified. Growth happens only through
    /// [`or`](Self::or), never here.
    pub fn set_bit(&mut self, position: usize, value: bool) -> Result<(), BitsError> {
        let len = self.bits.len();
        match self.bits.get_mut(position) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(BitsError::OutOfBounds { position, len }),
        }
    }

    /// Unsets every bit, preserving capacity.
    pub fn clear(&mut self) {
        self.bits.fill(false);
    }

    /// Merges `other` into `self` with bitwise OR.
    ///
    /// The result holds `max(self.len(), other.len())` bits: a larger `other`
    /// grows `self` first (new positions start unset), while positions of a
    /// larger `self` beyond `other.len()` are left untouched.
    pub fn or(&mut self, other: &BitVector) {
        if self.bits.len() < other.bits.len() {
            trace!(
                from = self.bits.len(),
                to = other.bits.len(),
                "growing bit vector for or-merge"
            );
            self.bits.resize(other.bits.len(), false);
        }
        for (slot, &bit) in self.bits.iter_mut().zip(&other.bits) {
            *slot |= bit;
        }
    }

    /// Serializes the vector to `sink` in little-endian byte order.
    ///
    /// Convenience wrapper over [`write_to_ordered`](Self::write_to_ordered).
    pub fn write_to<W: Write>(&self, sink: W) -> Result<(), BitsError> {
        self.write_to_ordered(sink, ByteOrder::LittleEndian)
    }

    /// Serializes the vector to `sink`, emitting exactly `len().div_ceil(8)`
    /// bytes.
    ///
    /// Bit `i` is packed into byte `i / 8` at weight `1 << (i % 8)`; unused
    /// positions of the trailing partial byte are zero padding. `order`
    /// controls only the emission order of the packed bytes. Sink failures
    /// propagate unmodified.
    pub fn write_to_ordered<W: Write>(&self, mut sink: W, order: ByteOrder) -> Result<(), BitsError> {
        let byte_count = self.bits.len().div_ceil(8);
        let mut buf = vec![0u8; byte_count];
        for (position, &bit) in self.bits.iter().enumerate() {
            if bit {
                buf[position / 8] |= 1u8 << (position % 8);
            }
        }

        if order == ByteOrder::BigEndian {
            buf.reverse();
        }

        trace!(bytes = byte_count, ?order, "writing bit vector");
        sink.write_all(&buf)?;
        Ok(())
    }

    /// Scans forward from `position` (clamped to the valid index range) and
    /// returns the first set bit, or `None` if the scan finds nothing.
    ///
    /// The scan's upper bound is `len() - 1` *exclusive*: a bit at the final
    /// index is never reported. Existing consumers of the serialized masks
    /// depend on this bound, so it is preserved as-is.
    pub fn next_set_bit(&self, position: usize) -> Option<usize> {
        let last = self.bits.len().checked_sub(1)?;
        let start = position.min(last);
        self.bits[start..last]
            .iter()
            .position(|&bit| bit)
            .map(|offset| start + offset)
    }
}

impl fmt::Debug for BitVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set()
            .entries(
                self.bits
                    .iter()
                    .enumerate()
                    .filter_map(|(idx, &bit)| bit.then_some(idx)),
            )
            .finish()
    }
}
