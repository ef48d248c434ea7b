//! Bit string type for the ASN.1 runtime

use crate::error::{AsnError, AsnResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Single-bit masks indexed by bit offset within a byte (MSB first)
const SET_MASK: [u8; 8] = [0x80, 0x40, 0x20, 0x10, 0x08, 0x04, 0x02, 0x01];

/// Masks of the bits kept in the last byte, indexed by unused bit count.
/// Index 8 keeps nothing.
const KEEP_MASK: [u8; 9] = [0xFF, 0xFE, 0xFC, 0xF8, 0xF0, 0xE0, 0xC0, 0x80, 0x00];

/// Arbitrary string of bits (zeros and ones). A bit string value can have any length including zero.
///
/// Bits are packed into bytes most-significant bit first: bit 0 is the MSB of
/// byte 0, bit 7 the LSB of byte 0, bit 8 the MSB of byte 1, and so on. The
/// last `unused_bits` low-order bits of the final byte are not part of the
/// value.
///
/// Reads outside the logical length return `false`, writes past the end grow
/// the string, and only [`BitString::trim_trailing_zeros`] shrinks it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "BitStringParts", into = "BitStringParts")]
pub struct BitString {
    bytes: Vec<u8>,
    unused_bits: u8,
}

/// Serialized form of a bit string, validated on the way back in.
#[derive(Serialize, Deserialize)]
struct BitStringParts {
    bytes: Vec<u8>,
    unused_bits: u8,
}

impl BitString {
    /// Construct an empty bit string.
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct a bit string from packed bytes and the unused bit count of the last byte.
    ///
    /// # Arguments
    ///
    /// * `bytes` - The bits packed into bytes, MSB first
    /// * `unused_bits` - Number of unused low-order bits in the last byte (0-7)
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `unused_bits > 7`
    /// - `bytes` is empty and `unused_bits` > 0
    ///
    /// Padding bits are kept as given; call [`BitString::clear_unused_bits`]
    /// to zero them.
    pub fn from_parts(bytes: Vec<u8>, unused_bits: u8) -> AsnResult<Self> {
        if unused_bits > 7 {
            return Err(AsnError::InvalidData(format!(
                "Unused bits must be 0-7, got {}",
                unused_bits
            )));
        }
        if bytes.is_empty() && unused_bits != 0 {
            return Err(AsnError::InvalidData(format!(
                "Empty bit string cannot have {} unused bits",
                unused_bits
            )));
        }

        Ok(Self { bytes, unused_bits })
    }

    /// Construct an all-zero bit string holding `num_bits` bits.
    pub fn with_len(num_bits: usize) -> Self {
        let num_bytes = num_bits.div_ceil(8);
        Self {
            bytes: vec![0; num_bytes],
            unused_bits: unused_for_len(num_bits),
        }
    }

    /// Get the packed storage.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Number of unused low-order bits in the last byte.
    pub fn unused_bits(&self) -> u8 {
        self.unused_bits
    }

    /// Split into packed storage and unused bit count.
    pub fn into_parts(self) -> (Vec<u8>, u8) {
        (self.bytes, self.unused_bits)
    }

    /// Logical length in bits: `8 * bytes - unused_bits`.
    pub fn len(&self) -> usize {
        if self.bytes.is_empty() {
            return 0;
        }
        (self.bytes.len() << 3) - self.unused_bits as usize
    }

    /// Whether the bit string holds no bits.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get the bit at a specific position
    ///
    /// # Arguments
    /// * `position` - The bit index (0-based)
    ///
    /// # Returns
    /// `true` if the bit is set. Positions at or beyond the logical length,
    /// including padding bits of the last byte, read as `false`.
    pub fn bit(&self, position: usize) -> bool {
        let index = position / 8;
        let offset = position % 8;

        let Some(&byte) = self.bytes.get(index) else {
            return false;
        };
        if index == self.bytes.len() - 1 && offset >= 8 - self.unused_bits as usize {
            return false;
        }
        byte & SET_MASK[offset] != 0
    }

    /// Set the bit at a specific position
    ///
    /// # Arguments
    /// * `position` - The bit index (0-based)
    /// * `value` - The value to set (true = 1, false = 0)
    ///
    /// Writing at or past the logical length grows the string to
    /// `position + 1` bits. New storage bytes are zero-filled.
    pub fn set_bit(&mut self, position: usize, value: bool) {
        let size = self.len();
        let index = position / 8;
        let offset = position % 8;

        if index >= self.bytes.len() {
            log::trace!(
                "Growing bit string storage from {} to {} bytes",
                self.bytes.len(),
                index + 1
            );
            self.bytes.resize(index + 1, 0);
        }

        if value {
            self.bytes[index] |= SET_MASK[offset];
        } else {
            self.bytes[index] &= !SET_MASK[offset];
        }

        if position >= size {
            self.unused_bits = unused_for_len(position + 1);
        }
    }

    /// Append a bit at the end of the string.
    pub fn push(&mut self, value: bool) {
        self.set_bit(self.len(), value);
    }

    /// Drop trailing zero bits
    ///
    /// Keeps every bit up to and including the highest set bit. A string
    /// without any set bit becomes empty. Padding bits of the new last byte
    /// are cleared so the storage is canonical.
    pub fn trim_trailing_zeros(&mut self) {
        if self.bytes.is_empty() {
            return;
        }

        let keep_bits = (0..self.len())
            .rev()
            .find(|&i| self.bit(i))
            .map_or(0, |i| i + 1);

        if keep_bits == 0 {
            log::trace!("Trimmed bit string of {} bits to empty", self.len());
            self.bytes.clear();
            self.unused_bits = 0;
            return;
        }

        let num_bytes = ((keep_bits - 1) >> 3) + 1;
        log::trace!("Trimmed bit string of {} bits to {}", self.len(), keep_bits);
        self.unused_bits = unused_for_len(keep_bits);
        self.bytes.truncate(num_bytes);
        self.clear_unused_bits();
    }

    /// Zero the unused low-order bits of the last byte.
    pub fn clear_unused_bits(&mut self) {
        if let Some(last) = self.bytes.last_mut() {
            *last &= KEEP_MASK[self.unused_bits as usize];
        }
    }

    /// Iterate over the logical bits, first bit first.
    pub fn bits(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.len()).map(move |i| self.bit(i))
    }
}

/// Unused bits in the last byte of a string holding `num_bits` bits.
fn unused_for_len(num_bits: usize) -> u8 {
    ((8 - num_bits % 8) % 8) as u8
}

impl TryFrom<BitStringParts> for BitString {
    type Error = AsnError;

    fn try_from(parts: BitStringParts) -> AsnResult<Self> {
        Self::from_parts(parts.bytes, parts.unused_bits)
    }
}

impl From<BitString> for BitStringParts {
    fn from(bit_string: BitString) -> Self {
        Self {
            bytes: bit_string.bytes,
            unused_bits: bit_string.unused_bits,
        }
    }
}

impl FromIterator<bool> for BitString {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        let mut bit_string = BitString::new();
        for bit in iter {
            bit_string.push(bit);
        }
        bit_string
    }
}

/// ASN.1 binary notation, e.g. `'1011'B`
impl fmt::Display for BitString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("'")?;
        for bit in self.bits() {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        f.write_str("'B")
    }
}
