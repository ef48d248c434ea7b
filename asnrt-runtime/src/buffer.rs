//! Buffer capability and the reference byte buffer

use asnrt_core::{AsnError, AsnResult, EncodingRules};
use bytes::{Buf, BufMut, BytesMut};
use std::any::Any;

/// Byte sink/source handed to encode and decode
///
/// Backends downcast through [`Buffer::as_any_mut`] to reach their own
/// buffer type; the runtime itself only needs the three capabilities below.
pub trait Buffer {
    /// Encoding rules the buffer was created with
    fn encoding_rules(&self) -> EncodingRules;

    /// View of the raw byte contents
    fn array(&self) -> &[u8];

    /// Switch between write-mode accumulation and read-mode consumption
    fn flip(&mut self);

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// Direction a [`ByteBuffer`] currently operates in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferMode {
    Write,
    Read,
}

/// Growable byte buffer implementing [`Buffer`]
///
/// # Flip Semantics
///
/// - Write → Read: the read cursor rewinds to the first stored byte
/// - Read → Write: bytes already consumed are discarded, unread bytes stay
///   in front of anything written next
#[derive(Debug, Clone)]
pub struct ByteBuffer {
    encoding_rules: EncodingRules,
    data: BytesMut,
    position: usize,
    mode: BufferMode,
}

impl ByteBuffer {
    /// Create an empty buffer in write mode
    ///
    /// # Arguments
    /// * `capacity` - Initial capacity in bytes
    /// * `encoding_rules` - Encoding rules the contents follow
    pub fn with_capacity(capacity: usize, encoding_rules: EncodingRules) -> Self {
        Self {
            encoding_rules,
            data: BytesMut::with_capacity(capacity),
            position: 0,
            mode: BufferMode::Write,
        }
    }

    /// Wrap existing bytes in a buffer ready for reading
    pub fn wrap(bytes: &[u8], encoding_rules: EncodingRules) -> Self {
        Self {
            encoding_rules,
            data: BytesMut::from(bytes),
            position: 0,
            mode: BufferMode::Read,
        }
    }

    pub fn mode(&self) -> BufferMode {
        self.mode
    }

    /// Current read position
    pub fn position(&self) -> usize {
        self.position
    }

    /// Unread bytes (always 0 in write mode)
    pub fn remaining(&self) -> usize {
        match self.mode {
            BufferMode::Read => self.data.len() - self.position,
            BufferMode::Write => 0,
        }
    }

    /// Number of stored bytes
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    fn ensure_mode(&self, expected: BufferMode) -> AsnResult<()> {
        if self.mode != expected {
            return Err(AsnError::Buffer(format!(
                "Buffer is in {:?} mode, operation needs {:?} mode",
                self.mode, expected
            )));
        }
        Ok(())
    }

    /// Append one byte
    pub fn put_u8(&mut self, value: u8) -> AsnResult<()> {
        self.ensure_mode(BufferMode::Write)?;
        self.data.put_u8(value);
        Ok(())
    }

    /// Append bytes
    pub fn put_slice(&mut self, bytes: &[u8]) -> AsnResult<()> {
        self.ensure_mode(BufferMode::Write)?;
        self.data.put_slice(bytes);
        Ok(())
    }

    /// Read one byte
    pub fn get_u8(&mut self) -> AsnResult<u8> {
        self.ensure_mode(BufferMode::Read)?;
        let byte = *self.data.get(self.position).ok_or_else(|| {
            AsnError::Buffer("Buffer exhausted while reading byte".to_string())
        })?;
        self.position += 1;
        Ok(byte)
    }

    /// Read `count` bytes
    pub fn get_slice(&mut self, count: usize) -> AsnResult<&[u8]> {
        self.ensure_mode(BufferMode::Read)?;
        if count > self.remaining() {
            return Err(AsnError::Buffer(format!(
                "Buffer exhausted: need {} bytes, have {}",
                count,
                self.remaining()
            )));
        }
        let start = self.position;
        self.position += count;
        Ok(&self.data[start..start + count])
    }

    /// Take the stored bytes
    pub fn into_bytes(self) -> Vec<u8> {
        self.data.to_vec()
    }
}

impl Buffer for ByteBuffer {
    fn encoding_rules(&self) -> EncodingRules {
        self.encoding_rules
    }

    fn array(&self) -> &[u8] {
        &self.data
    }

    fn flip(&mut self) {
        match self.mode {
            BufferMode::Write => {
                self.position = 0;
                self.mode = BufferMode::Read;
            }
            BufferMode::Read => {
                self.data.advance(self.position);
                self.position = 0;
                self.mode = BufferMode::Write;
            }
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_flip_read() {
        let mut buffer = ByteBuffer::with_capacity(8, EncodingRules::Distinguished);
        buffer.put_u8(0x03).unwrap();
        buffer.put_slice(&[0x02, 0xA0]).unwrap();
        assert_eq!(buffer.array(), &[0x03, 0x02, 0xA0]);
        assert_eq!(buffer.remaining(), 0);

        buffer.flip();
        assert_eq!(buffer.mode(), BufferMode::Read);
        assert_eq!(buffer.get_u8().unwrap(), 0x03);
        assert_eq!(buffer.get_slice(2).unwrap(), &[0x02, 0xA0]);
        assert!(buffer.get_u8().is_err());
    }

    #[test]
    fn test_flip_back_discards_consumed() {
        let mut buffer = ByteBuffer::wrap(&[1, 2, 3], EncodingRules::Basic);
        assert_eq!(buffer.get_u8().unwrap(), 1);
        buffer.flip();
        assert_eq!(buffer.mode(), BufferMode::Write);
        buffer.put_u8(4).unwrap();
        assert_eq!(buffer.array(), &[2, 3, 4]);

        buffer.flip();
        assert_eq!(buffer.remaining(), 3);
    }

    #[test]
    fn test_mode_mismatch() {
        let mut buffer = ByteBuffer::wrap(&[1], EncodingRules::Octet);
        assert!(matches!(buffer.put_u8(0), Err(AsnError::Buffer(_))));

        let mut buffer = ByteBuffer::with_capacity(0, EncodingRules::Octet);
        assert!(matches!(buffer.get_u8(), Err(AsnError::Buffer(_))));
    }

    #[test]
    fn test_get_slice_underflow_keeps_position() {
        let mut buffer = ByteBuffer::wrap(&[1, 2], EncodingRules::Basic);
        assert!(buffer.get_slice(3).is_err());
        assert_eq!(buffer.position(), 0);
        assert_eq!(buffer.get_slice(2).unwrap(), &[1, 2]);
    }

    #[test]
    fn test_downcast_through_trait_object() {
        let mut boxed: Box<dyn Buffer> =
            Box::new(ByteBuffer::with_capacity(4, EncodingRules::AlignedPacked));
        assert_eq!(boxed.encoding_rules(), EncodingRules::AlignedPacked);
        let concrete = boxed.as_any_mut().downcast_mut::<ByteBuffer>().unwrap();
        concrete.put_u8(0xFF).unwrap();
        assert_eq!(boxed.array(), &[0xFF]);
    }
}
