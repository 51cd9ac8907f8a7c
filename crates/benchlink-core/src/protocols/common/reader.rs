use std::ops::Range;

use super::error::DecodeError;
use crate::frame::byte_sum;

/// Bounds-checked, little-endian access to a response frame.
pub(crate) struct FrameReader<'a> {
    frame: &'a [u8],
}

impl<'a> FrameReader<'a> {
    pub(crate) fn new(frame: &'a [u8]) -> Self {
        Self { frame }
    }

    pub(crate) fn len(&self) -> usize {
        self.frame.len()
    }

    pub(crate) fn require_len(&self, needed: usize) -> Result<(), DecodeError> {
        if self.frame.len() < needed {
            return Err(DecodeError::FrameTooShort {
                needed,
                actual: self.frame.len(),
            });
        }
        Ok(())
    }

    /// Reject frames whose byte sum is not 0 modulo 256.
    pub(crate) fn require_checksum(&self) -> Result<(), DecodeError> {
        check_sum(self.frame)
    }

    /// Checksum gate over the first `len` bytes only.
    pub(crate) fn require_checksum_within(&self, len: usize) -> Result<(), DecodeError> {
        check_sum(self.read_slice(0..len)?)
    }

    pub(crate) fn read_u8(&self, offset: usize) -> Result<u8, DecodeError> {
        self.frame
            .get(offset)
            .copied()
            .ok_or(DecodeError::FrameTooShort {
                needed: offset + 1,
                actual: self.frame.len(),
            })
    }

    pub(crate) fn read_low_nibble(&self, offset: usize) -> Result<u8, DecodeError> {
        Ok(self.read_u8(offset)? & 0x0f)
    }

    pub(crate) fn read_high_nibble(&self, offset: usize) -> Result<u8, DecodeError> {
        Ok(self.read_u8(offset)? >> 4)
    }

    pub(crate) fn read_u16_le(&self, range: Range<usize>) -> Result<u16, DecodeError> {
        Ok(u16::from_le_bytes(self.read_array(range)?))
    }

    pub(crate) fn read_i32_le(&self, range: Range<usize>) -> Result<i32, DecodeError> {
        Ok(i32::from_le_bytes(self.read_array(range)?))
    }

    pub(crate) fn read_f32_le(&self, range: Range<usize>) -> Result<f32, DecodeError> {
        Ok(f32::from_le_bytes(self.read_array(range)?))
    }

    pub(crate) fn read_slice(&self, range: Range<usize>) -> Result<&'a [u8], DecodeError> {
        self.frame
            .get(range.clone())
            .ok_or(DecodeError::FrameTooShort {
                needed: range.end,
                actual: self.frame.len(),
            })
    }

    fn read_array<const N: usize>(&self, range: Range<usize>) -> Result<[u8; N], DecodeError> {
        let bytes = self.read_slice(range)?;
        bytes.try_into().map_err(|_| DecodeError::FrameTooShort {
            needed: N,
            actual: bytes.len(),
        })
    }
}

fn check_sum(bytes: &[u8]) -> Result<(), DecodeError> {
    let sum = byte_sum(bytes);
    if sum != 0 {
        return Err(DecodeError::ChecksumMismatch { sum });
    }
    Ok(())
}
