//! Additive-checksum framing shared by both device families.
//!
//! A frame is the command (or response) bytes followed by one checksum byte
//! chosen so that the byte sum of the whole frame is 0 modulo 256.

use crate::codec::{FormatError, bytes_from_hex};

/// Checksum byte for `payload`: `(256 - sum % 256) % 256`.
pub fn checksum(payload: &[u8]) -> u8 {
    byte_sum(payload).wrapping_neg()
}

/// Append the checksum byte to `payload`.
///
/// No length constraint is applied; command shapes differ per opcode.
///
/// # Examples
/// ```
/// use benchlink_core::{build_frame, verify_frame};
///
/// let frame = build_frame(&[0xaf, 0x05, 0x03, 0x09, 0x01]);
/// assert_eq!(frame.len(), 6);
/// assert!(verify_frame(&frame));
/// ```
pub fn build_frame(payload: &[u8]) -> Vec<u8> {
    let mut frame = Vec::with_capacity(payload.len() + 1);
    frame.extend_from_slice(payload);
    frame.push(checksum(payload));
    frame
}

/// True when the byte sum of `frame` is 0 modulo 256.
pub fn verify_frame(frame: &[u8]) -> bool {
    byte_sum(frame) == 0
}

/// Byte sum modulo 256.
pub(crate) fn byte_sum(bytes: &[u8]) -> u8 {
    bytes.iter().fold(0u8, |acc, b| acc.wrapping_add(*b))
}

/// Opcode and argument bytes of a command, without checksum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandTemplate {
    bytes: Vec<u8>,
}

impl CommandTemplate {
    /// Parse a template written as hex text, e.g. `"af 07 03 08 00"`.
    pub fn from_hex(text: &str) -> Result<Self, FormatError> {
        Ok(Self {
            bytes: bytes_from_hex(text)?,
        })
    }

    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self {
            bytes: bytes.to_vec(),
        }
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// New template with `args` appended after the existing bytes.
    pub fn with_args(&self, args: &[u8]) -> Self {
        let mut bytes = Vec::with_capacity(self.bytes.len() + args.len());
        bytes.extend_from_slice(&self.bytes);
        bytes.extend_from_slice(args);
        Self { bytes }
    }

    /// The transmittable frame for this template.
    pub fn to_frame(&self) -> Vec<u8> {
        build_frame(&self.bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::{CommandTemplate, build_frame, checksum, verify_frame};
    use crate::codec::bytes_from_hex;

    fn reference_checksum(payload: &[u8]) -> u8 {
        let sum: u32 = payload.iter().map(|b| u32::from(*b)).sum();
        ((256 - (sum % 256)) % 256) as u8
    }

    #[test]
    fn checksum_matches_formula() {
        let payloads: [&[u8]; 6] = [
            &[],
            &[0x00],
            &[0x01],
            &[0xff, 0x01],
            &[0xaf, 0x05, 0x03, 0x09, 0x01],
            &[0x80, 0x80, 0x80],
        ];
        for payload in payloads {
            assert_eq!(checksum(payload), reference_checksum(payload), "{payload:02x?}");
        }
    }

    #[test]
    fn built_frames_always_verify() {
        let mut payload = Vec::new();
        for i in 0..300u32 {
            payload.push((i.wrapping_mul(37) ^ 0x5a) as u8);
            let frame = build_frame(&payload);
            assert_eq!(frame.len(), payload.len() + 1);
            assert_eq!(&frame[..payload.len()], payload.as_slice());
            assert!(verify_frame(&frame), "length {}", payload.len());
        }
    }

    #[test]
    fn zero_sum_payload_gets_zero_checksum() {
        assert_eq!(build_frame(&[0x80, 0x80]), vec![0x80, 0x80, 0x00]);
    }

    #[test]
    fn corrupted_frame_fails_verification() {
        let mut frame = build_frame(&[0xaf, 0x07, 0x03, 0x08, 0x00]);
        frame[2] ^= 0x01;
        assert!(!verify_frame(&frame));
    }

    #[test]
    fn template_appends_args() {
        let template = CommandTemplate::from_hex("af 07 03 04 04").unwrap();
        let with_current = template.with_args(&1.0f32.to_le_bytes());
        assert_eq!(
            with_current.bytes(),
            bytes_from_hex("af 07 03 04 04 00 00 80 3f").unwrap().as_slice()
        );
        assert_eq!(template.bytes().len(), 5);
        assert!(verify_frame(&with_current.to_frame()));
    }

    #[test]
    fn template_rejects_bad_hex() {
        assert!(CommandTemplate::from_hex("af 0").is_err());
    }
}
