use serde::{Deserialize, Serialize};

use super::layout;
use crate::protocols::common::{ChecksumSpan, DecodeError, DecodeOptions, open_frame};

/// One multimeter reading decoded from a query response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeterReading {
    /// `mantissa * 10^exponent`.
    pub value: f64,
    pub raw1: u16,
    pub raw2: u16,
    pub mantissa: u16,
    /// Exponent/unit byte exactly as received.
    pub exponent_byte: u8,
    /// High nibble of the exponent byte (range step).
    pub unit: u8,
    /// Decade exponent applied to the mantissa.
    pub exponent: i32,
}

/// Decode a multimeter response, rejecting frames with a bad checksum.
///
/// # Examples
/// ```
/// use benchlink_core::{build_frame, decode_meter_frame};
///
/// let mut body = [0u8; 16];
/// body[9] = 0x02; // unit 0, one decade down
/// body[14] = 100;
/// let reading = decode_meter_frame(&build_frame(&body)).unwrap();
/// assert_eq!(reading.value, 10.0);
/// ```
pub fn decode_meter_frame(frame: &[u8]) -> Result<MeterReading, DecodeError> {
    decode_meter_frame_with(frame, &DecodeOptions::default())
}

pub fn decode_meter_frame_with(
    frame: &[u8],
    options: &DecodeOptions,
) -> Result<MeterReading, DecodeError> {
    // Only the fixed frame is checksummed; bytes past it are ignored.
    let reader = open_frame(
        frame,
        layout::FRAME_LEN,
        ChecksumSpan::Prefix(layout::FRAME_LEN),
        options,
    )?;

    let exponent_byte = reader.read_u8(layout::EXPONENT_OFFSET)?;
    let unit = reader.read_high_nibble(layout::EXPONENT_OFFSET)?;
    let exponent = decade_exponent(exponent_byte);
    let mantissa = reader.read_u16_le(layout::MANTISSA_RANGE.clone())?;
    let raw1 = reader.read_u16_le(layout::RAW1_RANGE.clone())?;
    let raw2 = reader.read_u16_le(layout::RAW2_RANGE.clone())?;

    Ok(MeterReading {
        value: scale(mantissa, exponent),
        raw1,
        raw2,
        mantissa,
        exponent_byte,
        unit,
        exponent,
    })
}

/// `-(low_nibble / 2) + unit * 3`, with truncating division on the low nibble.
pub(crate) fn decade_exponent(exponent_byte: u8) -> i32 {
    let unit = i32::from(exponent_byte >> 4);
    let sub_range = i32::from(exponent_byte & 0x0f) / 2;
    -sub_range + unit * layout::DECADES_PER_UNIT
}

// Negative exponents divide so results like 1234e-2 round to the nearest
// double instead of carrying the error of 10^-2.
fn scale(mantissa: u16, exponent: i32) -> f64 {
    let mantissa = f64::from(mantissa);
    if exponent >= 0 {
        mantissa * 10f64.powi(exponent)
    } else {
        mantissa / 10f64.powi(-exponent)
    }
}

#[cfg(test)]
mod tests {
    use super::{decade_exponent, decode_meter_frame, decode_meter_frame_with};
    use crate::frame::build_frame;
    use crate::protocols::common::{DecodeError, DecodeOptions};
    use crate::protocols::dm40::layout;

    fn frame_with(exponent_byte: u8, mantissa: u16) -> Vec<u8> {
        let mut body = vec![0u8; layout::FRAME_LEN - 1];
        body[..5].copy_from_slice(&[0xdf, 0x05, 0x03, 0x09, 0x0b]);
        body[layout::EXPONENT_OFFSET] = exponent_byte;
        body[layout::MANTISSA_RANGE.clone()].copy_from_slice(&mantissa.to_le_bytes());
        build_frame(&body)
    }

    #[test]
    fn unit_step_adds_three_decades() {
        let reading = decode_meter_frame(&frame_with(0x10, 1)).unwrap();
        assert_eq!(reading.unit, 1);
        assert_eq!(reading.exponent, 3);
        assert_eq!(reading.value, 1000.0);
    }

    #[test]
    fn low_nibble_halves_into_negative_decades() {
        let reading = decode_meter_frame(&frame_with(0x02, 100)).unwrap();
        assert_eq!(reading.unit, 0);
        assert_eq!(reading.exponent, -1);
        assert_eq!(reading.value, 10.0);
    }

    #[test]
    fn odd_low_nibble_truncates() {
        assert_eq!(decade_exponent(0x01), 0);
        assert_eq!(decade_exponent(0x03), -1);
        assert_eq!(decade_exponent(0x0f), -7);
        assert_eq!(decade_exponent(0x25), 4);
        assert_eq!(decade_exponent(0xf0), 45);
    }

    #[test]
    fn reports_diagnostic_fields_independently() {
        let mut body = vec![0u8; layout::FRAME_LEN - 1];
        body[layout::EXPONENT_OFFSET] = 0x14;
        body[layout::RAW1_RANGE.clone()].copy_from_slice(&0x0102u16.to_le_bytes());
        body[layout::RAW2_RANGE.clone()].copy_from_slice(&0xbeefu16.to_le_bytes());
        body[layout::MANTISSA_RANGE.clone()].copy_from_slice(&1234u16.to_le_bytes());

        let reading = decode_meter_frame(&build_frame(&body)).unwrap();
        assert_eq!(reading.raw1, 0x0102);
        assert_eq!(reading.raw2, 0xbeef);
        assert_eq!(reading.mantissa, 1234);
        assert_eq!(reading.exponent_byte, 0x14);
        assert_eq!(reading.unit, 1);
        assert_eq!(reading.exponent, 1);
        assert_eq!(reading.value, 12340.0);
    }

    #[test]
    fn trailing_bytes_are_ignored() {
        let mut frame = frame_with(0x04, 1234);
        frame.extend_from_slice(&[0xdf, 0x05]);
        let reading = decode_meter_frame(&frame).unwrap();
        assert_eq!(reading.value, 12.34);
        assert_eq!(reading.mantissa, 1234);
    }

    #[test]
    fn trailing_garbage_does_not_mask_bad_checksum() {
        let mut frame = frame_with(0x10, 1);
        frame[layout::EXPONENT_OFFSET] ^= 0x01;
        // Restores the sum of the whole buffer, not of the frame itself.
        frame.push(0xff);
        assert!(matches!(
            decode_meter_frame(&frame).unwrap_err(),
            DecodeError::ChecksumMismatch { .. }
        ));
    }

    #[test]
    fn sixteen_bytes_is_too_short() {
        let frame = build_frame(&[0u8; layout::FRAME_LEN - 2]);
        assert_eq!(frame.len(), 16);
        assert_eq!(
            decode_meter_frame(&frame).unwrap_err(),
            DecodeError::FrameTooShort {
                needed: 17,
                actual: 16
            }
        );
    }

    #[test]
    fn bad_checksum_is_rejected_unless_unchecked() {
        let mut frame = frame_with(0x10, 1);
        frame[layout::FRAME_LEN - 1] = frame[layout::FRAME_LEN - 1].wrapping_add(1);

        let err = decode_meter_frame(&frame).unwrap_err();
        assert!(matches!(err, DecodeError::ChecksumMismatch { .. }));

        let reading = decode_meter_frame_with(&frame, &DecodeOptions::unchecked()).unwrap();
        assert_eq!(reading.value, 1000.0);
    }
}
