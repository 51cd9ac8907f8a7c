use serde::{Deserialize, Serialize};

use super::layout;
use crate::protocols::common::{ChecksumSpan, DecodeError, DecodeOptions, open_frame};

/// One electronic-load status frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadReading {
    /// Length of the frame as received; the device answers different
    /// queries with differently sized frames.
    pub length: usize,
    pub setpoint: f32,
    pub temperature: f32,
    pub current: f32,
    pub voltage: f32,
    pub run_time_seconds: i32,
    pub unknown_byte1: u8,
    pub run_flag: u8,
    pub mode: u8,
    pub fan_state: u8,
}

impl LoadReading {
    /// Fan state as a `0x`-prefixed hex tag, e.g. `"0x4"`.
    pub fn fan_state_tag(&self) -> String {
        format!("{:#x}", self.fan_state)
    }
}

/// Decode a load status frame, rejecting frames with a bad checksum.
pub fn decode_load_frame(frame: &[u8]) -> Result<LoadReading, DecodeError> {
    decode_load_frame_with(frame, &DecodeOptions::default())
}

pub fn decode_load_frame_with(
    frame: &[u8],
    options: &DecodeOptions,
) -> Result<LoadReading, DecodeError> {
    // Status frames vary in length with the query, so the whole frame is summed.
    let reader = open_frame(frame, layout::MIN_LEN, ChecksumSpan::WholeFrame, options)?;

    Ok(LoadReading {
        length: reader.len(),
        setpoint: reader.read_f32_le(layout::SETPOINT_RANGE.clone())?,
        temperature: reader.read_f32_le(layout::TEMPERATURE_RANGE.clone())?,
        current: reader.read_f32_le(layout::CURRENT_RANGE.clone())?,
        voltage: reader.read_f32_le(layout::VOLTAGE_RANGE.clone())?,
        run_time_seconds: reader.read_i32_le(layout::RUN_TIME_RANGE.clone())?,
        unknown_byte1: reader.read_u8(layout::UNKNOWN1_OFFSET)?,
        run_flag: reader.read_u8(layout::RUN_FLAG_OFFSET)?,
        mode: reader.read_low_nibble(layout::MODE_FAN_OFFSET)?,
        fan_state: reader.read_high_nibble(layout::MODE_FAN_OFFSET)?,
    })
}
