use std::ops::Range;

pub const UNKNOWN1_OFFSET: usize = 4;
/// Low nibble: mode, high nibble: fan state.
pub const MODE_FAN_OFFSET: usize = 5;
pub const RUN_FLAG_OFFSET: usize = 6;
pub const VOLTAGE_RANGE: Range<usize> = 7..11;
pub const CURRENT_RANGE: Range<usize> = 11..15;
pub const RUN_TIME_RANGE: Range<usize> = 15..19;
pub const TEMPERATURE_RANGE: Range<usize> = 19..23;
pub const SETPOINT_RANGE: Range<usize> = 23..27;

/// Last field ends here; the checksum byte follows when present.
pub const MIN_LEN: usize = SETPOINT_RANGE.end;

pub const QUERY: [u8; 5] = [0xaf, 0x07, 0x03, 0x08, 0x00];
pub const SET_STATE: [u8; 5] = [0xaf, 0x07, 0x03, 0x09, 0x01];
pub const SET_CURRENT: [u8; 5] = [0xaf, 0x07, 0x03, 0x04, 0x04];
pub const SET_MODE: [u8; 5] = [0xaf, 0x07, 0x03, 0x03, 0x01];
pub const SET_NAME: [u8; 5] = [0xaf, 0x07, 0x03, 0x06, 0x0a];
pub const IDENTIFY: [u8; 5] = [0xaf, 0x07, 0x03, 0x07, 0x00];
pub const DISCOVER: [u8; 5] = [0xaf, 0xff, 0xff, 0x00, 0x00];

pub const STATE_UNLOCKED: u8 = 0x00;
pub const STATE_LOCKED: u8 = 0x01;
pub const STATE_LOAD_OFF: u8 = 0x00;
pub const STATE_LOAD_ON: u8 = 0x04;

/// Device names are sent as a fixed, zero-padded ASCII field.
pub const NAME_LEN: usize = SET_NAME[4] as usize;
