use std::ops::Range;

pub const EXPONENT_OFFSET: usize = 9;
pub const RAW1_RANGE: Range<usize> = 10..12;
pub const RAW2_RANGE: Range<usize> = 12..14;
pub const MANTISSA_RANGE: Range<usize> = 14..16;

/// Header (5) + body (11) + checksum (1).
pub const FRAME_LEN: usize = 17;

/// Each unit step in the high nibble of the exponent byte is three decades.
pub const DECADES_PER_UNIT: i32 = 3;

pub const QUERY: [u8; 5] = [0xaf, 0x05, 0x03, 0x09, 0x01];
