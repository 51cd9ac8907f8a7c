pub mod error;
pub(crate) mod reader;

pub use error::DecodeError;

use reader::FrameReader;

/// Knobs applied before a response frame is decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Reject frames whose byte sum is not 0 modulo 256.
    pub verify_checksum: bool,
}

impl DecodeOptions {
    /// Decode without the checksum gate (byte-exact parity with raw dumps).
    pub fn unchecked() -> Self {
        Self {
            verify_checksum: false,
        }
    }
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            verify_checksum: true,
        }
    }
}

/// Bytes covered by the checksum gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ChecksumSpan {
    /// Every byte received.
    WholeFrame,
    /// Only the first `n` bytes; anything after them is ignored.
    Prefix(usize),
}

/// Length first, then checksum: a truncated frame never reports a checksum error.
pub(crate) fn open_frame<'a>(
    frame: &'a [u8],
    min_len: usize,
    span: ChecksumSpan,
    options: &DecodeOptions,
) -> Result<FrameReader<'a>, DecodeError> {
    let reader = FrameReader::new(frame);
    reader.require_len(min_len)?;
    if options.verify_checksum {
        match span {
            ChecksumSpan::WholeFrame => reader.require_checksum()?,
            ChecksumSpan::Prefix(len) => reader.require_checksum_within(len)?,
        }
    }
    Ok(reader)
}
