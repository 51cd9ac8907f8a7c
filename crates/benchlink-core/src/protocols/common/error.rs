use thiserror::Error;

/// Errors returned while decoding a response frame.
///
/// # Examples
/// ```
/// use benchlink_core::DecodeError;
///
/// let err = DecodeError::FrameTooShort { needed: 17, actual: 16 };
/// assert!(err.to_string().contains("frame too short"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("frame too short: need {needed} bytes, got {actual}")]
    FrameTooShort { needed: usize, actual: usize },
    #[error("checksum mismatch: frame bytes sum to {sum:#04x}, expected 0x00")]
    ChecksumMismatch { sum: u8 },
}
