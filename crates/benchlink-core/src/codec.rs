//! Hex text <-> byte conversion used for command templates and frame dumps.

use thiserror::Error;

/// Errors returned when hex text cannot be decoded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("hex text has odd length: {length} digits")]
    OddLength { length: usize },
    #[error("invalid hex character {character:?} at index {index}")]
    InvalidCharacter { character: char, index: usize },
}

/// Decode hex text into bytes, ignoring any whitespace between digits.
///
/// # Examples
/// ```
/// use benchlink_core::bytes_from_hex;
///
/// let bytes = bytes_from_hex("af 05 03 09 01").unwrap();
/// assert_eq!(bytes, vec![0xaf, 0x05, 0x03, 0x09, 0x01]);
/// ```
///
/// # Errors
/// Returns `FormatError` when the cleaned text has an odd number of digits
/// or contains a non-hex character. Indices refer to the cleaned text.
pub fn bytes_from_hex(text: &str) -> Result<Vec<u8>, FormatError> {
    let cleaned: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    if let Some((index, character)) = first_non_hex(&cleaned) {
        return Err(FormatError::InvalidCharacter { character, index });
    }
    if cleaned.len() % 2 != 0 {
        return Err(FormatError::OddLength {
            length: cleaned.len(),
        });
    }
    hex::decode(&cleaned).map_err(|err| match err {
        hex::FromHexError::InvalidHexCharacter { c, index } => FormatError::InvalidCharacter {
            character: c,
            index,
        },
        _ => FormatError::OddLength {
            length: cleaned.len(),
        },
    })
}

/// Lowercase, contiguous hex rendering of a frame.
pub fn hex_string(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

fn first_non_hex(text: &str) -> Option<(usize, char)> {
    text.chars().enumerate().find(|(_, c)| !c.is_ascii_hexdigit())
}
