//! EL15 electronic load protocol.
//!
//! Status frames carry raw little-endian IEEE-754 floats and one signed
//! 32-bit run-time counter at fixed offsets; one byte packs the regulation
//! mode (low nibble) with the fan state (high nibble). Commands share the
//! `AF 07 03` prefix except the broadcast discovery probe.

pub mod command;
pub mod error;
pub mod layout;
pub mod parser;

pub use command::{LoadCommand, LoadMode};
pub use error::CommandError;
pub use parser::{LoadReading, decode_load_frame, decode_load_frame_with};
