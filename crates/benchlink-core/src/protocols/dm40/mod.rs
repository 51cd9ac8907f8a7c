//! DM40 multimeter protocol.
//!
//! Responses carry a packed decimal value: a 16-bit mantissa and an
//! exponent byte whose high nibble selects a range (three decades per step)
//! and whose low nibble, halved with truncation, lowers the exponent within
//! that range. Offsets live in `layout`.

pub mod command;
pub mod layout;
pub mod parser;

pub use command::MeterCommand;
pub use parser::{MeterReading, decode_meter_frame, decode_meter_frame_with};
