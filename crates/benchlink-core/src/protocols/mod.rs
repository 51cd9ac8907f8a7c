//! Device protocol decoding.
//!
//! Each device family follows the same layered structure:
//! - `layout`: byte offsets, ranges and command templates (source of truth)
//! - `parser`: decoding into typed readings (no direct byte indexing)
//! - `command`: typed commands encoded into checksummed frames
//!
//! Bounds-checked reads and the checksum gate are shared in `common`.
//! Everything here is pure; transports and sessions handle I/O.

pub(crate) mod common;
pub mod dm40;
pub mod el15;

pub use common::{DecodeError, DecodeOptions};
