use thiserror::Error;

/// Errors returned when a load command cannot be encoded.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CommandError {
    #[error("invalid device name {name:?}: need at most {max} ASCII bytes")]
    InvalidName { name: String, max: usize },
    #[error("invalid current setpoint: {amps} A")]
    InvalidCurrent { amps: f32 },
    #[error("unknown load mode code: {code:#04x}")]
    UnknownMode { code: u8 },
}
