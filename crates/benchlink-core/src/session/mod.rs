//! Request/response sessions over a transport.
//!
//! A `Session` owns its transport exclusively. Every exchange takes
//! `&mut self`, so at most one command is in flight and each response is
//! decoded by the decoder of the command family that produced it.

mod poll;

pub use poll::PollSummary;

use thiserror::Error;
use tracing::debug;

use crate::codec::{FormatError, hex_string};
use crate::config::{ConfigError, SessionConfig};
use crate::frame::CommandTemplate;
use crate::protocols::DecodeError;
use crate::protocols::dm40::{MeterCommand, MeterReading, decode_meter_frame_with};
use crate::protocols::el15::{CommandError, LoadCommand, LoadReading, decode_load_frame_with};
use crate::transport::{Transport, TransportError};
use crate::{Device, Reading};

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),
    #[error("format error: {0}")]
    Format(#[from] FormatError),
    #[error("command error: {0}")]
    Command(#[from] CommandError),
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
}

pub struct Session<T> {
    transport: T,
    config: SessionConfig,
}

impl<T: Transport> Session<T> {
    /// # Errors
    /// Returns `SessionError::Config` when `config` fails validation.
    pub fn new(transport: T, config: SessionConfig) -> Result<Self, SessionError> {
        config.validate()?;
        Ok(Self { transport, config })
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn into_transport(self) -> T {
        self.transport
    }

    /// Send one frame and return the raw response.
    ///
    /// A short or empty response is returned as-is; decoders reject it.
    pub fn transact(&mut self, frame: &[u8]) -> Result<Vec<u8>, SessionError> {
        debug!(frame = %hex_string(frame), "tx");
        self.transport.send(frame)?;
        let response = self.transport.receive(self.config.max_response_bytes)?;
        debug!(frame = %hex_string(&response), len = response.len(), "rx");
        Ok(response)
    }

    /// Frame and send a raw command template, returning the raw response.
    pub fn send_template(&mut self, template: &CommandTemplate) -> Result<Vec<u8>, SessionError> {
        self.transact(&template.to_frame())
    }

    /// Same as [`Session::send_template`] for a template written as hex text.
    pub fn send_hex(&mut self, template: &str) -> Result<Vec<u8>, SessionError> {
        let template = CommandTemplate::from_hex(template)?;
        self.send_template(&template)
    }

    pub fn send_meter_command(&mut self, command: MeterCommand) -> Result<Vec<u8>, SessionError> {
        self.send_template(&command.template())
    }

    pub fn send_load_command(&mut self, command: &LoadCommand) -> Result<Vec<u8>, SessionError> {
        let template = command.template()?;
        self.send_template(&template)
    }

    pub fn query_meter(&mut self) -> Result<MeterReading, SessionError> {
        let response = self.send_meter_command(MeterCommand::Query)?;
        Ok(decode_meter_frame_with(
            &response,
            &self.config.decode_options(),
        )?)
    }

    pub fn query_load(&mut self) -> Result<LoadReading, SessionError> {
        let response = self.send_load_command(&LoadCommand::Query)?;
        Ok(decode_load_frame_with(
            &response,
            &self.config.decode_options(),
        )?)
    }

    /// Query `device` and decode its answer with the matching decoder.
    pub fn query(&mut self, device: Device) -> Result<Reading, SessionError> {
        let response = self.transact(&device.query_frame())?;
        Ok(device.decode(&response, &self.config.decode_options())?)
    }
}
