//! Byte transports carrying frames to and from a device.
//!
//! The link itself (pairing, binding an RFCOMM channel to a tty) is set up
//! outside this crate. `StreamTransport` adapts any blocking
//! `Read + Write` stream; `serial` opens an already-bound serial device.

mod serial;

pub use serial::{SerialTransport, open_serial};

use std::io::{ErrorKind, Read, Write};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("read timed out")]
    Timeout,
    #[error("connection closed by peer")]
    Closed,
    #[error("serial port error: {0}")]
    Serial(String),
}

/// Duplex byte channel to one device.
pub trait Transport {
    fn send(&mut self, frame: &[u8]) -> Result<(), TransportError>;

    /// Read whatever the device has sent, up to `max_bytes`.
    fn receive(&mut self, max_bytes: usize) -> Result<Vec<u8>, TransportError>;
}

/// `Transport` over a blocking stream.
pub struct StreamTransport<S> {
    stream: S,
}

impl<S: Read + Write> StreamTransport<S> {
    pub fn new(stream: S) -> Self {
        Self { stream }
    }

    pub fn get_ref(&self) -> &S {
        &self.stream
    }
}

impl<S: Read + Write> Transport for StreamTransport<S> {
    fn send(&mut self, frame: &[u8]) -> Result<(), TransportError> {
        self.stream.write_all(frame)?;
        self.stream.flush()?;
        Ok(())
    }

    fn receive(&mut self, max_bytes: usize) -> Result<Vec<u8>, TransportError> {
        let mut buf = vec![0u8; max_bytes];
        let read = loop {
            match self.stream.read(&mut buf) {
                Ok(0) if max_bytes > 0 => return Err(TransportError::Closed),
                Ok(read) => break read,
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) if err.kind() == ErrorKind::TimedOut => {
                    return Err(TransportError::Timeout);
                }
                Err(err) => return Err(TransportError::Io(err)),
            }
        };
        buf.truncate(read);
        Ok(buf)
    }
}
