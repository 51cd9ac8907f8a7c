use serialport::SerialPort;

use super::{StreamTransport, TransportError};
use crate::config::SessionConfig;

pub type SerialTransport = StreamTransport<Box<dyn SerialPort>>;

/// Open a serial device (e.g. `/dev/rfcomm0`) with the configured speed and
/// read deadline.
pub fn open_serial(path: &str, config: &SessionConfig) -> Result<SerialTransport, TransportError> {
    let port = serialport::new(path, config.baud_rate)
        .timeout(config.read_timeout())
        .open()
        .map_err(|err| match err.kind() {
            serialport::ErrorKind::Io(kind) => {
                TransportError::Io(std::io::Error::new(kind, err.description))
            }
            _ => TransportError::Serial(format!("{path}: {}", err.description)),
        })?;
    tracing::debug!(path, baud_rate = config.baud_rate, "serial port opened");
    Ok(StreamTransport::new(port))
}
