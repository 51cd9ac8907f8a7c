use super::layout;
use crate::frame::CommandTemplate;

/// Commands understood by the multimeter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeterCommand {
    /// Request one measurement frame.
    Query,
}

impl MeterCommand {
    pub fn template(&self) -> CommandTemplate {
        match self {
            MeterCommand::Query => CommandTemplate::from_bytes(&layout::QUERY),
        }
    }

    pub fn encode(&self) -> Vec<u8> {
        self.template().to_frame()
    }
}
