use serde::{Deserialize, Serialize};

use super::error::CommandError;
use super::layout;
use crate::frame::CommandTemplate;

/// Regulation modes selectable with [`LoadCommand::SetMode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadMode {
    ConstantVoltage,
    ConstantCurrent,
    BatteryCapacity,
    BatteryDcr,
    ConstantResistance,
    ConstantPower,
}

impl LoadMode {
    pub const ALL: [LoadMode; 6] = [
        LoadMode::ConstantVoltage,
        LoadMode::ConstantCurrent,
        LoadMode::BatteryCapacity,
        LoadMode::BatteryDcr,
        LoadMode::ConstantResistance,
        LoadMode::ConstantPower,
    ];

    /// Argument byte of the set-mode command.
    pub fn code(self) -> u8 {
        match self {
            LoadMode::ConstantVoltage => 0x09,
            LoadMode::ConstantCurrent => 0x01,
            LoadMode::BatteryCapacity => 0x02,
            LoadMode::BatteryDcr => 0x0a,
            LoadMode::ConstantResistance => 0x11,
            LoadMode::ConstantPower => 0x19,
        }
    }

    pub fn from_code(code: u8) -> Result<Self, CommandError> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.code() == code)
            .ok_or(CommandError::UnknownMode { code })
    }
}

/// Commands understood by the electronic load.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadCommand {
    /// Request a status frame.
    Query,
    Unlock,
    Lock,
    LoadOff,
    LoadOn,
    /// Current setpoint in amperes.
    SetCurrent(f32),
    SetMode(LoadMode),
    /// Rename the device (up to 10 ASCII bytes).
    SetName(String),
    /// Ask the device for its name.
    Identify,
    /// Broadcast probe; devices answer with their family bytes.
    Discover,
}

impl LoadCommand {
    /// Command bytes without checksum.
    ///
    /// # Errors
    /// Returns `CommandError` when an argument cannot be represented on the
    /// wire (negative or non-finite current, over-long or non-ASCII name).
    pub fn template(&self) -> Result<CommandTemplate, CommandError> {
        let template = match self {
            LoadCommand::Query => CommandTemplate::from_bytes(&layout::QUERY),
            LoadCommand::Unlock => set_state(layout::STATE_UNLOCKED),
            LoadCommand::Lock => set_state(layout::STATE_LOCKED),
            LoadCommand::LoadOff => set_state(layout::STATE_LOAD_OFF),
            LoadCommand::LoadOn => set_state(layout::STATE_LOAD_ON),
            LoadCommand::SetCurrent(amps) => {
                if !amps.is_finite() || *amps < 0.0 {
                    return Err(CommandError::InvalidCurrent { amps: *amps });
                }
                CommandTemplate::from_bytes(&layout::SET_CURRENT).with_args(&amps.to_le_bytes())
            }
            LoadCommand::SetMode(mode) => {
                CommandTemplate::from_bytes(&layout::SET_MODE).with_args(&[mode.code()])
            }
            LoadCommand::SetName(name) => {
                CommandTemplate::from_bytes(&layout::SET_NAME).with_args(&name_field(name)?)
            }
            LoadCommand::Identify => CommandTemplate::from_bytes(&layout::IDENTIFY),
            LoadCommand::Discover => CommandTemplate::from_bytes(&layout::DISCOVER),
        };
        Ok(template)
    }

    pub fn encode(&self) -> Result<Vec<u8>, CommandError> {
        Ok(self.template()?.to_frame())
    }
}

fn set_state(state: u8) -> CommandTemplate {
    CommandTemplate::from_bytes(&layout::SET_STATE).with_args(&[state])
}

fn name_field(name: &str) -> Result<[u8; layout::NAME_LEN], CommandError> {
    if !name.is_ascii() || name.len() > layout::NAME_LEN {
        return Err(CommandError::InvalidName {
            name: name.to_string(),
            max: layout::NAME_LEN,
        });
    }
    let mut field = [0u8; layout::NAME_LEN];
    field[..name.len()].copy_from_slice(name.as_bytes());
    Ok(field)
}
