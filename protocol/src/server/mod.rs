pub mod status;
mod tests;

use serde::{Deserialize, Serialize};

use crate::{ParseError, prepare_line};

/// Messages the server sends to a connected player
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ServerMessage {
    /// Identity assigned at connect time, sent as a bare integer (1 or 2)
    PlayerNumber(u8),

    /// Result of an attack, sent to both players
    ActionOutcome {
        result: String,
        damage: u32,
        #[serde(rename = "remainingHP")]
        remaining_hp: u32,
    },

    /// Generic acknowledgment or status text
    Status { result: String },
}

impl ServerMessage {
    pub fn status(text: impl Into<String>) -> Self {
        Self::Status {
            result: text.into(),
        }
    }

    pub fn outcome(text: impl Into<String>, damage: u32, remaining_hp: u32) -> Self {
        Self::ActionOutcome {
            result: text.into(),
            damage,
            remaining_hp,
        }
    }

    /// Human readable text carried by the message, if any
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::PlayerNumber(_) => None,
            Self::ActionOutcome { result, .. } | Self::Status { result } => Some(result),
        }
    }

    /// Serialize to wire format (one JSON value, no trailing newline)
    pub fn to_wire_format(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

/// Parse a single line from the server into a ServerMessage
pub fn parse_server_message(line: &str) -> Result<ServerMessage, ParseError> {
    let line = prepare_line(line)?;
    serde_json::from_str(line).map_err(|e| ParseError::InvalidFormat(e.to_string()))
}
