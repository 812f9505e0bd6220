//! Messages that clients send to the server

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{ParseError, prepare_line};

/// Turn action chosen by the player holding the turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Attack,
    Switch,
    Surrender,
}

impl Action {
    pub const ALL: [Action; 3] = [Action::Attack, Action::Switch, Action::Surrender];

    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Attack => "attack",
            Action::Switch => "switch",
            Action::Surrender => "surrender",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Action {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "attack" => Ok(Action::Attack),
            "switch" => Ok(Action::Switch),
            "surrender" => Ok(Action::Surrender),
            other => Err(ParseError::InvalidFormat(format!("unknown action '{}'", other))),
        }
    }
}

/// One client line, decoded by shape
///
/// The wire format carries no tag, so the variant is picked by field name:
/// `{"name": ...}`, `{"choice": ...}` or `{"action": ...}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ClientMessage {
    /// Player name sent right after the identity is assigned
    Name { name: String },

    /// Catalog index for the next roster slot
    Choice { choice: i64 },

    /// Turn action
    Action { action: Action },
}

impl ClientMessage {
    /// Serialize to wire format (one JSON object, no trailing newline)
    pub fn to_wire_format(&self) -> String {
        // Plain strings and integers only, serialization cannot fail
        serde_json::to_string(self).unwrap_or_default()
    }

    /// Short label used in logs and error messages
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Name { .. } => "name",
            Self::Choice { .. } => "choice",
            Self::Action { .. } => "action",
        }
    }
}

/// Parse a single line from a client into a ClientMessage
pub fn parse_client_message(line: &str) -> Result<ClientMessage, ParseError> {
    let line = prepare_line(line)?;
    serde_json::from_str(line).map_err(|e| ParseError::InvalidFormat(e.to_string()))
}
