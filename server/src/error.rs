use std::io;

use pokebat_battle::{BattleError, SelectionError, Side};
use pokebat_protocol::ParseError;
use thiserror::Error;

/// Anything that ends a session early. Every variant aborts the match.
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("{side} transport error: {source}")]
    Transport {
        side: Side,
        #[source]
        source: io::Error,
    },

    #[error("{side} sent a malformed message: {source}")]
    Protocol {
        side: Side,
        #[source]
        source: ParseError,
    },

    #[error("{0} disconnected")]
    Disconnected(Side),

    #[error("{0} did not respond in time")]
    TimedOut(Side),

    #[error("{side} sent a {got} message where a {expected} was expected")]
    UnexpectedMessage {
        side: Side,
        expected: &'static str,
        got: &'static str,
    },

    #[error("Roster could not be built: {0}")]
    Draft(#[from] SelectionError),

    #[error("Battle rejected the action: {0}")]
    Battle(#[from] BattleError),
}

impl SessionError {
    /// The player whose connection caused the error, if one did
    pub fn side(&self) -> Option<Side> {
        match self {
            Self::Transport { side, .. }
            | Self::Protocol { side, .. }
            | Self::UnexpectedMessage { side, .. } => Some(*side),
            Self::Disconnected(side) | Self::TimedOut(side) => Some(*side),
            Self::Draft(_) | Self::Battle(_) => None,
        }
    }
}
