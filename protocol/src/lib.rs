use thiserror::Error;

pub mod client;
pub mod server;

pub use client::{Action, ClientMessage, parse_client_message};
pub use server::{ServerMessage, parse_server_message};

/// Longest line either side will accept as a single message
pub const MAX_LINE_LENGTH: usize = 4096;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Invalid message format: {0}")]
    InvalidFormat(String),

    #[error("Message of {len} bytes exceeds the {max} byte limit")]
    TooLong { len: usize, max: usize },

    #[error("Empty message")]
    EmptyMessage,
}

/// Shared line checks before JSON decoding
pub(crate) fn prepare_line(line: &str) -> Result<&str, ParseError> {
    if line.len() > MAX_LINE_LENGTH {
        return Err(ParseError::TooLong {
            len: line.len(),
            max: MAX_LINE_LENGTH,
        });
    }

    let line = line.trim();
    if line.is_empty() {
        return Err(ParseError::EmptyMessage);
    }

    Ok(line)
}
