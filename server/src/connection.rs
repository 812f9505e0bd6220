use std::time::Duration;

use futures_util::{SinkExt, StreamExt};
use pokebat_battle::Side;
use pokebat_protocol::{ClientMessage, MAX_LINE_LENGTH, ParseError, ServerMessage, parse_client_message};
use tokio::io::{AsyncRead, AsyncWrite};
use tokio_util::codec::{Framed, LinesCodec, LinesCodecError};

use crate::error::SessionError;

/// One player's line-delimited JSON channel.
///
/// Holds no game state. Generic over the stream so sessions run the same over TCP
/// and over in-memory pipes.
pub struct Connection<S> {
    side: Side,
    framed: Framed<S, LinesCodec>,
}

impl<S> Connection<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    pub fn new(side: Side, stream: S) -> Self {
        Self {
            side,
            framed: Framed::new(stream, LinesCodec::new_with_max_length(MAX_LINE_LENGTH)),
        }
    }

    pub fn side(&self) -> Side {
        self.side
    }

    /// The underlying stream
    pub fn get_ref(&self) -> &S {
        self.framed.get_ref()
    }

    /// Receive the next raw line
    pub async fn recv_line(&mut self) -> Result<String, SessionError> {
        match self.framed.next().await {
            Some(Ok(line)) => Ok(line),
            Some(Err(LinesCodecError::MaxLineLengthExceeded)) => Err(SessionError::Protocol {
                side: self.side,
                source: ParseError::InvalidFormat(format!(
                    "line exceeds {} bytes",
                    MAX_LINE_LENGTH
                )),
            }),
            Some(Err(LinesCodecError::Io(source))) => Err(SessionError::Transport {
                side: self.side,
                source,
            }),
            None => Err(SessionError::Disconnected(self.side)),
        }
    }

    /// Receive the next raw line, failing with `TimedOut` if none arrives within `limit`
    pub async fn recv_line_within(
        &mut self,
        limit: Option<Duration>,
    ) -> Result<String, SessionError> {
        let side = self.side;
        match limit {
            Some(limit) => tokio::time::timeout(limit, self.recv_line())
                .await
                .map_err(|_| SessionError::TimedOut(side))?,
            None => self.recv_line().await,
        }
    }

    /// Receive and decode the next message
    pub async fn recv(&mut self) -> Result<ClientMessage, SessionError> {
        let line = self.recv_line().await?;
        tracing::debug!(player = self.side.number(), %line, "Received line");
        parse_client_message(&line).map_err(|source| SessionError::Protocol {
            side: self.side,
            source,
        })
    }

    pub async fn send(&mut self, message: &ServerMessage) -> Result<(), SessionError> {
        let side = self.side;
        self.framed
            .send(message.to_wire_format())
            .await
            .map_err(|e| match e {
                LinesCodecError::Io(source) => SessionError::Transport { side, source },
                LinesCodecError::MaxLineLengthExceeded => SessionError::Protocol {
                    side,
                    source: ParseError::InvalidFormat("outgoing line too long".to_string()),
                },
            })
    }

    pub async fn send_status(&mut self, text: impl Into<String>) -> Result<(), SessionError> {
        self.send(&ServerMessage::status(text)).await
    }

    /// Flush pending output and shut the write half down
    pub async fn close(mut self) {
        if let Err(e) = SinkExt::<String>::close(&mut self.framed).await {
            tracing::debug!(player = self.side.number(), error = %e, "Error while closing connection");
        }
    }
}
