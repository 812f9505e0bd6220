use anyhow::{Context, Result};
use futures_util::stream::{SplitSink, SplitStream};
use futures_util::{SinkExt, StreamExt};
use pokebat_protocol::{ClientMessage, MAX_LINE_LENGTH, ServerMessage, parse_server_message};
use tokio::io::{AsyncRead, AsyncWrite};
use tokio::net::{TcpStream, ToSocketAddrs};
use tokio_util::codec::{Framed, LinesCodec};

type Lines<S> = Framed<S, LinesCodec>;

/// Low-level line-delimited JSON connection to the server
pub struct Connection<S = TcpStream> {
    framed: Lines<S>,
}

impl Connection<TcpStream> {
    pub async fn connect(addr: impl ToSocketAddrs) -> Result<Self> {
        let stream = TcpStream::connect(addr)
            .await
            .context("Failed to connect to server")?;
        stream.set_nodelay(true).ok();
        Ok(Self::new(stream))
    }
}

impl<S> Connection<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    pub fn new(stream: S) -> Self {
        Self {
            framed: Framed::new(stream, LinesCodec::new_with_max_length(MAX_LINE_LENGTH)),
        }
    }

    /// Receive the next server message. `None` once the server closes the connection.
    pub async fn next_message(&mut self) -> Result<Option<ServerMessage>> {
        read_message(&mut self.framed).await
    }

    pub async fn send(&mut self, message: &ClientMessage) -> Result<()> {
        self.framed
            .send(message.to_wire_format())
            .await
            .context("Failed to send message")
    }

    pub(crate) fn split(self) -> (SplitSink<Lines<S>, String>, SplitStream<Lines<S>>) {
        self.framed.split()
    }
}

pub(crate) async fn read_message<L>(lines: &mut L) -> Result<Option<ServerMessage>>
where
    L: futures_util::Stream<Item = Result<String, tokio_util::codec::LinesCodecError>> + Unpin,
{
    let Some(line) = lines.next().await else {
        return Ok(None);
    };
    let line = line.context("Connection error")?;
    tracing::debug!(%line, "Received line");

    let message = parse_server_message(&line).context("Failed to parse server message")?;
    Ok(Some(message))
}
