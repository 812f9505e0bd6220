mod connection;
mod event;
mod handler;
mod receiver;
mod sender;
mod state;

use anyhow::Result;
use futures_util::SinkExt;
use tokio::io::{AsyncRead, AsyncWrite};
use tokio::net::{TcpStream, ToSocketAddrs};
use tokio::sync::mpsc;

pub use connection::Connection;
pub use event::ServerEvent;
pub use handler::Handler;
pub use receiver::Receiver;
pub use sender::Sender;
pub use state::MatchPhase;

pub use pokebat_protocol::{Action, ClientMessage, ServerMessage};

pub const DEFAULT_SERVER_ADDR: &str = "127.0.0.1:8080";

/// Main pokebat client
pub struct Client<S = TcpStream> {
    connection: Connection<S>,
    state: state::ClientState,
}

impl Client<TcpStream> {
    /// Connect to a pokebat server
    pub async fn connect(addr: impl ToSocketAddrs) -> Result<Self> {
        let connection = Connection::connect(addr).await?;
        Ok(Self::with_connection(connection))
    }
}

impl<S> Client<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    /// Wrap an already established stream
    pub fn from_stream(stream: S) -> Self {
        Self::with_connection(Connection::new(stream))
    }

    fn with_connection(connection: Connection<S>) -> Self {
        Self {
            connection,
            state: state::ClientState::new(),
        }
    }

    pub async fn send_name(&mut self, name: &str) -> Result<()> {
        self.connection
            .send(&ClientMessage::Name {
                name: name.to_string(),
            })
            .await
    }

    /// Pick a catalog entry for the next roster slot
    pub async fn choose(&mut self, index: i64) -> Result<()> {
        self.connection
            .send(&ClientMessage::Choice { choice: index })
            .await
    }

    pub async fn act(&mut self, action: Action) -> Result<()> {
        self.connection.send(&ClientMessage::Action { action }).await
    }

    /// Get the next message from the server. `None` once the server hangs up.
    pub async fn next_message(&mut self) -> Result<Option<ServerMessage>> {
        let message = self.connection.next_message().await?;
        if let Some(message) = &message {
            self.state.apply(&ServerEvent::from(message.clone()));
        }
        Ok(message)
    }

    /// Player number assigned by the server, once received
    pub fn player(&self) -> Option<u8> {
        self.state.player
    }

    pub fn phase(&self) -> MatchPhase {
        self.state.phase
    }

    /// Whether the server is waiting on this player's action
    pub fn is_my_turn(&self) -> bool {
        self.state.my_turn
    }
}

impl<S> Client<S>
where
    S: AsyncRead + AsyncWrite + Unpin + Send + 'static,
{
    /// Split into a cloneable sender and a receiver that drives a handler.
    ///
    /// Outgoing messages are written by a background task, which ends when every
    /// `Sender` is dropped. Must be called inside a tokio runtime.
    pub fn split(self) -> (Sender, Receiver<S>) {
        let (mut sink, stream) = self.connection.split();
        let (tx, mut rx) = mpsc::channel::<ClientMessage>(32);

        tokio::spawn(async move {
            while let Some(message) = rx.recv().await {
                if let Err(e) = sink.send(message.to_wire_format()).await {
                    tracing::warn!(error = %e, "Failed to send message");
                    break;
                }
            }
            sink.close().await.ok();
        });

        (Sender::new(tx), Receiver::new(stream, self.state))
    }
}
