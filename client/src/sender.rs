use anyhow::Result;
use tokio::sync::mpsc;

use pokebat_protocol::{Action, ClientMessage};

/// Cloneable handle for sending messages to the server.
///
/// This can be passed to handlers and cloned freely.
#[derive(Clone)]
pub struct Sender {
    outgoing: mpsc::Sender<ClientMessage>,
}

impl Sender {
    pub(crate) fn new(outgoing: mpsc::Sender<ClientMessage>) -> Self {
        Self { outgoing }
    }

    pub async fn send(&self, message: ClientMessage) -> Result<()> {
        self.outgoing
            .send(message)
            .await
            .map_err(|_| anyhow::anyhow!("Connection closed"))
    }

    pub async fn send_name(&self, name: &str) -> Result<()> {
        self.send(ClientMessage::Name {
            name: name.to_string(),
        })
        .await
    }

    /// Pick a catalog entry for the next roster slot
    pub async fn choose(&self, index: i64) -> Result<()> {
        self.send(ClientMessage::Choice { choice: index }).await
    }

    pub async fn act(&self, action: Action) -> Result<()> {
        self.send(ClientMessage::Action { action }).await
    }

    pub async fn attack(&self) -> Result<()> {
        self.act(Action::Attack).await
    }

    pub async fn switch(&self) -> Result<()> {
        self.act(Action::Switch).await
    }

    pub async fn surrender(&self) -> Result<()> {
        self.act(Action::Surrender).await
    }
}
