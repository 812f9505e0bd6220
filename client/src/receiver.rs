use anyhow::Result;
use futures_util::stream::SplitStream;
use tokio::io::{AsyncRead, AsyncWrite};
use tokio::net::TcpStream;
use tokio_util::codec::{Framed, LinesCodec};

use crate::connection::read_message;
use crate::event::ServerEvent;
use crate::handler::Handler;
use crate::state::{ClientState, MatchPhase};

/// Receives messages from the server and dispatches them to a handler.
pub struct Receiver<S = TcpStream> {
    incoming: SplitStream<Framed<S, LinesCodec>>,
    state: ClientState,
}

impl<S> Receiver<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    pub(crate) fn new(incoming: SplitStream<Framed<S, LinesCodec>>, state: ClientState) -> Self {
        Self { incoming, state }
    }

    /// Run the message loop, dispatching events to the handler.
    ///
    /// This will run until the server closes the connection or an error occurs.
    pub async fn run<H: Handler>(&mut self, handler: &mut H) -> Result<()> {
        while let Some(message) = read_message(&mut self.incoming).await? {
            let event = ServerEvent::from(message);
            self.state.apply(&event);
            dispatch(handler, event).await;
        }
        Ok(())
    }

    pub fn player(&self) -> Option<u8> {
        self.state.player
    }

    pub fn phase(&self) -> MatchPhase {
        self.state.phase
    }
}

/// Dispatch a single event to the appropriate handler method
async fn dispatch<H: Handler>(handler: &mut H, event: ServerEvent) {
    match event {
        ServerEvent::PlayerNumber(n) => handler.on_player_number(n).await,
        ServerEvent::Welcome(text) => handler.on_welcome(&text).await,
        ServerEvent::NameFallback(text) => handler.on_name_fallback(&text).await,
        ServerEvent::SelectionRejected => handler.on_selection_rejected().await,
        ServerEvent::DraftComplete => handler.on_draft_complete().await,
        ServerEvent::BattleBegins => handler.on_battle_start().await,
        ServerEvent::YourTurn => handler.on_turn().await,
        ServerEvent::Waiting => handler.on_waiting().await,
        ServerEvent::Outcome {
            text,
            damage,
            remaining_hp,
        } => handler.on_outcome(&text, damage, remaining_hp).await,
        ServerEvent::GameOver(text) => handler.on_game_over(&text).await,
        ServerEvent::Aborted(text) => handler.on_aborted(&text).await,
        ServerEvent::Info(text) => handler.on_info(&text).await,
    }
}
