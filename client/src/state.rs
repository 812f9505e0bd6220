use crate::event::ServerEvent;

/// Where the player is in the match, as far as the client can tell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchPhase {
    #[default]
    Connecting,
    Drafting,
    AwaitingBattle,
    Battle,
    Over,
}

/// Internal state accumulated from messages
#[derive(Debug, Clone, Default)]
pub(crate) struct ClientState {
    pub player: Option<u8>,
    pub phase: MatchPhase,
    pub my_turn: bool,
}

impl ClientState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, event: &ServerEvent) {
        match event {
            ServerEvent::PlayerNumber(n) => self.player = Some(*n),
            ServerEvent::Welcome(_) | ServerEvent::NameFallback(_) => {
                self.phase = MatchPhase::Drafting
            }
            ServerEvent::DraftComplete => self.phase = MatchPhase::AwaitingBattle,
            ServerEvent::BattleBegins => self.phase = MatchPhase::Battle,
            ServerEvent::YourTurn => self.my_turn = true,
            ServerEvent::Waiting => self.my_turn = false,
            ServerEvent::GameOver(_) | ServerEvent::Aborted(_) => {
                self.phase = MatchPhase::Over;
                self.my_turn = false;
            }
            _ => {}
        }
    }
}
