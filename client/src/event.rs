use pokebat_protocol::ServerMessage;
use pokebat_protocol::server::status::{
    ABORTED_PREFIX, BATTLE_BEGINS, GAME_OVER_PREFIX, INVALID_SELECTION, NAME_DEFAULTED_PREFIX,
    NAME_UNREADABLE, SELECTION_COMPLETE, WAITING, WELCOME_PREFIX, YOUR_TURN,
};

/// A server message classified by what it means for the player
#[derive(Debug, Clone, PartialEq)]
pub enum ServerEvent {
    PlayerNumber(u8),
    Welcome(String),
    /// The name was refused but the server substituted one; picks are expected next
    NameFallback(String),
    SelectionRejected,
    DraftComplete,
    BattleBegins,
    YourTurn,
    Waiting,
    Outcome {
        text: String,
        damage: u32,
        remaining_hp: u32,
    },
    GameOver(String),
    Aborted(String),
    /// Any other informational text
    Info(String),
}

impl From<ServerMessage> for ServerEvent {
    fn from(message: ServerMessage) -> Self {
        match message {
            ServerMessage::PlayerNumber(n) => Self::PlayerNumber(n),
            ServerMessage::ActionOutcome {
                result,
                damage,
                remaining_hp,
            } => Self::Outcome {
                text: result,
                damage,
                remaining_hp,
            },
            ServerMessage::Status { result } => Self::from_status(result),
        }
    }
}

impl ServerEvent {
    fn from_status(text: String) -> Self {
        match text.as_str() {
            YOUR_TURN => return Self::YourTurn,
            WAITING => return Self::Waiting,
            INVALID_SELECTION => return Self::SelectionRejected,
            SELECTION_COMPLETE => return Self::DraftComplete,
            BATTLE_BEGINS => return Self::BattleBegins,
            _ => {}
        }

        if text.starts_with(WELCOME_PREFIX) {
            Self::Welcome(text)
        } else if text == NAME_UNREADABLE || text.starts_with(NAME_DEFAULTED_PREFIX) {
            Self::NameFallback(text)
        } else if text.starts_with(GAME_OVER_PREFIX) {
            Self::GameOver(text)
        } else if text.starts_with(ABORTED_PREFIX) {
            Self::Aborted(text)
        } else {
            Self::Info(text)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classifies_fixed_texts() {
        assert_eq!(
            ServerEvent::from(ServerMessage::status(YOUR_TURN)),
            ServerEvent::YourTurn
        );
        assert_eq!(
            ServerEvent::from(ServerMessage::status(INVALID_SELECTION)),
            ServerEvent::SelectionRejected
        );
        assert_eq!(
            ServerEvent::from(ServerMessage::PlayerNumber(2)),
            ServerEvent::PlayerNumber(2)
        );
    }

    #[test]
    fn test_classifies_prefixed_texts() {
        assert!(matches!(
            ServerEvent::from(ServerMessage::status("Game Over. Player 1 wins.")),
            ServerEvent::GameOver(_)
        ));
        assert!(matches!(
            ServerEvent::from(ServerMessage::status("Match aborted: Player 2 disconnected")),
            ServerEvent::Aborted(_)
        ));
        assert!(matches!(
            ServerEvent::from(ServerMessage::status("Welcome, Ash! Please select")),
            ServerEvent::Welcome(_)
        ));
        // Lowercase "over" is just commentary
        assert!(matches!(
            ServerEvent::from(ServerMessage::status("You surrendered! Game over.")),
            ServerEvent::Info(_)
        ));
    }

    #[test]
    fn test_classifies_name_fallbacks() {
        assert_eq!(
            ServerEvent::from(ServerMessage::status(
                "Invalid name received. Defaulting to 'Player'."
            )),
            ServerEvent::NameFallback("Invalid name received. Defaulting to 'Player'.".to_string())
        );
        assert_eq!(
            ServerEvent::from(ServerMessage::status(NAME_UNREADABLE)),
            ServerEvent::NameFallback(NAME_UNREADABLE.to_string())
        );
    }

    #[test]
    fn test_outcome_keeps_numbers() {
        let event = ServerEvent::from(ServerMessage::outcome("hit", 12, 30));

        assert_eq!(
            event,
            ServerEvent::Outcome {
                text: "hit".to_string(),
                damage: 12,
                remaining_hp: 30,
            }
        );
    }
}
