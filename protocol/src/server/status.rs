//! Fixed status texts both ends agree on.
//!
//! The server sends these verbatim; clients match on them to drive prompts.

pub const YOUR_TURN: &str = "It's your turn!";
pub const WAITING: &str = "Waiting for opponent's move";
pub const INVALID_SELECTION: &str =
    "Invalid or already selected Pokémon choice. Please select a different Pokémon.";
pub const SELECTION_COMPLETE: &str = "You have selected all your Pokémon.";
pub const BATTLE_BEGINS: &str =
    "Both players have selected their Pokémon. The battle will begin now!";

pub const WELCOME_PREFIX: &str = "Welcome, ";
/// Blank name; the server picked a default and the draft proceeds
pub const NAME_DEFAULTED_PREFIX: &str = "Invalid name received.";
/// Undecodable name line; the draft proceeds under a placeholder name
pub const NAME_UNREADABLE: &str = "Failed to receive player name.";
pub const GAME_OVER_PREFIX: &str = "Game Over";
pub const ABORTED_PREFIX: &str = "Match aborted:";

/// Final line of a decided match, sent to both players
pub fn game_over(winner: u8) -> String {
    format!("{}. Player {} wins.", GAME_OVER_PREFIX, winner)
}

pub fn aborted(reason: impl std::fmt::Display) -> String {
    format!("{} {}", ABORTED_PREFIX, reason)
}
