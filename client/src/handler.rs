use async_trait::async_trait;

/// Trait for reacting to pokebat server messages.
///
/// Implement this trait to create a player. All methods have default no-op
/// implementations, so you only need to implement the events you care about.
///
/// # Example
///
/// ```ignore
/// struct Bot {
///     sender: Sender,
/// }
///
/// #[async_trait]
/// impl Handler for Bot {
///     async fn on_turn(&mut self) {
///         self.sender.attack().await.ok();
///     }
/// }
/// ```
#[async_trait]
pub trait Handler: Send {
    /// Called with the identity the server assigned at connect time.
    /// The server expects a name next.
    async fn on_player_number(&mut self, number: u8) {
        let _ = number;
    }

    /// Called when the name was accepted. The text lists the catalog.
    async fn on_welcome(&mut self, text: &str) {
        let _ = text;
    }

    /// Called when the name was refused and the server substituted one.
    /// The draft has started all the same, so this defaults to `on_welcome`.
    async fn on_name_fallback(&mut self, text: &str) {
        self.on_welcome(text).await;
    }

    /// Called when a pick was refused; the same slot must be picked again.
    async fn on_selection_rejected(&mut self) {}

    /// Called once all three picks are accepted.
    async fn on_draft_complete(&mut self) {}

    /// Called when both rosters are complete and the battle starts.
    async fn on_battle_start(&mut self) {}

    /// Called when the server is waiting for this player's action.
    async fn on_turn(&mut self) {}

    /// Called when the opponent is acting.
    async fn on_waiting(&mut self) {}

    /// Called for every attack, whoever made it.
    async fn on_outcome(&mut self, text: &str, damage: u32, remaining_hp: u32) {
        let _ = (text, damage, remaining_hp);
    }

    /// Called with the final line of a decided match.
    async fn on_game_over(&mut self, text: &str) {
        let _ = text;
    }

    /// Called when the server aborted the match without a result.
    async fn on_aborted(&mut self, text: &str) {
        let _ = text;
    }

    /// Called for any text not handled by a specific method.
    async fn on_info(&mut self, text: &str) {
        let _ = text;
    }
}
