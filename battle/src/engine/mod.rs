//! The per-turn battle state machine

mod battle;
mod event;
mod resolver;

pub use battle::{Battle, BattleError, EndReason, MatchResult, Phase};
pub use event::BattleEvent;
