//! Structured results of resolving one action

use crate::damage::AttackKind;
use crate::reward::RewardReport;
use crate::types::Side;

use super::battle::EndReason;

/// Something that happened while resolving an action, in order of occurrence.
///
/// Events carry names and numbers only; the session layer decides which player sees
/// which text.
#[derive(Debug, Clone, PartialEq)]
pub enum BattleEvent {
    /// The attacker's active combatant hit the defender's active combatant
    Attacked {
        attacker: Side,
        attacker_name: String,
        defender_name: String,
        kind: AttackKind,
        damage: u32,
        remaining_hp: u32,
    },

    /// A combatant's HP reached zero
    Fainted { side: Side, name: String },

    /// After a faint, the next standing combatant took the field
    SentOut { side: Side, name: String },

    /// The player switched their active combatant voluntarily
    Switched { side: Side, name: String },

    /// The player gave up the match
    Surrendered { side: Side },

    /// The player did not act in time and forfeits
    TimedOut { side: Side },

    /// The match is over. Emitted exactly once.
    MatchOver { winner: Side, reason: EndReason },

    /// Experience transferred to the winning side
    Rewarded { side: Side, report: RewardReport },

    /// The turn passed to the other player
    TurnPassed { next: Side },
}
