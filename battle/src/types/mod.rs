//! Domain types for the match data model

mod combatant;
mod roster;
mod side;
mod stats;

pub use combatant::{Combatant, CombatantTemplate};
pub use roster::{ROSTER_SIZE, Roster};
pub use side::Side;
pub use stats::BaseStats;
