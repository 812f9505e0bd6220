//! First-turn resolution

use std::cmp::Ordering;

use rand::Rng;

use crate::types::{Combatant, Side};

/// Decide who acts first from the two opening combatants' Speed.
///
/// The faster side goes first; a tie is broken uniformly at random. Turn order after
/// the first turn strictly alternates and is tracked by the battle itself.
pub fn first_turn<R: Rng + ?Sized>(one: &Combatant, two: &Combatant, rng: &mut R) -> Side {
    match one.stats.speed.cmp(&two.stats.speed) {
        Ordering::Greater => Side::One,
        Ordering::Less => Side::Two,
        Ordering::Equal => {
            if rng.gen_bool(0.5) {
                Side::One
            } else {
                Side::Two
            }
        }
    }
}
