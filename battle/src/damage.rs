//! Damage calculation

use rand::Rng;

use crate::types::{BaseStats, Combatant};

/// Random bonus added to every attack is drawn from `0..DAMAGE_ROLL_RANGE`
pub const DAMAGE_ROLL_RANGE: u32 = 10;

/// Which stat pair an attack uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttackKind {
    /// Attack against Defense
    Physical,
    /// SpecialAttack against SpecialDefense
    Special,
}

impl AttackKind {
    /// Pick physical or special with equal probability
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        if rng.gen_bool(0.5) {
            AttackKind::Special
        } else {
            AttackKind::Physical
        }
    }

    pub fn is_special(self) -> bool {
        self == AttackKind::Special
    }

    pub fn attack_stat(self, stats: &BaseStats) -> u32 {
        match self {
            AttackKind::Physical => stats.attack,
            AttackKind::Special => stats.special_attack,
        }
    }

    pub fn defense_stat(self, stats: &BaseStats) -> u32 {
        match self {
            AttackKind::Physical => stats.defense,
            AttackKind::Special => stats.special_defense,
        }
    }
}

/// Draw the random bonus for one attack
pub fn roll<R: Rng + ?Sized>(rng: &mut R) -> u32 {
    rng.gen_range(0..DAMAGE_ROLL_RANGE)
}

/// `max(0, attack - defense / 2 + roll)`, with the halving truncated
pub fn formula(attack: u32, defense: u32, roll: u32) -> u32 {
    let raw = i64::from(attack) - i64::from(defense / 2) + i64::from(roll);
    u32::try_from(raw.max(0)).unwrap_or(u32::MAX)
}

/// Damage `attacker` deals to `defender` for a given stat pair and roll
pub fn calculate(attacker: &Combatant, defender: &Combatant, kind: AttackKind, roll: u32) -> u32 {
    formula(
        kind.attack_stat(&attacker.stats),
        kind.defense_stat(&defender.stats),
        roll,
    )
}
