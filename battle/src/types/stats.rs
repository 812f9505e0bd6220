//! Base stats and related types

use serde::{Deserialize, Serialize};

/// The six base stats of a combatant
///
/// Field aliases accept the attribute names written by the pokedex scraper
/// (`sp_attack`, `sp_defense`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseStats {
    pub hp: u32,
    pub attack: u32,
    pub defense: u32,
    #[serde(alias = "sp_attack")]
    pub special_attack: u32,
    #[serde(alias = "sp_defense")]
    pub special_defense: u32,
    pub speed: u32,
}

impl BaseStats {
    pub fn new(
        hp: u32,
        attack: u32,
        defense: u32,
        special_attack: u32,
        special_defense: u32,
        speed: u32,
    ) -> Self {
        Self {
            hp,
            attack,
            defense,
            special_attack,
            special_defense,
            speed,
        }
    }
}
