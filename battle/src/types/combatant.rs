//! Combatant templates and battle instances

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::stats::BaseStats;

/// Immutable catalog entry a combatant is created from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombatantTemplate {
    /// Species name
    pub name: String,

    /// Base stats
    #[serde(alias = "attributes")]
    pub stats: BaseStats,

    /// Damage multipliers keyed by element name (e.g. "fire": 1.5)
    #[serde(default)]
    pub elemental_effects: HashMap<String, f64>,

    /// Experience yield of this species
    #[serde(default, alias = "base_experience")]
    pub base_exp: u32,

    /// Experience already accumulated when drafted
    #[serde(default, alias = "experience")]
    pub exp: u32,
}

impl CombatantTemplate {
    pub fn new(name: impl Into<String>, stats: BaseStats) -> Self {
        Self {
            name: name.into(),
            stats,
            elemental_effects: HashMap::new(),
            base_exp: 0,
            exp: 0,
        }
    }

    pub fn with_effect(mut self, element: impl Into<String>, multiplier: f64) -> Self {
        self.elemental_effects.insert(element.into(), multiplier);
        self
    }

    pub fn with_exp(mut self, exp: u32) -> Self {
        self.exp = exp;
        self
    }
}

/// A combatant inside a roster, with mutable battle state
#[derive(Debug, Clone, PartialEq)]
pub struct Combatant {
    /// Catalog index this combatant was drafted from
    pub catalog_index: usize,

    pub name: String,

    pub stats: BaseStats,

    pub elemental_effects: HashMap<String, f64>,

    pub base_exp: u32,

    /// Current HP, always within `0..=stats.hp`
    pub hp_current: u32,

    /// Accumulated experience
    pub experience: u32,

    pub fainted: bool,
}

impl Combatant {
    /// Create a fresh battle instance at full HP
    pub fn from_template(catalog_index: usize, template: &CombatantTemplate) -> Self {
        Self {
            catalog_index,
            name: template.name.clone(),
            stats: template.stats,
            elemental_effects: template.elemental_effects.clone(),
            base_exp: template.base_exp,
            hp_current: template.stats.hp,
            experience: template.exp,
            fainted: false,
        }
    }

    pub fn hp_max(&self) -> u32 {
        self.stats.hp
    }

    pub fn is_alive(&self) -> bool {
        !self.fainted
    }

    /// Multiplier against an element, 1.0 when the template has none
    pub fn elemental_effect(&self, element: &str) -> f64 {
        self.elemental_effects.get(element).copied().unwrap_or(1.0)
    }

    /// Subtract damage, flooring HP at zero. Returns the remaining HP.
    pub fn take_damage(&mut self, damage: u32) -> u32 {
        self.hp_current = self.hp_current.saturating_sub(damage);
        self.hp_current
    }

    pub fn faint(&mut self) {
        self.hp_current = 0;
        self.fainted = true;
    }
}
