//! Roster (one player's team) state

use super::combatant::Combatant;

/// Number of combatants every roster holds
pub const ROSTER_SIZE: usize = 3;

/// One player's three combatants and the one currently in play
#[derive(Debug, Clone, PartialEq)]
pub struct Roster {
    members: [Combatant; ROSTER_SIZE],
    active: usize,
}

impl Roster {
    /// Create a roster in selection order with the first member active
    pub fn new(members: [Combatant; ROSTER_SIZE]) -> Self {
        Self { members, active: 0 }
    }

    pub fn members(&self) -> &[Combatant] {
        &self.members
    }

    pub(crate) fn members_mut(&mut self) -> &mut [Combatant] {
        &mut self.members
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn active(&self) -> &Combatant {
        &self.members[self.active]
    }

    pub(crate) fn active_mut(&mut self) -> &mut Combatant {
        &mut self.members[self.active]
    }

    pub fn alive_count(&self) -> usize {
        self.members.iter().filter(|c| c.is_alive()).count()
    }

    /// A roster is defeated once every member has fainted
    pub fn is_defeated(&self) -> bool {
        self.members.iter().all(|c| c.fainted)
    }

    /// Sum of accumulated experience across all members
    pub fn total_experience(&self) -> u64 {
        self.members.iter().map(|c| u64::from(c.experience)).sum()
    }

    /// Catalog indices of the members, in roster order
    pub fn catalog_indices(&self) -> [usize; ROSTER_SIZE] {
        [
            self.members[0].catalog_index,
            self.members[1].catalog_index,
            self.members[2].catalog_index,
        ]
    }

    /// Move the active slot forward cyclically to the next member still standing.
    ///
    /// Fainted members are skipped. When no other member is standing the active slot
    /// stays where it is. Returns the new active index.
    pub fn advance(&mut self) -> usize {
        for step in 1..ROSTER_SIZE {
            let candidate = (self.active + step) % ROSTER_SIZE;
            if self.members[candidate].is_alive() {
                self.active = candidate;
                break;
            }
        }
        self.active
    }
}
