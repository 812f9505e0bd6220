//! Post-match experience transfer

use crate::types::{ROSTER_SIZE, Roster};

/// Experience change of one winning combatant
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExperienceGain {
    pub name: String,
    pub before: u32,
    pub after: u32,
}

/// What the winning roster received
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RewardReport {
    /// The losing roster had no accumulated experience; nothing changed
    NoExperience,

    /// Every winning combatant gained `share` experience
    Shared {
        total: u64,
        share: u32,
        gains: Vec<ExperienceGain>,
    },
}

/// Transfer experience from the losing roster to the winning roster.
///
/// The loser's accumulated experience is summed and a third of it (integer division)
/// is added once to every member of the winning roster. The loser is not modified.
pub fn distribute(winner: &mut Roster, loser: &Roster) -> RewardReport {
    let total = loser.total_experience();
    if total == 0 {
        return RewardReport::NoExperience;
    }

    // A third of at most three u32 values always fits in u32
    let share = u32::try_from(total / ROSTER_SIZE as u64).unwrap_or(u32::MAX);

    let gains = winner
        .members_mut()
        .iter_mut()
        .map(|member| {
            let before = member.experience;
            member.experience = before.saturating_add(share);
            ExperienceGain {
                name: member.name.clone(),
                before,
                after: member.experience,
            }
        })
        .collect();

    RewardReport::Shared {
        total,
        share,
        gains,
    }
}
