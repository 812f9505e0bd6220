//! Battle - match state owned by a single battle loop

use rand::Rng;
use thiserror::Error;

use crate::turn::first_turn;
use crate::types::{Roster, Side};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BattleError {
    #[error("The match is already over")]
    MatchOver,
}

/// Why a match ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EndReason {
    /// Every combatant on the losing roster fainted
    Defeat,
    /// The loser surrendered
    Surrender,
    /// The loser did not act before the turn deadline
    Timeout,
}

/// Final outcome of a match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchResult {
    pub winner: Side,
    pub reason: EndReason,
}

impl MatchResult {
    pub fn loser(&self) -> Side {
        self.winner.opponent()
    }
}

/// Where the state machine is between actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// The turn owner may submit one action
    AwaitingAction,
    /// Terminal; no further mutation happens
    MatchOver(MatchResult),
}

/// Match state: both rosters, the turn owner, and the terminal flag
#[derive(Debug, Clone)]
pub struct Battle {
    pub(crate) rosters: [Roster; 2],
    pub(crate) turn: Side,
    pub(crate) phase: Phase,
    /// Number of actions resolved so far
    pub(crate) actions: u32,
}

impl Battle {
    /// Create a battle with an explicit first turn owner
    pub fn new(one: Roster, two: Roster, first: Side) -> Self {
        Self {
            rosters: [one, two],
            turn: first,
            phase: Phase::AwaitingAction,
            actions: 0,
        }
    }

    /// Create a battle, deciding the first turn from the opening combatants' Speed
    pub fn start<R: Rng + ?Sized>(one: Roster, two: Roster, rng: &mut R) -> Self {
        let first = first_turn(one.active(), two.active(), rng);
        Self::new(one, two, first)
    }

    /// Player who must submit the next action
    pub fn turn(&self) -> Side {
        self.turn
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_over(&self) -> bool {
        matches!(self.phase, Phase::MatchOver(_))
    }

    pub fn result(&self) -> Option<MatchResult> {
        match self.phase {
            Phase::MatchOver(result) => Some(result),
            Phase::AwaitingAction => None,
        }
    }

    pub fn winner(&self) -> Option<Side> {
        self.result().map(|r| r.winner)
    }

    pub fn roster(&self, side: Side) -> &Roster {
        &self.rosters[side.index()]
    }

    pub(crate) fn roster_mut(&mut self, side: Side) -> &mut Roster {
        &mut self.rosters[side.index()]
    }

    /// Number of actions resolved so far
    pub fn actions_resolved(&self) -> u32 {
        self.actions
    }
}
