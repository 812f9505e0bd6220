//! Action resolution for Battle

use rand::Rng;

use pokebat_protocol::Action;

use super::battle::{Battle, BattleError, EndReason, MatchResult, Phase};
use super::event::BattleEvent;
use crate::damage::{self, AttackKind};
use crate::reward::distribute;
use crate::types::Side;

impl Battle {
    /// Resolve one action submitted by the turn owner.
    ///
    /// An attack picks physical or special with equal odds and draws a fresh damage roll.
    /// Unless the action ends the match, the turn passes to the other player.
    pub fn resolve<R: Rng + ?Sized>(
        &mut self,
        action: Action,
        rng: &mut R,
    ) -> Result<Vec<BattleEvent>, BattleError> {
        match action {
            Action::Attack => {
                let kind = AttackKind::random(rng);
                let roll = damage::roll(rng);
                self.apply_attack(kind, roll)
            }
            Action::Switch => self.switch_active(),
            Action::Surrender => {
                let side = self.turn;
                self.forfeit(side, EndReason::Surrender)
            }
        }
    }

    /// Resolve an attack by the turn owner with a fixed stat pair and damage roll
    pub fn apply_attack(
        &mut self,
        kind: AttackKind,
        roll: u32,
    ) -> Result<Vec<BattleEvent>, BattleError> {
        self.begin_action()?;

        let attacker = self.turn;
        let defender = attacker.opponent();
        let attacker_name = self.roster(attacker).active().name.clone();
        let damage = damage::calculate(
            self.roster(attacker).active(),
            self.roster(defender).active(),
            kind,
            roll,
        );

        let target = self.roster_mut(defender).active_mut();
        let remaining_hp = target.take_damage(damage);
        let defender_name = target.name.clone();

        let mut events = vec![BattleEvent::Attacked {
            attacker,
            attacker_name,
            defender_name: defender_name.clone(),
            kind,
            damage,
            remaining_hp,
        }];

        if remaining_hp == 0 {
            target.faint();
            events.push(BattleEvent::Fainted {
                side: defender,
                name: defender_name,
            });

            if self.roster(defender).is_defeated() {
                self.finish(attacker, EndReason::Defeat, &mut events);
                return Ok(events);
            }

            let roster = self.roster_mut(defender);
            roster.advance();
            events.push(BattleEvent::SentOut {
                side: defender,
                name: roster.active().name.clone(),
            });
        }

        self.pass_turn(&mut events);
        Ok(events)
    }

    /// The turn owner ran out of time; resolved as their surrender
    pub fn time_out(&mut self) -> Result<Vec<BattleEvent>, BattleError> {
        let side = self.turn;
        self.forfeit(side, EndReason::Timeout)
    }

    fn switch_active(&mut self) -> Result<Vec<BattleEvent>, BattleError> {
        self.begin_action()?;

        let side = self.turn;
        let roster = self.roster_mut(side);
        roster.advance();
        let mut events = vec![BattleEvent::Switched {
            side,
            name: roster.active().name.clone(),
        }];

        self.pass_turn(&mut events);
        Ok(events)
    }

    fn forfeit(&mut self, side: Side, reason: EndReason) -> Result<Vec<BattleEvent>, BattleError> {
        self.begin_action()?;

        let mut events = vec![match reason {
            EndReason::Timeout => BattleEvent::TimedOut { side },
            _ => BattleEvent::Surrendered { side },
        }];
        self.finish(side.opponent(), reason, &mut events);
        Ok(events)
    }

    fn begin_action(&mut self) -> Result<(), BattleError> {
        if self.is_over() {
            return Err(BattleError::MatchOver);
        }
        self.actions += 1;
        Ok(())
    }

    fn pass_turn(&mut self, events: &mut Vec<BattleEvent>) {
        self.turn = self.turn.opponent();
        events.push(BattleEvent::TurnPassed { next: self.turn });
    }

    /// Enter the terminal phase and pay out experience. Runs at most once per match.
    fn finish(&mut self, winner: Side, reason: EndReason, events: &mut Vec<BattleEvent>) {
        self.phase = Phase::MatchOver(MatchResult { winner, reason });
        events.push(BattleEvent::MatchOver { winner, reason });

        let [one, two] = &mut self.rosters;
        let report = match winner {
            Side::One => distribute(one, two),
            Side::Two => distribute(two, one),
        };
        events.push(BattleEvent::Rewarded {
            side: winner,
            report,
        });
    }
}
