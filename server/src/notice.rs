//! Rendering battle events into per-player wire messages

use pokebat_battle::{Battle, BattleEvent, EndReason, RewardReport, Side};
use pokebat_protocol::ServerMessage;
use pokebat_protocol::server::status::{WAITING, YOUR_TURN, game_over};

/// A message addressed to one player
pub type Notice = (Side, ServerMessage);

/// Prompt the turn owner and tell the other player to wait
pub fn turn_prompt(owner: Side) -> Vec<Notice> {
    vec![
        (owner, ServerMessage::status(YOUR_TURN)),
        (owner.opponent(), ServerMessage::status(WAITING)),
    ]
}

/// Opening announcement of both active combatants
pub fn lineup(battle: &Battle) -> Vec<Notice> {
    let mut notices = Vec::with_capacity(4);
    for side in Side::BOTH {
        let mine = battle.roster(side).active();
        let theirs = battle.roster(side.opponent()).active();
        notices.push((
            side,
            ServerMessage::status(format!("Your Pokémon: {} (HP: {})", mine.name, mine.hp_current)),
        ));
        notices.push((
            side,
            ServerMessage::status(format!(
                "Opponent Pokémon: {} (HP: {})",
                theirs.name, theirs.hp_current
            )),
        ));
    }
    notices
}

/// Render the events of one resolved action, in order
pub fn render(events: &[BattleEvent]) -> Vec<Notice> {
    let mut notices = Vec::new();
    let mut winner = None;

    for event in events {
        match event {
            BattleEvent::Attacked {
                attacker,
                attacker_name,
                defender_name,
                kind,
                damage,
                remaining_hp,
            } => {
                let prefix = if kind.is_special() {
                    "Special attack! "
                } else {
                    ""
                };
                notices.push((
                    *attacker,
                    ServerMessage::outcome(
                        format!(
                            "{}You dealt {} damage to {}. Remaining HP: {}",
                            prefix, damage, defender_name, remaining_hp
                        ),
                        *damage,
                        *remaining_hp,
                    ),
                ));
                notices.push((
                    attacker.opponent(),
                    ServerMessage::outcome(
                        format!(
                            "{}{} dealt {} damage to your {}. Remaining HP: {}",
                            prefix, attacker_name, damage, defender_name, remaining_hp
                        ),
                        *damage,
                        *remaining_hp,
                    ),
                ));
            }
            BattleEvent::Fainted { side, name } => {
                notices.push((*side, ServerMessage::status(format!("{} fainted!", name))));
                notices.push((
                    side.opponent(),
                    ServerMessage::status(format!("Opponent's {} fainted!", name)),
                ));
            }
            BattleEvent::SentOut { side, name } => {
                notices.push((*side, ServerMessage::status(format!("Go, {}!", name))));
                notices.push((
                    side.opponent(),
                    ServerMessage::status(format!("Opponent sent out {}.", name)),
                ));
            }
            BattleEvent::Switched { side, name } => {
                notices.push((*side, ServerMessage::status(format!("Switched to {}.", name))));
            }
            BattleEvent::Surrendered { side } => {
                notices.push((*side, ServerMessage::status("You surrendered! Game over.")));
                notices.push((
                    side.opponent(),
                    ServerMessage::status("Your opponent surrendered! You win!"),
                ));
            }
            BattleEvent::TimedOut { side } => {
                notices.push((
                    *side,
                    ServerMessage::status("You ran out of time and forfeit the match."),
                ));
                notices.push((
                    side.opponent(),
                    ServerMessage::status("Your opponent ran out of time! You win!"),
                ));
            }
            BattleEvent::MatchOver { winner: side, reason } => {
                winner = Some(*side);
                if *reason == EndReason::Defeat {
                    notices.push((*side, ServerMessage::status("You win!")));
                    notices.push((side.opponent(), ServerMessage::status("You lose!")));
                }
            }
            BattleEvent::Rewarded { side, report } => {
                notices.extend(render_reward(*side, report));
            }
            BattleEvent::TurnPassed { .. } => {}
        }
    }

    if let Some(winner) = winner {
        let text = game_over(winner.number());
        for side in Side::BOTH {
            notices.push((side, ServerMessage::status(text.clone())));
        }
    }

    notices
}

fn render_reward(side: Side, report: &RewardReport) -> Vec<Notice> {
    match report {
        RewardReport::NoExperience => vec![(
            side,
            ServerMessage::status(
                "No experience gained as the losing team has no accumulated experience.",
            ),
        )],
        RewardReport::Shared { share, gains, .. } => {
            let mut notices: Vec<Notice> = gains
                .iter()
                .map(|gain| {
                    (
                        side,
                        ServerMessage::status(format!(
                            "{} gained {} experience. Total experience: {} -> {}.",
                            gain.name, share, gain.before, gain.after
                        )),
                    )
                })
                .collect();
            notices.push((
                side,
                ServerMessage::status(format!(
                    "Each of your Pokémon gained {} experience.",
                    share
                )),
            ));
            notices
        }
    }
}
