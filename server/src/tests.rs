use std::sync::Arc;
use std::time::Duration;

use pokebat_battle::{BaseStats, Catalog, CombatantTemplate, EndReason, Side};
use pokebat_protocol::server::status::{
    BATTLE_BEGINS, INVALID_SELECTION, SELECTION_COMPLETE, WAITING, YOUR_TURN,
};
use pokebat_protocol::{Action, ClientMessage, ServerMessage, parse_server_message};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, DuplexStream, Lines, ReadHalf, WriteHalf};
use tokio::task::JoinHandle;

use crate::config::ServerConfig;
use crate::connection::Connection;
use crate::error::SessionError;
use crate::session::{MatchReport, Session};

/// Titan one-shots everything and shrugs off every hit; the rest have 1 HP.
fn test_catalog() -> Catalog {
    let weak = BaseStats::new(1, 1, 1, 1, 1, 10);
    Catalog::new(vec![
        CombatantTemplate::new("Titan", BaseStats::new(100, 1000, 1000, 1000, 1000, 100))
            .with_exp(120),
        CombatantTemplate::new("Sprout", weak).with_exp(30),
        CombatantTemplate::new("Pebble", weak).with_exp(30),
        CombatantTemplate::new("Minnow", weak).with_exp(30),
    ])
    .unwrap()
}

struct Peer {
    lines: Lines<BufReader<ReadHalf<DuplexStream>>>,
    writer: WriteHalf<DuplexStream>,
}

impl Peer {
    async fn send(&mut self, message: ClientMessage) {
        let line = format!("{}\n", message.to_wire_format());
        self.writer.write_all(line.as_bytes()).await.unwrap();
    }

    async fn send_raw(&mut self, line: &str) {
        self.writer.write_all(line.as_bytes()).await.unwrap();
    }

    async fn next(&mut self) -> Option<ServerMessage> {
        let line = tokio::time::timeout(Duration::from_secs(5), self.lines.next_line())
            .await
            .expect("server went quiet")
            .unwrap()?;
        Some(parse_server_message(&line).unwrap())
    }

    async fn next_text(&mut self) -> String {
        self.next()
            .await
            .expect("connection closed")
            .text()
            .expect("message without text")
            .to_string()
    }

    async fn expect(&mut self, text: &str) {
        assert_eq!(self.next_text().await, text);
    }

    async fn draft(&mut self, name: &str, picks: [i64; 3]) {
        self.send(ClientMessage::Name {
            name: name.to_string(),
        })
        .await;
        assert!(self.next_text().await.starts_with(&format!("Welcome, {}!", name)));
        for pick in picks {
            self.send(ClientMessage::Choice { choice: pick }).await;
            assert!(self.next_text().await.starts_with("You chose "));
        }
        self.expect(SELECTION_COMPLETE).await;
    }

    async fn act(&mut self, action: Action) {
        self.send(ClientMessage::Action { action }).await;
    }
}

fn start(config: ServerConfig) -> (Peer, Peer, JoinHandle<Result<MatchReport, SessionError>>) {
    let mut peers = Vec::new();
    let mut connections = Vec::new();
    for side in Side::BOTH {
        let (server, client) = tokio::io::duplex(64 * 1024);
        let (read, writer) = tokio::io::split(client);
        peers.push(Peer {
            lines: BufReader::new(read).lines(),
            writer,
        });
        connections.push(Connection::new(side, server));
    }

    let connections: [Connection<DuplexStream>; 2] = connections.try_into().ok().unwrap();
    let session = Session::new(0, Arc::new(test_catalog()), &config);
    let handle = tokio::spawn(session.run(connections));

    let two = peers.pop().unwrap();
    let one = peers.pop().unwrap();
    (one, two, handle)
}

fn config() -> ServerConfig {
    ServerConfig {
        turn_timeout: None,
        seed: Some(7),
        ..ServerConfig::default()
    }
}

/// Player 1 fields Titan first, so it always moves first
async fn draft_both(one: &mut Peer, two: &mut Peer) {
    one.draft("Ash", [0, 1, 2]).await;
    two.draft("Gary", [1, 2, 3]).await;

    one.expect(BATTLE_BEGINS).await;
    two.expect(BATTLE_BEGINS).await;

    one.expect("Your Pokémon: Titan (HP: 100)").await;
    one.expect("Opponent Pokémon: Sprout (HP: 1)").await;
    two.expect("Your Pokémon: Sprout (HP: 1)").await;
    two.expect("Opponent Pokémon: Titan (HP: 100)").await;

    one.expect(YOUR_TURN).await;
    two.expect(WAITING).await;
}

#[tokio::test]
async fn test_battle_begins_only_after_both_rosters() {
    let (mut one, mut two, handle) = start(config());

    one.draft("Ash", [0, 1, 2]).await;

    // Player 1 is done but must not hear anything until player 2 is
    let early = tokio::time::timeout(Duration::from_millis(100), one.next()).await;
    assert!(early.is_err());

    two.draft("Gary", [1, 2, 3]).await;
    one.expect(BATTLE_BEGINS).await;
    two.expect(BATTLE_BEGINS).await;

    one.act(Action::Surrender).await;
    drop(one);
    drop(two);
    let _ = handle.await.unwrap();
}

#[tokio::test]
async fn test_duplicate_pick_is_retried() {
    let (mut one, mut two, handle) = start(config());

    one.send(ClientMessage::Name {
        name: "Ash".to_string(),
    })
    .await;
    one.next_text().await;

    one.send(ClientMessage::Choice { choice: 0 }).await;
    one.expect("You chose Titan as your Pokémon #1.").await;
    one.send(ClientMessage::Choice { choice: 0 }).await;
    one.expect(INVALID_SELECTION).await;
    one.send(ClientMessage::Choice { choice: 42 }).await;
    one.expect(INVALID_SELECTION).await;
    one.send_raw("not json\n").await;
    one.expect(INVALID_SELECTION).await;
    one.send(ClientMessage::Choice { choice: 3 }).await;
    one.expect("You chose Minnow as your Pokémon #2.").await;
    one.send(ClientMessage::Choice { choice: 1 }).await;
    one.expect("You chose Sprout as your Pokémon #3.").await;
    one.expect(SELECTION_COMPLETE).await;

    two.draft("Gary", [1, 2, 3]).await;
    one.expect(BATTLE_BEGINS).await;

    drop(two);
    drop(one);
    let _ = handle.await.unwrap();
}

#[tokio::test]
async fn test_empty_name_defaults() {
    let (mut one, two, handle) = start(config());

    one.send(ClientMessage::Name {
        name: "  ".to_string(),
    })
    .await;
    one.expect("Invalid name received. Defaulting to 'Player'.").await;

    drop(one);
    drop(two);
    let err = handle.await.unwrap().unwrap_err();
    assert!(matches!(err.side(), Some(_)));
}

#[tokio::test]
async fn test_defeat_pays_rewards() {
    let (mut one, mut two, handle) = start(config());
    draft_both(&mut one, &mut two).await;

    for (fainted, next) in [("Sprout", Some("Pebble")), ("Pebble", Some("Minnow")), ("Minnow", None)] {
        one.act(Action::Attack).await;

        match one.next().await.unwrap() {
            ServerMessage::ActionOutcome { remaining_hp, damage, .. } => {
                assert_eq!(remaining_hp, 0);
                assert!(damage >= 1000);
            }
            other => panic!("expected an outcome, got {:?}", other),
        }
        assert!(matches!(two.next().await, Some(ServerMessage::ActionOutcome { .. })));

        one.expect(&format!("Opponent's {} fainted!", fainted)).await;
        two.expect(&format!("{} fainted!", fainted)).await;

        let Some(next) = next else { break };
        one.expect(&format!("Opponent sent out {}.", next)).await;
        two.expect(&format!("Go, {}!", next)).await;

        one.expect(WAITING).await;
        two.expect(YOUR_TURN).await;

        two.act(Action::Attack).await;
        match two.next().await.unwrap() {
            ServerMessage::ActionOutcome { result, damage, remaining_hp } => {
                assert!(result.ends_with("You dealt 0 damage to Titan. Remaining HP: 100"));
                assert_eq!((damage, remaining_hp), (0, 100));
            }
            other => panic!("expected an outcome, got {:?}", other),
        }
        match one.next().await.unwrap() {
            ServerMessage::ActionOutcome { damage, remaining_hp, .. } => {
                assert_eq!((damage, remaining_hp), (0, 100));
            }
            other => panic!("expected an outcome, got {:?}", other),
        }

        one.expect(YOUR_TURN).await;
        two.expect(WAITING).await;
    }

    one.expect("You win!").await;
    one.expect("Titan gained 30 experience. Total experience: 120 -> 150.").await;
    one.expect("Sprout gained 30 experience. Total experience: 30 -> 60.").await;
    one.expect("Pebble gained 30 experience. Total experience: 30 -> 60.").await;
    one.expect("Each of your Pokémon gained 30 experience.").await;
    one.expect("Game Over. Player 1 wins.").await;
    assert!(one.next().await.is_none());

    two.expect("You lose!").await;
    two.expect("Game Over. Player 1 wins.").await;
    assert!(two.next().await.is_none());

    let report = handle.await.unwrap().unwrap();
    assert_eq!(
        report,
        MatchReport {
            winner: Side::One,
            winner_name: "Ash".to_string(),
            reason: EndReason::Defeat,
            actions: 5,
        }
    );
}

#[tokio::test]
async fn test_surrender_rewards_opponent() {
    let (mut one, mut two, handle) = start(config());
    draft_both(&mut one, &mut two).await;

    one.act(Action::Surrender).await;

    one.expect("You surrendered! Game over.").await;
    one.expect("Game Over. Player 2 wins.").await;

    two.expect("Your opponent surrendered! You win!").await;
    // Loser total is 120 + 30 + 30
    two.expect("Sprout gained 60 experience. Total experience: 30 -> 90.").await;
    two.expect("Pebble gained 60 experience. Total experience: 30 -> 90.").await;
    two.expect("Minnow gained 60 experience. Total experience: 30 -> 90.").await;
    two.expect("Each of your Pokémon gained 60 experience.").await;
    two.expect("Game Over. Player 2 wins.").await;

    let report = handle.await.unwrap().unwrap();
    assert_eq!(report.winner, Side::Two);
    assert_eq!(report.winner_name, "Gary");
    assert_eq!(report.reason, EndReason::Surrender);
    assert_eq!(report.actions, 1);
}

#[tokio::test]
async fn test_switch_keeps_match_going() {
    let (mut one, mut two, handle) = start(config());
    draft_both(&mut one, &mut two).await;

    one.act(Action::Switch).await;
    one.expect("Switched to Sprout.").await;
    one.expect(WAITING).await;
    // The opponent is not told about a switch
    two.expect(YOUR_TURN).await;

    two.act(Action::Surrender).await;
    two.expect("You surrendered! Game over.").await;
    one.expect("Your opponent surrendered! You win!").await;

    let report = handle.await.unwrap().unwrap();
    assert_eq!(report.winner, Side::One);
    assert_eq!(report.actions, 2);
}

#[tokio::test]
async fn test_malformed_action_aborts_match() {
    let (mut one, mut two, handle) = start(config());
    draft_both(&mut one, &mut two).await;

    one.send_raw("{\"action\":\"dance\"}\n").await;

    let notice = two.next_text().await;
    assert!(notice.starts_with("Match aborted:"), "{}", notice);
    assert!(two.next().await.is_none());
    // The offender just sees the channel close
    assert!(one.next().await.is_none());

    let err = handle.await.unwrap().unwrap_err();
    assert!(matches!(err, SessionError::Protocol { side: Side::One, .. }));
}

#[tokio::test]
async fn test_wrong_message_kind_in_battle_aborts() {
    let (mut one, mut two, handle) = start(config());
    draft_both(&mut one, &mut two).await;

    one.send(ClientMessage::Choice { choice: 1 }).await;

    assert!(two.next_text().await.starts_with("Match aborted:"));
    let err = handle.await.unwrap().unwrap_err();
    assert!(matches!(
        err,
        SessionError::UnexpectedMessage {
            side: Side::One,
            got: "choice",
            ..
        }
    ));
}

#[tokio::test]
async fn test_disconnect_during_draft_notifies_peer() {
    let (mut one, two, handle) = start(config());
    drop(two);

    let notice = one.next_text().await;
    assert!(notice.starts_with("Match aborted: Player 2"), "{}", notice);

    let err = handle.await.unwrap().unwrap_err();
    assert_eq!(err.side(), Some(Side::Two));
}

#[tokio::test]
async fn test_turn_owner_disconnect_mid_battle_aborts() {
    let (mut one, mut two, handle) = start(config());
    draft_both(&mut one, &mut two).await;

    drop(one);

    let mut rest = Vec::new();
    while let Some(message) = two.next().await {
        rest.push(message.text().unwrap_or_default().to_string());
    }
    assert_eq!(rest.len(), 1, "{:?}", rest);
    assert!(rest[0].starts_with("Match aborted: Player 1"), "{}", rest[0]);
    assert!(rest.iter().all(|text| !text.starts_with("Game Over")));

    let err = handle.await.unwrap().unwrap_err();
    assert!(matches!(err, SessionError::Disconnected(Side::One)));
}

#[tokio::test]
async fn test_silent_drafter_aborts_match() {
    let config = ServerConfig {
        turn_timeout: Some(Duration::from_millis(300)),
        ..config()
    };
    let (mut one, mut two, handle) = start(config);

    // Player 1 never names themselves; player 2 drafts and waits at the barrier
    two.draft("Gary", [1, 2, 3]).await;

    let notice = two.next_text().await;
    assert!(notice.starts_with("Match aborted: Player 1"), "{}", notice);
    assert!(two.next().await.is_none());
    assert!(one.next().await.is_none());

    let err = handle.await.unwrap().unwrap_err();
    assert!(matches!(err, SessionError::TimedOut(Side::One)));
}

#[tokio::test]
async fn test_silent_turn_owner_forfeits() {
    // Also bounds each draft line, so it must leave room for the scripted draft
    let config = ServerConfig {
        turn_timeout: Some(Duration::from_millis(300)),
        ..config()
    };
    let (mut one, mut two, handle) = start(config);
    draft_both(&mut one, &mut two).await;

    one.expect("You ran out of time and forfeit the match.").await;
    two.expect("Your opponent ran out of time! You win!").await;

    let report = handle.await.unwrap().unwrap();
    assert_eq!(report.winner, Side::Two);
    assert_eq!(report.reason, EndReason::Timeout);
}
