//! Session - one match between two connected players
//!
//! Owns the battle and both connections for the lifetime of a match. The draft runs
//! for both players at once; the battle loop then reads only from the turn owner.

use std::sync::Arc;
use std::time::Duration;

use pokebat_battle::{Action, Battle, Catalog, EndReason, Side};
use pokebat_protocol::ClientMessage;
use pokebat_protocol::server::status::aborted;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tokio::io::{AsyncRead, AsyncWrite};
use tokio::time::timeout;
use tracing::{debug, error, info, warn};

use crate::barrier::DraftBarrier;
use crate::config::ServerConfig;
use crate::connection::Connection;
use crate::draft::prepare_player;
use crate::error::SessionError;
use crate::notice::{Notice, lineup, render, turn_prompt};

/// Summary of a finished match
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchReport {
    pub winner: Side,
    pub winner_name: String,
    pub reason: EndReason,
    /// Actions resolved, including the final one
    pub actions: u32,
}

pub struct Session {
    id: u64,
    catalog: Arc<Catalog>,
    turn_timeout: Option<Duration>,
    rng: StdRng,
}

impl Session {
    /// Create the session for match number `id`.
    ///
    /// With a configured seed every match gets its own derived, reproducible stream.
    pub fn new(id: u64, catalog: Arc<Catalog>, config: &ServerConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(id)),
            None => StdRng::from_entropy(),
        };

        Self {
            id,
            catalog,
            turn_timeout: config.turn_timeout,
            rng,
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    /// Run the match to completion and close both connections.
    ///
    /// On a protocol or transport failure the match is aborted: no winner, no rewards.
    /// The player who did not cause the failure gets a best-effort notice.
    pub async fn run<S>(
        mut self,
        mut connections: [Connection<S>; 2],
    ) -> Result<MatchReport, SessionError>
    where
        S: AsyncRead + AsyncWrite + Unpin,
    {
        let result = self.play(&mut connections).await;

        match &result {
            Ok(report) => info!(
                session = self.id,
                winner = %report.winner,
                name = %report.winner_name,
                reason = ?report.reason,
                actions = report.actions,
                "Match finished"
            ),
            Err(e) => {
                error!(session = self.id, error = %e, "Match aborted");
                let notice = aborted(e);
                for conn in connections.iter_mut() {
                    if e.side() == Some(conn.side()) {
                        continue;
                    }
                    if let Err(send_err) = conn.send_status(notice.clone()).await {
                        debug!(session = self.id, error = %send_err, "Abort notice not delivered");
                    }
                }
            }
        }

        let [one, two] = connections;
        tokio::join!(one.close(), two.close());

        result
    }

    async fn play<S>(
        &mut self,
        connections: &mut [Connection<S>; 2],
    ) -> Result<MatchReport, SessionError>
    where
        S: AsyncRead + AsyncWrite + Unpin,
    {
        let barrier = DraftBarrier::new();
        let catalog = Arc::clone(&self.catalog);

        let (first, second) = {
            let [one, two] = &mut *connections;
            tokio::try_join!(
                prepare_player(one, &catalog, &barrier, self.turn_timeout),
                prepare_player(two, &catalog, &barrier, self.turn_timeout)
            )?
        };

        let names = [first.name, second.name];
        let mut battle = Battle::start(first.roster, second.roster, &mut self.rng);
        info!(
            session = self.id,
            one = %names[0],
            two = %names[1],
            first = %battle.turn(),
            "Battle started"
        );

        deliver(connections, lineup(&battle)).await?;

        loop {
            let owner = battle.turn();
            deliver(connections, turn_prompt(owner)).await?;

            let events = match self.next_action(&mut connections[owner.index()]).await? {
                Some(action) => {
                    debug!(session = self.id, player = owner.number(), %action, "Resolving action");
                    battle.resolve(action, &mut self.rng)?
                }
                None => {
                    warn!(session = self.id, player = owner.number(), "Turn timed out");
                    battle.time_out()?
                }
            };

            let notices = render(&events);

            if let Some(result) = battle.result() {
                // The match is decided; a peer that already left does not change that
                deliver_best_effort(connections, notices).await;
                return Ok(MatchReport {
                    winner: result.winner,
                    winner_name: names[result.winner.index()].clone(),
                    reason: result.reason,
                    actions: battle.actions_resolved(),
                });
            }

            deliver(connections, notices).await?;
        }
    }

    /// Wait for the turn owner's action. `None` means the turn deadline passed.
    async fn next_action<S>(
        &self,
        conn: &mut Connection<S>,
    ) -> Result<Option<Action>, SessionError>
    where
        S: AsyncRead + AsyncWrite + Unpin,
    {
        let message = match self.turn_timeout {
            Some(limit) => match timeout(limit, conn.recv()).await {
                Ok(message) => message?,
                Err(_) => return Ok(None),
            },
            None => conn.recv().await?,
        };

        match message {
            ClientMessage::Action { action } => Ok(Some(action)),
            other => Err(SessionError::UnexpectedMessage {
                side: conn.side(),
                expected: "action",
                got: other.kind(),
            }),
        }
    }
}

async fn deliver<S>(
    connections: &mut [Connection<S>; 2],
    notices: Vec<Notice>,
) -> Result<(), SessionError>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    for (side, message) in notices {
        connections[side.index()].send(&message).await?;
    }
    Ok(())
}

async fn deliver_best_effort<S>(connections: &mut [Connection<S>; 2], notices: Vec<Notice>)
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    let mut failed = [false; 2];
    for (side, message) in notices {
        if failed[side.index()] {
            continue;
        }
        if let Err(e) = connections[side.index()].send(&message).await {
            debug!(player = side.number(), error = %e, "Final notice not delivered");
            failed[side.index()] = true;
        }
    }
}
