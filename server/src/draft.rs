//! Name exchange and roster drafting for one player

use std::time::Duration;

use pokebat_battle::{Catalog, Roster, RosterBuilder};
use pokebat_protocol::server::status::{
    BATTLE_BEGINS, INVALID_SELECTION, NAME_DEFAULTED_PREFIX, NAME_UNREADABLE,
    SELECTION_COMPLETE, WELCOME_PREFIX,
};
use pokebat_protocol::{ClientMessage, parse_client_message};
use tokio::io::{AsyncRead, AsyncWrite};
use tracing::{info, warn};

use crate::barrier::DraftBarrier;
use crate::connection::Connection;
use crate::error::SessionError;

pub const DEFAULT_NAME: &str = "Player";
pub const UNKNOWN_NAME: &str = "Unknown";

/// A player who has named themselves and drafted a full roster
#[derive(Debug)]
pub struct DraftedPlayer {
    pub name: String,
    pub roster: Roster,
}

/// Run one player's pre-battle flow: name, three picks, then the barrier.
///
/// Every line must arrive within `limit` of the previous one or the match is aborted,
/// which also releases an opponent already waiting at the barrier. Returns once both
/// players are drafted and this player has been told the battle begins.
pub async fn prepare_player<S>(
    conn: &mut Connection<S>,
    catalog: &Catalog,
    barrier: &DraftBarrier,
    limit: Option<Duration>,
) -> Result<DraftedPlayer, SessionError>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    let name = exchange_name(conn, catalog, limit).await?;
    let roster = draft_roster(conn, catalog, limit).await?;

    if barrier.arrive(conn.side()) {
        info!("Both rosters complete");
    }
    barrier.wait().await;
    conn.send_status(BATTLE_BEGINS).await?;

    Ok(DraftedPlayer { name, roster })
}

/// Read the player's name. A bad name falls back to a default instead of failing.
pub async fn exchange_name<S>(
    conn: &mut Connection<S>,
    catalog: &Catalog,
    limit: Option<Duration>,
) -> Result<String, SessionError>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    let line = conn.recv_line_within(limit).await?;

    let name = match parse_client_message(&line) {
        Ok(ClientMessage::Name { name }) if !name.trim().is_empty() => {
            let name = name.trim().to_string();
            conn.send_status(welcome(&name, catalog)).await?;
            name
        }
        Ok(ClientMessage::Name { .. }) => {
            conn.send_status(format!(
                "{} Defaulting to '{}'.",
                NAME_DEFAULTED_PREFIX, DEFAULT_NAME
            ))
            .await?;
            DEFAULT_NAME.to_string()
        }
        _ => {
            warn!(player = conn.side().number(), %line, "Could not decode player name");
            conn.send_status(NAME_UNREADABLE).await?;
            UNKNOWN_NAME.to_string()
        }
    };

    info!(player = conn.side().number(), %name, "Player named");
    Ok(name)
}

/// Collect three valid picks. Invalid picks are rejected and the same slot is retried.
pub async fn draft_roster<S>(
    conn: &mut Connection<S>,
    catalog: &Catalog,
    limit: Option<Duration>,
) -> Result<Roster, SessionError>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    let player = conn.side().number();
    let mut builder = RosterBuilder::new(catalog);

    while !builder.is_complete() {
        let attempt = match conn.recv_line_within(limit).await {
            Ok(line) => match parse_client_message(&line) {
                Ok(ClientMessage::Choice { choice }) => {
                    builder.select(choice).map_err(|e| e.to_string())
                }
                Ok(other) => Err(format!("expected a choice, got a {} message", other.kind())),
                Err(e) => Err(e.to_string()),
            },
            // Over-long lines are rejected like any other bad pick
            Err(SessionError::Protocol { source, .. }) => Err(source.to_string()),
            Err(e) => return Err(e),
        };

        match attempt {
            Ok(selection) => {
                info!(
                    player,
                    slot = selection.slot,
                    index = selection.index,
                    name = %selection.name,
                    "Selection accepted"
                );
                conn.send_status(format!(
                    "You chose {} as your Pokémon #{}.",
                    selection.name, selection.slot
                ))
                .await?;
            }
            Err(reason) => {
                warn!(player, slot = builder.next_slot(), %reason, "Selection rejected");
                conn.send_status(INVALID_SELECTION).await?;
            }
        }
    }

    conn.send_status(SELECTION_COMPLETE).await?;
    Ok(builder.finish()?)
}

fn welcome(name: &str, catalog: &Catalog) -> String {
    let choices: Vec<String> = catalog
        .iter()
        .enumerate()
        .map(|(i, template)| format!("{}: {}", i, template.name))
        .collect();

    format!(
        "{}{}! Please select your Pokémon. Available: {}",
        WELCOME_PREFIX,
        name,
        choices.join(", ")
    )
}
