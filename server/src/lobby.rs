//! Accept loop: pairs connections and hands each pair to its own session

use std::future::Future;
use std::io;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use futures_util::FutureExt;
use pokebat_battle::Side;
use pokebat_protocol::ServerMessage;
use tokio::net::{TcpListener, TcpStream};
use tracing::{error, info, warn};

use crate::config::ServerConfig;
use crate::connection::Connection;
use crate::session::Session;

/// Pause after a failed accept, e.g. while out of file descriptors
const ACCEPT_BACKOFF: Duration = Duration::from_millis(100);

/// Accept two peers and tell each its player number, in connection order.
///
/// If player 1 has already hung up when an opponent arrives, it is dropped and the
/// newcomer becomes player 1. A peer that leaves after the pair is formed is the
/// session's problem.
pub async fn accept_pair(listener: &TcpListener) -> [Connection<TcpStream>; 2] {
    let mut first: Option<Connection<TcpStream>> = None;

    loop {
        let (stream, peer) = accept_retrying(|| listener.accept()).await;
        if let Err(e) = stream.set_nodelay(true) {
            warn!(%peer, error = %e, "Could not disable Nagle");
        }

        if first.as_ref().is_some_and(|one| !still_connected(one.get_ref())) {
            warn!("Player 1 left while waiting for an opponent");
            first = None;
        }

        let side = if first.is_none() { Side::One } else { Side::Two };
        let mut conn = Connection::new(side, stream);

        if let Err(e) = conn.send(&ServerMessage::PlayerNumber(side.number())).await {
            warn!(%peer, player = side.number(), error = %e, "Peer left before pairing");
            continue;
        }
        info!(%peer, player = side.number(), "Player connected");

        match first.take() {
            None => first = Some(conn),
            Some(one) => return [one, conn],
        }
    }
}

/// Retry `accept` until it yields a peer. Failures are logged, never fatal.
async fn accept_retrying<T, F, Fut>(mut accept: F) -> T
where
    F: FnMut() -> Fut,
    Fut: Future<Output = io::Result<T>>,
{
    loop {
        match accept().await {
            Ok(accepted) => return accepted,
            Err(e) => {
                error!(error = %e, "Accept failed");
                tokio::time::sleep(ACCEPT_BACKOFF).await;
            }
        }
    }
}

/// False once the peer has closed its end or the socket is in error
fn still_connected(stream: &TcpStream) -> bool {
    let mut buf = [0u8; 1];
    !matches!(
        stream.peek(&mut buf).now_or_never(),
        Some(Ok(0)) | Some(Err(_))
    )
}

/// Listen and host matches until the process is stopped, or one match with
/// `single_match`.
pub async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    let catalog = Arc::new(
        config
            .load_catalog()
            .with_context(|| format!("loading catalog {:?}", config.catalog_path))?,
    );
    let listener = TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("binding {}", config.bind_addr))?;

    info!(
        addr = %config.bind_addr,
        catalog = catalog.len(),
        timeout = ?config.turn_timeout,
        "Server listening"
    );

    let mut next_id = 0u64;
    loop {
        let connections = accept_pair(&listener).await;
        let session = Session::new(next_id, Arc::clone(&catalog), &config);
        next_id += 1;
        info!(session = session.id(), "Match starting");

        if config.single_match {
            // The outcome is already logged by the session
            let _ = session.run(connections).await;
            return Ok(());
        }

        tokio::spawn(async move {
            if let Err(e) = session.run(connections).await {
                error!(error = %e, "Session ended without a result");
            }
        });
    }
}
