//! Pokebat match server
//!
//! Accepts players two at a time over TCP and runs each pair through the draft and the
//! battle. Every session owns its battle state and both connections; sessions share
//! nothing but the read-only catalog.
//!
//! ```text
//! lobby ── accept_pair ──► Session::run
//!                            ├─ draft (both players at once, then barrier)
//!                            └─ battle loop (turn owner only)
//! ```

pub mod barrier;
pub mod config;
pub mod connection;
pub mod draft;
pub mod error;
pub mod lobby;
pub mod notice;
pub mod session;

#[cfg(test)]
mod tests;

pub use config::{ServerArgs, ServerConfig};
pub use connection::Connection;
pub use error::SessionError;
pub use lobby::{accept_pair, serve};
pub use session::{MatchReport, Session};
