//! Battle session engine for two-player pokebat matches.
//!
//! This crate holds the match data model and every rule that mutates it. It does no I/O
//! beyond loading a catalog file, and holds no transport handles: the server feeds it
//! decoded actions and renders the [`BattleEvent`]s it returns.
//!
//! # Overview
//!
//! ```text
//! pokebat-protocol (wire format)
//!        │
//!        ▼
//! pokebat-battle (data model + rules) ← THIS CRATE
//!        │
//!        ├─> pokebat-server (sessions over TCP)
//!        └─> pokebat-client (players)
//! ```
//!
//! # Main Types
//!
//! - [`Catalog`] - Ordered, read-only list of [`CombatantTemplate`]s
//! - [`RosterBuilder`] - Validates three catalog picks into a [`Roster`]
//! - [`first_turn`] - Speed-based first turn owner
//! - [`Battle`] - The per-turn state machine
//! - [`distribute`] - Post-match experience transfer
//!
//! # Example Usage
//!
//! ```ignore
//! use pokebat_battle::{Action, Battle, Catalog, RosterBuilder};
//!
//! let catalog = Catalog::builtin();
//! let mut rng = rand::thread_rng();
//!
//! let mut one = RosterBuilder::new(&catalog);
//! for pick in [0, 1, 2] {
//!     one.select(pick)?;
//! }
//! let mut two = RosterBuilder::new(&catalog);
//! for pick in [3, 4, 5] {
//!     two.select(pick)?;
//! }
//!
//! let mut battle = Battle::start(one.finish()?, two.finish()?, &mut rng);
//! while !battle.is_over() {
//!     for event in battle.resolve(Action::Attack, &mut rng)? {
//!         println!("{:?}", event);
//!     }
//! }
//! ```

pub mod catalog;
pub mod damage;
pub mod draft;
pub mod engine;
pub mod reward;
pub mod turn;
pub mod types;

pub use catalog::{Catalog, CatalogError};
pub use damage::{AttackKind, DAMAGE_ROLL_RANGE};
pub use draft::{RosterBuilder, Selection, SelectionError};
pub use engine::{Battle, BattleError, BattleEvent, EndReason, MatchResult, Phase};
pub use reward::{ExperienceGain, RewardReport, distribute};
pub use turn::first_turn;
pub use types::{BaseStats, Combatant, CombatantTemplate, ROSTER_SIZE, Roster, Side};

// Re-export the action tag decoded at the wire boundary
pub use pokebat_protocol::Action;
