// Allow unwrap and unreadable literals in tests (test code is not production)
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::unreadable_literal))]
//! Stead: a deterministic incremental village simulation engine.
//!
//! The simulation core of a single-player clicker: resources accumulate
//! through clicks and automated production, upgrades are bought from an
//! escalating-cost shop, battles gamble population for kills, and ascension
//! trades the whole run for a permanent multiplier.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │        Driver (CLI / UI)            │
//! ├─────────────────────────────────────┤
//! │   GameState: tick + commands        │
//! ├─────────────────────────────────────┤
//! │   Save codecs + file provider       │
//! └─────────────────────────────────────┘
//! ```
//!
//! The core is a deterministic fixed-tick state machine: the driver calls
//! [`GameState::tick`] once per frame (every 60th call runs one economic
//! step), forwards player intent as [`Command`]s, and persists the state
//! through [`save`] at coarse intervals. Randomness enters only through the
//! [`game::ChanceSource`] draw at battle resolution.

pub mod error;
pub mod game;
pub mod save;

pub use error::{SaveError, SaveResult};

// Re-export key types at crate root for convenience
pub use game::{
    AscensionSource, BattleOutcome, ChanceSource, ClickKind, Command, GameState, Resource, Sector,
    ShopItem, SplitMixChance,
};
pub use save::Settings;
