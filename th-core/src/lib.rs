//! th-core: Game rules, scoring, player state, and configuration for the
//! dice game "thousand".
//!
//! The crate is split along the two halves of the ruleset:
//! - [`scoring`] turns a rolled hand into a pass score and a remaining pool.
//! - [`progression`] applies banked totals, penalties, and zone rules to a
//!   [`Player`].
//!
//! Chance (dice generation) and configuration live here too so that every
//! consumer shares one definition of the rules.

pub mod chance;
pub mod config;
pub mod events;
pub mod player;
pub mod progression;
pub mod scoring;

pub use chance::{ChanceMode, EventKey};
pub use config::{Config, ConfigError, PlayerConfig, SimConfig, StrategyKind};
pub use events::{MustRoll, RuleEvent};
pub use player::{Player, Zone};
pub use progression::{can_stop_to_roll, check_exceptions, penalty, update_score, Banked};
pub use scoring::{score_roll, PassScore, ScoreError};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Score a player must reach to win the game.
pub const WIN_SCORE: u16 = 1000;

/// Entering the 880..1000 band pins the score here until the player wins
/// or is penalized off.
pub const BARREL_SCORE: u16 = 880;

/// Minimum first banked total; below it a player is not "opened".
pub const OPENING_SCORE: u16 = 50;

/// Lower pit: must be crossed to 300+ in a single banked move.
pub const PIT200: std::ops::Range<u16> = 200..300;

/// Upper pit: must be crossed to 700+ in a single banked move.
pub const PIT600: std::ops::Range<u16> = 600..700;

/// Landing on exactly this score resets it to zero.
pub const DUMP_SCORE: u16 = 555;

/// Deduction applied on a third consecutive failure.
pub const PENALTY_STEP: u16 = 100;

/// Consecutive failures ("bolts") that convert into a penalty.
pub const MAX_BOLTS: u8 = 3;

/// Barrel entries after which a third-strike failure zeroes the score.
pub const MAX_BARRELS: u8 = 3;

/// Dice in a fresh pool at the start of a move (and after hot dice).
pub const POOL_SIZE: u8 = 5;

#[cfg(test)]
mod chance_tests;
