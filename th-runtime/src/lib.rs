//! th-runtime: the turn loop that drives players through moves.
//!
//! The rules crate decides what a roll is worth and what a bank does; this
//! crate owns the in-between: rolling a shrinking pool, forced re-rolls,
//! hot dice, and the bank-or-continue decision delegated to a [`Strategy`].

pub mod move_driver;
pub mod runner;
pub mod strategy;

pub use move_driver::{play_move, MoveOutcome};
pub use runner::{GameReport, GameRunner, RunnerError, RunnerStats};
pub use strategy::{GreedyStrategy, Strategy, TurnView};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod runtime_tests;
