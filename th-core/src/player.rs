//! Player state: cumulative score, failure streak, and score-zone membership.

use serde::Serialize;
use thiserror::Error;

use crate::{BARREL_SCORE, MAX_BOLTS, PIT200, PIT600, WIN_SCORE};

/// Score zone a player currently sits in.
///
/// The zone is fully derived from `(score, opened)` once a mutation has been
/// normalized; it is stored explicitly so that entry and exit are observable
/// as distinct events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Zone {
    /// Has not yet banked the opening minimum.
    Unopened,
    Normal,
    /// 200..300 band: must be crossed to 300+ in one banked move.
    Pit200,
    /// 600..700 band: must be crossed to 700+ in one banked move.
    Pit600,
    /// Pinned at 880 until a winning bank or a penalty eviction.
    Barrel,
}

impl Zone {
    /// Derive the zone for a normalized score below [`WIN_SCORE`].
    pub fn for_state(score: u16, opened: bool) -> Zone {
        if score >= BARREL_SCORE {
            Zone::Barrel
        } else if PIT600.contains(&score) {
            Zone::Pit600
        } else if PIT200.contains(&score) {
            Zone::Pit200
        } else if !opened {
            Zone::Unopened
        } else {
            Zone::Normal
        }
    }
}

/// Broken player-state invariant. Reaching this is an engine bug, not a
/// legal game outcome.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid player state: {msg}")]
pub struct InvalidState {
    pub msg: &'static str,
}

/// One game participant. Identity is the name.
///
/// Fields are public in the usual data-carrier style, but mutation must go
/// through the progression functions: each player is owned by the driver of
/// its turn, and the rules assume no other writer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub name: String,
    /// Cumulative banked score, 0..=1000.
    pub score: u16,
    /// Consecutive failures, 0..=2. The third converts into a penalty.
    pub bolts: u8,
    /// Times the barrel has been entered.
    pub barrels: u8,
    /// Moves taken, informational.
    pub moves: u32,
    pub zone: Zone,
    /// Set once the opening minimum is banked; never cleared.
    pub opened: bool,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Player {
        Player {
            name: name.into(),
            score: 0,
            bolts: 0,
            barrels: 0,
            moves: 0,
            zone: Zone::Unopened,
            opened: false,
        }
    }

    /// True once the score has reached the winning threshold.
    pub fn has_won(&self) -> bool {
        self.score >= WIN_SCORE
    }

    /// Check the state invariants that must hold between progression calls.
    ///
    /// Zone consistency is not checked at or past [`WIN_SCORE`]: zone
    /// processing halts on a win and the last zone is deliberately kept.
    pub fn validate(&self) -> Result<(), InvalidState> {
        if self.score > WIN_SCORE {
            return Err(InvalidState {
                msg: "score above 1000",
            });
        }
        if self.bolts >= MAX_BOLTS {
            return Err(InvalidState {
                msg: "bolts out of 0..=2",
            });
        }
        if self.score < WIN_SCORE && self.zone != Zone::for_state(self.score, self.opened) {
            return Err(InvalidState {
                msg: "zone does not match score",
            });
        }
        if self.zone == Zone::Barrel && self.score < WIN_SCORE && self.score != BARREL_SCORE {
            return Err(InvalidState {
                msg: "on barrel but not pinned at 880",
            });
        }
        Ok(())
    }
}
