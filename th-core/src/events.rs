//! Rule events and advisory reasons.
//!
//! Progression functions return an ordered event list instead of printing;
//! callers (CLI, logs, tests) render or persist them independently.

use serde::Serialize;
use thiserror::Error;

use crate::player::Zone;

/// Why a player may not stop rolling and bank the proposed total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MustRoll {
    #[error("on the barrel and still short of 1000")]
    OnBarrel,
    #[error("inside the 600-700 pit and still short of 700")]
    InPit600,
    #[error("inside the 200-300 pit and still short of 300")]
    InPit200,
    #[error("not opened and still short of 50")]
    NotOpened,
}

/// One observable rule outcome, in the order the rules fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum RuleEvent {
    ZoneEntered { zone: Zone },
    ZoneExited { zone: Zone },
    /// Opening minimum banked; irreversible.
    Opened,
    /// A consecutive failure was recorded without a score change.
    Strike { bolts: u8 },
    /// Third strike: the score deduction that was applied.
    PenaltyApplied { deducted: u16 },
    /// Third strike on the barrel with too many barrel entries: full reset.
    BarrelFailed,
    /// Score landed on exactly 555 and was reset to zero.
    DumpTriggered,
}
