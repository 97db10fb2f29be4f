//! Bank-or-continue decisions.

use th_core::{Player, Zone, DUMP_SCORE, OPENING_SCORE, PIT200, PIT600, WIN_SCORE};

/// What a strategy sees after a scoring pass.
#[derive(Debug)]
pub struct TurnView<'a> {
    pub player: &'a Player,
    /// Faces of the pass that was just scored.
    pub faces: &'a [u8],
    /// Score of that pass alone.
    pub pass_score: u16,
    /// Accumulated, not yet banked, total for the whole move.
    pub move_total: u32,
    /// Dice live for the next roll.
    pub dice_left: u8,
}

/// Per-player decision maker. Only consulted when the rules allow a choice.
pub trait Strategy {
    /// Keep rolling (`true`) or bank the accumulated total (`false`).
    fn keep_rolling(&mut self, view: &TurnView) -> bool;

    /// Every die scored; the pool is about to refill and rolling continues.
    fn on_hot_dice(&mut self, _view: &TurnView) {}

    /// The rules forced another roll; banking here was not allowed.
    fn on_forced_roll(&mut self, _view: &TurnView, _reason: th_core::MustRoll) {}
}

/// Threshold-driven automatic play.
///
/// Banks as soon as the move would clear whatever the player is trapped
/// under (opening, a pit, the win threshold), refuses to bank onto the
/// dump score, and otherwise stops once the pool is down to two dice.
#[derive(Debug, Default)]
pub struct GreedyStrategy;

impl Strategy for GreedyStrategy {
    fn keep_rolling(&mut self, view: &TurnView) -> bool {
        let would_be = u32::from(view.player.score) + view.move_total;
        if would_be == u32::from(DUMP_SCORE) {
            return true;
        }
        if would_be >= u32::from(WIN_SCORE) {
            return false;
        }
        if !view.player.opened && would_be >= u32::from(OPENING_SCORE) {
            return false;
        }
        if view.player.zone == Zone::Pit200 && would_be >= u32::from(PIT200.end) {
            return false;
        }
        if view.player.zone == Zone::Pit600 && would_be >= u32::from(PIT600.end) {
            return false;
        }
        view.dice_left >= 3
    }
}
