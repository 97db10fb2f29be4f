//! One full move: roll, score, and either bust, keep rolling, or bank.

use th_core::{
    can_stop_to_roll, penalty, score_roll, update_score, ChanceMode, EventKey, Player, RuleEvent,
    POOL_SIZE,
};

use crate::strategy::{Strategy, TurnView};

/// What one move did to the player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Move total offered for banking; zero means the move busted. The
    /// rules may still reject the bank, in which case the events show the
    /// resulting strike or deduction instead of a score change.
    pub banked: u32,
    pub won: bool,
    /// Scoring passes rolled, hot-dice refills included.
    pub passes: u32,
    pub events: Vec<RuleEvent>,
}

impl MoveOutcome {
    pub fn is_bust(&self) -> bool {
        self.banked == 0
    }
}

/// Drive `player` through one move.
///
/// The pool starts at [`POOL_SIZE`] and shrinks as faces score. A pass that
/// scores nothing busts the move and costs a penalty. A pass that consumes
/// the pool refills it and rolling continues. Between passes the player may
/// bank, unless the rules force another roll.
pub fn play_move(
    player: &mut Player,
    strategy: &mut dyn Strategy,
    chance: &mut ChanceMode,
    player_idx: u8,
) -> MoveOutcome {
    player.moves += 1;
    let move_idx = player.moves;

    let mut pool = POOL_SIZE;
    let mut total: u32 = 0;
    let mut pass_idx: u32 = 0;

    loop {
        let key = EventKey {
            episode_seed: 0,
            player: player_idx,
            move_idx,
            pass_idx,
        };
        let faces = chance.roll(key, pool as usize);
        let pass = score_roll(&faces).expect("pool size and faces are always in range");
        pass_idx += 1;

        if pass.is_bust() {
            let events = penalty(player);
            return MoveOutcome {
                banked: 0,
                won: false,
                passes: pass_idx,
                events,
            };
        }
        total += u32::from(pass.score);

        let view = TurnView {
            player,
            faces: &faces,
            pass_score: pass.score,
            move_total: total,
            dice_left: pass.remaining,
        };

        if pass.is_hot_dice() {
            strategy.on_hot_dice(&view);
            pool = POOL_SIZE;
            continue;
        }
        pool = pass.remaining;

        if let Err(reason) = can_stop_to_roll(player, total) {
            strategy.on_forced_roll(&view, reason);
            continue;
        }
        if strategy.keep_rolling(&view) {
            continue;
        }

        let banked = update_score(player, total);
        return MoveOutcome {
            banked: total,
            won: banked.won,
            passes: pass_idx,
            events: banked.events,
        };
    }
}
