//! Progression engine: banked-total application, penalties, and zone rules.
//!
//! This module is the single place that mutates [`Player`] via rules. All
//! rule outcomes (bust, rejected bank, barrel pin, win) are reported as
//! values; nothing here is an error within legal inputs.

use crate::events::{MustRoll, RuleEvent};
use crate::player::{Player, Zone};
use crate::{
    BARREL_SCORE, DUMP_SCORE, MAX_BARRELS, MAX_BOLTS, OPENING_SCORE, PENALTY_STEP, PIT200, PIT600,
    WIN_SCORE,
};

/// Outcome of [`update_score`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banked {
    /// The player reached [`WIN_SCORE`] with this bank.
    pub won: bool,
    pub events: Vec<RuleEvent>,
}

/// May the player stop rolling and bank `proposed` on top of the current
/// score? Checked in priority order: barrel, upper pit, lower pit, opening.
pub fn can_stop_to_roll(player: &Player, proposed: u32) -> Result<(), MustRoll> {
    let sum = u32::from(player.score) + proposed;
    if player.zone == Zone::Barrel && sum < u32::from(WIN_SCORE) {
        return Err(MustRoll::OnBarrel);
    }
    if player.zone == Zone::Pit600 && sum < u32::from(PIT600.end) {
        return Err(MustRoll::InPit600);
    }
    if player.zone == Zone::Pit200 && sum < u32::from(PIT200.end) {
        return Err(MustRoll::InPit200);
    }
    if !player.opened && sum < u32::from(OPENING_SCORE) {
        return Err(MustRoll::NotOpened);
    }
    Ok(())
}

/// Apply a fully-rolled, banked move total.
///
/// A bank that would leave the player short of a threshold they are trapped
/// under is rejected and treated exactly like a rolled bust: the player is
/// penalized and no score is applied. A first landing in the 880..1000 band
/// pins the score at 880 instead of the computed sum.
pub fn update_score(player: &mut Player, banked: u32) -> Banked {
    debug_assert!(player.validate().is_ok());

    if can_stop_to_roll(player, banked).is_err() {
        let events = penalty(player);
        return Banked { won: false, events };
    }

    player.bolts = 0;

    let sum = u32::from(player.score) + banked;
    if player.zone != Zone::Barrel
        && (u32::from(BARREL_SCORE)..u32::from(WIN_SCORE)).contains(&sum)
    {
        player.score = BARREL_SCORE;
        player.barrels += 1;
        player.zone = Zone::Barrel;
        return Banked {
            won: false,
            events: vec![RuleEvent::ZoneEntered { zone: Zone::Barrel }],
        };
    }

    player.score = sum.min(u32::from(WIN_SCORE)) as u16;
    let mut events = Vec::new();
    check_exceptions(player, &mut events);

    debug_assert!(player.validate().is_ok());
    Banked {
        won: player.has_won(),
        events,
    }
}

/// Record a failure: a bust, or a rejected bank attempt.
///
/// Two failures are strikes; the third converts into a 100-point deduction,
/// or on the barrel into either eviction (-100) or, after too many barrel
/// entries, a full score reset.
pub fn penalty(player: &mut Player) -> Vec<RuleEvent> {
    let mut events = Vec::new();

    if player.bolts >= MAX_BOLTS - 1 {
        player.bolts = 0;
        if player.zone == Zone::Barrel {
            events.push(RuleEvent::ZoneExited { zone: Zone::Barrel });
            if player.barrels >= MAX_BARRELS {
                player.barrels = 0;
                player.score = 0;
                events.push(RuleEvent::BarrelFailed);
            } else {
                player.score = player.score.saturating_sub(PENALTY_STEP);
                events.push(RuleEvent::PenaltyApplied {
                    deducted: PENALTY_STEP,
                });
            }
            player.zone = Zone::for_state(player.score, player.opened);
        } else {
            player.score = player.score.saturating_sub(PENALTY_STEP);
            events.push(RuleEvent::PenaltyApplied {
                deducted: PENALTY_STEP,
            });
        }
    } else {
        player.bolts += 1;
        events.push(RuleEvent::Strike {
            bolts: player.bolts,
        });
    }

    check_exceptions(player, &mut events);

    debug_assert!(player.validate().is_ok());
    events
}

/// Normalize score and zone after a score mutation.
///
/// Fixed rule order: nothing past a win; barrel clamp; upper pit exit then
/// entry; lower pit exit then entry; opening; dump at exactly 555. The dump
/// is unreachable while barrel-pinned because the clamp runs first.
pub fn check_exceptions(player: &mut Player, events: &mut Vec<RuleEvent>) {
    if player.score >= WIN_SCORE {
        return;
    }

    let was = player.zone;

    if player.score >= BARREL_SCORE {
        player.score = BARREL_SCORE;
        if was != Zone::Barrel {
            player.barrels += 1;
            events.push(RuleEvent::ZoneEntered { zone: Zone::Barrel });
        }
    }

    let mut now = Zone::for_state(player.score, player.opened);

    if was == Zone::Pit600 && now != Zone::Pit600 {
        events.push(RuleEvent::ZoneExited { zone: Zone::Pit600 });
    }
    if now == Zone::Pit600 && was != Zone::Pit600 {
        events.push(RuleEvent::ZoneEntered { zone: Zone::Pit600 });
    }
    if was == Zone::Pit200 && now != Zone::Pit200 {
        events.push(RuleEvent::ZoneExited { zone: Zone::Pit200 });
    }
    if now == Zone::Pit200 && was != Zone::Pit200 {
        events.push(RuleEvent::ZoneEntered { zone: Zone::Pit200 });
    }

    if !player.opened && player.score >= OPENING_SCORE {
        player.opened = true;
        events.push(RuleEvent::Opened);
        now = Zone::for_state(player.score, true);
    }

    player.zone = now;

    if player.score == DUMP_SCORE {
        player.score = 0;
        events.push(RuleEvent::DumpTriggered);
        player.zone = Zone::for_state(0, player.opened);
    }
}
