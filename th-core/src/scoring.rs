//! Dice scoring: map one rolled hand to a pass score and a remaining pool.
//!
//! A face scores if it is an ace or a five (any count), or if it occurs
//! three or more times. Scoring faces are locked: all dice showing them
//! leave the pool. A pass that scores nothing is a bust; a pass that
//! empties the pool is hot dice. Both consequences belong to the caller.

use thiserror::Error;

use crate::POOL_SIZE;

/// Multiplier by occurrence count (index = count - 1).
///
/// Three of a kind multiplies the nominal by 10, four by 20, five by 100.
/// Counts 1 and 2 only ever apply to aces and fives.
pub const COUNT_FACTORS: [u16; 5] = [1, 2, 10, 20, 100];

/// Invalid roll input. Legal rolls are 1..=5 dice with faces 1..=6.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScoreError {
    #[error("roll must contain 1..=5 dice, got {count}")]
    InvalidDiceCount { count: usize },
    #[error("die face must be in 1..=6, got {face}")]
    InvalidFace { face: u8 },
}

/// Result of scoring one pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PassScore {
    /// Score contributed by this pass. Zero means bust.
    pub score: u16,
    /// Dice still live for the next roll within the same move.
    pub remaining: u8,
}

impl PassScore {
    /// No face scored; the whole in-progress move total is forfeit.
    pub fn is_bust(&self) -> bool {
        self.score == 0
    }

    /// Every die scored; the pool refills to [`POOL_SIZE`] if play continues.
    pub fn is_hot_dice(&self) -> bool {
        self.remaining == 0
    }
}

/// Score a rolled hand of 1..=5 dice.
///
/// Faces are processed in ascending order; each scoring face locks all of
/// its dice. The remaining count is the pool usable for the next roll.
pub fn score_roll(faces: &[u8]) -> Result<PassScore, ScoreError> {
    if faces.is_empty() || faces.len() > POOL_SIZE as usize {
        return Err(ScoreError::InvalidDiceCount { count: faces.len() });
    }

    let mut counts = [0u8; 6];
    for &face in faces {
        if !(1..=6).contains(&face) {
            return Err(ScoreError::InvalidFace { face });
        }
        counts[(face - 1) as usize] += 1;
    }

    let mut score = 0u16;
    let mut remaining = faces.len() as u8;
    for face in 1..=6u8 {
        let count = counts[(face - 1) as usize];
        if count == 0 {
            continue;
        }
        if face == 1 || face == 5 || count >= 3 {
            let nominal: u16 = if face == 1 { 10 } else { u16::from(face) };
            score += nominal * COUNT_FACTORS[(count - 1) as usize];
            remaining -= count;
        }
    }

    Ok(PassScore { score, remaining })
}
