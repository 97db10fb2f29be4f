//! Dice generation: seeded PRNG or a deterministic event-keyed stream.
//!
//! Deterministic mode defines dice by episode seed + structural event, not
//! by evolving RNG state: the same (seed, player, move, pass) always yields
//! the same dice, independent of what other players rolled in between.

use rand::Rng;
use rand_chacha::ChaCha8Rng;
use rand_core::SeedableRng;

use crate::POOL_SIZE;

/// Structural event key for deterministic dice generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventKey {
    pub episode_seed: u64,
    /// Player index in the turn rotation.
    pub player: u8,
    /// The player's move number, 1-based.
    pub move_idx: u32,
    /// Scoring pass within the move, 0-based. Hot dice advance it too.
    pub pass_idx: u32,
}

/// SplitMix64 step (fast, deterministic).
fn splitmix64_next(state: &mut u64) -> u64 {
    *state = state.wrapping_add(0x9E3779B97F4A7C15);
    let mut z = *state;
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58476D1CE4E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D049BB133111EB);
    z ^ (z >> 31)
}

fn mix_seed(key: EventKey) -> u64 {
    // Fixed, stable mixing. Avoid std Hash/RandomState.
    let mut x = key.episode_seed;
    x ^= u64::from(key.player).wrapping_mul(0xD6E8FEB86659FD93);
    x ^= u64::from(key.move_idx).wrapping_mul(0xA5A35625E4F7C1AD);
    x ^= u64::from(key.pass_idx).wrapping_mul(0x9E3779B97F4A7C15);
    let mut s = x;
    splitmix64_next(&mut s)
}

/// Deterministically roll `n` dice (1..=POOL_SIZE) for the given event key.
pub fn roll_pool(key: EventKey, n: usize) -> Vec<u8> {
    debug_assert!(n >= 1 && n <= POOL_SIZE as usize);
    let mut state = mix_seed(key);
    let mut out = vec![0u8; n];
    for o in &mut out {
        let r = splitmix64_next(&mut state);
        *o = ((r % 6) + 1) as u8;
    }
    out
}

/// How dice are generated for a game.
pub enum ChanceMode {
    /// Deterministic, event-keyed dice stream. Requires an episode seed.
    Deterministic { episode_seed: u64 },
    /// Pseudorandom dice stream backed by a small PRNG.
    Rng { rng: Box<ChaCha8Rng> },
}

impl ChanceMode {
    pub fn new_deterministic(episode_seed: u64) -> Self {
        ChanceMode::Deterministic { episode_seed }
    }

    pub fn new_rng(seed: u64) -> Self {
        ChanceMode::Rng {
            rng: Box::new(ChaCha8Rng::seed_from_u64(seed)),
        }
    }

    /// Roll `n` dice for the structural event `key`.
    ///
    /// RNG mode ignores the key and draws from the evolving stream.
    pub fn roll(&mut self, key: EventKey, n: usize) -> Vec<u8> {
        match self {
            ChanceMode::Deterministic { episode_seed } => roll_pool(
                EventKey {
                    episode_seed: *episode_seed,
                    ..key
                },
                n,
            ),
            ChanceMode::Rng { rng } => {
                let mut out = vec![0u8; n];
                for o in &mut out {
                    *o = rng.gen_range(1..=6);
                }
                out
            }
        }
    }
}
