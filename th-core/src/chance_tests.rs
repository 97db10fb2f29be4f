#[cfg(test)]
mod tests {
    use crate::chance::{roll_pool, ChanceMode, EventKey};

    fn key(seed: u64, pass_idx: u32) -> EventKey {
        EventKey {
            episode_seed: seed,
            player: 0,
            move_idx: 1,
            pass_idx,
        }
    }

    #[test]
    fn rolls_are_in_range_and_sized() {
        for n in 1..=5usize {
            let dice = roll_pool(key(42, 0), n);
            assert_eq!(dice.len(), n);
            assert!(dice.iter().all(|d| (1..=6).contains(d)));
        }
    }

    #[test]
    fn same_event_key_same_dice() {
        let a = roll_pool(key(7, 3), 5);
        let b = roll_pool(key(7, 3), 5);
        assert_eq!(a, b);

        // The key, not call order, defines the outcome.
        let _ = roll_pool(key(7, 0), 5);
        let c = roll_pool(key(7, 3), 5);
        assert_eq!(a, c);
    }

    #[test]
    fn shorter_pool_is_a_prefix_of_the_full_roll() {
        let full = roll_pool(key(9, 1), 5);
        let short = roll_pool(key(9, 1), 2);
        assert_eq!(short, full[..2]);
    }

    #[test]
    fn deterministic_mode_reproduces_across_instances() {
        let mut a = ChanceMode::new_deterministic(123);
        let mut b = ChanceMode::new_deterministic(123);
        for pass in 0..10 {
            assert_eq!(a.roll(key(0, pass), 5), b.roll(key(0, pass), 5));
        }
    }

    #[test]
    fn rng_mode_reproduces_from_the_same_seed() {
        let mut a = ChanceMode::new_rng(42);
        let mut b = ChanceMode::new_rng(42);
        for pass in 0..10 {
            let ra = a.roll(key(0, pass), 3);
            let rb = b.roll(key(0, pass), 3);
            assert_eq!(ra, rb);
            assert!(ra.iter().all(|d| (1..=6).contains(d)));
        }
    }
}
