use th_core::{ChanceMode, Player, Zone, WIN_SCORE};

use crate::move_driver::play_move;
use crate::runner::{GameRunner, RunnerError};
use crate::strategy::{GreedyStrategy, Strategy, TurnView};

fn opened_at(score: u16) -> Player {
    let mut p = Player::new("test");
    p.score = score;
    p.opened = true;
    p.zone = Zone::for_state(score, true);
    p
}

fn view<'a>(player: &'a Player, faces: &'a [u8], move_total: u32, dice_left: u8) -> TurnView<'a> {
    TurnView {
        player,
        faces,
        pass_score: 0,
        move_total,
        dice_left,
    }
}

#[test]
fn greedy_dodges_the_dump_score() {
    let p = opened_at(500);
    let mut s = GreedyStrategy;
    assert!(s.keep_rolling(&view(&p, &[5], 55, 4)));
}

#[test]
fn greedy_banks_a_win() {
    let p = opened_at(700);
    let mut s = GreedyStrategy;
    assert!(!s.keep_rolling(&view(&p, &[1], 300, 4)));
}

#[test]
fn greedy_banks_once_clear_of_a_trap() {
    let mut s = GreedyStrategy;

    // Enough to open.
    let p = Player::new("fresh");
    assert!(!s.keep_rolling(&view(&p, &[5], 50, 4)));

    // Enough to jump the lower pit.
    let p = opened_at(250);
    assert!(!s.keep_rolling(&view(&p, &[1], 60, 4)));

    // Not enough yet: keep rolling while the pool is healthy.
    let p = opened_at(250);
    assert!(s.keep_rolling(&view(&p, &[5], 30, 4)));
}

#[test]
fn greedy_banks_on_a_thin_pool() {
    let p = opened_at(100);
    let mut s = GreedyStrategy;
    assert!(!s.keep_rolling(&view(&p, &[1], 50, 2)));
    assert!(s.keep_rolling(&view(&p, &[1], 50, 3)));
}

#[test]
fn play_move_always_advances_the_move_counter() {
    let mut chance = ChanceMode::new_deterministic(5);
    let mut p = Player::new("solo");
    let mut s = GreedyStrategy;

    let outcome = play_move(&mut p, &mut s, &mut chance, 0);
    assert_eq!(p.moves, 1);
    assert!(outcome.passes >= 1);
    p.validate().unwrap();

    let outcome = play_move(&mut p, &mut s, &mut chance, 0);
    assert_eq!(p.moves, 2);
    assert!(outcome.passes >= 1);
    p.validate().unwrap();
}

#[test]
fn runner_without_players_is_an_error() {
    let mut runner = GameRunner::new(ChanceMode::new_rng(0), 10);
    assert!(matches!(runner.run(), Err(RunnerError::NoPlayers)));
}

#[test]
fn seeded_game_terminates_with_a_winner_and_valid_states() {
    let mut runner = GameRunner::new(ChanceMode::new_deterministic(1234), 10_000);
    runner.add_player("a", Box::new(GreedyStrategy));
    runner.add_player("b", Box::new(GreedyStrategy));

    let report = runner
        .run_with(|_, player, outcome| {
            player.validate().unwrap();
            assert!(outcome.passes >= 1);
        })
        .unwrap();

    let winner = report.winner.expect("greedy game should finish");
    assert_eq!(runner.players()[winner].score, WIN_SCORE);
    assert_eq!(report.stats.moves, report.stats.busts + report.stats.banks);
}

#[test]
fn same_seed_same_game() {
    let run = |seed: u64| {
        let mut runner = GameRunner::new(ChanceMode::new_deterministic(seed), 10_000);
        runner.add_player("a", Box::new(GreedyStrategy));
        runner.add_player("b", Box::new(GreedyStrategy));
        let report = runner.run().unwrap();
        let scores: Vec<u16> = runner.players().iter().map(|p| p.score).collect();
        (report.winner, report.stats, scores)
    };

    assert_eq!(run(99), run(99));
}

#[test]
fn rng_mode_games_also_terminate() {
    for seed in 0..5u64 {
        let mut runner = GameRunner::new(ChanceMode::new_rng(seed), 10_000);
        runner.add_player("a", Box::new(GreedyStrategy));
        runner.add_player("b", Box::new(GreedyStrategy));
        let report = runner.run().unwrap();
        assert!(report.winner.is_some(), "seed {} hit the move cap", seed);
    }
}
