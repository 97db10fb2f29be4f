//! Multi-player game loop: fixed rotation until someone wins.

use thiserror::Error;

use th_core::{ChanceMode, Player};

use crate::move_driver::{play_move, MoveOutcome};
use crate::strategy::Strategy;

#[derive(Debug, Error)]
pub enum RunnerError {
    #[error("no players registered")]
    NoPlayers,
}

/// Counters across one game.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunnerStats {
    pub moves: u32,
    pub busts: u32,
    pub banks: u32,
}

/// How one game ended.
#[derive(Debug, Clone)]
pub struct GameReport {
    /// Index of the winning player, or `None` if the move cap was hit.
    pub winner: Option<usize>,
    pub stats: RunnerStats,
}

/// Owns the players and their strategies and runs the rotation.
pub struct GameRunner {
    players: Vec<Player>,
    strategies: Vec<Box<dyn Strategy>>,
    chance: ChanceMode,
    /// Safety bound on moves per player.
    move_cap: u32,
}

impl GameRunner {
    pub fn new(chance: ChanceMode, move_cap: u32) -> Self {
        Self {
            players: Vec::new(),
            strategies: Vec::new(),
            chance,
            move_cap,
        }
    }

    pub fn add_player(&mut self, name: impl Into<String>, strategy: Box<dyn Strategy>) {
        self.players.push(Player::new(name));
        self.strategies.push(strategy);
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Run to completion without observing individual moves.
    pub fn run(&mut self) -> Result<GameReport, RunnerError> {
        self.run_with(|_, _, _| {})
    }

    /// Run to completion, calling `on_move` after every move with the player
    /// index, the player's post-move state, and the move outcome.
    pub fn run_with(
        &mut self,
        mut on_move: impl FnMut(usize, &Player, &MoveOutcome),
    ) -> Result<GameReport, RunnerError> {
        if self.players.is_empty() {
            return Err(RunnerError::NoPlayers);
        }

        let mut stats = RunnerStats::default();
        for _round in 0..self.move_cap {
            for i in 0..self.players.len() {
                let outcome = play_move(
                    &mut self.players[i],
                    self.strategies[i].as_mut(),
                    &mut self.chance,
                    i as u8,
                );
                stats.moves += 1;
                if outcome.is_bust() {
                    stats.busts += 1;
                } else {
                    stats.banks += 1;
                }
                on_move(i, &self.players[i], &outcome);

                if outcome.won {
                    return Ok(GameReport {
                        winner: Some(i),
                        stats,
                    });
                }
            }
        }

        Ok(GameReport {
            winner: None,
            stats,
        })
    }
}
