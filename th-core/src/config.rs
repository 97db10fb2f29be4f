//! Simulation/run configuration.
//!
//! One YAML schema shared by the CLI and tests: who plays, with which
//! strategy, and how games are seeded and bounded.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Configuration loading errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Root configuration structure.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Simulation settings.
    #[serde(default)]
    pub sim: SimConfig,
    /// Participants in rotation order.
    #[serde(default = "default_players")]
    pub players: Vec<PlayerConfig>,
}

/// Simulation settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SimConfig {
    /// Number of games to run.
    #[serde(default = "default_games")]
    pub games: u32,
    /// Base seed; game `i` uses `seed + i`.
    #[serde(default)]
    pub seed: u64,
    /// If true, use the deterministic event-keyed dice stream.
    #[serde(default = "default_deterministic_chance")]
    pub deterministic_chance: bool,
    /// Safety bound on moves per player per game.
    #[serde(default = "default_move_cap")]
    pub move_cap: u32,
}

fn default_games() -> u32 {
    100
}

fn default_deterministic_chance() -> bool {
    true
}

fn default_move_cap() -> u32 {
    1000
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            games: default_games(),
            seed: 0,
            deterministic_chance: default_deterministic_chance(),
            move_cap: default_move_cap(),
        }
    }
}

/// One participant.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PlayerConfig {
    pub name: String,
    #[serde(default)]
    pub strategy: StrategyKind,
}

/// Decision style driving a player's banking choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    /// Threshold-driven automatic play.
    #[default]
    Greedy,
    /// Prompt a human on stdin (CLI only).
    Interactive,
}

fn default_players() -> Vec<PlayerConfig> {
    vec![
        PlayerConfig {
            name: "bot-1".to_string(),
            strategy: StrategyKind::Greedy,
        },
        PlayerConfig {
            name: "bot-2".to_string(),
            strategy: StrategyKind::Greedy,
        },
    ]
}

impl Config {
    /// Load configuration from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&contents)?;
        Ok(config)
    }

    /// Load configuration from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_yaml::from_str(yaml)?;
        Ok(config)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sim: SimConfig::default(),
            players: default_players(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_default_yaml() {
        let config =
            Config::load("../configs/sim_default.yaml").expect("Failed to load configs/sim_default.yaml");

        assert_eq!(config.sim.games, 100);
        assert_eq!(config.sim.seed, 0);
        assert!(config.sim.deterministic_chance);
        assert_eq!(config.players.len(), 2);
        assert_eq!(config.players[0].strategy, StrategyKind::Greedy);
    }

    #[test]
    fn test_parse_yaml_string() {
        let yaml = r#"
sim:
  games: 10
  seed: 7

players:
  - name: "human"
    strategy: interactive
  - name: "computer"
"#;

        let config = Config::from_yaml(yaml).expect("Failed to parse YAML");
        assert_eq!(config.sim.games, 10);
        assert_eq!(config.sim.seed, 7);
        // Check defaults are applied
        assert!(config.sim.deterministic_chance);
        assert_eq!(config.sim.move_cap, 1000);
        assert_eq!(config.players[0].strategy, StrategyKind::Interactive);
        assert_eq!(config.players[1].strategy, StrategyKind::Greedy);
    }

    #[test]
    fn test_empty_yaml_uses_defaults() {
        let config = Config::from_yaml("{}").expect("Failed to parse empty mapping");
        assert_eq!(config.sim.games, 100);
        assert_eq!(config.players.len(), 2);
    }

    #[test]
    fn test_invalid_yaml_fails() {
        let invalid_yaml = "this is not: valid: yaml: {{{}}}";
        let result = Config::from_yaml(invalid_yaml);
        assert!(result.is_err());
    }
}
