//! thousand: CLI for the dice game.
//!
//! Subcommands:
//! - sim     batch games between automatic players
//! - play    interactive game against an automatic player

use std::io::{self, BufRead, Write};
use std::process;

use th_core::{ChanceMode, Config, MustRoll, Player, RuleEvent, StrategyKind, Zone};
use th_logging::{GameRecordV1, MoveRecordV1, NdjsonWriter};
use th_runtime::{GameRunner, GreedyStrategy, MoveOutcome, Strategy, TurnView};

fn zone_label(zone: Zone) -> &'static str {
    match zone {
        Zone::Unopened => "unopened",
        Zone::Normal => "normal",
        Zone::Pit200 => "pit 200-300",
        Zone::Pit600 => "pit 600-700",
        Zone::Barrel => "the barrel",
    }
}

/// Render a rule event the way a table announcer would.
fn describe(name: &str, event: &RuleEvent) -> String {
    match event {
        RuleEvent::ZoneEntered { zone } => format!("{} is in {}", name, zone_label(*zone)),
        RuleEvent::ZoneExited { zone } => format!("{} is out of {}", name, zone_label(*zone)),
        RuleEvent::Opened => format!("{} is opened", name),
        RuleEvent::Strike { bolts } => format!("{} gets bolt {}", name, bolts),
        RuleEvent::PenaltyApplied { deducted } => {
            format!("{} failed, score reduced by {}", name, deducted)
        }
        RuleEvent::BarrelFailed => format!("{} failed the barrel, score zeroed", name),
        RuleEvent::DumpTriggered => format!("{} hit the dump (555), score zeroed", name),
    }
}

fn print_outcome(name: &str, player: &Player, outcome: &MoveOutcome) {
    if outcome.is_bust() {
        println!("{}: bust after {} passes", name, outcome.passes);
    } else {
        println!("{}: banked {}", name, outcome.banked);
    }
    for ev in &outcome.events {
        println!("  {}", describe(name, ev));
    }
    println!(
        "  {} - {}{}{}",
        name,
        "*".repeat(player.bolts as usize),
        "!".repeat(player.barrels as usize),
        player.score
    );
}

/// Prompts a human on stdin for every choice the rules leave open.
struct InteractiveStrategy;

impl InteractiveStrategy {
    fn read_line(&self) -> String {
        let mut line = String::new();
        let _ = io::stdin().lock().read_line(&mut line);
        line.trim().to_string()
    }

    fn pause(&self) {
        print!("Press Enter");
        let _ = io::stdout().flush();
        let _ = self.read_line();
    }
}

impl Strategy for InteractiveStrategy {
    fn keep_rolling(&mut self, view: &TurnView) -> bool {
        println!(
            "Rolled {:?}: pass {}, move total {}, {} dice left",
            view.faces, view.pass_score, view.move_total, view.dice_left
        );
        print!("Roll again? y/[n] ");
        let _ = io::stdout().flush();
        self.read_line().eq_ignore_ascii_case("y")
    }

    fn on_hot_dice(&mut self, view: &TurnView) {
        println!(
            "Rolled {:?}: pass {}, move total {} - hot dice, pool refills",
            view.faces, view.pass_score, view.move_total
        );
        self.pause();
    }

    fn on_forced_roll(&mut self, view: &TurnView, reason: MustRoll) {
        println!(
            "Rolled {:?}: move total {} - {}, roll again",
            view.faces, view.move_total, reason
        );
        self.pause();
    }
}

fn make_strategy(kind: StrategyKind) -> Box<dyn Strategy> {
    match kind {
        StrategyKind::Greedy => Box::new(GreedyStrategy),
        StrategyKind::Interactive => Box::new(InteractiveStrategy),
    }
}

fn cmd_sim(args: &[String]) {
    let mut config = Config::default();
    let mut games_override: Option<u32> = None;
    let mut seed_override: Option<u64> = None;
    let mut log_path: Option<String> = None;

    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                println!(
                    r#"thousand sim

USAGE:
    thousand sim [--games N] [--seed S] [--config PATH] [--log PATH]

OPTIONS:
    --games N      Number of games to run (default: from config)
    --seed S       Base seed; game i uses seed + i (default: from config)
    --config PATH  YAML config file (default: built-in two-bot setup)
    --log PATH     Append NDJSON move/game records to PATH
"#
                );
                return;
            }
            "--games" => {
                games_override = Some(parse_value(args, i, "--games"));
                i += 2;
            }
            "--seed" => {
                seed_override = Some(parse_value(args, i, "--seed"));
                i += 2;
            }
            "--config" => {
                let path = take_value(args, i, "--config");
                config = Config::load(&path).unwrap_or_else(|e| {
                    eprintln!("Failed to load {}: {}", path, e);
                    process::exit(1);
                });
                i += 2;
            }
            "--log" => {
                log_path = Some(take_value(args, i, "--log"));
                i += 2;
            }
            other => {
                eprintln!("Unknown option for `thousand sim`: {}", other);
                eprintln!("Run `thousand sim --help` for usage.");
                process::exit(1);
            }
        }
    }

    if let Some(games) = games_override {
        config.sim.games = games;
    }
    if let Some(seed) = seed_override {
        config.sim.seed = seed;
    }
    if config.players.iter().any(|p| p.strategy == StrategyKind::Interactive) {
        eprintln!("`thousand sim` only supports automatic strategies; use `thousand play`.");
        process::exit(1);
    }

    let mut log = log_path.map(|p| {
        NdjsonWriter::open_append_with_flush(&p, 64).unwrap_or_else(|e| {
            eprintln!("Failed to open log {}: {}", p, e);
            process::exit(1);
        })
    });

    let mut wins = vec![0u32; config.players.len()];
    let mut capped = 0u32;
    let mut total_moves = 0u64;

    for game in 0..config.sim.games {
        let seed = config.sim.seed + u64::from(game);
        let chance = if config.sim.deterministic_chance {
            ChanceMode::new_deterministic(seed)
        } else {
            ChanceMode::new_rng(seed)
        };

        let mut runner = GameRunner::new(chance, config.sim.move_cap);
        for p in &config.players {
            runner.add_player(p.name.clone(), make_strategy(p.strategy));
        }

        let game_id = u64::from(game);
        let report = runner
            .run_with(|_, player, outcome| {
                if let Some(w) = log.as_mut() {
                    let rec = MoveRecordV1 {
                        record: MoveRecordV1::RECORD,
                        ts_ms: th_logging::now_ms(),
                        game_id,
                        player: player.name.clone(),
                        move_idx: player.moves,
                        banked: outcome.banked,
                        won: outcome.won,
                        score_after: player.score,
                        bolts: player.bolts,
                        barrels: player.barrels,
                        events: outcome.events.clone(),
                    };
                    if let Err(e) = w.write_record(&rec) {
                        eprintln!("Log write failed: {}", e);
                        process::exit(1);
                    }
                }
            })
            .unwrap_or_else(|e| {
                eprintln!("Simulation failed: {}", e);
                process::exit(1);
            });

        total_moves += u64::from(report.stats.moves);
        match report.winner {
            Some(idx) => wins[idx] += 1,
            None => capped += 1,
        }

        if let Some(w) = log.as_mut() {
            let rec = GameRecordV1 {
                record: GameRecordV1::RECORD,
                ts_ms: th_logging::now_ms(),
                game_id,
                seed,
                winner: report.winner.map(|i| config.players[i].name.clone()),
                moves: report.stats.moves,
            };
            if let Err(e) = w.write_record(&rec) {
                eprintln!("Log write failed: {}", e);
                process::exit(1);
            }
        }
    }

    if let Some(w) = log.as_mut() {
        if let Err(e) = w.flush() {
            eprintln!("Log flush failed: {}", e);
            process::exit(1);
        }
    }

    println!("Games: {}", config.sim.games);
    for (i, p) in config.players.iter().enumerate() {
        println!("  {} wins: {}", p.name, wins[i]);
    }
    if capped > 0 {
        println!("  move-capped: {}", capped);
    }
    if config.sim.games > 0 {
        println!(
            "  mean moves per game: {:.1}",
            total_moves as f64 / f64::from(config.sim.games)
        );
    }
}

fn cmd_play(args: &[String]) {
    let mut name = "player".to_string();
    let mut seed: u64 = 0;

    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                println!(
                    r#"thousand play

USAGE:
    thousand play [--name NAME] [--seed S]

OPTIONS:
    --name NAME  Your table name (default: player)
    --seed S     RNG seed (default: 0)
"#
                );
                return;
            }
            "--name" => {
                name = take_value(args, i, "--name");
                i += 2;
            }
            "--seed" => {
                seed = parse_value(args, i, "--seed");
                i += 2;
            }
            other => {
                eprintln!("Unknown option for `thousand play`: {}", other);
                eprintln!("Run `thousand play --help` for usage.");
                process::exit(1);
            }
        }
    }

    let mut runner = GameRunner::new(ChanceMode::new_rng(seed), 10_000);
    runner.add_player(name, Box::new(InteractiveStrategy));
    runner.add_player("computer", Box::new(GreedyStrategy));

    let report = runner
        .run_with(|_, player, outcome| {
            print_outcome(&player.name, player, outcome);
            println!();
        })
        .unwrap_or_else(|e| {
            eprintln!("Game failed: {}", e);
            process::exit(1);
        });

    match report.winner {
        Some(idx) => {
            let p = &runner.players()[idx];
            println!("{} wins the game with {}", p.name, p.score);
        }
        None => println!("Move cap reached, no winner."),
    }
}

fn take_value(args: &[String], i: usize, flag: &str) -> String {
    if i + 1 >= args.len() {
        eprintln!("Missing value for {}", flag);
        process::exit(1);
    }
    args[i + 1].clone()
}

fn parse_value<T: std::str::FromStr>(args: &[String], i: usize, flag: &str) -> T {
    take_value(args, i, flag).parse().unwrap_or_else(|_| {
        eprintln!("Invalid {} value: {}", flag, args[i + 1]);
        process::exit(1)
    })
}

fn print_help() {
    eprintln!(
        r#"thousand - dice game CLI

USAGE:
    thousand <COMMAND> [OPTIONS]

COMMANDS:
    sim       Run batch games between automatic players
    play      Play interactively against the computer

OPTIONS:
    -h, --help          Print this help message
"#
    );
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.first().map(String::as_str) {
        Some("sim") => cmd_sim(&args[1..]),
        Some("play") => cmd_play(&args[1..]),
        Some("--help") | Some("-h") | None => print_help(),
        Some(other) => {
            eprintln!("Unknown command: {}", other);
            print_help();
            process::exit(1);
        }
    }
}
