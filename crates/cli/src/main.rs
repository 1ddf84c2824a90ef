//! Twelve-axis chess CLI
//!
//! Play interactively against the minimax engine, or watch
//! engine-vs-engine matches.

use std::env;
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use chess12_core::{board_grid, move_to_text, parse_move, Board, Color, Engine, SearchLimits};
use minimax_engine::MinimaxEngine;
use random_engine::RandomEngine;
use tournament::{MatchConfig, MatchReport, MatchRunner};

fn print_usage() {
    println!("Twelve-axis chess");
    println!();
    println!("Usage:");
    println!("  chess12 play [--depth D]");
    println!("  chess12 watch [<engine1> <engine2>] [--games N] [--depth D]");
    println!("                [--thinking-time SECS] [--seed S] [--out FILE]");
    println!();
    println!("Engines:");
    println!("  minimax  - alpha-beta with material eval");
    println!("  random   - uniform random candidate moves");
    println!();
    println!("Moves are entered as two squares, e.g. \"b5 c5\" or \"b5 c5@4:1\"");
    println!("(square = file letter + rank digit, plus @axis:value groups");
    println!("for the unbounded axes).");
}

fn create_engine(spec: &str) -> Box<dyn Engine> {
    match spec.to_lowercase().as_str() {
        "minimax" => Box::new(MinimaxEngine::new()),
        "random" => Box::new(RandomEngine::new()),
        _ => {
            eprintln!("Unknown engine: {}, using minimax", spec);
            Box::new(MinimaxEngine::new())
        }
    }
}

fn parse_flag<T: std::str::FromStr>(args: &[String], i: &mut usize, default: T) -> T {
    if *i + 1 < args.len() {
        *i += 1;
        args[*i].parse().unwrap_or(default)
    } else {
        default
    }
}

fn run_play(args: &[String]) -> Result<()> {
    let mut depth: u8 = 1;
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--depth" | "-d" => depth = parse_flag(args, &mut i, 1),
            _ => {}
        }
        i += 1;
    }

    let mut board = Board::startpos();
    let mut engine = MinimaxEngine::new();
    let stdin = io::stdin();

    println!("You play White. Type \"quit\" to resign.");
    loop {
        println!("{}", board_grid(&board));
        if board.is_game_over() {
            break;
        }

        if board.turn() == Color::White {
            print!("Your move (e.g. b5 c5): ");
            io::stdout().flush()?;
            let mut line = String::new();
            if stdin.read_line(&mut line)? == 0 {
                return Ok(());
            }
            let text = line.trim();
            if text.is_empty() {
                continue;
            }
            if text == "quit" {
                println!("Resigned.");
                return Ok(());
            }
            let Some(mv) = parse_move(&board, text) else {
                println!("Invalid move, try again.");
                continue;
            };
            if let Err(err) = board.move_piece(mv.from, mv.to) {
                println!("{}, try again.", err);
                continue;
            }
        } else {
            let result = engine.search(&board, SearchLimits::depth(depth));
            let Some(mv) = result.best_move else {
                println!("The engine has no moves.");
                break;
            };
            println!("Engine plays {}", move_to_text(mv));
            if let Err(err) = board.move_piece(mv.from, mv.to) {
                println!("Engine move rejected: {}", err);
                break;
            }
        }
    }

    match board.winner() {
        Some(color) => println!("Checkmate! {} wins!", color),
        None => println!("Game over."),
    }
    Ok(())
}

fn run_watch(args: &[String]) -> Result<()> {
    let mut spec1 = String::from("minimax");
    let mut spec2 = String::from("random");
    let mut config = MatchConfig {
        num_games: 1,
        ..Default::default()
    };
    let mut out: Option<PathBuf> = None;

    let mut positional = 0;
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--games" | "-g" => config.num_games = parse_flag(args, &mut i, 1),
            "--depth" | "-d" => config.depth = parse_flag(args, &mut i, 1),
            "--seed" | "-s" => config.opening_seed = parse_flag(args, &mut i, 0),
            "--thinking-time" | "-t" => {
                let secs: f64 = parse_flag(args, &mut i, 1.0);
                config.time_per_move = Some(Duration::from_secs_f64(secs));
            }
            "--out" | "-o" => {
                if i + 1 < args.len() {
                    i += 1;
                    out = Some(PathBuf::from(&args[i]));
                }
            }
            other if !other.starts_with('-') => {
                match positional {
                    0 => spec1 = other.to_string(),
                    1 => spec2 = other.to_string(),
                    _ => eprintln!("Ignoring extra argument: {}", other),
                }
                positional += 1;
            }
            other => eprintln!("Ignoring unknown flag: {}", other),
        }
        i += 1;
    }

    // each run gets fresh openings unless pinned with --seed
    if config.opening_seed == 0 {
        config.opening_seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .context("system clock before epoch")?
            .as_secs();
    }

    println!("=== Match: {} vs {} ===", spec1, spec2);
    println!(
        "Games: {}, Depth: {}, Opening plies: {}",
        config.num_games, config.depth, config.opening_plies
    );
    println!();

    let mut engine1 = create_engine(&spec1);
    let mut engine2 = create_engine(&spec2);

    let runner = MatchRunner::new(config.clone());
    let result = runner.run_match(engine1.as_mut(), engine2.as_mut());

    println!();
    let report = MatchReport::new(&spec1, &spec2, config.settings(), result);
    println!("{}", report.summary());

    if let Some(path) = out {
        report
            .save(&path)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        println!("Report written to {}", path.display());
    }
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    match args.first().map(String::as_str) {
        Some("play") => run_play(&args[1..]),
        Some("watch") => run_watch(&args[1..]),
        _ => {
            print_usage();
            Ok(())
        }
    }
}
