//! Batch board generation for spotting abnormal placement-failure rates.
//!
//! Prints a single JSON object on stdout.

use std::collections::BTreeMap;

use anyhow::anyhow;
use clap::Parser;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use salvo::{init_logging_with, Game, GameConfig, ShipKind};
use serde_json::json;

#[derive(Parser)]
#[command(author, version, about = "Generate boards in bulk and report placement statistics")]
struct Args {
    #[arg(long, default_value_t = 0)]
    seed: u64,
    #[arg(long, default_value_t = 100)]
    games: u64,
    #[arg(long, default_value_t = salvo::GRID_SIZE)]
    grid_size: usize,
    #[arg(long, default_value_t = salvo::PLACEMENT_ATTEMPTS)]
    attempts: usize,
    #[arg(long, help = "Play each board with uniformly random guesses")]
    play: bool,
}

fn main() -> anyhow::Result<()> {
    // Diagnostics are collected into the report; keep stdout clean JSON.
    init_logging_with(log::LevelFilter::Off);
    let args = Args::parse();

    let config = GameConfig::default()
        .with_grid_size(args.grid_size)
        .with_placement_attempts(args.attempts);
    let mut game = Game::new(config).map_err(|e| anyhow!(e))?;

    let mut complete = 0u64;
    let mut failures: BTreeMap<String, u64> = BTreeMap::new();
    let mut mismatches = 0u64;
    let mut wins = 0u64;
    let mut losses = 0u64;

    for i in 0..args.games {
        let mut rng = SmallRng::seed_from_u64(args.seed.wrapping_add(i));
        game.start(&mut rng).map_err(|e| anyhow!(e))?;

        let diagnostics = game.diagnostics();
        if diagnostics.failures.is_empty() && diagnostics.mismatches.is_empty() {
            complete += 1;
        }
        for f in &diagnostics.failures {
            *failures.entry(f.kind.name().to_string()).or_default() += 1;
        }
        mismatches += diagnostics.mismatches.len() as u64;

        if args.play {
            let n = game.config().grid_size;
            let placed: Vec<ShipKind> = game
                .diagnostics()
                .locations
                .iter()
                .map(|loc| loc.kind)
                .collect();
            let all_sunk = |game: &Game| placed.iter().all(|&k| game.ship_health().is_sunk(k));
            // A degraded board can never report zero ships remaining; stop once
            // everything that was placed is gone.
            while !game.status().game_over && !all_sunk(&game) {
                game.make_guess(rng.random_range(0..n), rng.random_range(0..n));
            }
            if all_sunk(&game) {
                wins += 1;
            } else {
                losses += 1;
            }
        }
    }

    let mut report = json!({
        "games": args.games,
        "complete_boards": complete,
        "placement_failures": failures,
        "validation_mismatches": mismatches,
    });
    if args.play {
        report["wins"] = json!(wins);
        report["losses"] = json!(losses);
    }
    println!("{}", serde_json::to_string(&report)?);
    Ok(())
}
