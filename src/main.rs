use std::io::{self, BufRead, Write};

use anyhow::anyhow;
use clap::Parser;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use salvo::{init_logging, Coord, Game, GameConfig, GuessOutcome, IgnoredGuess};

#[derive(Parser)]
#[command(author, version, about = "Sink the hidden fleet before your guesses run out", long_about = None)]
struct Cli {
    #[arg(long, help = "Fix RNG seed for reproducible boards (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, default_value_t = salvo::GRID_SIZE)]
    grid_size: usize,
    #[arg(long, default_value_t = salvo::MAX_GUESSES)]
    guesses: usize,
    #[arg(long, help = "Print ship positions at the start of each game")]
    reveal: bool,
}

fn seeded_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

fn new_game(game: &mut Game, rng: &mut SmallRng, reveal: bool) -> anyhow::Result<()> {
    game.start(rng).map_err(|e| anyhow!(e))?;
    for failure in &game.diagnostics().failures {
        println!("Warning: {}", failure);
    }
    if reveal {
        for loc in &game.diagnostics().locations {
            println!("  {}: {}-{}", loc.kind, loc.start, loc.end);
        }
    }
    Ok(())
}

fn print_view(game: &Game) {
    let status = game.status();
    println!("\n{}\n", game.grid());
    println!(
        "Guesses remaining: {}   Ships remaining: {}",
        status.guesses_remaining, status.ships_remaining
    );
    let health: Vec<String> = game
        .ship_health()
        .iter()
        .map(|(kind, hp)| format!("{} {}/{}", kind, hp, kind.length()))
        .collect();
    println!("{}", health.join(", "));
}

fn describe(coord: Coord, outcome: GuessOutcome) -> String {
    match outcome {
        GuessOutcome::Miss => format!("{}: miss", coord),
        GuessOutcome::Hit(kind) => format!("{}: hit {}", coord, kind),
        GuessOutcome::Sunk(kind) => format!("{}: you sank the {}!", coord, kind),
        GuessOutcome::Ignored(IgnoredGuess::AlreadyRevealed) => {
            format!("{} was already guessed", coord)
        }
        GuessOutcome::Ignored(IgnoredGuess::OutOfBounds) => format!("{} is off the grid", coord),
        GuessOutcome::Ignored(IgnoredGuess::GameOver) => "The game is over".to_string(),
        GuessOutcome::Ignored(IgnoredGuess::NotStarted) => "No game in progress".to_string(),
    }
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let config = GameConfig::default()
        .with_grid_size(cli.grid_size)
        .with_max_guesses(cli.guesses);
    let mut game = Game::new(config).map_err(|e| anyhow!(e))?;
    let mut rng = seeded_rng(cli.seed);
    if let Some(s) = cli.seed {
        println!("Using fixed seed: {} (boards will be reproducible)", s);
    }
    new_game(&mut game, &mut rng, cli.reveal)?;

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print_view(&game);
        if game.status().game_over {
            if game.status().ships_remaining == 0 {
                println!("All ships sunk. You win!");
            } else {
                println!("Out of guesses. The fleet survives.");
            }
            println!("Type `new` to play again or `quit` to exit.");
        }
        print!("> ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        match line.trim().to_ascii_lowercase().as_str() {
            "" => continue,
            "quit" | "exit" | "q" => break,
            "new" => new_game(&mut game, &mut rng, cli.reveal)?,
            input => match Coord::parse(input) {
                Some(coord) => {
                    let outcome = game.make_guess(coord.row, coord.col);
                    println!("{}", describe(coord, outcome));
                }
                None => println!("Enter a cell like B7, `new` or `quit`"),
            },
        }
    }
    Ok(())
}
