use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use salvo::{Game, GameConfig, GuessOutcome, RevealState, GRID_SIZE, MAX_GUESSES};

fn started(seed: u64) -> (Game, SmallRng) {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut game = Game::new(GameConfig::default()).unwrap();
    game.start(&mut rng).unwrap();
    (game, rng)
}

fn health_is_conserved(game: &Game) -> Result<(), TestCaseError> {
    for (kind, hp) in game.ship_health().iter() {
        prop_assert_eq!(hp + game.grid().hits_on(kind), kind.length());
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn random_play_keeps_invariants(seed in any::<u64>(), guesses in 1usize..200) {
        let (mut game, mut rng) = started(seed);
        let mut counted = 0;
        let mut was_over = false;

        for _ in 0..guesses {
            let r = rng.random_range(0..GRID_SIZE + 1);
            let c = rng.random_range(0..GRID_SIZE + 1);
            let before = game.status();
            let outcome = game.make_guess(r, c);
            let after = game.status();

            if outcome.counted() {
                counted += 1;
                prop_assert_eq!(after.guesses_remaining, before.guesses_remaining - 1);
            } else {
                prop_assert_eq!(after, before);
            }
            match outcome {
                GuessOutcome::Sunk(kind) => {
                    prop_assert_eq!(after.ships_remaining, before.ships_remaining - 1);
                    prop_assert_eq!(game.ship_health().get(kind), Some(0));
                }
                _ => prop_assert_eq!(after.ships_remaining, before.ships_remaining),
            }
            prop_assert_eq!(
                after.game_over,
                after.ships_remaining == 0 || after.guesses_remaining == 0
            );
            prop_assert!(!was_over || after.game_over);
            was_over = after.game_over;
            health_is_conserved(&game)?;
        }

        let status = game.status();
        prop_assert_eq!(status.guesses_remaining, MAX_GUESSES - counted);
        let revealed = game.grid().count(RevealState::Hit) + game.grid().count(RevealState::Miss);
        prop_assert_eq!(revealed, counted);
    }

    #[test]
    fn repeated_guess_is_idempotent(seed in any::<u64>(), r in 0..GRID_SIZE, c in 0..GRID_SIZE) {
        let (mut game, _) = started(seed);
        let first = game.make_guess(r, c);
        prop_assert!(first.counted());
        let status = game.status();
        let health = game.ship_health().clone();
        let reveal = game.grid().reveal(r, c);

        let second = game.make_guess(r, c);
        prop_assert!(!second.counted());
        prop_assert_eq!(game.status(), status);
        prop_assert_eq!(game.ship_health(), &health);
        prop_assert_eq!(game.grid().reveal(r, c), reveal);
    }

    #[test]
    fn ship_sinks_exactly_when_fully_hit(seed in any::<u64>()) {
        let (mut game, _) = started(seed);
        let locations = game.diagnostics().locations.clone();
        for loc in locations {
            let cells: Vec<_> = if loc.start.row == loc.end.row {
                (loc.start.col..=loc.end.col).map(|c| (loc.start.row, c)).collect()
            } else {
                (loc.start.row..=loc.end.row).map(|r| (r, loc.start.col)).collect()
            };
            let last = cells.len() - 1;
            for (i, (r, c)) in cells.into_iter().enumerate() {
                let outcome = game.make_guess(r, c);
                if i == last {
                    prop_assert_eq!(outcome, GuessOutcome::Sunk(loc.kind));
                } else {
                    prop_assert_eq!(outcome, GuessOutcome::Hit(loc.kind));
                    prop_assert!(!game.ship_health().is_sunk(loc.kind));
                }
            }
        }
    }
}
