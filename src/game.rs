//! Game session: adopts a generated board and resolves guesses against it.

use alloc::vec::Vec;

use log::{debug, info, warn};
use rand::Rng;

use crate::board::{Board, LengthMismatch, ShipLocation};
use crate::common::{BoardError, GuessOutcome, IgnoredGuess};
use crate::config::{ConfigError, GameConfig};
use crate::generator::{BoardGenerator, PlacementFailure};
use crate::grid::{Grid, RevealState};
use crate::ship::{Coord, ShipKind};

/// Lifecycle of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    NotStarted,
    InProgress,
    GameOver,
}

/// Aggregate status shown to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameStatus {
    pub started: bool,
    pub game_over: bool,
    pub guesses_remaining: usize,
    pub ships_remaining: usize,
}

/// Remaining unhit cells per fleet member.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ShipHealth {
    entries: Vec<(ShipKind, usize)>,
}

impl ShipHealth {
    /// Every ship at full length.
    pub fn full(fleet: &[ShipKind]) -> Self {
        Self {
            entries: fleet.iter().map(|&k| (k, k.length())).collect(),
        }
    }

    /// Remaining health of `kind`, or `None` if it is not in the fleet.
    pub fn get(&self, kind: ShipKind) -> Option<usize> {
        self.entries.iter().find(|(k, _)| *k == kind).map(|(_, h)| *h)
    }

    pub fn is_sunk(&self, kind: ShipKind) -> bool {
        self.get(kind) == Some(0)
    }

    /// `(ship, health)` pairs in fleet order.
    pub fn iter(&self) -> impl Iterator<Item = (ShipKind, usize)> + '_ {
        self.entries.iter().copied()
    }

    /// Take one point of health from `kind`, returning the health it had
    /// before the hit.
    fn damage(&mut self, kind: ShipKind) -> Option<usize> {
        let (_, health) = self.entries.iter_mut().find(|(k, _)| *k == kind)?;
        let before = *health;
        *health = before.saturating_sub(1);
        Some(before)
    }
}

/// Operator-facing facts about the active board. Not meant for the player:
/// `locations` gives away every ship.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    pub locations: Vec<ShipLocation>,
    pub failures: Vec<PlacementFailure>,
    pub mismatches: Vec<LengthMismatch>,
}

/// Borrowed read models handed to the presentation layer.
#[derive(Debug, Clone, Copy)]
pub struct GameView<'a> {
    pub grid: &'a Grid,
    pub status: GameStatus,
    pub ship_health: &'a ShipHealth,
}

/// A single-player game: one board, one guess budget.
///
/// All mutation goes through [`Game::start`], [`Game::start_with_board`] and
/// [`Game::make_guess`]. Hosts that share a `Game` between threads must
/// serialize those calls themselves.
#[derive(Debug, Clone)]
pub struct Game {
    config: GameConfig,
    generator: BoardGenerator,
    phase: Phase,
    grid: Grid,
    ship_health: ShipHealth,
    guesses_remaining: usize,
    ships_remaining: usize,
    diagnostics: Diagnostics,
}

impl Game {
    /// A game that has not been started yet.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        let generator = BoardGenerator::new(&config)?;
        Ok(Self {
            generator,
            phase: Phase::NotStarted,
            grid: Grid::empty(config.grid_size),
            ship_health: ShipHealth::full(&config.fleet),
            guesses_remaining: config.max_guesses,
            ships_remaining: config.fleet.len(),
            diagnostics: Diagnostics::default(),
            config,
        })
    }

    /// Discard any current game and start over on a freshly generated board.
    pub fn start<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<GameView<'_>, BoardError> {
        info!("Starting game");
        let generated = self.generator.generate(rng)?;
        self.adopt(generated.board, generated.failures, generated.mismatches)?;
        Ok(self.view())
    }

    /// Discard any current game and start over on `board`.
    ///
    /// Nothing is generated, so no placement failures are recorded; fleet
    /// members missing from `board` show up as validation mismatches with
    /// `actual: 0`.
    pub fn start_with_board(&mut self, board: Board) -> Result<GameView<'_>, BoardError> {
        info!("Starting game on a prepared board");
        let mismatches = board.validate(&self.config.fleet);
        for m in &mismatches {
            warn!("{}", m);
        }
        self.adopt(board, Vec::new(), mismatches)?;
        Ok(self.view())
    }

    fn adopt(
        &mut self,
        board: Board,
        failures: Vec<PlacementFailure>,
        mismatches: Vec<LengthMismatch>,
    ) -> Result<(), BoardError> {
        if board.size() != self.config.grid_size {
            return Err(BoardError::SizeMismatch {
                expected: self.config.grid_size,
                actual: board.size(),
            });
        }
        if let Some(p) = board
            .placements()
            .iter()
            .find(|p| !self.config.fleet.contains(&p.kind))
        {
            return Err(BoardError::NotInFleet(p.kind));
        }

        self.grid = Grid::from_board(&board);
        self.ship_health = ShipHealth::full(&self.config.fleet);
        self.guesses_remaining = self.config.max_guesses;
        self.ships_remaining = self.config.fleet.len();
        self.diagnostics = Diagnostics {
            locations: board.survey(),
            failures,
            mismatches,
        };
        self.phase = Phase::InProgress;
        Ok(())
    }

    /// Fire at (row, col).
    ///
    /// Only a guess on an unrevealed in-bounds cell of a running game has any
    /// effect; everything else comes back as [`GuessOutcome::Ignored`] and
    /// leaves the game untouched.
    pub fn make_guess(&mut self, row: usize, col: usize) -> GuessOutcome {
        match self.phase {
            Phase::NotStarted => return GuessOutcome::Ignored(IgnoredGuess::NotStarted),
            Phase::GameOver => return GuessOutcome::Ignored(IgnoredGuess::GameOver),
            Phase::InProgress => {}
        }
        match self.grid.reveal(row, col) {
            None => return GuessOutcome::Ignored(IgnoredGuess::OutOfBounds),
            Some(RevealState::Unknown) => {}
            Some(_) => return GuessOutcome::Ignored(IgnoredGuess::AlreadyRevealed),
        }

        let outcome = match self.grid.occupant(row, col) {
            None => {
                self.grid.set_reveal(row, col, RevealState::Miss);
                GuessOutcome::Miss
            }
            Some(kind) => {
                self.grid.set_reveal(row, col, RevealState::Hit);
                if self.ship_health.damage(kind) == Some(1) {
                    self.ships_remaining = self.ships_remaining.saturating_sub(1);
                    GuessOutcome::Sunk(kind)
                } else {
                    GuessOutcome::Hit(kind)
                }
            }
        };
        self.guesses_remaining = self.guesses_remaining.saturating_sub(1);
        debug!("Guess {} -> {:?}", Coord::new(row, col), outcome);

        if self.ships_remaining == 0 || self.guesses_remaining == 0 {
            self.phase = Phase::GameOver;
            info!(
                "Game over: {} ships remaining, {} guesses remaining",
                self.ships_remaining, self.guesses_remaining
            );
        }
        outcome
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn status(&self) -> GameStatus {
        GameStatus {
            started: self.phase != Phase::NotStarted,
            game_over: self.phase == Phase::GameOver,
            guesses_remaining: self.guesses_remaining,
            ships_remaining: self.ships_remaining,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn ship_health(&self) -> &ShipHealth {
        &self.ship_health
    }

    /// Ship locations, placement failures and validation mismatches of the
    /// active board.
    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Grid, status and ship health together.
    pub fn view(&self) -> GameView<'_> {
        GameView {
            grid: &self.grid,
            status: self.status(),
            ship_health: &self.ship_health,
        }
    }
}
