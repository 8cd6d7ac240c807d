use alloc::vec::Vec;
use core::fmt;

use crate::bitboard::BitBoard;
use crate::ship::ShipKind;

pub const GRID_SIZE: usize = 10;
pub const MAX_GUESSES: usize = 50;
pub const PLACEMENT_ATTEMPTS: usize = 100;
pub const NUM_SHIPS: usize = 5;
pub const FLEET: [ShipKind; NUM_SHIPS] = [
    ShipKind::AircraftCarrier,
    ShipKind::Battleship,
    ShipKind::Submarine,
    ShipKind::Destroyer,
    ShipKind::PatrolBoat,
];

/// Total number of ship segments in the standard fleet.
pub const TOTAL_SHIP_CELLS: usize = 5 + 4 + 3 + 3 + 2;

/// Reasons a [`GameConfig`] cannot be used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Grid side of zero.
    EmptyGrid,
    /// Grid needs more cells than the occupancy mask can hold.
    GridTooLarge { size: usize, capacity: usize },
    /// No guesses allowed.
    NoGuesses,
    /// Placement retry budget of zero.
    NoAttempts,
    /// Fleet has no ships.
    EmptyFleet,
    /// The same ship type is listed more than once.
    DuplicateShip(ShipKind),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EmptyGrid => write!(f, "Grid size must be at least 1"),
            ConfigError::GridTooLarge { size, capacity } => write!(
                f,
                "Grid of {0}x{0} needs {1} cells but at most {2} are supported",
                size,
                size * size,
                capacity
            ),
            ConfigError::NoGuesses => write!(f, "Guess budget must be at least 1"),
            ConfigError::NoAttempts => write!(f, "Placement attempt budget must be at least 1"),
            ConfigError::EmptyFleet => write!(f, "Fleet must contain at least one ship"),
            ConfigError::DuplicateShip(kind) => write!(f, "{} is listed more than once", kind),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

/// Grid dimension, guess budget, placement retry budget and fleet of a game.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    pub grid_size: usize,
    pub max_guesses: usize,
    pub placement_attempts: usize,
    pub fleet: Vec<ShipKind>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: GRID_SIZE,
            max_guesses: MAX_GUESSES,
            placement_attempts: PLACEMENT_ATTEMPTS,
            fleet: FLEET.to_vec(),
        }
    }
}

impl GameConfig {
    pub fn with_grid_size(mut self, grid_size: usize) -> Self {
        self.grid_size = grid_size;
        self
    }

    pub fn with_max_guesses(mut self, max_guesses: usize) -> Self {
        self.max_guesses = max_guesses;
        self
    }

    pub fn with_placement_attempts(mut self, attempts: usize) -> Self {
        self.placement_attempts = attempts;
        self
    }

    pub fn with_fleet<I: IntoIterator<Item = ShipKind>>(mut self, fleet: I) -> Self {
        self.fleet = fleet.into_iter().collect();
        self
    }

    /// Check that a game can be played with these settings.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_size == 0 {
            return Err(ConfigError::EmptyGrid);
        }
        let capacity = BitBoard::<u128>::capacity();
        if self.grid_size.saturating_mul(self.grid_size) > capacity {
            return Err(ConfigError::GridTooLarge {
                size: self.grid_size,
                capacity,
            });
        }
        if self.max_guesses == 0 {
            return Err(ConfigError::NoGuesses);
        }
        if self.placement_attempts == 0 {
            return Err(ConfigError::NoAttempts);
        }
        if self.fleet.is_empty() {
            return Err(ConfigError::EmptyFleet);
        }
        for (i, kind) in self.fleet.iter().enumerate() {
            if self.fleet[..i].contains(kind) {
                return Err(ConfigError::DuplicateShip(*kind));
            }
        }
        Ok(())
    }

    /// Fleet sorted largest ship first, ties kept in fleet order.
    pub fn placement_order(&self) -> Vec<ShipKind> {
        let mut order = self.fleet.clone();
        order.sort_by(|a, b| b.length().cmp(&a.length()));
        order
    }
}
