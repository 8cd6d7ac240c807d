//! Common types: board errors and guess outcomes.

use core::fmt;

use crate::bitboard::BitBoardError;
use crate::ship::ShipKind;

/// Result of a call to [`Game::make_guess`](crate::Game::make_guess).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GuessOutcome {
    /// Guess revealed open water.
    Miss,
    /// Guess hit a ship that still has unhit cells.
    Hit(ShipKind),
    /// Guess hit the last unhit cell of a ship.
    Sunk(ShipKind),
    /// Guess had no effect on the game.
    Ignored(IgnoredGuess),
}

impl GuessOutcome {
    /// True if the guess changed game state.
    pub fn counted(&self) -> bool {
        !matches!(self, GuessOutcome::Ignored(_))
    }
}

/// Why a guess left the game untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum IgnoredGuess {
    /// No board has been adopted yet.
    NotStarted,
    /// The game already ended.
    GameOver,
    /// Coordinate lies outside the grid.
    OutOfBounds,
    /// Cell was revealed by an earlier guess.
    AlreadyRevealed,
}

/// Errors returned by board setup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Underlying bitboard error (e.g., invalid size or index).
    BitBoardError(BitBoardError),
    /// Attempted to place a ship type that is already on the board.
    ShipAlreadyPlaced(ShipKind),
    /// Ship would extend past the edge of the grid.
    ShipOutOfBounds(ShipKind),
    /// Ship would share a cell with another ship.
    ShipOverlaps(ShipKind),
    /// Ship would touch another ship, diagonals included.
    ShipTouches(ShipKind),
    /// Board side differs from the configured grid size.
    SizeMismatch { expected: usize, actual: usize },
    /// Board carries a ship type the configured fleet does not list.
    NotInFleet(ShipKind),
}

impl From<BitBoardError> for BoardError {
    fn from(err: BitBoardError) -> Self {
        BoardError::BitBoardError(err)
    }
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::BitBoardError(e) => write!(f, "BitBoard error: {}", e),
            BoardError::ShipAlreadyPlaced(k) => write!(f, "{} is already placed on the board", k),
            BoardError::ShipOutOfBounds(k) => write!(f, "{} placement is out of bounds", k),
            BoardError::ShipOverlaps(k) => write!(f, "{} placement overlaps another ship", k),
            BoardError::ShipTouches(k) => write!(f, "{} placement touches another ship", k),
            BoardError::SizeMismatch { expected, actual } => {
                write!(f, "Board size {} does not match grid size {}", actual, expected)
            }
            BoardError::NotInFleet(k) => write!(f, "{} is not part of the fleet", k),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
