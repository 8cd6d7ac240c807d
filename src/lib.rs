#![cfg_attr(not(feature = "std"), no_std)]

//! Single-player battleship engine: random fleet placement under a
//! no-touching rule and a guess resolver with a fixed guess budget.

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod bitboard;
mod board;
mod common;
mod config;
mod game;
mod generator;
mod grid;
#[cfg(feature = "std")]
mod logging;
mod ship;

pub use bitboard::{BitBoard, BitBoardError, SetBits};
pub use board::{Board, LengthMismatch, ShipLocation};
pub use common::{BoardError, GuessOutcome, IgnoredGuess};
pub use config::*;
pub use game::{Diagnostics, Game, GameStatus, GameView, Phase, ShipHealth};
pub use generator::{BoardGenerator, Generated, PlacementFailure};
pub use grid::{Cell, Grid, RevealState};
#[cfg(feature = "std")]
pub use logging::{init_logging, init_logging_with, LOG_ENV};
pub use ship::{Coord, Orientation, Placement, ShipKind};
