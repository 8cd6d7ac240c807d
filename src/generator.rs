//! Random fleet placement under the no-touching rule.

use alloc::vec::Vec;
use core::fmt;

use log::{debug, warn};
use rand::Rng;

use crate::board::{Board, LengthMismatch};
use crate::common::BoardError;
use crate::config::{ConfigError, GameConfig};
use crate::ship::{Orientation, Placement, ShipKind};

/// A ship that found no valid position within its retry budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct PlacementFailure {
    pub kind: ShipKind,
    pub attempts: usize,
}

impl fmt::Display for PlacementFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Failed to place {} after {} attempts", self.kind, self.attempts)
    }
}

/// Output of [`BoardGenerator::generate`].
#[derive(Debug, Clone)]
pub struct Generated {
    pub board: Board,
    /// Ships left off the board, in placement order.
    pub failures: Vec<PlacementFailure>,
    /// Integrity problems found by the post-placement survey.
    pub mismatches: Vec<LengthMismatch>,
}

impl Generated {
    /// True when every fleet member was placed and the survey agrees.
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty() && self.mismatches.is_empty()
    }
}

/// Places a fleet at random, largest ship first.
#[derive(Debug, Clone)]
pub struct BoardGenerator {
    grid_size: usize,
    attempts: usize,
    fleet: Vec<ShipKind>,
    order: Vec<ShipKind>,
}

impl BoardGenerator {
    pub fn new(config: &GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            grid_size: config.grid_size,
            attempts: config.placement_attempts,
            fleet: config.fleet.clone(),
            order: config.placement_order(),
        })
    }

    /// Build a fresh board from `rng`.
    ///
    /// Each attempt draws an orientation, then an anchor row and column, all
    /// uniform over the grid. A ship that exhausts its budget is skipped and
    /// reported; ships already placed stay where they are.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Generated, BoardError> {
        let mut board = Board::new(self.grid_size)?;
        let mut failures = Vec::new();

        for &kind in &self.order {
            match self.random_placement(&board, rng, kind) {
                Some(placement) => {
                    board.place(placement)?;
                    debug!(
                        "Placed {} {:?} from {} to {}",
                        kind,
                        placement.orientation,
                        placement.start(),
                        placement.end()
                    );
                }
                None => {
                    let failure = PlacementFailure {
                        kind,
                        attempts: self.attempts,
                    };
                    warn!("{}", failure);
                    failures.push(failure);
                }
            }
        }

        for loc in board.survey() {
            debug!("{} at {}-{} (length {})", loc.kind, loc.start, loc.end, loc.length);
        }
        let mismatches = board.validate(&self.fleet);
        for m in &mismatches {
            warn!("{}", m);
        }

        Ok(Generated {
            board,
            failures,
            mismatches,
        })
    }

    /// First valid random position for `kind` within the retry budget.
    pub fn random_placement<R: Rng + ?Sized>(
        &self,
        board: &Board,
        rng: &mut R,
        kind: ShipKind,
    ) -> Option<Placement> {
        (0..self.attempts).find_map(|_| {
            let orientation = if rng.random::<bool>() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            let row = rng.random_range(0..self.grid_size);
            let col = rng.random_range(0..self.grid_size);
            let placement = Placement::new(kind, orientation, row, col);
            board.can_place(&placement).then_some(placement)
        })
    }
}
