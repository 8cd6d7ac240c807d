//! Ship layout of a single game: which cell belongs to which ship.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use crate::bitboard::BitBoard;
use crate::common::BoardError;
use crate::ship::{Coord, Placement, ShipKind};

type BB = BitBoard<u128>;

/// One maximal run of same-type cells found by [`Board::survey`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ShipLocation {
    pub kind: ShipKind,
    pub start: Coord,
    pub end: Coord,
    pub length: usize,
}

/// A ship whose counted cells disagree with its declared length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct LengthMismatch {
    pub kind: ShipKind,
    pub expected: usize,
    pub actual: usize,
}

impl fmt::Display for LengthMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship length validation failed for {}: expected {}, got {}",
            self.kind, self.expected, self.actual
        )
    }
}

/// Occupant layout of a square grid.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    occupied: BB,
    occupants: Vec<Option<ShipKind>>,
    placements: Vec<Placement>,
}

impl Board {
    /// Empty board of side `size`.
    pub fn new(size: usize) -> Result<Self, BoardError> {
        Ok(Board {
            size,
            occupied: BB::try_new(size)?,
            occupants: vec![None; size * size],
            placements: Vec::new(),
        })
    }

    /// Board with every placement committed in order.
    pub fn from_placements<I>(size: usize, placements: I) -> Result<Self, BoardError>
    where
        I: IntoIterator<Item = Placement>,
    {
        let mut board = Board::new(size)?;
        for p in placements {
            board.place(p)?;
        }
        Ok(board)
    }

    /// Side length of the grid.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Ships committed so far, in placement order.
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    /// Placement of `kind`, if it made it onto the board.
    pub fn placement_of(&self, kind: ShipKind) -> Option<&Placement> {
        self.placements.iter().find(|p| p.kind == kind)
    }

    /// Mask of every occupied cell.
    pub fn occupied(&self) -> BB {
        self.occupied
    }

    /// Ship occupying (row, col), or `None` for open water or out-of-range
    /// coordinates.
    pub fn occupant(&self, row: usize, col: usize) -> Option<ShipKind> {
        if row >= self.size || col >= self.size {
            return None;
        }
        self.occupants[row * self.size + col]
    }

    /// Check `placement` against bounds, overlap and the no-touching rule.
    pub fn check(&self, placement: &Placement) -> Result<(), BoardError> {
        let kind = placement.kind;
        if self.placement_of(kind).is_some() {
            return Err(BoardError::ShipAlreadyPlaced(kind));
        }
        if !placement.fits(self.size) {
            return Err(BoardError::ShipOutOfBounds(kind));
        }
        let mask = BB::from_cells(self.size, placement.cells())?;
        if !(mask & self.occupied).is_empty() {
            return Err(BoardError::ShipOverlaps(kind));
        }
        if !(mask.neighborhood() & self.occupied).is_empty() {
            return Err(BoardError::ShipTouches(kind));
        }
        Ok(())
    }

    /// True if `placement` could be committed.
    pub fn can_place(&self, placement: &Placement) -> bool {
        self.check(placement).is_ok()
    }

    /// Commit a ship to the board.
    pub fn place(&mut self, placement: Placement) -> Result<(), BoardError> {
        self.check(&placement)?;
        for (r, c) in placement.cells() {
            self.occupied.set(r, c)?;
            self.occupants[r * self.size + c] = Some(placement.kind);
        }
        self.placements.push(placement);
        Ok(())
    }

    /// Scan the grid row by row and report every run of same-type cells.
    ///
    /// A cell opens a run only if neither the cell above nor the cell to
    /// its left holds the same ship, so each straight ship is counted once.
    pub fn survey(&self) -> Vec<ShipLocation> {
        let mut found = Vec::new();
        for row in 0..self.size {
            for col in 0..self.size {
                let Some(kind) = self.occupant(row, col) else {
                    continue;
                };
                let above = row > 0 && self.occupant(row - 1, col) == Some(kind);
                let left = col > 0 && self.occupant(row, col - 1) == Some(kind);
                if above || left {
                    continue;
                }
                let across = (col..self.size)
                    .take_while(|&c| self.occupant(row, c) == Some(kind))
                    .count();
                let down = (row..self.size)
                    .take_while(|&r| self.occupant(r, col) == Some(kind))
                    .count();
                let (length, end) = if across > 1 || down == 1 {
                    (across, Coord::new(row, col + across - 1))
                } else {
                    (down, Coord::new(row + down - 1, col))
                };
                found.push(ShipLocation {
                    kind,
                    start: Coord::new(row, col),
                    end,
                    length,
                });
            }
        }
        found
    }

    /// Compare the surveyed cell count of each fleet member with its length.
    pub fn validate(&self, fleet: &[ShipKind]) -> Vec<LengthMismatch> {
        let survey = self.survey();
        fleet
            .iter()
            .filter_map(|&kind| {
                let actual: usize = survey
                    .iter()
                    .filter(|loc| loc.kind == kind)
                    .map(|loc| loc.length)
                    .sum();
                (actual != kind.length()).then_some(LengthMismatch {
                    kind,
                    expected: kind.length(),
                    actual,
                })
            })
            .collect()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Board {{\n  size: {},\n  placements: {:?},\n  occupied: {:?}\n}}",
            self.size, self.placements, self.occupied
        )
    }
}
