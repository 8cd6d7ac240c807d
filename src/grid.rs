//! Player-facing view of the board: what each cell has revealed so far.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use crate::board::Board;
use crate::ship::ShipKind;

/// What the player knows about a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum RevealState {
    #[default]
    Unknown,
    Hit,
    Miss,
}

impl RevealState {
    /// Single-character marker used when printing a grid.
    pub fn symbol(self) -> char {
        match self {
            RevealState::Unknown => '.',
            RevealState::Hit => 'X',
            RevealState::Miss => 'o',
        }
    }
}

/// A single grid cell. The occupant is fixed at placement time and only
/// readable once the cell has been hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cell {
    reveal: RevealState,
    occupant: Option<ShipKind>,
}

impl Cell {
    pub fn reveal(&self) -> RevealState {
        self.reveal
    }

    /// Ship in this cell, if a guess has already exposed it.
    pub fn revealed_ship(&self) -> Option<ShipKind> {
        match self.reveal {
            RevealState::Hit => self.occupant,
            _ => None,
        }
    }
}

/// Square matrix of cells addressed by zero-based `(row, col)`.
#[derive(Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Unrevealed grid with no ships.
    pub fn empty(size: usize) -> Self {
        Grid {
            size,
            cells: vec![Cell::default(); size * size],
        }
    }

    /// Unrevealed grid carrying the occupants of `board`.
    pub fn from_board(board: &Board) -> Self {
        let size = board.size();
        let cells = (0..size * size)
            .map(|i| Cell {
                reveal: RevealState::Unknown,
                occupant: board.occupant(i / size, i % size),
            })
            .collect();
        Grid { size, cells }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Cell at (row, col), or `None` outside the grid.
    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        if row >= self.size || col >= self.size {
            return None;
        }
        self.cells.get(row * self.size + col)
    }

    /// Reveal state at (row, col), or `None` outside the grid.
    pub fn reveal(&self, row: usize, col: usize) -> Option<RevealState> {
        self.cell(row, col).map(Cell::reveal)
    }

    /// Rows of cells, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.size.max(1))
    }

    /// Number of cells in `state`.
    pub fn count(&self, state: RevealState) -> usize {
        self.cells.iter().filter(|c| c.reveal == state).count()
    }

    /// Number of `Hit` cells belonging to `kind`.
    pub fn hits_on(&self, kind: ShipKind) -> usize {
        self.cells
            .iter()
            .filter(|c| c.revealed_ship() == Some(kind))
            .count()
    }

    pub(crate) fn occupant(&self, row: usize, col: usize) -> Option<ShipKind> {
        self.cell(row, col).and_then(|c| c.occupant)
    }

    pub(crate) fn set_reveal(&mut self, row: usize, col: usize, state: RevealState) {
        if let Some(cell) = self.cells.get_mut(row * self.size + col) {
            cell.reveal = state;
        }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   ")?;
        for c in 0..self.size {
            write!(f, "{:>3}", c + 1)?;
        }
        for (r, row) in self.rows().enumerate() {
            writeln!(f)?;
            let label = u8::try_from(r)
                .ok()
                .filter(|r| *r < 26)
                .map(|r| (b'A' + r) as char)
                .unwrap_or('?');
            write!(f, " {} ", label)?;
            for cell in row {
                write!(f, "{:>3}", cell.reveal.symbol())?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grid {}x{}:", self.size, self.size)?;
        fmt::Display::fmt(self, f)
    }
}
