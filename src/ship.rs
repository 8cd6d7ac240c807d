//! Fleet members, orientation and ship placements.

use core::fmt;

/// One of the five ship types that make up the fleet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShipKind {
    AircraftCarrier,
    Battleship,
    Submarine,
    Destroyer,
    PatrolBoat,
}

impl ShipKind {
    /// Number of cells the ship occupies.
    pub const fn length(self) -> usize {
        match self {
            ShipKind::AircraftCarrier => 5,
            ShipKind::Battleship => 4,
            ShipKind::Submarine => 3,
            ShipKind::Destroyer => 3,
            ShipKind::PatrolBoat => 2,
        }
    }

    /// Display name of the ship.
    pub const fn name(self) -> &'static str {
        match self {
            ShipKind::AircraftCarrier => "Aircraft Carrier",
            ShipKind::Battleship => "Battleship",
            ShipKind::Submarine => "Submarine",
            ShipKind::Destroyer => "Destroyer",
            ShipKind::PatrolBoat => "Patrol Boat",
        }
    }
}

impl fmt::Display for ShipKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// A grid coordinate, zero-based `(row, col)`.
///
/// Displays as a row letter followed by a one-based column, so `(0, 0)` is
/// `A1` and `(2, 6)` is `C7`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Parse a label such as `B7` (case-insensitive). Returns `None` for
    /// anything that is not a letter followed by a positive number.
    pub fn parse(label: &str) -> Option<Self> {
        let label = label.trim();
        let mut chars = label.chars();
        let row_ch = chars.next()?.to_ascii_uppercase();
        if !row_ch.is_ascii_uppercase() {
            return None;
        }
        let digits = chars.as_str();
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let col: usize = digits.parse().ok()?;
        if col == 0 {
            return None;
        }
        Some(Coord::new((row_ch as u8 - b'A') as usize, col - 1))
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match u8::try_from(self.row).ok().filter(|r| *r < 26) {
            Some(r) => write!(f, "{}{}", (b'A' + r) as char, self.col + 1),
            None => write!(f, "({}, {})", self.row, self.col),
        }
    }
}

/// Where a ship sits: its type, anchor cell and direction of extent.
///
/// The anchor is the top-left cell; the ship covers `kind.length()` cells
/// to the right (horizontal) or downward (vertical).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Placement {
    pub kind: ShipKind,
    pub orientation: Orientation,
    pub row: usize,
    pub col: usize,
}

impl Placement {
    pub const fn new(kind: ShipKind, orientation: Orientation, row: usize, col: usize) -> Self {
        Self {
            kind,
            orientation,
            row,
            col,
        }
    }

    /// Anchor cell.
    pub fn start(&self) -> Coord {
        Coord::new(self.row, self.col)
    }

    /// Last covered cell, or `None` if the ship would run past `usize::MAX`.
    pub fn checked_end(&self) -> Option<Coord> {
        let span = self.kind.length() - 1;
        match self.orientation {
            Orientation::Horizontal => Some(Coord::new(self.row, self.col.checked_add(span)?)),
            Orientation::Vertical => Some(Coord::new(self.row.checked_add(span)?, self.col)),
        }
    }

    /// Last covered cell, clamped at `usize::MAX`.
    pub fn end(&self) -> Coord {
        let span = self.kind.length() - 1;
        match self.orientation {
            Orientation::Horizontal => Coord::new(self.row, self.col.saturating_add(span)),
            Orientation::Vertical => Coord::new(self.row.saturating_add(span), self.col),
        }
    }

    /// True if every covered cell lies inside an `n×n` grid.
    pub fn fits(&self, n: usize) -> bool {
        self.checked_end().is_some_and(|end| end.row < n && end.col < n)
    }

    /// Covered cells from the anchor outward.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> {
        let Placement {
            orientation,
            row,
            col,
            ..
        } = *self;
        // Stops early instead of wrapping when the anchor is near `usize::MAX`.
        (0..self.kind.length()).map_while(move |i| match orientation {
            Orientation::Horizontal => Some((row, col.checked_add(i)?)),
            Orientation::Vertical => Some((row.checked_add(i)?, col)),
        })
    }
}
