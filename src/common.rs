//! Common types: board coordinates, shot outcomes and rejection reasons.

use core::fmt;

/// A discrete cell `(x, z)` on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct BoardCoordinate {
    pub x: usize,
    pub z: usize,
}

impl BoardCoordinate {
    pub const fn new(x: usize, z: usize) -> Self {
        Self { x, z }
    }

    /// `true` when both axes fall inside `[0, board_size)`.
    pub fn in_bounds(&self, board_size: usize) -> bool {
        self.x < board_size && self.z < board_size
    }
}

impl From<(usize, usize)> for BoardCoordinate {
    fn from((x, z): (usize, usize)) -> Self {
        Self::new(x, z)
    }
}

impl fmt::Display for BoardCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.z)
    }
}

/// Result of firing at a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShotOutcome {
    /// The cell is occupied by a ship.
    Hit,
    /// The cell is open water.
    Miss,
}

/// Reasons an input was refused. Callers absorb these and let the player retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejected {
    /// At least one ship cell falls outside the board.
    OutOfBounds,
    /// At least one ship cell is already locked.
    Overlap,
    /// The pointer did not resolve to a board cell.
    NoCellUnderPointer,
    /// All ships have been placed already.
    FleetComplete,
    /// A shot animation is still playing.
    ShotPending,
    /// The operation does not apply to the current phase.
    WrongPhase,
}

impl fmt::Display for Rejected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejected::OutOfBounds => write!(f, "Ship placement is out of bounds"),
            Rejected::Overlap => write!(f, "Ship placement overlaps a locked cell"),
            Rejected::NoCellUnderPointer => write!(f, "No board cell under the pointer"),
            Rejected::FleetComplete => write!(f, "All ships are already placed"),
            Rejected::ShotPending => write!(f, "Previous shot is still resolving"),
            Rejected::WrongPhase => write!(f, "Not available in the current phase"),
        }
    }
}
