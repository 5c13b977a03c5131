//! Ship definitions and orientation.

use crate::common::BoardCoordinate;

/// Axis along which a ship extends from its anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Cells extend along x.
    #[default]
    Horizontal,
    /// Cells extend along z.
    Vertical,
}

impl Orientation {
    /// Unit step `(dx, dz)` between consecutive ship cells.
    pub fn direction(self) -> (usize, usize) {
        match self {
            Orientation::Horizontal => (1, 0),
            Orientation::Vertical => (0, 1),
        }
    }

    /// The other orientation.
    pub fn toggled(self) -> Self {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }

    /// Cell `i` steps away from `anchor`.
    pub fn step(self, anchor: BoardCoordinate, i: usize) -> BoardCoordinate {
        let (dx, dz) = self.direction();
        BoardCoordinate::new(anchor.x + dx * i, anchor.z + dz * i)
    }
}

/// One ship of a fleet: its slot in placement order and its length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipSpec {
    name: &'static str,
    index: usize,
    length: usize,
}

impl ShipSpec {
    /// Ship at placement slot `index`. Length is always `index + 2`.
    pub const fn new(name: &'static str, index: usize) -> Self {
        Self {
            name,
            index,
            length: index + 2,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn length(&self) -> usize {
        self.length
    }
}
