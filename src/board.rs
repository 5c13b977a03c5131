//! Locked-cell tracking and placement validation.

use alloc::vec::Vec;

use crate::bitboard::CellMask;
use crate::common::{BoardCoordinate, Rejected};
use crate::config::MAX_BOARD_SIZE;
use crate::ship::Orientation;

type Mask = CellMask<u64, MAX_BOARD_SIZE>;

/// The cells occupied by one player's placed ships, in placement order.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct OccupancyTracker {
    cells: Vec<BoardCoordinate>,
    mask: Mask,
}

impl OccupancyTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, cell: BoardCoordinate) -> bool {
        self.mask.contains(cell)
    }

    /// Lock every cell in `cells`. Either all are inserted or none: a cell
    /// that is already locked, repeated, or beyond the mask is refused.
    pub fn lock(&mut self, cells: &[BoardCoordinate]) -> Result<(), Rejected> {
        let incoming = Mask::from_cells(cells).map_err(|_| Rejected::OutOfBounds)?;
        if incoming.count() != cells.len() || !(self.mask & incoming).is_empty() {
            return Err(Rejected::Overlap);
        }
        self.mask |= incoming;
        self.cells.extend_from_slice(cells);
        Ok(())
    }

    pub fn clear(&mut self) {
        self.cells.clear();
        self.mask.clear();
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Locked cells in the order they were inserted.
    pub fn cells(&self) -> &[BoardCoordinate] {
        &self.cells
    }

    pub fn iter(&self) -> impl Iterator<Item = BoardCoordinate> + '_ {
        self.cells.iter().copied()
    }
}

impl core::fmt::Debug for OccupancyTracker {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("OccupancyTracker")
            .field("cells", &self.cells)
            .finish()
    }
}

/// Compute the cells of a ship of `length` anchored at `anchor`.
///
/// Cell `i` is `anchor + i * direction(orientation)`; the anchor itself is
/// cell 0. Fails with [`Rejected::OutOfBounds`] if any cell leaves
/// `[0, board_size)` on either axis, or [`Rejected::Overlap`] if any cell is
/// already in `locked`. Pure: safe for previews as well as commits.
pub fn validate(
    anchor: BoardCoordinate,
    orientation: Orientation,
    length: usize,
    locked: &OccupancyTracker,
    board_size: usize,
) -> Result<Vec<BoardCoordinate>, Rejected> {
    let mut cells = Vec::with_capacity(length);
    for i in 0..length {
        let cell = orientation.step(anchor, i);
        if !cell.in_bounds(board_size) {
            return Err(Rejected::OutOfBounds);
        }
        if locked.contains(cell) {
            return Err(Rejected::Overlap);
        }
        cells.push(cell);
    }
    Ok(cells)
}
