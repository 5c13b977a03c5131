//! Interactive and randomized fleet placement.

use alloc::vec::Vec;
use log::{debug, info};
use rand::Rng;

use crate::board::{validate, OccupancyTracker};
use crate::common::{BoardCoordinate, Rejected};
use crate::config::{ship_at, NUM_SHIPS};
use crate::ship::{Orientation, ShipSpec};

/// A validated ship pose.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Placement {
    pub ship_index: usize,
    pub anchor: BoardCoordinate,
    pub orientation: Orientation,
    pub cells: Vec<BoardCoordinate>,
}

/// Places one player's fleet, one ship at a time in index order.
#[derive(Debug, Clone)]
pub struct PlacementEngine {
    ship_index: usize,
    orientation: Orientation,
    locked: OccupancyTracker,
    board_size: usize,
}

impl PlacementEngine {
    /// Start a fresh placement with no ships locked.
    pub fn new(board_size: usize) -> Self {
        Self {
            ship_index: 0,
            orientation: Orientation::default(),
            locked: OccupancyTracker::new(),
            board_size,
        }
    }

    /// Index of the next ship to place; `NUM_SHIPS` once the fleet is done.
    pub fn ship_index(&self) -> usize {
        self.ship_index
    }

    /// The ship being placed, or `None` when the engine is inert.
    pub fn current_ship(&self) -> Option<ShipSpec> {
        ship_at(self.ship_index)
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn locked(&self) -> &OccupancyTracker {
        &self.locked
    }

    pub fn into_locked(self) -> OccupancyTracker {
        self.locked
    }

    pub fn is_complete(&self) -> bool {
        self.ship_index >= NUM_SHIPS
    }

    /// Validate the current ship at `anchor` without committing it.
    pub fn preview_at(
        &self,
        anchor: BoardCoordinate,
        orientation: Orientation,
    ) -> Result<Placement, Rejected> {
        let ship = self.current_ship().ok_or(Rejected::FleetComplete)?;
        let cells = validate(anchor, orientation, ship.length(), &self.locked, self.board_size)?;
        Ok(Placement {
            ship_index: ship.index(),
            anchor,
            orientation,
            cells,
        })
    }

    /// Validate and commit the current ship, then move on to the next one.
    /// A rejected placement leaves the engine untouched.
    pub fn confirm_placement(
        &mut self,
        anchor: BoardCoordinate,
        orientation: Orientation,
    ) -> Result<Placement, Rejected> {
        let placement = self.preview_at(anchor, orientation)?;
        self.commit(&placement)?;
        Ok(placement)
    }

    /// Place every remaining ship at a uniformly random anchor and
    /// orientation, retrying each ship until a valid pose comes up.
    pub fn place_all_random<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Vec<Placement> {
        let mut placed = Vec::new();
        while !self.is_complete() {
            let placement = loop {
                let anchor = BoardCoordinate::new(
                    rng.random_range(0..self.board_size),
                    rng.random_range(0..self.board_size),
                );
                let orientation = if rng.random() {
                    Orientation::Horizontal
                } else {
                    Orientation::Vertical
                };
                if let Ok(p) = self.preview_at(anchor, orientation) {
                    break p;
                }
            };
            if self.commit(&placement).is_ok() {
                placed.push(placement);
            }
        }
        info!("Randomly placed {} ship(s)", placed.len());
        placed
    }

    /// Flip the orientation used for the next preview or confirm.
    pub fn toggle_orientation(&mut self) -> Orientation {
        self.orientation = self.orientation.toggled();
        self.orientation
    }

    fn commit(&mut self, placement: &Placement) -> Result<(), Rejected> {
        self.locked.lock(&placement.cells)?;
        self.ship_index += 1;
        debug!(
            "Placed ship {} at {} {:?}",
            placement.ship_index, placement.anchor, placement.orientation
        );
        Ok(())
    }
}
