use crate::board::OccupancyTracker;
use crate::common::{BoardCoordinate, ShotOutcome};

/// Decide whether a shot at `target` hits the opponent's fleet.
///
/// Locked cells are never removed, so firing at the same cell again yields
/// the same outcome.
pub fn resolve(target: BoardCoordinate, opponent_locked: &OccupancyTracker) -> ShotOutcome {
    if opponent_locked.contains(target) {
        ShotOutcome::Hit
    } else {
        ShotOutcome::Miss
    }
}
