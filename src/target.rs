//! Hover tracking over pointer picks.

use crate::common::BoardCoordinate;

/// Cells whose highlight must change after a pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HoverChange {
    /// Previously hovered cell to restore to its default look.
    pub restore: Option<BoardCoordinate>,
    /// Newly hovered cell to highlight.
    pub hover: Option<BoardCoordinate>,
}

impl HoverChange {
    pub fn is_empty(&self) -> bool {
        self.restore.is_none() && self.hover.is_none()
    }
}

/// Remembers the cell under the pointer and diffs each new pick against it.
#[derive(Debug, Clone, Default)]
pub struct TargetResolver {
    current: Option<BoardCoordinate>,
}

impl TargetResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// The cell currently under the pointer.
    pub fn current(&self) -> Option<BoardCoordinate> {
        self.current
    }

    /// Record a new pick result and report what changed.
    pub fn update(&mut self, picked: Option<BoardCoordinate>) -> HoverChange {
        if picked == self.current {
            return HoverChange::default();
        }
        let restore = self.current.take();
        self.current = picked;
        HoverChange {
            restore,
            hover: picked,
        }
    }

    /// Drop the hovered cell, returning it so its highlight can be restored.
    pub fn clear(&mut self) -> Option<BoardCoordinate> {
        self.current.take()
    }
}
