#![allow(dead_code)]

use pirates_revenge::{
    BoardCoordinate, GamePhase, OccupancyTracker, Orientation, Placement, Player, Renderer,
};

/// Renderer that records every call so tests can assert on what was drawn.
#[derive(Default)]
pub struct Recorder {
    pub previews: Vec<(usize, Option<BoardCoordinate>, Orientation, bool)>,
    pub placed: Vec<Placement>,
    pub highlights: Vec<(BoardCoordinate, bool)>,
    pub hits: Vec<BoardCoordinate>,
    pub misses: Vec<BoardCoordinate>,
    pub countdown: Vec<f32>,
    pub countdown_hidden: usize,
    pub phases: Vec<(GamePhase, Player)>,
}

impl Renderer for Recorder {
    type Pointer = Option<BoardCoordinate>;

    fn pick_cell(&mut self, pointer: &Self::Pointer) -> Option<BoardCoordinate> {
        *pointer
    }

    fn render_preview(
        &mut self,
        ship_index: usize,
        anchor: Option<BoardCoordinate>,
        orientation: Orientation,
        valid: bool,
    ) {
        self.previews.push((ship_index, anchor, orientation, valid));
    }

    fn render_placed(&mut self, placement: &Placement) {
        self.placed.push(placement.clone());
    }

    fn render_highlight(&mut self, cell: BoardCoordinate, hovered: bool) {
        self.highlights.push((cell, hovered));
    }

    fn play_hit_animation(&mut self, cell: BoardCoordinate) {
        self.hits.push(cell);
    }

    fn play_miss_animation(&mut self, cell: BoardCoordinate) {
        self.misses.push(cell);
    }

    fn render_countdown(&mut self, fraction: f32) {
        self.countdown.push(fraction);
    }

    fn hide_countdown(&mut self) {
        self.countdown_hidden += 1;
    }

    fn render_phase(&mut self, phase: GamePhase, player: Player) {
        self.phases.push((phase, player));
    }
}

pub fn cell(x: usize, z: usize) -> Option<BoardCoordinate> {
    Some(BoardCoordinate::new(x, z))
}

/// Anchors that place the three ships as horizontal rows at the top-left.
pub const ROW_ANCHORS: [(usize, usize); 3] = [(0, 0), (0, 1), (0, 2)];

/// Tracker holding `cells`, with repeats locked once.
pub fn tracker_of(cells: impl IntoIterator<Item = BoardCoordinate>) -> OccupancyTracker {
    let mut tracker = OccupancyTracker::new();
    for cell in cells {
        if !tracker.contains(cell) {
            tracker.lock(&[cell]).unwrap();
        }
    }
    tracker
}
