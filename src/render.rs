use crate::common::BoardCoordinate;
use crate::game::{GamePhase, Player};
use crate::placement::Placement;
use crate::ship::Orientation;

/// Interface implemented by whatever draws the game.
///
/// The renderer owns no game state. It answers pick queries and receives
/// read-only coordinates and flags describing what to show.
pub trait Renderer {
    /// Raw pointer input understood by [`pick_cell`](Self::pick_cell).
    type Pointer;

    /// The board cell under the pointer on the active player's board, if any.
    fn pick_cell(&mut self, pointer: &Self::Pointer) -> Option<BoardCoordinate>;

    /// Show the ship being placed at `anchor`, or hide it when `valid` is false.
    fn render_preview(
        &mut self,
        ship_index: usize,
        anchor: Option<BoardCoordinate>,
        orientation: Orientation,
        valid: bool,
    );

    /// Switch a ship from its preview look to its placed look.
    fn render_placed(&mut self, _placement: &Placement) {}

    /// Toggle the hover highlight of a cell.
    fn render_highlight(&mut self, cell: BoardCoordinate, hovered: bool);

    fn play_hit_animation(&mut self, cell: BoardCoordinate);

    fn play_miss_animation(&mut self, cell: BoardCoordinate);

    /// Update the placement progress bar.
    fn render_countdown(&mut self, _fraction: f32) {}

    fn hide_countdown(&mut self) {}

    /// Announce a phase change or a change of turn.
    fn render_phase(&mut self, _phase: GamePhase, _player: Player) {}
}
