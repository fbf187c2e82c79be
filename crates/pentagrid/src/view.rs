//! The rendering seam: the `BoardView` trait.

use pentagrid_board::{Cell, CharacterType, Seat};
use pentagrid_protocol::GameStateSnapshot;

/// The sole consumer of visual state.
///
/// The session emits pure data through these hooks; the view owns every
/// visual effect. That split keeps the interaction state machine fully
/// testable without any presentation environment — tests plug in a
/// recording view, the demo plugs in a terminal renderer.
///
/// Every method has a no-op default, so an implementation only overrides
/// what it actually renders.
pub trait BoardView: Send + 'static {
    /// Our seat was assigned (or re-assigned after a new game).
    fn seat_assigned(&mut self, _seat: Seat) {}

    /// Remote truth was replaced; redraw board, turn, and transcript.
    fn board_updated(&mut self, _snapshot: &GameStateSnapshot) {}

    /// The offered destination set changed (possibly to empty).
    fn highlights_changed(&mut self, _highlights: &[Cell]) {}

    /// A home-row click needs a piece choice before it can be recorded.
    /// Answer through [`PlayerInputSender::character`](crate::PlayerInputSender::character).
    fn character_requested(&mut self, _cell: Cell) {}

    /// A placement was recorded locally (the authority hasn't echoed a
    /// snapshot containing it yet).
    fn placement_recorded(&mut self, _cell: Cell, _seat: Seat, _kind: CharacterType) {}

    /// A non-fatal notice from the remote authority.
    fn notice(&mut self, _message: &str) {}

    /// The game ended; input is frozen until a new game starts.
    fn game_over(&mut self, _message: &str) {}
}
