//! The in-game selection state machine.

use pentagrid_board::{Board, Cell, CharacterType, Seat, direction_of, reachable_cells};
use pentagrid_protocol::MoveCommand;

/// The currently selected piece: where it sits and what it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub origin: Cell,
    pub kind: CharacterType,
}

/// Outcome of a board click during the play phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionClick {
    /// Not an own piece and not an offered destination. Nothing happened;
    /// any existing selection persists.
    Ignored,
    /// An own piece was selected (possibly superseding another); the
    /// highlight set was recomputed.
    Selected(Selection),
    /// A highlighted destination was confirmed. The selection and
    /// highlights are already cleared; the command is ready to transmit.
    MoveReady(MoveCommand),
}

/// Tracks the selected piece and the destinations offered for it.
///
/// `Idle → Selected → Idle`; selecting a different own piece re-enters
/// `Selected` for the new origin. The highlight set is always exactly
/// the geometric reach of the current selection, and empty when nothing
/// is selected. Whether a highlighted destination is actually legal is
/// the remote authority's call — a rejection comes back as an `error`
/// message and leaves local state untouched.
#[derive(Debug, Default)]
pub struct SelectionController {
    selection: Option<Selection>,
    highlights: Vec<Cell>,
}

impl SelectionController {
    /// An idle controller with nothing selected.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current selection, if any.
    pub fn selection(&self) -> Option<Selection> {
        self.selection
    }

    /// The destinations currently offered. Empty while idle.
    pub fn highlights(&self) -> &[Cell] {
        &self.highlights
    }

    /// Drops the selection and its highlights.
    pub fn clear(&mut self) {
        self.selection = None;
        self.highlights.clear();
    }

    /// Handles a board click for `seat` against the current `board`.
    pub fn click(&mut self, cell: Cell, board: &Board, seat: Seat) -> SelectionClick {
        // An own piece always (re)selects, even while another piece is
        // selected or the clicked cell is currently highlighted.
        if let Some(content) = board.at(cell) {
            if content.owner == seat {
                let selection = Selection {
                    origin: cell,
                    kind: content.kind,
                };
                self.selection = Some(selection);
                self.highlights = reachable_cells(content.kind, cell);
                tracing::debug!(kind = %content.kind, %cell, "piece selected");
                return SelectionClick::Selected(selection);
            }
        }

        if let Some(selection) = self.selection {
            if self.highlights.contains(&cell) {
                return match direction_of(selection.origin, cell) {
                    Some(direction) => {
                        self.clear();
                        SelectionClick::MoveReady(MoveCommand::new(
                            selection.kind,
                            direction,
                        ))
                    }
                    // Highlights come from the same geometry as the
                    // direction table, so this arm is unreachable in
                    // practice; refuse rather than send garbage.
                    None => {
                        tracing::warn!(
                            origin = %selection.origin,
                            target = %cell,
                            "no direction code for offered cell; refusing move"
                        );
                        SelectionClick::Ignored
                    }
                };
            }
        }

        SelectionClick::Ignored
    }
}
