//! The placement-phase state machine.

use pentagrid_board::{Cell, CharacterType, Seat};

/// How many pieces each player places: one per home-row cell.
pub const PLACEMENT_SIZE: usize = 5;

/// Lifecycle of the placement phase.
///
/// ```text
/// AwaitingIdentity ──(seat assigned)──→ Placing(0..=4) ──(5th pick)──→ Complete
/// ```
///
/// Transitions only move rightward within one game; a new game resets to
/// `AwaitingIdentity`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PlacementPhase {
    /// No identity yet; board clicks mean nothing.
    #[default]
    AwaitingIdentity,
    /// Collecting picks. `placed` counts the recorded ones (0..=4).
    Placing { placed: u8 },
    /// All five picks recorded and announced. Further clicks are no-ops.
    Complete,
}

/// Outcome of a board click during placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementClick {
    /// Off the home row, wrong phase, or out of bounds. Nothing happened.
    Ignored,
    /// The click was accepted; a piece choice is now needed for this
    /// cell before anything is recorded.
    CharacterRequested(Cell),
}

/// Outcome of answering a character request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlacementUpdate {
    /// No request was pending, or the phase was wrong.
    Ignored,
    /// The pick was recorded; more are needed.
    Recorded { cell: Cell, kind: CharacterType },
    /// The fifth pick was recorded. `placement` is the full ordered set,
    /// yielded exactly once; the controller keeps nothing back.
    Complete {
        cell: Cell,
        kind: CharacterType,
        placement: Vec<CharacterType>,
    },
}

/// Drives the pre-game phase: exactly five piece choices, each anchored
/// to a click on the player's home row.
///
/// Instead of blocking on a modal prompt, an accepted click parks a
/// pending request ([`PlacementClick::CharacterRequested`]) and the
/// embedder answers it with [`provide`](Self::provide) or discards it
/// with [`cancel_request`](Self::cancel_request). A later home-row click
/// supersedes an unanswered request.
#[derive(Debug, Default)]
pub struct PlacementController {
    phase: PlacementPhase,
    seat: Option<Seat>,
    picks: Vec<CharacterType>,
    pending: Option<Cell>,
}

impl PlacementController {
    /// A controller waiting for an identity assignment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts (or restarts) placement for `seat`. Any earlier picks are
    /// discarded; this is what a `game_setup` message triggers.
    pub fn begin(&mut self, seat: Seat) {
        self.phase = PlacementPhase::Placing { placed: 0 };
        self.seat = Some(seat);
        self.picks.clear();
        self.pending = None;
    }

    /// Back to `AwaitingIdentity`, dropping everything.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// The current phase.
    pub fn phase(&self) -> PlacementPhase {
        self.phase
    }

    /// `true` once all five picks have been recorded and announced.
    pub fn is_complete(&self) -> bool {
        self.phase == PlacementPhase::Complete
    }

    /// The cell of the unanswered character request, if any.
    pub fn pending(&self) -> Option<Cell> {
        self.pending
    }

    /// Handles a board click.
    ///
    /// Accepted only while `Placing`, and only on the seat's home row.
    /// Everything else is a no-op: exploratory clicks are normal
    /// interaction, not errors.
    pub fn click(&mut self, cell: Cell) -> PlacementClick {
        let PlacementPhase::Placing { .. } = self.phase else {
            return PlacementClick::Ignored;
        };
        let Some(seat) = self.seat else {
            return PlacementClick::Ignored;
        };
        if !cell.in_bounds() || cell.row != seat.home_row() {
            return PlacementClick::Ignored;
        }
        // The newest click wins; a stale unanswered request is dropped.
        self.pending = Some(cell);
        PlacementClick::CharacterRequested(cell)
    }

    /// Answers the pending character request with a pick.
    ///
    /// The fifth answer transitions to `Complete` and yields the full
    /// placement set exactly once.
    pub fn provide(&mut self, kind: CharacterType) -> PlacementUpdate {
        let PlacementPhase::Placing { .. } = self.phase else {
            return PlacementUpdate::Ignored;
        };
        let Some(cell) = self.pending.take() else {
            return PlacementUpdate::Ignored;
        };

        self.picks.push(kind);
        if self.picks.len() == PLACEMENT_SIZE {
            self.phase = PlacementPhase::Complete;
            let placement = std::mem::take(&mut self.picks);
            tracing::debug!(?placement, "placement complete");
            PlacementUpdate::Complete {
                cell,
                kind,
                placement,
            }
        } else {
            self.phase = PlacementPhase::Placing {
                placed: self.picks.len() as u8,
            };
            PlacementUpdate::Recorded { cell, kind }
        }
    }

    /// Discards the pending character request, if any.
    pub fn cancel_request(&mut self) {
        self.pending = None;
    }
}
