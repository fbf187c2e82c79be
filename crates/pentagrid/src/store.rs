//! Local mirror of remote truth.

use pentagrid_board::{Board, Cell, CellContent, Seat};
use pentagrid_protocol::GameStateSnapshot;

/// Holds the current [`GameStateSnapshot`] and the local seat.
///
/// `replace` is the only snapshot mutator, and the session invokes it
/// exclusively on state-bearing inbound messages; replacement is
/// wholesale, last-writer-wins in delivery order. Nothing else in the
/// crate writes to the snapshot.
#[derive(Debug, Default)]
pub struct GameStateStore {
    snapshot: GameStateSnapshot,
    seat: Option<Seat>,
}

impl GameStateStore {
    /// An empty store: blank snapshot, no seat.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current snapshot.
    pub fn snapshot(&self) -> &GameStateSnapshot {
        &self.snapshot
    }

    /// The current board.
    pub fn board(&self) -> &Board {
        &self.snapshot.board
    }

    /// Our seat, once assigned.
    pub fn seat(&self) -> Option<Seat> {
        self.seat
    }

    /// Records the identity the authority assigned us.
    pub fn assign_seat(&mut self, seat: Seat) {
        self.seat = Some(seat);
    }

    /// Replaces the snapshot wholesale.
    pub fn replace(&mut self, snapshot: GameStateSnapshot) {
        self.snapshot = snapshot;
    }

    /// Clears snapshot and seat together, for a new game.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// The content at `cell` if it is a piece we own.
    pub fn own_piece_at(&self, cell: Cell) -> Option<CellContent> {
        let seat = self.seat?;
        self.snapshot
            .board
            .at(cell)
            .filter(|content| content.owner == seat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pentagrid_board::CharacterType;

    fn snapshot_with_piece(cell: Cell, content: CellContent) -> GameStateSnapshot {
        let mut snapshot = GameStateSnapshot::default();
        snapshot.board.set(cell, Some(content));
        snapshot
    }

    #[test]
    fn test_replace_swaps_the_whole_snapshot() {
        let mut store = GameStateStore::new();
        let cell = Cell::new(2, 2);
        store.replace(snapshot_with_piece(
            cell,
            CellContent::new(Seat::One, CharacterType::P1),
        ));
        assert!(store.board().at(cell).is_some());

        store.replace(GameStateSnapshot::default());
        assert!(store.board().at(cell).is_none());
    }

    #[test]
    fn test_replace_is_idempotent() {
        let mut store = GameStateStore::new();
        let snapshot = snapshot_with_piece(
            Cell::new(0, 0),
            CellContent::new(Seat::Two, CharacterType::H1),
        );
        store.replace(snapshot.clone());
        let first = store.snapshot().clone();
        store.replace(snapshot);
        assert_eq!(store.snapshot(), &first);
    }

    #[test]
    fn test_own_piece_requires_seat_and_ownership() {
        let mut store = GameStateStore::new();
        let cell = Cell::new(2, 2);
        store.replace(snapshot_with_piece(
            cell,
            CellContent::new(Seat::One, CharacterType::P1),
        ));

        // No seat assigned yet: nothing is ours.
        assert_eq!(store.own_piece_at(cell), None);

        store.assign_seat(Seat::One);
        assert!(store.own_piece_at(cell).is_some());

        store.assign_seat(Seat::Two);
        assert_eq!(store.own_piece_at(cell), None);
    }

    #[test]
    fn test_reset_clears_snapshot_and_seat_together() {
        let mut store = GameStateStore::new();
        store.assign_seat(Seat::One);
        store.replace(snapshot_with_piece(
            Cell::new(4, 4),
            CellContent::new(Seat::One, CharacterType::H2),
        ));

        store.reset();
        assert_eq!(store.seat(), None);
        assert_eq!(store.snapshot(), &GameStateSnapshot::default());
    }
}
