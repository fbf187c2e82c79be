//! The pure dispatcher tying store, controllers, and view together.

use pentagrid_board::{Cell, CharacterType};
use pentagrid_protocol::{ClientMessage, ServerMessage};

use crate::{
    BoardView, GameStateStore, PlacementClick, PlacementController, PlacementUpdate,
    SelectionClick, SelectionController,
};

/// The client-side interaction state machine, with the network stripped
/// away.
///
/// Inbound messages go through [`on_message`](Self::on_message); player
/// interaction through [`on_click`](Self::on_click),
/// [`provide_character`](Self::provide_character), and
/// [`request_new_game`](Self::request_new_game), which return the
/// messages to transmit (if any). Everything is synchronous and runs to
/// completion, so a session driven from a single task processes events
/// strictly in arrival order.
///
/// [`GameClient`](crate::GameClient) wraps a session in exactly such a
/// task; tests drive one directly.
pub struct GameSession<V: BoardView> {
    store: GameStateStore,
    placement: PlacementController,
    selection: SelectionController,
    view: V,
    /// Set by `game_over`; cleared by a new-game request. While set,
    /// placement and selection input is ignored.
    frozen: bool,
}

impl<V: BoardView> GameSession<V> {
    /// A fresh session rendering into `view`.
    pub fn new(view: V) -> Self {
        Self {
            store: GameStateStore::new(),
            placement: PlacementController::new(),
            selection: SelectionController::new(),
            view,
            frozen: false,
        }
    }

    /// The local mirror of remote truth.
    pub fn store(&self) -> &GameStateStore {
        &self.store
    }

    /// The destinations currently offered.
    pub fn highlights(&self) -> &[Cell] {
        self.selection.highlights()
    }

    /// `true` between a `game_over` notice and the next new-game request.
    pub fn is_frozen(&self) -> bool {
        self.frozen
    }

    /// The view, for embedders that need to poke at their renderer.
    pub fn view(&self) -> &V {
        &self.view
    }

    /// Mutable access to the view.
    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// Dispatches one inbound message. Every arm ends with a view
    /// notification, so the renderer never lags remote truth.
    pub fn on_message(&mut self, msg: ServerMessage) {
        match msg {
            ServerMessage::GameSetup(seat) => {
                tracing::info!(%seat, "identity assigned");
                self.store.assign_seat(seat);
                self.placement.begin(seat);
                self.selection.clear();
                self.frozen = false;
                self.view.seat_assigned(seat);
                self.view.highlights_changed(&[]);
            }
            ServerMessage::GameStart(snapshot) => {
                self.store.replace(snapshot);
                self.view.board_updated(self.store.snapshot());
            }
            ServerMessage::GameState(snapshot) => {
                self.store.replace(snapshot);
                self.view.board_updated(self.store.snapshot());
            }
            ServerMessage::Error(text) => {
                // A rejection from the authority. Local state stays as
                // it is; the player just gets told.
                tracing::debug!(%text, "authority rejected an action");
                self.view.notice(&text);
            }
            ServerMessage::GameOver(text) => {
                tracing::info!(%text, "game over");
                self.frozen = true;
                self.view.game_over(&text);
            }
        }
    }

    /// Handles a board click, routed by phase: placement first, then
    /// selection once placement is complete. Returns the message to
    /// transmit, if the click produced one.
    pub fn on_click(&mut self, cell: Cell) -> Option<ClientMessage> {
        if self.frozen {
            tracing::trace!(%cell, "input frozen; click dropped");
            return None;
        }
        let seat = self.store.seat()?;

        if !self.placement.is_complete() {
            match self.placement.click(cell) {
                PlacementClick::CharacterRequested(cell) => {
                    self.view.character_requested(cell);
                }
                PlacementClick::Ignored => {}
            }
            return None;
        }

        match self.selection.click(cell, self.store.board(), seat) {
            SelectionClick::Selected(_) => {
                self.view.highlights_changed(self.selection.highlights());
                None
            }
            SelectionClick::MoveReady(cmd) => {
                self.view.highlights_changed(&[]);
                Some(ClientMessage::MakeMove(cmd))
            }
            SelectionClick::Ignored => None,
        }
    }

    /// Answers a pending placement request. The fifth answer yields the
    /// `setup_done` message.
    pub fn provide_character(&mut self, kind: CharacterType) -> Option<ClientMessage> {
        if self.frozen {
            return None;
        }
        let seat = self.store.seat()?;

        match self.placement.provide(kind) {
            PlacementUpdate::Recorded { cell, kind } => {
                self.view.placement_recorded(cell, seat, kind);
                None
            }
            PlacementUpdate::Complete {
                cell,
                kind,
                placement,
            } => {
                self.view.placement_recorded(cell, seat, kind);
                Some(ClientMessage::SetupDone(placement))
            }
            PlacementUpdate::Ignored => None,
        }
    }

    /// Resets everything local as one operation and yields the
    /// `new_game` message. Input stays dead until a fresh `game_setup`
    /// arrives, because placement is back to awaiting an identity.
    pub fn request_new_game(&mut self) -> ClientMessage {
        self.store.reset();
        self.placement.reset();
        self.selection.clear();
        self.frozen = false;
        self.view.highlights_changed(&[]);
        self.view.board_updated(self.store.snapshot());
        ClientMessage::NewGame
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pentagrid_board::{Board, CellContent, Direction, Seat};
    use pentagrid_protocol::{GameStateSnapshot, MoveCommand};

    /// A view double that records every notification.
    #[derive(Debug, Default)]
    struct RecordingView {
        seats: Vec<Seat>,
        boards: usize,
        highlights: Vec<Vec<Cell>>,
        requests: Vec<Cell>,
        placements: Vec<(Cell, Seat, CharacterType)>,
        notices: Vec<String>,
        game_overs: Vec<String>,
    }

    impl BoardView for RecordingView {
        fn seat_assigned(&mut self, seat: Seat) {
            self.seats.push(seat);
        }
        fn board_updated(&mut self, _snapshot: &GameStateSnapshot) {
            self.boards += 1;
        }
        fn highlights_changed(&mut self, highlights: &[Cell]) {
            self.highlights.push(highlights.to_vec());
        }
        fn character_requested(&mut self, cell: Cell) {
            self.requests.push(cell);
        }
        fn placement_recorded(&mut self, cell: Cell, seat: Seat, kind: CharacterType) {
            self.placements.push((cell, seat, kind));
        }
        fn notice(&mut self, message: &str) {
            self.notices.push(message.to_string());
        }
        fn game_over(&mut self, message: &str) {
            self.game_overs.push(message.to_string());
        }
    }

    fn session() -> GameSession<RecordingView> {
        GameSession::new(RecordingView::default())
    }

    fn snapshot_with(pieces: &[(Cell, Seat, CharacterType)]) -> GameStateSnapshot {
        let mut board = Board::empty();
        for &(cell, seat, kind) in pieces {
            board.set(cell, Some(CellContent::new(seat, kind)));
        }
        GameStateSnapshot {
            board,
            ..GameStateSnapshot::default()
        }
    }

    /// Runs the full placement flow for seat one with the given picks.
    fn complete_placement(
        session: &mut GameSession<RecordingView>,
        picks: [CharacterType; 5],
    ) -> Option<ClientMessage> {
        let mut last = None;
        for (col, kind) in picks.into_iter().enumerate() {
            assert_eq!(session.on_click(Cell::new(4, col)), None);
            last = session.provide_character(kind);
        }
        last
    }

    // ---------------------------------------------------------------
    // Placement (scenario: five clicks on the home row, then setup_done
    // with the picks in click order)
    // ---------------------------------------------------------------

    #[test]
    fn test_placement_flow_emits_setup_done_once() {
        let mut session = session();
        session.on_message(ServerMessage::GameSetup(Seat::One));

        let picks = [
            CharacterType::P1,
            CharacterType::P2,
            CharacterType::P3,
            CharacterType::H1,
            CharacterType::H2,
        ];
        let done = complete_placement(&mut session, picks);
        assert_eq!(done, Some(ClientMessage::SetupDone(picks.to_vec())));

        // The view saw the request and the recording for each pick.
        assert_eq!(session.view().requests.len(), 5);
        assert_eq!(session.view().placements.len(), 5);
        assert_eq!(
            session.view().placements[0],
            (Cell::new(4, 0), Seat::One, CharacterType::P1),
        );

        // Further home-row clicks produce nothing: completion is final.
        assert_eq!(session.on_click(Cell::new(4, 0)), None);
        assert_eq!(session.provide_character(CharacterType::P1), None);
    }

    #[test]
    fn test_clicks_before_identity_do_nothing() {
        let mut session = session();
        assert_eq!(session.on_click(Cell::new(4, 0)), None);
        assert!(session.view().requests.is_empty());
    }

    #[test]
    fn test_off_home_row_clicks_request_nothing() {
        let mut session = session();
        session.on_message(ServerMessage::GameSetup(Seat::One));
        assert_eq!(session.on_click(Cell::new(0, 0)), None);
        assert_eq!(session.on_click(Cell::new(2, 2)), None);
        assert!(session.view().requests.is_empty());
    }

    // ---------------------------------------------------------------
    // Selection (scenario: own pawn at (2,2); clicking it highlights the
    // four neighbors; clicking (1,2) sends "P1:F")
    // ---------------------------------------------------------------

    fn playing_session(
        pieces: &[(Cell, Seat, CharacterType)],
    ) -> GameSession<RecordingView> {
        let mut session = session();
        session.on_message(ServerMessage::GameSetup(Seat::One));
        complete_placement(&mut session, [CharacterType::P1; 5]);
        session.on_message(ServerMessage::GameStart(snapshot_with(pieces)));
        session
    }

    #[test]
    fn test_select_then_confirm_sends_pawn_move() {
        let mut session =
            playing_session(&[(Cell::new(2, 2), Seat::One, CharacterType::P1)]);

        assert_eq!(session.on_click(Cell::new(2, 2)), None);
        assert_eq!(
            session.highlights(),
            &[
                Cell::new(1, 2),
                Cell::new(3, 2),
                Cell::new(2, 1),
                Cell::new(2, 3),
            ],
        );

        let msg = session.on_click(Cell::new(1, 2));
        assert_eq!(
            msg,
            Some(ClientMessage::MakeMove(MoveCommand::new(
                CharacterType::P1,
                Direction::F,
            ))),
        );
        assert!(session.highlights().is_empty());
        // The view saw the highlight set appear and then clear.
        let shown = &session.view().highlights;
        assert_eq!(shown[shown.len() - 2].len(), 4);
        assert!(shown.last().unwrap().is_empty());
    }

    #[test]
    fn test_h1_leap_sends_single_code() {
        let mut session =
            playing_session(&[(Cell::new(2, 2), Seat::One, CharacterType::H1)]);

        session.on_click(Cell::new(2, 2));
        let msg = session.on_click(Cell::new(2, 0));
        assert_eq!(
            msg,
            Some(ClientMessage::MakeMove(MoveCommand::new(
                CharacterType::H1,
                Direction::L,
            ))),
        );
    }

    // ---------------------------------------------------------------
    // Rejection (scenario: inbound error while selected leaves the
    // selection alone)
    // ---------------------------------------------------------------

    #[test]
    fn test_authority_rejection_leaves_selection_untouched() {
        let mut session =
            playing_session(&[(Cell::new(2, 2), Seat::One, CharacterType::P1)]);
        session.on_click(Cell::new(2, 2));
        let highlights_before = session.highlights().to_vec();

        session.on_message(ServerMessage::Error("Invalid move".into()));

        assert_eq!(session.view().notices, vec!["Invalid move"]);
        assert_eq!(session.highlights(), highlights_before.as_slice());
    }

    // ---------------------------------------------------------------
    // Game over (scenario: input frozen until new_game + fresh setup)
    // ---------------------------------------------------------------

    #[test]
    fn test_game_over_freezes_input_until_new_game_cycle() {
        let mut session =
            playing_session(&[(Cell::new(2, 2), Seat::One, CharacterType::P1)]);

        session.on_message(ServerMessage::GameOver("Player 1 wins".into()));
        assert_eq!(session.view().game_overs, vec!["Player 1 wins"]);
        assert!(session.is_frozen());

        // Clicks and character answers are dead.
        assert_eq!(session.on_click(Cell::new(2, 2)), None);
        assert_eq!(session.provide_character(CharacterType::P1), None);
        assert!(session.highlights().is_empty());

        // new_game resets local state and unfreezes, but clicks remain
        // meaningless until a fresh identity arrives.
        assert_eq!(session.request_new_game(), ClientMessage::NewGame);
        assert!(!session.is_frozen());
        assert_eq!(session.store().seat(), None);
        assert_eq!(session.on_click(Cell::new(4, 0)), None);

        // Fresh game_setup restarts the placement phase.
        session.on_message(ServerMessage::GameSetup(Seat::Two));
        assert_eq!(session.on_click(Cell::new(0, 0)), None);
        assert_eq!(session.view().requests.last(), Some(&Cell::new(0, 0)));
    }

    // ---------------------------------------------------------------
    // Store replacement
    // ---------------------------------------------------------------

    #[test]
    fn test_same_snapshot_twice_renders_identically() {
        let mut session =
            playing_session(&[(Cell::new(2, 2), Seat::One, CharacterType::P1)]);
        let snapshot = snapshot_with(&[(Cell::new(1, 2), Seat::One, CharacterType::P1)]);

        session.on_message(ServerMessage::GameState(snapshot.clone()));
        let first = session.store().snapshot().clone();
        session.on_message(ServerMessage::GameState(snapshot));
        assert_eq!(session.store().snapshot(), &first);

        // Each delivery still notified the view; no merging or skipping.
        assert!(session.view().boards >= 3);
    }

    #[test]
    fn test_game_setup_resets_a_stale_selection() {
        let mut session =
            playing_session(&[(Cell::new(2, 2), Seat::One, CharacterType::P1)]);
        session.on_click(Cell::new(2, 2));
        assert!(!session.highlights().is_empty());

        session.on_message(ServerMessage::GameSetup(Seat::One));
        assert!(session.highlights().is_empty());
        // Placement restarted; the next home-row click asks for a piece.
        assert_eq!(session.on_click(Cell::new(4, 1)), None);
        assert_eq!(session.view().requests.last(), Some(&Cell::new(4, 1)));
    }
}
