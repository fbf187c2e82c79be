//! # Pentagrid
//!
//! Client-side core for the Pentagrid board game: the player-facing half
//! of a two-player, 5×5 grid strategy game whose rules are owned by a
//! remote authority.
//!
//! The crate drives three things:
//!
//! - the **placement phase** ([`PlacementController`]): collecting the
//!   five piece choices on the player's home row;
//! - the **play phase** ([`SelectionController`]): selecting an own piece,
//!   offering its geometrically reachable cells, and turning a confirmed
//!   target click into a move command;
//! - the **channel** ([`GameClient`]): one task that owns the WebSocket
//!   connection, dispatches inbound messages into the [`GameSession`],
//!   and transmits whatever the session decides to send.
//!
//! Rendering is behind the [`BoardView`] trait: the session emits state
//! and highlight data, and the view owns every visual effect. The core
//! never prunes moves authoritatively — the remote side may reject
//! anything it offered, and the session just surfaces the rejection.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use pentagrid::prelude::*;
//!
//! struct HeadlessView;
//! impl BoardView for HeadlessView {}
//!
//! # async fn run() -> Result<(), ClientError> {
//! let (client, input) =
//!     GameClient::connect("ws://localhost:8080", "Ada", HeadlessView).await?;
//! tokio::spawn(client.run());
//! input.click(Cell::new(4, 0));
//! input.character(CharacterType::P1);
//! # Ok(())
//! # }
//! ```

mod client;
mod error;
mod placement;
mod selection;
mod session;
mod store;
mod view;

pub use client::{GameClient, PlayerInput, PlayerInputSender};
pub use error::ClientError;
pub use placement::{
    PLACEMENT_SIZE, PlacementClick, PlacementController, PlacementPhase, PlacementUpdate,
};
pub use selection::{Selection, SelectionClick, SelectionController};
pub use session::GameSession;
pub use store::GameStateStore;
pub use view::BoardView;

/// One-stop imports for embedding the client.
pub mod prelude {
    pub use crate::{
        BoardView, ClientError, GameClient, GameSession, GameStateStore,
        PlacementController, PlayerInput, PlayerInputSender, Selection,
        SelectionController,
    };
    pub use pentagrid_board::{
        BOARD_SIZE, Board, Cell, CellContent, CharacterType, Direction, Seat,
    };
    pub use pentagrid_protocol::{
        ClientMessage, GamePhase, GameStateSnapshot, MoveCommand, ServerMessage,
    };
}
