//! Connection manager: the single task that owns the channel.
//!
//! [`GameClient`] ties the layers together: transport (frames) →
//! protocol (messages) → session (state). One `tokio::select!` loop
//! handles both inbound frames and player input, so every state
//! transition runs to completion on one task and events are processed
//! strictly in arrival order.

use pentagrid_board::{Cell, CharacterType};
use pentagrid_protocol::{ClientMessage, Codec, JsonCodec, ServerMessage};
use pentagrid_transport::{Connection, WebSocketConnection};
use tokio::sync::mpsc;

use crate::{BoardView, ClientError, GameSession};

/// One player interaction, queued into the client loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerInput {
    /// A click on a board cell.
    Click(Cell),
    /// The answer to a pending placement request.
    Character(CharacterType),
    /// Ask the authority for a fresh game.
    NewGame,
}

/// Cheap-clone handle for feeding [`PlayerInput`] into a running client.
///
/// Sends are fire-and-forget. Once the client loop has ended (connection
/// closed or failed), input is silently dropped — there is nothing left
/// to act on it, and no reconnection is attempted.
#[derive(Debug, Clone)]
pub struct PlayerInputSender {
    tx: mpsc::UnboundedSender<PlayerInput>,
}

impl PlayerInputSender {
    /// Queues a board click.
    pub fn click(&self, cell: Cell) {
        self.send(PlayerInput::Click(cell));
    }

    /// Queues a placement answer.
    pub fn character(&self, kind: CharacterType) {
        self.send(PlayerInput::Character(kind));
    }

    /// Queues a new-game request.
    pub fn new_game(&self) {
        self.send(PlayerInput::NewGame);
    }

    fn send(&self, input: PlayerInput) {
        if self.tx.send(input).is_err() {
            tracing::debug!(?input, "client loop gone; input dropped");
        }
    }
}

/// A connected game client.
///
/// Create one with [`connect`](Self::connect), then drive it with
/// [`run`](Self::run) (usually in a spawned task) while the UI feeds
/// interactions through the returned [`PlayerInputSender`].
pub struct GameClient<V: BoardView> {
    conn: WebSocketConnection,
    codec: JsonCodec,
    session: GameSession<V>,
    input_rx: mpsc::UnboundedReceiver<PlayerInput>,
    input_open: bool,
}

impl<V: BoardView> GameClient<V> {
    /// Dials the authority at `url` and announces `player_name` with a
    /// `join_game` message.
    pub async fn connect(
        url: &str,
        player_name: &str,
        view: V,
    ) -> Result<(Self, PlayerInputSender), ClientError> {
        let conn = WebSocketConnection::connect(url).await?;
        let codec = JsonCodec;

        let join = ClientMessage::JoinGame {
            player_name: player_name.to_string(),
        };
        conn.send(&codec.encode(&join)?).await?;
        tracing::info!(player_name, id = %conn.id(), "join requested");

        let (tx, input_rx) = mpsc::unbounded_channel();
        let client = Self {
            conn,
            codec,
            session: GameSession::new(view),
            input_rx,
            input_open: true,
        };
        Ok((client, PlayerInputSender { tx }))
    }

    /// The session, for inspection before the loop starts.
    pub fn session(&self) -> &GameSession<V> {
        &self.session
    }

    /// Runs the event loop until the connection ends.
    ///
    /// Returns `Ok(())` on a clean remote close. A decode failure —
    /// malformed JSON or an unrecognized message type — ends the loop
    /// with [`ClientError::Protocol`]: the channel is presumed unusable
    /// and the failure must not be swallowed.
    pub async fn run(mut self) -> Result<(), ClientError> {
        loop {
            tokio::select! {
                frame = self.conn.recv() => match frame {
                    Ok(Some(data)) => {
                        let msg: ServerMessage = self.codec.decode(&data)?;
                        self.session.on_message(msg);
                    }
                    Ok(None) => {
                        tracing::info!(id = %self.conn.id(), "connection closed by remote");
                        return Ok(());
                    }
                    Err(e) => {
                        tracing::warn!(id = %self.conn.id(), error = %e, "receive failed");
                        return Err(e.into());
                    }
                },
                input = self.input_rx.recv(), if self.input_open => match input {
                    Some(input) => self.handle_input(input).await?,
                    // All senders dropped; keep serving inbound frames.
                    None => self.input_open = false,
                },
            }
        }
    }

    async fn handle_input(&mut self, input: PlayerInput) -> Result<(), ClientError> {
        let outbound = match input {
            PlayerInput::Click(cell) => self.session.on_click(cell),
            PlayerInput::Character(kind) => self.session.provide_character(kind),
            PlayerInput::NewGame => Some(self.session.request_new_game()),
        };

        if let Some(msg) = outbound {
            tracing::debug!(?msg, "sending");
            self.conn.send(&self.codec.encode(&msg)?).await?;
        }
        Ok(())
    }
}
