//! Core protocol types for Pentagrid's wire format.
//!
//! This module defines every structure that travels on the wire between
//! the client and the remote authority. The envelope shape is fixed by
//! the authority: `{ "type": <snake_case tag>, "data": <payload> }`,
//! which is serde's adjacently tagged representation.
//!
//! Snapshot field names are PascalCase because the authority is a Go
//! process using default struct-field marshaling (`Board`, `CurrentTurn`,
//! ...). The serde attributes below pin those shapes; the tests at the
//! bottom verify them byte-for-byte, because a mismatch means the
//! authority silently drops or rejects our messages.

use std::fmt;
use std::str::FromStr;

use pentagrid_board::{Board, CharacterType, Direction, Seat};
use serde::{Deserialize, Serialize};

use crate::ProtocolError;

// ---------------------------------------------------------------------------
// MoveCommand
// ---------------------------------------------------------------------------

/// A move order: which piece kind moves, and in which direction.
///
/// On the wire this is the compact string `"<kind>:<direction>"`
/// (e.g. `"P1:F"`), which is what the authority parses. The
/// `into`/`try_from` attributes route serde through that string form so
/// the rest of the client works with typed fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct MoveCommand {
    pub kind: CharacterType,
    pub direction: Direction,
}

impl MoveCommand {
    /// Creates a command moving `kind` toward `direction`.
    pub fn new(kind: CharacterType, direction: Direction) -> Self {
        Self { kind, direction }
    }
}

impl fmt::Display for MoveCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind, self.direction)
    }
}

impl From<MoveCommand> for String {
    fn from(cmd: MoveCommand) -> String {
        cmd.to_string()
    }
}

impl FromStr for MoveCommand {
    type Err = ProtocolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (kind, direction) = s.split_once(':').ok_or_else(|| {
            ProtocolError::InvalidMessage(format!("malformed move command: {s:?}"))
        })?;
        Ok(MoveCommand {
            kind: kind.parse().map_err(|e| {
                ProtocolError::InvalidMessage(format!("bad move command {s:?}: {e}"))
            })?,
            direction: direction.parse().map_err(|e| {
                ProtocolError::InvalidMessage(format!("bad move command {s:?}: {e}"))
            })?,
        })
    }
}

impl TryFrom<String> for MoveCommand {
    type Error = ProtocolError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

// ---------------------------------------------------------------------------
// GameStateSnapshot
// ---------------------------------------------------------------------------

/// The phase the remote game is in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GamePhase {
    /// Both players are still placing their pieces.
    #[default]
    Setup,
    /// The game is underway.
    Playing,
}

/// A full snapshot of remote truth, replaced wholesale on every
/// state-bearing inbound message.
///
/// `CurrentTurn` is the authority's 0-based turn index: 0 means seat one
/// moves, 1 means seat two. `MoveHistory` is absent on `game_start`
/// (serde fills the default); `Winner` stays empty until the game ends.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct GameStateSnapshot {
    pub board: Board,
    pub current_turn: u8,
    pub move_history: Vec<String>,
    pub winner: String,
    pub phase: GamePhase,
}

impl GameStateSnapshot {
    /// The seat whose turn it is.
    pub fn turn_seat(&self) -> Seat {
        if self.current_turn % 2 == 0 {
            Seat::One
        } else {
            Seat::Two
        }
    }

    /// The winner's name, once the game is over.
    pub fn winner(&self) -> Option<&str> {
        if self.winner.is_empty() {
            None
        } else {
            Some(&self.winner)
        }
    }
}

// ---------------------------------------------------------------------------
// ClientMessage — outbound
// ---------------------------------------------------------------------------

/// Messages the client sends to the authority.
///
/// `#[serde(tag = "type", content = "data")]` produces the adjacently
/// tagged envelope: `{ "type": "make_move", "data": "P1:F" }`. The unit
/// variant `NewGame` serializes with no `data` key at all, which is what
/// the authority expects for payload-free messages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum ClientMessage {
    /// Announce ourselves, once, on channel establishment.
    JoinGame {
        #[serde(rename = "playerName")]
        player_name: String,
    },

    /// The five placement choices, in click order, left to right.
    SetupDone(Vec<CharacterType>),

    /// A confirmed move for the authority to adjudicate.
    MakeMove(MoveCommand),

    /// Ask for a fresh game; a new `game_setup` follows.
    NewGame,
}

// ---------------------------------------------------------------------------
// ServerMessage — inbound
// ---------------------------------------------------------------------------

/// Messages the authority sends to the client.
///
/// Anything outside these five tags, or a payload that doesn't decode,
/// is a [`ProtocolError`] — never silently dropped. The dispatch layer
/// treats that as a poisoned channel and fails loudly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum ServerMessage {
    /// Identity assignment: which seat is ours. Resets placement.
    GameSetup(Seat),

    /// Both players joined; here is the opening state. No transcript yet.
    GameStart(GameStateSnapshot),

    /// A state update, transcript included.
    GameState(GameStateSnapshot),

    /// The authority rejected something. Non-fatal; surfaced to the player.
    Error(String),

    /// Terminal notice. Local input freezes until a new game starts.
    GameOver(String),
}

// =========================================================================
// Tests
// =========================================================================
