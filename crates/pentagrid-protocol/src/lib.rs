//! Wire protocol for Pentagrid.
//!
//! This crate defines the language the client and the remote authority
//! speak:
//!
//! - **Types** ([`ClientMessage`], [`ServerMessage`], [`GameStateSnapshot`],
//!   [`MoveCommand`]) — the message structures that travel on the wire.
//! - **Codec** ([`Codec`] trait, [`JsonCodec`]) — how those messages are
//!   converted to/from bytes.
//! - **Errors** ([`ProtocolError`]) — what can go wrong during
//!   encoding/decoding.
//!
//! # Architecture
//!
//! The protocol layer sits between transport (raw bytes) and the game
//! session (local state). It doesn't know about connections or turns —
//! it only knows how to serialize and deserialize messages.
//!
//! ```text
//! Transport (bytes) → Protocol (messages) → Session (client state)
//! ```
//!
//! # Wire format
//!
//! Every message is a JSON envelope `{ "type": <tag>, "data": <payload> }`
//! with snake_case tags, matching what the remote authority emits and
//! expects. A message with no payload (`new_game`) omits the `data` key.

mod codec;
mod error;
mod types;

pub use codec::Codec;
#[cfg(feature = "json")]
pub use codec::JsonCodec;
pub use error::ProtocolError;
pub use types::{ClientMessage, GamePhase, GameStateSnapshot, MoveCommand, ServerMessage};
