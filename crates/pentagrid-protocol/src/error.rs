//! Error types for the protocol layer.
//!
//! Each crate in the workspace defines its own error enum; a
//! `ProtocolError` always means the problem is in the message layer,
//! not in networking or session state.

/// Errors that can occur in the protocol layer.
///
/// A decode failure covers both malformed JSON and an unrecognized
/// `type` tag — the channel is presumed poisoned either way, and the
/// dispatch layer surfaces the failure instead of swallowing it.
#[derive(Debug, thiserror::Error)]
pub enum ProtocolError {
    /// Serialization failed (turning a message into bytes).
    #[cfg(feature = "json")]
    #[error("encode failed: {0}")]
    Encode(serde_json::Error),

    /// Deserialization failed: malformed payload or unknown message type.
    #[cfg(feature = "json")]
    #[error("decode failed: {0}")]
    Decode(serde_json::Error),

    /// The message decoded but violates protocol rules, e.g. a move
    /// command string that doesn't split into kind and direction.
    #[error("invalid message: {0}")]
    InvalidMessage(String),
}
