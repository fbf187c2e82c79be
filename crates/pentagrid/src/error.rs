//! Unified error type for the client crate.

use pentagrid_protocol::ProtocolError;
use pentagrid_transport::TransportError;

/// Top-level error that wraps the layer-specific errors.
///
/// Only unrecoverable failures surface here: a poisoned message channel
/// (protocol) or a broken connection (transport). Rejections from the
/// remote authority arrive as ordinary `error` messages and are routed
/// to the view, never through this type; invalid local clicks are silent
/// no-ops inside the controllers.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// A transport-level error (connect, send, recv).
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// A protocol-level error (encode, decode, unrecognized message).
    #[error(transparent)]
    Protocol(#[from] ProtocolError),
}
