//! Error type for board-level parsing.

/// Errors that can occur when interpreting board data from the wire.
///
/// These show up while decoding snapshots: a seat number outside 1/2,
/// an occupant marker that is neither letter nor digit form, a piece
/// code outside the seven known kinds, or a cell token that doesn't
/// split into `<marker>-<kind>`.
#[derive(Debug, thiserror::Error)]
pub enum BoardError {
    /// A seat number that isn't 1 or 2.
    #[error("invalid seat number: {0}")]
    InvalidSeat(u8),

    /// An occupant marker that maps to neither seat.
    #[error("invalid seat marker: {0:?}")]
    InvalidMarker(char),

    /// A piece code outside P1–P5 / H1 / H2.
    #[error("invalid character type: {0:?}")]
    InvalidCharacter(String),

    /// A direction code outside the eight-symbol vocabulary.
    #[error("invalid direction code: {0:?}")]
    InvalidDirection(String),

    /// A cell token that doesn't have the `<marker>-<kind>` shape.
    #[error("invalid cell token: {0:?}")]
    InvalidToken(String),
}
