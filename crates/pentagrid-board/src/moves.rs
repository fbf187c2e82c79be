//! Movement geometry: reachable cells and direction codes.
//!
//! Pure functions over [`Cell`] and [`CharacterType`]. Reachability is
//! geometry intersected with board bounds, nothing more: occupancy and
//! blocking are the remote authority's concern.

use crate::{Cell, CharacterType, Direction};

/// The cells `kind` can geometrically reach from `origin`, filtered to
/// board bounds. Never contains `origin` itself.
///
/// Pawns step one cell orthogonally; H1 leaps exactly two orthogonally;
/// H2 leaps exactly two on both axes (diagonally).
pub fn reachable_cells(kind: CharacterType, origin: Cell) -> Vec<Cell> {
    kind.move_pattern()
        .iter()
        .filter_map(|&(dr, dc)| origin.offset(dr, dc))
        .collect()
}

/// Maps an (origin, target) pair to its direction code.
///
/// Defined for exactly the twelve deltas the movement rules produce:
/// ±1/±2 along one axis, or ±2/±2 diagonally. Anything else yields
/// `None`, and callers must refuse to build a move command from it.
pub fn direction_of(origin: Cell, target: Cell) -> Option<Direction> {
    let dr = target.row as i8 - origin.row as i8;
    let dc = target.col as i8 - origin.col as i8;
    match (dr, dc) {
        (-1, 0) | (-2, 0) => Some(Direction::F),
        (1, 0) | (2, 0) => Some(Direction::B),
        (0, -1) | (0, -2) => Some(Direction::L),
        (0, 1) | (0, 2) => Some(Direction::R),
        (-2, -2) => Some(Direction::FL),
        (-2, 2) => Some(Direction::FR),
        (2, -2) => Some(Direction::BL),
        (2, 2) => Some(Direction::BR),
        _ => None,
    }
}
