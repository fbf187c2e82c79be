//! Board geometry and movement rules for Pentagrid.
//!
//! This crate is the pure half of the client: coordinates, seats, piece
//! kinds, direction codes, the 5×5 board, and the functions that map a
//! piece to its geometrically reachable cells. Nothing in here touches
//! the network or holds session state.
//!
//! # Key types
//!
//! - [`Cell`] — a (row, col) coordinate on the 5×5 grid
//! - [`Seat`] — which of the two players, with its board marker letter
//! - [`CharacterType`] — the seven piece kinds (five pawn ranks, two heroes)
//! - [`Direction`] — the eight-code move vocabulary (F/B/L/R and diagonals)
//! - [`Board`] — 5×5 grid of optional [`CellContent`]
//! - [`reachable_cells`] / [`direction_of`] — the movement geometry
//!
//! Reachability here is geometry only. Occupancy, blocking, and captures
//! are adjudicated by the remote authority; the client merely offers
//! candidate destinations.

mod board;
mod error;
mod moves;
mod types;

pub use board::Board;
pub use error::BoardError;
pub use moves::{direction_of, reachable_cells};
pub use types::{BOARD_SIZE, Cell, CellContent, CharacterType, Direction, Seat};
