//! The 5×5 board grid.

use serde::{Deserialize, Serialize};

use crate::{BOARD_SIZE, BoardError, Cell, CellContent, Seat};

/// The wire form of a board: a row-major 5×5 array of tokens, where the
/// empty string means an unoccupied cell.
type BoardWire = [[String; BOARD_SIZE]; BOARD_SIZE];

/// A row-major 5×5 grid of optional [`CellContent`].
///
/// The board is a value, not an entity: snapshots from the authority
/// replace it wholesale, and equality is structural. Local code never
/// derives rule decisions from it beyond "is this my piece".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "BoardWire", try_from = "BoardWire")]
pub struct Board {
    cells: [[Option<CellContent>; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// An empty board.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The content at `cell`, or `None` if empty or out of bounds.
    pub fn at(&self, cell: Cell) -> Option<CellContent> {
        if cell.in_bounds() {
            self.cells[cell.row][cell.col]
        } else {
            None
        }
    }

    /// Sets the content at `cell`. Out-of-bounds cells are ignored.
    pub fn set(&mut self, cell: Cell, content: Option<CellContent>) {
        if cell.in_bounds() {
            self.cells[cell.row][cell.col] = content;
        }
    }

    /// `true` if `cell` holds a piece owned by `seat`.
    pub fn is_own_piece(&self, cell: Cell, seat: Seat) -> bool {
        self.at(cell).is_some_and(|content| content.owner == seat)
    }

    /// Iterates over all occupied cells in row-major order.
    pub fn occupied(&self) -> impl Iterator<Item = (Cell, CellContent)> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, cols)| {
            cols.iter().enumerate().filter_map(move |(col, content)| {
                content.map(|c| (Cell::new(row, col), c))
            })
        })
    }
}

impl From<Board> for BoardWire {
    fn from(board: Board) -> BoardWire {
        board.cells.map(|row| {
            row.map(|content| {
                content.map(CellContent::token).unwrap_or_default()
            })
        })
    }
}

impl TryFrom<BoardWire> for Board {
    type Error = BoardError;

    fn try_from(wire: BoardWire) -> Result<Board, BoardError> {
        let mut board = Board::empty();
        for (row, tokens) in wire.iter().enumerate() {
            for (col, token) in tokens.iter().enumerate() {
                if !token.is_empty() {
                    board.cells[row][col] = Some(token.parse()?);
                }
            }
        }
        Ok(board)
    }
}
