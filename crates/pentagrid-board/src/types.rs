//! Core board vocabulary: cells, seats, piece kinds, direction codes.
//!
//! These are the types that appear both in local state and on the wire,
//! so their serde forms are pinned to what the remote authority sends:
//! seats travel as the numbers `1`/`2`, piece kinds as their code strings
//! (`"P1"`, `"H2"`, ...), and cell occupants as `"<marker>-<kind>"`
//! tokens where the marker is the seat's letter.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::BoardError;

/// Side length of the board. The grid is `BOARD_SIZE × BOARD_SIZE`.
pub const BOARD_SIZE: usize = 5;

// ---------------------------------------------------------------------------
// Seat
// ---------------------------------------------------------------------------

/// One of the two player seats.
///
/// A seat has two wire encodings, and both are real:
///
/// - the identity assignment (`game_setup`) carries the **number** 1 or 2;
/// - board occupant tokens from the authority carry the **marker letter**
///   `A` or `B` as their first character.
///
/// Historically the two encodings were compared ad hoc at different call
/// sites. Here there is exactly one conversion point, [`Seat::from_marker`],
/// and it accepts both forms (`'1'`/`'A'` and `'2'`/`'B'`), so a snapshot
/// produced by either convention parses to the same seat.
///
/// `#[serde(into = "u8", try_from = "u8")]` makes the seat serialize as a
/// plain number, which is what `game_setup` carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Seat {
    /// Seat 1, marker `A`, home row 4 (bottom edge).
    One,
    /// Seat 2, marker `B`, home row 0 (top edge).
    Two,
}

impl Seat {
    /// The numeric form used by identity assignment.
    pub fn number(self) -> u8 {
        match self {
            Seat::One => 1,
            Seat::Two => 2,
        }
    }

    /// The marker letter the authority uses in board tokens.
    pub fn marker(self) -> char {
        match self {
            Seat::One => 'A',
            Seat::Two => 'B',
        }
    }

    /// The row this seat places its pieces on during setup.
    ///
    /// The asymmetry is intentional: the seats place on opposite edges.
    pub fn home_row(self) -> usize {
        match self {
            Seat::One => 4,
            Seat::Two => 0,
        }
    }

    /// The other seat.
    pub fn opponent(self) -> Seat {
        match self {
            Seat::One => Seat::Two,
            Seat::Two => Seat::One,
        }
    }

    /// Parses an occupant marker. This is the single place where the
    /// letter and digit conventions meet; both are accepted.
    pub fn from_marker(c: char) -> Result<Seat, BoardError> {
        match c {
            'A' | '1' => Ok(Seat::One),
            'B' | '2' => Ok(Seat::Two),
            other => Err(BoardError::InvalidMarker(other)),
        }
    }
}

impl From<Seat> for u8 {
    fn from(seat: Seat) -> u8 {
        seat.number()
    }
}

impl TryFrom<u8> for Seat {
    type Error = BoardError;

    fn try_from(n: u8) -> Result<Seat, BoardError> {
        match n {
            1 => Ok(Seat::One),
            2 => Ok(Seat::Two),
            other => Err(BoardError::InvalidSeat(other)),
        }
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "player {}", self.number())
    }
}

// ---------------------------------------------------------------------------
// CharacterType
// ---------------------------------------------------------------------------

/// The seven piece kinds: five interchangeable pawn ranks and two heroes.
///
/// The pawn ranks share one movement rule (orthogonal single step); the
/// heroes each have their own (orthogonal double leap, diagonal double
/// leap). Movement lives in [`move_pattern`](CharacterType::move_pattern)
/// as a per-variant offset table, so adding a rank means adding a variant
/// and one table row, not editing scattered match arms.
///
/// The serde form is the variant name itself (`"P1"`, `"H2"`, ...), which
/// is exactly the wire token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CharacterType {
    P1,
    P2,
    P3,
    P4,
    P5,
    H1,
    H2,
}

/// Orthogonal single step (pawns).
const ORTHO_STEP: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Orthogonal double leap (H1). No intermediate-cell check: blocking is
/// the authority's call, not geometry's.
const ORTHO_LEAP: [(i8, i8); 4] = [(-2, 0), (2, 0), (0, -2), (0, 2)];

/// Diagonal double leap (H2).
const DIAG_LEAP: [(i8, i8); 4] = [(-2, -2), (-2, 2), (2, -2), (2, 2)];

impl CharacterType {
    /// All kinds, in rank order.
    pub const ALL: [CharacterType; 7] = [
        CharacterType::P1,
        CharacterType::P2,
        CharacterType::P3,
        CharacterType::P4,
        CharacterType::P5,
        CharacterType::H1,
        CharacterType::H2,
    ];

    /// The wire code for this kind.
    pub fn code(self) -> &'static str {
        match self {
            CharacterType::P1 => "P1",
            CharacterType::P2 => "P2",
            CharacterType::P3 => "P3",
            CharacterType::P4 => "P4",
            CharacterType::P5 => "P5",
            CharacterType::H1 => "H1",
            CharacterType::H2 => "H2",
        }
    }

    /// `true` for the five pawn ranks.
    pub fn is_pawn(self) -> bool {
        matches!(
            self,
            CharacterType::P1
                | CharacterType::P2
                | CharacterType::P3
                | CharacterType::P4
                | CharacterType::P5
        )
    }

    /// The (Δrow, Δcol) offsets this kind can move by.
    ///
    /// This is the strategy table behind [`crate::reachable_cells`].
    pub fn move_pattern(self) -> &'static [(i8, i8)] {
        match self {
            kind if kind.is_pawn() => &ORTHO_STEP,
            CharacterType::H1 => &ORTHO_LEAP,
            _ => &DIAG_LEAP,
        }
    }
}

impl fmt::Display for CharacterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for CharacterType {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CharacterType::ALL
            .into_iter()
            .find(|kind| kind.code() == s)
            .ok_or_else(|| BoardError::InvalidCharacter(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Direction
// ---------------------------------------------------------------------------

/// The eight-code move vocabulary used in outbound move commands.
///
/// The sense is grid-absolute: `F` always points toward row 0, for both
/// seats. That is what the authority's move arithmetic expects, so a
/// seat-relative reading would desynchronize one of the two players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Toward row 0.
    F,
    /// Toward row 4.
    B,
    /// Toward column 0.
    L,
    /// Toward column 4.
    R,
    /// Diagonal toward (0, 0).
    FL,
    /// Diagonal toward (0, 4).
    FR,
    /// Diagonal toward (4, 0).
    BL,
    /// Diagonal toward (4, 4).
    BR,
}

impl Direction {
    /// The wire code for this direction.
    pub fn code(self) -> &'static str {
        match self {
            Direction::F => "F",
            Direction::B => "B",
            Direction::L => "L",
            Direction::R => "R",
            Direction::FL => "FL",
            Direction::FR => "FR",
            Direction::BL => "BL",
            Direction::BR => "BR",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Direction {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "F" => Ok(Direction::F),
            "B" => Ok(Direction::B),
            "L" => Ok(Direction::L),
            "R" => Ok(Direction::R),
            "FL" => Ok(Direction::FL),
            "FR" => Ok(Direction::FR),
            "BL" => Ok(Direction::BL),
            "BR" => Ok(Direction::BR),
            other => Err(BoardError::InvalidDirection(other.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Cell
// ---------------------------------------------------------------------------

/// A coordinate on the board. Row 0 is the top edge, column 0 the left.
///
/// Constructed coordinates are not range-checked; the board is small and
/// callers index it through [`Cell::offset`] or bounds-checked lookups.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    /// Creates a cell at (row, col).
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// `true` if this cell lies on the 5×5 grid.
    pub fn in_bounds(self) -> bool {
        self.row < BOARD_SIZE && self.col < BOARD_SIZE
    }

    /// The cell at (row + dr, col + dc), or `None` if that leaves the board.
    pub fn offset(self, dr: i8, dc: i8) -> Option<Cell> {
        let row = self.row as i16 + dr as i16;
        let col = self.col as i16 + dc as i16;
        let bound = BOARD_SIZE as i16;
        if (0..bound).contains(&row) && (0..bound).contains(&col) {
            Some(Cell::new(row as usize, col as usize))
        } else {
            None
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

// ---------------------------------------------------------------------------
// CellContent
// ---------------------------------------------------------------------------

/// An occupied cell: which seat owns the piece and what kind it is.
///
/// On the wire this is the token `"<marker>-<kind>"`, e.g. `"A-P1"`.
/// The empty string (an unoccupied cell) is handled one level up, in
/// [`Board`](crate::Board) serialization, so this type is never empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct CellContent {
    pub owner: Seat,
    pub kind: CharacterType,
}

impl CellContent {
    /// Creates content owned by `owner` of the given kind.
    pub fn new(owner: Seat, kind: CharacterType) -> Self {
        Self { owner, kind }
    }

    /// The wire token for this content.
    pub fn token(self) -> String {
        format!("{}-{}", self.owner.marker(), self.kind)
    }
}

impl From<CellContent> for String {
    fn from(content: CellContent) -> String {
        content.token()
    }
}

impl FromStr for CellContent {
    type Err = BoardError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let (marker, kind) = token
            .split_once('-')
            .ok_or_else(|| BoardError::InvalidToken(token.to_string()))?;
        let mut chars = marker.chars();
        let (first, rest) = (chars.next(), chars.next());
        let marker = match (first, rest) {
            (Some(c), None) => c,
            _ => return Err(BoardError::InvalidToken(token.to_string())),
        };
        Ok(CellContent {
            owner: Seat::from_marker(marker)?,
            kind: kind.parse()?,
        })
    }
}

impl TryFrom<String> for CellContent {
    type Error = BoardError;

    fn try_from(token: String) -> Result<Self, Self::Error> {
        token.parse()
    }
}

impl fmt::Display for CellContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.owner.marker(), self.kind)
    }
}

// =========================================================================
// Tests
// =========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seat_serializes_as_plain_number() {
        assert_eq!(serde_json::to_string(&Seat::One).unwrap(), "1");
        assert_eq!(serde_json::to_string(&Seat::Two).unwrap(), "2");
    }

    #[test]
    fn test_seat_deserializes_from_plain_number() {
        let seat: Seat = serde_json::from_str("2").unwrap();
        assert_eq!(seat, Seat::Two);
    }

    #[test]
    fn test_seat_rejects_other_numbers() {
        assert!(serde_json::from_str::<Seat>("0").is_err());
        assert!(serde_json::from_str::<Seat>("3").is_err());
    }

    #[test]
    fn test_seat_from_marker_accepts_both_encodings() {
        assert_eq!(Seat::from_marker('A').unwrap(), Seat::One);
        assert_eq!(Seat::from_marker('1').unwrap(), Seat::One);
        assert_eq!(Seat::from_marker('B').unwrap(), Seat::Two);
        assert_eq!(Seat::from_marker('2').unwrap(), Seat::Two);
        assert!(Seat::from_marker('C').is_err());
    }

    #[test]
    fn test_seat_home_rows_are_opposite_edges() {
        assert_eq!(Seat::One.home_row(), 4);
        assert_eq!(Seat::Two.home_row(), 0);
    }

    #[test]
    fn test_character_type_serializes_as_code() {
        assert_eq!(serde_json::to_string(&CharacterType::P3).unwrap(), "\"P3\"");
        assert_eq!(serde_json::to_string(&CharacterType::H2).unwrap(), "\"H2\"");
    }

    #[test]
    fn test_character_type_parse_round_trip() {
        for kind in CharacterType::ALL {
            assert_eq!(kind.code().parse::<CharacterType>().unwrap(), kind);
        }
        assert!("P6".parse::<CharacterType>().is_err());
        assert!("h1".parse::<CharacterType>().is_err());
    }

    #[test]
    fn test_pawn_ranks_share_a_pattern() {
        for kind in CharacterType::ALL {
            if kind.is_pawn() {
                assert_eq!(kind.move_pattern(), CharacterType::P1.move_pattern());
            }
        }
        assert_ne!(
            CharacterType::H1.move_pattern(),
            CharacterType::H2.move_pattern()
        );
    }

    #[test]
    fn test_direction_codes_round_trip() {
        for code in ["F", "B", "L", "R", "FL", "FR", "BL", "BR"] {
            let dir: Direction = code.parse().unwrap();
            assert_eq!(dir.code(), code);
        }
        assert!("FF".parse::<Direction>().is_err());
    }

    #[test]
    fn test_cell_offset_stays_in_bounds() {
        let corner = Cell::new(0, 0);
        assert_eq!(corner.offset(-1, 0), None);
        assert_eq!(corner.offset(0, -2), None);
        assert_eq!(corner.offset(1, 1), Some(Cell::new(1, 1)));

        let far = Cell::new(4, 4);
        assert_eq!(far.offset(1, 0), None);
        assert_eq!(far.offset(-2, -2), Some(Cell::new(2, 2)));
    }

    #[test]
    fn test_cell_content_token_round_trip() {
        let content = CellContent::new(Seat::One, CharacterType::P1);
        assert_eq!(content.token(), "A-P1");
        assert_eq!("A-P1".parse::<CellContent>().unwrap(), content);
    }

    #[test]
    fn test_cell_content_parses_numeric_marker() {
        // Tokens written by the legacy client carry the seat number
        // instead of the letter. Both resolve through the same mapping.
        let content: CellContent = "1-P1".parse().unwrap();
        assert_eq!(content.owner, Seat::One);
        let content: CellContent = "2-H2".parse().unwrap();
        assert_eq!(content.owner, Seat::Two);
    }

    #[test]
    fn test_cell_content_rejects_malformed_tokens() {
        assert!("".parse::<CellContent>().is_err());
        assert!("AP1".parse::<CellContent>().is_err());
        assert!("AB-P1".parse::<CellContent>().is_err());
        assert!("A-P9".parse::<CellContent>().is_err());
        assert!("C-P1".parse::<CellContent>().is_err());
    }

    #[test]
    fn test_cell_content_json_is_the_token() {
        let content = CellContent::new(Seat::Two, CharacterType::H1);
        assert_eq!(serde_json::to_string(&content).unwrap(), "\"B-H1\"");
        let decoded: CellContent = serde_json::from_str("\"B-H1\"").unwrap();
        assert_eq!(decoded, content);
    }
}
