//! # Core Rules Types - Value Objects Shared by Every Module
//!
//! ## Overview
//!
//! Everything the rules engine passes around is a small immutable value:
//!
//! - [`Color`] - side of the board (`White` moves first)
//! - [`PieceType`] - one of the six chess piece kinds
//! - [`Piece`] - a `(color, type)` pair with no identity beyond its value
//! - [`Position`] - a 1-indexed `(row, column)` square, both in `1..=8`
//! - [`Move`] - `(start, end, promotion)`; equality is how legality is decided
//! - [`GameResult`] / [`GameStatus`] - terminal outcome and per-turn classification
//!
//! All of them are `Copy`, so boards can be duplicated with a plain value copy and the
//! legality filter can simulate moves without any deep-clone concerns.
//!
//! ## Position Invariant
//!
//! A [`Position`] can only be built through [`Position::new`] (checked, returns `Option`),
//! [`Position::at`] (asserts the range) or [`Position::offset`] (clips to the board), so
//! every `Position` in circulation lies on the board.

use crate::constants::{BOARD_SIZE, MAX_COORD, MIN_COORD};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Side of the board
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Color {
    #[default]
    White,
    Black,
}

impl Color {
    /// Both colors in move order
    pub const ALL: [Color; 2] = [Color::White, Color::Black];

    /// The other side
    pub fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row delta of a pawn step for this color
    pub fn forward(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// Row holding this color's major pieces at the start
    pub fn back_rank(self) -> u8 {
        match self {
            Color::White => MIN_COORD,
            Color::Black => MAX_COORD,
        }
    }

    /// Row this color's pawns start on (double steps are only allowed from here)
    pub fn pawn_rank(self) -> u8 {
        match self {
            Color::White => MIN_COORD + 1,
            Color::Black => MAX_COORD - 1,
        }
    }

    /// Row on which this color's pawns promote
    pub fn promotion_rank(self) -> u8 {
        self.opponent().back_rank()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "WHITE"),
            Color::Black => write!(f, "BLACK"),
        }
    }
}

/// The six kinds of chess piece
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceType {
    King,
    Queen,
    Bishop,
    Knight,
    Rook,
    Pawn,
}

impl PieceType {
    /// Lowercase letter used in coordinate notation (`n` for knight)
    pub fn symbol(self) -> char {
        match self {
            PieceType::King => 'k',
            PieceType::Queen => 'q',
            PieceType::Bishop => 'b',
            PieceType::Knight => 'n',
            PieceType::Rook => 'r',
            PieceType::Pawn => 'p',
        }
    }

    /// Inverse of [`PieceType::symbol`], case-insensitive
    pub fn from_symbol(symbol: char) -> Option<PieceType> {
        match symbol.to_ascii_lowercase() {
            'k' => Some(PieceType::King),
            'q' => Some(PieceType::Queen),
            'b' => Some(PieceType::Bishop),
            'n' => Some(PieceType::Knight),
            'r' => Some(PieceType::Rook),
            'p' => Some(PieceType::Pawn),
            _ => None,
        }
    }
}

/// An immutable `(color, type)` value
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    color: Color,
    #[serde(rename = "type")]
    piece_type: PieceType,
}

impl Piece {
    pub const fn new(color: Color, piece_type: PieceType) -> Self {
        Piece { color, piece_type }
    }

    pub fn color(self) -> Color {
        self.color
    }

    pub fn piece_type(self) -> PieceType {
        self.piece_type
    }

    /// Same color, different type (used for promotion)
    pub fn promoted(self, piece_type: PieceType) -> Piece {
        Piece::new(self.color, piece_type)
    }

    pub fn is_king_of(self, color: Color) -> bool {
        self.piece_type == PieceType::King && self.color == color
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = self.piece_type.symbol();
        match self.color {
            Color::White => write!(f, "{}", symbol.to_ascii_uppercase()),
            Color::Black => write!(f, "{}", symbol),
        }
    }
}

/// A square on the board, `(row, column)` with both in `1..=8`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    row: u8,
    column: u8,
}

impl Position {
    /// Checked constructor
    pub fn new(row: u8, column: u8) -> Option<Position> {
        let range = MIN_COORD..=MAX_COORD;
        if range.contains(&row) && range.contains(&column) {
            Some(Position { row, column })
        } else {
            None
        }
    }

    /// Constructor for coordinates known to be on the board
    ///
    /// # Panics
    ///
    /// Panics if either coordinate is outside `1..=8`. Off-board coordinates are a
    /// caller bug, never a recoverable condition.
    pub fn at(row: u8, column: u8) -> Position {
        assert!(
            (MIN_COORD..=MAX_COORD).contains(&row) && (MIN_COORD..=MAX_COORD).contains(&column),
            "position ({row}, {column}) is off the board"
        );
        Position { row, column }
    }

    pub fn row(self) -> u8 {
        self.row
    }

    pub fn column(self) -> u8 {
        self.column
    }

    /// Shift by a `(row, column)` delta, `None` if the result leaves the board
    pub fn offset(self, (row_delta, column_delta): (i8, i8)) -> Option<Position> {
        let row = self.row as i16 + row_delta as i16;
        let column = self.column as i16 + column_delta as i16;
        let range = MIN_COORD as i16..=MAX_COORD as i16;
        if range.contains(&row) && range.contains(&column) {
            Some(Position {
                row: row as u8,
                column: column as u8,
            })
        } else {
            None
        }
    }

    /// Row-major storage index in `0..64`
    pub(crate) fn index(self) -> usize {
        (self.row - 1) as usize * BOARD_SIZE + (self.column - 1) as usize
    }

    /// Inverse of [`Position::index`]
    pub(crate) fn from_index(index: usize) -> Position {
        Position::at(
            (index / BOARD_SIZE) as u8 + MIN_COORD,
            (index % BOARD_SIZE) as u8 + MIN_COORD,
        )
    }

    /// All 64 squares, row 1 first
    pub fn all() -> impl Iterator<Item = Position> {
        (MIN_COORD..=MAX_COORD)
            .flat_map(|row| (MIN_COORD..=MAX_COORD).map(move |column| Position { row, column }))
    }
}

impl fmt::Display for Position {
    /// Coordinate notation, `(2, 5)` prints as `e2`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = (b'a' + self.column - MIN_COORD) as char;
        write!(f, "{}{}", file, self.row)
    }
}

/// A move from `start` to `end`, optionally promoting a pawn
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    start: Position,
    end: Position,
    promotion: Option<PieceType>,
}

impl Move {
    pub fn new(start: Position, end: Position) -> Self {
        Move {
            start,
            end,
            promotion: None,
        }
    }

    pub fn with_promotion(start: Position, end: Position, promotion: PieceType) -> Self {
        Move {
            start,
            end,
            promotion: Some(promotion),
        }
    }

    pub fn start(self) -> Position {
        self.start
    }

    pub fn end(self) -> Position {
        self.end
    }

    pub fn promotion(self) -> Option<PieceType> {
        self.promotion
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.start, self.end)?;
        if let Some(promotion) = self.promotion {
            write!(f, "{}", promotion.symbol())?;
        }
        Ok(())
    }
}

/// Final outcome of a finished game
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    WhiteWins,
    BlackWins,
    Draw,
}

impl GameResult {
    /// Result in which `color` wins
    pub fn win_for(color: Color) -> GameResult {
        match color {
            Color::White => GameResult::WhiteWins,
            Color::Black => GameResult::BlackWins,
        }
    }

    pub fn winner(self) -> Option<Color> {
        match self {
            GameResult::WhiteWins => Some(Color::White),
            GameResult::BlackWins => Some(Color::Black),
            GameResult::Draw => None,
        }
    }
}

/// Classification of the position from the side to move's point of view
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    InProgress,
    Check,
    Checkmate,
    Stalemate,
    Resigned,
}

impl GameStatus {
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            GameStatus::Checkmate | GameStatus::Stalemate | GameStatus::Resigned
        )
    }
}
