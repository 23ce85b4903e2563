//! Board representation
//!
//! A pure spatial container: an 8x8 grid of optional pieces with no knowledge of
//! the rules. Provides the primitive operations the rest of the engine builds on:
//! - Square queries and unconditional placement/removal
//! - Raw move application (capture by overwrite, promotion by type swap)
//! - Standard starting arrangement
//! - Independent copies for check simulation
//!
//! Storage is 0-indexed (`cells[row - 1][column - 1]`); the public API only ever
//! takes 1-indexed [`Position`] values.

use crate::constants::{BACK_RANK, BOARD_SIZE, MIN_COORD};
use crate::types::*;

/// An 8x8 grid of optional pieces
///
/// `Board` is `Copy`: pieces are plain values and the grid holds no references,
/// so a copy never shares state with the original.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [[Option<Piece>; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Board with no pieces
    pub fn empty() -> Self {
        Board::default()
    }

    /// Board in the standard starting arrangement
    pub fn starting() -> Self {
        let mut board = Board::empty();
        board.reset_to_starting_position();
        board
    }

    /// Get piece at position
    #[inline]
    pub fn get(&self, position: Position) -> Option<Piece> {
        self.cells[(position.row() - 1) as usize][(position.column() - 1) as usize]
    }

    /// Put a piece on a square, replacing whatever was there
    #[inline]
    pub fn place(&mut self, position: Position, piece: Piece) {
        self.cells[(position.row() - 1) as usize][(position.column() - 1) as usize] = Some(piece);
    }

    /// Clear a square (no-op if already empty)
    #[inline]
    pub fn remove(&mut self, position: Position) {
        self.cells[(position.row() - 1) as usize][(position.column() - 1) as usize] = None;
    }

    /// Check if square is empty
    #[inline]
    pub fn is_empty(&self, position: Position) -> bool {
        self.get(position).is_none()
    }

    /// Apply a move without any rule checks
    ///
    /// The piece on `start` is written to `end` (promoted if the move carries a
    /// promotion type), discarding any piece already on `end`. `start` is cleared.
    /// A move from an empty square leaves the board untouched.
    pub fn apply_move(&mut self, mv: Move) {
        let Some(piece) = self.get(mv.start()) else {
            return;
        };
        let piece = match mv.promotion() {
            Some(promotion) => piece.promoted(promotion),
            None => piece,
        };
        self.remove(mv.start());
        self.place(mv.end(), piece);
    }

    /// Clear the board and set up the standard starting arrangement
    pub fn reset_to_starting_position(&mut self) {
        *self = Board::empty();

        for color in Color::ALL {
            for (offset, piece_type) in BACK_RANK.iter().enumerate() {
                let column = offset as u8 + MIN_COORD;
                self.place(
                    Position::at(color.back_rank(), column),
                    Piece::new(color, *piece_type),
                );
                self.place(
                    Position::at(color.pawn_rank(), column),
                    Piece::new(color, PieceType::Pawn),
                );
            }
        }
    }

    /// Independent copy with identical placement
    pub fn copy(&self) -> Board {
        *self
    }

    /// Every square currently holding a piece, row 1 first
    pub fn all_occupied_positions(&self) -> Vec<Position> {
        Position::all().filter(|p| !self.is_empty(*p)).collect()
    }

    /// Squares holding a piece of `color`
    pub fn pieces_of(&self, color: Color) -> Vec<Position> {
        Position::all()
            .filter(|p| self.get(*p).is_some_and(|piece| piece.color() == color))
            .collect()
    }

    /// Locate `color`'s king by scanning all 64 squares
    ///
    /// Assumes at most one king per color; the first one found wins.
    pub fn find_king(&self, color: Color) -> Option<Position> {
        Position::all().find(|p| self.get(*p).is_some_and(|piece| piece.is_king_of(color)))
    }

    /// Number of `color` kings on the board
    pub fn king_count(&self, color: Color) -> usize {
        Position::all()
            .filter(|p| self.get(*p).is_some_and(|piece| piece.is_king_of(color)))
            .count()
    }
}
