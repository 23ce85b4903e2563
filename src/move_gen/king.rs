//! King move generation
//!
//! Handles king-specific move generation. Kings move one square in any direction
//! (horizontally, vertically, or diagonally).
//!
//! ## King Movement Rules
//!
//! - Kings move one square in any direction (8 possible destinations)
//! - Cannot move to squares occupied by own pieces
//! - Cannot move into check (handled by the legality filter, not here)
//! - Can capture opponent pieces on destination squares
//! - No castling

use super::generate_leaper_moves;
use crate::board::Board;
use crate::constants::KING_OFFSETS;
use crate::types::*;

/// Generate king moves from a given square
///
/// # Arguments
///
/// * `board` - The board to generate on
/// * `from` - Square the king stands on
/// * `color` - Color of the king
/// * `moves` - Output vector to append moves to
pub fn generate_king_moves(board: &Board, from: Position, color: Color, moves: &mut Vec<Move>) {
    generate_leaper_moves(board, from, color, &KING_OFFSETS, moves);
}
