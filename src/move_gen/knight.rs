//! Knight move generation
//!
//! Knights jump in an "L": two squares along one axis and one along the other.
//! They ignore pieces in between, so only the destination square matters.

use super::generate_leaper_moves;
use crate::board::Board;
use crate::constants::KNIGHT_OFFSETS;
use crate::types::*;

/// Generate knight moves from a given square
///
/// Each of the 8 offsets is offered if it stays on the board and does not
/// land on a friendly piece.
pub fn generate_knight_moves(board: &Board, from: Position, color: Color, moves: &mut Vec<Move>) {
    generate_leaper_moves(board, from, color, &KNIGHT_OFFSETS, moves);
}
