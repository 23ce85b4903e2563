//! Bishop move generation
//!
//! Bishops slide along the four diagonals until blocked. A bishop never
//! changes square color.

use super::sliding;
use crate::board::Board;
use crate::constants::BISHOP_DIRS;
use crate::types::*;

/// Generate bishop moves from a given square
pub fn generate_bishop_moves(board: &Board, from: Position, color: Color, moves: &mut Vec<Move>) {
    sliding::generate_sliding_moves(board, from, color, &BISHOP_DIRS, moves);
}
