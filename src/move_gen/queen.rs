//! Queen move generation
//!
//! The queen combines rook and bishop movement: it slides along all eight
//! directions until blocked.

use super::sliding;
use crate::board::Board;
use crate::constants::QUEEN_DIRS;
use crate::types::*;

/// Generate queen moves from a given square
pub fn generate_queen_moves(board: &Board, from: Position, color: Color, moves: &mut Vec<Move>) {
    sliding::generate_sliding_moves(board, from, color, &QUEEN_DIRS, moves);
}
