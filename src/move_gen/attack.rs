//! Attack detection
//!
//! A square is attacked by a color when some pseudo-legal move of that color
//! ends on it. The attacker's own king safety is ignored: a pinned
//! piece still gives check.
//!
//! ## King Lookup
//!
//! Kings are found by scanning all 64 squares ([`Board::find_king`]); there is
//! no cached king index. A color with no king on the board is never in check.

use super::piece_moves;
use crate::board::Board;
use crate::types::*;

/// Check if a square is under attack by `by_color`
///
/// Pawn pushes count too, since they are pseudo-legal moves. For an occupied
/// square (the only kind queried for check) pushes can never land there, so
/// only pawn captures matter.
pub fn is_square_attacked(board: &Board, square: Position, by_color: Color) -> bool {
    board
        .pieces_of(by_color)
        .into_iter()
        .any(|from| piece_moves(board, from).iter().any(|mv| mv.end() == square))
}

/// Check if `color`'s king is attacked on `board`
pub fn is_king_attacked(board: &Board, color: Color) -> bool {
    match board.find_king(color) {
        Some(king) => is_square_attacked(board, king, color.opponent()),
        None => false,
    }
}
