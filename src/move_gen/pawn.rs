//! Pawn move generation
//!
//! Handles pawn-specific move generation including:
//! - Single and double forward pushes
//! - Diagonal captures
//! - Promotion fan-out on the far back rank
//!
//! ## Pawn Movement Rules
//!
//! - **Forward push**: one square toward the opponent (+1 row WHITE, -1 row BLACK),
//!   only onto an empty square
//! - **Double push**: from the starting rank (row 2 WHITE, row 7 BLACK), two squares
//!   forward if both the intermediate and destination squares are empty
//! - **Captures**: one square diagonally forward, only onto an opponent piece
//! - **Promotion**: a push or capture landing on the far back rank is emitted once per
//!   promotable type (queen, rook, bishop, knight) and never as a plain move
//! - **En passant**: not supported

use crate::board::Board;
use crate::constants::PROMOTION_TYPES;
use crate::types::*;

/// Generate pawn moves from a given square
///
/// # Examples
///
/// ```rust,ignore
/// let mut moves = Vec::new();
/// generate_pawn_moves(&Board::starting(), Position::at(2, 5), Color::White, &mut moves);
/// // moves now contains e2-e3 and e2-e4
/// ```
pub fn generate_pawn_moves(board: &Board, from: Position, color: Color, moves: &mut Vec<Move>) {
    let forward = color.forward();

    // Forward moves must be to empty squares
    if let Some(single) = from.offset((forward, 0)) {
        if board.is_empty(single) {
            push_pawn_move(from, single, color, moves);

            if from.row() == color.pawn_rank() {
                if let Some(double) = single.offset((forward, 0)) {
                    if board.is_empty(double) {
                        push_pawn_move(from, double, color, moves);
                    }
                }
            }
        }
    }

    // Diagonal moves are only valid for captures
    for side in [-1, 1] {
        let Some(to) = from.offset((forward, side)) else {
            continue;
        };
        if board.get(to).is_some_and(|target| target.color() != color) {
            push_pawn_move(from, to, color, moves);
        }
    }
}

/// Push a plain move, or one move per promotion type on the promotion rank
fn push_pawn_move(from: Position, to: Position, color: Color, moves: &mut Vec<Move>) {
    if to.row() == color.promotion_rank() {
        moves.extend(
            PROMOTION_TYPES
                .iter()
                .map(|&promotion| Move::with_promotion(from, to, promotion)),
        );
    } else {
        moves.push(Move::new(from, to));
    }
}
