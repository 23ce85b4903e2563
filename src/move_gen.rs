//! Pseudo-legal move generation
//!
//! One rule per piece type, each in its own module and dispatched by a `match`
//! over [`PieceType`]. Generated moves respect geometry, blocking and capture
//! rules but ignore whether they expose the mover's own king; the legality
//! filter in [`crate::api`] removes those.
//!
//! ## Module Structure
//!
//! - `king` / `knight` - fixed-offset ("leaper") pieces
//! - `rook` / `bishop` / `queen` - ray walkers built on `sliding`
//! - `pawn` - pushes, double pushes, diagonal captures, promotion fan-out
//! - `attack` - square-attack and check queries on a bare board

mod attack;
mod bishop;
mod king;
mod knight;
mod pawn;
mod queen;
mod rook;
mod sliding;


pub use attack::{is_king_attacked, is_square_attacked};

use crate::board::Board;
use crate::types::*;

/// Every pseudo-legal move of the piece on `from`
///
/// Returns an empty list if `from` is empty. All moves start on `from` and
/// end on the board.
pub fn piece_moves(board: &Board, from: Position) -> Vec<Move> {
    let Some(piece) = board.get(from) else {
        return Vec::new();
    };

    let color = piece.color();
    let mut moves = Vec::with_capacity(28);

    match piece.piece_type() {
        PieceType::Pawn => pawn::generate_pawn_moves(board, from, color, &mut moves),
        PieceType::Knight => knight::generate_knight_moves(board, from, color, &mut moves),
        PieceType::Bishop => bishop::generate_bishop_moves(board, from, color, &mut moves),
        PieceType::Rook => rook::generate_rook_moves(board, from, color, &mut moves),
        PieceType::Queen => queen::generate_queen_moves(board, from, color, &mut moves),
        PieceType::King => king::generate_king_moves(board, from, color, &mut moves),
    }

    moves
}

/// Generate all pseudo-legal moves for a color
pub fn generate_pseudo_legal_moves(board: &Board, color: Color) -> Vec<Move> {
    board
        .pieces_of(color)
        .into_iter()
        .flat_map(|from| piece_moves(board, from))
        .collect()
}

/// Push a move to every offset target that is empty or holds an enemy piece
///
/// Shared by the king and knight generators.
fn generate_leaper_moves(
    board: &Board,
    from: Position,
    color: Color,
    offsets: &[(i8, i8)],
    moves: &mut Vec<Move>,
) {
    for &offset in offsets {
        let Some(to) = from.offset(offset) else {
            continue;
        };

        // Valid if destination is empty or contains opponent piece
        match board.get(to) {
            Some(target) if target.color() == color => {}
            _ => moves.push(Move::new(from, to)),
        }
    }
}
