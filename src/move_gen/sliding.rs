//! Sliding piece move generation
//!
//! Common functionality for sliding pieces (bishops, rooks, queens).
//! These pieces can move multiple squares in a direction until blocked.
//!
//! ## Algorithm
//!
//! For each direction the piece may travel:
//! 1. Step one square at a time from the start square
//! 2. Empty squares are valid moves; keep walking
//! 3. The first occupied square ends the ray: it is a capture if it holds an
//!    opponent piece and excluded if it holds an own piece
//! 4. Leaving the board ends the ray
//!
//! ## Performance
//!
//! - **Time complexity**: O(n) in the number of reachable squares
//! - **Typical moves per square**: up to 14 for rooks, 13 for bishops, 27 for queens

use crate::board::Board;
use crate::types::*;

/// Generate moves for a sliding piece along the given directions
///
/// # Arguments
///
/// * `board` - The board to generate on
/// * `from` - Square the piece stands on
/// * `color` - Color of the moving piece
/// * `directions` - `(row, column)` step vectors to walk
/// * `moves` - Output vector to append moves to
pub fn generate_sliding_moves(
    board: &Board,
    from: Position,
    color: Color,
    directions: &[(i8, i8)],
    moves: &mut Vec<Move>,
) {
    for &direction in directions {
        let mut current = from;

        while let Some(to) = current.offset(direction) {
            match board.get(to) {
                None => {
                    // Empty square: valid move, continue in this direction
                    moves.push(Move::new(from, to));
                    current = to;
                }
                Some(target) => {
                    // Opponent piece: capture, then the ray is blocked either way
                    if target.color() != color {
                        moves.push(Move::new(from, to));
                    }
                    break;
                }
            }
        }
    }
}
