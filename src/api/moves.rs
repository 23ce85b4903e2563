//! Move execution and validation
//!
//! Legal moves are computed with a simulate-and-filter loop: every pseudo-legal
//! candidate is applied to a throwaway copy of the board and kept only if the
//! mover's king is not attacked afterwards. The live board is never touched by
//! a query, so repeated legality checks are pure.

use super::Game;
use crate::error::{ChessEngineError, ChessEngineResult};
use crate::move_gen::{is_king_attacked, piece_moves};
use crate::types::*;
use tracing::{debug, info};

impl Game {
    /// Legal moves of the piece on `start`
    ///
    /// Empty if `start` holds no piece. The piece's own color decides king
    /// safety, whoever is to move.
    pub fn valid_moves(&self, start: Position) -> Vec<Move> {
        let Some(piece) = self.board.get(start) else {
            return Vec::new();
        };

        piece_moves(&self.board, start)
            .into_iter()
            .filter(|mv| {
                let mut scratch = self.board.copy();
                scratch.apply_move(*mv);
                !is_king_attacked(&scratch, piece.color())
            })
            .collect()
    }

    /// Every legal move of the side to move
    pub fn all_valid_moves(&self) -> Vec<Move> {
        self.board
            .pieces_of(self.turn)
            .into_iter()
            .flat_map(|start| self.valid_moves(start))
            .collect()
    }

    /// Check if a move is legal for the side to move
    pub fn is_legal_move(&self, mv: Move) -> bool {
        self.check_move(mv).is_ok()
    }

    /// Play a move
    ///
    /// Applies the move, hands the turn to the opponent and records a result if
    /// the opponent is left without legal moves.
    ///
    /// # Errors
    ///
    /// Returns [`ChessEngineError::InvalidMove`] if the game is over, the start
    /// square is empty, the piece belongs to the side not on move, or the move
    /// is not among the piece's legal moves. Board and turn are unchanged on error.
    pub fn make_move(&mut self, mv: Move) -> ChessEngineResult<()> {
        if let Err(e) = self.check_move(mv) {
            debug!("[GAME] Rejected {}: {}", mv, e);
            return Err(e);
        }

        self.board.apply_move(mv);
        self.turn = self.turn.opponent();
        debug!("[GAME] Played {}, {} to move", mv, self.turn);

        self.update_result();
        if let Some(result) = self.result {
            info!("[GAME] Game over after {}: {:?}", mv, result);
        }
        Ok(())
    }

    fn check_move(&self, mv: Move) -> ChessEngineResult<()> {
        if self.is_over() {
            return Err(ChessEngineError::invalid_move("the game is already over"));
        }

        let Some(piece) = self.board.get(mv.start()) else {
            return Err(ChessEngineError::invalid_move(format!(
                "no piece at {}",
                mv.start()
            )));
        };

        if piece.color() != self.turn {
            return Err(ChessEngineError::invalid_move(format!(
                "it is {}'s turn",
                self.turn
            )));
        }

        if !self.valid_moves(mv.start()).contains(&mv) {
            return Err(ChessEngineError::invalid_move(format!("{mv} is not legal")));
        }

        Ok(())
    }
}
