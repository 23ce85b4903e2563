//! Game state queries
//!
//! Check, checkmate and stalemate are computed on demand from the current board;
//! nothing here is cached except the final [`GameResult`].

use super::Game;
use crate::error::{ChessEngineError, ChessEngineResult};
use crate::move_gen::is_king_attacked;
use crate::types::*;
use tracing::info;

impl Game {
    /// Whether `color`'s king is attacked by a pseudo-legal move of the opponent
    pub fn is_in_check(&self, color: Color) -> bool {
        is_king_attacked(&self.board, color)
    }

    /// In check with no legal moves
    pub fn is_in_checkmate(&self, color: Color) -> bool {
        self.is_in_check(color) && !self.has_any_valid_move(color)
    }

    /// Not in check with no legal moves
    pub fn is_in_stalemate(&self, color: Color) -> bool {
        !self.is_in_check(color) && !self.has_any_valid_move(color)
    }

    /// Classification of the position for the side to move
    pub fn status(&self) -> GameStatus {
        let in_check = self.is_in_check(self.turn);
        let has_moves = self.has_any_valid_move(self.turn);

        match (in_check, has_moves) {
            (true, false) => GameStatus::Checkmate,
            (false, false) => GameStatus::Stalemate,
            _ if self.result.is_some() => GameStatus::Resigned,
            (true, true) => GameStatus::Check,
            (false, true) => GameStatus::InProgress,
        }
    }

    /// `color` concedes; the opponent wins
    ///
    /// # Errors
    ///
    /// Returns [`ChessEngineError::InvalidMove`] if the game is already over.
    pub fn resign(&mut self, color: Color) -> ChessEngineResult<()> {
        if self.is_over() {
            return Err(ChessEngineError::invalid_move("the game is already over"));
        }
        let result = GameResult::win_for(color.opponent());
        info!("[GAME] {} resigned: {:?}", color, result);
        self.result = Some(result);
        Ok(())
    }

    fn has_any_valid_move(&self, color: Color) -> bool {
        self.board
            .pieces_of(color)
            .into_iter()
            .any(|start| !self.valid_moves(start).is_empty())
    }

    /// Record a result if the side to move is checkmated or stalemated
    pub(super) fn update_result(&mut self) {
        if self.has_any_valid_move(self.turn) {
            return;
        }
        self.result = Some(if self.is_in_check(self.turn) {
            GameResult::win_for(self.turn.opponent())
        } else {
            GameResult::Draw
        });
    }
}
