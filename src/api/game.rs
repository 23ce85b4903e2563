//! Game lifecycle management
//!
//! Functions for creating, restoring and resetting games.

use crate::board::Board;
use crate::error::{ChessEngineError, ChessEngineResult};
use crate::types::*;

/// A chess game: one board, the side to move, and the result once finished
///
/// The board is only mutated through [`Game::make_move`]; [`Game::resign`] only
/// touches the result. Legality queries never mutate anything.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Game {
    pub(super) board: Board,
    pub(super) turn: Color,
    pub(super) result: Option<GameResult>,
}

impl Game {
    /// Create a new game with the standard starting position, WHITE to move
    pub fn new() -> Self {
        Game {
            board: Board::starting(),
            turn: Color::White,
            result: None,
        }
    }

    /// Create a game from an arbitrary placement
    ///
    /// Rejects boards holding more than one king of a color, since king lookup
    /// would be ambiguous. A color without a king is accepted and is never in
    /// check. If the side to move has no legal moves, the result is set
    /// immediately.
    ///
    /// # Errors
    ///
    /// Returns [`ChessEngineError::InvalidBoard`] if a color has several kings.
    pub fn with_board(board: Board, turn: Color) -> ChessEngineResult<Self> {
        Self::with_board_and_result(board, turn, None)
    }

    /// Shared constructor for fixtures and restored snapshots
    pub(crate) fn with_board_and_result(
        board: Board,
        turn: Color,
        result: Option<GameResult>,
    ) -> ChessEngineResult<Self> {
        validate_kings(&board)?;

        let mut game = Game {
            board,
            turn,
            result,
        };
        if game.result.is_none() {
            game.update_result();
        }
        Ok(game)
    }

    /// Reset the game to the starting position
    pub fn reset(&mut self) {
        *self = Game::new();
    }

    /// The current board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The side to move
    pub fn turn(&self) -> Color {
        self.turn
    }

    /// Final result, `None` while the game is in progress
    pub fn result(&self) -> Option<GameResult> {
        self.result
    }

    /// Whether the game has reached a result
    pub fn is_over(&self) -> bool {
        self.result.is_some()
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}

/// Check that no color has more than one king
fn validate_kings(board: &Board) -> ChessEngineResult<()> {
    for color in Color::ALL {
        let kings = board.king_count(color);
        if kings > 1 {
            return Err(ChessEngineError::invalid_board(format!(
                "{color} has {kings} kings, at most one is allowed"
            )));
        }
    }
    Ok(())
}
