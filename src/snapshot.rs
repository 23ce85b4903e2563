//! Persistence-shaped game snapshots
//!
//! A game's full state is its 64 board cells, the side to move and the result;
//! no rule depends on move history. [`GameSnapshot`] is that state as a plain
//! serde value, so a storage layer can write it as JSON (or any serde format)
//! and rebuild the [`Game`] later.
//!
//! # Cell Order
//!
//! `board` lists all 64 cells row-major starting at `(1, 1)`:
//! index `(row - 1) * 8 + (column - 1)`. Empty cells are `null`.
//!
//! # Validation
//!
//! Restoring goes through the same king check as [`Game::with_board`]; a
//! snapshot with the wrong cell count or several kings of one color is rejected.

use crate::api::Game;
use crate::board::Board;
use crate::constants::SQUARE_COUNT;
use crate::error::{ChessEngineError, ChessEngineResult};
use crate::types::*;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Serializable state of a [`Game`]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub board: Vec<Option<Piece>>,
    pub turn: Color,
    pub result: Option<GameResult>,
}

impl GameSnapshot {
    /// Serialize to a JSON string
    pub fn to_json(&self) -> ChessEngineResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serialize to an indented JSON string
    pub fn to_json_pretty(&self) -> ChessEngineResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Deserialize from a JSON string
    pub fn from_json(json: &str) -> ChessEngineResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Rebuild the board described by the cell list
    pub fn to_board(&self) -> ChessEngineResult<Board> {
        if self.board.len() != SQUARE_COUNT {
            return Err(ChessEngineError::invalid_board(format!(
                "expected {SQUARE_COUNT} cells, found {}",
                self.board.len()
            )));
        }

        let mut board = Board::empty();
        for (index, cell) in self.board.iter().enumerate() {
            if let Some(piece) = cell {
                board.place(Position::from_index(index), *piece);
            }
        }
        Ok(board)
    }
}

impl Game {
    /// Capture the current state
    pub fn snapshot(&self) -> GameSnapshot {
        let mut cells = vec![None; SQUARE_COUNT];
        for position in Position::all() {
            cells[position.index()] = self.board().get(position);
        }

        GameSnapshot {
            board: cells,
            turn: self.turn(),
            result: self.result(),
        }
    }

    /// Restore a game from a snapshot
    ///
    /// A stored result is kept as-is (it may come from a resignation). Without
    /// one, the position is classified so a stored checkmate or stalemate is
    /// recognised.
    ///
    /// # Errors
    ///
    /// Returns [`ChessEngineError::InvalidBoard`] for a malformed cell list or a
    /// color with several kings.
    pub fn from_snapshot(snapshot: &GameSnapshot) -> ChessEngineResult<Game> {
        let restored = snapshot
            .to_board()
            .and_then(|board| Game::with_board_and_result(board, snapshot.turn, snapshot.result));

        if let Err(e) = &restored {
            warn!("[SNAPSHOT] Rejected snapshot: {}", e);
        }
        restored
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_of_new_game() {
        let snapshot = Game::new().snapshot();

        assert_eq!(snapshot.board.len(), 64);
        assert_eq!(snapshot.board.iter().flatten().count(), 32);
        assert_eq!(snapshot.turn, Color::White);
        assert_eq!(snapshot.result, None);
        assert_eq!(
            snapshot.board[4],
            Some(Piece::new(Color::White, PieceType::King)),
            "e1 is index 4"
        );
    }

    #[test]
    fn test_snapshot_rejects_short_board() {
        let snapshot = GameSnapshot {
            board: vec![None; 10],
            turn: Color::White,
            result: None,
        };
        assert!(matches!(
            Game::from_snapshot(&snapshot),
            Err(ChessEngineError::InvalidBoard { .. })
        ));
    }

    #[test]
    fn test_snapshot_rejects_bad_json() {
        assert!(matches!(
            GameSnapshot::from_json("{\"board\": 3}"),
            Err(ChessEngineError::Serialization(_))
        ));
    }
}
