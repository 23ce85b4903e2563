//! Error types for the rules engine
//!
//! Move application has exactly one failure kind, [`ChessEngineError::InvalidMove`].
//! Its message is descriptive only; callers should not branch on the text.
//! The remaining variants belong to the edges of the engine: notation parsing,
//! board validation for fixtures and restored snapshots, and snapshot JSON.

use thiserror::Error;

/// Errors that can occur in the rules engine
#[derive(Error, Debug)]
pub enum ChessEngineError {
    /// Move rejected: empty start square, wrong side, not legal, or game over
    #[error("Invalid move: {message}")]
    InvalidMove { message: String },

    /// Move or square descriptor could not be parsed
    #[error("Invalid notation {input:?}: {reason}")]
    InvalidNotation { input: String, reason: String },

    /// Board placement violates an engine invariant
    #[error("Invalid board: {message}")]
    InvalidBoard { message: String },

    /// Snapshot serialization/deserialization error
    #[error("Snapshot serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ChessEngineError {
    pub(crate) fn invalid_move(message: impl Into<String>) -> Self {
        ChessEngineError::InvalidMove {
            message: message.into(),
        }
    }

    pub(crate) fn invalid_notation(input: &str, reason: impl Into<String>) -> Self {
        ChessEngineError::InvalidNotation {
            input: input.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_board(message: impl Into<String>) -> Self {
        ChessEngineError::InvalidBoard {
            message: message.into(),
        }
    }
}

/// Result type alias for rules engine operations
pub type ChessEngineResult<T> = Result<T, ChessEngineError>;
