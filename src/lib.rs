//! # Chess Rules Engine
//!
//! Board state, per-piece move generation, check/checkmate/stalemate detection
//! and move legality enforcement for standard chess (without castling,
//! en passant or draw rules).
//!
//! ## Architecture
//!
//! - [`types`] - `Position`, `Piece`, `Move` and friends; small `Copy` values
//! - [`board`] - 8x8 grid with no rule knowledge
//! - [`move_gen`] - pseudo-legal moves, one rule per piece type
//! - [`api`] - [`Game`]: legality filtering, move application, terminal states
//! - [`notation`] - `e2e4` / `e7e8q` descriptors to [`Move`]
//! - [`snapshot`] - serde-friendly game state for storage layers
//! - [`settings`] - configuration of the `chess_replay` binary
//!
//! ## Example
//!
//! ```rust
//! use chess_rules::{Game, Color};
//!
//! let mut game = Game::new();
//! game.make_move("e2e4".parse().unwrap()).unwrap();
//! assert_eq!(game.turn(), Color::Black);
//! ```

pub mod api;
pub mod board;
pub mod constants;
pub mod error;
pub mod move_gen;
pub mod notation;
pub mod settings;
pub mod snapshot;
pub mod types;

pub use api::Game;
pub use board::Board;
pub use error::{ChessEngineError, ChessEngineResult};
pub use snapshot::GameSnapshot;
pub use types::{Color, GameResult, GameStatus, Move, Piece, PieceType, Position};
