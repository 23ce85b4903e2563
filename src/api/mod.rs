//! Public API for the rules engine
//!
//! [`Game`] owns one [`Board`](crate::board::Board) plus the side to move and the
//! terminal result. Everything a caller needs goes through it.
//!
//! ## Module Organization
//!
//! - `game` - Game lifecycle (`new`, `with_board`, `reset`, accessors)
//! - `moves` - Legality filtering and move execution (`valid_moves`, `make_move`)
//! - `state` - Check/terminal classification and resignation

mod game;
mod moves;
mod state;

#[cfg(test)]
mod tests;

pub use game::Game;
