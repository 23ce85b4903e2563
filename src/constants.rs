//! # Rules Constants - Board Geometry & Piece Movement Vectors
//!
//! ## Overview
//!
//! This module centralizes the fixed numbers the rules engine is built on: the board
//! dimensions, the movement vectors of every piece type, the standard back-rank layout
//! and the set of piece types a pawn may promote to.
//!
//! ## Coordinate System
//!
//! Positions are **1-indexed** `(row, column)` pairs, both in `1..=8`:
//! - **Row 1** is WHITE's back rank, **row 8** is BLACK's back rank
//! - **Column 1** is the a-file, **column 8** is the h-file
//!
//! Movement vectors below are `(row_delta, column_delta)` pairs applied to a position.
//! A positive row delta moves toward BLACK's side of the board.
//!
//! ## Why Vectors Instead of Square Offsets?
//!
//! A one-dimensional `0..64` encoding needs wrap-around checks on every step (moving
//! east from the h-file lands on the a-file of the next rank). Two-dimensional deltas
//! make the bounds check a plain range test on each coordinate, so every generator
//! in `move_gen` clips destinations with [`Position::offset`](crate::types::Position::offset).

use crate::types::PieceType;

/// Number of rows and columns on the board
pub const BOARD_SIZE: usize = 8;

/// Smallest valid row/column coordinate
pub const MIN_COORD: u8 = 1;

/// Largest valid row/column coordinate
pub const MAX_COORD: u8 = BOARD_SIZE as u8;

/// Number of squares on the board
pub const SQUARE_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

pub const N: (i8, i8) = (1, 0);
pub const S: (i8, i8) = (-1, 0);
pub const E: (i8, i8) = (0, 1);
pub const W: (i8, i8) = (0, -1);
pub const NE: (i8, i8) = (1, 1);
pub const NW: (i8, i8) = (1, -1);
pub const SE: (i8, i8) = (-1, 1);
pub const SW: (i8, i8) = (-1, -1);

pub const ROOK_DIRS: [(i8, i8); 4] = [N, S, W, E];
pub const BISHOP_DIRS: [(i8, i8); 4] = [NE, NW, SE, SW];
pub const QUEEN_DIRS: [(i8, i8); 8] = [N, S, W, E, NE, NW, SE, SW];
pub const KING_OFFSETS: [(i8, i8); 8] = QUEEN_DIRS;
pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (2, 1), (1, 2), (-1, 2), (-2, 1),
    (-2, -1), (-1, -2), (1, -2), (2, -1),
];

/// Piece types a pawn may become on the far back rank, in emission order
pub const PROMOTION_TYPES: [PieceType; 4] = [
    PieceType::Queen,
    PieceType::Rook,
    PieceType::Bishop,
    PieceType::Knight,
];

/// Back-rank layout from column 1 to column 8, shared by both colors
pub const BACK_RANK: [PieceType; BOARD_SIZE] = [
    PieceType::Rook,
    PieceType::Knight,
    PieceType::Bishop,
    PieceType::Queen,
    PieceType::King,
    PieceType::Bishop,
    PieceType::Knight,
    PieceType::Rook,
];
