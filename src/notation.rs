//! Coordinate notation parsing
//!
//! Resolves the move descriptors a session layer receives from players into
//! [`Move`] values. A descriptor is a start square, an end square and an
//! optional promotion letter, with optional whitespace between the parts:
//!
//! - `e2e4`, `e2 e4`
//! - `e7e8q`, `e7 e8 q`, `E7E8Q`
//!
//! Squares are a file letter `a`-`h` (column 1-8) followed by a rank digit
//! `1`-`8` (row). Promotion letters are `q`, `r`, `b`, `n`.

use crate::constants::PROMOTION_TYPES;
use crate::error::{ChessEngineError, ChessEngineResult};
use crate::types::*;
use std::str::FromStr;

/// Parse a square such as `e2`
pub fn parse_position(input: &str) -> ChessEngineResult<Position> {
    let mut chars = input.trim().chars();
    let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
        return Err(ChessEngineError::invalid_notation(
            input,
            "a square is a file letter followed by a rank digit",
        ));
    };
    position_from_chars(input, file, rank)
}

/// Parse a move descriptor such as `e2e4` or `e7 e8 q`
pub fn parse_move(input: &str) -> ChessEngineResult<Move> {
    let compact: Vec<char> = input.chars().filter(|c| !c.is_whitespace()).collect();

    let (start, end, promotion) = match compact.as_slice() {
        [f1, r1, f2, r2] => (
            position_from_chars(input, *f1, *r1)?,
            position_from_chars(input, *f2, *r2)?,
            None,
        ),
        [f1, r1, f2, r2, p] => (
            position_from_chars(input, *f1, *r1)?,
            position_from_chars(input, *f2, *r2)?,
            Some(promotion_from_char(input, *p)?),
        ),
        _ => {
            return Err(ChessEngineError::invalid_notation(
                input,
                "expected start square, end square and optional promotion letter",
            ))
        }
    };

    Ok(match promotion {
        Some(piece_type) => Move::with_promotion(start, end, piece_type),
        None => Move::new(start, end),
    })
}

fn position_from_chars(input: &str, file: char, rank: char) -> ChessEngineResult<Position> {
    let file = file.to_ascii_lowercase();
    let column = match file {
        'a'..='h' => file as u8 - b'a' + 1,
        _ => {
            return Err(ChessEngineError::invalid_notation(
                input,
                format!("unknown file {file:?}"),
            ))
        }
    };
    let row = rank
        .to_digit(10)
        .and_then(|digit| u8::try_from(digit).ok())
        .ok_or_else(|| {
            ChessEngineError::invalid_notation(input, format!("unknown rank {rank:?}"))
        })?;

    Position::new(row, column).ok_or_else(|| {
        ChessEngineError::invalid_notation(input, format!("rank {row} is off the board"))
    })
}

fn promotion_from_char(input: &str, symbol: char) -> ChessEngineResult<PieceType> {
    PieceType::from_symbol(symbol)
        .filter(|piece_type| PROMOTION_TYPES.contains(piece_type))
        .ok_or_else(|| {
            ChessEngineError::invalid_notation(input, format!("cannot promote to {symbol:?}"))
        })
}

impl FromStr for Position {
    type Err = ChessEngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_position(s)
    }
}

impl FromStr for Move {
    type Err = ChessEngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_move(s)
    }
}
