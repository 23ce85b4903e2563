//! Tests for legality filtering and game state transitions
//!
//! # Test Organization
//!
//! - `test_valid_moves_*` - Simulate-and-filter legality
//! - `test_make_move_*` - Turn order, rejection, board mutation
//! - `test_state_*` - Check, checkmate, stalemate, resignation

use super::*;
use crate::board::Board;
use crate::error::ChessEngineError;
use crate::move_gen::piece_moves;
use crate::types::*;

fn pos(row: u8, column: u8) -> Position {
    Position::at(row, column)
}

fn create_test_game(pieces: &[(Color, PieceType, (u8, u8))], turn: Color) -> Game {
    let mut board = Board::empty();
    for &(color, piece_type, (row, column)) in pieces {
        board.place(pos(row, column), Piece::new(color, piece_type));
    }
    Game::with_board(board, turn).expect("fixture has at most one king per color")
}

// ============================================================================
// Legality Filter Tests
// ============================================================================

#[test]
fn test_valid_moves_empty_square() {
    let game = Game::new();
    assert!(game.valid_moves(pos(5, 5)).is_empty());
}

#[test]
fn test_valid_moves_pinned_piece_cannot_leave_file() {
    //! A rook pinned on the king's file may only slide along the pin line
    let game = create_test_game(
        &[
            (Color::White, PieceType::King, (1, 5)),
            (Color::White, PieceType::Rook, (3, 5)),
            (Color::Black, PieceType::Rook, (8, 5)),
            (Color::Black, PieceType::King, (8, 1)),
        ],
        Color::White,
    );

    let moves = game.valid_moves(pos(3, 5));
    assert!(!moves.is_empty());
    assert!(moves.iter().all(|mv| mv.end().column() == 5));
    assert!(moves.contains(&Move::new(pos(3, 5), pos(8, 5))), "capturing the pinner is legal");
}

#[test]
fn test_valid_moves_king_cannot_step_into_attack() {
    let game = create_test_game(
        &[
            (Color::White, PieceType::King, (1, 5)),
            (Color::Black, PieceType::Rook, (8, 4)),
            (Color::Black, PieceType::King, (8, 8)),
        ],
        Color::White,
    );

    let ends: Vec<Position> = game.valid_moves(pos(1, 5)).iter().map(|mv| mv.end()).collect();
    assert!(!ends.contains(&pos(1, 4)));
    assert!(!ends.contains(&pos(2, 4)));
    assert!(ends.contains(&pos(2, 5)));
}

#[test]
fn test_valid_moves_subset_of_pseudo_legal() {
    let game = Game::new();
    for start in game.board().all_occupied_positions() {
        let pseudo = piece_moves(game.board(), start);
        for mv in game.valid_moves(start) {
            assert!(pseudo.contains(&mv));
        }
    }
}

#[test]
fn test_valid_moves_does_not_mutate_game() {
    let game = create_test_game(
        &[
            (Color::White, PieceType::King, (1, 5)),
            (Color::White, PieceType::Queen, (4, 4)),
            (Color::Black, PieceType::Rook, (8, 5)),
            (Color::Black, PieceType::King, (8, 1)),
        ],
        Color::White,
    );
    let before = game.clone();

    for start in game.board().all_occupied_positions() {
        let _ = game.valid_moves(start);
    }
    assert_eq!(game, before);
}

// ============================================================================
// Move Execution Tests
// ============================================================================

#[test]
fn test_make_move_flips_turn() {
    let mut game = Game::new();
    game.make_move(Move::new(pos(2, 5), pos(4, 5))).expect("e2e4 is legal");

    assert_eq!(game.turn(), Color::Black);
    assert!(game.board().is_empty(pos(2, 5)));
    assert_eq!(
        game.board().get(pos(4, 5)),
        Some(Piece::new(Color::White, PieceType::Pawn))
    );
}

#[test]
fn test_make_move_rejects_wrong_side() {
    let mut game = Game::new();
    let result = game.make_move(Move::new(pos(7, 5), pos(5, 5)));
    assert!(matches!(result, Err(ChessEngineError::InvalidMove { .. })));
    assert_eq!(game.turn(), Color::White);
}

#[test]
fn test_make_move_rejects_empty_start() {
    let mut game = Game::new();
    let result = game.make_move(Move::new(pos(4, 4), pos(5, 4)));
    assert!(matches!(result, Err(ChessEngineError::InvalidMove { .. })));
}

#[test]
fn test_make_move_requires_promotion_type() {
    //! On the last rank only the four promoting variants are legal
    let mut game = create_test_game(
        &[
            (Color::White, PieceType::Pawn, (7, 1)),
            (Color::White, PieceType::King, (1, 5)),
            (Color::Black, PieceType::King, (5, 8)),
        ],
        Color::White,
    );

    assert!(game.make_move(Move::new(pos(7, 1), pos(8, 1))).is_err());
    game.make_move(Move::with_promotion(pos(7, 1), pos(8, 1), PieceType::Knight))
        .expect("knight promotion is legal");
    assert_eq!(
        game.board().get(pos(8, 1)),
        Some(Piece::new(Color::White, PieceType::Knight))
    );
}

#[test]
fn test_make_move_must_resolve_check() {
    let mut game = create_test_game(
        &[
            (Color::White, PieceType::King, (1, 5)),
            (Color::White, PieceType::Pawn, (2, 1)),
            (Color::Black, PieceType::Rook, (8, 5)),
            (Color::Black, PieceType::King, (8, 1)),
        ],
        Color::White,
    );

    assert!(game.is_in_check(Color::White));
    assert!(game.make_move(Move::new(pos(2, 1), pos(3, 1))).is_err());
    assert!(game.make_move(Move::new(pos(1, 5), pos(1, 4))).is_ok());
}

// ============================================================================
// State Tests
// ============================================================================

#[test]
fn test_state_fools_mate() {
    let mut game = Game::new();
    let line = [
        ((2, 6), (3, 6)),
        ((7, 5), (5, 5)),
        ((2, 7), (4, 7)),
        ((8, 4), (4, 8)),
    ];
    for ((from_row, from_col), (to_row, to_col)) in line {
        game.make_move(Move::new(pos(from_row, from_col), pos(to_row, to_col)))
            .expect("line is legal");
    }

    assert!(game.is_in_checkmate(Color::White));
    assert_eq!(game.status(), GameStatus::Checkmate);
    assert_eq!(game.result(), Some(GameResult::BlackWins));
    assert!(game.make_move(Move::new(pos(2, 1), pos(3, 1))).is_err(), "no moves once over");
}

#[test]
fn test_state_check_is_informational() {
    let game = create_test_game(
        &[
            (Color::White, PieceType::King, (1, 5)),
            (Color::Black, PieceType::Rook, (8, 5)),
            (Color::Black, PieceType::King, (8, 1)),
        ],
        Color::White,
    );
    assert_eq!(game.status(), GameStatus::Check);
    assert!(!game.is_over());
}

#[test]
fn test_state_resign() {
    let mut game = Game::new();
    game.resign(Color::White).expect("game in progress");

    assert_eq!(game.result(), Some(GameResult::BlackWins));
    assert_eq!(game.status(), GameStatus::Resigned);
    assert!(game.resign(Color::Black).is_err());
    assert!(game.make_move(Move::new(pos(2, 5), pos(4, 5))).is_err());
}

#[test]
fn test_state_rejects_two_kings() {
    let mut board = Board::empty();
    board.place(pos(1, 1), Piece::new(Color::White, PieceType::King));
    board.place(pos(1, 8), Piece::new(Color::White, PieceType::King));

    let result = Game::with_board(board, Color::White);
    assert!(matches!(result, Err(ChessEngineError::InvalidBoard { .. })));
}

#[test]
fn test_reset_restores_start() {
    let mut game = Game::new();
    game.make_move(Move::new(pos(2, 5), pos(4, 5))).expect("legal");
    game.reset();
    assert_eq!(game, Game::new());
}
