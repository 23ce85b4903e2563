//! Snapshot persistence tests
//!
//! A storage layer only ever sees [`GameSnapshot`]; these tests check that a
//! game survives the JSON trip with its board, turn and result intact.

use chess_rules::{ChessEngineError, Color, Game, GameResult, GameSnapshot, Piece, PieceType};

fn play(game: &mut Game, line: &[&str]) {
    for text in line {
        game.make_move(text.parse().expect("valid notation")).expect("line is legal");
    }
}

#[test]
fn test_json_round_trip_mid_game() {
    let mut game = Game::new();
    play(&mut game, &["e2e4", "c7c5", "g1f3"]);

    let json = game.snapshot().to_json().expect("serializable");
    let restored = Game::from_snapshot(&GameSnapshot::from_json(&json).expect("parsable"))
        .expect("valid snapshot");

    assert_eq!(restored, game);
    assert_eq!(restored.turn(), Color::Black);
    assert_eq!(restored.all_valid_moves(), game.all_valid_moves());
}

#[test]
fn test_restored_game_keeps_playing() {
    let mut game = Game::new();
    play(&mut game, &["d2d4"]);

    let mut restored = Game::from_snapshot(&game.snapshot()).expect("valid snapshot");
    play(&mut restored, &["d7d5"]);
    play(&mut game, &["d7d5"]);

    assert_eq!(restored, game);
}

#[test]
fn test_resignation_survives_round_trip() {
    let mut game = Game::new();
    game.resign(Color::Black).expect("game in progress");

    let restored = Game::from_snapshot(&game.snapshot()).expect("valid snapshot");

    assert_eq!(restored.result(), Some(GameResult::WhiteWins));
    assert!(restored.is_over());
}

#[test]
fn test_checkmate_recognised_without_stored_result() {
    let mut game = Game::new();
    play(&mut game, &["f2f3", "e7e5", "g2g4", "d8h4"]);

    let mut snapshot = game.snapshot();
    snapshot.result = None;
    let restored = Game::from_snapshot(&snapshot).expect("valid snapshot");

    assert_eq!(restored.result(), Some(GameResult::BlackWins));
}

#[test]
fn test_snapshot_with_two_white_kings_rejected() {
    let mut snapshot = Game::new().snapshot();
    snapshot.board[0] = Some(Piece::new(Color::White, PieceType::King));

    assert!(matches!(
        Game::from_snapshot(&snapshot),
        Err(ChessEngineError::InvalidBoard { .. })
    ));
}

#[test]
fn test_pretty_json_is_parsable() {
    let snapshot = Game::new().snapshot();
    let pretty = snapshot.to_json_pretty().expect("serializable");

    assert!(pretty.contains('\n'));
    assert_eq!(GameSnapshot::from_json(&pretty).expect("parsable"), snapshot);
}
