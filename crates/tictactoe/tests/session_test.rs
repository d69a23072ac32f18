//! Tests for the game session state machine.

use serde_json::json;
use tictactoe::{
    Board, GameSession, MoveError, Player, Position, Square, Status, Verdict, evaluate,
};

fn play(moves: &[i64]) -> GameSession {
    let mut session = GameSession::new();
    for index in moves {
        session.apply_move(*index);
    }
    session
}

#[test]
fn test_initial_state() {
    let session = GameSession::new();
    assert_eq!(session.board(), &Board::new());
    assert_eq!(session.current_turn(), Player::X);
    assert!(!session.is_started());
    assert_eq!(session.verdict(), Verdict::InProgress);
    assert_eq!(session.status(), Status::Turn(Player::X));
    assert_eq!(session.valid_moves().len(), 9);
}

#[test]
fn test_alternating_players() {
    let mut session = GameSession::new();
    session.apply_move(4);
    assert_eq!(session.current_turn(), Player::O);
    assert!(session.is_started());
    session.apply_move(0);
    assert_eq!(session.current_turn(), Player::X);
    assert_eq!(
        session.board().get(Position::Center),
        Square::Occupied(Player::X)
    );
    assert_eq!(
        session.board().get(Position::TopLeft),
        Square::Occupied(Player::O)
    );
}

#[test]
fn test_same_square_twice_is_noop() {
    let mut session = GameSession::new();
    session.apply_move(0);
    session.apply_move(0);

    let occupied: Vec<_> = session
        .board()
        .squares()
        .iter()
        .filter(|s| **s != Square::Empty)
        .collect();
    assert_eq!(occupied, vec![&Square::Occupied(Player::X)]);
    assert_eq!(session.current_turn(), Player::O);
    assert_eq!(session.history().len(), 1);
}

#[test]
fn test_top_row_win() {
    let session = play(&[0, 3, 1, 4, 2]);
    assert_eq!(
        session.verdict(),
        Verdict::Win {
            mark: Player::X,
            line: [Position::TopLeft, Position::TopCenter, Position::TopRight],
        }
    );
    assert_eq!(session.status(), Status::Winner(Player::X));
    assert!(session.is_over());
    assert!(session.valid_moves().is_empty());
}

#[test]
fn test_full_board_draw() {
    let session = play(&[0, 1, 2, 4, 3, 5, 7, 6, 8]);
    assert_eq!(session.verdict(), Verdict::Draw);
    assert_eq!(session.status(), Status::Draw);
    assert!(session.board().squares().iter().all(|s| *s != Square::Empty));
    assert_eq!(session.winning_line(), None);
}

#[test]
fn test_left_column_ends_game_before_board_fills() {
    // X takes 0, 3 and 6 on the seventh move; the last two moves are refused.
    let session = play(&[0, 1, 2, 4, 3, 5, 6, 8, 7]);
    assert_eq!(
        session.verdict(),
        Verdict::Win {
            mark: Player::X,
            line: [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
        }
    );
    assert_eq!(session.history().len(), 7);
    assert!(session.board().is_empty(Position::BottomCenter));
    assert!(session.board().is_empty(Position::BottomRight));
}

#[test]
fn test_moves_after_win_are_ignored() {
    let mut session = play(&[0, 3, 1, 4, 2]);
    let before = session.clone();

    for index in [5, 6, 7, 8] {
        session.apply_move(index);
    }

    assert_eq!(session, before);
    assert_eq!(session.try_move(5), Err(MoveError::GameOver));
    assert_eq!(session.status(), Status::Winner(Player::X));
}

#[test]
fn test_moves_after_draw_are_ignored() {
    let mut session = play(&[0, 1, 2, 4, 3, 5, 7, 6, 8]);
    let before = session.clone();
    session.apply_move(0);
    assert_eq!(session, before);
    assert_eq!(session.status(), Status::Draw);
}

#[test]
fn test_out_of_range_is_noop() {
    let mut session = GameSession::new();
    session.apply_move(4);
    let before = session.clone();

    for index in [-1, 9, 100, i64::MIN, i64::MAX] {
        session.apply_move(index);
        assert_eq!(session, before);
    }
    assert_eq!(session.current_turn(), Player::O);
}

#[test]
fn test_try_move_reports_reason() {
    let mut session = GameSession::new();
    assert_eq!(session.try_move(-1), Err(MoveError::OutOfRange(-1)));
    assert_eq!(session.try_move(9), Err(MoveError::OutOfRange(9)));
    assert_eq!(session.try_move(4), Ok(Verdict::InProgress));
    assert_eq!(
        session.try_move(4),
        Err(MoveError::SquareOccupied(Position::Center))
    );

    let err = session.try_move(4).unwrap_err();
    assert!(err.to_string().contains("occupied"));
}

#[test]
fn test_reset_from_any_state() {
    for moves in [
        &[][..],
        &[4, 0][..],
        &[0, 3, 1, 4, 2][..],
        &[0, 1, 2, 4, 3, 5, 7, 6, 8][..],
    ] {
        let mut session = play(moves);
        session.reset();
        assert_eq!(session, GameSession::new());
        assert_eq!(session.status(), Status::Turn(Player::X));
        assert!(!session.is_started());
    }
}

#[test]
fn test_session_can_replay_after_reset() {
    let mut session = play(&[0, 3, 1, 4, 2]);
    session.reset();
    session.apply_move(8);
    assert_eq!(
        session.board().get(Position::BottomRight),
        Square::Occupied(Player::X)
    );
}

#[test]
fn test_session_verdict_matches_evaluator() {
    let mut session = GameSession::new();
    for index in [4, 0, 8, 2, 1, 7, 6, 3, 5] {
        session.apply_move(index);
        assert_eq!(session.verdict(), evaluate(session.board()));
    }
}

#[test]
fn test_valid_moves_shrink_with_play() {
    let session = play(&[0, 4]);
    let valid = session.valid_moves();
    assert_eq!(valid.len(), 7);
    assert!(!valid.contains(&Position::TopLeft));
    assert!(!valid.contains(&Position::Center));
}

#[test]
fn test_status_text() {
    assert_eq!(GameSession::new().status().to_string(), "Next player: X");
    assert_eq!(play(&[4]).status().to_string(), "Next player: O");
    assert_eq!(play(&[0, 3, 1, 4, 2]).status().to_string(), "Winner: X");
    assert_eq!(
        play(&[0, 1, 2, 4, 3, 5, 7, 6, 8]).status().to_string(),
        "Draw"
    );
}

#[test]
fn test_session_serializes() {
    let session = play(&[0, 3, 1, 4, 2]);
    let json = serde_json::to_string(&session).unwrap();
    let restored: GameSession = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, session);
}

#[test]
fn test_snapshot_with_unlogged_marks_is_rejected() {
    let mut value = serde_json::to_value(play(&[4])).unwrap();
    value["history"] = json!([]);
    value["current_turn"] = json!("X");

    let err = serde_json::from_value::<GameSession>(value).unwrap_err();
    assert!(err.to_string().contains("board does not match history"));
}

#[test]
fn test_snapshot_with_wrong_turn_is_rejected() {
    let mut value = serde_json::to_value(play(&[4])).unwrap();
    value["current_turn"] = json!("X");

    let err = serde_json::from_value::<GameSession>(value).unwrap_err();
    assert!(err.to_string().contains("turn does not match history"));
}

#[test]
fn test_snapshot_verdict_is_recomputed() {
    let mut value = serde_json::to_value(play(&[0, 3, 1, 4, 2])).unwrap();
    value["verdict"] = json!("InProgress");

    let mut session: GameSession = serde_json::from_value(value).unwrap();
    assert_eq!(session.status(), Status::Winner(Player::X));

    let before = session.clone();
    session.apply_move(8);
    assert_eq!(session, before);
}

#[test]
fn test_snapshot_with_moves_after_win_is_rejected() {
    let mut value = serde_json::to_value(play(&[0, 3, 1, 4, 2])).unwrap();
    value["history"]
        .as_array_mut()
        .unwrap()
        .push(json!({ "player": "O", "position": "BottomRight" }));

    let err = serde_json::from_value::<GameSession>(value).unwrap_err();
    assert!(err.to_string().contains("Game is already over"));
}

#[test]
fn test_restored_snapshot_keeps_playing() {
    let json = serde_json::to_string(&play(&[4, 0])).unwrap();
    let mut session: GameSession = serde_json::from_str(&json).unwrap();
    session.apply_move(8);
    assert_eq!(session.current_turn(), Player::O);
    assert_eq!(session.history().len(), 3);
}
