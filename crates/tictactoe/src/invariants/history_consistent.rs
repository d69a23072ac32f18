//! History consistency invariant: the move log explains the board.

use super::super::{GameSession, Player, Square};
use super::Invariant;

/// Invariant: history matches the board and the turn.
///
/// Every logged move's square holds that move's mark, the log covers every
/// occupied square, players alternate starting with X, and the mark to move
/// follows from the log length.
pub struct HistoryConsistentInvariant;

impl Invariant<GameSession> for HistoryConsistentInvariant {
    fn holds(session: &GameSession) -> bool {
        let history = session.history();
        let board = session.board();

        let occupied = board
            .squares()
            .iter()
            .filter(|s| **s != Square::Empty)
            .count();
        if occupied != history.len() {
            return false;
        }

        let marks_match = history
            .iter()
            .all(|mov| board.get(mov.position) == Square::Occupied(mov.player));
        let alternates = history.iter().enumerate().all(|(i, mov)| {
            let expected = if i % 2 == 0 { Player::X } else { Player::O };
            mov.player == expected
        });
        let expected_turn = if history.len() % 2 == 0 {
            Player::X
        } else {
            Player::O
        };

        marks_match && alternates && session.current_turn() == expected_turn
    }

    fn description() -> &'static str {
        "Move history matches the board and the turn"
    }
}
