//! Mark balance invariant: X is never behind O and never more than one ahead.

use super::super::{GameSession, Player};
use super::Invariant;

/// Invariant: `count(X) - count(O)` is 0 or 1.
pub struct MarkBalanceInvariant;

impl Invariant<GameSession> for MarkBalanceInvariant {
    fn holds(session: &GameSession) -> bool {
        let x = session.board().count(Player::X);
        let o = session.board().count(Player::O);
        x == o || x == o + 1
    }

    fn description() -> &'static str {
        "X has as many marks as O, or one more"
    }
}
