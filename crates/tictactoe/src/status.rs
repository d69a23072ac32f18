//! Display classification of a session.

use super::{Player, Verdict};
use serde::{Deserialize, Serialize};

/// What a renderer should announce.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Status {
    /// The game is won by this mark.
    #[display("Winner: {}", _0)]
    Winner(Player),
    /// The game ended without a winner.
    #[display("Draw")]
    Draw,
    /// The game continues and this mark plays next.
    #[display("Next player: {}", _0)]
    Turn(Player),
}

impl Status {
    /// Projects a verdict and the mark to move onto a status.
    pub fn from_verdict(verdict: &Verdict, to_move: Player) -> Self {
        match verdict {
            Verdict::Win { mark, .. } => Status::Winner(*mark),
            Verdict::Draw => Status::Draw,
            Verdict::InProgress => Status::Turn(to_move),
        }
    }
}
