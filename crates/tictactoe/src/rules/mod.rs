//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`]. Nothing here mutates its input or keeps
//! state, so a verdict can be recomputed on every render.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, Line, winning_line};

use super::{Board, Player};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Outcome classification of a board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    /// No complete line and at least one empty square.
    #[default]
    InProgress,
    /// `mark` holds every square of `line`.
    Win {
        /// The winning mark.
        mark: Player,
        /// The winning positions, in line order.
        line: Line,
    },
    /// Full board without a complete line.
    Draw,
}

impl Verdict {
    /// Returns true for `Win` and `Draw`.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Verdict::InProgress)
    }

    /// Returns the winner, if any.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Verdict::Win { mark, .. } => Some(*mark),
            _ => None,
        }
    }
}

/// Evaluates a board: first complete line in [`LINES`] order, else draw on a
/// full board, else in progress.
#[instrument(level = "trace", skip(board))]
pub fn evaluate(board: &Board) -> Verdict {
    if let Some((mark, line)) = winning_line(board) {
        Verdict::Win { mark, line }
    } else if is_full(board) {
        Verdict::Draw
    } else {
        Verdict::InProgress
    }
}
