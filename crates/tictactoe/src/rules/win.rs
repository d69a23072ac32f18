//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Position, Square};

/// Three positions that win when held by a single mark.
pub type Line = [Position; 3];

/// The winning lines, in evaluation order.
///
/// Rows top to bottom, columns left to right, then the main and anti
/// diagonals. When a board holds more than one complete line the first
/// one here is reported.
pub const LINES: [Line; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Finds the first complete line on the board and the mark holding it.
pub fn winning_line(board: &Board) -> Option<(Player, Line)> {
    LINES.into_iter().find_map(|line| {
        let [a, b, c] = line;
        match board.get(a) {
            Square::Occupied(mark)
                if board.get(b) == Square::Occupied(mark)
                    && board.get(c) == Square::Occupied(mark) =>
            {
                Some((mark, line))
            }
            _ => None,
        }
    })
}
