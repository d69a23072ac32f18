//! Plain-text rendering of a session.

use super::rules::Line;
use super::theme::Theme;
use super::{Board, GameSession, Position};

/// Renders the board as a grid, wrapping `highlight` cells in the theme's
/// highlight brackets.
///
/// Every cell is padded to the same width so columns line up whether or not
/// a cell is highlighted.
pub fn render_board(board: &Board, theme: &Theme, highlight: Option<&Line>) -> String {
    let open = theme.highlight_open();
    let close = theme.highlight_close();
    let glyph_width = [theme.x(), theme.o(), theme.empty()]
        .iter()
        .map(|glyph| glyph.chars().count())
        .max()
        .unwrap_or(0);

    let cell = |pos: Position| {
        let glyph = theme.glyph(board.get(pos));
        let glyph = format!("{:^width$}", glyph, width = glyph_width);
        if highlight.is_some_and(|line| line.contains(&pos)) {
            format!("{}{}{}", open, glyph, close)
        } else {
            format!(
                "{}{}{}",
                " ".repeat(open.chars().count()),
                glyph,
                " ".repeat(close.chars().count())
            )
        }
    };

    let cell_width = open.chars().count() + glyph_width + close.chars().count();
    let separator = vec!["-".repeat(cell_width); 3].join("+");

    Position::ALL
        .chunks(3)
        .map(|row| row.iter().map(|pos| cell(*pos)).collect::<Vec<_>>().join("|"))
        .collect::<Vec<_>>()
        .join(&format!("\n{}\n", separator))
}

/// Renders the board followed by the status line.
pub fn render(session: &GameSession, theme: &Theme) -> String {
    let line = session.winning_line();
    format!(
        "{}\n\n{}",
        render_board(session.board(), theme, line.as_ref()),
        session.status()
    )
}
