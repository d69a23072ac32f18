//! Interactive and scripted front ends over a [`GameSession`].

use std::io::{BufRead, Write};
use tictactoe::{GameSession, Position, Theme, render};
use tracing::{debug, instrument};

const HELP: &str = "Enter a cell (0-8 or a label like \"top left\"), r to reset, q to quit.";

/// What a line of input asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Input {
    Cell(i64),
    Reset,
    Quit,
    Unknown,
}

fn parse_input(line: &str) -> Input {
    let line = line.trim();
    match line.to_ascii_lowercase().as_str() {
        "q" | "quit" => Input::Quit,
        "r" | "reset" => Input::Reset,
        _ => line
            .parse::<i64>()
            .ok()
            .or_else(|| Position::from_label_or_number(line).map(|pos| pos.to_index() as i64))
            .map_or(Input::Unknown, Input::Cell),
    }
}

/// Runs the interactive loop until `q` or end of input.
#[instrument(skip_all)]
pub fn play<R: BufRead, W: Write>(input: R, mut output: W, theme: &Theme) -> anyhow::Result<()> {
    let mut session = GameSession::new();
    writeln!(output, "{}\n\n{}", HELP, render(&session, theme))?;

    for line in input.lines() {
        match parse_input(&line?) {
            Input::Quit => break,
            Input::Reset => session.reset(),
            Input::Cell(index) => {
                if let Err(error) = session.try_move(index) {
                    writeln!(output, "{}", error)?;
                }
            }
            Input::Unknown => {
                writeln!(output, "{}", HELP)?;
                continue;
            }
        }
        debug!(moves = session.history().len(), "Rendering session");
        writeln!(output, "\n{}", render(&session, theme))?;
    }

    Ok(())
}

/// Applies `moves` to a fresh session and returns the rendered result.
///
/// Illegal moves in the list are skipped, just as the session skips them.
#[instrument(skip(theme))]
pub fn replay(moves: &[i64], theme: &Theme) -> String {
    let mut session = GameSession::new();
    for index in moves {
        session.apply_move(*index);
    }
    render(&session, theme)
}
