//! Turn-taking game session.
//!
//! A [`GameSession`] owns the board and is the only thing that writes to it.
//! Moves go through [`GameSession::apply_move`], which ignores anything
//! illegal, or [`GameSession::try_move`], which reports why a move was refused.
//! Either way a move is applied completely or not at all.

use super::action::{Move, MoveError};
use super::invariants::{InvariantSet, SessionInvariants};
use super::rules::{Line, Verdict, evaluate};
use super::status::Status;
use super::{Board, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// A single game: board, turn, and the verdict of the last move.
///
/// Deserializing replays the stored history, so a snapshot whose board,
/// turn, or verdict disagrees with its moves is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SessionSnapshot")]
pub struct GameSession {
    pub(crate) board: Board,
    pub(crate) current_turn: Player,
    pub(crate) started: bool,
    pub(crate) verdict: Verdict,
    pub(crate) history: Vec<Move>,
}

impl GameSession {
    /// Creates a session with an empty board and X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_turn: Player::X,
            started: false,
            verdict: Verdict::InProgress,
            history: Vec::new(),
        }
    }

    /// Places the current mark at `index`, ignoring illegal moves.
    ///
    /// Moves into an occupied square, off the board, or after the game has
    /// ended leave the session untouched. Read the session afterwards to see
    /// whether anything changed.
    #[instrument(skip(self))]
    pub fn apply_move(&mut self, index: i64) {
        if let Err(error) = self.try_move(index) {
            debug!(%error, "Ignoring illegal move");
        }
    }

    /// Places the current mark at `index` and returns the new verdict.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] once the game is won or drawn
    /// - [`MoveError::OutOfRange`] for indices outside 0-8
    /// - [`MoveError::SquareOccupied`] if the square already holds a mark
    #[instrument(skip(self), fields(turn = %self.current_turn))]
    pub fn try_move(&mut self, index: i64) -> Result<Verdict, MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }

        let position = usize::try_from(index)
            .ok()
            .and_then(Position::from_index)
            .ok_or(MoveError::OutOfRange(index))?;

        if !self.board.is_empty(position) {
            return Err(MoveError::SquareOccupied(position));
        }

        let mark = self.current_turn;
        self.board.set(position, Square::Occupied(mark));
        self.history.push(Move::new(mark, position));
        self.current_turn = mark.opponent();
        self.started = true;
        self.verdict = evaluate(&self.board);

        debug_assert!(
            SessionInvariants::check_all(self).is_ok(),
            "session invariants violated after {}",
            Move::new(mark, position)
        );

        match self.verdict {
            Verdict::Win { mark, line } => info!(%mark, ?line, "Game won"),
            Verdict::Draw => info!("Game drawn"),
            Verdict::InProgress => debug!(%position, %mark, "Move applied"),
        }

        Ok(self.verdict)
    }

    /// Restores the initial state: empty board, X to move.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        debug!(moves = self.history.len(), "Resetting session");
        *self = Self::new();
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mark that plays next.
    pub fn current_turn(&self) -> Player {
        self.current_turn
    }

    /// Returns true once any move has been accepted.
    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Returns the verdict of the current board.
    pub fn verdict(&self) -> Verdict {
        self.verdict
    }

    /// Returns true when the game is won or drawn.
    pub fn is_over(&self) -> bool {
        self.verdict.is_terminal()
    }

    /// Returns the winning line, if the game is won.
    pub fn winning_line(&self) -> Option<Line> {
        match self.verdict {
            Verdict::Win { line, .. } => Some(line),
            _ => None,
        }
    }

    /// Returns the moves accepted since the last reset.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the positions that would accept a move right now.
    pub fn valid_moves(&self) -> Vec<Position> {
        if self.is_over() {
            Vec::new()
        } else {
            Position::valid_moves(&self.board)
        }
    }

    /// Returns what a renderer should announce.
    pub fn status(&self) -> Status {
        Status::from_verdict(&self.verdict, self.current_turn)
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Serialized form of a session before it is checked.
///
/// The stored verdict is ignored and recomputed from the replayed moves.
#[derive(Debug, Deserialize)]
pub struct SessionSnapshot {
    /// Stored board.
    board: Board,
    /// Stored mark to move.
    current_turn: Player,
    /// Stored started flag.
    started: bool,
    /// Moves to replay.
    history: Vec<Move>,
}

/// A session snapshot that no sequence of legal moves produces.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("Inconsistent session snapshot: {}", message)]
pub struct SnapshotError {
    /// What did not match.
    pub message: String,
}

impl SnapshotError {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl TryFrom<SessionSnapshot> for GameSession {
    type Error = SnapshotError;

    #[instrument(skip_all, fields(moves = snapshot.history.len()))]
    fn try_from(snapshot: SessionSnapshot) -> Result<Self, Self::Error> {
        let mut session = GameSession::new();
        for mov in &snapshot.history {
            if mov.player != session.current_turn {
                return Err(SnapshotError::new(format!(
                    "move {} played out of turn",
                    mov
                )));
            }
            session
                .try_move(mov.position.to_index() as i64)
                .map_err(|e| SnapshotError::new(format!("move {} rejected: {}", mov, e)))?;
        }

        if session.board != snapshot.board {
            return Err(SnapshotError::new("board does not match history"));
        }
        if session.current_turn != snapshot.current_turn {
            return Err(SnapshotError::new("turn does not match history"));
        }
        if session.started != snapshot.started {
            return Err(SnapshotError::new("started flag does not match history"));
        }
        SessionInvariants::check_all(&session).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description)
                .collect::<Vec<_>>()
                .join("; ");
            SnapshotError::new(descriptions)
        })?;

        debug!(verdict = ?session.verdict, "Session snapshot restored");
        Ok(session)
    }
}
