//! Tic-tac-toe game logic.
//!
//! Two pieces carry the rules:
//!
//! - [`evaluate`] maps a [`Board`] to a [`Verdict`]: in progress, won along a
//!   specific line, or drawn. It is pure and cheap enough to call on every
//!   render.
//! - [`GameSession`] owns a board and the mark to move, applies moves, and
//!   consults [`evaluate`] after each one. Illegal moves are ignored.
//!
//! Rendering lives outside the rules: [`render`] draws a session as text
//! using a [`Theme`].
//!
//! # Example
//!
//! ```
//! use tictactoe::{GameSession, Player, Status};
//!
//! let mut session = GameSession::new();
//! for index in [0, 3, 1, 4, 2] {
//!     session.apply_move(index);
//! }
//! assert_eq!(session.status(), Status::Winner(Player::X));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
pub mod invariants;
mod position;
mod render;
pub mod rules;
mod session;
mod status;
mod theme;
mod types;

pub use action::{Move, MoveError};
pub use position::Position;
pub use render::{render, render_board};
pub use rules::{LINES, Line, Verdict, evaluate};
pub use session::{GameSession, SnapshotError};
pub use status::Status;
pub use theme::{Theme, ThemeError};
pub use types::{Board, Player, Square};
