//! Visual theme for text rendering.

use super::{Player, Square};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Glyphs used to draw the board.
///
/// Missing keys in a theme file fall back to the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    /// Glyph for X.
    x: String,
    /// Glyph for O.
    o: String,
    /// Glyph for an empty square.
    empty: String,
    /// Placed before each cell of the winning line.
    highlight_open: String,
    /// Placed after each cell of the winning line.
    highlight_close: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            x: "X".to_string(),
            o: "O".to_string(),
            empty: ".".to_string(),
            highlight_open: "[".to_string(),
            highlight_close: "]".to_string(),
        }
    }
}

impl Theme {
    /// Loads a theme from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ThemeError> {
        debug!("Loading theme from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ThemeError::new(format!("Failed to read theme file: {}", e)))?;

        let theme = Self::from_toml(&content)?;
        info!(x = %theme.x, o = %theme.o, "Theme loaded");
        Ok(theme)
    }

    /// Parses a theme from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ThemeError> {
        toml::from_str(content)
            .map_err(|e| ThemeError::new(format!("Failed to parse theme: {}", e)))
    }

    /// Returns the glyph for a square.
    pub fn glyph(&self, square: Square) -> &str {
        match square {
            Square::Empty => &self.empty,
            Square::Occupied(Player::X) => &self.x,
            Square::Occupied(Player::O) => &self.o,
        }
    }
}

/// Theme loading error.
#[derive(Debug, Clone, Display, Error)]
#[display("Theme error: {} at {}:{}", message, file, line)]
pub struct ThemeError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ThemeError {
    /// Creates a new theme error at the caller's location.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
