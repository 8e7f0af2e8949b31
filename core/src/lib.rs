// SPDX-License-Identifier: MIT OR Apache-2.0

//! SOS Core - Board and Game-State Engine
//!
//! This crate provides the core game functionality including:
//! - Grid representation with mark-count bookkeeping
//! - SOS formation detection along all eight compass directions
//! - Turn rotation, undo/redo history and end-of-game detection
//! - Victor and leaderboard queries for simple and general mode
//! - A shallow lookahead advisor for computer-controlled players
//! - Save/load of the move log

#![deny(unsafe_code)]
#![deny(clippy::all)]

pub mod archiver;
pub mod board;
pub mod engine;
pub mod formation;
pub mod mark;
pub mod player;
pub mod rules;
pub mod scoring;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub use board::{Board, Move};
pub use engine::{Advisor, PlayerBackend};
pub use formation::Formation;
pub use mark::Mark;
pub use player::Player;

/// Smallest width or height a board may have
pub const MIN_BOARD_SIZE: usize = 3;

/// Board coordinate representing a cell position.
///
/// Signed so that neighbour offsets can step off the grid; `Board::mark_at`
/// answers `Mark::None` for anything outside.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    /// X coordinate (column)
    pub x: i32,
    /// Y coordinate (row)
    pub y: i32,
}

impl Coord {
    /// Create a new coordinate
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The coordinate reached by stepping `scale` times along `offset`
    pub fn offset(self, offset: (i32, i32), scale: i32) -> Self {
        Self::new(self.x + offset.0 * scale, self.y + offset.1 * scale)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Coord {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// Win condition in effect for a board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    /// The first SOS ends the game
    #[default]
    Simple,
    /// Play continues until the board is full; highest score wins
    General,
}

impl GameMode {
    /// Lowercase name used in save files and on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            GameMode::Simple => "simple",
            GameMode::General => "general",
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GameMode {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "simple" => Ok(GameMode::Simple),
            "general" => Ok(GameMode::General),
            other => Err(GameError::UnknownGameMode(other.to_string())),
        }
    }
}

/// Errors that can occur during game play
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Width or height below the 3x3 minimum
    #[error("board dimensions must be at least 3x3, got {width}x{height}")]
    InvalidDimensions {
        /// Requested width
        width: usize,
        /// Requested height
        height: usize,
    },

    /// An explicitly empty player list was supplied
    #[error("must specify at least one player")]
    NoPlayers,

    /// Player hue outside 0..=360
    #[error("player hue must be between 0 and 360, got {0}")]
    InvalidHue(i32),

    /// Player index does not name a player on this board
    #[error("no player with index {0}")]
    InvalidPlayer(usize),

    /// Formation endpoints are the same point
    #[error("formation endpoints cannot be the same point")]
    IdenticalEndpoints,

    /// Formation endpoints have different dimensionality
    #[error("formation endpoints must have the same dimensionality ({0} vs {1})")]
    DimensionMismatch(usize, usize),

    /// Formation endpoints have no dimensions at all
    #[error("formation endpoints must have a positive number of dimensions")]
    ZeroDimension,

    /// Formation player id below zero
    #[error("player id may not be negative, got {0}")]
    NegativePlayerId(i64),

    /// Low-level write outside the grid
    #[error("coordinate {0} is out of bounds")]
    OutOfBounds(Coord),

    /// `Mark::None` cannot be stored in a cell
    #[error("cannot set a cell to NONE")]
    NoneMark,

    /// Only S and O may be placed by a move
    #[error("{0:?} cannot be placed by a move")]
    UnplaceableMark(Mark),

    /// Game mode name not recognized
    #[error("game mode {0:?} does not exist")]
    UnknownGameMode(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_mode_parse() {
        assert_eq!("simple".parse::<GameMode>(), Ok(GameMode::Simple));
        assert_eq!(" General ".parse::<GameMode>(), Ok(GameMode::General));
        assert_eq!(
            "blitz".parse::<GameMode>(),
            Err(GameError::UnknownGameMode("blitz".to_string()))
        );
    }

    #[test]
    fn test_coord_offset() {
        let c = Coord::new(2, 2);
        assert_eq!(c.offset((-1, -1), 2), Coord::new(0, 0));
        assert_eq!(c.offset((1, 0), 1), Coord::new(3, 2));
    }
}
