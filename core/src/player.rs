// SPDX-License-Identifier: MIT OR Apache-2.0

//! Per-participant state

use crate::GameError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Largest accepted display hue
pub const MAX_HUE: i32 = 360;

/// A participant: display name, GUI hue, score and whether a computer plays it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    hue: i32,
    #[serde(skip)]
    score: u32,
    #[serde(default)]
    computer: bool,
}

impl Player {
    /// Create a human player with the given hue
    pub fn new(name: impl Into<String>, hue: i32) -> Result<Self, GameError> {
        if !(0..=MAX_HUE).contains(&hue) {
            return Err(GameError::InvalidHue(hue));
        }
        Ok(Self {
            name: name.into(),
            hue,
            score: 0,
            computer: false,
        })
    }

    /// Mark this player as computer-controlled (or not)
    pub fn with_computer(mut self, computer: bool) -> Self {
        self.computer = computer;
        self
    }

    /// The two players a board starts with when none are given
    pub fn defaults() -> Vec<Player> {
        vec![
            Player {
                name: "Player One".to_string(),
                hue: 0,
                score: 0,
                computer: false,
            },
            Player {
                name: "Player Two".to_string(),
                hue: 240,
                score: 0,
                computer: false,
            },
        ]
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Display hue; opaque to the game logic
    pub fn hue(&self) -> i32 {
        self.hue
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn is_computer(&self) -> bool {
        self.computer
    }

    pub(crate) fn set_computer(&mut self, computer: bool) {
        self.computer = computer;
    }

    pub(crate) fn add_score(&mut self, points: u32) {
        self.score += points;
    }

    pub(crate) fn remove_score(&mut self, points: u32) {
        self.score = self.score.saturating_sub(points);
    }

    pub(crate) fn reset_score(&mut self) {
        self.score = 0;
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} has hue {} and has {} points",
            self.name, self.hue, self.score
        )
    }
}
