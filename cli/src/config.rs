// SPDX-License-Identifier: MIT OR Apache-2.0

//! Game configuration loaded from a JSON file and command-line flags

use crate::command::MAX_COLUMNS;
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use sos_core::{Board, GameMode, Player};
use std::path::Path;

/// One seat at the table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerConfig {
    /// Display name
    pub name: String,
    /// Hue used for this player's formations (0-360)
    #[serde(default)]
    pub hue: i32,
    /// Let the advisor play this seat
    #[serde(default)]
    pub computer: bool,
}

/// Complete configuration for a new game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Board width in cells
    pub width: usize,
    /// Board height in cells
    pub height: usize,
    /// Win condition
    pub mode: GameMode,
    /// Players in turn order
    pub players: Vec<PlayerConfig>,
    /// Plies the advisor looks ahead for computer players and hints
    pub lookahead_depth: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: 8,
            height: 8,
            mode: GameMode::Simple,
            players: Player::defaults()
                .into_iter()
                .map(|p| PlayerConfig {
                    name: p.name().to_string(),
                    hue: p.hue(),
                    computer: false,
                })
                .collect(),
            lookahead_depth: 1,
        }
    }
}

impl GameConfig {
    /// Read a configuration file; missing fields take their defaults
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {:?}", path))?;
        let config = serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse config file {:?}", path))?;
        tracing::debug!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Build a fresh board from this configuration
    pub fn build_board(&self) -> Result<Board> {
        if self.width > MAX_COLUMNS {
            bail!("Board width {} exceeds the {} nameable columns", self.width, MAX_COLUMNS);
        }
        let players = self
            .players
            .iter()
            .map(|p| Player::new(p.name.clone(), p.hue).map(|player| player.with_computer(p.computer)))
            .collect::<Result<Vec<_>, _>>()
            .context("Invalid player in config")?;

        let mut board = Board::with_players(self.width, self.height, players)
            .context("Invalid board in config")?;
        board.reset(None, None, Some(self.mode));
        Ok(board)
    }
}
