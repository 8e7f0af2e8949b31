// SPDX-License-Identifier: MIT OR Apache-2.0

//! Save and load games as a JSON move log
//!
//! Only dimensions, mode, players and the move history/future are stored.
//! Loading replays the history through [`Board::make_move`], so formations
//! and scores are rebuilt rather than trusted.

use crate::{Board, GameMode, Move, Player};
use anyhow::{anyhow, bail, Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::Path;

/// Save file layout version
pub const FORMAT_VERSION: u32 = 1;

/// Default file name used by front-ends
pub const DEFAULT_SAVE_FILE: &str = "sos.sav";

/// Player entry in a save file; scores are re-derived on load
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub name: String,
    pub hue: i32,
    #[serde(default)]
    pub computer: bool,
}

/// On-disk representation of a game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedGame {
    pub version: u32,
    pub saved_at: DateTime<Utc>,
    pub width: usize,
    pub height: usize,
    pub mode: GameMode,
    /// Turn pointer before the first recorded move
    pub opening_turn: usize,
    pub players: Vec<PlayerRecord>,
    pub history: Vec<Move>,
    #[serde(default)]
    pub future: Vec<Move>,
}

impl SavedGame {
    /// Capture the replayable parts of a board
    pub fn capture(board: &Board) -> Self {
        let opening_turn = board
            .move_history()
            .first()
            .map_or(board.turn(), |mv| mv.player_index);

        Self {
            version: FORMAT_VERSION,
            saved_at: Utc::now(),
            width: board.width(),
            height: board.height(),
            mode: board.game_mode(),
            opening_turn,
            players: board
                .players()
                .iter()
                .map(|p| PlayerRecord {
                    name: p.name().to_string(),
                    hue: p.hue(),
                    computer: p.is_computer(),
                })
                .collect(),
            history: board.move_history().to_vec(),
            future: board.move_future().to_vec(),
        }
    }

    /// Rebuild a board by replaying the recorded history
    pub fn restore(&self) -> Result<Board> {
        if self.version != FORMAT_VERSION {
            bail!("Unsupported save format version {}", self.version);
        }

        let players = self
            .players
            .iter()
            .map(|p| Player::new(p.name.clone(), p.hue).map(|player| player.with_computer(p.computer)))
            .collect::<Result<Vec<_>, _>>()
            .context("Invalid player in save file")?;

        let mut board = Board::with_players(self.width, self.height, players)
            .context("Invalid board in save file")?;
        board.reset(None, None, Some(self.mode));
        board
            .set_turn(self.opening_turn)
            .context("Invalid opening turn in save file")?;

        for (n, saved) in self.history.iter().enumerate() {
            let placed = board
                .make_move(saved.coord, saved.mark)
                .with_context(|| format!("Invalid move {} in save file", n + 1))?;
            if !placed {
                return Err(anyhow!(
                    "Move {} at {} targets an occupied cell",
                    n + 1,
                    saved.coord
                ));
            }
            let replayed = board.move_history()[n];
            if replayed != *saved {
                tracing::warn!("Save file move {} replayed as {:?}, recorded {:?}", n + 1, replayed, saved);
                bail!("Move {} does not replay as recorded", n + 1);
            }
        }

        for (n, pending) in self.future.iter().enumerate() {
            if !pending.mark.is_letter() {
                bail!("Redo entry {} places unplaceable mark {:?}", n + 1, pending.mark);
            }
            if !board.in_bounds(pending.coord) {
                bail!("Redo entry {} at {} is off the board", n + 1, pending.coord);
            }
        }
        board.set_move_future(self.future.clone());
        Ok(board)
    }
}

/// Write a board's move log to `path`.
///
/// The data is written to a temporary sibling first and renamed into place.
pub fn save(board: &Board, path: &Path) -> Result<()> {
    let saved = SavedGame::capture(board);
    let json = serde_json::to_string_pretty(&saved).context("Failed to serialize game")?;

    let file_name = path
        .file_name()
        .ok_or_else(|| anyhow!("Save path {:?} has no file name", path))?;
    let tmp_path = path.with_file_name(format!(".tmp_{}", file_name.to_string_lossy()));
    {
        let mut file = std::fs::File::create(&tmp_path).context("Failed to create temporary file")?;
        file.write_all(json.as_bytes())
            .context("Failed to write save data")?;
        file.flush().context("Failed to flush file buffer")?;
    }
    std::fs::rename(&tmp_path, path).context("Failed to rename temporary file")?;

    tracing::info!(
        "Game saved to {:?} ({} moves, {} undone)",
        path,
        saved.history.len(),
        saved.future.len()
    );
    Ok(())
}

/// Read a save file and replay it into a fresh board
pub fn load(path: &Path) -> Result<Board> {
    let data = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read save file {:?}", path))?;
    let saved: SavedGame = serde_json::from_str(&data).context("Failed to parse save file")?;
    let board = saved.restore()?;
    tracing::info!("Game loaded from {:?} ({} moves)", path, board.move_history().len());
    Ok(board)
}

impl Board {
    /// Save this board's move log, see [`save`]
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        save(self, path.as_ref())
    }

    /// Load a board from a save file, see [`load`]
    pub fn load(path: impl AsRef<Path>) -> Result<Board> {
        load(path.as_ref())
    }
}
