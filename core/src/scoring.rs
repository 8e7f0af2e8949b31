// SPDX-License-Identifier: MIT OR Apache-2.0

//! End-of-game detection and victor queries

use crate::{Board, GameMode, Player};

impl Board {
    /// Every cell holds S or O
    pub fn is_board_full(&self) -> bool {
        self.mark_count() == self.cell_count()
    }

    /// Simple mode ends at the first formation, or on a full board
    pub fn simple_ended(&self) -> bool {
        !self.formations().is_empty() || self.is_board_full()
    }

    /// End condition for the configured game mode
    pub fn detect_end(&self) -> bool {
        match self.game_mode() {
            GameMode::Simple => self.simple_ended(),
            GameMode::General => self.is_board_full(),
        }
    }

    /// All players tied for the highest score. Valid mid-game.
    pub fn leaders_by_score(&self) -> Vec<&Player> {
        let best = self.players().iter().map(Player::score).max().unwrap_or(0);
        self.players()
            .iter()
            .filter(|p| p.score() == best)
            .collect()
    }

    /// The player who completed the first formation, or everyone when none
    /// was ever formed
    pub fn simple_victors(&self) -> Vec<&Player> {
        match self.formations().first() {
            Some(first) => self.player(first.player_id()).into_iter().collect(),
            None => self.players().iter().collect(),
        }
    }

    /// Winners under the configured game mode
    pub fn victors(&self) -> Vec<&Player> {
        match self.game_mode() {
            GameMode::Simple => self.simple_victors(),
            GameMode::General => self.leaders_by_score(),
        }
    }
}
