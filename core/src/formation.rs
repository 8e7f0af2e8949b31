// SPDX-License-Identifier: MIT OR Apache-2.0

//! Completed S-O-S lines

use crate::{Coord, GameError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A completed S-O-S: the two outer S cells and the player who finished it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Formation {
    p1: Coord,
    p2: Coord,
    player_id: usize,
}

impl Formation {
    /// Create a formation between two distinct endpoints
    pub fn new(p1: Coord, p2: Coord, player_id: usize) -> Result<Self, GameError> {
        if p1 == p2 {
            return Err(GameError::IdenticalEndpoints);
        }
        Ok(Self { p1, p2, player_id })
    }

    /// Build a formation from loosely typed points, as handed over by a
    /// front-end that tracks positions as plain sequences.
    pub fn from_points(p1: &[i32], p2: &[i32], player_id: i64) -> Result<Self, GameError> {
        if p1.is_empty() || p2.is_empty() {
            return Err(GameError::ZeroDimension);
        }
        if p1.len() != p2.len() {
            return Err(GameError::DimensionMismatch(p1.len(), p2.len()));
        }
        if p1.len() != 2 {
            return Err(GameError::DimensionMismatch(p1.len(), 2));
        }
        if player_id < 0 {
            return Err(GameError::NegativePlayerId(player_id));
        }
        Self::new(
            Coord::new(p1[0], p1[1]),
            Coord::new(p2[0], p2[1]),
            player_id as usize,
        )
    }

    /// First endpoint
    pub fn p1(&self) -> Coord {
        self.p1
    }

    /// Second endpoint
    pub fn p2(&self) -> Coord {
        self.p2
    }

    /// Index of the player who completed the formation
    pub fn player_id(&self) -> usize {
        self.player_id
    }
}

impl fmt::Display for Formation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SOS from {} to {} by player {}",
            self.p1, self.p2, self.player_id
        )
    }
}
