// SPDX-License-Identifier: MIT OR Apache-2.0

//! Cell marks and their bookkeeping order

use serde_repr::{Deserialize_repr, Serialize_repr};
use std::cmp::Ordering;

/// Possible states of a grid cell
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize_repr, Deserialize_repr)]
#[repr(u8)]
pub enum Mark {
    /// Answer for out-of-bounds queries, never stored
    None = 0,
    Empty = 1,
    S = 2,
    O = 3,
}

impl Mark {
    /// The two marks a player may place
    pub const PLACEABLE: [Mark; 2] = [Mark::S, Mark::O];

    /// Occupied-ness rank: NONE < EMPTY < S == O
    pub fn rank(self) -> u8 {
        match self {
            Mark::None => 0,
            Mark::Empty => 1,
            Mark::S | Mark::O => 2,
        }
    }

    /// Order by rank only, so S and O compare equal
    pub fn compare_rank(self, other: Mark) -> Ordering {
        self.rank().cmp(&other.rank())
    }

    /// True for S and O
    pub fn is_letter(self) -> bool {
        matches!(self, Mark::S | Mark::O)
    }

    /// Character used when drawing the cell
    pub fn as_char(self) -> char {
        match self {
            Mark::None | Mark::Empty => ' ',
            Mark::S => 'S',
            Mark::O => 'O',
        }
    }

    /// Parse a typed letter into a placeable mark
    pub fn from_char(c: char) -> Option<Mark> {
        match c.to_ascii_uppercase() {
            'S' => Some(Mark::S),
            'O' => Some(Mark::O),
            _ => None,
        }
    }
}
