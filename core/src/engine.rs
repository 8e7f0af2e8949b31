// SPDX-License-Identifier: MIT OR Apache-2.0

//! Player backends and the lookahead move advisor
//!
//! The advisor is a shallow heuristic, not a minimax search: each candidate
//! is scored as its immediate gain minus the best immediate gain the next
//! player could answer with, looking `depth` plies ahead on scratch copies
//! of the board.

use crate::{Board, GameMode, Mark, Move};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Something that can choose a move for the player whose turn it is
pub trait PlayerBackend {
    /// Get the next move for the current player; `None` when the board is full
    fn next_move(&mut self, board: &Board) -> Option<Move>;
}

/// Computer player driven by [`propose_move`]
#[derive(Debug, Clone)]
pub struct Advisor {
    depth: u32,
    rng: StdRng,
}

impl Advisor {
    /// Create an advisor with an entropy-seeded generator
    pub fn new(depth: u32) -> Self {
        Self {
            depth,
            rng: StdRng::from_entropy(),
        }
    }

    /// Create an advisor whose tie-breaks are reproducible
    pub fn seeded(depth: u32, seed: u64) -> Self {
        Self {
            depth,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Lookahead depth in plies
    pub fn depth(&self) -> u32 {
        self.depth
    }
}

impl PlayerBackend for Advisor {
    fn next_move(&mut self, board: &Board) -> Option<Move> {
        propose_move(board, self.depth, &mut self.rng)
    }
}

impl Board {
    /// Suggest a move for the current player using the thread-local generator
    pub fn propose_move(&self, depth: u32) -> Option<Move> {
        propose_move(self, depth, &mut rand::thread_rng())
    }
}

/// Suggest a move for the current player.
///
/// Candidates are scanned row-major, S before O. In simple mode the first
/// candidate completing a formation is returned at once. Otherwise each
/// candidate is ranked by `(gain - best reply, gain)` and one of the top
/// ranked candidates is picked at random. The returned move carries the
/// immediate gain in `formations_completed`.
pub fn propose_move<R: Rng + ?Sized>(board: &Board, depth: u32, rng: &mut R) -> Option<Move> {
    if board.is_board_full() {
        return None;
    }

    let mut best_rank: Option<(i64, u32)> = None;
    let mut best_moves = Vec::new();

    for coord in board.empty_cells() {
        for mark in Mark::PLACEABLE {
            let gain = board.detect_formations(coord, mark).len() as u32;
            let candidate = Move {
                coord,
                mark,
                formations_completed: gain,
                player_index: board.turn(),
            };

            if board.game_mode() == GameMode::Simple && gain > 0 {
                tracing::trace!("Advisor found winning {:?} at {}", mark, coord);
                return Some(candidate);
            }

            let reply = if depth > 0 {
                best_reply_gain(board, &candidate, depth - 1, rng)
            } else {
                0
            };
            let rank = (i64::from(gain) - i64::from(reply), gain);

            match best_rank {
                Some(best) if rank < best => {}
                Some(best) if rank == best => best_moves.push(candidate),
                _ => {
                    best_rank = Some(rank);
                    best_moves.clear();
                    best_moves.push(candidate);
                }
            }
        }
    }

    tracing::trace!(
        "Advisor kept {} candidate(s) at rank {:?}",
        best_moves.len(),
        best_rank
    );

    best_moves.choose(rng).copied()
}

/// Immediate gain of the next player's preferred answer to `candidate`
fn best_reply_gain<R: Rng + ?Sized>(board: &Board, candidate: &Move, depth: u32, rng: &mut R) -> u32 {
    let mut scratch = board.clone();
    if !matches!(scratch.make_move(candidate.coord, candidate.mark), Ok(true)) {
        return 0;
    }
    propose_move(&scratch, depth, rng).map_or(0, |reply| reply.formations_completed)
}

/// Any empty cell with either letter, chosen uniformly
pub fn random_placement<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<Move> {
    let coord = *board.empty_cells().choose(rng)?;
    let mark = *Mark::PLACEABLE.choose(rng)?;
    Some(Move {
        coord,
        mark,
        formations_completed: board.detect_formations(coord, mark).len() as u32,
        player_index: board.turn(),
    })
}
