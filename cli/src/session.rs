// SPDX-License-Identifier: MIT OR Apache-2.0

//! A single game driven from typed commands

use crate::command::{Command, MAX_COLUMNS};
use anyhow::{bail, Result};
use sos_core::archiver::DEFAULT_SAVE_FILE;
use sos_core::{Advisor, Board, Coord, Move, PlayerBackend};
use std::path::PathBuf;

/// What happened in response to a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Placed(Move),
    /// The cell was already filled or off the board
    Occupied(Coord),
    /// The game is over; only undo, new, load and quit make sense
    GameOver,
    /// Moves taken back, most recent first
    Undone(Vec<Move>),
    NothingToUndo,
    Redone,
    NothingToRedo,
    Hint(Move),
    NoMoves,
    Saved(PathBuf),
    Loaded(PathBuf),
    NewGame,
    Scores,
    Help,
    Quit,
}

/// Owns the board and the advisor used for computer seats and hints
pub struct Session {
    board: Board,
    advisor: Advisor,
}

impl Session {
    /// Start a session with an entropy-seeded advisor
    pub fn new(board: Board, depth: u32) -> Self {
        Self::with_advisor(board, Advisor::new(depth))
    }

    pub fn with_advisor(board: Board, advisor: Advisor) -> Self {
        Self { board, advisor }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Carry out one command
    pub fn execute(&mut self, command: Command) -> Result<Outcome> {
        let outcome = match command {
            Command::Place { coord, mark } => {
                if self.board.ended() {
                    Outcome::GameOver
                } else if self.board.make_move(coord, mark)? {
                    self.placed()
                } else {
                    Outcome::Occupied(coord)
                }
            }
            Command::Auto => {
                if self.board.ended() {
                    Outcome::GameOver
                } else {
                    match self.advisor.next_move(&self.board) {
                        Some(mv) => {
                            self.board.make_move(mv.coord, mv.mark)?;
                            self.placed()
                        }
                        None => Outcome::NoMoves,
                    }
                }
            }
            Command::Undo => self.undo(),
            Command::Redo => {
                if self.board.redo_move() {
                    Outcome::Redone
                } else {
                    Outcome::NothingToRedo
                }
            }
            Command::Hint => match self.advisor.next_move(&self.board) {
                Some(mv) => Outcome::Hint(mv),
                None => Outcome::NoMoves,
            },
            Command::Save(path) => {
                let path = path.unwrap_or_else(|| PathBuf::from(DEFAULT_SAVE_FILE));
                self.board.save(&path)?;
                Outcome::Saved(path)
            }
            Command::Load(path) => {
                let path = path.unwrap_or_else(|| PathBuf::from(DEFAULT_SAVE_FILE));
                self.board = Board::load(&path)?;
                Outcome::Loaded(path)
            }
            Command::New {
                width,
                height,
                mode,
            } => {
                if let Some(width) = width.filter(|w| *w > MAX_COLUMNS) {
                    bail!("Board width {} exceeds the {} nameable columns", width, MAX_COLUMNS);
                }
                self.board.reset(width, height, mode);
                Outcome::NewGame
            }
            Command::Scores => Outcome::Scores,
            Command::Help => Outcome::Help,
            Command::Quit => Outcome::Quit,
        };
        Ok(outcome)
    }

    /// Undo back to the most recent human move, so that a computer seat
    /// does not immediately replay what was just taken back
    fn undo(&mut self) -> Outcome {
        let mut undone = Vec::new();
        while let Some(mv) = self.board.undo_move() {
            undone.push(mv);
            let human_turn = !self.board.current_player().is_computer();
            let all_computer = self.board.players().iter().all(|p| p.is_computer());
            if human_turn || all_computer {
                break;
            }
        }
        if undone.is_empty() {
            Outcome::NothingToUndo
        } else {
            Outcome::Undone(undone)
        }
    }

    /// Let the advisor move for computer seats until a human is up or the
    /// game ends
    pub fn play_computer_turns(&mut self) -> Result<Vec<Move>> {
        let mut played = Vec::new();
        while !self.board.ended() && self.board.current_player().is_computer() {
            let Some(mv) = self.advisor.next_move(&self.board) else {
                break;
            };
            if !self.board.make_move(mv.coord, mv.mark)? {
                break;
            }
            played.extend(self.board.move_history().last().copied());
        }
        Ok(played)
    }

    fn placed(&self) -> Outcome {
        match self.board.move_history().last() {
            Some(mv) => Outcome::Placed(*mv),
            None => Outcome::NoMoves,
        }
    }
}
