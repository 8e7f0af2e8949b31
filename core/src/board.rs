// SPDX-License-Identifier: MIT OR Apache-2.0

//! Board representation, move execution and undo/redo history

use crate::{rules, Coord, Formation, GameError, GameMode, Mark, Player, MIN_BOARD_SIZE};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Width and height used when a board is built without explicit dimensions
pub const DEFAULT_BOARD_SIZE: usize = 8;

/// One placement, as returned by the advisor and kept in the undo/redo history
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Cell the mark was placed on
    pub coord: Coord,
    /// S or O
    pub mark: Mark,
    /// Number of formations the placement completed
    pub formations_completed: u32,
    /// Index of the acting player
    pub player_index: usize,
}

/// The SOS game state machine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    /// Row-major cells; never holds `Mark::None`
    grid: Vec<Mark>,
    /// Number of cells holding S or O
    mark_count: usize,
    players: Vec<Player>,
    turn: usize,
    /// Completion order; the first entry decides simple mode
    formations: Vec<Formation>,
    move_history: Vec<Move>,
    /// Redo buffer, most recently undone last
    move_future: Vec<Move>,
    game_mode: GameMode,
    ended: bool,
}

impl Default for Board {
    fn default() -> Self {
        Self::build(DEFAULT_BOARD_SIZE, DEFAULT_BOARD_SIZE, Player::defaults())
    }
}

impl Board {
    /// Create an empty board with the two default players
    pub fn new(width: usize, height: usize) -> Result<Self, GameError> {
        Self::with_players(width, height, Player::defaults())
    }

    /// Create an empty board for an explicit list of players
    pub fn with_players(
        width: usize,
        height: usize,
        players: Vec<Player>,
    ) -> Result<Self, GameError> {
        if width < MIN_BOARD_SIZE || height < MIN_BOARD_SIZE {
            return Err(GameError::InvalidDimensions { width, height });
        }
        if players.is_empty() {
            return Err(GameError::NoPlayers);
        }
        Ok(Self::build(width, height, players))
    }

    fn build(width: usize, height: usize, players: Vec<Player>) -> Self {
        Self {
            width,
            height,
            grid: vec![Mark::Empty; width * height],
            mark_count: 0,
            players,
            turn: 0,
            formations: Vec::new(),
            move_history: Vec::new(),
            move_future: Vec::new(),
            game_mode: GameMode::default(),
            ended: false,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells
    pub fn cell_count(&self) -> usize {
        self.width * self.height
    }

    /// Number of cells holding S or O
    pub fn mark_count(&self) -> usize {
        self.mark_count
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player(&self, index: usize) -> Option<&Player> {
        self.players.get(index)
    }

    /// Index of the player whose turn it is
    pub fn turn(&self) -> usize {
        self.turn
    }

    /// The player whose turn it is (or who finished the game)
    pub fn current_player(&self) -> &Player {
        &self.players[self.turn]
    }

    /// Formations in the order they were completed
    pub fn formations(&self) -> &[Formation] {
        &self.formations
    }

    /// Moves in the order they were made
    pub fn move_history(&self) -> &[Move] {
        &self.move_history
    }

    /// Undone moves waiting to be redone, most recent last
    pub fn move_future(&self) -> &[Move] {
        &self.move_future
    }

    pub fn game_mode(&self) -> GameMode {
        self.game_mode
    }

    /// Whether the configured end condition has been met
    pub fn ended(&self) -> bool {
        self.ended
    }

    /// Check if a coordinate lies on the grid
    pub fn in_bounds(&self, coord: Coord) -> bool {
        self.index(coord).is_some()
    }

    fn index(&self, coord: Coord) -> Option<usize> {
        let x = usize::try_from(coord.x).ok()?;
        let y = usize::try_from(coord.y).ok()?;
        if x < self.width && y < self.height {
            Some(y * self.width + x)
        } else {
            None
        }
    }

    /// Get the mark at a coordinate; `Mark::None` when off the grid
    pub fn mark_at(&self, coord: Coord) -> Mark {
        match self.index(coord) {
            Some(idx) => self.grid[idx],
            None => Mark::None,
        }
    }

    /// Character to draw for a coordinate
    pub fn char_at(&self, coord: Coord) -> char {
        self.mark_at(coord).as_char()
    }

    /// Write a mark directly, bypassing turns, scoring and history.
    ///
    /// Formations broken or made by the write are not tracked.
    pub fn set_mark(&mut self, coord: Coord, mark: Mark) -> Result<(), GameError> {
        let idx = self.index(coord).ok_or(GameError::OutOfBounds(coord))?;
        if mark == Mark::None {
            return Err(GameError::NoneMark);
        }
        self.write_cell(idx, mark);
        Ok(())
    }

    fn write_cell(&mut self, idx: usize, mark: Mark) {
        match mark.compare_rank(self.grid[idx]) {
            Ordering::Greater => self.mark_count += 1,
            Ordering::Less => self.mark_count -= 1,
            Ordering::Equal => {}
        }
        self.grid[idx] = mark;
    }

    /// Empty cells in row-major order
    pub fn empty_cells(&self) -> Vec<Coord> {
        self.grid
            .iter()
            .enumerate()
            .filter(|(_, mark)| **mark == Mark::Empty)
            .map(|(idx, _)| Coord::new((idx % self.width) as i32, (idx / self.width) as i32))
            .collect()
    }

    /// Formations that placing `mark` at `coord` completes for the current player.
    ///
    /// Only reads the neighbours, so it may be asked about an empty cell.
    pub fn detect_formations(&self, coord: Coord, mark: Mark) -> Vec<Formation> {
        rules::detect_formations(self, coord, mark, self.turn)
    }

    /// Place a mark for the current player.
    ///
    /// Returns `Ok(false)` without touching the board when the cell is not
    /// empty (or not on the grid).
    pub fn make_move(&mut self, coord: Coord, mark: Mark) -> Result<bool, GameError> {
        if !mark.is_letter() {
            return Err(GameError::UnplaceableMark(mark));
        }
        if self.mark_at(coord) != Mark::Empty {
            tracing::debug!("Rejected {:?} at {}: cell not empty", mark, coord);
            return Ok(false);
        }

        // Repeating the move at the top of the redo buffer keeps the rest of it
        let turn = self.turn;
        match self.move_future.last() {
            Some(top) if top.coord == coord && top.mark == mark && top.player_index == turn => {
                self.move_future.pop();
            }
            _ => self.move_future.clear(),
        }

        self.play(coord, mark);
        Ok(true)
    }

    /// Apply an already validated placement; leaves the redo buffer alone
    fn play(&mut self, coord: Coord, mark: Mark) {
        let Some(idx) = self.index(coord) else {
            return;
        };
        self.write_cell(idx, mark);

        let new_formations = self.detect_formations(coord, mark);
        let count = new_formations.len() as u32;
        self.players[self.turn].add_score(count);
        self.formations.extend(new_formations);

        self.move_history.push(Move {
            coord,
            mark,
            formations_completed: count,
            player_index: self.turn,
        });

        tracing::debug!(
            "{} placed {:?} at {} completing {} formation(s)",
            self.players[self.turn].name(),
            mark,
            coord,
            count
        );

        if self.detect_end() {
            self.ended = true;
            tracing::info!(
                "Game ended in {} mode after {} moves",
                self.game_mode,
                self.move_history.len()
            );
        } else {
            self.turn = (self.turn + 1) % self.players.len();
        }
    }

    /// Take back the last move, moving it onto the redo buffer
    pub fn undo_move(&mut self) -> Option<Move> {
        let last = self.move_history.pop()?;
        if let Some(idx) = self.index(last.coord) {
            self.write_cell(idx, Mark::Empty);
        }

        let keep = self
            .formations
            .len()
            .saturating_sub(last.formations_completed as usize);
        self.formations.truncate(keep);
        if let Some(player) = self.players.get_mut(last.player_index) {
            player.remove_score(last.formations_completed);
        }

        // The mover gets the turn back, whether or not the move had ended the game
        self.turn = last.player_index % self.players.len();
        self.ended = self.detect_end();
        self.move_future.push(last);

        tracing::debug!("Undid {:?} at {}", last.mark, last.coord);
        Some(last)
    }

    /// Replay the most recently undone move.
    ///
    /// Formations and score are derived afresh from the current grid.
    /// Returns false when there is nothing to redo, the entry does not
    /// place a letter, or the cell has since been filled.
    pub fn redo_move(&mut self) -> bool {
        let Some(next) = self.move_future.last().copied() else {
            return false;
        };
        if !next.mark.is_letter() {
            tracing::warn!("Cannot redo {:?} at {}: not a placeable mark", next.mark, next.coord);
            return false;
        }
        if self.mark_at(next.coord) != Mark::Empty {
            tracing::warn!("Cannot redo {:?} at {}: cell not empty", next.mark, next.coord);
            return false;
        }
        self.move_future.pop();
        self.play(next.coord, next.mark);
        true
    }

    /// Empty the grid and forget formations, history and scores.
    ///
    /// Turn, end flag, game mode and dimensions are left as they are.
    pub fn clear(&mut self) {
        self.grid = vec![Mark::Empty; self.width * self.height];
        self.mark_count = 0;
        self.formations.clear();
        self.move_history.clear();
        self.move_future.clear();
        for player in &mut self.players {
            player.reset_score();
        }
    }

    /// Start a new game on the same board.
    ///
    /// Dimensions change only when both are given and at least 3; anything
    /// else keeps the current size.
    pub fn reset(&mut self, width: Option<usize>, height: Option<usize>, mode: Option<GameMode>) {
        if let (Some(w), Some(h)) = (width, height) {
            if w >= MIN_BOARD_SIZE && h >= MIN_BOARD_SIZE {
                self.width = w;
                self.height = h;
            } else {
                tracing::debug!("Ignoring board size {}x{}", w, h);
            }
        }
        self.clear();
        self.turn = 0;
        self.ended = false;
        if let Some(mode) = mode {
            self.game_mode = mode;
        }
    }

    /// Swap in a new player list and start a new game
    pub fn replace_players(&mut self, players: Vec<Player>) -> Result<(), GameError> {
        if players.is_empty() {
            return Err(GameError::NoPlayers);
        }
        self.players = players;
        self.reset(None, None, None);
        Ok(())
    }

    /// Flag a player as computer-controlled
    pub fn set_computer(&mut self, index: usize, computer: bool) -> Result<(), GameError> {
        let player = self
            .players
            .get_mut(index)
            .ok_or(GameError::InvalidPlayer(index))?;
        player.set_computer(computer);
        Ok(())
    }

    /// Set the turn pointer directly, used when restoring a saved game
    pub(crate) fn set_turn(&mut self, turn: usize) -> Result<(), GameError> {
        if turn >= self.players.len() {
            return Err(GameError::InvalidPlayer(turn));
        }
        self.turn = turn;
        Ok(())
    }

    pub(crate) fn set_move_future(&mut self, future: Vec<Move>) {
        self.move_future = future;
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, " {}", "-".repeat(self.width))?;
        for y in 0..self.height {
            write!(f, "|")?;
            for x in 0..self.width {
                write!(f, "{}", self.char_at(Coord::new(x as i32, y as i32)))?;
            }
            writeln!(f, "|")?;
        }
        write!(f, " {}", "-".repeat(self.width))
    }
}
