// SPDX-License-Identifier: MIT OR Apache-2.0

//! Parsing typed commands
//!
//! Cells are named like a spreadsheet: column letter then 1-based row,
//! so `b3` is column 1, row 2.

use anyhow::{anyhow, bail, Result};
use sos_core::{Coord, GameMode, Mark};
use std::path::PathBuf;

/// Widest board whose columns can be named with a single letter
pub const MAX_COLUMNS: usize = 26;

/// Something the player asked for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Place a letter on a cell
    Place { coord: Coord, mark: Mark },
    Undo,
    Redo,
    /// Ask the advisor for a suggestion
    Hint,
    /// Let the advisor make the current player's move
    Auto,
    Save(Option<PathBuf>),
    Load(Option<PathBuf>),
    /// Start over, optionally with a new size or mode
    New {
        width: Option<usize>,
        height: Option<usize>,
        mode: Option<GameMode>,
    },
    Scores,
    Help,
    Quit,
}

/// Usage text shown by `help`
pub const HELP: &str = "\
Commands:
  s b3 | o b3     place S or O on a cell (column letter, row number)
  undo | redo     step through the move history
  hint            ask the advisor for a move
  auto            let the advisor move for you
  save [file]     save the game (default sos.sav)
  load [file]     load a saved game
  new [WxH] [simple|general]
                  start a new game
  scores          show the scoreboard
  quit            leave";

impl Command {
    /// Parse one input line
    pub fn parse(input: &str) -> Result<Command> {
        let tokens: Vec<&str> = input.split_whitespace().collect();
        let Some(first) = tokens.first() else {
            bail!("Empty command");
        };
        let rest = &tokens[1..];

        let command = match first.to_ascii_lowercase().as_str() {
            "undo" | "u" => Command::Undo,
            "redo" | "r" => Command::Redo,
            "hint" | "h" => Command::Hint,
            "auto" | "a" => Command::Auto,
            "scores" => Command::Scores,
            "help" | "?" => Command::Help,
            "quit" | "q" | "exit" => Command::Quit,
            "save" => Command::Save(rest.first().map(PathBuf::from)),
            "load" => Command::Load(rest.first().map(PathBuf::from)),
            "new" => parse_new(rest)?,
            _ => parse_place(&tokens)?,
        };
        Ok(command)
    }
}

fn parse_new(args: &[&str]) -> Result<Command> {
    let mut width = None;
    let mut height = None;
    let mut mode = None;

    for arg in args {
        if let Some((w, h)) = arg.split_once(['x', 'X']) {
            width = Some(w.parse().map_err(|_| anyhow!("Invalid width {:?}", w))?);
            height = Some(h.parse().map_err(|_| anyhow!("Invalid height {:?}", h))?);
        } else {
            mode = Some(arg.parse::<GameMode>()?);
        }
    }

    Ok(Command::New { width, height, mode })
}

/// Accepts `s b3`, `b3 s` and the joined forms `sb3` / `b3s`
fn parse_place(tokens: &[&str]) -> Result<Command> {
    let (mark_text, cell_text) = match tokens {
        [a, b] if is_mark(a) => (*a, *b),
        [a, b] if is_mark(b) => (*b, *a),
        [joined] if joined.is_ascii() && joined.len() > 2 => {
            let (head, tail) = joined.split_at(1);
            let (body, last) = joined.split_at(joined.len() - 1);
            if is_mark(head) {
                (head, tail)
            } else if is_mark(last) {
                (last, body)
            } else {
                bail!("Unknown command {:?}. Type 'help' for a list of commands.", joined);
            }
        }
        _ => bail!("Unknown command {:?}. Type 'help' for a list of commands.", tokens.join(" ")),
    };

    let mark = mark_text
        .chars()
        .next()
        .and_then(Mark::from_char)
        .ok_or_else(|| anyhow!("Expected S or O, got {:?}", mark_text))?;
    let coord = parse_cell(cell_text)?;
    Ok(Command::Place { coord, mark })
}

fn is_mark(token: &str) -> bool {
    token.len() == 1 && token.chars().next().and_then(Mark::from_char).is_some()
}

/// Parse a cell name such as `b3` into a coordinate
pub fn parse_cell(text: &str) -> Result<Coord> {
    let mut chars = text.chars();
    let column = chars
        .next()
        .filter(char::is_ascii_alphabetic)
        .ok_or_else(|| anyhow!("Invalid cell {:?}: expected a column letter", text))?;
    let row: i32 = chars
        .as_str()
        .parse()
        .map_err(|_| anyhow!("Invalid cell {:?}: expected a row number", text))?;
    if row < 1 {
        bail!("Invalid cell {:?}: rows start at 1", text);
    }

    let x = (column.to_ascii_lowercase() as u8 - b'a') as i32;
    Ok(Coord::new(x, row - 1))
}

/// Name of a cell, inverse of [`parse_cell`]
pub fn cell_name(coord: Coord) -> String {
    let column = u8::try_from(coord.x)
        .ok()
        .filter(|x| (*x as usize) < MAX_COLUMNS)
        .map_or('?', |x| (b'a' + x) as char);
    format!("{}{}", column, coord.y + 1)
}
