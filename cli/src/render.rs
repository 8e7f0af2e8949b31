// SPDX-License-Identifier: MIT OR Apache-2.0

//! ASCII board rendering for the CLI.

use crate::command::cell_name;
use sos_core::{Board, Coord, Mark};

/// Render the game board as ASCII art
pub fn render_board(board: &Board) -> String {
    let mut output = String::new();

    push_column_labels(&mut output, board.width());

    for row in 0..board.height() {
        // Row number (1-indexed)
        output.push_str(&format!("{:2} ", row + 1));

        for col in 0..board.width() {
            let symbol = match board.mark_at(Coord::new(col as i32, row as i32)) {
                Mark::S => 'S',
                Mark::O => 'O',
                Mark::Empty | Mark::None => '.',
            };
            output.push_str(&format!(" {}", symbol));
        }

        output.push_str(&format!(" {}", row + 1));
        output.push('\n');
    }

    push_column_labels(&mut output, board.width());
    output
}

fn push_column_labels(output: &mut String, width: usize) {
    output.push_str("   ");
    for col in 0..width {
        output.push_str(&format!(" {}", column_char(col)));
    }
    output.push('\n');
}

/// Column letter for a column index
fn column_char(col: usize) -> char {
    u8::try_from(col)
        .ok()
        .filter(|c| *c < 26)
        .map_or('?', |c| (b'a' + c) as char)
}

/// Mode, scores and whose turn it is
pub fn render_status(board: &Board) -> String {
    let mut output = format!(
        "{} game, {}x{}, {} of {} cells filled\n",
        board.game_mode(),
        board.width(),
        board.height(),
        board.mark_count(),
        board.cell_count()
    );
    output.push_str(&render_scores(board));
    if !board.ended() {
        output.push_str(&format!("{} to move\n", board.current_player().name()));
    }
    output
}

/// One line per player, marking the current player
pub fn render_scores(board: &Board) -> String {
    board
        .players()
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let pointer = if i == board.turn() { '>' } else { ' ' };
            let kind = if p.is_computer() { " (computer)" } else { "" };
            format!("{} {}{}: {}\n", pointer, p.name(), kind, p.score())
        })
        .collect()
}

/// Every formation in completion order
pub fn render_formations(board: &Board) -> String {
    board
        .formations()
        .iter()
        .map(|f| {
            let owner = board.player(f.player_id()).map_or("?", |p| p.name());
            format!("  {}-{} by {}\n", cell_name(f.p1()), cell_name(f.p2()), owner)
        })
        .collect()
}

/// Final result line for a finished game
pub fn render_result(board: &Board) -> String {
    let victors = board.victors();
    if victors.len() == board.players().len() && victors.len() > 1 {
        return "Game over: it's a draw.".to_string();
    }
    let names: Vec<&str> = victors.iter().map(|p| p.name()).collect();
    if names.len() == 1 {
        format!("Game over: {} wins!", names[0])
    } else {
        format!("Game over: tie between {}.", names.join(" and "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sos_core::GameMode;

    #[test]
    fn test_render_empty_board() {
        let board = Board::new(3, 3).unwrap();
        let output = render_board(&board);
        assert_eq!(
            output,
            "    a b c\n 1  . . . 1\n 2  . . . 2\n 3  . . . 3\n    a b c\n"
        );
    }

    #[test]
    fn test_render_marks_and_formations() {
        let mut board = Board::new(3, 3).unwrap();
        board.make_move(Coord::new(0, 0), Mark::S).unwrap();
        board.make_move(Coord::new(1, 0), Mark::O).unwrap();
        board.make_move(Coord::new(2, 0), Mark::S).unwrap();

        assert!(render_board(&board).contains(" 1  S O S 1"));
        assert_eq!(render_formations(&board), "  c1-a1 by Player One\n");
        assert_eq!(render_result(&board), "Game over: Player One wins!");
        assert!(!render_status(&board).contains("to move"));
    }

    #[test]
    fn test_render_draw_and_scores() {
        let mut board = Board::new(3, 3).unwrap();
        board.reset(None, None, Some(GameMode::General));
        board.set_computer(1, true).unwrap();
        assert_eq!(render_result(&board), "Game over: it's a draw.");
        assert_eq!(
            render_scores(&board),
            "> Player One: 0\n  Player Two (computer): 0\n"
        );
    }

    #[test]
    fn test_column_char() {
        assert_eq!(column_char(0), 'a');
        assert_eq!(column_char(25), 'z');
        assert_eq!(column_char(26), '?');
    }
}
