// SPDX-License-Identifier: MIT OR Apache-2.0

//! Save/load roundtrip tests

use sos_core::archiver::{self, SavedGame};
use sos_core::{Advisor, Board, Coord, GameMode, Mark, Player, PlayerBackend};

fn played_board(mode: GameMode, seed: u64, moves: usize) -> Board {
    let players = vec![
        Player::new("Ada", 30).unwrap(),
        Player::new("Grace", 200).unwrap().with_computer(true),
        Player::new("Linus", 300).unwrap(),
    ];
    let mut board = Board::with_players(5, 4, players).unwrap();
    board.reset(None, None, Some(mode));
    let mut advisor = Advisor::seeded(0, seed);
    for _ in 0..moves {
        if board.ended() {
            break;
        }
        let mv = advisor.next_move(&board).unwrap();
        board.make_move(mv.coord, mv.mark).unwrap();
    }
    board
}

#[test]
fn save_then_load_reproduces_board() {
    let dir = tempfile::tempdir().unwrap();
    for (i, mode) in [GameMode::Simple, GameMode::General].into_iter().enumerate() {
        let mut board = played_board(mode, 100 + i as u64, 14);
        board.undo_move();
        board.undo_move();

        let path = dir.path().join(format!("game_{}.sav", i));
        board.save(&path).unwrap();
        let loaded = Board::load(&path).unwrap();

        assert_eq!(loaded, board);
        assert_eq!(loaded.formations(), board.formations());
        for (a, b) in loaded.players().iter().zip(board.players()) {
            assert_eq!(a.score(), b.score());
            assert_eq!(a.is_computer(), b.is_computer());
        }
    }
}

#[test]
fn replaying_history_matches_saved_state() {
    let board = played_board(GameMode::General, 7, 20);
    let saved = SavedGame::capture(&board);

    let mut fresh = Board::with_players(
        saved.width,
        saved.height,
        board.players().iter().map(|p| Player::new(p.name(), p.hue()).unwrap()).collect(),
    )
    .unwrap();
    fresh.reset(None, None, Some(saved.mode));
    for mv in &saved.history {
        assert!(fresh.make_move(mv.coord, mv.mark).unwrap());
    }

    for y in 0..board.height() as i32 {
        for x in 0..board.width() as i32 {
            let c = Coord::new(x, y);
            assert_eq!(fresh.mark_at(c), board.mark_at(c));
        }
    }
    assert_eq!(fresh.formations(), board.formations());
    assert_eq!(fresh.turn(), board.turn());
}

#[test]
fn save_file_is_readable_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(archiver::DEFAULT_SAVE_FILE);
    let mut board = Board::new(3, 3).unwrap();
    board.make_move(Coord::new(1, 1), Mark::O).unwrap();
    archiver::save(&board, &path).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value["width"], 3);
    assert_eq!(value["mode"], "simple");
    assert_eq!(value["players"][1]["name"], "Player Two");
    assert_eq!(value["history"][0]["mark"], 3);
    // No temporary file left behind
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
}

#[test]
fn load_reports_missing_and_corrupt_files() {
    let dir = tempfile::tempdir().unwrap();
    assert!(archiver::load(&dir.path().join("missing.sav")).is_err());

    let path = dir.path().join("corrupt.sav");
    std::fs::write(&path, "{ not json").unwrap();
    assert!(archiver::load(&path).is_err());
}
