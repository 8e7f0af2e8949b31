// SPDX-License-Identifier: MIT OR Apache-2.0

// Drive a session the way the terminal loop does, one command at a time
use sos_cli::{Command, Outcome, Session};
use sos_core::{Advisor, Board, Coord, GameMode, Mark, Player};
use tempfile::tempdir;

fn session(width: usize, height: usize) -> Session {
    let board = Board::new(width, height).unwrap();
    Session::with_advisor(board, Advisor::seeded(1, 7))
}

fn place(x: i32, y: i32, mark: Mark) -> Command {
    Command::Place {
        coord: Coord::new(x, y),
        mark,
    }
}

#[test]
fn test_place_and_occupied() {
    let mut session = session(3, 3);

    let Outcome::Placed(mv) = session.execute(place(0, 0, Mark::S)).unwrap() else {
        panic!("expected a placement");
    };
    assert_eq!(mv.coord, Coord::new(0, 0));
    assert_eq!(mv.player_index, 0);
    assert_eq!(session.board().turn(), 1);

    assert_eq!(
        session.execute(place(0, 0, Mark::O)).unwrap(),
        Outcome::Occupied(Coord::new(0, 0))
    );
    assert_eq!(
        session.execute(place(9, 9, Mark::O)).unwrap(),
        Outcome::Occupied(Coord::new(9, 9))
    );
    assert_eq!(session.board().turn(), 1);
}

#[test]
fn test_no_moves_after_simple_win() {
    let mut session = session(3, 3);
    session.execute(place(0, 0, Mark::S)).unwrap();
    session.execute(place(1, 0, Mark::O)).unwrap();
    session.execute(place(2, 0, Mark::S)).unwrap();
    assert!(session.board().ended());

    assert_eq!(session.execute(place(1, 1, Mark::S)).unwrap(), Outcome::GameOver);
    assert_eq!(session.execute(Command::Auto).unwrap(), Outcome::GameOver);
    assert_eq!(session.board().move_history().len(), 3);

    // Taking back the winning move reopens the game
    assert!(matches!(session.execute(Command::Undo).unwrap(), Outcome::Undone(_)));
    assert!(!session.board().ended());
}

#[test]
fn test_undo_skips_computer_seat() {
    let players = vec![
        Player::new("Alice", 0).unwrap(),
        Player::new("Bot", 120).unwrap().with_computer(true),
    ];
    let board = Board::with_players(3, 3, players).unwrap();
    let mut session = Session::with_advisor(board, Advisor::seeded(1, 3));

    session.execute(place(0, 0, Mark::S)).unwrap();
    let replies = session.play_computer_turns().unwrap();
    assert_eq!(replies.len(), 1);
    assert_eq!(replies[0].player_index, 1);
    assert_eq!(session.board().turn(), 0);

    let Outcome::Undone(undone) = session.execute(Command::Undo).unwrap() else {
        panic!("expected moves to be undone");
    };
    assert_eq!(undone.len(), 2);
    assert_eq!(undone[0].player_index, 1);
    assert_eq!(undone[1].coord, Coord::new(0, 0));
    assert!(session.board().move_history().is_empty());
    assert_eq!(session.board().turn(), 0);

    assert_eq!(session.execute(Command::Undo).unwrap(), Outcome::NothingToUndo);
}

#[test]
fn test_undo_and_redo() {
    let mut session = session(4, 4);
    session.execute(place(1, 1, Mark::O)).unwrap();

    assert!(matches!(session.execute(Command::Undo).unwrap(), Outcome::Undone(ref m) if m.len() == 1));
    assert_eq!(session.board().mark_at(Coord::new(1, 1)), Mark::Empty);

    assert_eq!(session.execute(Command::Redo).unwrap(), Outcome::Redone);
    assert_eq!(session.board().mark_at(Coord::new(1, 1)), Mark::O);
    assert_eq!(session.execute(Command::Redo).unwrap(), Outcome::NothingToRedo);
}

#[test]
fn test_hint_leaves_board_alone() {
    let mut session = session(3, 3);
    session.execute(place(0, 0, Mark::S)).unwrap();
    session.execute(place(1, 0, Mark::O)).unwrap();

    let Outcome::Hint(hint) = session.execute(Command::Hint).unwrap() else {
        panic!("expected a hint");
    };
    assert_eq!(hint.coord, Coord::new(2, 0));
    assert_eq!(hint.mark, Mark::S);
    assert_eq!(hint.formations_completed, 1);
    assert_eq!(session.board().move_history().len(), 2);
    assert_eq!(session.board().turn(), 0);
}

#[test]
fn test_auto_plays_for_current_player() {
    let mut session = session(3, 3);
    let Outcome::Placed(mv) = session.execute(Command::Auto).unwrap() else {
        panic!("expected a placement");
    };
    assert_eq!(mv.player_index, 0);
    assert_eq!(session.board().mark_at(mv.coord), mv.mark);
    assert_eq!(session.board().turn(), 1);
}

#[test]
fn test_computers_play_to_the_end() {
    let players = vec![
        Player::new("Red", 0).unwrap().with_computer(true),
        Player::new("Blue", 240).unwrap().with_computer(true),
    ];
    let mut board = Board::with_players(4, 4, players).unwrap();
    board.reset(None, None, Some(GameMode::General));
    let mut session = Session::with_advisor(board, Advisor::seeded(2, 11));

    let played = session.play_computer_turns().unwrap();
    assert_eq!(played.len(), 16);
    assert!(session.board().ended());
    assert!(session.play_computer_turns().unwrap().is_empty());
}

#[test]
fn test_save_new_and_load() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("game.sav");

    let mut session = session(5, 5);
    session.execute(place(0, 0, Mark::S)).unwrap();
    session.execute(place(1, 1, Mark::O)).unwrap();
    session.execute(place(2, 2, Mark::S)).unwrap();
    let scores: Vec<u32> = session.board().players().iter().map(|p| p.score()).collect();
    assert_eq!(scores, vec![1, 0]);

    assert_eq!(
        session.execute(Command::Save(Some(path.clone()))).unwrap(),
        Outcome::Saved(path.clone())
    );

    let new_game = Command::New {
        width: Some(6),
        height: Some(4),
        mode: Some(GameMode::General),
    };
    assert_eq!(session.execute(new_game).unwrap(), Outcome::NewGame);
    assert_eq!(session.board().width(), 6);
    assert_eq!(session.board().height(), 4);
    assert_eq!(session.board().game_mode(), GameMode::General);
    assert_eq!(session.board().mark_count(), 0);

    assert_eq!(
        session.execute(Command::Load(Some(path.clone()))).unwrap(),
        Outcome::Loaded(path)
    );
    assert_eq!(session.board().width(), 5);
    assert_eq!(session.board().move_history().len(), 3);
    assert_eq!(session.board().players()[0].score(), 1);
    assert!(session.board().ended());
}

#[test]
fn test_new_game_too_wide_is_refused() {
    let mut session = session(3, 3);
    let too_wide = Command::New {
        width: Some(27),
        height: None,
        mode: None,
    };
    assert!(session.execute(too_wide).is_err());
    assert_eq!(session.board().width(), 3);
}

#[test]
fn test_load_missing_file_keeps_game() {
    let dir = tempdir().unwrap();
    let mut session = session(3, 3);
    session.execute(place(0, 0, Mark::S)).unwrap();

    let missing = dir.path().join("nope.sav");
    assert!(session.execute(Command::Load(Some(missing))).is_err());
    assert_eq!(session.board().move_history().len(), 1);
}
