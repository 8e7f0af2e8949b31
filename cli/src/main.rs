// SPDX-License-Identifier: MIT OR Apache-2.0

//! SOS CLI - play SOS in the terminal
//!
//! Any number of seats can be handed to the computer advisor with
//! `--computer <index>`; the rest are played by typing commands.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use sos_cli::command::{cell_name, HELP};
use sos_cli::render;
use sos_cli::{Command, GameConfig, Outcome, Session};
use sos_core::{Board, GameMode, Move};
use std::io::{BufRead, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Command-line arguments
#[derive(Parser, Debug)]
#[clap(name = "sos", about = "Play the SOS pencil-and-paper game", version)]
struct Args {
    /// Board width (3 or more)
    #[clap(long)]
    width: Option<usize>,

    /// Board height (3 or more)
    #[clap(long)]
    height: Option<usize>,

    /// Win condition
    #[clap(short, long, value_enum)]
    mode: Option<Mode>,

    /// Seat index played by the computer (repeatable)
    #[clap(short, long)]
    computer: Vec<usize>,

    /// Advisor lookahead depth in plies
    #[clap(short, long)]
    depth: Option<u32>,

    /// JSON configuration file
    #[clap(long)]
    config: Option<PathBuf>,

    /// Resume a saved game
    #[clap(long)]
    load: Option<PathBuf>,

    /// Enable debug logging
    #[clap(long)]
    debug: bool,
}

/// Game mode as accepted on the command line
#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// First SOS wins
    Simple,
    /// Most SOSes on a full board wins
    General,
}

impl From<Mode> for GameMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Simple => GameMode::Simple,
            Mode::General => GameMode::General,
        }
    }
}

fn init_logging(debug: bool) {
    let default_level = if debug { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Merge the config file (if any) with command-line overrides
fn build_config(args: &Args) -> Result<GameConfig> {
    let mut config = match &args.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };
    if let Some(width) = args.width {
        config.width = width;
    }
    if let Some(height) = args.height {
        config.height = height;
    }
    if let Some(mode) = args.mode {
        config.mode = mode.into();
    }
    if let Some(depth) = args.depth {
        config.lookahead_depth = depth;
    }
    for &seat in &args.computer {
        let player = config
            .players
            .get_mut(seat)
            .with_context(|| format!("No player with index {}", seat))?;
        player.computer = true;
    }
    Ok(config)
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.debug);

    let config = build_config(&args)?;
    let board = match &args.load {
        Some(path) => Board::load(path)?,
        None => config.build_board()?,
    };
    tracing::info!(
        "Starting {}x{} {} game with {} players",
        board.width(),
        board.height(),
        board.game_mode(),
        board.players().len()
    );

    let mut session = Session::new(board, config.lookahead_depth);
    run(&mut session)
}

/// Main game loop
fn run(session: &mut Session) -> Result<()> {
    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();

    println!("{}", HELP);
    print_board(session.board());

    let mut announced = false;
    loop {
        for mv in session.play_computer_turns()? {
            println!("{}", describe_move(session.board(), &mv));
        }
        if !session.board().ended() {
            announced = false;
        } else if !announced {
            print_board(session.board());
            println!("{}", render::render_result(session.board()));
            announced = true;
        }

        print!("> ");
        std::io::stdout().flush()?;
        let Some(line) = lines.next() else {
            break; // EOF
        };
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let command = match Command::parse(&line) {
            Ok(command) => command,
            Err(e) => {
                eprintln!("{}", e);
                continue;
            }
        };

        match session.execute(command) {
            Ok(Outcome::Quit) => break,
            Ok(outcome) => report(session.board(), &outcome),
            Err(e) => eprintln!("Error: {:#}", e),
        }
    }

    Ok(())
}

fn report(board: &Board, outcome: &Outcome) {
    match outcome {
        Outcome::Placed(mv) => {
            println!("{}", describe_move(board, mv));
            print_board(board);
        }
        Outcome::Occupied(coord) => println!("{} is not an empty cell.", cell_name(*coord)),
        Outcome::GameOver => println!("The game is over. Try 'undo', 'new' or 'load'."),
        Outcome::Undone(moves) => {
            println!("Took back {} move(s).", moves.len());
            print_board(board);
        }
        Outcome::NothingToUndo => println!("Nothing to undo."),
        Outcome::Redone => print_board(board),
        Outcome::NothingToRedo => println!("Nothing to redo."),
        Outcome::Hint(mv) => println!(
            "Try {} on {} ({} SOS).",
            mv.mark.as_char(),
            cell_name(mv.coord),
            mv.formations_completed
        ),
        Outcome::NoMoves => println!("No legal moves left."),
        Outcome::Saved(path) => println!("Saved to {}.", path.display()),
        Outcome::Loaded(path) => {
            println!("Loaded {}.", path.display());
            print_board(board);
        }
        Outcome::NewGame => print_board(board),
        Outcome::Scores => {
            print!("{}", render::render_scores(board));
            print!("{}", render::render_formations(board));
        }
        Outcome::Help => println!("{}", HELP),
        Outcome::Quit => {}
    }
}

fn describe_move(board: &Board, mv: &Move) -> String {
    let name = board.player(mv.player_index).map_or("?", |p| p.name());
    let mut text = format!("{} plays {} on {}", name, mv.mark.as_char(), cell_name(mv.coord));
    if mv.formations_completed > 0 {
        text.push_str(&format!(" and scores {}", mv.formations_completed));
    }
    text
}

fn print_board(board: &Board) {
    println!("\n{}", render::render_board(board));
    print!("{}", render::render_status(board));
}
