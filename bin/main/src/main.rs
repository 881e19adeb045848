//! # main.rs
//!
//! Interactive command loop.
//!
//! Loads a ruleset (a bundled variant or a rule file), then alternates turns
//! between White and Black on one terminal. Before every turn the side to
//! move is tested for check and checkmate.
//!
//! # Author
//! Alden Luthfi
//!
//! # Date
//! 25/01/2026

use std::{
    io::{stdin, stdout, BufRead, Write},
    path::{Path, PathBuf},
    process::ExitCode,
};

use clap::{Parser, ValueEnum};
use timed::timed;
use tracing::error;
use tracing_subscriber::EnvFilter;

use game::{
    errors::GameResult,
    moves::check::TurnStatus,
    representations::{piece::Side, rules::RuleCatalog, square::Square},
    session::Session,
};
use io::{
    board_io::{format_board, format_square, parse_square},
    game_io::{parse_config, parse_config_file, BEROLINA_RULES, STANDARD_RULES},
    history_io::{format_history, load_history, save_history},
    move_io::{format_outcome, parse_move},
};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Variant {
    Standard,
    Berolina,
}

#[derive(Debug, Parser)]
#[command(name = "rulechess", about = "Two-player board game driven by rule files")]
struct Args {
    /// Rule file to play with; overrides --variant
    #[arg(long)]
    rules: Option<PathBuf>,

    /// Bundled ruleset to play with
    #[arg(long, value_enum, default_value_t = Variant::Standard)]
    variant: Variant,

    /// Allow moves that leave the royal piece in check
    #[arg(long)]
    no_self_check: bool,

    /// Saved game to continue
    #[arg(long)]
    load: Option<PathBuf>,
}

/// Reads trimmed lines from stdin; `None` at end of input.
struct Input {
    lines: std::io::Lines<std::io::StdinLock<'static>>,
}

impl Input {
    fn new() -> Self {
        Input { lines: stdin().lock().lines() }
    }

    fn prompt(&mut self, label: &str) -> GameResult<Option<String>> {
        print!("{label}");
        stdout().flush()?;

        match self.lines.next() {
            Some(line) => Ok(Some(line?.trim().to_string())),
            None => Ok(None),
        }
    }

    fn confirm(&mut self) -> GameResult<bool> {
        Ok(self.prompt("Confirm: y/n\t")?.as_deref() == Some("y"))
    }
}

fn load_catalog(args: &Args) -> GameResult<RuleCatalog> {
    match (&args.rules, args.variant) {
        (Some(path), _) => parse_config_file(path),
        (None, Variant::Standard) => parse_config(STANDARD_RULES),
        (None, Variant::Berolina) => parse_config(BEROLINA_RULES),
    }
}

#[timed]
fn load_game(session: &mut Session, path: &Path) -> GameResult<()> {
    let moves = load_history(path, &session.state.position)?;
    session.replay(&moves)
}

fn open_game(session: &mut Session, path: &Path) {
    match load_game(session, path) {
        Ok(()) => println!("Game successfully loaded from {}", path.display()),
        Err(err) => {
            session.reset();
            println!("{err}");
            println!("{} could not be loaded. Game will be reset.", path.display());
        }
    }
}

/// Asks for a source until one with candidates is given, then for a
/// destination until a legal one is given. A whole move such as `e2e4` may be
/// given at the first prompt instead. An empty line cancels.
fn move_command(session: &mut Session, input: &mut Input) -> GameResult<()> {
    match session.turn() {
        Side::White => println!("White's turn (UPPERCASE PIECES)"),
        Side::Black => println!("Black's turn (lowercase pieces)"),
    }

    let current = loop {
        let Some(text) = input.prompt("Current:\t\t")?.filter(|text| !text.is_empty()) else {
            return Ok(());
        };

        if let Ok(mv) = parse_move(&text, &session.state.position) {
            match session.play(mv.from, mv.to) {
                Ok(outcome) => {
                    println!("{}", format_outcome(&outcome, &session.state.catalog));
                    return Ok(());
                }
                Err(err) if err.is_fatal() => return Err(err),
                Err(err) => {
                    println!("{err}. Try again.");
                    continue;
                }
            }
        }

        let hints = parse_square(&text, &session.state.position)
            .and_then(|square| session.select(square).map(|hints| (square, hints)));
        match hints {
            Ok((square, hints)) => {
                println!("Available moves:\t{}", join_squares(&hints.moves));
                println!("Available captures:\t{}", join_squares(&hints.captures));
                break square;
            }
            Err(err) if err.is_fatal() => return Err(err),
            Err(err) => println!("{err}. Try again."),
        }
    };

    loop {
        let Some(text) = input.prompt("Future:\t\t\t")?.filter(|text| !text.is_empty()) else {
            return Ok(());
        };

        let outcome = parse_square(&text, &session.state.position)
            .and_then(|future| session.play(current, future));
        match outcome {
            Ok(outcome) => {
                println!("{}", format_outcome(&outcome, &session.state.catalog));
                return Ok(());
            }
            Err(err) if err.is_fatal() => return Err(err),
            Err(err) => println!("{err}. Try again."),
        }
    }
}

fn list_command(session: &mut Session, input: &mut Input) -> GameResult<()> {
    let Some(text) = input.prompt("Square:\t\t")? else {
        return Ok(());
    };

    let destinations = parse_square(&text, &session.state.position)
        .and_then(|square| session.state.legal_destinations(square));
    match destinations {
        Ok(squares) if squares.is_empty() => println!("No legal destinations."),
        Ok(squares) => println!("Legal destinations:\t{}", join_squares(&squares)),
        Err(err) if err.is_fatal() => return Err(err),
        Err(err) => println!("{err}"),
    }

    Ok(())
}

fn join_squares(squares: &[Square]) -> String {
    squares
        .iter()
        .map(|&square| format_square(square))
        .collect::<Vec<_>>()
        .join(" ")
}

fn run(args: Args) -> GameResult<()> {
    let catalog = load_catalog(&args)?;
    println!("Welcome to {}", catalog.title);

    let mut session = Session::new(catalog);
    session.state.set_self_check(!args.no_self_check);
    if let Some(path) = &args.load {
        open_game(&mut session, path);
    }

    let mut input = Input::new();

    loop {
        let status = session.pre_turn_check()?;

        println!();
        print!("{}", format_board(&session.state.position));
        match status {
            TurnStatus::Checkmate { winner } => println!("Checkmate! {winner} wins."),
            TurnStatus::Check => println!("{} is in check.", session.turn()),
            TurnStatus::Clear => {}
        }

        println!("[m]ove  [l]ist  [h]istory  [s]ave  [o]pen  [u]ndo  [r]eset  [q]uit");
        let Some(command) = input.prompt("Command:\t")? else {
            break;
        };

        match command.as_str() {
            "m" if !status.may_proceed() => println!("The game is over. Undo, reset or quit."),
            "m" => move_command(&mut session, &mut input)?,
            "l" => list_command(&mut session, &mut input)?,
            "h" => print!("{}", format_history(&session.history)),
            "s" => {
                if let Some(name) = input.prompt("Enter filename: ")? {
                    match save_history(&session.history, &name) {
                        Ok(()) => println!("Game saved to {name}"),
                        Err(err) => println!("{err}"),
                    }
                }
            }
            "o" => {
                if let Some(name) = input.prompt("Enter filename: ")? {
                    open_game(&mut session, Path::new(&name));
                }
            }
            "u" => {
                if !session.undo()? {
                    println!("No moves to undo!");
                }
            }
            "r" => {
                if input.confirm()? {
                    session.reset();
                }
            }
            "q" => {
                if input.confirm()? {
                    break;
                }
            }
            _ => println!("Unrecognized command. Try again."),
        }
    }

    println!("Thanks for playing!");
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error")),
        )
        .init();

    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}
