//! # history_io.rs
//!
//! Implements saving, loading and printing of game histories.
//!
//! A saved game is a JSON document holding the rounds by number, counted
//! from zero. Each round lists White's moves and Black's moves as
//! `[from, to]` square pairs.
//!
//! ```json
//! {
//!   "round": {
//!     "0": { "white_turn": [["e2", "e4"]], "black_turn": [["e7", "e5"]] },
//!     "1": { "white_turn": [["g1", "f3"]], "black_turn": [] }
//!   }
//! }
//! ```
//!
//! Loading only reads the moves back. Whether they are legal is decided when
//! the session replays them.
//!
//! # Author
//! Alden Luthfi
//!
//! # Date
//! 25/01/2026

use std::{collections::BTreeMap, fs, path::Path};

use serde::{Deserialize, Serialize};
use tracing::debug;

use game::{
    errors::{GameError, GameResult},
    history::{History, RecordedMove},
    representations::position::Position,
};

use crate::{
    board_io::{format_square, parse_square},
    move_io::format_move,
};

#[derive(Debug, Default, Serialize, Deserialize)]
struct SavedGame {
    round: BTreeMap<usize, SavedRound>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct SavedRound {
    #[serde(default)]
    white_turn: Vec<[String; 2]>,
    #[serde(default)]
    black_turn: Vec<[String; 2]>,
}

fn saved_move(mv: &RecordedMove) -> [String; 2] {
    [format_square(mv.from), format_square(mv.to)]
}

/// Renders the history as a round table for the terminal.
pub fn format_history(history: &History) -> String {
    if history.is_empty() {
        return "No history!\n".to_string();
    }

    let mut result = String::from("Round\tWhite\tBlack\n");
    for (i, round) in history.rounds().iter().enumerate() {
        let black = round.black.as_ref().map(format_move).unwrap_or_default();
        result.push_str(&format!("{}\t{}\t{}\n", i + 1, format_move(&round.white), black));
    }

    result
}

pub fn serialize_history(history: &History) -> GameResult<String> {
    let round = history
        .rounds()
        .iter()
        .enumerate()
        .map(|(i, round)| {
            let saved = SavedRound {
                white_turn: vec![saved_move(&round.white)],
                black_turn: round.black.iter().map(saved_move).collect(),
            };
            (i, saved)
        })
        .collect();

    Ok(serde_json::to_string_pretty(&SavedGame { round })?)
}

/// Reads moves back from the saved form, checking only that every square
/// exists on `position` and that the sides alternate.
pub fn parse_history(contents: &str, position: &Position) -> GameResult<Vec<RecordedMove>> {
    let saved: SavedGame = serde_json::from_str(contents)?;

    let mut moves = Vec::new();
    let mut finished = false;

    for (expected, (&number, round)) in saved.round.iter().enumerate() {
        if number != expected {
            return Err(GameError::config(format!("round {expected} is missing")));
        }
        if finished {
            return Err(GameError::config(format!(
                "round {number} follows a round Black did not finish"
            )));
        }
        if round.white_turn.len() != 1 || round.black_turn.len() > 1 {
            return Err(GameError::config(format!(
                "round {number} must hold one White move and at most one Black move"
            )));
        }

        for [from, to] in round.white_turn.iter().chain(&round.black_turn) {
            let mv = RecordedMove::new(parse_square(from, position)?, parse_square(to, position)?);
            moves.push(mv);
        }

        finished = round.black_turn.is_empty();
    }

    Ok(moves)
}

pub fn save_history(history: &History, path: impl AsRef<Path>) -> GameResult<()> {
    fs::write(path.as_ref(), serialize_history(history)?)?;
    debug!("saved {} moves to {}", history.len(), path.as_ref().display());
    Ok(())
}

pub fn load_history(path: impl AsRef<Path>, position: &Position) -> GameResult<Vec<RecordedMove>> {
    let contents = fs::read_to_string(path.as_ref())?;
    let moves = parse_history(&contents, position)?;
    debug!("read {} moves from {}", moves.len(), path.as_ref().display());
    Ok(moves)
}

#[cfg(test)]
mod tests {
    use super::*;
    use game::representations::square::Square;

    fn sample() -> History {
        let mut history = History::new();
        for (from, to) in [((4, 1), (4, 3)), ((4, 6), (4, 4)), ((6, 0), (5, 2))] {
            history.record(RecordedMove::new(
                Square::new(from.0, from.1),
                Square::new(to.0, to.1),
            ));
        }
        history
    }

    #[test]
    fn saved_form_groups_moves_by_round() {
        let saved: serde_json::Value =
            serde_json::from_str(&serialize_history(&sample()).unwrap()).unwrap();

        assert_eq!(
            saved,
            serde_json::json!({
                "round": {
                    "0": { "white_turn": [["e2", "e4"]], "black_turn": [["e7", "e5"]] },
                    "1": { "white_turn": [["g1", "f3"]], "black_turn": [] }
                }
            })
        );
        assert_eq!(
            serde_json::from_str::<serde_json::Value>(&serialize_history(&History::new()).unwrap())
                .unwrap(),
            serde_json::json!({ "round": {} })
        );
    }

    #[test]
    fn saved_form_reads_back() {
        let position = Position::new(8, 8);
        let moves = parse_history(&serialize_history(&sample()).unwrap(), &position).unwrap();
        assert_eq!(moves, sample().moves());
    }

    #[test]
    fn malformed_histories_are_rejected() {
        let position = Position::new(8, 8);
        for contents in [
            r#"{"round": {"1": {"white_turn": [["e2", "e4"]]}}}"#,
            r#"{"round": {"0": {"white_turn": [["e2", "e4"], ["d2", "d4"]]}}}"#,
            r#"{"round": {"0": {"white_turn": [], "black_turn": [["e7", "e5"]]}}}"#,
            r#"{"round": {"0": {"white_turn": [["e2", "e4"]]}, "1": {"white_turn": [["d2", "d4"]]}}}"#,
        ] {
            assert!(
                matches!(parse_history(contents, &position), Err(GameError::Config { .. })),
                "{contents}"
            );
        }

        assert!(matches!(
            parse_history(r#"{"round": {"0": {"white_turn": [["e2", "e9"]]}}}"#, &position),
            Err(GameError::OffBoard { .. })
        ));
        for contents in ["1 e2e4 e7e5", r#"{"round": {"0": {"white_turn": [["e2"]]}}}"#] {
            assert!(
                matches!(parse_history(contents, &position), Err(GameError::Json(_))),
                "{contents}"
            );
        }
    }

    #[test]
    fn table_for_the_terminal() {
        assert_eq!(format_history(&History::new()), "No history!\n");
        assert_eq!(
            format_history(&sample()),
            "Round\tWhite\tBlack\n1\te2e4\te7e5\n2\tg1f3\t\n"
        );
    }
}
