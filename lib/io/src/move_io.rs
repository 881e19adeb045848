//! # move_io.rs
//!
//! Implements move notation and narration.
//!
//! Moves are written as the source square immediately followed by the
//! destination, e.g. `e2e4` or `c13c15`. Narration names the piece in upper
//! case for White and lower case for Black.
//!
//! # Author
//! Alden Luthfi
//!
//! # Date
//! 25/01/2026

use lazy_static::lazy_static;
use regex::Regex;

use game::{
    errors::{GameError, GameResult},
    history::RecordedMove,
    moves::legality::{MoveKind, MoveOutcome},
    representations::{position::Position, rules::RuleCatalog},
};

use crate::board_io::{format_square, parse_square};

lazy_static! {
    static ref MOVE_PATTERN: Regex = Regex::new(
        r"^([a-pA-P]\d{1,2})([a-pA-P]\d{1,2})$"
    ).unwrap();
}

pub fn format_move(mv: &RecordedMove) -> String {
    format!("{}{}", format_square(mv.from), format_square(mv.to))
}

pub fn parse_move(text: &str, position: &Position) -> GameResult<RecordedMove> {
    let text = text.trim();
    let cap = MOVE_PATTERN.captures(text).ok_or_else(|| GameError::InvalidSquare {
        text: text.to_string(),
    })?;

    Ok(RecordedMove::new(
        parse_square(&cap[1], position)?,
        parse_square(&cap[2], position)?,
    ))
}

pub fn format_outcome(outcome: &MoveOutcome, catalog: &RuleCatalog) -> String {
    let name = catalog.display_name(&outcome.piece);

    match outcome.kind {
        MoveKind::Quiet => format!(
            "> {} moved from {} to {}.",
            name,
            format_square(outcome.from),
            format_square(outcome.to)
        ),
        MoveKind::Capture(target) => format!(
            "> {} at {} captured {} at {}.",
            name,
            format_square(outcome.from),
            catalog.display_name(&target),
            format_square(outcome.to)
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game::representations::{piece::Piece, square::Square};

    use crate::game_io::{parse_config, STANDARD_RULES};

    #[test]
    fn moves_are_written_square_to_square() {
        let position = Position::new(16, 16);
        let mv = parse_move("c13c15", &position).unwrap();

        assert_eq!(mv, RecordedMove::new(Square::new(2, 12), Square::new(2, 14)));
        assert_eq!(format_move(&mv), "c13c15");
        assert!(parse_move("c13", &position).is_err());
        assert!(matches!(
            parse_move("a1a9", &Position::new(8, 8)),
            Err(GameError::OffBoard { .. })
        ));
    }

    #[test]
    fn narration_follows_the_side_case() {
        let catalog = parse_config(STANDARD_RULES).unwrap();

        let quiet = MoveOutcome {
            piece: Piece::from_symbol('N'),
            from: Square::new(1, 0),
            to: Square::new(2, 2),
            kind: MoveKind::Quiet,
        };
        assert_eq!(format_outcome(&quiet, &catalog), "> KNIGHT moved from b1 to c3.");

        let capture = MoveOutcome {
            piece: Piece::from_symbol('p'),
            from: Square::new(3, 4),
            to: Square::new(4, 3),
            kind: MoveKind::Capture(Piece::from_symbol('P')),
        };
        assert_eq!(
            format_outcome(&capture, &catalog),
            "> pawn at d5 captured PAWN at e4."
        );
    }
}
