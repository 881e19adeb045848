//! # offset_parse.rs
//!
//! Implements parsing of offset descriptors and starting layouts.
//!
//! Offsets are written `forward:lateral`, optionally followed by a range:
//! `forward:lateral:n` leaps `n` times the vector, `forward:lateral:*` slides
//! without limit. A piece's offsets for one move class are a whitespace
//! separated list of those, `-` standing for no offsets at all and `=` (for
//! captures only) for "same as the move offsets".
//!
//! Layouts use the piece-placement field of FEN, generalised to any board up
//! to 16x16: ranks from the top down separated by `/`, runs of empty squares
//! as (possibly multi-digit) numbers, upper-case symbols for White and
//! lower-case for Black.
//!
//! # Author
//! Alden Luthfi
//!
//! # Date
//! 25/01/2026

use lazy_static::lazy_static;
use regex::Regex;

use crate::{
    constants::*,
    errors::{GameError, GameResult},
    representations::{
        piece::Piece,
        rules::{CaptureRule, OffsetDescriptor, Range},
        square::Square,
    },
};

lazy_static! {
    static ref OFFSET_PATTERN: Regex = Regex::new(
        r"^(-?\d{1,2}):(-?\d{1,2})(?::(\d{1,2}|\*))?$"
    ).unwrap();
    static ref LAYOUT_RANK_PATTERN: Regex = Regex::new(
        r"\d+|[A-Za-z]"
    ).unwrap();
}

/// Parses a single offset descriptor.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(parse_offset("1:0"), Ok(OffsetDescriptor::step(1, 0)));
/// assert_eq!(parse_offset("0:1:*"), Ok(OffsetDescriptor::ray(0, 1)));
/// assert_eq!(parse_offset("1:0:2"), Ok(OffsetDescriptor::leap(1, 0, 2)));
/// ```
pub fn parse_offset(expr: &str) -> GameResult<OffsetDescriptor> {
    let cap = OFFSET_PATTERN.captures(expr.trim()).ok_or_else(
        || GameError::config(format!("invalid offset '{expr}'"))
    )?;

    let component = |i: usize| -> GameResult<i8> {
        cap[i].parse::<i8>().map_err(
            |_| GameError::config(format!("invalid offset component in '{expr}'"))
        )
    };

    let forward = component(1)?;
    let lateral = component(2)?;
    if forward == 0 && lateral == 0 {
        return Err(GameError::config(format!("null offset '{expr}'")));
    }

    let range = match cap.get(3).map(|m| m.as_str()) {
        None => Range::Steps(1),
        Some(UNLIMITED_RANGE) => Range::Unlimited,
        Some(steps) => match steps.parse::<u8>() {
            Ok(0) | Err(_) => {
                return Err(GameError::config(format!(
                    "range of '{expr}' must be a positive step count or '*'"
                )))
            }
            Ok(n) => Range::Steps(n),
        },
    };

    Ok(OffsetDescriptor { forward, lateral, range })
}

/// Parses a whitespace separated list of offsets; `-` is the empty list.
pub fn parse_offsets(expr: &str) -> GameResult<Vec<OffsetDescriptor>> {
    let expr = expr.trim();
    if expr.is_empty() || expr == NO_OFFSETS {
        return Ok(Vec::new());
    }

    expr.split_whitespace().map(parse_offset).collect()
}

/// Parses the capture field of a piece, `=` aliasing the move offsets.
pub fn parse_captures(expr: &str) -> GameResult<CaptureRule> {
    if expr.trim() == CAPTURE_ALIAS {
        return Ok(CaptureRule::SameAsMove);
    }

    Ok(CaptureRule::Offsets(parse_offsets(expr)?))
}

/// Parses a FEN-style placement into a layout indexed like `Square::index`.
pub fn parse_layout(
    placement: &str,
    files: u8,
    ranks: u8,
) -> GameResult<Vec<Option<Piece>>> {
    let rows: Vec<&str> = placement.trim().split('/').collect();
    if rows.len() != ranks as usize {
        return Err(GameError::config(format!(
            "layout has {} ranks but the board has {ranks}",
            rows.len()
        )));
    }

    let mut layout = vec![None; (files as usize) * (ranks as usize)];

    for (row, text) in rows.iter().enumerate() {
        let rank = ranks as usize - 1 - row;                                    /* first row is the top rank          */
        let mut file = 0usize;

        let consumed: usize = LAYOUT_RANK_PATTERN
            .find_iter(text)
            .map(|m| m.len())
            .sum();
        if consumed != text.len() {
            return Err(GameError::config(format!(
                "unexpected character in layout rank '{text}'"
            )));
        }

        for token in LAYOUT_RANK_PATTERN.find_iter(text) {
            let token = token.as_str();
            if token.starts_with(|c: char| c.is_ascii_digit()) {
                file = token
                    .parse::<usize>()
                    .ok()
                    .and_then(|run| file.checked_add(run))
                    .filter(|&end| end <= files as usize)
                    .ok_or_else(|| GameError::config(format!(
                        "layout rank '{text}' has more than {files} files"
                    )))?;
                continue;
            }

            if file >= files as usize {
                return Err(GameError::config(format!(
                    "layout rank '{text}' has more than {files} files"
                )));
            }

            let symbol = token.chars().next().unwrap_or(EMPTY_SYMBOL);
            let square = Square::new(file as i8, rank as i8);
            layout[square.index(files)] = Some(Piece::from_symbol(symbol));
            file += 1;
        }

        if file != files as usize {
            return Err(GameError::config(format!(
                "layout rank '{text}' covers {file} files but the board has {files}"
            )));
        }
    }

    Ok(layout)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::representations::piece::Side;

    #[test]
    fn single_offsets_in_every_range_form() {
        assert_eq!(parse_offset("1:0").unwrap(), OffsetDescriptor::step(1, 0));
        assert_eq!(parse_offset("-1:1:*").unwrap(), OffsetDescriptor::ray(-1, 1));
        assert_eq!(parse_offset(" 1:0:2 ").unwrap(), OffsetDescriptor::leap(1, 0, 2));
    }

    #[test]
    fn malformed_offsets_are_config_errors() {
        for bad in ["1", "1:0:0", "0:0", "a:1", "1:0:x", "1:200"] {
            assert!(
                matches!(parse_offset(bad), Err(GameError::Config { .. })),
                "{bad} should not parse"
            );
        }
    }

    #[test]
    fn offset_lists_and_capture_alias() {
        assert_eq!(parse_offsets("2:1  2:-1").unwrap().len(), 2);
        assert!(parse_offsets("-").unwrap().is_empty());
        assert_eq!(parse_captures("=").unwrap(), CaptureRule::SameAsMove);
        assert_eq!(
            parse_captures("1:1 1:-1").unwrap(),
            CaptureRule::Offsets(vec![
                OffsetDescriptor::step(1, 1),
                OffsetDescriptor::step(1, -1),
            ])
        );
    }

    #[test]
    fn layout_places_the_top_rank_first() {
        let layout = parse_layout("4k3/8/8/8/8/8/8/R3K3", 8, 8).unwrap();

        let king = layout[Square::new(4, 7).index(8)].unwrap();
        assert_eq!(king.side, Side::Black);
        assert_eq!(king.identity, 'K');
        assert_eq!(layout[Square::new(0, 0).index(8)], Some(Piece::from_symbol('R')));
        assert_eq!(layout.iter().flatten().count(), 3);
    }

    #[test]
    fn layout_accepts_multi_digit_runs() {
        let layout = parse_layout("k9/10/9K", 10, 3).unwrap();
        assert_eq!(layout[Square::new(9, 0).index(10)], Some(Piece::from_symbol('K')));
    }

    #[test]
    fn layout_dimension_mismatches_are_rejected() {
        assert!(parse_layout("8/8", 8, 3).is_err());
        assert!(parse_layout("7/8/8", 8, 3).is_err());
        assert!(parse_layout("9/8/8", 8, 3).is_err());
        assert!(parse_layout("8/8/7?", 8, 3).is_err());
        assert!(parse_layout("8K/8/8", 8, 3).is_err());
    }

    #[test]
    fn oversized_empty_runs_are_config_errors() {
        for placement in [
            "K18446744073709551615/8/8",
            "K99999999999999999999999/8/8",
            "4K18446744073709551612/8/8",
        ] {
            assert!(
                matches!(parse_layout(placement, 8, 3), Err(GameError::Config { .. })),
                "{placement}"
            );
        }
    }
}
