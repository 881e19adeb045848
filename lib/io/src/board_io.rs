//! # board_io.rs
//!
//! Implements board formatting and square notation.
//!
//! This file contains the textual board dump, drawn with Unicode
//! box-drawing characters and labelled with ranks and files, and the
//! conversion between squares and their algebraic names. Files are letters
//! from `a`, ranks are numbers from `1`, so the largest board reaches `p16`.
//!
//! # Author
//! Alden Luthfi
//!
//! # Date
//! 25/01/2026

use lazy_static::lazy_static;
use regex::Regex;

use game::{
    constants::{EMPTY_SYMBOL, FIRST_FILE, MAX_FILES, MAX_RANKS},
    errors::{GameError, GameResult},
    representations::{position::Position, square::Square},
};

lazy_static! {
    static ref SQUARE_PATTERN: Regex = Regex::new(
        r"^([a-pA-P])(\d{1,2})$"
    ).unwrap();
}

pub fn format_square(square: Square) -> String {
    square.to_string()
}

/// Parses an algebraic square name and checks it against the board.
pub fn parse_square(text: &str, position: &Position) -> GameResult<Square> {
    let text = text.trim();
    let cap = SQUARE_PATTERN.captures(text).ok_or_else(|| GameError::InvalidSquare {
        text: text.to_string(),
    })?;

    let file = cap[1].to_ascii_lowercase().as_bytes()[0] - FIRST_FILE;
    let rank = cap[2]
        .parse::<u8>()
        .ok()
        .filter(|&rank| (1..=MAX_RANKS).contains(&rank))
        .ok_or_else(|| GameError::InvalidSquare { text: text.to_string() })?;

    debug_assert!(file < MAX_FILES);
    let square = Square::new(file as i8, rank as i8 - 1);
    if !position.on_board(square) {
        return Err(GameError::OffBoard { square });
    }

    Ok(square)
}

fn format_cells(position: &Position) -> Vec<String> {
    (0..position.ranks)
        .rev()
        .map(|rank| {
            (0..position.files)
                .map(|file| {
                    position
                        .piece_at(Square::new(file as i8, rank as i8))
                        .map(|piece| piece.symbol())
                        .unwrap_or(EMPTY_SYMBOL)
                        .to_string()
                })
                .collect::<Vec<_>>()
                .join(" │ ")
        })
        .collect()
}

/// Draws the position, White at the bottom.
pub fn format_board(position: &Position) -> String {
    let files = position.files as usize;
    let ranks = position.ranks as usize;

    let mut result = String::new();
    result.push_str(
        &format!("   ╔{}╗\n", "═══╤".repeat(files - 1) + "═══")
    );

    for (i, line) in format_cells(position).iter().enumerate() {
        result.push_str(&format!("{:02} ║ {} ║\n", ranks - i, line));

        if i != ranks - 1 {
            result.push_str(
                &format!("   ╟{}╢\n", "───┼".repeat(files - 1) + "───")
            );
        }
    }

    result.push_str(
        &format!("   ╚{}╝\n     ", "═══╧".repeat(files - 1) + "═══")
    );

    for col in 0..files {
        result.push_str(&format!("{:3} ", (FIRST_FILE + col as u8) as char));
    }
    result.push('\n');

    result.replace(&format!(" {EMPTY_SYMBOL} "), "   ")
}
