//! # square.rs
//!
//! Defines the square coordinate used to address the board.
//!
//! A square is a (file, rank) pair. The components are signed so that the
//! offset resolver can produce squares that fall off the board; membership is
//! always tested against the board dimensions before a square is used to
//! read or write a cell.
//!
//! # Author
//! Alden Luthfi
//!
//! # Date
//! 25/01/2026

use std::fmt;

use crate::constants::FIRST_FILE;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    pub file: i8,
    pub rank: i8,
}

impl Square {
    pub const fn new(file: i8, rank: i8) -> Self {
        Square { file, rank }
    }

    /// Returns true when the square lies inside a `files` x `ranks` board.
    #[inline(always)]
    pub fn on_board(&self, files: u8, ranks: u8) -> bool {
        self.file >= 0
            && self.rank >= 0
            && (self.file as u8) < files
            && (self.rank as u8) < ranks
    }

    /// Row-major index of the square, rank 0 first. Only meaningful for
    /// squares that are on the board.
    #[inline(always)]
    pub fn index(&self, files: u8) -> usize {
        (self.rank as usize) * (files as usize) + (self.file as usize)
    }

    pub fn from_index(index: usize, files: u8) -> Self {
        Square {
            file: (index % files as usize) as i8,
            rank: (index / files as usize) as i8,
        }
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if (0..26).contains(&self.file) && self.rank >= 0 {
            write!(
                f,
                "{}{}",
                (FIRST_FILE + self.file as u8) as char,
                self.rank as u16 + 1
            )
        } else {
            write!(f, "({}, {})", self.file, self.rank)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn membership_respects_both_axes() {
        assert!(Square::new(0, 0).on_board(8, 8));
        assert!(Square::new(7, 7).on_board(8, 8));
        assert!(!Square::new(8, 0).on_board(8, 8));
        assert!(!Square::new(0, -1).on_board(8, 8));
        assert!(Square::new(9, 2).on_board(10, 3));
        assert!(!Square::new(9, 3).on_board(10, 3));
    }

    #[test]
    fn index_round_trips_through_from_index() {
        let square = Square::new(4, 6);
        assert_eq!(square.index(8), 52);
        assert_eq!(Square::from_index(52, 8), square);
    }

    #[test]
    fn display_uses_algebraic_names() {
        assert_eq!(Square::new(0, 0).to_string(), "a1");
        assert_eq!(Square::new(4, 3).to_string(), "e4");
        assert_eq!(Square::new(2, 12).to_string(), "c13");
        assert_eq!(Square::new(-1, 3).to_string(), "(-1, 3)");
    }
}
