//! # piece.rs
//!
//! Defines piece representation and properties.
//!
//! This file contains the `Side` of a piece and the `Piece` itself, a
//! (side, identity) pair. The identity is the upper-case symbol of the piece
//! in the rule catalog and alone determines how the piece moves; the side
//! only decides which way "forward" points and who owns the piece. On the
//! board and in layouts the side is carried by the case of the symbol:
//! upper-case for White, lower-case for Black.
//!
//! # Author
//! Alden Luthfi
//!
//! # Date
//! 25/01/2026

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    White = 0,
    Black = 1,
}

impl Side {
    #[inline(always)]
    pub fn opponent(self) -> Side {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }

    /// Rank direction of "forward" for this side.
    #[inline(always)]
    pub fn forward_sign(self) -> i8 {
        match self {
            Side::White => 1,
            Side::Black => -1,
        }
    }

    #[inline(always)]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn of_symbol(symbol: char) -> Side {
        if symbol.is_ascii_lowercase() {
            Side::Black
        } else {
            Side::White
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::White => write!(f, "White"),
            Side::Black => write!(f, "Black"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub side: Side,
    pub identity: char,
}

impl Piece {
    pub fn new(side: Side, identity: char) -> Self {
        Piece {
            side,
            identity: identity.to_ascii_uppercase(),
        }
    }

    /// Builds a piece from a layout symbol, the case selecting the side.
    pub fn from_symbol(symbol: char) -> Self {
        Piece::new(Side::of_symbol(symbol), symbol)
    }

    pub fn symbol(&self) -> char {
        match self.side {
            Side::White => self.identity.to_ascii_uppercase(),
            Side::Black => self.identity.to_ascii_lowercase(),
        }
    }

    #[inline(always)]
    pub fn is_enemy_of(&self, other: &Piece) -> bool {
        self.side != other.side
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbol_case_selects_the_side() {
        let white = Piece::from_symbol('N');
        let black = Piece::from_symbol('n');

        assert_eq!(white.side, Side::White);
        assert_eq!(black.side, Side::Black);
        assert_eq!(white.identity, black.identity);
        assert_eq!(black.symbol(), 'n');
        assert!(white.is_enemy_of(&black));
    }

    #[test]
    fn forward_points_away_from_home() {
        assert_eq!(Side::White.forward_sign(), 1);
        assert_eq!(Side::Black.forward_sign(), -1);
        assert_eq!(Side::White.opponent(), Side::Black);
    }
}
