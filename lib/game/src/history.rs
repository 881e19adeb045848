//! # history.rs
//!
//! Records the moves of a game.
//!
//! White always moves first and every accepted move hands the turn over, so
//! the record is a flat list in which even entries are White's and odd
//! entries Black's. Rounds are pairs of those. The history never checks the
//! moves it is given; replaying them through a session does.
//!
//! # Author
//! Alden Luthfi
//!
//! # Date
//! 25/01/2026

use crate::representations::{piece::Side, square::Square};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RecordedMove {
    pub from: Square,
    pub to: Square,
}

impl RecordedMove {
    pub fn new(from: Square, to: Square) -> Self {
        RecordedMove { from, to }
    }
}

/// One White move and, unless the game stopped after it, Black's reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Round {
    pub white: RecordedMove,
    pub black: Option<RecordedMove>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct History {
    moves: Vec<RecordedMove>,
}

impl History {
    pub fn new() -> Self {
        History::default()
    }

    pub fn reset(&mut self) {
        self.moves.clear();
    }

    pub fn record(&mut self, mv: RecordedMove) {
        self.moves.push(mv);
    }

    pub fn moves(&self) -> &[RecordedMove] {
        &self.moves
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// The side whose turn follows the recorded moves.
    pub fn side_to_move(&self) -> Side {
        if self.moves.len() % 2 == 0 {
            Side::White
        } else {
            Side::Black
        }
    }

    /// Drops up to `n` of the latest moves. Returns false if there was
    /// nothing to drop.
    pub fn erase(&mut self, n: usize) -> bool {
        if self.moves.is_empty() || n == 0 {
            return false;
        }

        let keep = self.moves.len().saturating_sub(n);
        self.moves.truncate(keep);
        true
    }

    pub fn rounds(&self) -> Vec<Round> {
        self.moves
            .chunks(2)
            .map(|pair| Round {
                white: pair[0],
                black: pair.get(1).copied(),
            })
            .collect()
    }
}
