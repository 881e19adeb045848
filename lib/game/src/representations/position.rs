//! # position.rs
//!
//! Defines the board state: pieces, occupancy and never-moved flags.
//!
//! This file contains the `Position` struct, one piece-or-empty value per
//! square plus a per-square never-moved flag that gates the one-time
//! "initial" offsets. The occupancy of each side is mirrored in a bitboard so
//! that the pieces of a side can be listed without scanning the whole grid.
//!
//! Speculative computations go through `freeze`, which hands out a guard
//! borrowing the position mutably. The guard snapshots the position when it
//! is created and writes the snapshot back when it is dropped, so a commit
//! made through the guard can never outlive the query that needed it, on any
//! exit path. Because the guard holds the only mutable borrow, a second
//! freeze cannot be taken while one is outstanding.
//!
//! # Author
//! Alden Luthfi
//!
//! # Date
//! 25/01/2026

use std::ops::{Deref, DerefMut};

use tracing::trace;

use crate::representations::{
    board::Board,
    piece::{Piece, Side},
    square::Square,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    pub files: u8,
    pub ranks: u8,

    cells: Vec<Option<Piece>>,
    occupancy: [Board; 2],
    never_moved: Board,
}

impl Position {
    /// An empty board on which no square has been touched yet.
    pub fn new(files: u8, ranks: u8) -> Self {
        Position {
            files,
            ranks,
            cells: vec![None; (files as usize) * (ranks as usize)],
            occupancy: [Board::new(files, ranks), Board::new(files, ranks)],
            never_moved: Board::full(files, ranks),
        }
    }

    /// Builds a fresh position from a layout indexed like `Square::index`.
    pub fn from_layout(files: u8, ranks: u8, layout: &[Option<Piece>]) -> Self {
        let mut position = Position::new(files, ranks);

        for (index, piece) in layout.iter().enumerate() {
            if piece.is_some() {
                position.set_piece(Square::from_index(index, files), *piece);
            }
        }

        position
    }

    #[inline(always)]
    pub fn on_board(&self, square: Square) -> bool {
        square.on_board(self.files, self.ranks)
    }

    /// The larger board dimension, the longest distance a ray can travel
    /// plus one.
    pub fn longest_side(&self) -> u8 {
        self.files.max(self.ranks)
    }

    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        if !self.on_board(square) {
            return None;
        }

        self.cells[square.index(self.files)]
    }

    pub fn set_piece(&mut self, square: Square, piece: Option<Piece>) {
        debug_assert!(self.on_board(square), "{square} is not on the board");

        let index = square.index(self.files);
        if let Some(old) = self.cells[index] {
            self.occupancy[old.side.index()].clear_bit(index as u32);
        }
        if let Some(new) = piece {
            self.occupancy[new.side.index()].set_bit(index as u32);
        }

        self.cells[index] = piece;
    }

    pub fn never_moved_at(&self, square: Square) -> bool {
        self.on_board(square)
            && self.never_moved.get_bit(square.index(self.files) as u32)
    }

    pub fn set_never_moved(&mut self, square: Square, never_moved: bool) {
        debug_assert!(self.on_board(square), "{square} is not on the board");

        let index = square.index(self.files) as u32;
        if never_moved {
            self.never_moved.set_bit(index);
        } else {
            self.never_moved.clear_bit(index);
        }
    }

    pub fn is_empty(&self, square: Square) -> bool {
        self.piece_at(square).is_none()
    }

    /// True if `other` holds a piece belonging to the side opposite to the
    /// piece on `from`.
    pub fn is_enemy(&self, other: Square, from: Square) -> bool {
        match (self.piece_at(other), self.piece_at(from)) {
            (Some(target), Some(mover)) => target.is_enemy_of(&mover),
            _ => false,
        }
    }

    pub fn occupancy(&self, side: Side) -> &Board {
        &self.occupancy[side.index()]
    }

    pub fn cells(&self) -> &[Option<Piece>] {
        &self.cells
    }

    /// Squares holding pieces of `side`, in index order.
    pub fn pieces_of(&self, side: Side) -> Vec<Square> {
        self.occupancy[side.index()]
            .bit_indices()
            .into_iter()
            .map(|index| Square::from_index(index as usize, self.files))
            .collect()
    }

    pub fn find(&self, piece: Piece) -> Vec<Square> {
        self.pieces_of(piece.side)
            .into_iter()
            .filter(|&square| self.piece_at(square) == Some(piece))
            .collect()
    }

    /// Relocates the piece on `from` to `to` without any legality checks,
    /// clearing the never-moved flag of both squares. Returns whatever was
    /// standing on `to`.
    pub fn commit(&mut self, from: Square, to: Square) -> Option<Piece> {
        let mover = self.piece_at(from);
        let captured = self.piece_at(to);

        self.set_piece(to, mover);
        self.set_piece(from, None);
        self.set_never_moved(from, false);
        self.set_never_moved(to, false);

        captured
    }

    /// Snapshots the position; the snapshot is restored when the returned
    /// guard is dropped or `unfreeze`d.
    pub fn freeze(&mut self) -> Frozen<'_> {
        trace!("freezing position");
        let snapshot = self.clone();

        Frozen {
            position: self,
            snapshot: Some(snapshot),
        }
    }
}

pub struct Frozen<'a> {
    position: &'a mut Position,
    snapshot: Option<Position>,
}

impl Frozen<'_> {
    /// Restores the snapshot now. Dropping the guard has the same effect.
    pub fn unfreeze(self) {}
}

impl Deref for Frozen<'_> {
    type Target = Position;

    fn deref(&self) -> &Position {
        self.position
    }
}

impl DerefMut for Frozen<'_> {
    fn deref_mut(&mut self) -> &mut Position {
        self.position
    }
}

impl Drop for Frozen<'_> {
    fn drop(&mut self) {
        if let Some(snapshot) = self.snapshot.take() {
            *self.position = snapshot;
            trace!("position unfrozen");
        }
    }
}
