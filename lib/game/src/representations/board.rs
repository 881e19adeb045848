//! # board.rs
//!
//! Defines a board structure and operations for bitboard manipulation.
//!
//! This file contains the implementation of a `Board` struct, which represents
//! one bit per square of a board of up to 16x16 squares using a `U256`. The
//! position keeps three of them: the occupancy of each side and the
//! never-moved flags. It provides methods for setting, clearing, and querying
//! bits, and for listing the indices of the set bits.
//!
//! # Author
//! Alden Luthfi
//!
//! # Date
//! 25/01/2026

use bnum::types::U256;
use std::ops::{BitAnd, BitOrAssign};

use crate::constants::*;

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Board {
    pub files: u8,
    pub ranks: u8,
    pub bits: U256,
}

impl Board {
    pub fn new(files: u8, ranks: u8) -> Board {
        #[cfg(debug_assertions)]
        {
            assert!(
                files <= MAX_FILES,
                "Number of files {files} exceeds maximum of {MAX_FILES}."
            );
            assert!(
                ranks <= MAX_RANKS,
                "Number of ranks {ranks} exceeds maximum of {MAX_RANKS}."
            );
        }

        Board {
            files,
            ranks,
            bits: U256::ZERO,
        }
    }

    /// A board with every square set.
    pub fn full(files: u8, ranks: u8) -> Board {
        let mut board = Board::new(files, ranks);
        board.bits = twiddling::low_mask(board.size());
        board
    }

    #[inline(always)]
    pub fn size(&self) -> u32 {
        (self.files as u32) * (self.ranks as u32)
    }

    pub fn set_bit(&mut self, index: u32) {
        #[cfg(debug_assertions)]
        {
            let size = self.size();
            assert!(
                index < size,
                "Index {index} out of bounds for board of size {size}."
            );
        }

        twiddling::set_bit(&mut self.bits, index);
    }

    pub fn clear_bit(&mut self, index: u32) {
        #[cfg(debug_assertions)]
        {
            let size = self.size();
            assert!(
                index < size,
                "Index {index} out of bounds for board of size {size}."
            );
        }

        twiddling::clear_bit(&mut self.bits, index);
    }

    pub fn get_bit(&self, index: u32) -> bool {
        #[cfg(debug_assertions)]
        {
            let size = self.size();
            assert!(
                index < size,
                "Index {index} out of bounds for board of size {size}."
            );
        }

        twiddling::get_bit(&self.bits, index)
    }

    pub fn count_bits(&self) -> u32 {
        twiddling::count_bits(&self.bits)
    }

    pub fn is_empty(&self) -> bool {
        self.bits == U256::ZERO
    }

    pub fn bit_indices(&self) -> Vec<u32> {
        twiddling::bit_indices(&self.bits)
    }
}

impl BitOrAssign<&Board> for Board {
    fn bitor_assign(&mut self, rhs: &Board) {
        self.bits |= rhs.bits;
    }
}

impl BitAnd for &Board {
    type Output = Board;

    fn bitand(self, rhs: Self) -> Self::Output {
        Board {
            bits: self.bits & rhs.bits,
            ranks: self.ranks,
            files: self.files,
        }
    }
}
