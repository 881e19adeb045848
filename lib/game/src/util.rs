//! # util.rs
//!
//! Provides consistency checks for the board state.
//!
//! The occupancy bitboards of a position are derived data: every change goes
//! through `Position::set_piece`, which keeps them in step with the cells.
//! `verify_position` recomputes them from scratch and compares, and is run
//! after every committed move in debug builds.
//!
//! # Author
//! Alden Luthfi
//!
//! # Date
//! 25/01/2026

use crate::representations::{
    board::Board,
    piece::Side,
    position::Position,
    square::Square,
};

pub fn verify_position(position: &Position) {
    let mut temp_white_board = Board::new(position.files, position.ranks);
    let mut temp_black_board = Board::new(position.files, position.ranks);

    for (index, cell) in position.cells().iter().enumerate() {
        match cell {
            Some(piece) if piece.side == Side::White => {
                temp_white_board.set_bit(index as u32)
            }
            Some(_) => temp_black_board.set_bit(index as u32),
            None => {}
        }
    }

    assert_eq!(
        &temp_white_board,
        position.occupancy(Side::White),
        "Computed white board doesn't match position white board"
    );

    assert_eq!(
        &temp_black_board,
        position.occupancy(Side::Black),
        "Computed black board doesn't match position black board"
    );

    let overlap = &temp_white_board & &temp_black_board;
    assert!(overlap.is_empty(), "A square is occupied by both sides");

    let mut temp_pieces_board = temp_white_board;
    temp_pieces_board |= &temp_black_board;

    let occupied = position.cells().iter().filter(|cell| cell.is_some()).count();
    assert_eq!(
        temp_pieces_board.count_bits() as usize,
        occupied,
        "Occupied square count doesn't match the cells"
    );

    for index in temp_pieces_board.bit_indices() {
        let square = Square::from_index(index as usize, position.files);
        assert!(
            position.piece_at(square).is_some(),
            "Occupancy set on empty square {}",
            square
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::representations::piece::Piece;

    #[test]
    fn consistent_positions_pass() {
        let mut position = Position::new(8, 8);
        position.set_piece(Square::new(0, 0), Some(Piece::from_symbol('R')));
        position.set_piece(Square::new(7, 7), Some(Piece::from_symbol('r')));
        position.commit(Square::new(0, 0), Square::new(7, 7));

        verify_position(&position);
    }
}
