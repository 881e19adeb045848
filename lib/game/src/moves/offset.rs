//! # offset.rs
//!
//! Resolves side-relative offsets into board squares.
//!
//! Offsets are authored once per piece identity, from White's point of view.
//! The lateral delta always moves along the files; the forward delta moves
//! along the ranks away from the owner's home rank, which means it is negated
//! for Black. No bounds checking happens here: callers test membership before
//! reading a resolved square.
//!
//! # Author
//! Alden Luthfi
//!
//! # Date
//! 25/01/2026

use crate::representations::{
    piece::Side,
    rules::OffsetDescriptor,
    square::Square,
};

/// Applies one step of `offset` to `origin` for a piece of `side`.
#[inline(always)]
pub fn resolve(origin: Square, offset: &OffsetDescriptor, side: Side) -> Square {
    Square {
        file: origin.file.saturating_add(offset.lateral),
        rank: origin
            .rank
            .saturating_add(offset.forward.saturating_mul(side.forward_sign())),
    }
}

/// Applies `steps` consecutive steps of `offset`.
pub fn resolve_steps(
    origin: Square,
    offset: &OffsetDescriptor,
    side: Side,
    steps: u8,
) -> Square {
    (0..steps).fold(origin, |square, _| resolve(square, offset, side))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forward_is_mirrored_for_black_only() {
        let origin = Square::new(3, 3);
        let offset = OffsetDescriptor::step(2, 1);

        assert_eq!(resolve(origin, &offset, Side::White), Square::new(4, 5));
        assert_eq!(resolve(origin, &offset, Side::Black), Square::new(4, 1));
    }

    #[test]
    fn resolution_does_not_clamp_to_the_board() {
        let corner = Square::new(0, 0);
        let offset = OffsetDescriptor::step(1, -1);

        let white = resolve(corner, &offset, Side::White);
        let black = resolve(corner, &offset, Side::Black);

        assert_eq!(white, Square::new(-1, 1));
        assert_eq!(black, Square::new(-1, -1));
        assert!(!white.on_board(8, 8));
    }

    #[test]
    fn multi_step_resolution_repeats_the_vector() {
        let offset = OffsetDescriptor::leap(1, 0, 2);
        assert_eq!(
            resolve_steps(Square::new(4, 1), &offset, Side::White, 2),
            Square::new(4, 3)
        );
        assert_eq!(
            resolve_steps(Square::new(4, 6), &offset, Side::Black, 2),
            Square::new(4, 4)
        );
    }
}
