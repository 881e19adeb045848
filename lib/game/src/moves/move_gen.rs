//! # move_gen.rs
//!
//! Implements the generic move generator.
//!
//! Every piece is described by offset descriptors, so a single walker serves
//! all of them. It is steered by two predicates: `required`, which a square
//! must satisfy to be returned, and `passable`, which lets an unlimited ray
//! keep scanning past a square that was not returned. Finite descriptors are
//! leaps: only the square they land on is tested.
//!
//! The two standard predicate pairs are:
//!
//! ```text
//! move    required: Empty   passable: RejectAll
//! capture required: Enemy   passable: Empty
//! ```
//!
//! so a sliding move stops at the first occupied square, and a capturing ray
//! crosses empty squares and stops at the first occupant, which it returns
//! only if it is an enemy.
//!
//! # Author
//! Alden Luthfi
//!
//! # Date
//! 25/01/2026

use tracing::trace;

use crate::{
    errors::{GameError, GameResult},
    moves::offset::{resolve, resolve_steps},
    representations::{
        position::Position,
        rules::{MoveClass, Range, RuleCatalog},
        square::Square,
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Predicate {
    AcceptAll,
    RejectAll,
    Empty,
    Enemy,
}

impl Predicate {
    /// Tests `candidate` on behalf of the piece standing on `current`.
    #[inline(always)]
    pub fn holds(self, candidate: Square, current: Square, position: &Position) -> bool {
        match self {
            Predicate::AcceptAll => true,
            Predicate::RejectAll => false,
            Predicate::Empty => position.is_empty(candidate),
            Predicate::Enemy => position.is_enemy(candidate, current),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Restriction {
    pub required: Predicate,
    pub passable: Predicate,
}

pub const MOVE_RESTRICTION: Restriction = Restriction {
    required: Predicate::Empty,
    passable: Predicate::RejectAll,
};

pub const CAPTURE_RESTRICTION: Restriction = Restriction {
    required: Predicate::Enemy,
    passable: Predicate::Empty,
};

/// Lists the squares the piece on `current` reaches with the offsets of
/// `class`, in descriptor order then step order. `max_count` caps the number
/// of squares accepted along each unlimited ray.
pub fn generate(
    position: &Position,
    catalog: &RuleCatalog,
    current: Square,
    class: MoveClass,
    restriction: Restriction,
    max_count: usize,
) -> GameResult<Vec<Square>> {
    let piece = position
        .piece_at(current)
        .ok_or(GameError::EmptySquare { square: current })?;
    let offsets = catalog.offsets_for(piece.identity, class)?;

    let Restriction { required, passable } = restriction;
    let mut future = Vec::new();

    for offset in offsets {
        match offset.range {
            Range::Unlimited => {
                if offset.forward == 0 && offset.lateral == 0 {
                    trace!("skipping null ray of '{}'", piece.identity);
                    continue;
                }

                let mut accepted = 0;
                let mut next = resolve(current, offset, piece.side);

                while accepted < max_count && position.on_board(next) {
                    if required.holds(next, current, position) {
                        future.push(next);
                        accepted += 1;
                    } else if !passable.holds(next, current, position) {
                        break;                                                  /* blocked: the ray ends here         */
                    }
                    next = resolve(next, offset, piece.side);
                }
            }
            Range::Steps(steps) => {
                let next = resolve_steps(current, offset, piece.side, steps);
                if position.on_board(next) && required.holds(next, current, position) {
                    future.push(next);
                }
            }
        }
    }

    Ok(future)
}
