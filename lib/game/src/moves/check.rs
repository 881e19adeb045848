//! # check.rs
//!
//! Implements check and checkmate detection.
//!
//! A side is in check when any enemy piece lists one of its royal squares
//! among its captures. Hypothetical moves are tried on a frozen position: the
//! move is committed without any legality test, the mover's check status is
//! read, and the guard puts everything back. Nothing here recurses into the
//! self-check filter.
//!
//! # Author
//! Alden Luthfi
//!
//! # Date
//! 25/01/2026

use tracing::{debug, warn};

use crate::{
    errors::{GameError, GameResult},
    moves::legality::list_captures,
    representations::{
        piece::{Piece, Side},
        position::Position,
        rules::RuleCatalog,
        square::Square,
        state::State,
    },
};

/// Where a side stands at the start of its turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnStatus {
    Clear,
    Check,
    Checkmate { winner: Side },
}

impl TurnStatus {
    pub fn may_proceed(&self) -> bool {
        !matches!(self, TurnStatus::Checkmate { .. })
    }
}

/// True if a royal piece of `side` stands on a square some enemy piece can
/// capture on `position`.
pub fn in_check(position: &Position, catalog: &RuleCatalog, side: Side) -> GameResult<bool> {
    let Some(royal) = catalog.royal_identity(side) else {
        return Ok(false);
    };

    let royal_squares = position.find(Piece::new(side, royal));
    if royal_squares.is_empty() {
        return Ok(false);
    }

    for attacker in position.pieces_of(side.opponent()) {
        let captures = list_captures(position, catalog, attacker)?;
        if captures.iter().any(|square| royal_squares.contains(square)) {
            debug!("{side} royal attacked from {attacker}");
            return Ok(true);
        }
    }

    Ok(false)
}

impl State {
    pub fn in_check(&self, side: Side) -> GameResult<bool> {
        in_check(&self.position, &self.catalog, side)
    }

    /// True if relocating the piece on `current` to `future` would leave its
    /// own side in check.
    pub fn would_be_check(&mut self, current: Square, future: Square) -> GameResult<bool> {
        for square in [current, future] {
            if !self.position.on_board(square) {
                return Err(GameError::OffBoard { square });
            }
        }

        let mover = self
            .position
            .piece_at(current)
            .ok_or(GameError::EmptySquare { square: current })?;

        let catalog = &self.catalog;
        let mut frozen = self.position.freeze();
        frozen.commit(current, future);
        let check = in_check(&frozen, catalog, mover.side);
        frozen.unfreeze();

        check
    }

    /// True if no move or capture of any piece of `side` gets it out of
    /// check. A side with nothing to move counts as mated.
    pub fn in_checkmate(&mut self, side: Side) -> GameResult<bool> {
        for current in self.position.pieces_of(side) {
            let mut candidates = self.list_moves(current)?;
            candidates.extend(self.list_captures(current)?);

            for future in candidates {
                if !self.would_be_check(current, future)? {
                    debug!("{side} escapes with {current} to {future}");
                    return Ok(false);
                }
            }
        }

        Ok(true)
    }

    /// Run once at the start of each turn of `side`. A side left without a
    /// legal move loses, whether or not it is in check.
    pub fn pre_turn_check(&mut self, side: Side) -> GameResult<TurnStatus> {
        if self.in_checkmate(side)? {
            let winner = side.opponent();
            warn!("{side} is checkmated, {winner} wins");
            return Ok(TurnStatus::Checkmate { winner });
        }

        if self.in_check(side)? {
            warn!("{side} is in check");
            return Ok(TurnStatus::Check);
        }

        Ok(TurnStatus::Clear)
    }
}
