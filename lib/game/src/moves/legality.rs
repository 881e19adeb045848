//! # legality.rs
//!
//! Implements the legality oracle: move and capture lists, the legality
//! decision and the move commit.
//!
//! The lists are the raw output of the generator with the standard predicate
//! pairs. Moves include the one-time "initial" offsets while the source square
//! has never been touched, and slide at most one square less than the longest
//! board side. Capturing rays accept a single target.
//!
//! A destination is legal if it is in either list and, when the self-check
//! filter is on, does not leave the mover's royal piece capturable. Move
//! membership is tested before capture membership.
//!
//! # Author
//! Alden Luthfi
//!
//! # Date
//! 25/01/2026

use tracing::{debug, info};

use crate::{
    constants::CAPTURE_RAY_LIMIT,
    errors::{GameError, GameResult},
    moves::move_gen::{generate, CAPTURE_RESTRICTION, MOVE_RESTRICTION},
    representations::{
        piece::Piece,
        position::Position,
        rules::{MoveClass, RuleCatalog},
        square::Square,
        state::State,
    },
};

#[cfg(debug_assertions)]
use crate::util::verify_position;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveKind {
    Quiet,
    Capture(Piece),
}

/// What a committed move did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    pub piece: Piece,
    pub from: Square,
    pub to: Square,
    pub kind: MoveKind,
}

impl MoveOutcome {
    pub fn captured(&self) -> Option<Piece> {
        match self.kind {
            MoveKind::Capture(piece) => Some(piece),
            MoveKind::Quiet => None,
        }
    }
}

/// Non-capturing destinations of the piece on `current`.
pub fn list_moves(
    position: &Position,
    catalog: &RuleCatalog,
    current: Square,
) -> GameResult<Vec<Square>> {
    let max_count = position.longest_side().saturating_sub(1) as usize;
    let mut moves = generate(
        position, catalog, current,
        MoveClass::Move, MOVE_RESTRICTION, max_count,
    )?;

    if position.never_moved_at(current) {
        let initial = generate(
            position, catalog, current,
            MoveClass::Initial, MOVE_RESTRICTION, max_count,
        )?;

        for square in initial {
            if !moves.contains(&square) {
                moves.push(square);
            }
        }
    }

    Ok(moves)
}

/// Capturing destinations of the piece on `current`.
pub fn list_captures(
    position: &Position,
    catalog: &RuleCatalog,
    current: Square,
) -> GameResult<Vec<Square>> {
    generate(
        position, catalog, current,
        MoveClass::Capture, CAPTURE_RESTRICTION, CAPTURE_RAY_LIMIT,
    )
}

impl State {
    pub fn list_moves(&self, current: Square) -> GameResult<Vec<Square>> {
        list_moves(&self.position, &self.catalog, current)
    }

    pub fn list_captures(&self, current: Square) -> GameResult<Vec<Square>> {
        list_captures(&self.position, &self.catalog, current)
    }

    pub fn set_self_check(&mut self, enabled: bool) {
        debug!("self-check filter {}", if enabled { "on" } else { "off" });
        self.self_check_filter = enabled;
    }

    /// Decides whether the piece on `current` may go to `future`, and how.
    pub fn check_legal(&mut self, current: Square, future: Square) -> GameResult<MoveKind> {
        if self.position.is_empty(current) {
            return Err(GameError::EmptySquare { square: current });
        }

        let kind = if self.list_moves(current)?.contains(&future) {
            MoveKind::Quiet
        } else if self.list_captures(current)?.contains(&future) {
            match self.position.piece_at(future) {
                Some(target) => MoveKind::Capture(target),
                None => return Err(GameError::IllegalMove { from: current, to: future }),
            }
        } else {
            return Err(GameError::IllegalMove { from: current, to: future });
        };

        if self.self_check_filter && self.would_be_check(current, future)? {
            return Err(GameError::SelfCheck { from: current, to: future });
        }

        Ok(kind)
    }

    pub fn is_legal(&mut self, current: Square, future: Square) -> GameResult<bool> {
        match self.check_legal(current, future) {
            Ok(_) => Ok(true),
            Err(err) if err.is_fatal() => Err(err),
            Err(_) => Ok(false),
        }
    }

    /// Every destination the piece on `current` may legally reach, moves
    /// first, then captures.
    pub fn legal_destinations(&mut self, current: Square) -> GameResult<Vec<Square>> {
        let mut candidates = self.list_moves(current)?;
        candidates.extend(self.list_captures(current)?);

        if !self.self_check_filter {
            return Ok(candidates);
        }

        let mut legal = Vec::with_capacity(candidates.len());
        for future in candidates {
            if !self.would_be_check(current, future)? {
                legal.push(future);
            }
        }

        Ok(legal)
    }

    /// Validates and commits a move. `silent` suppresses the narration line,
    /// as wanted when replaying a recorded game.
    pub fn attempt_move(
        &mut self,
        current: Square,
        future: Square,
        silent: bool,
    ) -> GameResult<MoveOutcome> {
        let piece = self
            .position
            .piece_at(current)
            .ok_or(GameError::EmptySquare { square: current })?;

        let kind = self.check_legal(current, future)?;
        self.position.commit(current, future);

        #[cfg(debug_assertions)]
        verify_position(&self.position);

        let name = self.catalog.display_name(&piece);
        if !silent {
            match kind {
                MoveKind::Quiet => info!("{name} moved from {current} to {future}"),
                MoveKind::Capture(target) => info!(
                    "{name} captured {} on {future}",
                    self.catalog.display_name(&target)
                ),
            }
        }
        debug!(piece = %piece.symbol(), from = %current, to = %future, ?kind, "move committed");

        Ok(MoveOutcome { piece, from: current, to: future, kind })
    }
}
