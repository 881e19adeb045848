//! # state.rs
//!
//! Defines game state representation and management.
//!
//! This file contains the `State` struct, which ties a rule catalog to the
//! position it governs. It is the surface the command layer talks to: reset
//! from a ruleset, source and destination validation, and (in the `moves`
//! modules) the move lists, legality checks and check analysis.
//!
//! # Author
//! Alden Luthfi
//!
//! # Date
//! 25/01/2026

use tracing::debug;

use crate::{
    errors::{GameError, GameResult},
    representations::{
        piece::{Piece, Side},
        position::Position,
        rules::RuleCatalog,
        square::Square,
    },
};

#[derive(Debug, Clone)]
pub struct State {
    pub catalog: RuleCatalog,
    pub position: Position,

    /// Reject moves that leave the mover's royal piece capturable.
    pub self_check_filter: bool,
}

impl State {
    /// A state at the starting layout of `catalog`, with self-check
    /// filtering enabled.
    pub fn new(catalog: RuleCatalog) -> Self {
        let position = Position::from_layout(
            catalog.files,
            catalog.ranks,
            catalog.initial_layout(),
        );

        State {
            catalog,
            position,
            self_check_filter: true,
        }
    }

    /// A state over an arbitrary position, for analysis of set-up boards.
    pub fn with_position(catalog: RuleCatalog, position: Position) -> GameResult<Self> {
        if position.files != catalog.files || position.ranks != catalog.ranks {
            return Err(GameError::config(format!(
                "position is {}x{} but the rules describe {}x{}",
                position.files, position.ranks, catalog.files, catalog.ranks
            )));
        }

        Ok(State {
            catalog,
            position,
            self_check_filter: true,
        })
    }

    /// Puts every piece back on the starting layout and marks every square
    /// as never moved.
    pub fn reset(&mut self) {
        debug!("resetting to the layout of '{}'", self.catalog.title);
        self.position = Position::from_layout(
            self.catalog.files,
            self.catalog.ranks,
            self.catalog.initial_layout(),
        );
    }

    /// Switches to another ruleset and resets to its layout.
    pub fn reset_with(&mut self, catalog: RuleCatalog) {
        self.catalog = catalog;
        self.reset();
    }

    pub fn validate_source(&self, square: Square, side: Side) -> GameResult<Piece> {
        if !self.position.on_board(square) {
            return Err(GameError::OffBoard { square });
        }

        let piece = self
            .position
            .piece_at(square)
            .ok_or(GameError::EmptySquare { square })?;

        if piece.side != side {
            return Err(GameError::WrongOwner { square, side });
        }

        Ok(piece)
    }

    pub fn validate_destination(&self, square: Square) -> GameResult<()> {
        if !self.position.on_board(square) {
            return Err(GameError::OffBoard { square });
        }

        Ok(())
    }
}
