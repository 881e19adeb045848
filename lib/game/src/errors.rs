//! # errors.rs
//!
//! Defines the error taxonomy of the engine.
//!
//! Player errors (a bad source or destination, an illegal move, a move that
//! exposes the royal piece) are recoverable at the turn boundary: the caller
//! reports the message and asks again. Configuration errors mean the rule
//! data and the board disagree and are surfaced to the operator instead.
//!
//! # Author
//! Alden Luthfi
//!
//! # Date
//! 25/01/2026

use thiserror::Error;

use crate::representations::{piece::Side, square::Square};

#[derive(Debug, Error)]
pub enum GameError {
    #[error("square {square} is not on the board")]
    OffBoard { square: Square },

    #[error("'{text}' is not a square")]
    InvalidSquare { text: String },

    #[error("square {square} is empty")]
    EmptySquare { square: Square },

    #[error("the piece on {square} does not belong to {side}")]
    WrongOwner { square: Square, side: Side },

    #[error("illegal move from {from} to {to}")]
    IllegalMove { from: Square, to: Square },

    #[error("moving from {from} to {to} would put the royal piece in check")]
    SelfCheck { from: Square, to: Square },

    #[error("piece '{identity}' has no entry in the rule catalog")]
    UnknownPiece { identity: char },

    #[error("the piece on {square} has no available moves or captures")]
    NoCandidates { square: Square },

    #[error("invalid rules at line {line}: {message}")]
    Config { line: usize, message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("malformed saved game: {0}")]
    Json(#[from] serde_json::Error),
}

impl GameError {
    /// A configuration error not yet tied to a line of a rule file.
    pub fn config(message: impl Into<String>) -> Self {
        GameError::Config { line: 0, message: message.into() }
    }

    /// Attaches a 1-based line number to a configuration error.
    pub fn at_line(self, line: usize) -> Self {
        match self {
            GameError::Config { message, .. } => GameError::Config { line, message },
            GameError::UnknownPiece { identity } => GameError::Config {
                line,
                message: format!("piece '{identity}' is not defined"),
            },
            other => other,
        }
    }

    /// True for errors that point at broken rule data or the environment
    /// rather than at a player's input.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            GameError::UnknownPiece { .. }
                | GameError::Config { .. }
                | GameError::Io(_)
                | GameError::Json(_)
        )
    }
}

pub type GameResult<T> = Result<T, GameError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn player_errors_are_recoverable() {
        let square = Square::new(0, 0);
        assert!(!GameError::EmptySquare { square }.is_fatal());
        assert!(!GameError::SelfCheck { from: square, to: square }.is_fatal());
        assert!(GameError::UnknownPiece { identity: 'X' }.is_fatal());
    }

    #[test]
    fn line_numbers_attach_to_config_errors_only() {
        let err = GameError::config("bad offset").at_line(4);
        assert_eq!(err.to_string(), "invalid rules at line 4: bad offset");

        let err = GameError::UnknownPiece { identity: 'Q' }.at_line(9);
        assert!(matches!(err, GameError::Config { line: 9, .. }));

        let square = Square::new(1, 1);
        let err = GameError::EmptySquare { square }.at_line(2);
        assert!(matches!(err, GameError::EmptySquare { .. }));
    }

    #[test]
    fn self_check_message_differs_from_illegal_move() {
        let from = Square::new(4, 0);
        let to = Square::new(4, 1);
        assert_ne!(
            GameError::SelfCheck { from, to }.to_string(),
            GameError::IllegalMove { from, to }.to_string()
        );
    }
}
