//! # session.rs
//!
//! Drives a game: whose turn it is, the move record, undo and replay.
//!
//! A session owns a `State` and the `History` of the moves accepted on it.
//! Because the never-moved flags are derived from everything that happened
//! on the board, undo does not try to reverse a move: it erases the last
//! record, resets the board and replays the rest silently.
//!
//! The checkmate search behind the turn status is costly, so its result is
//! kept until the session next changes the board.
//!
//! # Author
//! Alden Luthfi
//!
//! # Date
//! 25/01/2026

use tracing::{debug, info};

use crate::{
    errors::{GameError, GameResult},
    history::{History, RecordedMove},
    moves::{check::TurnStatus, legality::MoveOutcome},
    representations::{
        piece::Side,
        rules::RuleCatalog,
        square::Square,
        state::State,
    },
};

/// The raw destinations of a selected piece, before self-check filtering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidates {
    pub moves: Vec<Square>,
    pub captures: Vec<Square>,
}

#[derive(Debug, Clone)]
pub struct Session {
    pub state: State,
    pub history: History,
    status: Option<TurnStatus>,
}

impl Session {
    pub fn new(catalog: RuleCatalog) -> Self {
        Session {
            state: State::new(catalog),
            history: History::new(),
            status: None,
        }
    }

    pub fn turn(&self) -> Side {
        self.history.side_to_move()
    }

    pub fn reset(&mut self) {
        self.state.reset();
        self.history.reset();
        self.status = None;
    }

    /// Switches rules and starts over.
    pub fn reset_with(&mut self, catalog: RuleCatalog) {
        self.state.reset_with(catalog);
        self.history.reset();
        self.status = None;
    }

    /// Status of the side to move, searched at most once per turn.
    pub fn pre_turn_check(&mut self) -> GameResult<TurnStatus> {
        if let Some(status) = self.status {
            return Ok(status);
        }

        let status = self.state.pre_turn_check(self.turn())?;
        self.status = Some(status);
        Ok(status)
    }

    /// The status found by the last `pre_turn_check` of this turn, if any.
    pub fn turn_status(&self) -> Option<TurnStatus> {
        self.status
    }

    /// Validates `square` as a source for the side to move and lists where
    /// its piece could go.
    pub fn select(&self, square: Square) -> GameResult<Candidates> {
        self.state.validate_source(square, self.turn())?;

        let candidates = Candidates {
            moves: self.state.list_moves(square)?,
            captures: self.state.list_captures(square)?,
        };

        if candidates.moves.is_empty() && candidates.captures.is_empty() {
            return Err(GameError::NoCandidates { square });
        }

        Ok(candidates)
    }

    pub fn play(&mut self, from: Square, to: Square) -> GameResult<MoveOutcome> {
        self.play_inner(from, to, false)
    }

    fn play_inner(&mut self, from: Square, to: Square, silent: bool) -> GameResult<MoveOutcome> {
        self.state.validate_source(from, self.turn())?;
        self.state.validate_destination(to)?;

        let outcome = self.state.attempt_move(from, to, silent)?;
        self.history.record(RecordedMove::new(from, to));
        self.status = None;

        Ok(outcome)
    }

    /// Takes back the latest move. Returns false if no move was played.
    pub fn undo(&mut self) -> GameResult<bool> {
        let mut history = self.history.clone();
        if !history.erase(1) {
            return Ok(false);
        }

        self.replay(history.moves())?;
        debug!("undone, {} moves remain", self.history.len());
        Ok(true)
    }

    /// Resets and plays `moves` silently. If any of them is rejected the
    /// session is left reset and the error is returned.
    pub fn replay(&mut self, moves: &[RecordedMove]) -> GameResult<()> {
        self.reset();

        for (ply, mv) in moves.iter().enumerate() {
            if let Err(err) = self.play_inner(mv.from, mv.to, true) {
                info!("move {} ({}{}) cannot be replayed: {err}", ply + 1, mv.from, mv.to);
                self.reset();
                return Err(err);
            }
        }

        debug!("replayed {} moves", moves.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        moves::offset_parse::{parse_captures, parse_layout, parse_offsets},
        representations::rules::PieceRule,
    };

    fn catalog() -> RuleCatalog {
        let mut catalog = RuleCatalog::new("test", 8, 8).unwrap();
        let rules = [
            ('K', "King", "1:0 1:1 0:1 -1:1 -1:0 -1:-1 0:-1 1:-1", "=", "-"),
            ('R', "Rook", "1:0:* -1:0:* 0:1:* 0:-1:*", "=", "-"),
            ('P', "Pawn", "1:0", "1:1 1:-1", "2:0"),
        ];
        for (identity, name, moves, captures, initial) in rules {
            catalog
                .add_rule(
                    identity,
                    PieceRule::new(
                        name,
                        parse_offsets(moves).unwrap(),
                        parse_captures(captures).unwrap(),
                        parse_offsets(initial).unwrap(),
                    ),
                )
                .unwrap();
        }
        catalog.set_royal('K').unwrap();
        catalog
            .set_layout(parse_layout("rk6/pppppppp/8/8/8/8/PPPPPPPP/RK6", 8, 8).unwrap())
            .unwrap();
        catalog
    }

    fn sq(name: &str) -> Square {
        let bytes = name.as_bytes();
        Square::new((bytes[0] - b'a') as i8, (bytes[1] - b'1') as i8)
    }

    #[test]
    fn turns_alternate_and_owners_are_enforced() {
        let mut session = Session::new(catalog());
        assert_eq!(session.turn(), Side::White);

        assert!(matches!(
            session.play(sq("e7"), sq("e5")),
            Err(GameError::WrongOwner { .. })
        ));

        session.play(sq("e2"), sq("e4")).unwrap();
        assert_eq!(session.turn(), Side::Black);
        assert!(matches!(
            session.play(sq("d2"), sq("d4")),
            Err(GameError::WrongOwner { .. })
        ));
    }

    #[test]
    fn rejected_moves_are_not_recorded() {
        let mut session = Session::new(catalog());
        assert!(session.play(sq("e2"), sq("e5")).is_err());
        assert!(session.play(sq("e2"), sq("i9")).is_err());
        assert!(session.history.is_empty());
        assert_eq!(session.turn(), Side::White);
    }

    #[test]
    fn select_lists_hints_or_reports_a_stuck_piece() {
        let session = Session::new(catalog());

        let hints = session.select(sq("a2")).unwrap();
        assert_eq!(hints.moves, vec![sq("a3"), sq("a4")]);
        assert!(hints.captures.is_empty());

        assert!(matches!(
            session.select(sq("a1")),
            Err(GameError::NoCandidates { .. })
        ));
        assert!(matches!(
            session.select(sq("d4")),
            Err(GameError::EmptySquare { .. })
        ));
    }

    #[test]
    fn turn_status_is_kept_until_the_board_changes() {
        let mut session = Session::new(catalog());
        assert_eq!(session.turn_status(), None);

        assert_eq!(session.pre_turn_check().unwrap(), TurnStatus::Clear);
        assert_eq!(session.turn_status(), Some(TurnStatus::Clear));

        assert!(session.play(sq("e2"), sq("e5")).is_err());
        assert_eq!(session.turn_status(), Some(TurnStatus::Clear));

        session.play(sq("e2"), sq("e4")).unwrap();
        assert_eq!(session.turn_status(), None);
        assert_eq!(session.pre_turn_check().unwrap(), TurnStatus::Clear);

        assert!(session.undo().unwrap());
        assert_eq!(session.turn_status(), None);

        session.pre_turn_check().unwrap();
        session.reset();
        assert_eq!(session.turn_status(), None);
    }

    #[test]
    fn undo_replays_to_the_previous_position() {
        let mut session = Session::new(catalog());
        session.play(sq("e2"), sq("e4")).unwrap();
        let after_one = session.state.position.clone();

        session.play(sq("d7"), sq("d5")).unwrap();
        assert!(session.undo().unwrap());

        assert_eq!(session.state.position, after_one);
        assert_eq!(session.history.len(), 1);
        assert_eq!(session.turn(), Side::Black);

        assert!(session.undo().unwrap());
        assert!(!session.undo().unwrap());
        assert!(session.state.position.never_moved_at(sq("e2")));
    }

    #[test]
    fn replay_is_deterministic() {
        let moves = [
            RecordedMove::new(sq("e2"), sq("e4")),
            RecordedMove::new(sq("d7"), sq("d5")),
            RecordedMove::new(sq("e4"), sq("d5")),
        ];

        let mut first = Session::new(catalog());
        first.replay(&moves).unwrap();
        let mut second = Session::new(catalog());
        second.replay(&moves).unwrap();

        assert_eq!(first.state.position, second.state.position);
        assert_eq!(first.history, second.history);
    }

    #[test]
    fn failed_replay_leaves_a_fresh_game() {
        let mut session = Session::new(catalog());
        session.play(sq("a2"), sq("a3")).unwrap();

        let moves = [
            RecordedMove::new(sq("e2"), sq("e4")),
            RecordedMove::new(sq("e4"), sq("e5")),
        ];
        assert!(session.replay(&moves).is_err());
        assert!(session.history.is_empty());
        assert_eq!(session.state.position, Session::new(catalog()).state.position);
    }
}
