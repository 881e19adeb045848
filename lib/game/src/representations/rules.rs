//! # rules.rs
//!
//! Defines the rule catalog: how every piece identity moves.
//!
//! A piece rule is a set of offset descriptors per move class. "move" offsets
//! describe quiet moves, "capture" offsets describe captures and may simply
//! alias the move offsets, and "initial" offsets are only available while the
//! source square has never been touched by a move. The catalog also names the
//! royal identity, the board dimensions and the starting layout, so that a
//! ruleset is entirely a data concern.
//!
//! # Author
//! Alden Luthfi
//!
//! # Date
//! 25/01/2026

use std::collections::HashMap;

use crate::{
    constants::*,
    errors::{GameError, GameResult},
    representations::piece::{Piece, Side},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Range {
    Steps(u8),
    Unlimited,
}

/// A side-relative vector: `forward` is measured away from the owner's home
/// rank, `lateral` along the files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OffsetDescriptor {
    pub forward: i8,
    pub lateral: i8,
    pub range: Range,
}

impl OffsetDescriptor {
    pub const fn step(forward: i8, lateral: i8) -> Self {
        OffsetDescriptor { forward, lateral, range: Range::Steps(1) }
    }

    pub const fn leap(forward: i8, lateral: i8, steps: u8) -> Self {
        OffsetDescriptor { forward, lateral, range: Range::Steps(steps) }
    }

    pub const fn ray(forward: i8, lateral: i8) -> Self {
        OffsetDescriptor { forward, lateral, range: Range::Unlimited }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveClass {
    Move,
    Capture,
    Initial,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CaptureRule {
    SameAsMove,
    Offsets(Vec<OffsetDescriptor>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct PieceRule {
    pub name: String,
    pub moves: Vec<OffsetDescriptor>,
    pub captures: CaptureRule,
    pub initial: Vec<OffsetDescriptor>,
}

impl PieceRule {
    pub fn new(
        name: &str,
        moves: Vec<OffsetDescriptor>,
        captures: CaptureRule,
        initial: Vec<OffsetDescriptor>,
    ) -> Self {
        PieceRule {
            name: name.to_string(),
            moves,
            captures,
            initial,
        }
    }

    pub fn offsets(&self, class: MoveClass) -> &[OffsetDescriptor] {
        match class {
            MoveClass::Move => &self.moves,
            MoveClass::Capture => match &self.captures {
                CaptureRule::SameAsMove => &self.moves,
                CaptureRule::Offsets(offsets) => offsets,
            },
            MoveClass::Initial => &self.initial,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RuleCatalog {
    pub title: String,
    pub files: u8,
    pub ranks: u8,

    rules: HashMap<char, PieceRule>,
    royal: Option<char>,
    layout: Vec<Option<Piece>>,
}

impl RuleCatalog {
    pub fn new(title: &str, files: u8, ranks: u8) -> GameResult<Self> {
        if files == 0 || files > MAX_FILES || ranks == 0 || ranks > MAX_RANKS {
            return Err(GameError::config(format!(
                "board of {files}x{ranks} is outside 1x1..{MAX_FILES}x{MAX_RANKS}"
            )));
        }

        Ok(RuleCatalog {
            title: title.to_string(),
            files,
            ranks,
            rules: HashMap::new(),
            royal: None,
            layout: vec![None; (files as usize) * (ranks as usize)],
        })
    }

    /// Registers the rule of `identity`. Identities are case-insensitive.
    pub fn add_rule(&mut self, identity: char, rule: PieceRule) -> GameResult<()> {
        let identity = identity.to_ascii_uppercase();
        if !identity.is_ascii_alphabetic() {
            return Err(GameError::config(format!(
                "piece symbol '{identity}' is not a letter"
            )));
        }
        if self.rules.insert(identity, rule).is_some() {
            return Err(GameError::config(format!(
                "piece '{identity}' is defined twice"
            )));
        }

        Ok(())
    }

    pub fn set_royal(&mut self, identity: char) -> GameResult<()> {
        let identity = identity.to_ascii_uppercase();
        if !self.contains(identity) {
            return Err(GameError::UnknownPiece { identity });
        }
        if let Some(existing) = self.royal.filter(|&r| r != identity) {
            return Err(GameError::config(format!(
                "royal piece is already '{existing}', cannot also be '{identity}'"
            )));
        }

        self.royal = Some(identity);
        Ok(())
    }

    /// Replaces the starting layout, indexed like `Square::index`.
    pub fn set_layout(&mut self, layout: Vec<Option<Piece>>) -> GameResult<()> {
        let expected = (self.files as usize) * (self.ranks as usize);
        if layout.len() != expected {
            return Err(GameError::config(format!(
                "layout has {} squares but the board has {expected}",
                layout.len()
            )));
        }
        if let Some(piece) = layout.iter().flatten().find(
            |piece| !self.contains(piece.identity)
        ) {
            return Err(GameError::UnknownPiece { identity: piece.identity });
        }

        self.layout = layout;
        Ok(())
    }

    pub fn contains(&self, identity: char) -> bool {
        self.rules.contains_key(&identity.to_ascii_uppercase())
    }

    pub fn rule(&self, identity: char) -> GameResult<&PieceRule> {
        let identity = identity.to_ascii_uppercase();
        self.rules
            .get(&identity)
            .ok_or(GameError::UnknownPiece { identity })
    }

    pub fn offsets_for(
        &self,
        identity: char,
        class: MoveClass,
    ) -> GameResult<&[OffsetDescriptor]> {
        Ok(self.rule(identity)?.offsets(class))
    }

    /// The royal identity of `side`. Both sides share the same identity, the
    /// side only changes the case of its symbol.
    pub fn royal_identity(&self, _side: Side) -> Option<char> {
        self.royal
    }

    pub fn initial_layout(&self) -> &[Option<Piece>] {
        &self.layout
    }

    /// Name of the piece, upper-cased for White and lower-cased for Black.
    pub fn display_name(&self, piece: &Piece) -> String {
        let name = self
            .rules
            .get(&piece.identity)
            .map(|rule| rule.name.as_str())
            .unwrap_or("?");

        match piece.side {
            Side::White => name.to_uppercase(),
            Side::Black => name.to_lowercase(),
        }
    }

    pub fn identities(&self) -> Vec<char> {
        let mut identities: Vec<char> = self.rules.keys().copied().collect();
        identities.sort_unstable();
        identities
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pawn() -> PieceRule {
        PieceRule::new(
            "Pawn",
            vec![OffsetDescriptor::step(1, 0)],
            CaptureRule::Offsets(vec![
                OffsetDescriptor::step(1, 1),
                OffsetDescriptor::step(1, -1),
            ]),
            vec![OffsetDescriptor::leap(2, 0, 1)],
        )
    }

    #[test]
    fn capture_alias_resolves_to_move_offsets() {
        let rook = PieceRule::new(
            "Rook",
            vec![OffsetDescriptor::ray(1, 0), OffsetDescriptor::ray(0, 1)],
            CaptureRule::SameAsMove,
            Vec::new(),
        );

        assert_eq!(rook.offsets(MoveClass::Capture), rook.offsets(MoveClass::Move));
        assert!(rook.offsets(MoveClass::Initial).is_empty());
    }

    #[test]
    fn lookups_are_case_insensitive() {
        let mut catalog = RuleCatalog::new("test", 8, 8).unwrap();
        catalog.add_rule('p', pawn()).unwrap();

        assert!(catalog.contains('P'));
        assert_eq!(catalog.offsets_for('p', MoveClass::Capture).unwrap().len(), 2);
        assert_eq!(
            catalog.display_name(&Piece::from_symbol('p')),
            "pawn"
        );
    }

    #[test]
    fn unknown_identities_are_reported() {
        let catalog = RuleCatalog::new("test", 8, 8).unwrap();

        assert!(matches!(
            catalog.offsets_for('Z', MoveClass::Move),
            Err(GameError::UnknownPiece { identity: 'Z' })
        ));
    }

    #[test]
    fn layout_must_match_board_and_catalog() {
        let mut catalog = RuleCatalog::new("test", 2, 2).unwrap();
        catalog.add_rule('P', pawn()).unwrap();

        assert!(catalog.set_layout(vec![None; 3]).is_err());
        assert!(catalog
            .set_layout(vec![Some(Piece::from_symbol('q')), None, None, None])
            .is_err());
        assert!(catalog
            .set_layout(vec![Some(Piece::from_symbol('P')), None, None, None])
            .is_ok());
    }

    #[test]
    fn dimensions_are_bounded() {
        assert!(RuleCatalog::new("big", 17, 8).is_err());
        assert!(RuleCatalog::new("empty", 0, 8).is_err());
        assert!(RuleCatalog::new("wide", 16, 3).is_ok());
    }

    #[test]
    fn royal_must_be_unique_and_known() {
        let mut catalog = RuleCatalog::new("test", 8, 8).unwrap();
        catalog.add_rule('P', pawn()).unwrap();

        assert!(catalog.set_royal('K').is_err());
        catalog.set_royal('p').unwrap();
        assert_eq!(catalog.royal_identity(Side::Black), Some('P'));
    }
}
