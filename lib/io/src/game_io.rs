//! # game_io.rs
//!
//! Implements rule file parsing.
//!
//! A rule file describes the board, every piece and the starting layout. It
//! is read line by line; blank lines and lines starting with `//` are
//! skipped, and every error carries the 1-based line it was found on.
//!
//! # Author
//! Alden Luthfi
//!
//! # Date
//! 25/01/2026

use std::{fs, path::Path};

use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

use game::{
    constants::ROYAL_MARKER,
    errors::{GameError, GameResult},
    moves::offset_parse::{parse_captures, parse_layout, parse_offsets},
    representations::rules::{PieceRule, RuleCatalog},
};

pub const STANDARD_RULES: &str = include_str!("../../../configs/standard.rules");
pub const BEROLINA_RULES: &str = include_str!("../../../configs/berolina.rules");

lazy_static! {
    static ref DIMENSIONS_PATTERN: Regex = Regex::new(
        r"^\s*(\d+)\s*,\s*(\d+)\s*,\s*(\d+)\s*$"
    ).unwrap();
    static ref PIECE_PATTERN: Regex = Regex::new(
        r"^\s*(#?)\s*([A-Za-z][A-Za-z ]*?)\s*,\s*([A-Za-z])\s*,([^,]*),([^,]*),([^,]*)$"
    ).unwrap();
}

/// Parses the contents of a rule file into a catalog.
///
/// The file must have the following format:
/// - First line: the title of the ruleset
/// - Second line: `files,ranks,piece_types`
/// - Next `piece_types` lines: piece definitions in format
///   `name,symbol,moves,captures,initial`
/// - Prefix the piece name with `#` to mark it as royal
/// - `captures` may be `=` to reuse the move offsets, and `initial` may be
///   `-` for a piece without a first move
/// - Last line: the starting layout, ranks from the top separated by `/`
///
/// # Examples
///
/// ```plaintext
/// Rook Endgame
/// 8,8,2
/// #King,K,1:0 1:1 0:1 -1:1 -1:0 -1:-1 0:-1 1:-1,=,-
/// Rook,R,1:0:* -1:0:* 0:1:* 0:-1:*,=,-
/// 4k3/8/8/8/8/8/8/R3K3
/// ```
pub fn parse_config(contents: &str) -> GameResult<RuleCatalog> {
    let mut lines = contents
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with("//"));

    let mut next_line = |what: &str| {
        lines.next().ok_or_else(|| GameError::config(format!("missing {what}")))
    };

    let (_, title) = next_line("title")?;

    let (line_no, line) = next_line("board dimensions")?;
    let cap = DIMENSIONS_PATTERN.captures(line).ok_or_else(|| {
        GameError::config("expected 'files,ranks,piece_types'").at_line(line_no)
    })?;

    let number = |i: usize| -> GameResult<u8> {
        cap[i].parse::<u8>().map_err(|_| {
            GameError::config(format!("'{}' is out of range", &cap[i])).at_line(line_no)
        })
    };
    let files = number(1)?;
    let ranks = number(2)?;
    let pieces_num = number(3)?;

    let mut catalog = RuleCatalog::new(title, files, ranks)
        .map_err(|err| err.at_line(line_no))?;

    for _ in 0..pieces_num {
        let (line_no, line) = next_line("piece definition")?;
        parse_piece(&mut catalog, line).map_err(|err| err.at_line(line_no))?;
    }

    let (line_no, placement) = next_line("starting layout")?;
    parse_layout(placement, files, ranks)
        .and_then(|layout| catalog.set_layout(layout))
        .map_err(|err| err.at_line(line_no))?;

    if let Some((line_no, _)) = lines.next() {
        return Err(GameError::config("unexpected line after the layout").at_line(line_no));
    }

    debug!(
        "loaded '{}': {}x{}, pieces {:?}",
        catalog.title, catalog.files, catalog.ranks, catalog.identities()
    );
    Ok(catalog)
}

fn parse_piece(catalog: &mut RuleCatalog, line: &str) -> GameResult<()> {
    let cap = PIECE_PATTERN.captures(line).ok_or_else(|| {
        GameError::config("expected 'name,symbol,moves,captures,initial'")
    })?;

    let is_royal = cap[1].starts_with(ROYAL_MARKER);
    let name = &cap[2];
    let identity = cap[3].chars().next().unwrap_or_default();

    let rule = PieceRule::new(
        name,
        parse_offsets(&cap[4])?,
        parse_captures(&cap[5])?,
        parse_offsets(&cap[6])?,
    );

    catalog.add_rule(identity, rule)?;
    if is_royal {
        catalog.set_royal(identity)?;
    }

    Ok(())
}

/// Reads and parses a rule file.
pub fn parse_config_file(path: impl AsRef<Path>) -> GameResult<RuleCatalog> {
    let contents = fs::read_to_string(path.as_ref())?;
    debug!("read rules from {}", path.as_ref().display());
    parse_config(&contents)
}
