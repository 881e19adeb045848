//! # constants.rs
//!
//! Defines game-wide constants and configuration values.
//!
//! This file contains the board size limits and the notation constants
//! shared by the rule loader and the board formatting.
//!
//! # Author
//! Alden Luthfi
//!
//! # Date
//! 25/01/2026

pub const MAX_FILES: u8 = 16;
pub const MAX_RANKS: u8 = 16;

pub const FIRST_FILE: u8 = b'a';
pub const EMPTY_SYMBOL: char = '.';

pub const ROYAL_MARKER: char = '#';
pub const CAPTURE_ALIAS: &str = "=";
pub const NO_OFFSETS: &str = "-";
pub const UNLIMITED_RANGE: &str = "*";

pub const CAPTURE_RAY_LIMIT: usize = 1;
