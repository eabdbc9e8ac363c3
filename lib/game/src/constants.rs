//! # constants.rs
//!
//! Defines game-wide constants and configuration values.
//!
//! This file contains constant definitions for board dimensions, file
//! labels, and the opening pawn count. These constants are used throughout
//! the codebase to ensure consistency between the rule modules and their
//! tests.
//!
//! # Author
//! Alden Luthfi
//!
//! # Date
//! 14/02/2026

pub const RANKS: u8 = 8;
pub const FILES: u8 = 8;

pub const PAWNS_PER_SIDE: u32 = 8;

pub const A: u8 = 0;
pub const B: u8 = 1;
pub const C: u8 = 2;
pub const D: u8 = 3;
pub const E: u8 = 4;
pub const F: u8 = 5;
pub const G: u8 = 6;
pub const H: u8 = 7;
