//! # moves.rs
//!
//! Defines the move command and the shapes a move can take.
//!
//! This file contains the `Move` struct, a start and end square pair built
//! by the parser from validated text, and the `MoveType` enum naming the
//! shape a vetted move turned out to have. Rendering a move gives back the
//! four-character token it was parsed from, lowercased.
//!
//! # Author
//! Alden Luthfi
//!
//! # Date
//! 21/02/2026

use std::fmt;

use crate::representations::coordinate::Coordinate;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Move {
    start: Coordinate,
    end: Coordinate,
}

impl Move {
    pub fn new(start: Coordinate, end: Coordinate) -> Move {
        Move { start, end }
    }

    pub fn start(&self) -> Coordinate {
        self.start
    }

    pub fn end(&self) -> Coordinate {
        self.end
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.start, self.end)
    }
}

/// The shape of an accepted move.
///
/// - `Advance`: one square straight ahead onto an empty square.
/// - `DoubleAdvance`: two squares straight ahead from the starting rank.
/// - `Capture`: one square diagonally ahead onto an opposing pawn.
/// - `EnPassant`: one square diagonally ahead onto the square an opposing
///   pawn just passed over.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveType {
    Advance,
    DoubleAdvance,
    Capture,
    EnPassant,
}
