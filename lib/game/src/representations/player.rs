//! # player.rs
//!
//! Defines the two sides and the people playing them.
//!
//! This file contains the `Color` enum with the per-side facts the rule
//! modules consult, namely the direction of play, the rank pawns start on,
//! and the rank that decides the game, together with the `Player` struct
//! pairing a display name with an assigned color.
//!
//! # Author
//! Alden Luthfi
//!
//! # Date
//! 15/02/2026

use std::fmt;

use crate::representations::board::CellState;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn opponent(&self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Rank step of a forward move for this side.
    pub fn forward(&self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// Rank this side's pawns stand on before their first move.
    pub fn start_rank(&self) -> u8 {
        match self {
            Color::White => 1,
            Color::Black => 6,
        }
    }

    /// Rank that wins the game when one of this side's pawns reaches it.
    pub fn goal_rank(&self) -> u8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    pub fn cell(&self) -> CellState {
        match self {
            Color::White => CellState::White,
            Color::Black => CellState::Black,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "white"),
            Color::Black => write!(f, "black"),
        }
    }
}

pub struct Player {
    pub name: String,
    pub color: Color,
}

impl Player {
    pub fn new(name: &str, color: Color) -> Player {
        Player {
            name: name.to_string(),
            color,
        }
    }
}
