//! # coordinate.rs
//!
//! Defines the square addressing used by every other module.
//!
//! This file contains the implementation of a `Coordinate` struct, an
//! immutable (file, rank) pair with both components kept inside the board
//! bounds. It provides accessors, the flat bitboard index of a square,
//! neighbor arithmetic that reports stepping off the board, and the
//! algebraic rendering used when squares appear in messages.
//!
//! # Author
//! Alden Luthfi
//!
//! # Date
//! 14/02/2026

use std::fmt;

use crate::constants::{FILES, RANKS};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Coordinate {
    file: u8,
    rank: u8,
}

impl Coordinate {
    pub fn new(file: u8, rank: u8) -> Coordinate {
        assert!(file < FILES, "File {file} out of bounds.");
        assert!(rank < RANKS, "Rank {rank} out of bounds.");

        Coordinate { file, rank }
    }

    pub fn file(&self) -> u8 {
        self.file
    }

    pub fn rank(&self) -> u8 {
        self.rank
    }

    pub fn index(&self) -> u32 {
        (self.rank as u32) * (FILES as u32) + (self.file as u32)
    }

    /// Returns the square `file_steps` files and `rank_steps` ranks away,
    /// or `None` when that square falls off the board.
    pub fn offset(&self, file_steps: i8, rank_steps: i8) -> Option<Coordinate> {
        let file = self.file as i8 + file_steps;
        let rank = self.rank as i8 + rank_steps;

        if (0..FILES as i8).contains(&file)
            && (0..RANKS as i8).contains(&rank)
        {
            Some(Coordinate::new(file as u8, rank as u8))
        } else {
            None
        }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'a' + self.file) as char, self.rank + 1)
    }
}
