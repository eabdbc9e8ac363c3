//! # board.rs
//!
//! Defines a board structure and operations for bitboard manipulation.
//!
//! This file contains the implementation of a `Board` struct, which
//! represents the position using one 64-bit bitboard per color, indexed
//! rank-major from White's side. Cells are never touched directly from the
//! outside; mutation goes through `move_pawn` for relocations and through
//! `place`/`clear` for setup and pawn removal, while `cell_at`,
//! `count_of_color` and `occupies_rank` answer the read-only queries the
//! rule modules need.
//!
//! # Author
//! Alden Luthfi
//!
//! # Date
//! 15/02/2026

use crate::constants::{FILES, RANKS};
use crate::representations::coordinate::Coordinate;
use crate::representations::player::Color;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellState {
    White,
    Black,
    Empty,
}

impl CellState {
    pub fn color(&self) -> Option<Color> {
        match self {
            CellState::White => Some(Color::White),
            CellState::Black => Some(Color::Black),
            CellState::Empty => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    bitboards: [u64; 2],
}

impl Board {
    pub fn empty() -> Board {
        Board { bitboards: [0; 2] }
    }

    /// The opening position: one full rank of pawns per side, each on the
    /// rank in front of its back rank.
    pub fn opening() -> Board {
        let mut board = Board::empty();

        for file in 0..FILES {
            let white = Coordinate::new(file, Color::White.start_rank());
            let black = Coordinate::new(file, Color::Black.start_rank());

            board.place(white, Color::White);
            board.place(black, Color::Black);
        }

        board
    }

    pub fn place(&mut self, square: Coordinate, color: Color) {
        self.bitboards[color.index()] |= 1u64 << square.index();
    }

    pub fn clear(&mut self, square: Coordinate) {
        for bitboard in &mut self.bitboards {
            *bitboard &= !(1u64 << square.index());                             /* clears either color                */
        }
    }

    pub fn cell_at(&self, square: Coordinate) -> CellState {
        let index = square.index();

        if (self.bitboards[Color::White.index()] >> index) & 1 == 1 {
            CellState::White
        } else if (self.bitboards[Color::Black.index()] >> index) & 1 == 1 {
            CellState::Black
        } else {
            CellState::Empty
        }
    }

    /// Copies whatever stands on `start` onto `end` and empties `start`.
    /// Anything standing on `end` beforehand is gone afterwards. Callers
    /// are expected to have vetted the move first.
    pub fn move_pawn(&mut self, start: Coordinate, end: Coordinate) {
        let state = self.cell_at(start);

        self.clear(end);
        self.clear(start);

        if let Some(color) = state.color() {
            self.place(end, color);
        }
    }

    pub fn count_of_color(&self, color: Color) -> u32 {
        self.bitboards[color.index()].count_ones()
    }

    pub fn occupies_rank(&self, color: Color, rank: u8) -> bool {
        assert!(rank < RANKS, "Rank {rank} out of bounds.");

        let rank_mask = 0xFFu64 << (rank as u32 * FILES as u32);
        self.bitboards[color.index()] & rank_mask != 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{D, E, PAWNS_PER_SIDE};

    #[test]
    fn test_opening_has_a_full_rank_per_side() {
        let board = Board::opening();

        assert_eq!(board.count_of_color(Color::White), PAWNS_PER_SIDE);
        assert_eq!(board.count_of_color(Color::Black), PAWNS_PER_SIDE);
        assert!(board.occupies_rank(Color::White, 1));
        assert!(board.occupies_rank(Color::Black, 6));
        assert!(!board.occupies_rank(Color::White, 0));
        assert!(!board.occupies_rank(Color::Black, 7));
    }

    #[test]
    fn test_cell_at_reads_the_opening() {
        let board = Board::opening();

        assert_eq!(board.cell_at(Coordinate::new(E, 1)), CellState::White);
        assert_eq!(board.cell_at(Coordinate::new(E, 6)), CellState::Black);
        assert_eq!(board.cell_at(Coordinate::new(E, 3)), CellState::Empty);
    }

    #[test]
    fn test_move_pawn_relocates() {
        let mut board = Board::opening();
        let start = Coordinate::new(E, 1);
        let end = Coordinate::new(E, 3);

        board.move_pawn(start, end);

        assert_eq!(board.cell_at(start), CellState::Empty);
        assert_eq!(board.cell_at(end), CellState::White);
        assert_eq!(board.count_of_color(Color::White), PAWNS_PER_SIDE);
    }

    #[test]
    fn test_move_pawn_onto_an_occupied_square_replaces() {
        let mut board = Board::empty();
        let start = Coordinate::new(E, 3);
        let end = Coordinate::new(D, 4);

        board.place(start, Color::White);
        board.place(end, Color::Black);
        board.move_pawn(start, end);

        assert_eq!(board.cell_at(end), CellState::White);
        assert_eq!(board.cell_at(start), CellState::Empty);
        assert_eq!(board.count_of_color(Color::Black), 0);
    }

    #[test]
    fn test_clear_empties_a_square() {
        let mut board = Board::opening();
        let square = Coordinate::new(D, 6);

        board.clear(square);

        assert_eq!(board.cell_at(square), CellState::Empty);
        assert_eq!(board.count_of_color(Color::Black), PAWNS_PER_SIDE - 1);
    }
}
