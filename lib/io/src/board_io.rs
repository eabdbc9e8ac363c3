//! # board_io.rs
//!
//! Implements board formatting and visualization functions.
//!
//! This file contains functionality for converting the position into the
//! ASCII frame shown between turns. Ranks are printed from Black's side
//! down to White's with their labels on the left, files are labelled
//! below the frame, and each cell shows `W`, `B` or a blank.
//!
//! # Author
//! Alden Luthfi
//!
//! # Date
//! 15/03/2026

use game::constants::{FILES, RANKS};
use game::representations::{
    board::{
        Board,
        CellState
    },
    coordinate::Coordinate
};

pub fn format_board(board: &Board) -> String {
    let separator = format!("  +{}\n", "---+".repeat(FILES as usize));

    let mut result = String::new();

    for rank in (0..RANKS).rev() {
        result.push_str(&separator);
        result.push_str(&format!("{} |", rank + 1));

        for file in 0..FILES {
            let glyph = match board.cell_at(Coordinate::new(file, rank)) {
                CellState::White => 'W',
                CellState::Black => 'B',
                CellState::Empty => ' ',
            };
            result.push_str(&format!(" {} |", glyph));
        }

        result.push('\n');
    }

    result.push_str(&separator);

    result.push(' ');
    for file in 0..FILES {
        result.push_str(&format!("   {}", (b'a' + file) as char));              /* file labels under the frame        */
    }
    result.push('\n');

    result
}
