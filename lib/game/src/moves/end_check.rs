//! # end_check.rs
//!
//! Implements detection of decided and dead positions.
//!
//! This file contains the scans run after every applied move. A side wins
//! by putting a pawn on the opposing back rank or by leaving the opponent
//! with no pawns at all, White's conditions being examined first. A
//! position with no winner is dead when either side has nothing that even
//! looks playable: no pawn with an empty square ahead and no pawn with an
//! opposing pawn on a forward diagonal. The scan is local and deliberately
//! ignores en-passant opportunities.
//!
//! # Author
//! Alden Luthfi
//!
//! # Date
//! 08/03/2026

use crate::constants::{FILES, RANKS};
use crate::representations::{
    board::{
        Board,
        CellState
    },
    coordinate::Coordinate,
    player::Color
};

/// Reports the side that has won on `board`, if any.
pub fn winner(board: &Board) -> Option<Color> {
    if board.occupies_rank(Color::White, Color::White.goal_rank())
        || board.count_of_color(Color::Black) == 0
    {
        return Some(Color::White);
    }

    if board.occupies_rank(Color::Black, Color::Black.goal_rank())
        || board.count_of_color(Color::White) == 0
    {
        return Some(Color::Black);
    }

    None
}

/// Reports whether `board` is dead: true when either side is out of
/// playable-looking moves. Only meaningful on boards without a winner.
pub fn is_stalemate(board: &Board) -> bool {
    !has_pawn_moves(board, Color::White) || !has_pawn_moves(board, Color::Black)
}

fn has_pawn_moves(board: &Board, color: Color) -> bool {
    for rank in 0..RANKS {
        for file in 0..FILES {
            let square = Coordinate::new(file, rank);

            if board.cell_at(square) != color.cell() {
                continue;
            }

            let ahead = square.offset(0, color.forward());
            if ahead.is_some_and(|sq| board.cell_at(sq) == CellState::Empty) {
                return true;
            }

            for side in [-1, 1] {
                let diagonal = square.offset(side, color.forward());
                let target = color.opponent().cell();

                if diagonal.is_some_and(|sq| board.cell_at(sq) == target) {
                    return true;
                }
            }
        }
    }

    false
}
