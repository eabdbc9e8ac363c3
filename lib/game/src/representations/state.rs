//! # state.rs
//!
//! Defines game state representation and management.
//!
//! This file contains the session controller: the board, the two players,
//! whose turn it is, the standing en-passant opportunity, and the outcome
//! once the game is decided. `play` is the only way a move reaches the
//! board. A rejected move changes nothing, an accepted one is applied,
//! refreshes the en-passant marker, and runs the end-of-game scans before
//! the turn passes.
//!
//! # Author
//! Alden Luthfi
//!
//! # Date
//! 14/03/2026

use std::fmt;

use crate::moves::{
    end_check::{
        is_stalemate,
        winner
    },
    move_check::{
        validate_move,
        RuleViolation
    },
};
use crate::representations::{
    board::Board,
    coordinate::Coordinate,
    moves::{
        Move,
        MoveType
    },
    player::{
        Color,
        Player
    },
};

/// A one-turn capture opportunity left behind by a double advance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EnPassant {
    pub capture_square: Coordinate,
    pub pawn_square: Coordinate,
    pub color: Color,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Win(Color),
    Stalemate,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Win(Color::White) => write!(f, "White Wins!"),
            Outcome::Win(Color::Black) => write!(f, "Black Wins!"),
            Outcome::Stalemate => write!(f, "Stalemate!"),
        }
    }
}

/*----------------------------------------------------------------------------*\
                               SESSION CONTROLLER
\*----------------------------------------------------------------------------*/

pub struct Session {
    board: Board,
    players: [Player; 2],
    current_move: usize,
    en_passant: Option<EnPassant>,
    outcome: Option<Outcome>,
}

impl Session {
    /// Starts a session from the opening position. The first named player
    /// takes White and moves first.
    pub fn new(white_name: &str, black_name: &str) -> Session {
        Session::from_position(Board::opening(), white_name, black_name)
    }

    pub fn from_position(
        board: Board,
        white_name: &str,
        black_name: &str,
    ) -> Session {
        Session {
            board,
            players: [
                Player::new(white_name, Color::White),
                Player::new(black_name, Color::Black),
            ],
            current_move: 0,
            en_passant: None,
            outcome: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> &Player {
        &self.players[self.current_move]
    }

    pub fn en_passant(&self) -> Option<&EnPassant> {
        self.en_passant.as_ref()
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Plays one move for the side to move. On rejection the session is
    /// untouched and the same side stays on turn. On acceptance the move
    /// is applied and the shape it had is reported; `outcome` tells
    /// whether the game ended with it.
    pub fn play(&mut self, mv: &Move) -> Result<MoveType, RuleViolation> {
        assert!(self.outcome.is_none(), "Game is already over.");

        let mover = self.current_player().color;
        let shape =
            validate_move(&self.board, mover, self.en_passant.as_ref(), mv)?;

        self.board.move_pawn(mv.start(), mv.end());

        if let (MoveType::EnPassant, Some(marker)) = (shape, self.en_passant) {
            self.board.clear(marker.pawn_square);                               /* the bypassed pawn goes too         */
        }

        self.en_passant = match shape {
            MoveType::DoubleAdvance => Some(EnPassant {
                capture_square: Coordinate::new(
                    mv.start().file(),
                    (mv.start().rank() as i8 + mover.forward()) as u8,
                ),
                pawn_square: mv.end(),
                color: mover,
            }),
            _ => None,
        };

        self.outcome = if let Some(color) = winner(&self.board) {
            Some(Outcome::Win(color))
        } else if is_stalemate(&self.board) {
            Some(Outcome::Stalemate)
        } else {
            None
        };

        if self.outcome.is_none() {
            self.current_move = 1 - self.current_move;
        }

        Ok(shape)
    }
}
