//! # move_check.rs
//!
//! Implements move vetting against the board state.
//!
//! This file contains the rule engine deciding whether a parsed move is
//! playable for the side to move. Vetting is pure: the board is only read,
//! and the outcome is either the shape the move turned out to have or the
//! first rule it broke. The violation messages are written for the person
//! at the prompt and are printed verbatim by the driver.
//!
//! # Author
//! Alden Luthfi
//!
//! # Date
//! 07/03/2026

use thiserror::Error;

use crate::representations::{
    board::{
        Board,
        CellState
    },
    coordinate::Coordinate,
    moves::{
        Move,
        MoveType
    },
    player::Color,
    state::EnPassant
};

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum RuleViolation {
    #[error("no {0} pawn at {1}")]
    NoPawnAtSource(Color, Coordinate),
    #[error("a pawn must advance toward the opposing side")]
    WrongDirectionOrNoAdvance,
    #[error("a pawn cannot advance more than two squares")]
    StepTooLarge,
    #[error("a two-square advance is only allowed from the starting rank")]
    IllegalTwoStepOrigin,
    #[error("the path is blocked at {0}")]
    PathBlocked(Coordinate),
    #[error("pawns move straight ahead or capture one square diagonally")]
    IllegalMoveShape,
    #[error("nothing to capture at {0}")]
    NoCaptureTarget(Coordinate),
    #[error("a pawn can only capture toward the opposing side")]
    WrongCaptureDirection,
}

/*----------------------------------------------------------------------------*\
                                 MOVE VETTING
\*----------------------------------------------------------------------------*/

/// Vets `mv` for `mover` on `board` and reports the shape it would have.
/// `marker` is the en-passant opportunity left by the previous move, if
/// any.
///
/// Checks run in a fixed order and the first failure wins:
/// - the source square must hold one of the mover's pawns,
/// - the geometry must be a straight advance or a one-square diagonal,
/// - a straight advance must go forward, span at most two squares, leave
///   the starting rank if it spans two, and find every crossed square
///   including the destination empty,
/// - a diagonal must go forward and land either on the marked en-passant
///   square or on an opposing pawn.
pub fn validate_move(
    board: &Board,
    mover: Color,
    marker: Option<&EnPassant>,
    mv: &Move,
) -> Result<MoveType, RuleViolation> {
    if board.cell_at(mv.start()) != mover.cell() {
        return Err(RuleViolation::NoPawnAtSource(mover, mv.start()));
    }

    let file_steps = mv.end().file() as i8 - mv.start().file() as i8;
    let rank_steps = mv.end().rank() as i8 - mv.start().rank() as i8;

    match (file_steps, rank_steps) {
        (0, _) => check_advance(board, mover, mv, rank_steps),
        (-1 | 1, -1 | 1) => check_capture(board, mover, marker, mv, rank_steps),
        _ => Err(RuleViolation::IllegalMoveShape),
    }
}

fn check_advance(
    board: &Board,
    mover: Color,
    mv: &Move,
    rank_steps: i8,
) -> Result<MoveType, RuleViolation> {
    let length = rank_steps * mover.forward();                                  /* positive when going forward        */

    if length <= 0 {
        return Err(RuleViolation::WrongDirectionOrNoAdvance);
    }

    if length > 2 {
        return Err(RuleViolation::StepTooLarge);
    }

    if length == 2 && mv.start().rank() != mover.start_rank() {
        return Err(RuleViolation::IllegalTwoStepOrigin);
    }

    for step in 1..=length {
        let square = Coordinate::new(
            mv.start().file(),
            (mv.start().rank() as i8 + step * mover.forward()) as u8,
        );

        if board.cell_at(square) != CellState::Empty {
            return Err(RuleViolation::PathBlocked(square));                     /* destination square included        */
        }
    }

    Ok(if length == 2 {
        MoveType::DoubleAdvance
    } else {
        MoveType::Advance
    })
}

fn check_capture(
    board: &Board,
    mover: Color,
    marker: Option<&EnPassant>,
    mv: &Move,
    rank_steps: i8,
) -> Result<MoveType, RuleViolation> {
    if rank_steps != mover.forward() {
        return Err(RuleViolation::WrongCaptureDirection);
    }

    if let Some(marker) = marker {
        if marker.capture_square == mv.end() && marker.color != mover {
            return Ok(MoveType::EnPassant);
        }
    }

    if board.cell_at(mv.end()) == mover.opponent().cell() {
        return Ok(MoveType::Capture);
    }

    Err(RuleViolation::NoCaptureTarget(mv.end()))
}
