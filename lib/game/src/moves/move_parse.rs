//! # move_parse.rs
//!
//! Implements parsing of square and move tokens.
//!
//! This file contains the text codec turning algebraic tokens into
//! `Coordinate` and `Move` values. A square token is a file letter in
//! either case followed by a rank digit, a move token is two square tokens
//! back to back with nothing in between. Anything else is rejected with a
//! typed error; the parser never guesses.
//!
//! # Author
//! Alden Luthfi
//!
//! # Date
//! 22/02/2026

use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

use crate::representations::{
    coordinate::Coordinate,
    moves::Move
};

lazy_static!{
    pub static ref SQUARE_PATTERN: Regex = Regex::new(
        r"^([a-hA-H])([1-8])$"
    ).unwrap();
    pub static ref MOVE_PATTERN: Regex = Regex::new(
        r"^([a-hA-H][1-8])([a-hA-H][1-8])$"
    ).unwrap();
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("'{0}' is not a valid square")]
    CoordinateFormat(String),
    #[error("'{0}' is not a valid move")]
    MoveFormat(String),
}

/// Parses a two-character square token such as `e2` into a `Coordinate`.
/// The file letter is accepted in either case.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(parse_square("e2"), Ok(Coordinate::new(E, 1)));
/// assert_eq!(parse_square("E2"), Ok(Coordinate::new(E, 1)));
/// assert!(parse_square("j9").is_err());
/// ```
pub fn parse_square(token: &str) -> Result<Coordinate, ParseError> {
    let captures = SQUARE_PATTERN
        .captures(token)
        .ok_or_else(|| ParseError::CoordinateFormat(token.to_string()))?;

    let file = captures[1].as_bytes()[0].to_ascii_lowercase() - b'a';
    let rank = captures[2].as_bytes()[0] - b'1';

    Ok(Coordinate::new(file, rank))
}

/// Parses a four-character move token such as `e2e4` into a `Move`. Both
/// halves must parse as squares; a failure in either half rejects the
/// whole token.
///
/// # Examples
///
/// ```ignore
/// assert!(parse_move("e2e4").is_ok());
/// assert!(parse_move("e2 e4").is_err());
/// ```
pub fn parse_move(token: &str) -> Result<Move, ParseError> {
    let captures = MOVE_PATTERN
        .captures(token)
        .ok_or_else(|| ParseError::MoveFormat(token.to_string()))?;

    let start = parse_square(&captures[1])
        .map_err(|_| ParseError::MoveFormat(token.to_string()))?;
    let end = parse_square(&captures[2])
        .map_err(|_| ParseError::MoveFormat(token.to_string()))?;

    Ok(Move::new(start, end))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{E, FILES, RANKS};

    #[test]
    fn test_every_square_survives_a_round_trip() {
        for file in 0..FILES {
            for rank in 0..RANKS {
                let square = Coordinate::new(file, rank);
                let parsed = parse_square(&square.to_string());

                assert_eq!(parsed, Ok(square));
            }
        }
    }

    #[test]
    fn test_square_accepts_either_case() {
        assert_eq!(parse_square("E2"), Ok(Coordinate::new(E, 1)));
        assert_eq!(parse_square("e2"), Ok(Coordinate::new(E, 1)));
    }

    #[test]
    fn test_square_rejects_malformed_tokens() {
        for token in ["", "e", "2", "e0", "e9", "i5", "2e", "e22", " e2"] {
            assert_eq!(
                parse_square(token),
                Err(ParseError::CoordinateFormat(token.to_string()))
            );
        }
    }

    #[test]
    fn test_move_is_two_squares_back_to_back() {
        let mv = parse_move("e2e4").unwrap();

        assert_eq!(mv.start(), Coordinate::new(E, 1));
        assert_eq!(mv.end(), Coordinate::new(E, 3));
    }

    #[test]
    fn test_move_normalizes_case_on_render() {
        let mv = parse_move("E2E4").unwrap();

        assert_eq!(mv.to_string(), "e2e4");
    }

    #[test]
    fn test_move_rejects_malformed_tokens() {
        for token in ["", "e2", "e2e", "e2e44", "e2 e4", "e9e4", "exit"] {
            assert_eq!(
                parse_move(token),
                Err(ParseError::MoveFormat(token.to_string()))
            );
        }
    }
}
