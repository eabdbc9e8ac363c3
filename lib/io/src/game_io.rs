//! # game_io.rs
//!
//! Implements the prompt loop driving a full session.
//!
//! This file contains the terminal driver. It is generic over its streams
//! so a scripted session can be run against in-memory buffers; the binary
//! hands it locked stdin and stdout. The driver owns every piece of text
//! the players see: the greeting, the name prompts, the board after setup
//! and after each applied move, the turn prompts, the complaints about
//! unplayable input, the terminal line, and the farewell. Game rules stay
//! on the other side of the `Session` boundary.
//!
//! # Author
//! Alden Luthfi
//!
//! # Date
//! 21/03/2026

use std::io::{
    self,
    BufRead,
    Write
};

use game::moves::move_parse::parse_move;
use game::representations::state::Session;

use crate::board_io::format_board;

/// Drives one session from greeting to farewell. Returns early, after the
/// farewell, when a player enters `exit` or the input stream ends.
pub fn run(mut input: impl BufRead, mut output: impl Write) -> io::Result<()> {
    writeln!(output, "Pawns-Only Chess")?;

    writeln!(output, "First Player's name:")?;
    let Some(white_name) = read_line(&mut input)? else {
        return farewell(&mut output);
    };

    writeln!(output, "Second Player's name:")?;
    let Some(black_name) = read_line(&mut input)? else {
        return farewell(&mut output);
    };

    let mut session = Session::new(&white_name, &black_name);
    write!(output, "{}", format_board(session.board()))?;

    loop {
        writeln!(output, "{}'s turn:", session.current_player().name)?;
        write!(output, "> ")?;
        output.flush()?;

        let Some(line) = read_line(&mut input)? else {
            return farewell(&mut output);
        };

        if line == "exit" {
            return farewell(&mut output);
        }

        let mv = match parse_move(&line) {
            Ok(mv) => mv,
            Err(_) => {
                writeln!(output, "Invalid Input")?;
                continue;
            }
        };

        if let Err(violation) = session.play(&mv) {
            writeln!(output, "{violation}")?;
            continue;
        }

        write!(output, "{}", format_board(session.board()))?;

        if let Some(outcome) = session.outcome() {
            writeln!(output, "{outcome}")?;
            return farewell(&mut output);
        }
    }
}

fn read_line(input: &mut impl BufRead) -> io::Result<Option<String>> {
    let mut line = String::new();

    if input.read_line(&mut line)? == 0 {
        return Ok(None);                                                        /* end of stream reads as exit        */
    }

    Ok(Some(line.trim().to_string()))
}

fn farewell(output: &mut impl Write) -> io::Result<()> {
    writeln!(output, "Bye!")
}
