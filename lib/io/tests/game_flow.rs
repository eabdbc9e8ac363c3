use std::io::Cursor;

use game::representations::board::Board;
use io::board_io::format_board;
use io::game_io::run;
use ntest::timeout;

fn transcript(script: &str) -> String {
    let mut output = Vec::new();

    run(Cursor::new(script), &mut output).expect("session failed");

    String::from_utf8(output).expect("transcript is not utf8")
}

// ============================================================================
// Session setup and endings
// ============================================================================

#[test]
fn test_exit_right_away_gives_a_full_greeting_and_a_farewell() {
    let expected = format!(
        "Pawns-Only Chess\n\
         First Player's name:\n\
         Second Player's name:\n\
         {}Alice's turn:\n> Bye!\n",
        format_board(&Board::opening())
    );

    assert_eq!(transcript("Alice\nBob\nexit\n"), expected);
}

#[test]
fn test_exit_skips_the_end_of_game_lines() {
    let output = transcript("Alice\nBob\ne2e4\nexit\n");

    assert!(output.ends_with("Bob's turn:\n> Bye!\n"));
    assert!(!output.contains("Wins!"));
    assert!(!output.contains("Stalemate!"));
}

#[test]
fn test_end_of_input_reads_as_exit() {
    let output = transcript("Alice\nBob\ne2e4\n");

    assert!(output.ends_with("Bob's turn:\n> Bye!\n"));
}

#[test]
fn test_end_of_input_during_setup_still_says_goodbye() {
    let output = transcript("Alice\n");

    assert!(output.contains("Second Player's name:"));
    assert!(output.ends_with("Bye!\n"));
}

#[test]
fn test_names_are_taken_in_order() {
    let output = transcript("Obi-Wan Kenobi\nAnakin\nexit\n");

    assert!(output.contains("Obi-Wan Kenobi's turn:"));
    assert!(!output.contains("Anakin's turn:"));
}

// ============================================================================
// Rejected input
// ============================================================================

#[test]
fn test_unreadable_input_complains_and_keeps_the_turn() {
    let output = transcript("Alice\nBob\nxyz\n\ne2e4e\nexit\n");

    assert_eq!(output.matches("Invalid Input").count(), 3);
    assert_eq!(output.matches("Alice's turn:").count(), 4);
    assert_eq!(output.matches("Bob's turn:").count(), 0);
}

#[test]
fn test_rule_violations_are_reported_verbatim() {
    let output = transcript("Alice\nBob\ne3e4\nd7d5\nexit\n");

    assert!(output.contains("no white pawn at e3"));
    assert!(output.contains("no white pawn at d7"));
    assert_eq!(output.matches("Alice's turn:").count(), 3);
    assert_eq!(output.matches("Bob's turn:").count(), 0);
}

#[test]
fn test_surrounding_whitespace_is_forgiven() {
    let output = transcript("Alice\nBob\n  e2e4  \nexit\n");

    assert!(!output.contains("Invalid Input"));
    assert!(output.contains("Bob's turn:"));
}

// ============================================================================
// Played-out games
// ============================================================================

#[test]
#[timeout(1000)]
fn test_white_wins_by_reaching_the_far_rank() {
    let script = "Alice\nBob\n\
                  e2e4\na7a6\ne4e5\na6a5\ne5e6\na5a4\ne6d7\na4a3\nd7d8\n";
    let output = transcript(script);

    assert!(output.ends_with("White Wins!\nBye!\n"));
    assert_eq!(output.matches("White Wins!").count(), 1);
    assert!(!output.contains("Invalid Input"));
    assert!(!output.contains("no "));
}

#[test]
#[timeout(1000)]
fn test_black_wins_by_reaching_the_near_rank() {
    let script = "Alice\nBob\n\
                  h2h4\ne7e5\nh4h5\ne5e4\nh5h6\ne4e3\na2a3\ne3d2\na3a4\nd2d1\n";
    let output = transcript(script);

    assert!(output.ends_with("Black Wins!\nBye!\n"));
    assert!(!output.contains("Invalid Input"));
}

#[test]
#[timeout(1000)]
fn test_locked_pawns_end_the_game_in_stalemate() {
    let script = "Alice\nBob\n\
                  b2b3\na7a5\ng2g3\na5a4\nb3a4\nb7b5\na4b5\nc7c6\nb5c6\n\
                  f7f5\nc6d7\nf5f4\ng3f4\ne7e5\nf4e5\ng7g5\nf2f3\ng5g4\n\
                  f3g4\nh7h6\nh2h4\nh6h5\ng4g5\n";
    let output = transcript(script);

    assert!(output.ends_with("Stalemate!\nBye!\n"));
    assert!(!output.contains("Wins!"));
    assert!(!output.contains("Invalid Input"));
}

#[test]
#[timeout(1000)]
fn test_en_passant_removes_the_bypassed_pawn_from_the_frame() {
    let output = transcript("Alice\nBob\ne2e4\nd7d5\ne4e5\nf7f5\ne5f6\nexit\n");

    assert!(output.contains("6 |   |   |   |   |   | W |   |   |"));
    assert!(output.contains("5 |   |   |   | B |   |   |   |   |"));
}
