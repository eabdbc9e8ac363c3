//! # main.rs
//!
//! Wires the terminal onto the session driver.
//!
//! # Author
//! Alden Luthfi
//!
//! # Date
//! 21/03/2026

use std::io::{
    stdin,
    stdout
};

use io::game_io::run;

fn main() {
    let stdin = stdin();
    let stdout = stdout();

    if let Err(err) = run(stdin.lock(), stdout.lock()) {
        eprintln!("io error: {err}");
        std::process::exit(1);
    }
}
