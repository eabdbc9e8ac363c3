pub mod board_io;
pub mod game_io;
