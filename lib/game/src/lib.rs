pub mod representations {
	pub mod board;
	pub mod coordinate;
	pub mod player;
	pub mod moves;
	pub mod state;
}

pub mod moves {
	pub mod move_parse;
	pub mod move_check;
	pub mod end_check;
}

pub mod constants;
