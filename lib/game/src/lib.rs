pub mod representations {
	pub mod square;
	pub mod piece;
	pub mod board;
	pub mod rules;
	pub mod position;
	pub mod state;
}

pub mod moves {
	pub mod offset;
	pub mod offset_parse;
	pub mod move_gen;
	pub mod legality;
	pub mod check;
}

pub mod constants;
pub mod errors;
pub mod history;
pub mod session;
pub mod util;
