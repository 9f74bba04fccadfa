//! Step-by-step cursor over a move list, for walking through a solution.

use crate::{cube::RubiksCube, moves::Move};



#[derive(Debug, Clone)]
pub struct Playback {
	start: RubiksCube,
	cube: RubiksCube,
	moves: Vec<Move>,
	position: usize,
}

impl Playback {
	pub fn new(start: &RubiksCube, moves: Vec<Move>) -> Self {
		Self { start: *start, cube: *start, moves, position: 0 }
	}

	/// The cube after the first [`Playback::position`] moves.
	pub fn cube(&self) -> &RubiksCube {
		&self.cube
	}

	pub fn moves(&self) -> &[Move] {
		&self.moves
	}

	pub fn position(&self) -> usize {
		self.position
	}

	pub fn len(&self) -> usize {
		self.moves.len()
	}

	pub fn is_empty(&self) -> bool {
		self.moves.is_empty()
	}

	pub fn is_finished(&self) -> bool {
		self.position == self.moves.len()
	}

	/// The move the next [`Playback::step_forward`] would apply.
	pub fn current_move(&self) -> Option<Move> {
		self.moves.get(self.position).copied()
	}

	pub fn step_forward(&mut self) -> Option<Move> {
		let move_ = self.current_move()?;
		self.cube.make_move(move_);
		self.position += 1;
		Some(move_)
	}

	/// Undoes the last applied move by applying its inverse.
	pub fn step_backward(&mut self) -> Option<Move> {
		let position = self.position.checked_sub(1)?;
		let move_ = self.moves[position];
		self.cube.make_move(move_.inverse());
		self.position = position;
		Some(move_)
	}

	pub fn rewind(&mut self) {
		self.cube = self.start;
		self.position = 0;
	}

	/// Moves the cursor to `position`, clamped to the end.
	pub fn seek(&mut self, position: usize) {
		let position = position.min(self.moves.len());
		if position < self.position {
			self.rewind();
		}
		while self.position < position {
			self.step_forward();
		}
	}
}



#[cfg(test)]
mod tests {
	use super::*;
	use crate::moves::parse_sequence;

	fn playback() -> Playback {
		Playback::new(&RubiksCube::new(), parse_sequence("R U R' U'"))
	}

	#[test]
	fn forward_and_backward() {
		let mut pb = playback();
		assert_eq!(Some(Move::Right), pb.current_move());
		assert_eq!(None, pb.step_backward());
		assert_eq!(Some(Move::Right), pb.step_forward());
		assert_eq!(Some(Move::Up), pb.step_forward());
		assert_eq!(2, pb.position());
		assert_eq!(Some(Move::Up), pb.step_backward());
		let mut expected = RubiksCube::new();
		expected.make_move(Move::Right);
		assert_eq!(&expected, pb.cube());
	}

	#[test]
	fn runs_to_the_end() {
		let mut pb = playback();
		while pb.step_forward().is_some() {}
		assert!(pb.is_finished());
		assert_eq!(4, pb.position());
		assert_eq!(None, pb.current_move());
		let mut expected = RubiksCube::new();
		expected.make_moves(pb.moves());
		assert_eq!(&expected, pb.cube());
	}

	#[test]
	fn seek_and_rewind() {
		let mut pb = playback();
		pb.seek(3);
		assert_eq!(3, pb.position());
		pb.seek(1);
		let mut expected = RubiksCube::new();
		expected.make_move(Move::Right);
		assert_eq!(&expected, pb.cube());
		pb.seek(100);
		assert!(pb.is_finished());
		pb.rewind();
		assert_eq!(0, pb.position());
		assert!(pb.cube().is_solved());
	}
}
