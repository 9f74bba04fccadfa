//! The 54-facelet cube and the permutation semantics of every move.

use std::fmt;

use rand::Rng;

use crate::{
	color::Color,
	moves::{Axis, Move, FACE_TURNS},
	state::{CubeState, Grid},
};



#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Face { Front, Back, Up, Down, Left, Right }
pub const ALL_FACES: [Face; 6] = {use Face::*; [Front, Back, Up, Down, Left, Right]};

impl Face {
	pub const fn solved_color(self) -> Color {
		use Color::*;
		match self {
			Face::Front => G,
			Face::Back => B,
			Face::Up => W,
			Face::Down => Y,
			Face::Left => O,
			Face::Right => R,
		}
	}
}

/// Index of facelet `(row, col)` of `face` in [`RubiksCube::facelets`].
pub const fn idx(face: Face, row: usize, col: usize) -> usize {
	face as usize * 9 + row * 3 + col
}



// Each face is stored row-major:
// sides have row 0 next to Up, Up has row 2 next to Front, Down has row 0 next to Front,
// Back is seen from behind so its col 0 touches Right.
//
// Cycles move contents along `a -> b -> c -> d -> a` for one clockwise quarter turn.
const FRONT_CYCLES: [[usize; 4]; 5] = [[0, 2, 8, 6], [1, 5, 7, 3], [24, 45, 29, 44], [25, 48, 28, 41], [26, 51, 27, 38]];
const BACK_CYCLES:  [[usize; 4]; 5] = [[9, 11, 17, 15], [10, 14, 16, 12], [18, 42, 35, 47], [19, 39, 34, 50], [20, 36, 33, 53]];
const UP_CYCLES:    [[usize; 4]; 5] = [[0, 36, 9, 45], [1, 37, 10, 46], [2, 38, 11, 47], [18, 20, 26, 24], [19, 23, 25, 21]];
const DOWN_CYCLES:  [[usize; 4]; 5] = [[6, 51, 15, 42], [7, 52, 16, 43], [8, 53, 17, 44], [27, 29, 35, 33], [28, 32, 34, 30]];
const LEFT_CYCLES:  [[usize; 4]; 5] = [[0, 27, 17, 18], [3, 30, 14, 21], [6, 33, 11, 24], [36, 38, 44, 42], [37, 41, 43, 39]];
const RIGHT_CYCLES: [[usize; 4]; 5] = [[2, 20, 15, 29], [5, 23, 12, 32], [8, 26, 9, 35], [45, 47, 53, 51], [46, 50, 52, 48]];
// slices turn like their reference face: M like L, E like D, S like F
const MIDDLE_CYCLES:   [[usize; 4]; 3] = [[1, 28, 16, 19], [4, 31, 13, 22], [7, 34, 10, 25]];
const EQUATOR_CYCLES:  [[usize; 4]; 3] = [[3, 48, 12, 39], [4, 49, 13, 40], [5, 50, 14, 41]];
const STANDING_CYCLES: [[usize; 4]; 3] = [[21, 46, 32, 43], [22, 49, 31, 40], [23, 52, 30, 37]];



/// The whole puzzle as a flat array of facelets, faces in [`ALL_FACES`] order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RubiksCube {
	facelets: [Color; 54]
}

impl Default for RubiksCube {
	fn default() -> Self {
		Self::new()
	}
}

impl RubiksCube {
	const NEW: [Color; 54] = {
		let mut facelets = [Color::W; 54];
		let mut i = 0;
		while i < 54 {
			facelets[i] = ALL_FACES[i / 9].solved_color();
			i += 1;
		}
		facelets
	};

	pub fn new() -> Self {
		Self { facelets: Self::NEW }
	}

	pub fn from_facelets(facelets: [Color; 54]) -> Self {
		Self { facelets }
	}

	pub fn from_state(state: &CubeState) -> Self {
		let mut self_ = Self::new();
		self_.set_state(state);
		self_
	}

	pub fn new_scrambled<R: Rng + ?Sized>(n: usize, rng: &mut R) -> (Self, Vec<Move>) {
		let mut self_ = Self::new();
		let moves = self_.scramble(n, rng);
		(self_, moves)
	}

	pub fn facelets(&self) -> &[Color; 54] {
		&self.facelets
	}

	pub fn facelet(&self, face: Face, row: usize, col: usize) -> Color {
		self.facelets[idx(face, row, col)]
	}

	pub fn center(&self, face: Face) -> Color {
		self.facelet(face, 1, 1)
	}

	pub fn face(&self, face: Face) -> Grid {
		let mut grid = [[Color::W; 3]; 3];
		for (row, line) in grid.iter_mut().enumerate() {
			for (col, cell) in line.iter_mut().enumerate() {
				*cell = self.facelet(face, row, col);
			}
		}
		grid
	}

	fn set_face(&mut self, face: Face, grid: &Grid) {
		for (row, line) in grid.iter().enumerate() {
			for (col, &color) in line.iter().enumerate() {
				self.facelets[idx(face, row, col)] = color;
			}
		}
	}

	pub fn is_solved(&self) -> bool {
		self.facelets
			.chunks_exact(9)
			.all(|face| face.iter().all(|&color| color == face[0]))
	}

	pub fn get_state(&self) -> CubeState {
		CubeState {
			front: self.face(Face::Front),
			back: self.face(Face::Back),
			up: self.face(Face::Up),
			down: self.face(Face::Down),
			left: self.face(Face::Left),
			right: self.face(Face::Right),
		}
	}

	/// Overwrites every facelet. The color counts are not checked, see [`CubeState::validate`].
	pub fn set_state(&mut self, state: &CubeState) {
		self.set_face(Face::Front, &state.front);
		self.set_face(Face::Back, &state.back);
		self.set_face(Face::Up, &state.up);
		self.set_face(Face::Down, &state.down);
		self.set_face(Face::Left, &state.left);
		self.set_face(Face::Right, &state.right);
	}

	/// Applies `n` random face turns, never two in a row on the same axis, and returns them.
	pub fn scramble<R: Rng + ?Sized>(&mut self, n: usize, rng: &mut R) -> Vec<Move> {
		let mut moves: Vec<Move> = Vec::with_capacity(n);
		for _ in 0..n {
			let move_ = self.scramble_once(moves.last().copied(), rng);
			moves.push(move_);
		}
		moves
	}
	fn scramble_once<R: Rng + ?Sized>(&mut self, last: Option<Move>, rng: &mut R) -> Move {
		let move_ = loop {
			let candidate = FACE_TURNS[rng.random_range(0..FACE_TURNS.len())];
			match last {
				Some(last) if last.same_axis(candidate) => continue,
				_ => break candidate,
			}
		};
		self.make_move(move_);
		move_
	}

	pub fn make_moves(&mut self, moves: &[Move]) {
		for &move_ in moves {
			self.make_move(move_);
		}
	}

	pub fn make_move(&mut self, move_: Move) {
		for _ in 0..move_.quarter_turns() {
			self.quarter_turn(move_.axis());
		}
	}

	fn quarter_turn(&mut self, axis: Axis) {
		match axis {
			Axis::F => self.cycle(&FRONT_CYCLES),
			Axis::B => self.cycle(&BACK_CYCLES),
			Axis::U => self.cycle(&UP_CYCLES),
			Axis::D => self.cycle(&DOWN_CYCLES),
			Axis::L => self.cycle(&LEFT_CYCLES),
			Axis::R => self.cycle(&RIGHT_CYCLES),
			Axis::M => self.cycle(&MIDDLE_CYCLES),
			Axis::E => self.cycle(&EQUATOR_CYCLES),
			Axis::S => self.cycle(&STANDING_CYCLES),
			// x = R M' L'
			Axis::X => {
				self.cycle(&RIGHT_CYCLES);
				self.cycle_inverse(&MIDDLE_CYCLES);
				self.cycle_inverse(&LEFT_CYCLES);
			}
			// y = U E' D'
			Axis::Y => {
				self.cycle(&UP_CYCLES);
				self.cycle_inverse(&EQUATOR_CYCLES);
				self.cycle_inverse(&DOWN_CYCLES);
			}
			// z = F S B'
			Axis::Z => {
				self.cycle(&FRONT_CYCLES);
				self.cycle(&STANDING_CYCLES);
				self.cycle_inverse(&BACK_CYCLES);
			}
		}
	}

	fn cycle(&mut self, cycles: &[[usize; 4]]) {
		for &[a, b, c, d] in cycles {
			self.facelets.rotate4(a, b, c, d);
		}
	}
	fn cycle_inverse(&mut self, cycles: &[[usize; 4]]) {
		for &[a, b, c, d] in cycles {
			self.facelets.rotate4(d, c, b, a);
		}
	}
}

/// Unfolded net: Up on top, then Left Front Right Back, then Down.
impl fmt::Display for RubiksCube {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let row_of = |face: Face, row: usize| -> String {
			(0..3).map(|col| format!("{:?}", self.facelet(face, row, col))).collect::<Vec<_>>().join(" ")
		};
		for row in 0..3 {
			writeln!(f, "      {}", row_of(Face::Up, row))?;
		}
		for row in 0..3 {
			let band = [Face::Left, Face::Front, Face::Right, Face::Back].map(|face| row_of(face, row));
			writeln!(f, "{}", band.join(" "))?;
		}
		for row in 0..3 {
			writeln!(f, "      {}", row_of(Face::Down, row))?;
		}
		Ok(())
	}
}



pub trait ExtArrayRotate4 {
	/// Moves the contents along `i1 -> i2 -> i3 -> i4 -> i1`.
	fn rotate4(&mut self, i1: usize, i2: usize, i3: usize, i4: usize);
}
impl<T: Copy, const L: usize> ExtArrayRotate4 for [T; L] {
	#[inline]
	fn rotate4(&mut self, i1: usize, i2: usize, i3: usize, i4: usize) {
		let temp = self[i4];
		self[i4] = self[i3];
		self[i3] = self[i2];
		self[i2] = self[i1];
		self[i1] = temp;
	}
}




#[test]
fn rotate4() {
	//              0    1    2    3    4    5
	let mut arr = ['p', 'q', 'r', 's', 't', 'u'];
	arr.rotate4(0, 2, 3, 5);
	assert_eq!(
		['u', 'q', 'p', 'r', 't', 's'],
		arr
	);
}
