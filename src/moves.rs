//! Move vocabulary: 18 face turns, 9 slice turns and 9 whole-cube rotations.

use std::{fmt, str::FromStr};

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;



/// One of the 36 atomic actions. Variants come in triples per axis:
/// clockwise, counter-clockwise (`S` for "star", written `'`), and 180 degrees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Move {
	Front, FrontS, Front2,
	Back, BackS, Back2,
	Up, UpS, Up2,
	Down, DownS, Down2,
	Left, LeftS, Left2,
	Right, RightS, Right2,
	Middle, MiddleS, Middle2,
	Equator, EquatorS, Equator2,
	Standing, StandingS, Standing2,
	X, Xs, X2,
	Y, Ys, Y2,
	Z, Zs, Z2,
}
pub const ALL_MOVES: [Move; 36] = {use Move::*; [
	Front, FrontS, Front2, Back, BackS, Back2, Up, UpS, Up2, Down, DownS, Down2, Left, LeftS, Left2, Right, RightS, Right2,
	Middle, MiddleS, Middle2, Equator, EquatorS, Equator2, Standing, StandingS, Standing2,
	X, Xs, X2, Y, Ys, Y2, Z, Zs, Z2,
]};
/// The moves a scramble draws from.
pub const FACE_TURNS: [Move; 18] = {use Move::*; [
	Front, FrontS, Front2, Back, BackS, Back2, Up, UpS, Up2, Down, DownS, Down2, Left, LeftS, Left2, Right, RightS, Right2,
]};

const NOTATIONS: [&str; 36] = [
	"F", "F'", "F2", "B", "B'", "B2", "U", "U'", "U2", "D", "D'", "D2", "L", "L'", "L2", "R", "R'", "R2",
	"M", "M'", "M2", "E", "E'", "E2", "S", "S'", "S2",
	"x", "x'", "x2", "y", "y'", "y2", "z", "z'", "z2",
];

const DESCRIPTIONS: [&str; 36] = [
	"Front face clockwise", "Front face counter-clockwise", "Front face 180 degrees",
	"Back face clockwise", "Back face counter-clockwise", "Back face 180 degrees",
	"Up (top) face clockwise", "Up (top) face counter-clockwise", "Up (top) face 180 degrees",
	"Down (bottom) face clockwise", "Down (bottom) face counter-clockwise", "Down (bottom) face 180 degrees",
	"Left face clockwise", "Left face counter-clockwise", "Left face 180 degrees",
	"Right face clockwise", "Right face counter-clockwise", "Right face 180 degrees",
	"Middle slice (follows L direction)", "Middle slice counter-clockwise", "Middle slice 180 degrees",
	"Equatorial slice (follows D direction)", "Equatorial slice counter-clockwise", "Equatorial slice 180 degrees",
	"Standing slice (follows F direction)", "Standing slice counter-clockwise", "Standing slice 180 degrees",
	"Rotate entire cube on R axis", "Rotate entire cube on R axis (reverse)", "Rotate entire cube on R axis 180 degrees",
	"Rotate entire cube on U axis", "Rotate entire cube on U axis (reverse)", "Rotate entire cube on U axis 180 degrees",
	"Rotate entire cube on F axis", "Rotate entire cube on F axis (reverse)", "Rotate entire cube on F axis 180 degrees",
];



/// What a move turns: one of six faces, three middle slices, or the whole cube about one of three axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Axis { F, B, U, D, L, R, M, E, S, X, Y, Z }
pub const ALL_AXES: [Axis; 12] = {use Axis::*; [F, B, U, D, L, R, M, E, S, X, Y, Z]};

impl Axis {
	pub fn is_face(self) -> bool {
		(self as u8) < (Axis::M as u8)
	}
	pub fn is_slice(self) -> bool {
		matches!(self, Axis::M | Axis::E | Axis::S)
	}
	pub fn is_rotation(self) -> bool {
		matches!(self, Axis::X | Axis::Y | Axis::Z)
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Turn { Cw, Ccw, Half }

impl Turn {
	pub fn quarter_turns(self) -> u8 {
		match self {
			Turn::Cw => 1,
			Turn::Half => 2,
			Turn::Ccw => 3,
		}
	}

	/// `None` for a net zero rotation.
	pub fn from_quarter_turns(quarters: u8) -> Option<Self> {
		match quarters % 4 {
			0 => None,
			1 => Some(Turn::Cw),
			2 => Some(Turn::Half),
			3 => Some(Turn::Ccw),
			_ => unreachable!()
		}
	}
}



impl Move {
	pub fn new(axis: Axis, turn: Turn) -> Self {
		let offset = match turn {
			Turn::Cw => 0,
			Turn::Ccw => 1,
			Turn::Half => 2,
		};
		ALL_MOVES[axis as usize * 3 + offset]
	}

	pub fn axis(self) -> Axis {
		ALL_AXES[self as usize / 3]
	}

	pub fn turn(self) -> Turn {
		match self as usize % 3 {
			0 => Turn::Cw,
			1 => Turn::Ccw,
			2 => Turn::Half,
			_ => unreachable!()
		}
	}

	pub fn quarter_turns(self) -> u8 {
		self.turn().quarter_turns()
	}

	pub fn notation(self) -> &'static str {
		NOTATIONS[self as usize]
	}

	pub fn description(self) -> &'static str {
		DESCRIPTIONS[self as usize]
	}

	/// Exact, case-sensitive match against the canonical tokens.
	pub fn parse(token: &str) -> Option<Self> {
		NOTATIONS.iter()
			.position(|&notation| notation == token)
			.map(|i| ALL_MOVES[i])
	}

	pub fn inverse(self) -> Self {
		let turn = match self.turn() {
			Turn::Cw => Turn::Ccw,
			Turn::Ccw => Turn::Cw,
			Turn::Half => Turn::Half,
		};
		Self::new(self.axis(), turn)
	}

	pub fn same_axis(self, other: Move) -> bool {
		self.axis() == other.axis()
	}

	/// Merges two moves on the same axis; `Ok(None)` means they cancel out.
	pub fn combine(self, other: Move) -> Result<Option<Self>, DifferentAxesError> {
		if !self.same_axis(other) {
			return Err(DifferentAxesError(self, other));
		}
		Ok(Turn::from_quarter_turns(self.quarter_turns() + other.quarter_turns())
			.map(|turn| Self::new(self.axis(), turn)))
	}

	pub fn is_face_turn(self) -> bool {
		self.axis().is_face()
	}
	pub fn is_slice(self) -> bool {
		self.axis().is_slice()
	}
	pub fn is_rotation(self) -> bool {
		self.axis().is_rotation()
	}
}

impl fmt::Display for Move {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.notation())
	}
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unrecognized move token {0:?}")]
pub struct ParseMoveError(pub String);

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("{0} and {1} turn different axes")]
pub struct DifferentAxesError(pub Move, pub Move);

impl FromStr for Move {
	type Err = ParseMoveError;
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Move::parse(s).ok_or_else(|| ParseMoveError(s.to_string()))
	}
}

impl Serialize for Move {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.serialize_str(self.notation())
	}
}

impl<'de> Deserialize<'de> for Move {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		let token = String::deserialize(deserializer)?;
		Move::parse(&token).ok_or_else(|| de::Error::custom(ParseMoveError(token)))
	}
}



/// Splits on whitespace; tokens that are not moves are skipped.
pub fn parse_sequence(text: &str) -> Vec<Move> {
	text.split_whitespace()
		.filter_map(Move::parse)
		.collect()
}

pub fn format_sequence(moves: &[Move]) -> String {
	moves.iter()
		.map(|move_| move_.notation())
		.collect::<Vec<_>>()
		.join(" ")
}

/// The sequence that undoes `moves`.
pub fn invert_sequence(moves: &[Move]) -> Vec<Move> {
	moves.iter()
		.rev()
		.map(|move_| move_.inverse())
		.collect()
}

/// Compresses runs of same-axis moves, dropping the ones that cancel.
pub fn simplify(moves: &[Move]) -> Vec<Move> {
	let mut simplified: Vec<Move> = Vec::with_capacity(moves.len());
	for &move_ in moves {
		match simplified.last().map(|last| last.combine(move_)) {
			Some(Ok(combined)) => {
				simplified.pop();
				simplified.extend(combined);
			}
			_ => simplified.push(move_),
		}
	}
	simplified
}
