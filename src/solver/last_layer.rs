//! Stages 4 to 7, run with the last-layer color on Up.

use crate::{
	cube::{idx, Face},
	moves::{Axis, Move},
};

use super::{
	same_piece,
	slots::{frame, layer_turn, up_corner, up_edge, SIDES, U_CORNER, U_EDGE},
	LayerByLayerSolver, SolveError, ALIGNMENT_SCAN, LAST_LAYER_ATTEMPTS, TWIST_REPETITIONS,
};



const ORIENT_EDGES: [Move; 6] = {use Move::*; [Front, Right, Up, RightS, UpS, FrontS]};
const SWAP_EDGES: [Move; 7] = {use Move::*; [Right, Up, RightS, Up, Right, Up2, RightS]};
const CYCLE_CORNERS: [Move; 8] = {use Move::*; [Up, Right, UpS, LeftS, Up, RightS, UpS, Left]};
const TWIST: [Move; 4] = {use Move::*; [RightS, DownS, Right, Down]};
const TWIST_INVERSE: [Move; 4] = {use Move::*; [DownS, RightS, Down, Right]};

impl LayerByLayerSolver {
	pub(super) fn solve_yellow_cross(&mut self) -> Result<(), SolveError> {
		for _ in 0..LAST_LAYER_ATTEMPTS {
			let top = self.center(Face::Up);
			let oriented = U_EDGE.map(|index| self.color_at(index) == top);
			match oriented.iter().filter(|&&edge| edge).count() {
				4 => return Ok(()),
				0 => self.apply(&ORIENT_EDGES, "Dot to L-shape"),
				2 if oriented[0] == oriented[2] => {
					if !oriented[1] {
						self.apply(&[Move::Up], "Position line");
					}
					self.apply(&ORIENT_EDGES, "Line to cross");
				}
				2 => {
					// the L goes to back and left
					let q = (0..4)
						.find(|&q| oriented[(2 + q) % 4] && oriented[(3 + q) % 4])
						.unwrap_or(0);
					self.apply_opt(layer_turn(Axis::U, q), "Position L-shape");
					self.apply(&ORIENT_EDGES, "L-shape to cross");
				}
				n => return Err(SolveError::LastLayerPattern(n)),
			}
		}
		self.exhausted(LAST_LAYER_ATTEMPTS);
		Ok(())
	}

	/// Which sides would show a matching top edge after `q` clockwise `U` turns.
	fn edge_matches(&self, q: usize) -> [bool; 4] {
		std::array::from_fn(|k| {
			let [_, side] = up_edge((k + q) % 4);
			self.color_at(side) == self.side_center(k)
		})
	}

	pub(super) fn position_yellow_cross(&mut self) -> Result<(), SolveError> {
		let count = |matches: [bool; 4]| matches.iter().filter(|&&m| m).count();
		for _ in 0..LAST_LAYER_ATTEMPTS {
			if count(self.edge_matches(0)) == 4 {
				return Ok(());
			}

			let mut best = 0;
			for q in [1, 3, 2] {
				if count(self.edge_matches(q)) > count(self.edge_matches(best)) {
					best = q;
				}
			}
			let matches = self.edge_matches(best);
			let adjacent = count(matches) == 2 && matches[0] != matches[2];

			if count(matches) == 4 {
				self.apply_opt(layer_turn(Axis::U, best), "Align edges");
			} else if adjacent {
				self.apply_opt(layer_turn(Axis::U, best), "Position correct edges");
				let matches = self.edge_matches(0);
				// the matched pair goes to back and right of the frame
				match (0..4).find(|&k| matches[(k + 2) % 4] && matches[(k + 1) % 4]) {
					Some(k) => self.apply(&frame(&SWAP_EDGES, k), "Swap edges"),
					None => self.apply(&SWAP_EDGES, "Position edges"),
				}
			} else {
				self.apply(&SWAP_EDGES, "Position edges");
			}
		}
		self.exhausted(LAST_LAYER_ATTEMPTS);
		Ok(())
	}

	pub(super) fn last_layer_corner_placed(&self, k: usize) -> bool {
		let [a, b] = self.slot_colors(k);
		same_piece(self.colors_at(up_corner(k)), [self.center(Face::Up), a, b])
	}

	pub(super) fn position_yellow_corners(&mut self) -> Result<(), SolveError> {
		for _ in 0..LAST_LAYER_ATTEMPTS {
			let placed: [bool; 4] = std::array::from_fn(|k| self.last_layer_corner_placed(k));
			if placed.iter().all(|&p| p) {
				return Ok(());
			}
			let k = placed.iter().position(|&p| p).unwrap_or(0);
			self.apply(&frame(&CYCLE_CORNERS, k), "Cycle corners");
		}
		self.exhausted(LAST_LAYER_ATTEMPTS);
		Ok(())
	}

	/// Twists each corner at front-right in turn, then turns Up so the faces line up.
	pub(super) fn orient_yellow_corners(&mut self) -> Result<(), SolveError> {
		let top = self.center(Face::Up);
		for _ in 0..ALIGNMENT_SCAN {
			// chosen once per corner so the repetitions never undo each other
			let twist = if self.color_at(idx(Face::Front, 0, 2)) == top { &TWIST_INVERSE } else { &TWIST };
			for _ in 0..TWIST_REPETITIONS {
				if self.color_at(U_CORNER[0]) == top {
					break;
				}
				self.apply(twist, "Orient corner");
			}
			if self.color_at(U_CORNER[0]) != top {
				self.exhausted(TWIST_REPETITIONS);
			}

			let Some(q) = (1..4).find(|&q| self.color_at(U_CORNER[q]) != top) else {
				break;
			};
			self.apply_opt(layer_turn(Axis::U, q), "Next corner");
		}

		let front = self.center(Face::Front);
		if let Some(q) = (0..ALIGNMENT_SCAN).find(|&q| self.color_at(idx(SIDES[q], 0, 1)) == front) {
			self.apply_opt(layer_turn(Axis::U, q), "Align cube");
		}
		Ok(())
	}
}
