use crate::{
	color::Color,
	moves::{Axis, Move},
};

use super::{
	same_piece,
	slots::{down_corner, frame, layer_turn, up_corner},
	LayerByLayerSolver, SolveError, BASE_COLOR, PLACEMENT_ATTEMPTS,
};



// Inserts from the bottom corner below the slot, by which facelet shows the base color.
const CORNER_FROM_FRONT: [Move; 3] = {use Move::*; [Front, Down, FrontS]};
const CORNER_FROM_RIGHT: [Move; 3] = {use Move::*; [RightS, DownS, Right]};
const CORNER_FROM_BOTTOM: [Move; 7] = {use Move::*; [RightS, Down2, Right, Down, RightS, DownS, Right]};
const CORNER_LIFT: [Move; 3] = {use Move::*; [RightS, DownS, Right]};

impl LayerByLayerSolver {
	pub(super) fn solve_first_layer(&mut self) -> Result<(), SolveError> {
		for _ in 0..PLACEMENT_ATTEMPTS {
			let unsolved: Vec<usize> = (0..4).filter(|&k| !self.first_layer_corner_solved(k)).collect();
			let Some(&first) = unsolved.first() else {
				return Ok(());
			};

			let in_bottom = unsolved.iter().find_map(|&target| {
				(0..4)
					.find(|&k| same_piece(self.colors_at(down_corner(k)), self.corner_colors(target)))
					.map(|k| (target, k))
			});

			let Some((target, k)) = in_bottom else {
				let Some(k) = (0..4).find(|&k| same_piece(self.colors_at(up_corner(k)), self.corner_colors(first))) else {
					return Ok(());
				};
				let description = self.corner_description(first);
				self.apply(&frame(&CORNER_LIFT, k), &description);
				continue;
			};

			let description = self.corner_description(target);
			self.apply_opt(layer_turn(Axis::D, target + 4 - k), &description);
			let [_, front, right] = self.colors_at(down_corner(target));
			let alg: &[Move] = if front == BASE_COLOR {
				&CORNER_FROM_FRONT
			} else if right == BASE_COLOR {
				&CORNER_FROM_RIGHT
			} else {
				&CORNER_FROM_BOTTOM
			};
			self.apply(&frame(alg, target), &description);
		}
		self.exhausted(PLACEMENT_ATTEMPTS);
		Ok(())
	}

	/// Colors of the corner that belongs between side `k` and side `k + 1`.
	fn corner_colors(&self, k: usize) -> [Color; 3] {
		let [a, b] = self.slot_colors(k);
		[BASE_COLOR, a, b]
	}

	fn corner_description(&self, k: usize) -> String {
		let [a, b] = self.slot_colors(k);
		format!("{}-{}-{} corner", a.name(), b.name(), BASE_COLOR.name())
	}

	pub(super) fn first_layer_corner_solved(&self, k: usize) -> bool {
		self.colors_at(up_corner(k)) == self.corner_colors(k)
	}
}
