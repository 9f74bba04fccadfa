use crate::moves::{Axis, Move};

use super::{
	same_piece,
	slots::{frame, layer_turn, mid_edge, right_of, up_edge},
	LayerByLayerSolver, SolveError, PLACEMENT_ATTEMPTS,
};



const INSERT_RIGHT: [Move; 8] = {use Move::*; [Up, Right, UpS, RightS, UpS, FrontS, Up, Front]};
const INSERT_LEFT: [Move; 8] = {use Move::*; [UpS, LeftS, Up, Left, Up, Front, UpS, FrontS]};
const EXTRACT: [Move; 7] = {use Move::*; [Right, UpS, RightS, UpS, FrontS, Up, Front]};

impl LayerByLayerSolver {
	pub(super) fn solve_second_layer(&mut self) -> Result<(), SolveError> {
		self.apply(&[Move::X2], "Flip cube - yellow on top");

		for _ in 0..PLACEMENT_ATTEMPTS {
			let unsolved: Vec<usize> = (0..4).filter(|&k| !self.middle_edge_solved(k)).collect();
			let Some(&first) = unsolved.first() else {
				return Ok(());
			};

			let in_top = unsolved.iter().find_map(|&target| {
				(0..4)
					.find(|&k| same_piece(self.colors_at(up_edge(k)), self.slot_colors(target)))
					.map(|k| (target, k))
			});

			let Some((target, k)) = in_top else {
				let Some(k) = (0..4).find(|&k| same_piece(self.colors_at(mid_edge(k)), self.slot_colors(first))) else {
					return Ok(());
				};
				self.apply(&frame(&EXTRACT, k), "Extract edge");
				continue;
			};

			let [a, b] = self.slot_colors(target);
			let description = format!("{}-{} edge", a.name(), b.name());
			let [top, side] = self.colors_at(up_edge(k));
			let f = self.side_of(side)?;
			self.apply_opt(layer_turn(Axis::U, k + 4 - f), "Position edge");
			if top == self.side_center(right_of(f)) {
				self.apply(&frame(&INSERT_RIGHT, f), &description);
			} else {
				self.apply(&frame(&INSERT_LEFT, f), &description);
			}
		}
		self.exhausted(PLACEMENT_ATTEMPTS);
		Ok(())
	}

	pub(super) fn middle_edge_solved(&self, k: usize) -> bool {
		self.colors_at(mid_edge(k)) == self.slot_colors(k)
	}
}
