use crate::{
	color::Color,
	cube::Face,
	moves::{Axis, Move},
};

use super::{
	slots::{down_edge, frame, layer_turn, mid_edge, up_edge},
	LayerByLayerSolver, SolveError, BASE_COLOR, PLACEMENT_ATTEMPTS,
};



/// Where an edge sits, ordered from cheapest to most expensive to insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Layer { Down, Middle, Up }

#[derive(Debug, Clone, Copy)]
struct EdgeLocation {
	layer: Layer,
	side: usize,
	/// The base color is on the Up/Down facelet rather than on the side.
	base_on_top: bool,
}

const EDGE_DOWN: [Move; 1] = [Move::Front2];
const EDGE_DROP: [Move; 3] = {use Move::*; [RightS, DownS, Right]};
const EDGE_INSERT_FLIPPED: [Move; 3] = {use Move::*; [Right, FrontS, RightS]};

impl LayerByLayerSolver {
	pub(super) fn solve_white_cross(&mut self) -> Result<(), SolveError> {
		self.orient_base_up()?;

		for _ in 0..PLACEMENT_ATTEMPTS {
			let unsolved: Vec<_> = (0..4)
				.map(|k| self.side_center(k))
				.filter(|&color| !self.cross_edge_solved(color))
				.collect();
			if unsolved.is_empty() {
				return Ok(());
			}

			let mut best: Option<(_, EdgeLocation)> = None;
			for color in unsolved {
				if let Some(location) = self.locate_edge(color) {
					if best.is_none_or(|(_, best_location)| location.layer < best_location.layer) {
						best = Some((color, location));
					}
				}
			}
			let Some((color, location)) = best else {
				return Ok(());
			};

			let description = format!("{}-{} edge", color.name(), BASE_COLOR.name());
			let target = self.side_of(color)?;
			let k = location.side;
			match location.layer {
				Layer::Up => self.apply(&frame(&EDGE_DOWN, k), &description),
				Layer::Middle => self.apply(&frame(&EDGE_DROP, k), &description),
				Layer::Down if location.base_on_top => {
					self.apply_opt(layer_turn(Axis::D, target + 4 - k), &description);
					self.apply(&frame(&EDGE_DOWN, target), &description);
				}
				Layer::Down => {
					self.apply_opt(layer_turn(Axis::D, target + 5 - k), &description);
					self.apply(&frame(&EDGE_INSERT_FLIPPED, target), &description);
				}
			}
		}
		self.exhausted(PLACEMENT_ATTEMPTS);
		Ok(())
	}

	/// One whole-cube rotation bringing the base color center to Up.
	fn orient_base_up(&mut self) -> Result<(), SolveError> {
		let faces: Vec<Face> = [Face::Up, Face::Down, Face::Front, Face::Back, Face::Left, Face::Right]
			.into_iter()
			.filter(|&face| self.center(face) == BASE_COLOR)
			.collect();
		let rotation = match faces[..] {
			[] => return Err(SolveError::MissingCenter(BASE_COLOR)),
			[_, _, ..] => return Err(SolveError::DuplicateCenter(BASE_COLOR)),
			[Face::Up] => return Ok(()),
			[Face::Down] => Move::X2,
			[Face::Front] => Move::X,
			[Face::Back] => Move::Xs,
			[Face::Left] => Move::Z,
			[Face::Right] => Move::Zs,
		};
		self.apply(&[rotation], "Orient white face up");
		Ok(())
	}

	pub(super) fn cross_edge_solved(&self, color: Color) -> bool {
		match self.side_of(color) {
			Ok(k) => self.colors_at(up_edge(k)) == [BASE_COLOR, color],
			Err(_) => false,
		}
	}

	/// Finds the edge carrying the base color and `color`.
	fn locate_edge(&self, color: Color) -> Option<EdgeLocation> {
		let layers: [(Layer, fn(usize) -> [usize; 2]); 3] = [(Layer::Up, up_edge), (Layer::Middle, mid_edge), (Layer::Down, down_edge)];
		for (layer, slot) in layers {
			for side in 0..4 {
				let [a, b] = self.colors_at(slot(side));
				if (a == BASE_COLOR && b == color) || (a == color && b == BASE_COLOR) {
					return Some(EdgeLocation { layer, side, base_on_top: a == BASE_COLOR });
				}
			}
		}
		None
	}
}



#[cfg(test)]
mod tests {
	use crate::{color::Color, cube::{Face, RubiksCube}, moves::parse_sequence, solver::{LayerByLayerSolver, Stage}};
	use rand::{rngs::StdRng, SeedableRng};

	fn cross_done(solver: &LayerByLayerSolver) -> bool {
		(0..4).all(|k| solver.cross_edge_solved(solver.side_center(k)))
	}

	#[test]
	fn builds_the_cross_after_scrambles() {
		let mut rng = StdRng::seed_from_u64(99);
		for _ in 0..50 {
			let (rc, _) = RubiksCube::new_scrambled(30, &mut rng);
			let mut solver = LayerByLayerSolver::new(&rc);
			solver.stage = Stage::WhiteCross;
			solver.solve_white_cross().unwrap();
			assert_eq!(Color::W, solver.center(Face::Up));
			assert!(cross_done(&solver));
		}
	}

	#[test]
	fn orients_white_up_with_one_rotation() {
		for rotation in ["x2", "x", "x'", "z", "z'", "y"] {
			let mut rc = RubiksCube::new();
			rc.make_moves(&parse_sequence(rotation));
			rc.make_moves(&parse_sequence("R U"));
			let mut solver = LayerByLayerSolver::new(&rc);
			solver.orient_base_up().unwrap();
			assert_eq!(Color::W, solver.center(Face::Up));
			assert!(solver.steps.len() <= 1);
		}
	}
}
