//! Seven-stage layer-by-layer solver.
//!
//! Stage 1 puts the base color (white) on Up, stage 3 flips the cube with `x2`
//! so the last layer is on Up for stages 3..=7. Every target color is read from
//! the centers, so any color scheme and any starting orientation works.
//! Each stage is a bounded loop; running out of attempts is logged and the
//! pipeline moves on, success is decided only by the final solved check.

mod cross;
mod first_layer;
mod last_layer;
mod second_layer;
pub(crate) mod slots;

use std::fmt;

use log::{debug, trace, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
	color::Color,
	cube::{Face, RubiksCube},
	moves::Move,
};

use slots::{right_of, SIDES};



/// The color solved first, on the bottom layer.
pub const BASE_COLOR: Color = Color::W;
/// Attempts for the piece placement stages.
pub const PLACEMENT_ATTEMPTS: usize = 20;
/// Attempts for the last-layer stages.
pub const LAST_LAYER_ATTEMPTS: usize = 10;
/// Repetitions of the twist algorithm on one corner.
pub const TWIST_REPETITIONS: usize = 6;
/// Corners visited while orienting, and `U` positions scanned when aligning.
pub const ALIGNMENT_SCAN: usize = 4;



#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Stage {
	#[serde(rename = "White Cross")]             WhiteCross,
	#[serde(rename = "First Layer")]             FirstLayer,
	#[serde(rename = "Second Layer")]            SecondLayer,
	#[serde(rename = "Yellow Cross")]            YellowCross,
	#[serde(rename = "Position Yellow Cross")]   PositionYellowCross,
	#[serde(rename = "Position Yellow Corners")] PositionYellowCorners,
	#[serde(rename = "Orient Yellow Corners")]   OrientYellowCorners,
}
pub const ALL_STAGES: [Stage; 7] = {use Stage::*; [
	WhiteCross, FirstLayer, SecondLayer, YellowCross, PositionYellowCross, PositionYellowCorners, OrientYellowCorners,
]};

impl Stage {
	pub fn label(self) -> &'static str {
		match self {
			Stage::WhiteCross => "White Cross",
			Stage::FirstLayer => "First Layer",
			Stage::SecondLayer => "Second Layer",
			Stage::YellowCross => "Yellow Cross",
			Stage::PositionYellowCross => "Position Yellow Cross",
			Stage::PositionYellowCorners => "Position Yellow Corners",
			Stage::OrientYellowCorners => "Orient Yellow Corners",
		}
	}
}

impl fmt::Display for Stage {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.label())
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolutionStep {
	#[serde(rename = "move")]
	pub move_: Move,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub description: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub stage: Option<Stage>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolverResult {
	pub solved: bool,
	pub steps: Vec<SolutionStep>,
	pub move_count: usize,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub error: Option<String>,
}

impl SolverResult {
	fn new(solved: bool, steps: Vec<SolutionStep>, error: Option<String>) -> Self {
		Self { solved, move_count: steps.len(), steps, error }
	}

	pub fn moves(&self) -> Vec<Move> {
		self.steps.iter().map(|step| step.move_).collect()
	}

	pub fn stage_move_count(&self, stage: Stage) -> usize {
		self.steps.iter().filter(|step| step.stage == Some(stage)).count()
	}
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
	#[error("no center shows {0}")]
	MissingCenter(Color),
	#[error("{0} appears on more than one center")]
	DuplicateCenter(Color),
	#[error("unexpected last-layer pattern with {0} oriented edges")]
	LastLayerPattern(usize),
}



pub fn solve(cube: &RubiksCube) -> SolverResult {
	LayerByLayerSolver::new(cube).solve()
}

/// Owns a private copy of the cube and the steps applied to it so far.
#[derive(Debug, Clone)]
pub struct LayerByLayerSolver {
	cube: RubiksCube,
	steps: Vec<SolutionStep>,
	stage: Stage,
}

impl LayerByLayerSolver {
	pub fn new(cube: &RubiksCube) -> Self {
		Self { cube: *cube, steps: vec![], stage: Stage::WhiteCross }
	}

	pub fn solve(mut self) -> SolverResult {
		if self.cube.is_solved() {
			return SolverResult::new(true, vec![], None);
		}
		match self.run_stages() {
			Ok(()) => {
				let solved = self.cube.is_solved();
				if !solved {
					warn!("finished all stages without solving the cube ({} moves)", self.steps.len());
				}
				SolverResult::new(solved, self.steps, None)
			}
			Err(err) => {
				warn!("solver failed during {}: {err}", self.stage);
				SolverResult::new(false, self.steps, Some(err.to_string()))
			}
		}
	}

	fn run_stages(&mut self) -> Result<(), SolveError> {
		for stage in ALL_STAGES {
			self.stage = stage;
			let before = self.steps.len();
			match stage {
				Stage::WhiteCross => self.solve_white_cross()?,
				Stage::FirstLayer => self.solve_first_layer()?,
				Stage::SecondLayer => self.solve_second_layer()?,
				Stage::YellowCross => self.solve_yellow_cross()?,
				Stage::PositionYellowCross => self.position_yellow_cross()?,
				Stage::PositionYellowCorners => self.position_yellow_corners()?,
				Stage::OrientYellowCorners => self.orient_yellow_corners()?,
			}
			debug!("{stage}: {} moves", self.steps.len() - before);
		}
		Ok(())
	}



	fn apply(&mut self, moves: &[Move], description: &str) {
		for &move_ in moves {
			trace!("{}: {move_} ({description})", self.stage);
			self.cube.make_move(move_);
			self.steps.push(SolutionStep {
				move_,
				description: Some(description.to_string()),
				stage: Some(self.stage),
			});
		}
	}

	fn apply_opt(&mut self, move_: Option<Move>, description: &str) {
		if let Some(move_) = move_ {
			self.apply(&[move_], description);
		}
	}

	fn exhausted(&self, attempts: usize) {
		warn!("{} stopped after {attempts} attempts without completing", self.stage);
	}

	fn color_at(&self, index: usize) -> Color {
		self.cube.facelets()[index]
	}

	fn colors_at<const N: usize>(&self, slot: [usize; N]) -> [Color; N] {
		slot.map(|index| self.color_at(index))
	}

	fn center(&self, face: Face) -> Color {
		self.cube.center(face)
	}

	fn side_center(&self, k: usize) -> Color {
		self.center(SIDES[k])
	}

	/// Index of the side whose center shows `color`.
	fn side_of(&self, color: Color) -> Result<usize, SolveError> {
		(0..4)
			.find(|&k| self.side_center(k) == color)
			.ok_or(SolveError::MissingCenter(color))
	}

	/// Center colors of side `k` and its right neighbour.
	fn slot_colors(&self, k: usize) -> [Color; 2] {
		[self.side_center(k), self.side_center(right_of(k))]
	}
}

/// Same colors regardless of order.
fn same_piece<const N: usize>(mut a: [Color; N], mut b: [Color; N]) -> bool {
	a.sort();
	b.sort();
	a == b
}
