//! Named piece positions and the face relabeling that re-targets an algorithm to another side.
//!
//! Sides are indexed in `y` order: 0 front, 1 right, 2 back, 3 left.
//! A clockwise `U` carries the top layer from side `k` to side `k - 1`,
//! a clockwise `D` carries the bottom layer from side `k` to side `k + 1`.

use crate::{
	cube::{idx, Face},
	moves::{Axis, Move, Turn},
};



pub(crate) const SIDES: [Face; 4] = [Face::Front, Face::Right, Face::Back, Face::Left];
const SIDE_AXES: [Axis; 4] = [Axis::F, Axis::R, Axis::B, Axis::L];

pub(crate) fn right_of(k: usize) -> usize {
	(k + 1) % 4
}

/// Top facelet of the up-layer edge above side `k`.
pub(crate) const U_EDGE: [usize; 4] = [idx(Face::Up, 2, 1), idx(Face::Up, 1, 2), idx(Face::Up, 0, 1), idx(Face::Up, 1, 0)];
const D_EDGE: [usize; 4] = [idx(Face::Down, 0, 1), idx(Face::Down, 1, 2), idx(Face::Down, 2, 1), idx(Face::Down, 1, 0)];
/// Top facelet of the up-layer corner between side `k` and side `k + 1`.
pub(crate) const U_CORNER: [usize; 4] = [idx(Face::Up, 2, 2), idx(Face::Up, 0, 2), idx(Face::Up, 0, 0), idx(Face::Up, 2, 0)];
const D_CORNER: [usize; 4] = [idx(Face::Down, 0, 2), idx(Face::Down, 2, 2), idx(Face::Down, 2, 0), idx(Face::Down, 0, 0)];

/// `[top, side]`
pub(crate) fn up_edge(k: usize) -> [usize; 2] {
	[U_EDGE[k], idx(SIDES[k], 0, 1)]
}
/// `[bottom, side]`
pub(crate) fn down_edge(k: usize) -> [usize; 2] {
	[D_EDGE[k], idx(SIDES[k], 2, 1)]
}
/// `[side k, side k + 1]`
pub(crate) fn mid_edge(k: usize) -> [usize; 2] {
	[idx(SIDES[k], 1, 2), idx(SIDES[right_of(k)], 1, 0)]
}
/// `[top, side k, side k + 1]`
pub(crate) fn up_corner(k: usize) -> [usize; 3] {
	[U_CORNER[k], idx(SIDES[k], 0, 2), idx(SIDES[right_of(k)], 0, 0)]
}
/// `[bottom, side k, side k + 1]`
pub(crate) fn down_corner(k: usize) -> [usize; 3] {
	[D_CORNER[k], idx(SIDES[k], 2, 2), idx(SIDES[right_of(k)], 2, 0)]
}



/// Rewrites an algorithm written for the front slot so it acts on side `k`:
/// F R B L become the faces `k`, `k + 1`, `k + 2`, `k + 3` positions further round. U and D stay.
pub(crate) fn frame(alg: &[Move], k: usize) -> Vec<Move> {
	alg.iter()
		.map(|&move_| match SIDE_AXES.iter().position(|&axis| axis == move_.axis()) {
			Some(i) => Move::new(SIDE_AXES[(i + k) % 4], move_.turn()),
			None => move_,
		})
		.collect()
}

/// `quarters` clockwise quarter turns of `axis` as a single move, `None` when it is a multiple of four.
pub(crate) fn layer_turn(axis: Axis, quarters: usize) -> Option<Move> {
	Turn::from_quarter_turns((quarters % 4) as u8).map(|turn| Move::new(axis, turn))
}
