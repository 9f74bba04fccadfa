//! Solving many independent cubes on the rayon thread pool.

use log::info;
use rand::{rngs::StdRng, SeedableRng};
use rayon::iter::{IntoParallelIterator, IntoParallelRefIterator, ParallelIterator};
use serde::Serialize;

use crate::{
	cube::RubiksCube,
	moves::Move,
	solver::{solve, SolverResult},
};



/// Results come back in input order.
pub fn solve_all(cubes: &[RubiksCube]) -> Vec<SolverResult> {
	cubes.par_iter().map(solve).collect()
}

#[derive(Debug, Clone, Serialize)]
pub struct Trial {
	pub seed: u64,
	pub scramble: Vec<Move>,
	pub result: SolverResult,
}

/// Trial `i` scrambles from `seed + i`, so a run can be repeated exactly.
pub fn scramble_and_solve(count: usize, length: usize, seed: u64) -> Vec<Trial> {
	let trials: Vec<Trial> = (0..count as u64)
		.into_par_iter()
		.map(|i| {
			let seed = seed.wrapping_add(i);
			let (rc, scramble) = RubiksCube::new_scrambled(length, &mut StdRng::seed_from_u64(seed));
			Trial { seed, scramble, result: solve(&rc) }
		})
		.collect();
	let stats = BatchStats::from_trials(&trials);
	info!(
		"solved {}/{} scrambles of length {length}, moves min {} max {} mean {:.1}",
		stats.solved, stats.count, stats.min_moves, stats.max_moves, stats.mean_moves,
	);
	trials
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchStats {
	pub count: usize,
	pub solved: usize,
	pub min_moves: usize,
	pub max_moves: usize,
	pub mean_moves: f64,
}

impl BatchStats {
	pub fn from_trials(trials: &[Trial]) -> Self {
		let results: Vec<&SolverResult> = trials.iter().map(|trial| &trial.result).collect();
		Self::from_results(&results)
	}

	/// All zero for an empty batch.
	pub fn from_results(results: &[&SolverResult]) -> Self {
		let counts = || results.iter().map(|result| result.move_count);
		let count = results.len();
		Self {
			count,
			solved: results.iter().filter(|result| result.solved).count(),
			min_moves: counts().min().unwrap_or(0),
			max_moves: counts().max().unwrap_or(0),
			mean_moves: if count == 0 { 0.0 } else { counts().sum::<usize>() as f64 / count as f64 },
		}
	}
}



#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn keeps_input_order() {
		let mut cubes = vec![RubiksCube::new(); 3];
		cubes[1].make_move(Move::Right);
		cubes[2].make_moves(&[Move::Front, Move::Up2]);
		let results = solve_all(&cubes);
		assert_eq!(3, results.len());
		assert_eq!(0, results[0].move_count);
		assert!(results.iter().all(|result| result.solved));
		for (rc, result) in cubes.iter().zip(&results) {
			let mut replay = *rc;
			replay.make_moves(&result.moves());
			assert!(replay.is_solved());
		}
	}

	#[test]
	fn seeded_batches_repeat() {
		let a = scramble_and_solve(8, 20, 1000);
		let b = scramble_and_solve(8, 20, 1000);
		assert_eq!(8, a.len());
		for (x, y) in a.iter().zip(&b) {
			assert_eq!(x.seed, y.seed);
			assert_eq!(x.scramble, y.scramble);
			assert_eq!(x.result, y.result);
		}
		assert_eq!(1003, a[3].seed);
	}

	#[test]
	fn stats() {
		let trials = scramble_and_solve(10, 15, 7);
		let stats = BatchStats::from_trials(&trials);
		assert_eq!(10, stats.count);
		assert_eq!(10, stats.solved);
		assert!(stats.min_moves as f64 <= stats.mean_moves && stats.mean_moves <= stats.max_moves as f64);
		assert!(stats.max_moves < 200);

		let empty = BatchStats::from_trials(&[]);
		assert_eq!(BatchStats { count: 0, solved: 0, min_moves: 0, max_moves: 0, mean_moves: 0.0 }, empty);
	}
}
