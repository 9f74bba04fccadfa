//! Benchmarks for move application and the layer-by-layer solver.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::{rngs::StdRng, SeedableRng};

use rubiks_cube_lbl::{batch::solve_all, moves::ALL_MOVES, solve, RubiksCube};

/// Applying every one of the 36 moves once.
fn bench_all_moves(c: &mut Criterion) {
	c.bench_function("all_moves", |b| {
		b.iter(|| {
			let mut rc = RubiksCube::new();
			for move_ in ALL_MOVES {
				rc.make_move(black_box(move_));
			}
			rc
		})
	});
}

fn bench_scramble(c: &mut Criterion) {
	let mut rng = StdRng::seed_from_u64(0);
	c.bench_function("scramble_25", |b| {
		b.iter(|| RubiksCube::new_scrambled(black_box(25), &mut rng))
	});
}

fn bench_solve(c: &mut Criterion) {
	let (rc, _) = RubiksCube::new_scrambled(50, &mut StdRng::seed_from_u64(1));
	c.bench_function("solve", |b| {
		b.iter(|| solve(black_box(&rc)))
	});
}

/// Solving 64 cubes on the rayon pool.
fn bench_solve_all(c: &mut Criterion) {
	let cubes: Vec<RubiksCube> = (0..64)
		.map(|seed| RubiksCube::new_scrambled(50, &mut StdRng::seed_from_u64(seed)).0)
		.collect();
	let mut group = c.benchmark_group("batch");
	group.sample_size(20);
	group.bench_function("solve_all_64", |b| {
		b.iter(|| solve_all(black_box(&cubes)))
	});
	group.finish();
}

criterion_group!(benches, bench_all_moves, bench_scramble, bench_solve, bench_solve_all);
criterion_main!(benches);
