//! Command line front end for the cube library.

use std::{
	fs,
	path::{Path, PathBuf},
};

use clap::{Parser, Subcommand};
use color_eyre::eyre::{eyre, WrapErr};
use log::LevelFilter;
use rand::{rngs::StdRng, SeedableRng};

use rubiks_cube_lbl::{
	algorithms::ALGORITHMS,
	batch::{scramble_and_solve, BatchStats},
	moves::{format_sequence, simplify, Move},
	solve, CubeState, RubiksCube,
};



/// Scrambles and solves a 3x3x3 cube layer by layer.
#[derive(Parser)]
#[command(name = "rubiks-cube-lbl")]
#[command(version, about, long_about = None)]
struct Cli {
	/// Increase logging verbosity (can be repeated)
	#[arg(short, long, action = clap::ArgAction::Count, global = true)]
	verbose: u8,

	/// Worker threads for batch commands, all cores when omitted
	#[arg(long, global = true)]
	threads: Option<usize>,

	#[command(subcommand)]
	command: Command,
}

#[derive(Subcommand)]
enum Command {
	/// Scramble a solved cube and print the moves and the result.
	Scramble {
		#[arg(short, long, default_value_t = 25)]
		length: usize,
		#[arg(short, long)]
		seed: Option<u64>,
		/// Print the state snapshot as JSON instead of the net.
		#[arg(long)]
		json: bool,
	},
	/// Solve a cube given as moves from solved, or as a JSON state file.
	Solve {
		/// Moves that produce the cube, e.g. "R U' F2".
		#[arg(conflicts_with = "state")]
		moves: Option<String>,
		#[arg(long, value_name = "FILE")]
		state: Option<PathBuf>,
		/// Print the full solver result as JSON.
		#[arg(long)]
		json: bool,
	},
	/// Apply moves to a solved cube and print the net.
	Apply {
		moves: String,
		#[arg(long)]
		json: bool,
	},
	/// Solve many seeded scrambles in parallel and report move counts.
	Stats {
		#[arg(short, long, default_value_t = 1000)]
		count: usize,
		#[arg(short, long, default_value_t = 25)]
		length: usize,
		#[arg(short, long, default_value_t = 0)]
		seed: u64,
		#[arg(long)]
		json: bool,
	},
	/// List the named algorithms.
	Algorithms,
}

fn main() -> color_eyre::Result<()> {
	color_eyre::install()?;
	let cli = Cli::parse();

	env_logger::Builder::new()
		.filter_level(match cli.verbose {
			0 => LevelFilter::Warn,
			1 => LevelFilter::Info,
			2 => LevelFilter::Debug,
			_ => LevelFilter::Trace,
		})
		.parse_default_env()
		.init();

	if let Some(threads) = cli.threads {
		rayon::ThreadPoolBuilder::new()
			.num_threads(threads)
			.build_global()
			.wrap_err_with(|| format!("configuring {threads} worker threads"))?;
	}

	match cli.command {
		Command::Scramble { length, seed, json } => run_scramble(length, seed, json),
		Command::Solve { moves, state, json } => run_solve(moves, state, json),
		Command::Apply { moves, json } => run_apply(&moves, json),
		Command::Stats { count, length, seed, json } => run_stats(count, length, seed, json),
		Command::Algorithms => {
			for alg in &ALGORITHMS {
				println!("{:<9} {:<45} {}", alg.name, alg.notation, alg.description);
			}
			Ok(())
		}
	}
}

fn run_scramble(length: usize, seed: Option<u64>, json: bool) -> color_eyre::Result<()> {
	let mut rng = match seed {
		Some(seed) => StdRng::seed_from_u64(seed),
		None => StdRng::from_os_rng(),
	};
	let (rc, moves) = RubiksCube::new_scrambled(length, &mut rng);
	println!("{}", format_sequence(&moves));
	print_cube(&rc, json)
}

fn read_state(path: &Path) -> color_eyre::Result<RubiksCube> {
	let text = fs::read_to_string(path).wrap_err_with(|| format!("reading {}", path.display()))?;
	let state = CubeState::from_json(&text).wrap_err_with(|| format!("importing {}", path.display()))?;
	state.validate().wrap_err_with(|| format!("checking {}", path.display()))?;
	Ok(RubiksCube::from_state(&state))
}

fn run_solve(moves: Option<String>, state: Option<PathBuf>, json: bool) -> color_eyre::Result<()> {
	let rc = match (moves, state) {
		(_, Some(path)) => read_state(&path)?,
		(Some(moves), None) => cube_from_moves(&moves)?,
		(None, None) => return Err(eyre!("Give either a move sequence or --state FILE")),
	};

	let result = solve(&rc);
	if json {
		println!("{}", serde_json::to_string_pretty(&result)?);
	} else {
		let mut stage = None;
		for step in &result.steps {
			if step.stage != stage {
				stage = step.stage;
				if let Some(stage) = stage {
					println!("{stage}:");
				}
			}
			println!("  {:<3} {}", step.move_.notation(), step.description.as_deref().unwrap_or(""));
		}
		println!("{}", format_sequence(&simplify(&result.moves())));
		println!("solved: {}, moves: {}", result.solved, result.move_count);
	}
	match (result.solved, result.error) {
		(true, _) => Ok(()),
		(false, Some(error)) => Err(eyre!("The cube was not solved: {error}")),
		(false, None) => Err(eyre!("The cube was not solved")),
	}
}

fn run_apply(moves: &str, json: bool) -> color_eyre::Result<()> {
	let rc = cube_from_moves(moves)?;
	print_cube(&rc, json)
}

fn run_stats(count: usize, length: usize, seed: u64, json: bool) -> color_eyre::Result<()> {
	let trials = scramble_and_solve(count, length, seed);
	let stats = BatchStats::from_trials(&trials);
	if json {
		println!("{}", serde_json::to_string_pretty(&stats)?);
	} else {
		println!(
			"solved {}/{}, moves min {} max {} mean {:.1}",
			stats.solved, stats.count, stats.min_moves, stats.max_moves, stats.mean_moves,
		);
	}
	for trial in trials.iter().filter(|trial| !trial.result.solved) {
		eprintln!("seed {} not solved: {}", trial.seed, format_sequence(&trial.scramble));
	}
	Ok(())
}

/// Unknown tokens are an error here rather than skipped.
fn cube_from_moves(moves: &str) -> color_eyre::Result<RubiksCube> {
	let parsed = moves
		.split_whitespace()
		.map(|token| token.parse::<Move>())
		.collect::<Result<Vec<_>, _>>()
		.wrap_err("parsing the move sequence")?;
	let mut rc = RubiksCube::new();
	rc.make_moves(&parsed);
	Ok(rc)
}

fn print_cube(rc: &RubiksCube, json: bool) -> color_eyre::Result<()> {
	if json {
		println!("{}", rc.get_state().to_json_pretty()?);
	} else {
		print!("{rc}");
	}
	Ok(())
}



#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn unknown_token_is_rejected() {
		let err = cube_from_moves("R U Q").unwrap_err();
		assert_eq!("parsing the move sequence", err.to_string());
		assert_eq!(r#"unrecognized move token "Q""#, err.root_cause().to_string());
	}

	#[test]
	fn bad_state_file_keeps_the_cause() {
		let path = std::env::temp_dir().join(format!("rubiks-cube-lbl-{}.json", std::process::id()));
		fs::write(&path, r#"{"front": "#).unwrap();
		let err = read_state(&path).unwrap_err();
		fs::remove_file(&path).unwrap();
		let chain: Vec<String> = err.chain().map(|cause| cause.to_string()).collect();
		assert_eq!(3, chain.len(), "{chain:?}");
		assert!(chain[0].starts_with("importing "));
		assert_eq!("invalid cube state", chain[1]);
		assert!(chain[2].contains("line 1"), "{}", chain[2]);
	}

	#[test]
	fn missing_state_file() {
		let err = read_state(Path::new("/nonexistent/cube.json")).unwrap_err();
		assert_eq!("reading /nonexistent/cube.json", err.to_string());
	}
}
