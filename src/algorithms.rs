//! A few well known named move sequences.

use crate::moves::{parse_sequence, Move};



#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Algorithm {
	pub name: &'static str,
	pub notation: &'static str,
	pub description: &'static str,
}

pub static ALGORITHMS: [Algorithm; 5] = [
	Algorithm { name: "sexy", notation: "R U R' U'", description: "Right hand algorithm - very common" },
	Algorithm { name: "sune", notation: "R U R' U R U2 R'", description: "Orients corners on last layer" },
	Algorithm { name: "antisune", notation: "R U2 R' U' R U' R'", description: "Reverse of Sune algorithm" },
	Algorithm { name: "tperm", notation: "R U R' U' R' F R2 U' R' U' R U R' F'", description: "Swaps two adjacent corners and edges" },
	Algorithm { name: "yperm", notation: "F R U' R' U' R U R' F' R U R' U' R' F R F'", description: "Diagonal corner swap + edge swap" },
];

impl Algorithm {
	pub fn find(name: &str) -> Option<&'static Algorithm> {
		ALGORITHMS.iter().find(|alg| alg.name == name)
	}

	pub fn moves(&self) -> Vec<Move> {
		parse_sequence(self.notation)
	}
}



#[cfg(test)]
mod tests {
	use super::*;
	use crate::cube::RubiksCube;

	/// How many applications bring a solved cube back to solved.
	fn order(alg: &Algorithm) -> usize {
		let moves = alg.moves();
		let mut rc = RubiksCube::new();
		for n in 1..=1260 {
			rc.make_moves(&moves);
			if rc.is_solved() {
				return n;
			}
		}
		panic!("{} never returned to solved", alg.name)
	}

	#[test]
	fn every_token_parses() {
		for alg in ALGORITHMS {
			assert_eq!(alg.notation.split_whitespace().count(), alg.moves().len(), "{}", alg.name);
		}
	}

	#[test]
	fn orders() {
		let orders: Vec<_> = ["sexy", "sune", "tperm", "yperm"]
			.into_iter()
			.map(|name| order(Algorithm::find(name).unwrap()))
			.collect();
		assert_eq!(vec![6, 6, 2, 2], orders);
	}

	#[test]
	fn antisune_undoes_sune() {
		let mut rc = RubiksCube::new();
		rc.make_moves(&Algorithm::find("sune").unwrap().moves());
		rc.make_moves(&Algorithm::find("antisune").unwrap().moves());
		assert!(rc.is_solved());
	}

	#[test]
	fn unknown_name() {
		assert_eq!(None, Algorithm::find("jperm"));
	}
}
