use rand::{rngs::StdRng, SeedableRng};

use rubiks_cube_lbl::{
	algorithms::Algorithm,
	moves::{invert_sequence, parse_sequence, simplify, ALL_MOVES},
	CubeState, Move, RubiksCube,
};



#[test_log::test]
fn scramble_then_inverse_restores() {
	let mut rng = StdRng::seed_from_u64(12);
	for length in [2, 10, 50] {
		let (mut rc, moves) = RubiksCube::new_scrambled(length, &mut rng);
		assert_eq!(length, moves.len());
		assert!(!rc.is_solved());
		rc.make_moves(&invert_sequence(&moves));
		assert!(rc.is_solved());
	}
}

#[test_log::test]
fn scramble_of_fifty_never_repeats_an_axis() {
	let mut rc = RubiksCube::new();
	let moves = rc.scramble(50, &mut StdRng::seed_from_u64(50));
	assert!(moves.windows(2).all(|pair| !pair[0].same_axis(pair[1])));
}

#[test_log::test]
fn known_identities() {
	let mut rc = RubiksCube::new();
	rc.make_moves(&[Move::Front; 4]);
	assert!(rc.is_solved());

	let sexy = Algorithm::find("sexy").unwrap().moves();
	for _ in 0..6 {
		rc.make_moves(&sexy);
	}
	assert!(rc.is_solved());

	let t_perm = Algorithm::find("tperm").unwrap().moves();
	rc.make_moves(&t_perm);
	rc.make_moves(&t_perm);
	assert!(rc.is_solved());
}

#[test_log::test]
fn simplified_sequence_has_the_same_effect() {
	let mut rng = StdRng::seed_from_u64(9);
	for _ in 0..50 {
		let moves: Vec<Move> = (0..30)
			.map(|_| ALL_MOVES[rand::Rng::random_range(&mut rng, 0..ALL_MOVES.len())])
			.collect();
		let mut a = RubiksCube::new();
		a.make_moves(&moves);
		let mut b = RubiksCube::new();
		let simplified = simplify(&moves);
		assert!(simplified.len() <= moves.len());
		b.make_moves(&simplified);
		assert_eq!(a, b);
	}
}

#[test_log::test]
fn every_move_keeps_nine_of_each_color() {
	let mut rc = RubiksCube::new();
	for move_ in ALL_MOVES {
		rc.make_move(move_);
		rc.get_state().validate().unwrap();
	}
}

#[test_log::test]
fn state_json_round_trip() {
	let (rc, _) = RubiksCube::new_scrambled(20, &mut StdRng::seed_from_u64(1));
	let text = rc.get_state().to_json_pretty().unwrap();
	let state = CubeState::from_json(&text).unwrap();
	assert_eq!(rc, RubiksCube::from_state(&state));
	assert_eq!(text, state.to_json_pretty().unwrap());
}

#[test_log::test]
fn parse_skips_unknown_tokens() {
	assert_eq!(parse_sequence("R U"), parse_sequence("R foo U r"));
}
