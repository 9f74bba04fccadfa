//! Snapshot of a cube as six named 3x3 color grids, the exchange format for import/export.

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

use crate::color::{Color, ALL_COLORS};



pub type Grid = [[Color; 3]; 3];

/// Exports write plain grids. Imports also take `{"colors": grid}` per face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CubeState {
	#[serde(deserialize_with = "face_grid")]
	pub front: Grid,
	#[serde(deserialize_with = "face_grid")]
	pub back: Grid,
	#[serde(deserialize_with = "face_grid")]
	pub up: Grid,
	#[serde(deserialize_with = "face_grid")]
	pub down: Grid,
	#[serde(deserialize_with = "face_grid")]
	pub left: Grid,
	#[serde(deserialize_with = "face_grid")]
	pub right: Grid,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum FaceRepr {
	Plain(Grid),
	Wrapped { colors: Grid },
}

fn face_grid<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Grid, D::Error> {
	Ok(match FaceRepr::deserialize(deserializer)? {
		FaceRepr::Plain(grid) | FaceRepr::Wrapped { colors: grid } => grid,
	})
}

#[derive(Error, Debug)]
pub enum StateError {
	#[error("invalid cube state")]
	InvalidState(#[source] serde_json::Error),
	#[error("color {color} appears {count} times, expected 9")]
	ColorCount { color: Color, count: usize },
}

impl CubeState {
	pub fn to_json(&self) -> serde_json::Result<String> {
		serde_json::to_string(self)
	}

	pub fn to_json_pretty(&self) -> serde_json::Result<String> {
		serde_json::to_string_pretty(self)
	}

	/// Any parse or shape problem collapses into [`StateError::InvalidState`].
	pub fn from_json(text: &str) -> Result<Self, StateError> {
		serde_json::from_str(text).map_err(StateError::InvalidState)
	}

	/// Grids in the order front, back, up, down, left, right.
	pub fn grids(&self) -> [&Grid; 6] {
		[&self.front, &self.back, &self.up, &self.down, &self.left, &self.right]
	}

	/// Checks that every color occurs exactly nine times.
	/// Importing never calls this, a caller that wants the check runs it before `set_state`.
	pub fn validate(&self) -> Result<(), StateError> {
		let mut counts = [0_usize; 6];
		for color in self.grids().into_iter().flatten().flatten() {
			counts[*color as usize] += 1;
		}
		for color in ALL_COLORS {
			let count = counts[color as usize];
			if count != 9 {
				return Err(StateError::ColorCount { color, count });
			}
		}
		Ok(())
	}
}



#[cfg(test)]
mod tests {
	use super::*;
	use crate::cube::RubiksCube;
	use crate::moves::parse_sequence;

	#[test]
	fn json_round_trip() {
		let mut rc = RubiksCube::new();
		rc.make_moves(&parse_sequence("R U2 F' M E S x"));
		let state = rc.get_state();
		let text = state.to_json().unwrap();
		let parsed = CubeState::from_json(&text).unwrap();
		assert_eq!(state, parsed);
		assert_eq!(text, parsed.to_json().unwrap());
		assert_eq!(rc, RubiksCube::from_state(&parsed));
	}

	#[test]
	fn field_names_and_colors() {
		let text = RubiksCube::new().get_state().to_json().unwrap();
		assert!(text.starts_with(r#"{"front":[["green","green","green"],"#));
		for field in ["\"back\"", "\"up\"", "\"down\"", "\"left\"", "\"right\""] {
			assert!(text.contains(field), "missing {field}");
		}
	}

	#[test]
	fn malformed_input_is_invalid_state() {
		let purple = RubiksCube::new().get_state().to_json().unwrap().replace("green", "purple");
		for text in ["", "not json", r#"{"front": []}"#, purple.as_str()] {
			let err = CubeState::from_json(text).unwrap_err();
			assert!(matches!(err, StateError::InvalidState(_)));
			assert_eq!("invalid cube state", err.to_string());
		}
	}

	#[test]
	fn imports_wrapped_faces() {
		let mut rc = RubiksCube::new();
		rc.make_moves(&parse_sequence("R U' F2 L"));
		let state = rc.get_state();
		let mut value = serde_json::to_value(state).unwrap();
		for grid in value.as_object_mut().unwrap().values_mut() {
			*grid = serde_json::json!({ "colors": grid.take() });
		}
		let wrapped = value.to_string();
		assert_eq!(6, wrapped.matches(r#"{"colors":[["#).count(), "{wrapped}");
		assert_eq!(state, CubeState::from_json(&wrapped).unwrap());
		assert_eq!(state.to_json().unwrap(), CubeState::from_json(&wrapped).unwrap().to_json().unwrap());
	}

	#[test]
	fn mixed_and_bad_wrappers() {
		let plain = serde_json::to_value(RubiksCube::new().get_state()).unwrap();
		let mut mixed = plain.clone();
		mixed["up"] = serde_json::json!({ "colors": plain["up"] });
		assert_eq!(RubiksCube::new().get_state(), CubeState::from_json(&mixed.to_string()).unwrap());

		let mut bad = plain;
		bad["up"] = serde_json::json!({ "colours": bad["up"] });
		assert!(matches!(CubeState::from_json(&bad.to_string()), Err(StateError::InvalidState(_))));
	}

	#[test]
	fn validate_counts_colors() {
		let mut state = RubiksCube::new().get_state();
		assert!(state.validate().is_ok());
		state.front[0][0] = Color::W;
		match state.validate() {
			Err(StateError::ColorCount { color: Color::W, count: 10 }) => {}
			other => panic!("unexpected {other:?}"),
		}
	}
}
