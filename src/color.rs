use std::fmt;

use serde::{Deserialize, Serialize};



#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Color {
	#[serde(rename = "white")]  W,
	#[serde(rename = "yellow")] Y,
	#[serde(rename = "red")]    R,
	#[serde(rename = "orange")] O,
	#[serde(rename = "green")]  G,
	#[serde(rename = "blue")]   B,
}
pub const ALL_COLORS: [Color; 6] = {use Color::*; [W, Y, R, O, G, B]};

impl Color {
	/// Capitalized name, as used in solver step descriptions.
	pub fn name(&self) -> &'static str {
		match self {
			Color::W => "White",
			Color::Y => "Yellow",
			Color::R => "Red",
			Color::O => "Orange",
			Color::G => "Green",
			Color::B => "Blue",
		}
	}
}

impl fmt::Display for Color {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.name().to_lowercase())
	}
}



#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn serde_names() {
		assert_eq!("\"orange\"", serde_json::to_string(&Color::O).unwrap());
		assert_eq!(Color::B, serde_json::from_str::<Color>("\"blue\"").unwrap());
		assert!(serde_json::from_str::<Color>("\"Blue\"").is_err());
		assert!(serde_json::from_str::<Color>("\"purple\"").is_err());
	}

	#[test]
	fn all_colors_distinct() {
		let mut colors = ALL_COLORS.to_vec();
		colors.sort();
		colors.dedup();
		assert_eq!(6, colors.len());
	}
}
