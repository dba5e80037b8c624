//! Color generators.

use rand::Rng;

use crate::mock::generators::pick;

const COLOR_NAMES: &[&str] = &[
	"AliceBlue", "Coral", "Cornsilk", "DarkSlateGray", "Firebrick", "Gainsboro", "Goldenrod", "HoneyDew", "IndianRed", "Lavender",
	"LightSeaGreen", "MediumOrchid", "MistyRose", "PaleTurquoise", "PeachPuff", "RoyalBlue", "SaddleBrown", "SeaShell", "SlateBlue",
	"Thistle", "Tomato", "Wheat",
];

const SAFE_COLORS: &[&str] = &[
	"black", "maroon", "green", "navy", "olive", "purple", "teal", "lime", "blue", "silver", "gray", "yellow", "fuchsia", "aqua", "white",
];

/// Generate a named color.
pub fn color() -> String {
	pick(COLOR_NAMES).to_owned()
}

/// Generate a six digit hex color.
pub fn hex_color() -> String {
	let mut rng = rand::thread_rng();
	format!("#{:06x}", rng.gen_range(0..0x100_0000))
}

/// Generate an `r,g,b` component triple.
pub fn rgb_color() -> String {
	let mut rng = rand::thread_rng();
	format!("{},{},{}", rng.gen_range(0..=255), rng.gen_range(0..=255), rng.gen_range(0..=255))
}

/// Generate a web safe color name.
pub fn safe_color() -> String {
	pick(SAFE_COLORS).to_owned()
}

#[cfg(test)]
mod tests {
	use super::{hex_color, rgb_color, safe_color};

	#[test]
	fn hex_color_is_hash_and_six_hex_digits() {
		for _ in 0..16 {
			let out = hex_color();
			assert_eq!(out.len(), 7);
			assert!(out.starts_with('#'));
			assert!(out[1..].chars().all(|c| c.is_ascii_hexdigit()));
		}
	}

	#[test]
	fn rgb_color_is_three_components_without_trailing_separator() {
		for _ in 0..16 {
			let out = rgb_color();
			assert!(!out.ends_with(','));
			let components: Vec<&str> = out.split(',').collect();
			assert_eq!(components.len(), 3);
			for component in components {
				component.parse::<u8>().expect("component must fit in u8");
			}
		}
	}

	#[test]
	fn safe_color_is_lowercase() {
		let out = safe_color();
		assert_eq!(out, out.to_lowercase());
	}
}
