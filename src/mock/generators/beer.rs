//! Beer trivia generators.

use rand::Rng;

use crate::mock::generators::pick;

const HOPS: &[&str] = &[
	"Amarillo", "Cascade", "Centennial", "Chinook", "Citra", "Columbus", "Fuggle", "Galaxy", "Hallertau", "Magnum", "Mosaic", "Nugget",
	"Saaz", "Simcoe", "Tettnang", "Willamette",
];

const MALTS: &[&str] = &[
	"Amber malt", "Biscuit malt", "Black malt", "Caramel malt", "Carapils", "Chocolate malt", "Munich malt", "Pale malt",
	"Roasted barley", "Rye malt", "Smoked malt", "Vienna malt", "Wheat malt",
];

const NAMES: &[&str] = &[
	"Arrogant Bastard Ale", "Bourbon County Stout", "Celebrator Doppelbock", "Dead Guy Ale", "Duvel", "Hop Stoopid", "La Fin Du Monde",
	"Nugget Nectar", "Oak Aged Yeti", "Pliny The Elder", "Racer 5", "Ruination IPA", "Schneider Aventinus", "Stone IPA",
	"Ten Fidy", "Two Hearted Ale",
];

const STYLES: &[&str] = &[
	"Altbier", "Amber Ale", "Barleywine", "Bitter", "Brown Ale", "Dunkelweizen", "Hefeweizen", "India Pale Ale", "Kolsch",
	"Oatmeal Stout", "Pilsner", "Porter", "Saison", "Scotch Ale", "Tripel", "Witbier",
];

const YEASTS: &[&str] = &[
	"1007 - German Ale", "1028 - London Ale", "1056 - American Ale", "1084 - Irish Ale", "1214 - Belgian Abbey", "1272 - American Ale II",
	"1318 - London Ale III", "1388 - Belgian Strong Ale", "1762 - Belgian Abbey II", "2007 - Pilsen Lager", "2112 - California Lager",
	"2206 - Bavarian Lager", "3068 - Weihenstephan Weizen", "3724 - Belgian Saison",
];

/// Generate an alcohol-by-volume figure.
pub fn alcohol() -> String {
	let mut rng = rand::thread_rng();
	format!("{:.1}%", rng.gen_range(2.0..=10.0))
}

/// Generate an extract gravity figure in degrees Balling.
pub fn blg() -> String {
	let mut rng = rand::thread_rng();
	format!("{:.1}°Blg", rng.gen_range(5.0..=20.0))
}

/// Generate a hop variety.
pub fn hop() -> String {
	pick(HOPS).to_owned()
}

/// Generate a bitterness figure.
pub fn ibu() -> String {
	let mut rng = rand::thread_rng();
	format!("{} IBU", rng.gen_range(10..=100))
}

/// Generate a malt variety.
pub fn malt() -> String {
	pick(MALTS).to_owned()
}

/// Generate a beer name.
pub fn name() -> String {
	pick(NAMES).to_owned()
}

/// Generate a beer style.
pub fn style() -> String {
	pick(STYLES).to_owned()
}

/// Generate a yeast strain.
pub fn yeast() -> String {
	pick(YEASTS).to_owned()
}

#[cfg(test)]
mod tests {
	use super::{alcohol, blg, ibu};

	#[test]
	fn alcohol_is_percentage() {
		let out = alcohol();
		assert!(out.ends_with('%'));
		let value: f64 = out.trim_end_matches('%').parse().expect("alcohol must parse");
		assert!((2.0..=10.0).contains(&value));
	}

	#[test]
	fn blg_carries_unit() {
		let out = blg();
		assert!(out.ends_with("°Blg"));
	}

	#[test]
	fn ibu_is_bounded_integer() {
		let out = ibu();
		let value: u32 = out.trim_end_matches(" IBU").parse().expect("ibu must parse");
		assert!((10..=100).contains(&value));
	}
}
