//! Postal address and coordinate generators.

use rand::Rng;

use crate::mock::generators::{digits, pick};

const CITIES: &[&str] = &[
	"Arlington", "Bakersfield", "Boulder", "Columbus", "Dayton", "Eugene", "Fresno", "Greensboro", "Hartford", "Irvine", "Lexington",
	"Madison", "Norfolk", "Olympia", "Pasadena", "Raleigh", "Savannah", "Tacoma", "Tulsa", "Wichita",
];

const COUNTRIES: &[&str] = &[
	"Argentina", "Australia", "Brazil", "Canada", "Chile", "Denmark", "Finland", "France", "Germany", "Iceland", "India", "Japan",
	"Kenya", "Mexico", "Netherlands", "New Zealand", "Norway", "Poland", "Portugal", "Spain", "Sweden", "Switzerland",
];

const COUNTRY_ABRS: &[&str] = &[
	"AR", "AU", "BR", "CA", "CL", "DK", "FI", "FR", "DE", "IS", "IN", "JP", "KE", "MX", "NL", "NZ", "NO", "PL", "PT", "ES", "SE", "CH",
];

const STATES: &[&str] = &[
	"Arizona", "California", "Colorado", "Florida", "Georgia", "Illinois", "Indiana", "Kansas", "Kentucky", "Maine", "Michigan",
	"Minnesota", "Montana", "Nevada", "Ohio", "Oregon", "Texas", "Utah", "Vermont", "Wyoming",
];

const STATE_ABRS: &[&str] = &[
	"AZ", "CA", "CO", "FL", "GA", "IL", "IN", "KS", "KY", "ME", "MI", "MN", "MT", "NV", "OH", "OR", "TX", "UT", "VT", "WY",
];

const STREET_NAMES: &[&str] = &[
	"Alder", "Birch", "Cedar", "Chestnut", "Elm", "Hazel", "Hickory", "Juniper", "Laurel", "Magnolia", "Maple", "Oak", "Pine",
	"Poplar", "Rowan", "Spruce", "Sycamore", "Walnut", "Willow",
];

const STREET_PREFIXES: &[&str] = &["North", "East", "West", "South", "New", "Lake", "Port", "Old"];

const STREET_SUFFIXES: &[&str] = &[
	"borough", "burgh", "bury", "chester", "fort", "furt", "haven", "land", "mouth", "port", "shire", "side", "stad", "ton", "town",
	"view", "ville",
];

/// Generate a city name.
pub fn city() -> String {
	pick(CITIES).to_owned()
}

/// Generate a country name.
pub fn country() -> String {
	pick(COUNTRIES).to_owned()
}

/// Generate a two letter country code.
pub fn country_abr() -> String {
	pick(COUNTRY_ABRS).to_owned()
}

/// Generate a state name.
pub fn state() -> String {
	pick(STATES).to_owned()
}

/// Generate a two letter state code.
pub fn state_abr() -> String {
	pick(STATE_ABRS).to_owned()
}

/// Generate a street line with number, optional prefix, and name.
pub fn street() -> String {
	let mut rng = rand::thread_rng();
	if rng.gen_bool(0.5) {
		format!("{} {} {}{}", street_number(), street_prefix(), pick(STREET_NAMES), street_suffix())
	} else {
		format!("{} {}{}", street_number(), pick(STREET_NAMES), street_suffix())
	}
}

/// Generate a street name without number or suffix.
pub fn street_name() -> String {
	pick(STREET_NAMES).to_owned()
}

/// Generate a street number.
pub fn street_number() -> String {
	let mut rng = rand::thread_rng();
	rng.gen_range(1..=99999).to_string()
}

/// Generate a directional street prefix.
pub fn street_prefix() -> String {
	pick(STREET_PREFIXES).to_owned()
}

/// Generate a street suffix fragment.
pub fn street_suffix() -> String {
	pick(STREET_SUFFIXES).to_owned()
}

/// Generate a five digit zip code.
pub fn zip() -> String {
	digits(5)
}

/// Generate a latitude rounded to two decimal places.
pub fn latitude() -> String {
	let mut rng = rand::thread_rng();
	format!("{:.2}", rng.gen_range(-90.0..=90.0))
}

/// Generate a longitude rounded to two decimal places.
pub fn longitude() -> String {
	let mut rng = rand::thread_rng();
	format!("{:.2}", rng.gen_range(-180.0..=180.0))
}

#[cfg(test)]
mod tests {
	use super::{latitude, longitude, street, zip};

	#[test]
	fn zip_is_five_digits() {
		let out = zip();
		assert_eq!(out.len(), 5);
		assert!(out.chars().all(|c| c.is_ascii_digit()));
	}

	#[test]
	fn latitude_stays_in_range() {
		for _ in 0..32 {
			let value: f64 = latitude().parse().expect("latitude must parse");
			assert!((-90.0..=90.0).contains(&value));
		}
	}

	#[test]
	fn longitude_stays_in_range() {
		for _ in 0..32 {
			let value: f64 = longitude().parse().expect("longitude must parse");
			assert!((-180.0..=180.0).contains(&value));
		}
	}

	#[test]
	fn street_starts_with_number() {
		let out = street();
		let number = out.split(' ').next().unwrap_or_default();
		assert!(number.chars().all(|c| c.is_ascii_digit()));
		assert!(!number.is_empty());
	}
}
