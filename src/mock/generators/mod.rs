//! Synthetic value generators grouped by domain.
//!
//! Every generator draws fresh randomness per call and returns a plain
//! string, so repeated calls for the same marker yield different values.

pub mod address;
pub mod beer;
pub mod car;
pub mod color;
pub mod food;
pub mod internet;
pub mod misc;
pub mod person;
pub mod time;
pub mod words;

use rand::Rng;
use rand::seq::SliceRandom;

/// Draw one entry from a static vocabulary pool.
pub fn pick(pool: &'static [&'static str]) -> &'static str {
	let mut rng = rand::thread_rng();
	pool.choose(&mut rng).copied().unwrap_or("")
}

/// Build a string of `len` random decimal digits.
pub fn digits(len: usize) -> String {
	let mut rng = rand::thread_rng();
	(0..len).map(|_| char::from(b'0' + rng.gen_range(0..10))).collect()
}

/// Upper-case the first character of a word.
pub fn capitalize(word: &str) -> String {
	let mut chars = word.chars();
	match chars.next() {
		Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
		None => String::new(),
	}
}

#[cfg(test)]
mod tests {
	use super::{capitalize, digits, pick};

	#[test]
	fn pick_draws_from_pool() {
		let pool: &[&str] = &["one", "two", "three"];
		for _ in 0..16 {
			assert!(pool.contains(&pick(pool)));
		}
	}

	#[test]
	fn digits_produces_requested_length() {
		let out = digits(8);
		assert_eq!(out.len(), 8);
		assert!(out.chars().all(|c| c.is_ascii_digit()));
	}

	#[test]
	fn digits_zero_is_empty() {
		assert_eq!(digits(0), "");
	}

	#[test]
	fn capitalize_upper_cases_first_char_only() {
		assert_eq!(capitalize("brook"), "Brook");
		assert_eq!(capitalize("Brook"), "Brook");
		assert_eq!(capitalize(""), "");
	}
}
