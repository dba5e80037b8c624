//! Identifier, coin flip, and gamer tag generators.

use rand::Rng;
use uuid::Uuid;

use crate::mock::generators::{capitalize, digits, words};

/// Generate a version 4 UUID.
pub fn uuid() -> String {
	Uuid::new_v4().to_string()
}

/// Generate a coin flip outcome.
pub fn flip_a_coin() -> String {
	let mut rng = rand::thread_rng();
	if rng.gen_bool(0.5) { "Heads" } else { "Tails" }.to_owned()
}

/// Generate a video game handle.
pub fn gamertag() -> String {
	let mut rng = rand::thread_rng();
	let mut tag = format!("{}{}", capitalize(&words::adjective()), capitalize(&words::noun()));
	if rng.gen_bool(0.5) {
		tag.push_str(&digits(2));
	}
	tag
}
