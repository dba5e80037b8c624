//! Person identity and account credential generators.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::mock::generators::{digits, internet, pick};

const FIRST_NAMES: &[&str] = &[
	"Aaliyah", "Amir", "Ana", "Aria", "Camille", "Carlos", "Clara", "Dario", "Elena", "Emil", "Freya", "Gunnar", "Hana", "Ibrahim", "Ingrid",
	"Jamal", "Kenji", "Lena", "Liam", "Mateo", "Mei", "Nadia", "Noah", "Olga", "Priya", "Quentin", "Rosa", "Sofia", "Tomas", "Yusuf",
];

const LAST_NAMES: &[&str] = &[
	"Abbott", "Bauer", "Becker", "Castillo", "Dubois", "Eriksen", "Fischer", "Gallagher", "Haensel", "Ito", "Jensen", "Kovacs", "Larsen",
	"Moreno", "Nakamura", "Okafor", "Petrov", "Quinn", "Rossi", "Silva", "Takahashi", "Ularu", "Vargas", "Weber", "Yamada", "Zielinski",
];

const NAME_PREFIXES: &[&str] = &["Mr.", "Mrs.", "Ms.", "Miss", "Dr."];

const NAME_SUFFIXES: &[&str] = &["Jr.", "Sr.", "I", "II", "III", "IV", "V", "MD", "PhD", "DDS"];

const GENDERS: &[&str] = &["male", "female"];

const PHONE_FORMATS: &[&str] = &["###-###-####", "(###)###-####", "1-###-###-####", "###.###.####"];

const PASSWORD_CHARS: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

const PASSWORD_LEN: usize = 10;

/// Generate a full name.
pub fn name() -> String {
	format!("{} {}", first_name(), last_name())
}

/// Generate an honorific name prefix.
pub fn name_prefix() -> String {
	pick(NAME_PREFIXES).to_owned()
}

/// Generate a name suffix.
pub fn name_suffix() -> String {
	pick(NAME_SUFFIXES).to_owned()
}

/// Generate a first name.
pub fn first_name() -> String {
	pick(FIRST_NAMES).to_owned()
}

/// Generate a last name.
pub fn last_name() -> String {
	pick(LAST_NAMES).to_owned()
}

/// Generate a gender label.
pub fn gender() -> String {
	pick(GENDERS).to_owned()
}

/// Generate a nine digit social security number.
pub fn ssn() -> String {
	let mut rng = rand::thread_rng();
	rng.gen_range(100_000_000..=999_999_999_u32).to_string()
}

/// Generate an email address.
pub fn email() -> String {
	format!("{}{}@{}.{}", first_name(), last_name(), last_name(), internet::domain_suffix()).to_lowercase()
}

/// Generate a ten digit phone number.
pub fn phone() -> String {
	digits(10)
}

/// Generate a phone number in a common display format.
pub fn phone_formatted() -> String {
	replace_with_digits(pick(PHONE_FORMATS))
}

/// Generate an account username.
pub fn username() -> String {
	format!("{}{}", last_name(), digits(4))
}

/// Generate a ten character password of mixed-case letters and digits.
pub fn password() -> String {
	let mut rng = rand::thread_rng();
	(0..PASSWORD_LEN).map(|_| char::from(*PASSWORD_CHARS.choose(&mut rng).unwrap_or(&b'a'))).collect()
}

fn replace_with_digits(pattern: &str) -> String {
	let mut rng = rand::thread_rng();
	pattern.chars().map(|c| if c == '#' { char::from(b'0' + rng.gen_range(0..10)) } else { c }).collect()
}

#[cfg(test)]
mod tests {
	use super::{email, name, password, phone, phone_formatted, ssn, username};

	#[test]
	fn name_is_first_and_last() {
		let full = name();
		assert_eq!(full.split(' ').count(), 2);
	}

	#[test]
	fn ssn_is_nine_digits() {
		let out = ssn();
		assert_eq!(out.len(), 9);
		assert!(out.chars().all(|c| c.is_ascii_digit()));
	}

	#[test]
	fn email_is_lowercase_with_host() {
		let out = email();
		assert_eq!(out, out.to_lowercase());
		let (local, host) = out.split_once('@').expect("email must contain @");
		assert!(!local.is_empty());
		assert!(host.contains('.'));
	}

	#[test]
	fn phone_is_ten_digits() {
		let out = phone();
		assert_eq!(out.len(), 10);
		assert!(out.chars().all(|c| c.is_ascii_digit()));
	}

	#[test]
	fn phone_formatted_fills_every_placeholder() {
		let out = phone_formatted();
		assert!(!out.contains('#'));
		assert!(out.chars().filter(|c| c.is_ascii_digit()).count() >= 10);
	}

	#[test]
	fn username_ends_with_digits() {
		let out = username();
		assert!(out.len() > 4);
		assert!(out[out.len() - 4..].chars().all(|c| c.is_ascii_digit()));
	}

	#[test]
	fn password_is_ten_alphanumerics() {
		for _ in 0..8 {
			let out = password();
			assert_eq!(out.len(), 10);
			assert!(out.chars().all(|c| c.is_ascii_alphanumeric()));
		}
	}
}
