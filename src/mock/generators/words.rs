//! Dictionary word, sentence, and phrase generators.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::mock::generators::{capitalize, pick};

const NOUNS: &[&str] = &[
	"anchor", "basket", "bridge", "candle", "canyon", "castle", "compass", "engine", "feather", "forest", "garden", "harbor", "island",
	"kettle", "ladder", "lantern", "meadow", "mirror", "mountain", "orchard", "pebble", "river", "saddle", "shadow", "signal", "timber",
	"valley", "whistle", "window", "wreath",
];

const VERBS: &[&str] = &[
	"balance", "carve", "climb", "drift", "gather", "glide", "grind", "hurl", "mend", "paddle", "polish", "scatter", "sketch", "soar",
	"stack", "stitch", "sweep", "tangle", "trace", "wander", "weave", "whittle",
];

const ADVERBS: &[&str] = &[
	"briskly", "calmly", "eagerly", "gently", "gladly", "loosely", "neatly", "quietly", "rarely", "slowly", "softly", "steadily",
	"swiftly", "warmly", "wildly",
];

const PREPOSITIONS: &[&str] = &["above", "across", "behind", "below", "beneath", "beside", "between", "beyond", "inside", "near", "toward", "under"];

const ADJECTIVES: &[&str] = &[
	"amber", "brittle", "crooked", "dusty", "faded", "gentle", "hollow", "jagged", "mellow", "narrow", "polished", "quiet", "rustic",
	"silent", "sleek", "sturdy", "tidy", "vivid", "weathered", "woven",
];

const LOREM_WORDS: &[&str] = &[
	"lorem", "ipsum", "dolor", "sit", "amet", "consectetur", "adipiscing", "elit", "sed", "eiusmod", "tempor", "incididunt", "labore",
	"dolore", "magna", "aliqua", "enim", "minim", "veniam", "quis", "nostrud", "exercitation", "ullamco", "laboris", "nisi", "aliquip",
	"commodo", "consequat", "duis", "aute",
];

const PHRASES: &[&str] = &[
	"a blessing in disguise",
	"a clean bill of health",
	"a penny for your thoughts",
	"against the clock",
	"back to the drawing board",
	"barking up the wrong tree",
	"beat around the bush",
	"break the ice",
	"burn the midnight oil",
	"cut to the chase",
	"down to the wire",
	"in the same boat",
	"let the cat out of the bag",
	"on thin ice",
	"once in a blue moon",
	"under the weather",
];

const WORD_POOLS: &[&[&str]] = &[NOUNS, VERBS, ADVERBS, PREPOSITIONS, ADJECTIVES];

const SENTENCE_WORDS: usize = 10;

/// Generate a noun.
pub fn noun() -> String {
	pick(NOUNS).to_owned()
}

/// Generate a verb.
pub fn verb() -> String {
	pick(VERBS).to_owned()
}

/// Generate an adverb.
pub fn adverb() -> String {
	pick(ADVERBS).to_owned()
}

/// Generate a preposition.
pub fn preposition() -> String {
	pick(PREPOSITIONS).to_owned()
}

/// Generate an adjective.
pub fn adjective() -> String {
	pick(ADJECTIVES).to_owned()
}

/// Generate a word from any part of speech.
pub fn word() -> String {
	let mut rng = rand::thread_rng();
	WORD_POOLS.choose(&mut rng).copied().map(pick).unwrap_or_default().to_owned()
}

/// Generate a ten word sentence.
pub fn sentence() -> String {
	compose(SENTENCE_WORDS, word, '.')
}

/// Generate a lorem ipsum word.
pub fn lorem_ipsum_word() -> String {
	pick(LOREM_WORDS).to_owned()
}

/// Generate a ten word lorem ipsum sentence.
pub fn lorem_ipsum_sentence() -> String {
	compose(SENTENCE_WORDS, lorem_ipsum_word, '.')
}

/// Generate a short question.
pub fn question() -> String {
	let mut rng = rand::thread_rng();
	compose(rng.gen_range(3..=SENTENCE_WORDS), word, '?')
}

/// Generate a quoted sentence.
pub fn quote() -> String {
	format!("\"{}\"", sentence())
}

/// Generate a common idiomatic phrase.
pub fn phrase() -> String {
	pick(PHRASES).to_owned()
}

fn compose(count: usize, word_fn: fn() -> String, terminator: char) -> String {
	let mut out = String::new();
	for index in 0..count {
		let next = word_fn();
		if index == 0 {
			out.push_str(&capitalize(&next));
		} else {
			out.push(' ');
			out.push_str(&next);
		}
	}
	out.push(terminator);
	out
}
